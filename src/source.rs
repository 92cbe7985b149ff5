//! Sources of per-frame hand data.
//!
//! Landmark estimation is not part of this crate. Whatever produces the landmarks — a CNN
//! landmarker, an IPC bridge to another process, a recording — is plugged in through the
//! [`HandSource`] trait, which models exactly what the classifier needs: zero or more 21-point
//! hands per frame.

use std::collections::VecDeque;

use crate::hand::Hand;

/// A producer of [`Hand`] records, one batch per frame.
pub trait HandSource {
    /// Produces the hands visible in the next frame.
    ///
    /// A frame without any (confidently) detected hands yields an empty [`Vec`]; `Ok(None)` means
    /// the stream has ended and no further frames will follow. Within one frame, hands are
    /// independent detections — no identity is maintained across frames.
    fn next_frame(&mut self) -> anyhow::Result<Option<Vec<Hand>>>;
}

impl<S: HandSource + ?Sized> HandSource for &mut S {
    fn next_frame(&mut self) -> anyhow::Result<Option<Vec<Hand>>> {
        (**self).next_frame()
    }
}

/// A [`HandSource`] replaying a prerecorded sequence of frames.
///
/// Useful for driving the classifier from synthetic fixtures in tests and demos, without any
/// camera or detection model present.
#[derive(Debug, Clone)]
pub struct Scripted {
    frames: VecDeque<Vec<Hand>>,
}

impl Scripted {
    /// Creates a [`Scripted`] source that will play back `frames` in order.
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<Hand>>,
    {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Returns the number of frames that have not been played back yet.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl HandSource for Scripted {
    fn next_frame(&mut self) -> anyhow::Result<Option<Vec<Hand>>> {
        Ok(self.frames.pop_front())
    }
}
