//! Hand landmark records and per-finger classification.

pub mod fingers;

use nalgebra::Point2;
use thiserror::Error;

use crate::landmark::{Landmark, Landmarks, Position};

/// Names for the hand pose landmarks.
///
/// `LandmarkIdx as usize` yields the anatomical index used by MediaPipe-style hand landmarkers:
/// wrist at 0, thumb along 1..=4, then MCP/PIP/DIP/Tip quadruples for the remaining fingers up to
/// index 20.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Landmark pairs forming the hand skeleton.
///
/// Useful for overlay renderers; nothing in this crate draws anything itself.
pub const CONNECTIVITY: &[(LandmarkIdx, LandmarkIdx)] = {
    use LandmarkIdx::*;
    &[
        // Surround the palm:
        (Wrist, ThumbCmc),
        (ThumbCmc, IndexFingerMcp),
        (IndexFingerMcp, MiddleFingerMcp),
        (MiddleFingerMcp, RingFingerMcp),
        (RingFingerMcp, PinkyMcp),
        (PinkyMcp, Wrist),
        // Thumb:
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index:
        (IndexFingerMcp, IndexFingerPip),
        (IndexFingerPip, IndexFingerDip),
        (IndexFingerDip, IndexFingerTip),
        // Middle:
        (MiddleFingerMcp, MiddleFingerPip),
        (MiddleFingerPip, MiddleFingerDip),
        (MiddleFingerDip, MiddleFingerTip),
        // Ring:
        (RingFingerMcp, RingFingerPip),
        (RingFingerPip, RingFingerDip),
        (RingFingerDip, RingFingerTip),
        // Pinky:
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

/// Error returned when constructing a [`Hand`] from the wrong number of landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 21 hand landmarks, got {actual}")]
pub struct InvalidLandmarkCount {
    actual: usize,
}

impl InvalidLandmarkCount {
    /// Returns the number of landmarks that was actually supplied.
    pub fn actual(&self) -> usize {
        self.actual
    }
}

/// One detected hand: exactly [`Hand::NUM_LANDMARKS`] landmarks in anatomical order.
///
/// A [`Hand`] is produced fresh for every frame by the landmark estimator feeding this crate.
/// Classification never mutates or retains it, and two hands from subsequent frames carry no
/// identity relation.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    landmarks: Landmarks,
}

impl Hand {
    /// The number of landmarks in every hand record.
    pub const NUM_LANDMARKS: usize = 21;

    /// Creates a [`Hand`] from a [`Landmarks`] collection.
    ///
    /// The collection must contain exactly [`Hand::NUM_LANDMARKS`] entries in the order described
    /// by [`LandmarkIdx`]. Any other length is rejected before any coordinate is looked at.
    pub fn from_landmarks(landmarks: Landmarks) -> Result<Self, InvalidLandmarkCount> {
        if landmarks.len() != Self::NUM_LANDMARKS {
            return Err(InvalidLandmarkCount {
                actual: landmarks.len(),
            });
        }

        Ok(Self { landmarks })
    }

    /// Creates a [`Hand`] from an iterator of positions in [`LandmarkIdx`] order.
    pub fn from_positions<I>(positions: I) -> Result<Self, InvalidLandmarkCount>
    where
        I: IntoIterator<Item = Position>,
    {
        Self::from_landmarks(positions.into_iter().collect())
    }

    /// Returns the underlying landmark collection.
    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }

    /// Returns the landmark at `idx`.
    pub fn get(&self, idx: LandmarkIdx) -> Landmark {
        self.landmarks.get(idx as usize)
    }

    /// Returns the position of the landmark at `idx` as a [`Point2`].
    pub fn position(&self, idx: LandmarkIdx) -> Point2<f32> {
        let [x, y] = self.landmarks.positions()[idx as usize];
        Point2::new(x, y)
    }
}
