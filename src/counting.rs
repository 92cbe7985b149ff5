//! High-level per-frame finger counting.
//!
//! [`CountingSession`] wires a [`HandSource`] to a [`FingerCounter`] and runs the
//! classify-every-hand step once per frame, the way an interactive camera loop would. Pacing,
//! cancellation, and whatever happens to the resulting counts (overlays, gestures, …) stay with
//! the caller.

use crate::hand::fingers::FingerCounter;
use crate::source::HandSource;
use crate::timer::{FpsCounter, Timer};

/// Drives a [`FingerCounter`] over the frames of a [`HandSource`].
pub struct CountingSession<S: HandSource> {
    source: S,
    counter: FingerCounter,
    t_classify: Timer,
    fps: FpsCounter,
}

impl<S: HandSource> CountingSession<S> {
    /// Creates a session that classifies hands from `source` with default thresholds.
    pub fn new(source: S) -> Self {
        Self::with_counter(source, FingerCounter::new())
    }

    /// Creates a session using a preconfigured [`FingerCounter`].
    pub fn with_counter(source: S, counter: FingerCounter) -> Self {
        Self {
            source,
            counter,
            t_classify: Timer::new("classify"),
            fps: FpsCounter::new("counting"),
        }
    }

    /// Returns the underlying [`FingerCounter`], for adjusting its thresholds mid-stream.
    pub fn counter_mut(&mut self) -> &mut FingerCounter {
        &mut self.counter
    }

    /// Returns profiling timers for this session.
    pub fn timers(&self) -> impl Iterator<Item = &Timer> + '_ {
        [&self.t_classify].into_iter()
    }

    /// Pulls the next frame from the source and counts every hand's extended fingers.
    ///
    /// Returns one count per hand, in the order the source delivered them, or `None` once the
    /// source has ended. Source errors propagate.
    pub fn next_counts(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        let Some(hands) = self.source.next_frame()? else {
            return Ok(None);
        };

        let counter = &self.counter;
        let counts = self
            .t_classify
            .time(|| hands.iter().map(|hand| counter.count(hand)).collect::<Vec<_>>());
        log::trace!("{} hand(s) in frame, counts: {:?}", hands.len(), counts);

        self.fps.tick_with([&self.t_classify]);
        Ok(Some(counts))
    }
}
