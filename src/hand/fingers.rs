//! Finger extension classification.
//!
//! Given one frame's [`Hand`], [`FingerCounter`] decides for each digit whether it is held
//! extended, and [`FingerState::count`] turns that into the "how many fingers are up" number.
//! Classification is a pure per-frame computation: no smoothing, no state carried between calls,
//! and identical landmarks always produce identical results.

use nalgebra::distance;

use crate::hand::{Hand, LandmarkIdx};
use crate::iter::zip_exact;

/// The five digits of a hand, in landmark order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers, in [`Finger`] declaration order (thumb first).
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Returns the landmark at the finger's tip.
    pub fn tip(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbTip,
            Finger::Index => LandmarkIdx::IndexFingerTip,
            Finger::Middle => LandmarkIdx::MiddleFingerTip,
            Finger::Ring => LandmarkIdx::RingFingerTip,
            Finger::Pinky => LandmarkIdx::PinkyTip,
        }
    }

    /// Returns the joint landmark directly below the finger's tip segment (the thumb's IP joint,
    /// the PIP joint of every other finger).
    pub fn lower_joint(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbIp,
            Finger::Index => LandmarkIdx::IndexFingerPip,
            Finger::Middle => LandmarkIdx::MiddleFingerPip,
            Finger::Ring => LandmarkIdx::RingFingerPip,
            Finger::Pinky => LandmarkIdx::PinkyPip,
        }
    }
}

/// Per-digit extension flags derived from a single [`Hand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerState {
    extended: [bool; 5],
}

impl FingerState {
    /// Returns whether `finger` was classified as extended.
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.extended[finger as usize]
    }

    /// Returns the number of extended fingers, in `0..=5`.
    ///
    /// Every digit contributes exactly 0 or 1, so the result does not depend on the order the
    /// digits were evaluated in.
    pub fn count(&self) -> u8 {
        self.extended.iter().map(|&ext| ext as u8).sum()
    }

    /// Iterates over all digits and their extension flags.
    pub fn iter(&self) -> impl Iterator<Item = (Finger, bool)> + '_ {
        zip_exact(Finger::ALL, self.extended)
    }
}

/// Classifies which fingers of a [`Hand`] are extended.
///
/// The classifier applies two deliberately different geometric tests:
///
/// - The four non-thumb fingers point predominantly *up* (towards smaller Y) when extended and
///   curl downward otherwise, so comparing the tip's Y coordinate against its PIP joint's is
///   enough. A small margin ([`FingerCounter::set_threshold_y`]) keeps the flag from flickering
///   when tip and joint are nearly level.
/// - The thumb extends *sideways*, and which direction "sideways" is changes with hand rotation
///   and with which side faces the camera. Instead of an axis test, the thumb is considered
///   extended when its tip has moved far enough away from the index finger's MCP joint, measured
///   relative to the wrist-to-index-MCP distance so that hand size and camera distance cancel
///   out ([`FingerCounter::set_thumb_extend_ratio`]).
///
/// Collapsing both tests into one uniform rule loses that anatomical difference; don't.
#[derive(Debug, Clone)]
pub struct FingerCounter {
    thumb_extend_ratio: f32,
    threshold_y: f32,
}

impl Default for FingerCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FingerCounter {
    /// Default scale factor for the thumb's tip-to-palm separation test.
    pub const DEFAULT_THUMB_EXTEND_RATIO: f32 = 0.4;

    /// Default vertical margin for the non-thumb finger tests, in normalized image coordinates.
    pub const DEFAULT_THRESHOLD_Y: f32 = 0.02;

    /// Creates a [`FingerCounter`] using the default thresholds.
    pub fn new() -> Self {
        Self {
            thumb_extend_ratio: Self::DEFAULT_THUMB_EXTEND_RATIO,
            threshold_y: Self::DEFAULT_THRESHOLD_Y,
        }
    }

    /// Sets the thumb sensitivity.
    ///
    /// The thumb counts as extended when its tip-to-index-MCP distance exceeds the
    /// wrist-to-index-MCP distance times `ratio`. Lower values make the thumb count as extended
    /// more readily.
    ///
    /// By default, [`FingerCounter::DEFAULT_THUMB_EXTEND_RATIO`] is used.
    pub fn set_thumb_extend_ratio(&mut self, ratio: f32) {
        self.thumb_extend_ratio = ratio;
    }

    /// Sets the vertical margin used by the non-thumb finger tests.
    ///
    /// A finger counts as extended when its tip sits more than `threshold` above its PIP joint
    /// (in normalized image coordinates). Higher values require more pronounced extension.
    ///
    /// By default, [`FingerCounter::DEFAULT_THRESHOLD_Y`] is used.
    pub fn set_threshold_y(&mut self, threshold: f32) {
        self.threshold_y = threshold;
    }

    /// Classifies every digit of `hand`, returning the per-finger flags.
    ///
    /// Deterministic and side-effect free. Degenerate coordinates (eg. coincident landmarks) are
    /// fine; zero distances simply fail the strict comparisons and classify as not extended.
    pub fn classify(&self, hand: &Hand) -> FingerState {
        let mut extended = [false; 5];

        let thumb_tip = hand.position(LandmarkIdx::ThumbTip);
        let index_mcp = hand.position(LandmarkIdx::IndexFingerMcp);
        let wrist = hand.position(LandmarkIdx::Wrist);
        extended[Finger::Thumb as usize] = distance(&thumb_tip, &index_mcp)
            > distance(&wrist, &index_mcp) * self.thumb_extend_ratio;

        for (finger, ext) in zip_exact(&Finger::ALL[1..], &mut extended[1..]) {
            let tip = hand.position(finger.tip());
            let joint = hand.position(finger.lower_joint());
            // Y grows downward, so an uncurled tip has a *smaller* Y than its joint.
            *ext = joint.y - tip.y > self.threshold_y;
        }

        FingerState { extended }
    }

    /// Returns how many fingers of `hand` are extended, in `0..=5`.
    pub fn count(&self, hand: &Hand) -> u8 {
        self.classify(hand).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::landmark::Position;

    use super::*;

    /// A loosely plausible fist: every fingertip at or below its PIP joint, thumb tip resting on
    /// the index MCP.
    fn fist() -> [Position; 21] {
        let mut pos = [[0.5, 0.7]; 21];
        pos[LandmarkIdx::Wrist as usize] = [0.5, 0.9];
        pos[LandmarkIdx::IndexFingerMcp as usize] = [0.5, 0.5];
        pos[LandmarkIdx::ThumbTip as usize] = [0.5, 0.5];
        for (i, finger) in Finger::ALL[1..].iter().enumerate() {
            let x = 0.44 + 0.06 * i as f32;
            pos[finger.lower_joint() as usize] = [x, 0.45];
            pos[finger.tip() as usize] = [x, 0.55];
        }
        pos
    }

    /// All five fingers clearly extended.
    fn open_hand() -> [Position; 21] {
        let mut pos = fist();
        // Thumb tip a full wrist-to-index-MCP distance away from the index MCP.
        pos[LandmarkIdx::ThumbTip as usize] = [0.1, 0.5];
        for finger in &Finger::ALL[1..] {
            let [x, joint_y] = pos[finger.lower_joint() as usize];
            pos[finger.tip() as usize] = [x, joint_y - 0.1];
        }
        pos
    }

    fn hand(positions: [Position; 21]) -> Hand {
        Hand::from_positions(positions).unwrap()
    }

    #[test]
    fn test_fist() {
        let state = FingerCounter::new().classify(&hand(fist()));
        assert_eq!(state.count(), 0);
        for (_, ext) in state.iter() {
            assert!(!ext);
        }
    }

    #[test]
    fn test_open_hand() {
        let state = FingerCounter::new().classify(&hand(open_hand()));
        assert_eq!(state.count(), 5);
        for (_, ext) in state.iter() {
            assert!(ext);
        }
    }

    #[test]
    fn test_each_finger_in_isolation() {
        // Commutative aggregation: a digit's contribution doesn't depend on the others.
        let counter = FingerCounter::new();
        for finger in Finger::ALL {
            let mut pos = fist();
            match finger {
                Finger::Thumb => {
                    pos[LandmarkIdx::ThumbTip as usize] = [0.1, 0.5];
                }
                _ => {
                    let [x, joint_y] = pos[finger.lower_joint() as usize];
                    pos[finger.tip() as usize] = [x, joint_y - 0.1];
                }
            }
            let state = counter.classify(&hand(pos));
            assert!(state.is_extended(finger), "{finger:?} should be extended");
            assert_eq!(state.count(), 1, "only {finger:?} should be extended");
        }
    }

    #[test]
    fn test_thumb_ratio_boundary() {
        // Exactly representable distances: wrist to index MCP is 1.0, thumb tip 0.25 away from
        // the index MCP, ratio 0.25. The comparison is strict, so "exactly at the boundary" must
        // classify as not extended.
        let mut pos = fist();
        pos[LandmarkIdx::Wrist as usize] = [0.0, 0.0];
        pos[LandmarkIdx::IndexFingerMcp as usize] = [0.0, 1.0];
        pos[LandmarkIdx::ThumbTip as usize] = [0.25, 1.0];

        let mut counter = FingerCounter::new();
        counter.set_thumb_extend_ratio(0.25);
        assert!(!counter.classify(&hand(pos)).is_extended(Finger::Thumb));

        // Any separation beyond the boundary counts.
        pos[LandmarkIdx::ThumbTip as usize] = [0.3125, 1.0];
        assert!(counter.classify(&hand(pos)).is_extended(Finger::Thumb));
    }

    #[test]
    fn test_thumb_default_ratio() {
        let mut pos = fist();
        pos[LandmarkIdx::Wrist as usize] = [0.0, 0.0];
        pos[LandmarkIdx::IndexFingerMcp as usize] = [0.0, 1.0];

        // Well below 0.4 of the hand's own scale: curled.
        pos[LandmarkIdx::ThumbTip as usize] = [0.15, 1.0];
        let counter = FingerCounter::new();
        assert!(!counter.classify(&hand(pos)).is_extended(Finger::Thumb));

        // Well above: extended.
        pos[LandmarkIdx::ThumbTip as usize] = [0.5, 1.0];
        assert!(counter.classify(&hand(pos)).is_extended(Finger::Thumb));
    }

    #[test]
    fn test_threshold_y_boundary() {
        // Same idea as the thumb boundary test: pick exactly representable coordinates so the
        // delta *equals* the threshold, which must not count as extended.
        let mut pos = fist();
        pos[LandmarkIdx::IndexFingerPip as usize] = [0.44, 0.75];
        pos[LandmarkIdx::IndexFingerTip as usize] = [0.44, 0.5];

        let mut counter = FingerCounter::new();
        counter.set_threshold_y(0.25);
        assert!(!counter.classify(&hand(pos)).is_extended(Finger::Index));

        pos[LandmarkIdx::IndexFingerTip as usize] = [0.44, 0.4375];
        assert!(counter.classify(&hand(pos)).is_extended(Finger::Index));
    }

    #[test]
    fn test_threshold_y_default() {
        let mut pos = fist();

        // 0.001 below the default margin: level enough to stay "not extended".
        pos[LandmarkIdx::IndexFingerPip as usize] = [0.44, 0.5];
        pos[LandmarkIdx::IndexFingerTip as usize] = [0.44, 0.481];
        let counter = FingerCounter::new();
        assert!(!counter.classify(&hand(pos)).is_extended(Finger::Index));

        // 0.001 above it: extended.
        pos[LandmarkIdx::IndexFingerTip as usize] = [0.44, 0.479];
        assert!(counter.classify(&hand(pos)).is_extended(Finger::Index));
    }

    #[test]
    fn test_tunables_shift_boundaries() {
        let open = hand(open_hand());

        // Strict enough settings turn an open hand into a fist.
        let mut counter = FingerCounter::new();
        counter.set_thumb_extend_ratio(1.5);
        counter.set_threshold_y(0.2);
        assert_eq!(counter.count(&open), 0);

        // A negative margin counts even curled fingers (the coincident thumb tip still fails
        // its strict comparison against a zero distance).
        let mut counter = FingerCounter::new();
        counter.set_threshold_y(-0.15);
        assert_eq!(counter.count(&hand(fist())), 4);
    }

    #[test]
    fn test_degenerate_coordinates() {
        // All 21 landmarks coincident: every distance and delta is zero, nothing is extended.
        let state = FingerCounter::new().classify(&hand([[0.5, 0.5]; 21]));
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_determinism_on_random_hands() {
        let counter = FingerCounter::new();
        for _ in 0..1000 {
            // Slightly out-of-range coordinates are fair game, estimators produce them too.
            let pos: Vec<Position> = (0..21)
                .map(|_| {
                    [
                        fastrand::f32() * 1.2 - 0.1,
                        fastrand::f32() * 1.2 - 0.1,
                    ]
                })
                .collect();
            let hand = Hand::from_positions(pos).unwrap();

            let state = counter.classify(&hand);
            assert!(state.count() <= 5);
            assert_eq!(state, counter.classify(&hand));
        }
    }
}
