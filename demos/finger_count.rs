//! Plays a short scripted sequence of hand poses through a [`CountingSession`] and prints the
//! per-frame finger counts, standing in for the camera/detector/overlay loop a real application
//! would run.

use mudra::counting::CountingSession;
use mudra::hand::fingers::Finger;
use mudra::hand::{Hand, LandmarkIdx};
use mudra::landmark::Position;
use mudra::source::Scripted;

fn main() -> anyhow::Result<()> {
    mudra::init_logger!();

    let frames = vec![
        vec![],
        vec![fist()],
        vec![peace_sign()],
        vec![open_hand()],
        vec![open_hand(), fist()],
    ];

    let mut session = CountingSession::new(Scripted::new(frames));
    let mut frame = 0u32;
    while let Some(counts) = session.next_counts()? {
        frame += 1;
        if counts.is_empty() {
            println!("frame {frame}: no hands");
        }
        for count in counts {
            println!("frame {frame}: Fingers: {count}");
        }
    }

    Ok(())
}

/// A fist, thumb tucked against the palm.
fn fist() -> Hand {
    let mut pos: [Position; 21] = [[0.5, 0.7]; 21];
    pos[LandmarkIdx::Wrist as usize] = [0.5, 0.9];
    pos[LandmarkIdx::IndexFingerMcp as usize] = [0.5, 0.5];
    pos[LandmarkIdx::ThumbTip as usize] = [0.52, 0.52];
    for (i, finger) in Finger::ALL[1..].iter().enumerate() {
        let x = 0.44 + 0.06 * i as f32;
        pos[finger.lower_joint() as usize] = [x, 0.45];
        pos[finger.tip() as usize] = [x, 0.55];
    }
    Hand::from_positions(pos).expect("fixture has 21 landmarks")
}

/// All five fingers spread.
fn open_hand() -> Hand {
    let mut pos: [Position; 21] = [[0.5, 0.7]; 21];
    pos[LandmarkIdx::Wrist as usize] = [0.5, 0.9];
    pos[LandmarkIdx::IndexFingerMcp as usize] = [0.5, 0.5];
    pos[LandmarkIdx::ThumbTip as usize] = [0.15, 0.55];
    for (i, finger) in Finger::ALL[1..].iter().enumerate() {
        let x = 0.44 + 0.06 * i as f32;
        pos[finger.lower_joint() as usize] = [x, 0.45];
        pos[finger.tip() as usize] = [x, 0.3];
    }
    Hand::from_positions(pos).expect("fixture has 21 landmarks")
}

/// Index and middle finger raised.
fn peace_sign() -> Hand {
    let mut pos: [Position; 21] = [[0.5, 0.7]; 21];
    pos[LandmarkIdx::Wrist as usize] = [0.5, 0.9];
    pos[LandmarkIdx::IndexFingerMcp as usize] = [0.5, 0.5];
    pos[LandmarkIdx::ThumbTip as usize] = [0.52, 0.52];
    for (i, finger) in Finger::ALL[1..].iter().enumerate() {
        let x = 0.44 + 0.06 * i as f32;
        pos[finger.lower_joint() as usize] = [x, 0.45];
        let tip_y = match finger {
            Finger::Index | Finger::Middle => 0.3,
            _ => 0.55,
        };
        pos[finger.tip() as usize] = [x, tip_y];
    }
    Hand::from_positions(pos).expect("fixture has 21 landmarks")
}
