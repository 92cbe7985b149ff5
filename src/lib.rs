//! Mudra finger-pose classification library.
//!
//! This crate decides, for a detected hand, which fingers are held extended, and how many. It
//! operates purely on hand landmarks; the landmark estimator producing them is an external
//! collaborator, abstracted as a [`HandSource`]. That keeps the geometry testable with
//! hand-constructed fixtures and leaves camera access, drawing, and inference to the caller.
//!
//! # Coordinates
//!
//! Landmark positions use normalized image coordinates: X points to the right, Y points *down*,
//! and both nominally lie in `0.0..=1.0`. Estimators routinely emit slightly out-of-range values
//! near the image edges; nothing in this crate clamps or rejects them.
//!
//! [`HandSource`]: source::HandSource

use log::LevelFilter;

pub mod counting;
pub mod hand;
pub mod iter;
pub mod landmark;
pub mod source;
pub mod timer;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and Mudra will log at *debug* level; the `RUST_LOG` environment variable can
/// override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
