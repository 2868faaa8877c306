//! Vesper - value types for a desktop scheduling and reminder tool.
//!
//! This is the umbrella crate that re-exports all public APIs.
//!
//! # Example
//!
//! ```
//! use vesper::prelude::*;
//!
//! let clock = FixedClock::new(DateTime::new(2024, 3, 10, 23, 0, 0, 0)?);
//! let mut wake = DateTime::now_with(&clock);
//! wake += TimeSpan::from_hours(8);
//!
//! let command = Text::from("notify \"good morning\"").tokenize("");
//! assert_eq!(command, ["notify", "good morning"]);
//! assert_eq!(wake.day(), 11);
//! # Ok::<(), vesper::VesperError>(())
//! ```

pub mod prelude;

pub use vesper_core::*;

/// 2D geometry module.
#[cfg(feature = "geometry")]
pub mod geometry {
    pub use vesper_geometry::*;
}
