//! Core value types for Vesper.
//!
//! This crate provides the text and time values shared by the scheduling,
//! hotkey and notification layers of the application:
//!
//! - **Text**: An owned, growable string with editing, searching, growable
//!   formatting and quote-aware tokenizing ([`Text`])
//! - **Time**: Durations, times of day and calendar instants built on a common
//!   tick-based [`Moment`](time::Moment) ([`TimeSpan`], [`ClockTime`],
//!   [`DateTime`])
//! - **Clock injection**: "now"-relative queries read through a
//!   [`TimeSource`], so they can be driven by a fixed clock in tests
//!
//! # Text Example
//!
//! ```
//! use vesper_core::{text_format, Text};
//!
//! let mut caption = Text::new();
//! text_format!(caption, "Sleep in {} minutes", 5).unwrap();
//! assert_eq!(caption.find("minutes"), Some(11));
//! ```
//!
//! # Time Example
//!
//! ```
//! use vesper_core::{ClockTime, DateTime, FixedClock, TimeSpan};
//!
//! let clock = FixedClock::new(DateTime::new(2024, 6, 1, 21, 0, 0, 0)?);
//!
//! let mut reminder = DateTime::now_with(&clock);
//! reminder.set_clock_time(ClockTime::new(22, 30, 0, 0));
//! assert!(reminder.is_in_the_future_with(&clock));
//!
//! let remaining: TimeSpan = reminder - DateTime::now_with(&clock);
//! assert_eq!(remaining.total_minutes(), 90);
//! # Ok::<(), vesper_core::VesperError>(())
//! ```

mod error;
pub mod logging;
pub mod text;
pub mod time;

pub use error::{Result, TextError, TextResult, TimeError, TimeResult, VesperError};
pub use text::{Text, TokenizerBuilder, TokenizerConfig, Tokens};
pub use time::{ClockTime, DateTime, FixedClock, SystemClock, Temporal, TimeSource, TimeSpan};

#[doc(hidden)]
pub use tracing as __tracing;
