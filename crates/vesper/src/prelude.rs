//! Prelude module for Vesper.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use vesper::prelude::*;
//! ```
//!
//! This provides access to:
//! - Text (`Text`, tokenizer configuration, `text_format!`)
//! - Time (`TimeSpan`, `ClockTime`, `DateTime`, clock sources)
//! - Geometry types (`Point`, `Vector2D`, `Size`, `Rect`)

// ============================================================================
// Errors
// ============================================================================

pub use vesper_core::{TextError, TimeError, VesperError};

// ============================================================================
// Text
// ============================================================================

pub use vesper_core::text_format;
pub use vesper_core::{Text, TokenizerBuilder, TokenizerConfig};

// ============================================================================
// Time
// ============================================================================

pub use vesper_core::{ClockTime, DateTime, Temporal, TimeSpan};
pub use vesper_core::{FixedClock, SystemClock, TimeSource};

// ============================================================================
// Geometry
// ============================================================================

#[cfg(feature = "geometry")]
pub use vesper_geometry::{GeometryError, Point, Rect, Rotation, Size, Vector2D};
