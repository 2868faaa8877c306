//! 2D geometry value types for Vesper.
//!
//! Screen-space values used when placing overlays and reminders:
//!
//! - [`Point`] and [`Vector2D`]: positions and displacements sharing one
//!   implementation ([`Coord`]) that differ only in their [`Role`]
//! - [`Size`]: width and height, possibly negative
//! - [`Rect`]: edge-based rectangles that may be inverted, with
//!   intersection, union and rotation about the center
//!
//! All floating-point equality in this crate is tolerant: components closer
//! than [`DEFAULT_EPSILON`] compare equal.
//!
//! # Example
//!
//! ```
//! use vesper_geometry::{Point, Rect, Rotation, Size};
//!
//! let rect = Rect::from_points(Point::new(4.0, 2.0), Point::new(0.0, 0.0));
//! assert!(rect.is_inverted());
//! assert_eq!(rect.width(), 4.0);
//!
//! let turned = rect.rotated_by(Rotation::Clockwise90);
//! assert_eq!(turned.center(), rect.center());
//! assert_eq!(turned.size(), Size::new(2.0, 4.0));
//! ```

pub mod coord;
mod error;
pub mod rect;
pub mod size;

pub use coord::{Coord, Displacement, Point, Position, Role, Vector2D, ZeroLengthPolicy};
pub use error::{GeometryError, GeometryResult};
pub use rect::{Rect, Rotation};
pub use size::Size;

/// Tolerance used by the `PartialEq` implementations in this crate.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Tracing target for geometry events.
pub const LOG_TARGET: &str = "vesper_geometry";

/// Check if `a` and `b` differ by less than `epsilon`.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
