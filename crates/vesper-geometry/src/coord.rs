//! Points and vectors.
//!
//! [`Point`] (a position) and [`Vector2D`] (a displacement) share one
//! implementation, [`Coord`], tagged with a [`Role`]. The role decides the
//! two places where they differ:
//!
//! | Role           | Zero-length normalization | Angle input clamped |
//! |----------------|---------------------------|---------------------|
//! | [`Position`]   | yields the zero point     | no                  |
//! | [`Displacement`] | fails with [`GeometryError::ZeroLength`] | yes |
//!
//! # Example
//!
//! ```
//! use vesper_geometry::{Point, Vector2D};
//!
//! let a = Point::new(1.0, 2.0);
//! assert_eq!(a, Point::new(1.0, 2.0 + 5e-10));
//! assert_ne!(a, Point::new(1.0, 2.0 + 1e-8));
//!
//! assert_eq!(Point::ZERO.normalized(), Point::ZERO);
//! assert!(Vector2D::ZERO.normalized().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{GeometryError, GeometryResult};
use crate::{approx_eq, DEFAULT_EPSILON, LOG_TARGET};

mod sealed {
    pub trait Sealed {}
}

/// How normalization treats a zero-length coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroLengthPolicy {
    /// Return the zero coordinate.
    Zero,
    /// Report [`GeometryError::ZeroLength`].
    Fail,
}

/// The meaning of a [`Coord`]: a position or a displacement.
pub trait Role: sealed::Sealed + Copy + Default + Send + Sync + 'static {
    /// Type name used in debug output.
    const NAME: &'static str;
    /// Behavior of normalization on a zero-length value.
    const ZERO_LENGTH: ZeroLengthPolicy;
    /// Whether the cosine is clamped to `[-1, 1]` before taking an angle.
    const CLAMP_ANGLE: bool;
}

/// Role of a [`Point`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position;

/// Role of a [`Vector2D`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Displacement;

impl sealed::Sealed for Position {}
impl sealed::Sealed for Displacement {}

impl Role for Position {
    const NAME: &'static str = "Point";
    const ZERO_LENGTH: ZeroLengthPolicy = ZeroLengthPolicy::Zero;
    const CLAMP_ANGLE: bool = false;
}

impl Role for Displacement {
    const NAME: &'static str = "Vector2D";
    const ZERO_LENGTH: ZeroLengthPolicy = ZeroLengthPolicy::Fail;
    const CLAMP_ANGLE: bool = true;
}

/// A pair of coordinates with a role.
///
/// Equality and ordering are epsilon tolerant: components closer than
/// [`DEFAULT_EPSILON`] compare equal, and ordering is lexicographic on `x`
/// then `y` using the same check.
#[derive(Clone, Copy, Default)]
pub struct Coord<R: Role> {
    pub x: f64,
    pub y: f64,
    role: PhantomData<R>,
}

/// A position in 2D space.
pub type Point = Coord<Position>;

/// A displacement in 2D space.
pub type Vector2D = Coord<Displacement>;

impl<R: Role> Coord<R> {
    /// The origin / null vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new coordinate pair.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            role: PhantomData,
        }
    }

    const fn with_role<S: Role>(self) -> Coord<S> {
        Coord::new(self.x, self.y)
    }

    /// Compare with an explicit tolerance.
    pub fn approx_eq_eps(self, other: Self, epsilon: f64) -> bool {
        approx_eq(self.x, other.x, epsilon) && approx_eq(self.y, other.y, epsilon)
    }

    /// Check if both components are within [`DEFAULT_EPSILON`] of zero.
    pub fn is_zero(self) -> bool {
        self.approx_eq_eps(Self::ZERO, DEFAULT_EPSILON)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Alias for [`magnitude`](Self::magnitude).
    #[inline]
    pub fn length(self) -> f64 {
        self.magnitude()
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    pub fn manhattan_distance_to(self, other: Self) -> f64 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Rotate around `center` by `angle` radians (positive turns clockwise on a
    /// y-down screen).
    pub fn rotated_around(self, center: Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Self::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    }

    /// Divide both components, reporting a zero divisor as an error.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(self, divisor: f64) -> GeometryResult<Self> {
        if divisor == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Self::new(self.x / divisor, self.y / divisor))
    }

    /// Unit-length copy, applying the role's zero-length policy.
    fn normalize_by_role(self) -> GeometryResult<Self> {
        let len = self.magnitude();
        if len == 0.0 {
            return match R::ZERO_LENGTH {
                ZeroLengthPolicy::Zero => Ok(Self::ZERO),
                ZeroLengthPolicy::Fail => {
                    tracing::debug!(target: LOG_TARGET, kind = R::NAME, "normalizing zero-length value");
                    Err(GeometryError::ZeroLength)
                }
            };
        }
        Ok(Self::new(self.x / len, self.y / len))
    }

    /// Angle in radians between the two directions, via the arccosine of the
    /// dot product of the normalized values.
    fn angle_by_role(self, other: Self) -> GeometryResult<f64> {
        let cos = self.normalize_by_role()?.dot(other.normalize_by_role()?);
        let cos = if R::CLAMP_ANGLE {
            cos.clamp(-1.0, 1.0)
        } else {
            cos
        };
        Ok(cos.acos())
    }

    /// Convert to a glam vector.
    #[inline]
    pub fn to_dvec2(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }
}

impl Point {
    /// Unit-length copy. A zero-length point yields [`Point::ZERO`].
    pub fn normalized(self) -> Point {
        self.normalize_by_role().unwrap_or(Self::ZERO)
    }

    /// Angle in radians between the directions of two points seen from the
    /// origin.
    ///
    /// The cosine is not clamped, so rounding can produce `NaN` for
    /// (anti)parallel inputs.
    pub fn angle_with(self, other: Point) -> f64 {
        self.angle_by_role(other).unwrap_or(f64::NAN)
    }

    /// Reinterpret as a displacement from the origin.
    #[inline]
    pub const fn to_vector(self) -> Vector2D {
        self.with_role()
    }
}

impl Vector2D {
    /// Unit-length copy.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] for a zero-length vector.
    pub fn normalized(self) -> GeometryResult<Vector2D> {
        self.normalize_by_role()
    }

    /// Angle in radians between the two vectors, clamped into `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] if either vector has zero length.
    pub fn angle_to(self, other: Vector2D) -> GeometryResult<f64> {
        self.angle_by_role(other)
    }

    /// Reinterpret as a position relative to the origin.
    #[inline]
    pub const fn to_point(self) -> Point {
        self.with_role()
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<R: Role> fmt::Debug for Coord<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(R::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<R: Role> fmt::Display for Coord<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<R: Role> PartialEq for Coord<R> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(*other, DEFAULT_EPSILON)
    }
}

impl<R: Role> PartialOrd for Coord<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !approx_eq(self.x, other.x, DEFAULT_EPSILON) {
            return self.x.partial_cmp(&other.x);
        }
        if !approx_eq(self.y, other.y, DEFAULT_EPSILON) {
            return self.y.partial_cmp(&other.y);
        }
        Some(Ordering::Equal)
    }
}

impl<R: Role> From<(f64, f64)> for Coord<R> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl<R: Role> From<[f64; 2]> for Coord<R> {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<R: Role> From<glam::DVec2> for Coord<R> {
    fn from(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Point {
    fn from(v: Vector2D) -> Self {
        v.to_point()
    }
}

impl From<Point> for Vector2D {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<R: Role> Add for Coord<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<R: Role> Sub for Coord<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<R: Role> Neg for Coord<R> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<R: Role> Mul<f64> for Coord<R> {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<R: Role> Div<f64> for Coord<R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `divisor` is zero. Use [`Coord::checked_div`] to get an
    /// error instead.
    fn div(self, divisor: f64) -> Self {
        match self.checked_div(divisor) {
            Ok(result) => result,
            Err(err) => panic!("{} / {divisor}: {err}", R::NAME),
        }
    }
}

impl<R: Role> AddAssign for Coord<R> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Role> SubAssign for Coord<R> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: Role> MulAssign<f64> for Coord<R> {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl<R: Role> DivAssign<f64> for Coord<R> {
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn div_assign(&mut self, divisor: f64) {
        *self = *self / divisor;
    }
}

impl Add<Vector2D> for Point {
    type Output = Point;

    fn add(self, rhs: Vector2D) -> Point {
        self + rhs.to_point()
    }
}

impl Sub<Vector2D> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector2D) -> Point {
        self - rhs.to_point()
    }
}

impl AddAssign<Vector2D> for Point {
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = *self + rhs;
    }
}

static_assertions::assert_impl_all!(Point: Send, Sync, Copy);
static_assertions::assert_impl_all!(Vector2D: Send, Sync, Copy);
