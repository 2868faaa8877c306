//! Width and height pairs.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{GeometryError, GeometryResult};
use crate::{approx_eq, DEFAULT_EPSILON};

/// A 2D extent.
///
/// Components may be negative; a size with a non-positive component is
/// [empty](Size::is_empty). Equality is epsilon tolerant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Absolute area, `|width * height|`.
    pub fn area(&self) -> f64 {
        (self.width * self.height).abs()
    }

    /// Check if either component is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Compare with an explicit tolerance.
    pub fn approx_eq_eps(&self, other: &Size, epsilon: f64) -> bool {
        approx_eq(self.width, other.width, epsilon) && approx_eq(self.height, other.height, epsilon)
    }

    /// Check if both components are within epsilon of zero.
    pub fn is_zero(&self) -> bool {
        approx_eq(self.width, 0.0, DEFAULT_EPSILON) && approx_eq(self.height, 0.0, DEFAULT_EPSILON)
    }

    /// Copy with both components made non-negative.
    pub fn normalized(&self) -> Size {
        Self::new(self.width.abs(), self.height.abs())
    }

    /// Divide both components by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(self, divisor: f64) -> GeometryResult<Size> {
        if divisor == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Self::new(self.width / divisor, self.height / divisor))
    }

    /// Divide component-wise by another size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if either component of
    /// `divisor` is zero.
    pub fn checked_div_size(self, divisor: Size) -> GeometryResult<Size> {
        if divisor.width == 0.0 || divisor.height == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Self::new(self.width / divisor.width, self.height / divisor.height))
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, DEFAULT_EPSILON)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

fn unwrap_division(result: GeometryResult<Size>) -> Size {
    match result {
        Ok(size) => size,
        Err(err) => panic!("Size division: {err}"),
    }
}

macro_rules! impl_size_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign_method:ident, $op:tt) => {
        impl $Trait for Size {
            type Output = Size;

            fn $method(self, rhs: Size) -> Size {
                Size::new(self.width $op rhs.width, self.height $op rhs.height)
            }
        }

        impl $Trait<f64> for Size {
            type Output = Size;

            fn $method(self, rhs: f64) -> Size {
                Size::new(self.width $op rhs, self.height $op rhs)
            }
        }

        impl $AssignTrait for Size {
            fn $assign_method(&mut self, rhs: Size) {
                *self = *self $op rhs;
            }
        }

        impl $AssignTrait<f64> for Size {
            fn $assign_method(&mut self, rhs: f64) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_size_op!(Add, add, AddAssign, add_assign, +);
impl_size_op!(Sub, sub, SubAssign, sub_assign, -);
impl_size_op!(Mul, mul, MulAssign, mul_assign, *);

impl Div for Size {
    type Output = Size;

    /// # Panics
    ///
    /// Panics if either component of `rhs` is zero.
    fn div(self, rhs: Size) -> Size {
        unwrap_division(self.checked_div_size(rhs))
    }
}

impl Div<f64> for Size {
    type Output = Size;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: f64) -> Size {
        unwrap_division(self.checked_div(rhs))
    }
}

impl DivAssign for Size {
    fn div_assign(&mut self, rhs: Size) {
        *self = *self / rhs;
    }
}

impl DivAssign<f64> for Size {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
