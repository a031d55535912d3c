//! A two-dimensional Euclidean vector with operator support.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};
use core::str::FromStr;

use crate::error::VectorError;

#[cfg(feature = "std")]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// A pair of coordinates with value semantics.
///
/// Arithmetic always produces a new vector and leaves both operands as
/// they were. The [`Display`](fmt::Display) form is the construction
/// expression, and parses back with [`FromStr`]:
///
/// ```
/// use datamodel::Vector;
///
/// let v = Vector::new(3.0, 4.0);
/// assert_eq!(v.to_string(), "Vector(3,4)");
/// assert_eq!("Vector(3,4)".parse::<Vector>(), Ok(v));
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!((v * 3.0).magnitude(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm, `sqrt(x² + y²)`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        hypot(self.x, self.y)
    }

    /// Returns `false` for the zero vector and `true` otherwise.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.magnitude() != 0.0
    }

    /// Multiplies both coordinates by `scalar`.
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + -other
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector.scale(self)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match *components {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(VectorError::InvalidOperand {
                expected: 2,
                found: components.len(),
            }),
        }
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector {
    /// Writes the construction expression; integral coordinates print without a fraction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({},{})", self.x, self.y)
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("Vector(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(VectorError::Parse)?;
        let (x, y) = body.split_once(',').ok_or(VectorError::Parse)?;
        let x = x.trim().parse().map_err(|_| VectorError::Parse)?;
        let y = y.trim().parse().map_err(|_| VectorError::Parse)?;
        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_drops_integral_fraction() {
        assert_eq!(alloc::format!("{}", Vector::new(3.0, 4.0)), "Vector(3,4)");
        assert_eq!(alloc::format!("{}", Vector::new(0.5, -2.0)), "Vector(0.5,-2)");
        assert_eq!(alloc::format!("{}", Vector::default()), "Vector(0,0)");
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!("Vector(1)".parse::<Vector>(), Err(VectorError::Parse));
        assert_eq!("Vec(1,2)".parse::<Vector>(), Err(VectorError::Parse));
        assert_eq!("Vector(a,2)".parse::<Vector>(), Err(VectorError::Parse));
        assert_eq!(" Vector( 1 , 2 ) ".parse::<Vector>(), Ok(Vector::new(1.0, 2.0)));
    }
}
