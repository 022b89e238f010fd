//! Exercise 6.1: A Vector Type
//!
//! A vector in two-dimensional space with `plus`, `minus` and a `length`
//! (distance from the origin). The arithmetic is also available through the
//! `+` and `-` operators.

use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    pub fn plus(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn minus(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    /// Distance from the origin, `sqrt(x² + y²)`.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        self.plus(other)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        self.minus(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus() {
        assert_eq!(Vector::new(1.0, 2.0).plus(Vector::new(2.0, 3.0)), Vector::new(3.0, 5.0));
    }

    #[test]
    fn test_minus() {
        assert_eq!(
            Vector::new(1.0, 2.0).minus(Vector::new(2.0, 3.0)),
            Vector::new(-1.0, -1.0)
        );
    }

    #[test]
    fn test_length() {
        assert_eq!(Vector::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector::default().length(), 0.0);
    }

    #[test]
    fn test_operators_match_methods() {
        let a = Vector::new(1.5, -2.0);
        let b = Vector::new(0.5, 4.0);
        assert_eq!(a + b, a.plus(b));
        assert_eq!(a - b, a.minus(b));
        assert_eq!((a + b) - b, a);
    }
}
