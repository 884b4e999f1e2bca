//! Geometric primitives for force-directed layout.
//!
//! This module provides the planar vector type used for node coordinates and
//! force vectors, plus a bounding box for summarizing a finished layout.
//!
//! # Overview
//!
//! - [`Vec2`] - A 2D vector, used both as a position and as a force
//! - [`Bounds`] - An axis-aligned rectangle spanning a set of positions
//!
//! # Coordinate System
//!
//! Coordinates are unitless and centered on the origin:
//!
//! ```text
//!           +Y
//!            ▲
//!            │
//!   ◄────────┼────────► +X
//!            │
//!            │
//! ```
//!
//! Nothing in the layout engine depends on the orientation of the Y axis, so
//! renderers that use a downward Y axis (SVG, screens) can use the values as-is.

use serde::{Deserialize, Serialize};

/// A 2D vector with `f64` components.
///
/// `Vec2` is an immutable value type: every arithmetic operation returns a new
/// vector and leaves its operands untouched.
///
/// # Examples
///
/// ```
/// # use coulomb_core::geometry::Vec2;
/// let a = Vec2::new(3.0, 4.0);
/// let b = Vec2::new(1.0, 1.0);
///
/// let sum = a.add_vec(b);
/// assert_eq!(sum, Vec2::new(4.0, 5.0));
///
/// assert_eq!(a.norm(), 5.0);
/// assert_eq!(a.scale(2.0), Vec2::new(6.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    /// Creates a new vector with the specified components
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns the x component of the vector
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y component of the vector
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both components are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks that neither component is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another vector to this vector, returning a new vector.
    pub fn add_vec(self, other: Vec2) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another vector from this vector, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use coulomb_core::geometry::Vec2;
    /// let from = Vec2::new(1.0, 2.0);
    /// let to = Vec2::new(4.0, 6.0);
    ///
    /// let delta = to.sub_vec(from);
    /// assert_eq!(delta, Vec2::new(3.0, 4.0));
    /// ```
    pub fn sub_vec(self, other: Vec2) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both components by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the vector pointing in the opposite direction
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Euclidean length of the vector
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared Euclidean length, avoiding the square root
    pub fn norm_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance between two positions
    pub fn distance(self, other: Vec2) -> f64 {
        other.sub_vec(self).norm()
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// Bounds are built incrementally from positions, which makes them handy for
/// reporting the extent of a layout.
///
/// # Examples
///
/// ```
/// # use coulomb_core::geometry::{Bounds, Vec2};
/// let bounds = Bounds::from_point(Vec2::new(-1.0, 2.0))
///     .include(Vec2::new(3.0, -2.0));
///
/// assert_eq!(bounds.width(), 4.0);
/// assert_eq!(bounds.height(), 4.0);
/// assert_eq!(bounds.center(), Vec2::new(1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates zero-sized bounds located at a single point
    pub fn from_point(point: Vec2) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Creates the smallest bounds containing every point, or `None` if the
    /// iterator is empty.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), Self::include))
    }

    /// Returns bounds grown to contain the given point
    pub fn include(self, point: Vec2) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns the minimum corner of the bounds
    pub fn min_point(self) -> Vec2 {
        Vec2::new(self.min_x, self.min_y)
    }

    /// Returns the maximum corner of the bounds
    pub fn max_point(self) -> Vec2 {
        Vec2::new(self.max_x, self.max_y)
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Checks whether a point lies inside the bounds, edges included
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
