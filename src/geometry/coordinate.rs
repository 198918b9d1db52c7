use nalgebra::Vector4;

use crate::utils::{floor_even, saturating_i32};

/// Integer pixel coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Both components are even, as required for the top-left fragment of a quad.
    #[inline]
    pub fn is_quad_aligned(self) -> bool {
        self.x & 1 == 0 && self.y & 1 == 0
    }
}

/// Inclusive integer screen-space bounds
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    #[inline]
    pub fn new(min: Coordinate, max: Coordinate) -> BoundingBox {
        BoundingBox { min, max }
    }

    /// Bounds of three screen-space positions: floor of the minimum and ceiling of the maximum on each axis.
    pub fn of_triangle(a: &Vector4<f32>, b: &Vector4<f32>, c: &Vector4<f32>) -> BoundingBox {
        let min_x = a.x.min(b.x).min(c.x).floor();
        let min_y = a.y.min(b.y).min(c.y).floor();
        let max_x = a.x.max(b.x).max(c.x).ceil();
        let max_y = a.y.max(b.y).max(c.y).ceil();

        BoundingBox {
            min: Coordinate::new(saturating_i32(min_x), saturating_i32(min_y)),
            max: Coordinate::new(saturating_i32(max_x), saturating_i32(max_y)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Overlap of two boxes, which may be empty.
    pub fn intersect(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Coordinate::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Coordinate::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }

    /// The box with its minimum corner rounded down to even coordinates,
    /// so that stepping two pixels at a time visits aligned quads only.
    pub fn quad_aligned(&self) -> BoundingBox {
        BoundingBox {
            min: Coordinate::new(floor_even(self.min.x), floor_even(self.min.y)),
            max: self.max,
        }
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= self.min.x && coord.x <= self.max.x &&
            coord.y >= self.min.y && coord.y <= self.max.y
    }
}
