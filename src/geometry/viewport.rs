use nalgebra::Point2;

use crate::error::{RasterError, RasterResult};
use crate::utils::saturating_i32;

use super::{BoundingBox, Coordinate};

/// Render target region that normalized device coordinates are mapped onto.
///
/// This assumes a viewport in the shape of:
///
/// ```text
/// x,y----------------x+width
///  |                  |
///  |                  |
///  |                  |
///  y+height-----------+
/// ```
///
/// where the y-axis is flipped relative to normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport at the origin with the full `[0, 1]` depth range
    pub fn new(width: f32, height: f32) -> Viewport {
        Viewport { x: 0.0, y: 0.0, width, height, min_depth: 0.0, max_depth: 1.0 }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Viewport {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_depth_range(mut self, min_depth: f32, max_depth: f32) -> Viewport {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> RasterResult<()> {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(RasterError::InvalidViewport("origin must be finite"));
        }

        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return Err(RasterError::InvalidViewport("width and height must be finite and positive"));
        }

        // The last row and column must still leave room to step a whole quad past them
        let addressable = |origin: f32, end: f32| {
            f64::from(origin.floor()) >= f64::from(i32::min_value())
                && f64::from(end.ceil()) <= f64::from(i32::max_value() - 2)
        };

        if !(addressable(self.x, self.x + self.width) && addressable(self.y, self.y + self.height)) {
            return Err(RasterError::InvalidViewport("viewport exceeds addressable pixel range"));
        }

        let in_unit_range = |d: f32| d >= 0.0 && d <= 1.0;

        if !(in_unit_range(self.min_depth) && in_unit_range(self.max_depth)) {
            return Err(RasterError::InvalidViewport("depth range must lie within [0, 1]"));
        }

        if self.min_depth > self.max_depth {
            return Err(RasterError::InvalidViewport("min depth is greater than max depth"));
        }

        Ok(())
    }

    /// Pixel-space centre of the viewport
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Maps a normalized device depth in `[0, 1]` onto the depth range
    #[inline]
    pub fn map_depth(&self, z: f32) -> f32 {
        self.min_depth + z * (self.max_depth - self.min_depth)
    }

    /// Inclusive pixel bounds covered by the viewport
    pub fn pixel_bounds(&self) -> BoundingBox {
        BoundingBox::new(
            Coordinate::new(saturating_i32(self.x.floor()), saturating_i32(self.y.floor())),
            Coordinate::new(saturating_i32((self.x + self.width).ceil()).saturating_sub(1),
                            saturating_i32((self.y + self.height).ceil()).saturating_sub(1)),
        )
    }
}
