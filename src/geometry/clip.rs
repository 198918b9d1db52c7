//! Clipping planes

use nalgebra::Vector4;

use crate::interpolate::Interpolate;

use super::ClipSpaceVertex;

/// The six planes bounding the canonical view volume `-w <= x <= w`, `-w <= y <= w`, `0 <= z <= w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClippingPlane {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

/// All clipping planes in a static array. Useful for iterating over all of them.
pub static ALL_CLIPPING_PLANES: [ClippingPlane; 6] = [
    ClippingPlane::Left,
    ClippingPlane::Right,
    ClippingPlane::Bottom,
    ClippingPlane::Top,
    ClippingPlane::Near,
    ClippingPlane::Far
];

/// The clipping planes that remain when depth clipping is disabled
pub static SIDE_CLIPPING_PLANES: [ClippingPlane; 4] = [
    ClippingPlane::Left,
    ClippingPlane::Right,
    ClippingPlane::Bottom,
    ClippingPlane::Top,
];

impl ClippingPlane {
    /// Signed distance of a clip-space position to the plane, scaled by `w`. Non-negative means inside.
    #[inline]
    pub fn distance(self, position: &Vector4<f32>) -> f32 {
        let (x, y, z, w) = (position.x, position.y, position.z, position.w);

        match self {
            ClippingPlane::Left => w + x,
            ClippingPlane::Right => w - x,
            ClippingPlane::Bottom => w + y,
            ClippingPlane::Top => w - y,
            ClippingPlane::Near => z,
            ClippingPlane::Far => w - z,
        }
    }

    /// Check if the clipping plane has the given clip-space point inside of it
    #[inline]
    pub fn has_inside(self, position: &Vector4<f32>) -> bool {
        self.distance(position) >= 0.0
    }

    /// Find the intersection of a line and the clipping plane.
    ///
    /// Position and attributes are interpolated linearly along the edge in clip space.
    #[inline]
    pub fn intersect(self, v1: &ClipSpaceVertex, v2: &ClipSpaceVertex) -> ClipSpaceVertex {
        let a = self.distance(&v1.position);
        let b = self.distance(&v2.position);

        let t = a / (a - b);

        Interpolate::linear_interpolate(t, v1, v2)
    }
}
