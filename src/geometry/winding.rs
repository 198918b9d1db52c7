//! Polygon face winding definitions

use nalgebra::Vector4;

/// Defines face winding variations. These apply to the vertices as they are viewed from the final image.
///
/// If all triangles of a mesh have the same face winding,
/// then triangles that are facing away from the screen can be skipped since they
/// will have the opposite winding order, since they are viewed from the back. This is known
/// as backface culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    /// Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    ///                   1
    ///                  /|
    ///           A    /  |
    ///         /    /    |
    ///       /    /      | |
    ///     /    /        | |
    ///        /          | |
    ///      /            | V
    ///    /              |
    /// 3 *---------------* 2
    ///       <-------
    /// ```
    Clockwise,
    /// Counter-Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    ///                   1
    ///                  /|
    ///           /    /  |
    ///         /    /    |
    ///       /    /      | A
    ///     V    /        | |
    ///        /          | |
    ///      /            | |
    ///    /              |
    /// 3 *---------------* 2
    ///       ------->
    /// ```
    CounterClockwise
}

/// Twice the signed area of a triangle in normalized device coordinates, where `y` points up.
///
/// Positive for counter-clockwise triangles, negative for clockwise, zero for degenerate ones.
#[inline]
pub fn signed_area(a: &Vector4<f32>, b: &Vector4<f32>, c: &Vector4<f32>) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

impl FaceWinding {
    /// Winding of the triangle with the given signed area, or `None` for zero (or `NaN`) area.
    pub fn from_signed_area(area: f32) -> Option<FaceWinding> {
        if area > 0.0 {
            Some(FaceWinding::CounterClockwise)
        } else if area < 0.0 {
            Some(FaceWinding::Clockwise)
        } else {
            None
        }
    }
}
