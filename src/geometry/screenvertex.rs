use nalgebra::Vector4;

use super::clipvertex::{Attributes, ClipSpaceVertex};
use super::Viewport;

/// A vertex after the perspective divide.
///
/// `position` holds `(x/w, y/w, z/w, w)`. The undivided clip-space position is kept alongside it,
/// so that clipping can still work on exact homogeneous coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedVertex {
    /// Normalized device coordinates, with the clip-space `w` retained in the last component
    pub position: Vector4<f32>,
    /// Original clip-space position
    pub clip: Vector4<f32>,
    /// Shader outputs, untouched by the divide
    pub attributes: Attributes,
}

impl ProjectedVertex {
    /// Divides `x`, `y` and `z` by `w`. Attributes are carried over as they are.
    pub fn from_clip(vertex: ClipSpaceVertex) -> ProjectedVertex {
        let ClipSpaceVertex { position: clip, attributes } = vertex;

        let rcp_w = 1.0 / clip.w;

        ProjectedVertex {
            position: Vector4::new(clip.x * rcp_w, clip.y * rcp_w, clip.z * rcp_w, clip.w),
            clip,
            attributes,
        }
    }

    /// Reconstructs the clip-space vertex this was projected from
    pub fn to_clip(&self) -> ClipSpaceVertex {
        ClipSpaceVertex { position: self.clip, attributes: self.attributes.clone() }
    }

    /// Maps the normalized `x` and `y` into pixel space, leaving `z` and `w` for depth and perspective.
    ///
    /// `[-1, 1]` maps onto `[x, x + width]` horizontally and `[y + height, y]` vertically,
    /// since pixel rows count downwards.
    pub fn to_screen(self, viewport: &Viewport) -> ScreenVertex {
        let (x, y, z, w) = (self.position.x, self.position.y, self.position.z, self.position.w);

        ScreenVertex {
            position: Vector4::new(
                viewport.x + (x + 1.0) * viewport.width * 0.5,
                viewport.y + (1.0 - y) * viewport.height * 0.5,
                z,
                w,
            ),
            attributes: self.attributes,
        }
    }
}

/// Defines a vertex and its shader outputs in screen-space, which is what gets scan-converted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenVertex {
    /// Pixel-space `x` and `y`, normalized device `z` and clip-space `w`.
    ///
    /// Similar to `gl_FragCoord`, except that `w` is not yet inverted.
    pub position: Vector4<f32>,
    /// Shader outputs to be interpolated
    pub attributes: Attributes,
}

impl ScreenVertex {
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|e| e.is_finite())
    }
}
