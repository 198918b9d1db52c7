use nalgebra::Vector4;
use smallvec::SmallVec;

use crate::interpolate::Interpolate;
use crate::shader::AttributeValue;

/// Inline storage for a vertex's shader outputs
pub type Attributes = SmallVec<[AttributeValue; 4]>;

/// Defines a vertex and its shader outputs in clip-space, which is produced by the vertex or geometry shader stage.
///
/// The attribute values are ordered as described by the draw call's
/// [`VertexOutputLayout`](../../shader/struct.VertexOutputLayout.html), which also carries their semantics and
/// interpolation modes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipSpaceVertex {
    /// Clip-space vertex position. This isn't very useful to the user unless normalized.
    pub position: Vector4<f32>,
    /// Shader outputs to be interpolated and passed on to the pixel shader
    pub attributes: Attributes,
}

impl ClipSpaceVertex {
    /// Creates a new `ClipSpaceVertex` from the given clip-space position and attributes
    #[inline(always)]
    pub fn new<I>(position: Vector4<f32>, attributes: I) -> ClipSpaceVertex where I: IntoIterator<Item=AttributeValue> {
        ClipSpaceVertex { position, attributes: attributes.into_iter().collect() }
    }

    /// Creates a vertex with no attributes
    #[inline(always)]
    pub fn bare(position: Vector4<f32>) -> ClipSpaceVertex {
        ClipSpaceVertex { position, attributes: Attributes::new() }
    }
}

impl Interpolate for ClipSpaceVertex {
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        ClipSpaceVertex {
            position: Interpolate::barycentric_interpolate(u, &x1.position, v, &x2.position, w, &x3.position),
            attributes: x1.attributes.iter().zip(&x2.attributes).zip(&x3.attributes).map(|((a, b), c)| {
                Interpolate::barycentric_interpolate(u, a, v, b, w, c)
            }).collect(),
        }
    }

    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        ClipSpaceVertex {
            position: Interpolate::linear_interpolate(t, &x1.position, &x2.position),
            attributes: x1.attributes.iter().zip(&x2.attributes).map(|(a, b)| {
                Interpolate::linear_interpolate(t, a, b)
            }).collect(),
        }
    }
}
