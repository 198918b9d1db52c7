//! Shader-stage collaborator interface
//!
//! The rasterizer never runs shaders. It only needs to know the shape and interpolation mode of each vertex
//! output, and which of those outputs each pixel shader input reads.

pub mod attribute;
pub mod signature;

pub use self::attribute::{AttributeKind, AttributeValue, InterpolationMode};
pub use self::signature::{AttributeBinding, AttributeSource, InputAttribute, OutputAttribute,
                          PixelInputLayout, ShaderInput, ShaderLinkage, VertexOutputLayout, SV_POSITION};
