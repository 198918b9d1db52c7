use crate::shader::AttributeKind;

/// Contract violations reported before any rasterization work is done.
///
/// Degenerate geometry is never an error. It is culled or skipped silently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RasterError {
    #[error("{0} vertices is invalid for a triangle list")]
    InvalidVertexCount(usize),
    #[error("No viewport has been set")]
    ViewportNotSet,
    #[error("Invalid viewport: {0}")]
    InvalidViewport(&'static str),
    #[error("Multisample count {0} is not supported (expected 1..={max})", max = crate::multisample::MAX_MULTISAMPLE_COUNT)]
    InvalidMultisampleCount(u32),
    #[error("Wireframe width must be finite and positive, got {0}")]
    InvalidWireframeWidth(f32),
    #[error("Unsupported fill mode value {0}")]
    UnsupportedFillMode(u32),
    #[error("Unsupported cull mode value {0}")]
    UnsupportedCullMode(u32),
    #[error("Unknown mode name {0:?}")]
    UnknownModeName(String),
    #[error("Vertex {vertex} has {found} attributes but the vertex output layout declares {expected}")]
    AttributeCountMismatch { vertex: usize, expected: usize, found: usize },
    #[error("Vertex {vertex} attribute {index} is {found:?} but the vertex output layout declares {expected:?}")]
    AttributeKindMismatch { vertex: usize, index: usize, expected: AttributeKind, found: AttributeKind },
    #[error("Pixel shader input {0:?} has no matching vertex shader output")]
    MissingSemantic(String),
    #[error("Semantic {semantic:?} is {output:?} in the vertex outputs but {input:?} in the pixel inputs")]
    SemanticKindMismatch { semantic: String, output: AttributeKind, input: AttributeKind },
}

pub type RasterResult<T> = Result<T, RasterError>;
