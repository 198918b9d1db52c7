//! Shader input/output signatures and the linkage between them.
//!
//! Vertex shader outputs are described once per draw call by a [`VertexOutputLayout`], and the pixel shader's
//! inputs by a [`PixelInputLayout`]. Linking the two resolves every pixel input to a slot in the vertex
//! outputs up front, so the rasterizer only ever indexes attributes during interpolation.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::error::{RasterError, RasterResult};

use super::{AttributeKind, AttributeValue, InterpolationMode};

/// System-value semantic for the fragment's screen position.
pub const SV_POSITION: &str = "SV_Position";

/// Semantics compare case-insensitively, like HLSL.
#[inline]
pub fn semantic_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Description of one vertex shader output attribute
#[derive(Debug, Clone, PartialEq)]
pub struct OutputAttribute {
    pub semantic: Cow<'static, str>,
    pub kind: AttributeKind,
    pub interpolation: InterpolationMode,
}

impl OutputAttribute {
    pub fn new<S>(semantic: S, kind: AttributeKind, interpolation: InterpolationMode) -> OutputAttribute
        where S: Into<Cow<'static, str>> {
        OutputAttribute { semantic: semantic.into(), kind, interpolation }
    }

    pub fn linear<S>(semantic: S, kind: AttributeKind) -> OutputAttribute where S: Into<Cow<'static, str>> {
        OutputAttribute::new(semantic, kind, InterpolationMode::Linear)
    }

    pub fn perspective<S>(semantic: S, kind: AttributeKind) -> OutputAttribute where S: Into<Cow<'static, str>> {
        OutputAttribute::new(semantic, kind, InterpolationMode::Perspective)
    }
}

/// Ordered vertex shader outputs. Every vertex's attributes are stored in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexOutputLayout {
    attributes: Vec<OutputAttribute>,
}

impl VertexOutputLayout {
    pub fn new(attributes: Vec<OutputAttribute>) -> VertexOutputLayout {
        VertexOutputLayout { attributes }
    }

    #[inline]
    pub fn attributes(&self) -> &[OutputAttribute] {
        &self.attributes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Finds the slot of the output with the given semantic
    pub fn find(&self, semantic: &str) -> Option<usize> {
        self.attributes.iter().position(|a| semantic_eq(&a.semantic, semantic))
    }

    /// Checks a vertex's attribute values against this layout.
    ///
    /// `vertex` is only used to identify the offending vertex in the error.
    pub fn check(&self, vertex: usize, values: &[AttributeValue]) -> RasterResult<()> {
        if values.len() != self.attributes.len() {
            return Err(RasterError::AttributeCountMismatch {
                vertex,
                expected: self.attributes.len(),
                found: values.len(),
            });
        }

        for (index, (value, attribute)) in values.iter().zip(&self.attributes).enumerate() {
            if value.kind() != attribute.kind {
                return Err(RasterError::AttributeKindMismatch {
                    vertex,
                    index,
                    expected: attribute.kind,
                    found: value.kind(),
                });
            }
        }

        Ok(())
    }
}

/// Description of one pixel shader input
#[derive(Debug, Clone, PartialEq)]
pub struct InputAttribute {
    pub semantic: Cow<'static, str>,
    pub kind: AttributeKind,
}

impl InputAttribute {
    pub fn new<S>(semantic: S, kind: AttributeKind) -> InputAttribute where S: Into<Cow<'static, str>> {
        InputAttribute { semantic: semantic.into(), kind }
    }
}

/// Ordered pixel shader inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelInputLayout {
    attributes: Vec<InputAttribute>,
}

impl PixelInputLayout {
    pub fn new(attributes: Vec<InputAttribute>) -> PixelInputLayout {
        PixelInputLayout { attributes }
    }

    #[inline]
    pub fn attributes(&self) -> &[InputAttribute] {
        &self.attributes
    }
}

/// Where an interpolated pixel input comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSource {
    /// Vertex output slot
    Vertex(usize),
    /// The fragment's position: pixel centre, depth and `1/w`.
    Position,
}

/// A resolved pixel input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBinding {
    pub source: AttributeSource,
    pub interpolation: InterpolationMode,
}

/// Pixel inputs resolved against the vertex outputs of one draw call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShaderLinkage {
    outputs: VertexOutputLayout,
    bindings: Vec<AttributeBinding>,
}

impl ShaderLinkage {
    /// Binds every vertex output, in order, to the pixel input of the same slot.
    pub fn passthrough(outputs: VertexOutputLayout) -> ShaderLinkage {
        let bindings = outputs.attributes().iter().enumerate().map(|(slot, attribute)| {
            AttributeBinding { source: AttributeSource::Vertex(slot), interpolation: attribute.interpolation }
        }).collect();

        ShaderLinkage { outputs, bindings }
    }

    /// Resolves each pixel input by semantic.
    pub fn link(outputs: VertexOutputLayout, inputs: &PixelInputLayout) -> RasterResult<ShaderLinkage> {
        let mut bindings = Vec::with_capacity(inputs.attributes().len());

        for input in inputs.attributes() {
            if semantic_eq(&input.semantic, SV_POSITION) {
                if input.kind != AttributeKind::Vec4 {
                    return Err(RasterError::SemanticKindMismatch {
                        semantic: input.semantic.to_string(),
                        output: AttributeKind::Vec4,
                        input: input.kind,
                    });
                }

                bindings.push(AttributeBinding {
                    source: AttributeSource::Position,
                    interpolation: InterpolationMode::Linear,
                });

                continue;
            }

            let slot = outputs.find(&input.semantic)
                              .ok_or_else(|| RasterError::MissingSemantic(input.semantic.to_string()))?;

            let output = &outputs.attributes()[slot];

            if output.kind != input.kind {
                return Err(RasterError::SemanticKindMismatch {
                    semantic: input.semantic.to_string(),
                    output: output.kind,
                    input: input.kind,
                });
            }

            bindings.push(AttributeBinding {
                source: AttributeSource::Vertex(slot),
                interpolation: output.interpolation,
            });
        }

        log::debug!("linked {} pixel inputs against {} vertex outputs", bindings.len(), outputs.len());

        Ok(ShaderLinkage { outputs, bindings })
    }

    #[inline]
    pub fn outputs(&self) -> &VertexOutputLayout {
        &self.outputs
    }

    #[inline]
    pub fn bindings(&self) -> &[AttributeBinding] {
        &self.bindings
    }
}

/// Interpolated pixel shader inputs of a single fragment, ordered by pixel input slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShaderInput {
    values: SmallVec<[AttributeValue; 4]>,
}

impl ShaderInput {
    pub fn from_values<I>(values: I) -> ShaderInput where I: IntoIterator<Item=AttributeValue> {
        ShaderInput { values: values.into_iter().collect() }
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<&AttributeValue> {
        self.values.get(slot)
    }

    #[inline]
    pub fn values(&self) -> &[AttributeValue] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
