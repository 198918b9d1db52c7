//! Scan conversion of screen-space triangles into fragment quads

pub mod triangle;
pub mod quad;

use crate::geometry::{BoundingBox, Viewport};
use crate::pipeline::state::RasterizerState;
use crate::shader::ShaderLinkage;

/// Draw-call configuration shared by every triangle of a draw.
///
/// Frozen for the lifetime of a draw, so it can be shared freely between worker threads.
#[derive(Debug, Clone, Copy)]
pub struct RasterContext<'a> {
    pub state: &'a RasterizerState,
    pub viewport: &'a Viewport,
    pub linkage: &'a ShaderLinkage,
    /// Pixels addressable by this draw
    pub bounds: BoundingBox,
}

impl<'a> RasterContext<'a> {
    pub fn new(state: &'a RasterizerState, viewport: &'a Viewport, linkage: &'a ShaderLinkage) -> RasterContext<'a> {
        RasterContext { state, viewport, linkage, bounds: viewport.pixel_bounds() }
    }
}

pub use self::triangle::{TriangleSetup, edge_function};
pub use self::quad::QuadWalker;
