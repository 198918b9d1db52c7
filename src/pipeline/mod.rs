//! Rasterization pipeline: perspective divide, clipping, culling, screen mapping and scan conversion
//!
//! The stages are pull iterators chained together by [`Rasterizer::rasterize`](struct.Rasterizer.html#method.rasterize),
//! so a draw call buffers at most one triangle at a time between stages.

use std::iter::Cloned;
use std::slice::Iter;

use crate::error::{RasterError, RasterResult};
use crate::geometry::{ClipSpaceVertex, ScreenVertex, TriangleAssembler, Viewport};
use crate::shader::{PixelInputLayout, ShaderLinkage, VertexOutputLayout};

pub mod state;
pub mod fragment;
pub mod stages;

pub use self::state::{CullMode, FillMode, FillConvention, RasterizerState};
pub use self::fragment::{Fragment, FragmentQuad, QuadLocation, Sample, QUAD_LOCATIONS};
pub use self::stages::{PerspectiveDivider, Clipper, Culler, ScreenMapper};
pub use self::stages::rasterization::{QuadWalker, RasterContext, TriangleSetup};

use self::stages::{Clip, Cull, PerspectiveDivide, ScreenMap};

/// Screen-space vertex stream of a draw call, grouped implicitly in triangles
pub type ScreenVertices<'v> = ScreenMap<Cull<Clip<PerspectiveDivide<Cloned<Iter<'v, ClipSpaceVertex>>>>>>;

/// Converts clip-space triangles into fragment quads.
///
/// Holds the configuration of a draw call. Changing it requires `&mut self`,
/// so it can't change while a draw is in progress.
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    state: RasterizerState,
    viewport: Option<Viewport>,
    linkage: ShaderLinkage,
}

impl Rasterizer {
    pub fn new(state: RasterizerState) -> Rasterizer {
        Rasterizer { state, viewport: None, linkage: ShaderLinkage::default() }
    }

    #[inline]
    pub fn state(&self) -> &RasterizerState {
        &self.state
    }

    pub fn set_state(&mut self, state: RasterizerState) {
        self.state = state;
    }

    #[inline]
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    #[inline]
    pub fn linkage(&self) -> &ShaderLinkage {
        &self.linkage
    }

    pub fn set_linkage(&mut self, linkage: ShaderLinkage) {
        self.linkage = linkage;
    }

    /// Uses the vertex outputs directly as pixel inputs, slot for slot.
    pub fn set_output_layout(&mut self, outputs: VertexOutputLayout) {
        self.linkage = ShaderLinkage::passthrough(outputs);
    }

    /// Links pixel inputs to vertex outputs by semantic. The previous linkage is kept on failure.
    pub fn link(&mut self, outputs: VertexOutputLayout, inputs: &PixelInputLayout) -> RasterResult<()> {
        self.linkage = ShaderLinkage::link(outputs, inputs)?;

        Ok(())
    }

    /// Checks every precondition of a draw call, returning the frozen draw configuration.
    pub fn prepare(&self, vertices: &[ClipSpaceVertex]) -> RasterResult<RasterContext<'_>> {
        if vertices.len() % 3 != 0 {
            return Err(RasterError::InvalidVertexCount(vertices.len()));
        }

        let viewport = self.viewport.as_ref().ok_or(RasterError::ViewportNotSet)?;

        viewport.validate()?;
        self.state.validate()?;

        let outputs = self.linkage.outputs();

        for (i, vertex) in vertices.iter().enumerate() {
            outputs.check(i, &vertex.attributes)?;
        }

        log::debug!("rasterizing {} triangles: {:?} cull, {:?} fill, {:?} convention, {} samples",
                    vertices.len() / 3,
                    self.state.cull_mode,
                    self.state.fill_mode,
                    self.state.fill_convention,
                    self.state.multisample_count);

        Ok(RasterContext::new(&self.state, viewport, &self.linkage))
    }

    /// Runs the geometric stages, yielding the screen-space vertices of every surviving triangle.
    pub fn screen_vertices<'a>(&'a self, vertices: &'a [ClipSpaceVertex]) -> RasterResult<(RasterContext<'a>, ScreenVertices<'a>)> {
        let context = self.prepare(vertices)?;

        let projected = PerspectiveDivider.process(vertices.iter().cloned());
        let clipped = Clipper::new(self.state.depth_clip).process(projected);
        let culled = Culler::new(self.state.cull_mode).process(clipped);
        let mapped = ScreenMapper::new(*context.viewport).process(culled);

        Ok((context, mapped))
    }

    /// Rasterizes a triangle list.
    ///
    /// All errors are reported here, before any quad is produced. The returned iterator yields quads
    /// triangle by triangle in submission order, and in raster order within each triangle.
    pub fn rasterize<'a>(&'a self, vertices: &'a [ClipSpaceVertex]) -> RasterResult<FragmentQuads<'a, ScreenVertices<'a>>> {
        let (context, vertices) = self.screen_vertices(vertices)?;

        Ok(FragmentQuads::new(context, vertices))
    }
}

/// Fragment quads of a draw call, produced lazily one triangle at a time
pub struct FragmentQuads<'a, I> {
    context: RasterContext<'a>,
    triangles: TriangleAssembler<I>,
    current: Option<QuadWalker<'a>>,
}

impl<'a, I> FragmentQuads<'a, I> where I: Iterator<Item=ScreenVertex> {
    pub fn new(context: RasterContext<'a>, vertices: I) -> FragmentQuads<'a, I> {
        FragmentQuads { context, triangles: TriangleAssembler::new(vertices), current: None }
    }
}

impl<'a, I> Iterator for FragmentQuads<'a, I> where I: Iterator<Item=ScreenVertex> {
    type Item = FragmentQuad;

    fn next(&mut self) -> Option<FragmentQuad> {
        loop {
            if let Some(quad) = self.current.as_mut().and_then(Iterator::next) {
                return Some(quad);
            }

            let triangle = self.triangles.next()?;

            self.current = QuadWalker::for_triangle(self.context, triangle);
        }
    }
}
