use crate::geometry::{Coordinate, ScreenVertex, Triangle};
use crate::pipeline::fragment::FragmentQuad;

use super::{RasterContext, TriangleSetup};

/// Walks the quad-aligned bounding box of one triangle two pixels at a time, in raster order,
/// yielding only quads with at least one covered sample.
pub struct QuadWalker<'a> {
    setup: TriangleSetup<'a>,
    /// `None` once the walk has left the box
    next: Option<Coordinate>,
}

impl<'a> QuadWalker<'a> {
    pub fn new(setup: TriangleSetup<'a>) -> QuadWalker<'a> {
        QuadWalker { next: Some(setup.bounds().min), setup }
    }

    /// Returns `None` for triangles that cannot produce any fragments
    pub fn for_triangle(context: RasterContext<'a>, triangle: Triangle<ScreenVertex>) -> Option<QuadWalker<'a>> {
        TriangleSetup::new(context, triangle).map(QuadWalker::new)
    }

    #[inline]
    pub fn setup(&self) -> &TriangleSetup<'a> {
        &self.setup
    }
}

impl<'a> Iterator for QuadWalker<'a> {
    type Item = FragmentQuad;

    fn next(&mut self) -> Option<FragmentQuad> {
        let bounds = self.setup.bounds();

        while let Some(anchor) = self.next {
            if anchor.y > bounds.max.y {
                self.next = None;
                break;
            }

            self.next = match anchor.x.checked_add(2) {
                Some(x) if x <= bounds.max.x => Some(Coordinate::new(x, anchor.y)),
                _ => anchor.y.checked_add(2).map(|y| Coordinate::new(bounds.min.x, y)),
            };

            if let Some(quad) = self.setup.quad(anchor) {
                return Some(quad);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector4;

    use crate::geometry::{ScreenVertex, Triangle, Viewport};
    use crate::pipeline::state::{CullMode, RasterizerState};
    use crate::shader::ShaderLinkage;

    use super::*;

    fn vertex(x: f32, y: f32) -> ScreenVertex {
        ScreenVertex { position: Vector4::new(x, y, 0.5, 1.0), attributes: Default::default() }
    }

    #[test]
    fn walk_ends_at_the_top_of_the_pixel_range() {
        let state = RasterizerState::default().with_cull_mode(CullMode::None);
        let linkage = ShaderLinkage::default();

        // Not a valid viewport, its last row sits at the edge of i32
        let viewport = Viewport::new(4.0, 1000.0).with_origin(0.0, 2147483000.0);
        let context = RasterContext::new(&state, &viewport, &linkage);

        assert_eq!(context.bounds.max.y, i32::max_value() - 1);

        let triangle = Triangle::new(vertex(-4.0, 2.0e9), vertex(12.0, 2.0e9), vertex(-4.0, 2.3e9));

        let walker = QuadWalker::for_triangle(context, triangle).unwrap();
        let rows = (i64::from(context.bounds.max.y) - i64::from(walker.setup().bounds().min.y)) / 2 + 1;

        let quads = walker.count() as i64;

        assert!(quads > 0 && quads <= rows * 2);
    }
}
