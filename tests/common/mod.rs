#![allow(dead_code)]

use nalgebra::Vector4;

use softraster::{AttributeValue, ClipSpaceVertex, FragmentQuad, Rasterizer, RasterizerState, Viewport};

pub const EPSILON: f32 = 1e-5;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * (1.0 + a.abs().max(b.abs()))
}

pub fn assert_approx(a: f32, b: f32) {
    assert!(approx_eq(a, b), "{} is not approximately {}", a, b);
}

/// For values accumulated over several interpolation steps
pub fn assert_near(a: f32, b: f32, tolerance: f32) {
    assert!((a - b).abs() <= tolerance, "{} is not within {} of {}", a, tolerance, b);
}

/// Rasterizer with a viewport of the given size at the origin
pub fn rasterizer(width: f32, height: f32, state: RasterizerState) -> Rasterizer {
    let mut rasterizer = Rasterizer::new(state);
    rasterizer.set_viewport(Viewport::new(width, height));
    rasterizer
}

/// Clip-space vertex with `w = 1` that lands on pixel position `(x, y)` of `viewport`
pub fn pixel_vertex<I>(viewport: &Viewport, x: f32, y: f32, attributes: I) -> ClipSpaceVertex
    where I: IntoIterator<Item=AttributeValue> {
    let ndc_x = (x - viewport.x) / viewport.width * 2.0 - 1.0;
    let ndc_y = 1.0 - (y - viewport.y) / viewport.height * 2.0;

    ClipSpaceVertex::new(Vector4::new(ndc_x, ndc_y, 0.5, 1.0), attributes)
}

/// Attribute-free triangle list from pixel positions
pub fn pixel_triangles(viewport: &Viewport, points: &[(f32, f32)]) -> Vec<ClipSpaceVertex> {
    points.iter().map(|&(x, y)| pixel_vertex(viewport, x, y, std::iter::empty())).collect()
}

pub fn anchors(quads: &[FragmentQuad]) -> Vec<(i32, i32)> {
    quads.iter().map(|quad| (quad.x(), quad.y())).collect()
}

pub fn rasterize_all(rasterizer: &Rasterizer, vertices: &[ClipSpaceVertex]) -> Vec<FragmentQuad> {
    match rasterizer.rasterize(vertices) {
        Ok(quads) => quads.collect(),
        Err(err) => panic!("rasterization failed: {}", err),
    }
}
