use nalgebra::{Point2, Vector4};
use smallvec::SmallVec;

use crate::geometry::{BoundingBox, Coordinate, ScreenVertex, Triangle};
use crate::interpolate::{self, Barycentric};
use crate::multisample::sample_position;
use crate::pipeline::fragment::{Fragment, FragmentQuad, QuadLocation, Sample, Samples, QUAD_LOCATIONS};
use crate::pipeline::state::{FillConvention, FillMode};
use crate::shader::{AttributeSource, AttributeValue, InterpolationMode, ShaderInput};

use super::RasterContext;

/// Signed edge function of `p` against the directed edge `a -> b`.
///
/// Zero on the edge's line and proportional to the signed distance from it.
#[inline(always)]
pub fn edge_function(p: Point2<f32>, a: &Vector4<f32>, b: &Vector4<f32>) -> f32 {
    (a.y - b.y) * p.x + (b.x - a.x) * p.y + a.x * b.y - b.x * a.y
}

/// Per-triangle constants for coverage testing and interpolation.
///
/// Edge `k` is the edge opposite vertex `k`, and each weight is normalized by the edge value at its own vertex.
pub struct TriangleSetup<'a> {
    context: RasterContext<'a>,
    triangle: Triangle<ScreenVertex>,
    /// Edge function of each vertex against its opposite edge
    dens: [f32; 3],
    /// Top-left rule ownership of each edge
    top_left: [bool; 3],
    /// Distance from each vertex to its opposite edge, in pixels
    heights: [f32; 3],
    bounds: BoundingBox,
}

impl<'a> TriangleSetup<'a> {
    /// Prepares a triangle for scan conversion, or returns `None` if it can't cover any pixel.
    pub fn new(context: RasterContext<'a>, triangle: Triangle<ScreenVertex>) -> Option<TriangleSetup<'a>> {
        if !triangle.vertices().iter().all(|v| v.is_finite()) {
            log::trace!("triangle skipped with non-finite screen position");
            return None;
        }

        let bounds = {
            let [a, b, c] = triangle.vertices();

            BoundingBox::of_triangle(&a.position, &b.position, &c.position).intersect(&context.bounds)
        };

        if bounds.is_empty() {
            log::trace!("triangle skipped outside of the viewport");
            return None;
        }

        let p = [triangle.v1.position, triangle.v2.position, triangle.v3.position];

        let mut dens = [0.0; 3];
        let mut top_left = [false; 3];
        let mut heights = [0.0; 3];

        for k in 0..3 {
            let (a, b) = (&p[(k + 1) % 3], &p[(k + 2) % 3]);

            dens[k] = edge_function(Point2::new(p[k].x, p[k].y), a, b);

            if dens[k] == 0.0 || !dens[k].is_finite() {
                log::trace!("triangle skipped with zero screen area");
                return None;
            }

            // Gradient of the edge function, flipped to point into the triangle
            let sign = dens[k].signum();
            let (gx, gy) = (sign * (a.y - b.y), sign * (b.x - a.x));

            top_left[k] = gx > 0.0 || (gx == 0.0 && gy > 0.0);
            heights[k] = dens[k].abs() / (b.xy() - a.xy()).norm();
        }

        Some(TriangleSetup {
            context,
            triangle,
            dens,
            top_left,
            heights,
            bounds: bounds.quad_aligned(),
        })
    }

    /// Scan bounds, with the minimum corner aligned to a quad
    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[inline]
    pub fn triangle(&self) -> &Triangle<ScreenVertex> {
        &self.triangle
    }

    /// Barycentric weights of a pixel-space point
    pub fn weights(&self, p: Point2<f32>) -> Barycentric {
        let Triangle { ref v1, ref v2, ref v3 } = self.triangle;

        Barycentric::new(edge_function(p, &v2.position, &v3.position) / self.dens[0],
                         edge_function(p, &v3.position, &v1.position) / self.dens[1],
                         edge_function(p, &v1.position, &v2.position) / self.dens[2])
    }

    /// Viewport depth at the given weights
    #[inline]
    pub fn depth(&self, weights: Barycentric) -> f32 {
        let Triangle { ref v1, ref v2, ref v3 } = self.triangle;

        self.context.viewport.map_depth(interpolate::linear(weights, &v1.position.z, &v2.position.z, &v3.position.z))
    }

    /// Coverage predicate for a sample with the given weights
    pub fn covers(&self, weights: Barycentric) -> bool {
        if !weights.is_inside() {
            return false;
        }

        let w = weights.as_array();

        if self.context.state.fill_convention == FillConvention::TopLeft {
            for k in 0..3 {
                if w[k] == 0.0 && !self.top_left[k] {
                    return false;
                }
            }
        }

        match self.context.state.fill_mode {
            FillMode::Solid => true,
            FillMode::Wireframe => {
                let width = self.context.state.wireframe_width;

                (0..3).any(|k| w[k] * self.heights[k] < width)
            }
        }
    }

    /// Coverage and depth of one sample point. Depth is computed whether or not the sample is covered.
    #[inline]
    pub fn sample(&self, p: Point2<f32>) -> Sample {
        let weights = self.weights(p);

        Sample { covered: self.covers(weights), depth: self.depth(weights) }
    }

    fn samples(&self, position: Coordinate) -> Samples {
        let count = self.context.state.multisample_count;

        // Pixels outside the viewport exist only to complete a quad
        let visible = self.context.bounds.contains(position);

        (0..count).map(|i| {
            let mut sample = self.sample(sample_position(count, position.x, position.y, i));
            sample.covered &= visible;
            sample
        }).collect()
    }

    /// Interpolated pixel shader inputs at the centre of the given pixel
    pub fn shader_input(&self, position: Coordinate) -> ShaderInput {
        let center = Point2::new(position.x as f32 + 0.5, position.y as f32 + 0.5);
        let weights = self.weights(center);

        let Triangle { ref v1, ref v2, ref v3 } = self.triangle;
        let (w1, w2, w3) = (v1.position.w, v2.position.w, v3.position.w);

        ShaderInput::from_values(self.context.linkage.bindings().iter().map(|binding| {
            match binding.source {
                AttributeSource::Vertex(slot) => {
                    let (a, b, c) = (&v1.attributes[slot], &v2.attributes[slot], &v3.attributes[slot]);

                    match binding.interpolation {
                        InterpolationMode::Linear => interpolate::linear(weights, a, b, c),
                        InterpolationMode::Perspective => interpolate::perspective(weights, a, b, c, w1, w2, w3),
                    }
                }
                AttributeSource::Position => {
                    let rcp_w = interpolate::linear(weights, &(1.0 / w1), &(1.0 / w2), &(1.0 / w3));

                    AttributeValue::Vec4(Vector4::new(center.x, center.y, self.depth(weights), rcp_w))
                }
            }
        }))
    }

    /// Tests the 2x2 quad anchored at `anchor`, returning it only if at least one sample is covered.
    pub fn quad(&self, anchor: Coordinate) -> Option<FragmentQuad> {
        debug_assert!(anchor.is_quad_aligned());

        let positions = QUAD_LOCATIONS.map(|location| {
            let (dx, dy) = location.offset();

            Coordinate::new(anchor.x + dx, anchor.y + dy)
        });

        let samples: SmallVec<[Samples; 4]> = positions.iter().map(|&p| self.samples(p)).collect();

        if !samples.iter().any(|s| s.iter().any(|sample| sample.covered)) {
            return None;
        }

        let mut samples = samples.into_iter();

        let fragments = [
            self.fragment(positions[0], QuadLocation::TopLeft, samples.next()),
            self.fragment(positions[1], QuadLocation::TopRight, samples.next()),
            self.fragment(positions[2], QuadLocation::BottomLeft, samples.next()),
            self.fragment(positions[3], QuadLocation::BottomRight, samples.next()),
        ];

        Some(FragmentQuad::new(fragments))
    }

    fn fragment(&self, position: Coordinate, location: QuadLocation, samples: Option<Samples>) -> Fragment {
        Fragment {
            position,
            location,
            samples: samples.unwrap_or_default(),
            input: Some(self.shader_input(position)),
        }
    }
}
