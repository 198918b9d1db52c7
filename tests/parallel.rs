mod common;

use nalgebra::Vector2;

use softraster::{rasterize_parallel, AttributeKind, AttributeValue, CullMode, FillMode, OutputAttribute,
                 RasterError, RasterizerState, VertexOutputLayout};

use common::*;

fn scene(state: RasterizerState) -> (softraster::Rasterizer, Vec<softraster::ClipSpaceVertex>) {
    let mut rasterizer = rasterizer(64.0, 64.0, state);
    rasterizer.set_output_layout(VertexOutputLayout::new(vec![
        OutputAttribute::perspective("TEXCOORD", AttributeKind::Vec2),
    ]));

    let viewport = *rasterizer.viewport().unwrap();

    let mut vertices = Vec::new();

    // A fan of overlapping triangles, some hanging off the viewport
    for i in 0..40 {
        let t = i as f32 * 0.37;
        let (cx, cy) = (32.0 + 30.0 * t.cos(), 32.0 + 30.0 * t.sin());

        for &(x, y) in &[(32.0, 32.0), (cx, cy), (cx + 12.0 * t.sin(), cy - 12.0 * t.cos())] {
            let uv = AttributeValue::Vec2(Vector2::new(x / 64.0, y / 64.0));

            vertices.push(pixel_vertex(&viewport, x, y, Some(uv)));
        }
    }

    (rasterizer, vertices)
}

#[test]
fn parallel_output_matches_serial_output() {
    let states = [
        RasterizerState::default().with_cull_mode(CullMode::None),
        RasterizerState::default().with_multisample_count(4),
        RasterizerState::default().with_cull_mode(CullMode::Clockwise).with_fill_mode(FillMode::Wireframe),
    ];

    for state in &states {
        let (rasterizer, vertices) = scene(*state);

        let serial = rasterize_all(&rasterizer, &vertices);

        assert!(!serial.is_empty());

        for &threads in &[Some(1), Some(3), None] {
            let mut parallel = Vec::new();

            rasterize_parallel(&rasterizer, &vertices, threads, |quad| parallel.push(quad)).unwrap();

            assert_eq!(parallel, serial, "{:?} threads with {:?}", threads, state);
        }
    }
}

#[test]
fn parallel_reports_errors_before_dispatch() {
    let (rasterizer, mut vertices) = scene(RasterizerState::default());

    vertices.pop();

    let mut called = false;

    let result = rasterize_parallel(&rasterizer, &vertices, Some(2), |_| called = true);

    assert_eq!(result, Err(RasterError::InvalidVertexCount(119)));
    assert!(!called);
}
