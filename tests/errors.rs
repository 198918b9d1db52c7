mod common;

use std::convert::TryFrom;

use nalgebra::{Vector2, Vector4};

use softraster::{AttributeKind, AttributeValue, ClipSpaceVertex, CullMode, FillMode, OutputAttribute, RasterError,
                 Rasterizer, RasterizerState, VertexOutputLayout, Viewport};

use common::*;

fn triangle() -> Vec<ClipSpaceVertex> {
    vec![
        ClipSpaceVertex::bare(Vector4::new(-1.0, -1.0, 0.5, 1.0)),
        ClipSpaceVertex::bare(Vector4::new(1.0, -1.0, 0.5, 1.0)),
        ClipSpaceVertex::bare(Vector4::new(0.0, 1.0, 0.5, 1.0)),
    ]
}

fn error_of(rasterizer: &Rasterizer, vertices: &[ClipSpaceVertex]) -> RasterError {
    match rasterizer.rasterize(vertices) {
        Ok(_) => panic!("rasterization unexpectedly succeeded"),
        Err(err) => err,
    }
}

#[test]
fn vertex_count_must_form_triangles() {
    let rasterizer = rasterizer(8.0, 8.0, RasterizerState::default());

    let mut vertices = triangle();
    vertices.push(vertices[0].clone());

    assert_eq!(error_of(&rasterizer, &vertices), RasterError::InvalidVertexCount(4));

    assert_eq!(rasterize_all(&rasterizer, &[]).len(), 0);
}

#[test]
fn viewport_must_be_set_and_valid() {
    let mut rasterizer = Rasterizer::default();

    assert_eq!(error_of(&rasterizer, &triangle()), RasterError::ViewportNotSet);

    for viewport in &[
        Viewport::new(0.0, 8.0),
        Viewport::new(8.0, -1.0),
        Viewport::new(std::f32::INFINITY, 8.0),
        Viewport::new(8.0, 8.0).with_origin(std::f32::NAN, 0.0),
        Viewport::new(8.0, 8.0).with_depth_range(0.8, 0.2),
        Viewport::new(8.0, 8.0).with_depth_range(-0.5, 1.0),
        Viewport::new(4.0, 1000.0).with_origin(0.0, 2147483000.0),
        Viewport::new(1e10, 8.0),
        Viewport::new(8.0, 8.0).with_origin(-3e9, 0.0),
    ] {
        rasterizer.set_viewport(*viewport);

        match error_of(&rasterizer, &triangle()) {
            RasterError::InvalidViewport(_) => {}
            err => panic!("unexpected error {:?} for {:?}", err, viewport),
        }
    }
}

#[test]
fn viewport_must_fit_the_pixel_range() {
    let edge = Viewport::new(4.0, 1000.0).with_origin(0.0, 2147483000.0);

    assert_eq!(edge.validate(), Err(RasterError::InvalidViewport("viewport exceeds addressable pixel range")));

    let mut rasterizer = rasterizer(8.0, 8.0, RasterizerState::default().with_cull_mode(CullMode::None));
    rasterizer.set_viewport(edge);

    assert!(rasterizer.rasterize(&triangle()).is_err());

    // Far from the origin but clear of the limit
    let far = Viewport::new(4.0, 1000.0).with_origin(0.0, 2000000000.0);

    assert_eq!(far.validate(), Ok(()));

    rasterizer.set_viewport(far);

    // At most one quad per 2x2 block of the 4x1000 viewport
    assert!(rasterizer.rasterize(&triangle()).unwrap().count() <= 1000);
}

#[test]
fn state_is_validated() {
    let mut rasterizer = rasterizer(8.0, 8.0, RasterizerState::default());

    for &count in &[0, 33] {
        rasterizer.set_state(RasterizerState::default().with_multisample_count(count));

        assert_eq!(error_of(&rasterizer, &triangle()), RasterError::InvalidMultisampleCount(count));
    }

    for &count in &[1, 2, 3, 4, 8, 16, 32] {
        rasterizer.set_state(RasterizerState::default().with_multisample_count(count).with_cull_mode(CullMode::None));

        assert!(rasterize_all(&rasterizer, &triangle()).iter().all(|quad| {
            quad.fragments().iter().all(|f| f.samples.len() == count as usize)
        }));
    }

    rasterizer.set_state(RasterizerState::default().with_wireframe_width(0.0));

    assert_eq!(error_of(&rasterizer, &triangle()), RasterError::InvalidWireframeWidth(0.0));
}

#[test]
fn raw_mode_values_are_checked() {
    assert_eq!(FillMode::try_from(2).unwrap(), FillMode::Wireframe);
    assert_eq!(FillMode::try_from(3).unwrap(), FillMode::Solid);
    assert_eq!(FillMode::try_from(1), Err(RasterError::UnsupportedFillMode(1)));
    assert_eq!(CullMode::try_from(7), Err(RasterError::UnsupportedCullMode(7)));

    assert_eq!("wireframe".parse::<FillMode>().unwrap(), FillMode::Wireframe);
    assert_eq!("points".parse::<FillMode>(), Err(RasterError::UnknownModeName("points".to_string())));
}

#[test]
fn vertex_attributes_must_match_the_layout() {
    let mut rasterizer = rasterizer(8.0, 8.0, RasterizerState::default());
    rasterizer.set_output_layout(VertexOutputLayout::new(vec![
        OutputAttribute::perspective("TEXCOORD", AttributeKind::Vec2),
    ]));

    assert_eq!(error_of(&rasterizer, &triangle()),
               RasterError::AttributeCountMismatch { vertex: 0, expected: 1, found: 0 });

    let uv = AttributeValue::Vec2(Vector2::new(0.0, 1.0));

    let mut vertices: Vec<_> = triangle().into_iter().map(|v| ClipSpaceVertex::new(v.position, Some(uv))).collect();
    vertices[2].attributes[0] = AttributeValue::Scalar(1.0);

    assert_eq!(error_of(&rasterizer, &vertices),
               RasterError::AttributeKindMismatch {
                   vertex: 2,
                   index: 0,
                   expected: AttributeKind::Vec2,
                   found: AttributeKind::Scalar,
               });
}

#[test]
fn errors_describe_the_violation() {
    assert_eq!(RasterError::InvalidVertexCount(4).to_string(), "4 vertices is invalid for a triangle list");
    assert!(RasterError::InvalidMultisampleCount(0).to_string().contains("1..=32"));
}
