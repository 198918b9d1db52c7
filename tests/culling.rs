use nalgebra::Vector4;

use softraster::geometry::{ProjectedVertex, Triangle};
use softraster::pipeline::Culler;
use softraster::{ClipSpaceVertex, CullMode, FaceWinding};

fn projected(x: f32, y: f32) -> ProjectedVertex {
    ProjectedVertex::from_clip(ClipSpaceVertex::bare(Vector4::new(x, y, 0.5, 1.0)))
}

/// Counter-clockwise as seen on the final image
fn counter_clockwise() -> Triangle<ProjectedVertex> {
    Triangle::new(projected(-0.5, -0.5), projected(0.5, -0.5), projected(0.0, 0.5))
}

fn clockwise() -> Triangle<ProjectedVertex> {
    Triangle::new(projected(-0.5, -0.5), projected(0.0, 0.5), projected(0.5, -0.5))
}

fn degenerate() -> Triangle<ProjectedVertex> {
    Triangle::new(projected(-0.5, -0.5), projected(0.0, 0.0), projected(0.5, 0.5))
}

#[test]
fn winding_is_measured_in_device_coordinates() {
    assert_eq!(Culler::winding(&counter_clockwise()), Some(FaceWinding::CounterClockwise));
    assert_eq!(Culler::winding(&clockwise()), Some(FaceWinding::Clockwise));
    assert_eq!(Culler::winding(&degenerate()), None);
}

#[test]
fn counter_clockwise_triangle_under_each_mode() {
    let triangle = counter_clockwise();

    assert!(Culler::new(CullMode::Clockwise).keeps(&triangle));
    assert!(!Culler::new(CullMode::CounterClockwise).keeps(&triangle));
    assert!(Culler::new(CullMode::None).keeps(&triangle));
}

#[test]
fn clockwise_triangle_under_each_mode() {
    let triangle = clockwise();

    assert!(!Culler::new(CullMode::Clockwise).keeps(&triangle));
    assert!(Culler::new(CullMode::CounterClockwise).keeps(&triangle));
    assert!(Culler::new(CullMode::None).keeps(&triangle));
}

#[test]
fn degenerate_triangles_survive_only_without_culling() {
    let triangle = degenerate();

    assert!(!Culler::new(CullMode::Clockwise).keeps(&triangle));
    assert!(!Culler::new(CullMode::CounterClockwise).keeps(&triangle));
    assert!(Culler::new(CullMode::None).keeps(&triangle));
}

#[test]
fn nan_area_is_treated_as_degenerate() {
    let triangle = Triangle::new(projected(std::f32::NAN, 0.0), projected(0.5, -0.5), projected(0.0, 0.5));

    assert_eq!(Culler::winding(&triangle), None);
    assert!(!Culler::new(CullMode::CounterClockwise).keeps(&triangle));
}

#[test]
fn culler_stream_drops_whole_triangles() {
    let mut stream = counter_clockwise().into_array().to_vec();
    stream.extend_from_slice(&clockwise().into_array());
    stream.extend_from_slice(&counter_clockwise().into_array());

    let kept: Vec<_> = Culler::new(CullMode::CounterClockwise).process(stream).collect();

    assert_eq!(kept, clockwise().into_array().to_vec());

    let all: Vec<_> = Culler::new(CullMode::None).process(kept.clone()).collect();

    assert_eq!(all, kept);
}

#[test]
fn modes_parse_from_api_values_and_names() {
    use std::convert::TryFrom;

    assert_eq!(CullMode::try_from(1).unwrap(), CullMode::None);
    assert_eq!(CullMode::try_from(2).unwrap(), CullMode::Clockwise);
    assert_eq!(CullMode::try_from(3).unwrap(), CullMode::CounterClockwise);
    assert!(CullMode::try_from(0).is_err());

    assert_eq!("ccw".parse::<CullMode>().unwrap(), CullMode::CounterClockwise);
    assert_eq!("None".parse::<CullMode>().unwrap(), CullMode::None);
    assert!("sideways".parse::<CullMode>().is_err());
}
