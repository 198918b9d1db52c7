//! Attribute values passed from the vertex stage to the pixel stage

use nalgebra::{Vector2, Vector3, Vector4};

use crate::interpolate::Interpolate;

/// Shape of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
}

/// How an attribute varies across a triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    /// Linear in screen space, ignoring perspective.
    Linear,
    /// Perspective-correct, dividing the weights by each vertex's clip-space `w`.
    Perspective,
}

impl Default for InterpolationMode {
    fn default() -> InterpolationMode { InterpolationMode::Perspective }
}

/// A single shader attribute value.
///
/// This is a closed set of the shapes shader stages exchange, so values live inline without boxing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Scalar(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
}

impl AttributeValue {
    #[inline]
    pub fn kind(&self) -> AttributeKind {
        match *self {
            AttributeValue::Scalar(_) => AttributeKind::Scalar,
            AttributeValue::Vec2(_) => AttributeKind::Vec2,
            AttributeValue::Vec3(_) => AttributeKind::Vec3,
            AttributeValue::Vec4(_) => AttributeKind::Vec4,
        }
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match *self { AttributeValue::Scalar(v) => Some(v), _ => None }
    }

    pub fn as_vec2(&self) -> Option<Vector2<f32>> {
        match *self { AttributeValue::Vec2(v) => Some(v), _ => None }
    }

    pub fn as_vec3(&self) -> Option<Vector3<f32>> {
        match *self { AttributeValue::Vec3(v) => Some(v), _ => None }
    }

    pub fn as_vec4(&self) -> Option<Vector4<f32>> {
        match *self { AttributeValue::Vec4(v) => Some(v), _ => None }
    }

    /// Component-wise `self - other`, or `None` if the kinds differ.
    pub fn difference(&self, other: &AttributeValue) -> Option<AttributeValue> {
        Some(match (*self, *other) {
            (AttributeValue::Scalar(a), AttributeValue::Scalar(b)) => AttributeValue::Scalar(a - b),
            (AttributeValue::Vec2(a), AttributeValue::Vec2(b)) => AttributeValue::Vec2(a - b),
            (AttributeValue::Vec3(a), AttributeValue::Vec3(b)) => AttributeValue::Vec3(a - b),
            (AttributeValue::Vec4(a), AttributeValue::Vec4(b)) => AttributeValue::Vec4(a - b),
            _ => return None,
        })
    }
}

impl From<f32> for AttributeValue {
    fn from(v: f32) -> AttributeValue { AttributeValue::Scalar(v) }
}

impl From<Vector2<f32>> for AttributeValue {
    fn from(v: Vector2<f32>) -> AttributeValue { AttributeValue::Vec2(v) }
}

impl From<Vector3<f32>> for AttributeValue {
    fn from(v: Vector3<f32>) -> AttributeValue { AttributeValue::Vec3(v) }
}

impl From<Vector4<f32>> for AttributeValue {
    fn from(v: Vector4<f32>) -> AttributeValue { AttributeValue::Vec4(v) }
}

// Vertex attributes are checked against the vertex output layout before rasterization,
// so mixed kinds here mean that check was bypassed.
const MIXED_KINDS: &str = "attribute kinds differ between vertices of one primitive";

impl Interpolate for AttributeValue {
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        use self::AttributeValue::*;

        match (x1, x2, x3) {
            (Scalar(a), Scalar(b), Scalar(c)) => Scalar(Interpolate::barycentric_interpolate(u, a, v, b, w, c)),
            (Vec2(a), Vec2(b), Vec2(c)) => Vec2(Interpolate::barycentric_interpolate(u, a, v, b, w, c)),
            (Vec3(a), Vec3(b), Vec3(c)) => Vec3(Interpolate::barycentric_interpolate(u, a, v, b, w, c)),
            (Vec4(a), Vec4(b), Vec4(c)) => Vec4(Interpolate::barycentric_interpolate(u, a, v, b, w, c)),
            _ => panic!("{}", MIXED_KINDS),
        }
    }

    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        use self::AttributeValue::*;

        match (x1, x2) {
            (Scalar(a), Scalar(b)) => Scalar(Interpolate::linear_interpolate(t, a, b)),
            (Vec2(a), Vec2(b)) => Vec2(Interpolate::linear_interpolate(t, a, b)),
            (Vec3(a), Vec3(b)) => Vec3(Interpolate::linear_interpolate(t, a, b)),
            (Vec4(a), Vec4(b)) => Vec4(Interpolate::linear_interpolate(t, a, b)),
            _ => panic!("{}", MIXED_KINDS),
        }
    }
}
