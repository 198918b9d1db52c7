//! Interpolation utilities
//!
//! The rasterizer produces barycentric weights for every fragment and sample. This module turns those
//! weights into interpolated values, either linearly in screen space or perspective-correct.

use std::ops::{Add, Mul};

use nalgebra::{Vector2, Vector3, Vector4};
use num_traits::Float;

/// Describes a type that can be interpolated with barycentric coordinates.
///
/// This is required for any rasterization to occur.
///
/// See [This document](https://classes.soe.ucsc.edu/cmps160/Fall10/resources/barycentricInterpolation.pdf) for more information.
pub trait Interpolate {
    /// Interpolate the three values with their corresponding barycentric coordinate weight
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self;

    /// Simple linear interpolation
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self;
}

/// Convenience method for interpolating three values with barycentric coordinates.
#[inline]
pub fn barycentric_interpolate<R: Float, T>(u: R, ux: T, v: R, vx: T, w: R, wx: T) -> T where T: Add<Output=T> + Mul<R, Output=T> {
    ux * u + vx * v + wx * w
}

/// Convenience method for linearly interpolating two values
#[inline]
pub fn linear_interpolate<R: Float, T>(t: R, x1: T, x2: T) -> T where T: Add<Output=T>, T: Mul<R, Output=T> {
    x1 * (R::one() - t) + x2 * t
}

macro_rules! impl_copy_interpolate {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline(always)]
                fn barycentric_interpolate(u: f32, ux: &$t, v: f32, vx: &$t, w: f32, wx: &$t) -> $t {
                    barycentric_interpolate(u, *ux, v, *vx, w, *wx)
                }

                #[inline(always)]
                fn linear_interpolate(t: f32, x1: &$t, x2: &$t) -> $t {
                    linear_interpolate(t, *x1, *x2)
                }
            }
        )+
    }
}

impl_copy_interpolate!(f32, Vector2<f32>, Vector3<f32>, Vector4<f32>);

/// Barycentric weights of a point relative to a triangle's three vertices.
///
/// `alpha` weights the first vertex, `beta` the second and `gamma` the third.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    #[inline(always)]
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Barycentric {
        Barycentric { alpha, beta, gamma }
    }

    /// Weights at the first vertex
    pub const V1: Barycentric = Barycentric { alpha: 1.0, beta: 0.0, gamma: 0.0 };
    /// Weights at the second vertex
    pub const V2: Barycentric = Barycentric { alpha: 0.0, beta: 1.0, gamma: 0.0 };
    /// Weights at the third vertex
    pub const V3: Barycentric = Barycentric { alpha: 0.0, beta: 0.0, gamma: 1.0 };

    #[inline]
    pub fn sum(&self) -> f32 {
        self.alpha + self.beta + self.gamma
    }

    /// All three weights lie in `[0, 1]`. `NaN` weights are never inside.
    #[inline]
    pub fn is_inside(&self) -> bool {
        let in_range = |e: f32| e >= 0.0 && e <= 1.0;

        in_range(self.alpha) && in_range(self.beta) && in_range(self.gamma)
    }

    #[inline]
    pub fn as_array(&self) -> [f32; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Divides each weight by its vertex's clip-space `w` and renormalizes the result to sum to one.
    pub fn perspective_corrected(&self, w1: f32, w2: f32, w3: f32) -> Barycentric {
        let a = self.alpha / w1;
        let b = self.beta / w2;
        let c = self.gamma / w3;

        let rcp_sum = 1.0 / (a + b + c);

        Barycentric::new(a * rcp_sum, b * rcp_sum, c * rcp_sum)
    }
}

/// Screen-space linear interpolation: `alpha * v1 + beta * v2 + gamma * v3`
#[inline]
pub fn linear<T: Interpolate>(weights: Barycentric, v1: &T, v2: &T, v3: &T) -> T {
    let Barycentric { alpha, beta, gamma } = weights;

    T::barycentric_interpolate(alpha, v1, beta, v2, gamma, v3)
}

/// Perspective-correct interpolation, where `w1..w3` are the clip-space `w` of each vertex.
///
/// A value that is constant across all three vertices is reproduced for any finite, non-zero `w`.
#[inline]
pub fn perspective<T: Interpolate>(weights: Barycentric, v1: &T, v2: &T, v3: &T, w1: f32, w2: f32, w3: f32) -> T {
    linear(weights.perspective_corrected(w1, w2, w3), v1, v2, v3)
}
