//! Software rasterization core in Rust
//!
//! Converts clip-space triangles into 2x2 fragment quads with per-sample coverage and depth,
//! ready for a pixel shader and output merger.
//!
//! ### Features:
//!
//! * Explicit pull-iterator stages: perspective divide, clipping, culling and screen mapping.
//! * True homogeneous clipping against the view frustum, with optional depth clipping.
//! * Clockwise, counter-clockwise or no face culling.
//! * Solid and wireframe fill, with either inclusive or top-left fill conventions.
//! * Multisampling with the standard Direct3D sample patterns.
//! * Linear and perspective-correct attribute interpolation, selected per vertex output.
//! * Pixel inputs linked to vertex outputs by semantic once per draw call.
//! * Quad-granularity output, so screen-space derivatives are always available.
//! * Optional parallel scan conversion with deterministic output order.
//!
//! ### Example:
//!
//! ```
//! use softraster::{Rasterizer, RasterizerState, CullMode, Viewport, ClipSpaceVertex};
//! use nalgebra::Vector4;
//!
//! let mut rasterizer = Rasterizer::new(RasterizerState::default().with_cull_mode(CullMode::None));
//!
//! rasterizer.set_viewport(Viewport::new(64.0, 64.0));
//!
//! let vertices = [
//!     ClipSpaceVertex::bare(Vector4::new(-1.0, -1.0, 0.5, 1.0)),
//!     ClipSpaceVertex::bare(Vector4::new(1.0, -1.0, 0.5, 1.0)),
//!     ClipSpaceVertex::bare(Vector4::new(0.0, 1.0, 0.5, 1.0)),
//! ];
//!
//! for quad in rasterizer.rasterize(&vertices).unwrap() {
//!     assert!(quad.is_any_covered());
//! }
//! ```

pub mod error;
pub mod utils;
pub mod geometry;
pub mod interpolate;
pub mod shader;
pub mod multisample;
pub mod pipeline;
pub mod parallel;

pub use error::{RasterError, RasterResult};
pub use geometry::{BoundingBox, ClipSpaceVertex, Coordinate, FaceWinding, ProjectedVertex, ScreenVertex, Triangle, Viewport};
pub use interpolate::{Barycentric, Interpolate};
pub use shader::{AttributeKind, AttributeValue, InputAttribute, InterpolationMode, OutputAttribute,
                 PixelInputLayout, ShaderInput, ShaderLinkage, VertexOutputLayout};
pub use pipeline::{CullMode, FillConvention, FillMode, Fragment, FragmentQuad, FragmentQuads, QuadLocation,
                   Rasterizer, RasterizerState, Sample};
pub use parallel::rasterize_parallel;
