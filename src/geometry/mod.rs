//! Shader geometry structures

pub mod coordinate;
pub mod winding;
pub mod viewport;
pub mod clipvertex;
pub mod screenvertex;
pub mod triangle;
pub mod clip;

pub use self::coordinate::{Coordinate, BoundingBox};
pub use self::winding::FaceWinding;
pub use self::viewport::Viewport;
pub use self::clipvertex::ClipSpaceVertex;
pub use self::screenvertex::{ProjectedVertex, ScreenVertex};
pub use self::triangle::{Triangle, TriangleAssembler};
pub use self::clip::{ClippingPlane, ALL_CLIPPING_PLANES, SIDE_CLIPPING_PLANES};
