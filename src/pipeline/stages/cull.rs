use smallvec::SmallVec;

use crate::geometry::{FaceWinding, ProjectedVertex, Triangle, TriangleAssembler};
use crate::geometry::winding::signed_area;
use crate::pipeline::state::CullMode;

/// Discards triangles by winding order.
///
/// The winding is measured in normalized device coordinates, where it matches the winding seen on the final
/// image. Zero-area triangles are discarded by either culling mode and kept by `CullMode::None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Culler {
    pub mode: CullMode,
}

impl Culler {
    pub fn new(mode: CullMode) -> Culler {
        Culler { mode }
    }

    /// Winding of a triangle, or `None` if it has no area
    pub fn winding(triangle: &Triangle<ProjectedVertex>) -> Option<FaceWinding> {
        FaceWinding::from_signed_area(signed_area(&triangle.v1.position,
                                                  &triangle.v2.position,
                                                  &triangle.v3.position))
    }

    #[inline]
    pub fn keeps(&self, triangle: &Triangle<ProjectedVertex>) -> bool {
        self.mode.keeps(Culler::winding(triangle))
    }

    pub fn process<I>(&self, vertices: I) -> Cull<I::IntoIter> where I: IntoIterator<Item=ProjectedVertex> {
        Cull {
            culler: *self,
            triangles: TriangleAssembler::new(vertices.into_iter()),
            pending: SmallVec::new().into_iter(),
        }
    }
}

/// Iterator returned by [`Culler::process`](struct.Culler.html#method.process)
pub struct Cull<I> {
    culler: Culler,
    triangles: TriangleAssembler<I>,
    pending: smallvec::IntoIter<[ProjectedVertex; 3]>,
}

impl<I> Iterator for Cull<I> where I: Iterator<Item=ProjectedVertex> {
    type Item = ProjectedVertex;

    fn next(&mut self) -> Option<ProjectedVertex> {
        loop {
            if let Some(vertex) = self.pending.next() {
                return Some(vertex);
            }

            let triangle = self.triangles.next()?;

            if self.culler.keeps(&triangle) {
                self.pending = SmallVec::from_buf(triangle.into_array()).into_iter();
            } else {
                log::trace!("triangle culled by {:?}", self.culler.mode);
            }
        }
    }
}
