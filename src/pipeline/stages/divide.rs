use crate::geometry::{ClipSpaceVertex, ProjectedVertex};

/// Projects clip-space vertices into normalized device coordinates.
///
/// One vertex in, one vertex out, in order. Attributes are not divided.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerspectiveDivider;

impl PerspectiveDivider {
    pub fn process<I>(&self, vertices: I) -> PerspectiveDivide<I::IntoIter> where I: IntoIterator<Item=ClipSpaceVertex> {
        PerspectiveDivide { vertices: vertices.into_iter() }
    }
}

/// Iterator returned by [`PerspectiveDivider::process`](struct.PerspectiveDivider.html#method.process)
pub struct PerspectiveDivide<I> {
    vertices: I,
}

impl<I> Iterator for PerspectiveDivide<I> where I: Iterator<Item=ClipSpaceVertex> {
    type Item = ProjectedVertex;

    #[inline]
    fn next(&mut self) -> Option<ProjectedVertex> {
        self.vertices.next().map(ProjectedVertex::from_clip)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vertices.size_hint()
    }
}
