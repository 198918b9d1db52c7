use crate::geometry::{ProjectedVertex, ScreenVertex, Viewport};

/// Maps normalized device coordinates into viewport pixel space.
///
/// One vertex in, one vertex out, in order. `z` and `w` pass through for depth and perspective correction.
#[derive(Debug, Clone, Copy)]
pub struct ScreenMapper {
    pub viewport: Viewport,
}

impl ScreenMapper {
    pub fn new(viewport: Viewport) -> ScreenMapper {
        ScreenMapper { viewport }
    }

    pub fn process<I>(&self, vertices: I) -> ScreenMap<I::IntoIter> where I: IntoIterator<Item=ProjectedVertex> {
        ScreenMap { viewport: self.viewport, vertices: vertices.into_iter() }
    }
}

/// Iterator returned by [`ScreenMapper::process`](struct.ScreenMapper.html#method.process)
pub struct ScreenMap<I> {
    viewport: Viewport,
    vertices: I,
}

impl<I> Iterator for ScreenMap<I> where I: Iterator<Item=ProjectedVertex> {
    type Item = ScreenVertex;

    #[inline]
    fn next(&mut self) -> Option<ScreenVertex> {
        let viewport = &self.viewport;

        self.vertices.next().map(|vertex| vertex.to_screen(viewport))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vertices.size_hint()
    }
}
