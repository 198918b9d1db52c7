/// Exactly three vertices in submission order. The order determines the winding used for culling.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle<V> {
    pub v1: V,
    pub v2: V,
    pub v3: V,
}

impl<V> Triangle<V> {
    #[inline(always)]
    pub fn new(v1: V, v2: V, v3: V) -> Triangle<V> {
        Triangle { v1, v2, v3 }
    }

    #[inline]
    pub fn vertices(&self) -> [&V; 3] {
        [&self.v1, &self.v2, &self.v3]
    }

    #[inline]
    pub fn into_array(self) -> [V; 3] {
        [self.v1, self.v2, self.v3]
    }
}

/// Regroups a vertex stream into triangles, three consecutive vertices at a time.
///
/// The draw entry points reject vertex counts that are not a multiple of three before any stage runs,
/// so a trailing partial triangle here means a stage was driven directly with a malformed stream.
/// It is dropped.
pub struct TriangleAssembler<I> {
    vertices: I,
}

impl<I> TriangleAssembler<I> {
    pub fn new(vertices: I) -> TriangleAssembler<I> {
        TriangleAssembler { vertices }
    }
}

impl<I, V> Iterator for TriangleAssembler<I> where I: Iterator<Item=V> {
    type Item = Triangle<V>;

    fn next(&mut self) -> Option<Triangle<V>> {
        let v1 = self.vertices.next()?;

        match (self.vertices.next(), self.vertices.next()) {
            (Some(v2), Some(v3)) => Some(Triangle::new(v1, v2, v3)),
            _ => {
                log::warn!("dropping trailing partial triangle");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.vertices.size_hint();

        (lower / 3, upper.map(|upper| upper / 3))
    }
}
