use smallvec::SmallVec;

use crate::geometry::{ClipSpaceVertex, ClippingPlane, ProjectedVertex, Triangle, TriangleAssembler,
                      ALL_CLIPPING_PLANES, SIDE_CLIPPING_PLANES};

/// Vertices of the triangles produced from one input triangle. Most triangles pass through whole.
pub type ClippedVertices = SmallVec<[ProjectedVertex; 3]>;

// A triangle clipped by six planes has at most nine vertices.
type Polygon = SmallVec<[ClipSpaceVertex; 9]>;

/// Removes the parts of triangles outside the view volume.
///
/// Input and output are vertex streams grouped in threes. Each input triangle becomes zero or more output
/// triangles with the same winding, in order.
#[derive(Debug, Clone, Copy)]
pub struct Clipper {
    planes: &'static [ClippingPlane],
}

impl Default for Clipper {
    fn default() -> Clipper { Clipper::new(true) }
}

impl Clipper {
    /// With `depth_clip` disabled, only the four side planes are used.
    pub fn new(depth_clip: bool) -> Clipper {
        Clipper { planes: if depth_clip { &ALL_CLIPPING_PLANES[..] } else { &SIDE_CLIPPING_PLANES[..] } }
    }

    #[inline]
    pub fn planes(&self) -> &'static [ClippingPlane] {
        self.planes
    }

    pub fn process<I>(&self, vertices: I) -> Clip<I::IntoIter> where I: IntoIterator<Item=ProjectedVertex> {
        Clip {
            clipper: *self,
            triangles: TriangleAssembler::new(vertices.into_iter()),
            pending: ClippedVertices::new().into_iter(),
        }
    }

    /// Clips a single triangle.
    ///
    /// Triangles entirely inside are returned untouched, triangles entirely outside one plane are rejected,
    /// and the rest are clipped against each plane in turn (Sutherland-Hodgman) in homogeneous clip space,
    /// then fanned back into triangles from the first polygon vertex.
    pub fn clip_triangle(&self, triangle: Triangle<ProjectedVertex>) -> ClippedVertices {
        let mut straddled = false;

        for &plane in self.planes {
            let inside = triangle.vertices().iter().filter(|v| plane.has_inside(&v.clip)).count();

            match inside {
                0 => {
                    log::trace!("triangle rejected entirely outside {:?} plane", plane);
                    return ClippedVertices::new();
                }
                3 => {}
                _ => straddled = true,
            }
        }

        if !straddled {
            return SmallVec::from_buf(triangle.into_array());
        }

        let mut polygon: Polygon = triangle.vertices().iter().map(|v| v.to_clip()).collect();

        for &plane in self.planes {
            polygon = clip_polygon(&polygon, plane);

            if polygon.len() < 3 {
                log::trace!("triangle clipped away by {:?} plane", plane);
                return ClippedVertices::new();
            }
        }

        log::trace!("triangle clipped into {} triangles", polygon.len() - 2);

        let mut projected = polygon.into_iter().map(ProjectedVertex::from_clip);

        let mut output = ClippedVertices::new();

        // Fan around the first vertex, which keeps the original winding
        if let Some(first) = projected.next() {
            let rest: SmallVec<[ProjectedVertex; 8]> = projected.collect();

            for pair in rest.windows(2) {
                output.push(first.clone());
                output.push(pair[0].clone());
                output.push(pair[1].clone());
            }
        }

        output
    }
}

fn clip_polygon(polygon: &Polygon, plane: ClippingPlane) -> Polygon {
    let mut output = Polygon::new();

    let mut previous = match polygon.last() {
        Some(last) => last,
        None => return output,
    };

    for current in polygon {
        let previous_in = plane.has_inside(&previous.position);
        let current_in = plane.has_inside(&current.position);

        // Always interpolate from the inside vertex outwards, so an edge shared with a neighbouring
        // triangle produces the same intersection in both.
        if current_in != previous_in {
            output.push(if previous_in {
                plane.intersect(previous, current)
            } else {
                plane.intersect(current, previous)
            });
        }

        if current_in {
            output.push(current.clone());
        }

        previous = current;
    }

    output
}

/// Iterator returned by [`Clipper::process`](struct.Clipper.html#method.process)
pub struct Clip<I> {
    clipper: Clipper,
    triangles: TriangleAssembler<I>,
    pending: smallvec::IntoIter<[ProjectedVertex; 3]>,
}

impl<I> Iterator for Clip<I> where I: Iterator<Item=ProjectedVertex> {
    type Item = ProjectedVertex;

    fn next(&mut self) -> Option<ProjectedVertex> {
        loop {
            if let Some(vertex) = self.pending.next() {
                return Some(vertex);
            }

            let triangle = self.triangles.next()?;

            self.pending = self.clipper.clip_triangle(triangle).into_iter();
        }
    }
}
