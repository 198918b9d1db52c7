//! Rasterizer output: fragments grouped into 2x2 quads

use smallvec::SmallVec;

use crate::geometry::Coordinate;
use crate::shader::{AttributeValue, ShaderInput};

/// A single multisample point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub covered: bool,
    /// Depth at the sample position, computed whether or not it is covered
    pub depth: f32,
}

/// Per-fragment samples, inline for up to four samples per pixel
pub type Samples = SmallVec<[Sample; 4]>;

/// Position of a fragment within its quad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadLocation {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

/// All quad locations in raster order
pub const QUAD_LOCATIONS: [QuadLocation; 4] = [
    QuadLocation::TopLeft,
    QuadLocation::TopRight,
    QuadLocation::BottomLeft,
    QuadLocation::BottomRight,
];

impl QuadLocation {
    /// Pixel offset from the quad's top-left fragment
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            QuadLocation::TopLeft => (0, 0),
            QuadLocation::TopRight => (1, 0),
            QuadLocation::BottomLeft => (0, 1),
            QuadLocation::BottomRight => (1, 1),
        }
    }
}

/// Candidate pixel contribution from one triangle
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub position: Coordinate,
    pub location: QuadLocation,
    pub samples: Samples,
    /// Interpolated pixel shader inputs. Present on every fragment of an emitted quad,
    /// including fragments with no covered samples.
    pub input: Option<ShaderInput>,
}

impl Fragment {
    #[inline]
    pub fn x(&self) -> i32 { self.position.x }

    #[inline]
    pub fn y(&self) -> i32 { self.position.y }

    /// At least one sample is covered
    #[inline]
    pub fn is_covered(&self) -> bool {
        self.samples.iter().any(|s| s.covered)
    }

    /// Bit `i` is set when sample `i` is covered
    pub fn coverage_mask(&self) -> u32 {
        self.samples.iter().enumerate().fold(0, |mask, (i, sample)| {
            if sample.covered { mask | (1 << i) } else { mask }
        })
    }

    /// Interpolated input in the given pixel input slot
    #[inline]
    pub fn input(&self, slot: usize) -> Option<&AttributeValue> {
        self.input.as_ref().and_then(|input| input.get(slot))
    }
}

/// Four fragments covering a 2x2 pixel block whose top-left pixel has even coordinates.
///
/// Fragments are stored in [`QUAD_LOCATIONS`](constant.QUAD_LOCATIONS.html) order, so finite differences
/// across the quad are always available to the pixel shader.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentQuad {
    fragments: [Fragment; 4],
}

impl FragmentQuad {
    /// Assembles a quad from fragments given in raster order.
    ///
    /// The fragments must be the four pixels of an even-aligned 2x2 block.
    pub fn new(fragments: [Fragment; 4]) -> FragmentQuad {
        debug_assert!(fragments[0].position.is_quad_aligned(), "quad anchor {:?} is not even", fragments[0].position);
        debug_assert!(fragments.iter().zip(&QUAD_LOCATIONS).all(|(f, &location)| {
            let (dx, dy) = location.offset();

            f.location == location && f.position == Coordinate::new(fragments[0].x() + dx, fragments[0].y() + dy)
        }), "fragments are not laid out as a 2x2 quad");

        FragmentQuad { fragments }
    }

    /// Top-left pixel of the quad
    #[inline]
    pub fn anchor(&self) -> Coordinate {
        self.fragments[0].position
    }

    #[inline]
    pub fn x(&self) -> i32 { self.anchor().x }

    #[inline]
    pub fn y(&self) -> i32 { self.anchor().y }

    #[inline]
    pub fn fragments(&self) -> &[Fragment; 4] {
        &self.fragments
    }

    #[inline]
    pub fn fragment(&self, location: QuadLocation) -> &Fragment {
        &self.fragments[location as usize]
    }

    #[inline]
    pub fn into_fragments(self) -> [Fragment; 4] {
        self.fragments
    }

    pub fn is_any_covered(&self) -> bool {
        self.fragments.iter().any(Fragment::is_covered)
    }

    fn difference(&self, slot: usize, from: QuadLocation, to: QuadLocation) -> Option<AttributeValue> {
        let a = self.fragment(from).input(slot)?;
        let b = self.fragment(to).input(slot)?;

        b.difference(a)
    }

    /// Coarse horizontal derivative of an interpolated input, from the top row of the quad
    pub fn ddx(&self, slot: usize) -> Option<AttributeValue> {
        self.difference(slot, QuadLocation::TopLeft, QuadLocation::TopRight)
    }

    /// Coarse vertical derivative of an interpolated input, from the left column of the quad
    pub fn ddy(&self, slot: usize) -> Option<AttributeValue> {
        self.difference(slot, QuadLocation::TopLeft, QuadLocation::BottomLeft)
    }
}
