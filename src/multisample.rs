//! Multisample sample positions
//!
//! Sample counts of 1, 2, 4, 8 and 16 use the standard Direct3D patterns, given as offsets from the
//! pixel centre in sixteenths of a pixel. Any other count falls back to an ordered grid.

use nalgebra::Point2;

/// Highest supported number of samples per pixel
pub const MAX_MULTISAMPLE_COUNT: u32 = 32;

static PATTERN_1: [(i8, i8); 1] = [(0, 0)];

static PATTERN_2: [(i8, i8); 2] = [(4, 4), (-4, -4)];

static PATTERN_4: [(i8, i8); 4] = [(-2, -6), (6, -2), (-6, 2), (2, 6)];

static PATTERN_8: [(i8, i8); 8] = [
    (1, -3), (-1, 3), (5, 1), (-3, -5),
    (-5, 5), (-7, -1), (3, 7), (7, -7),
];

static PATTERN_16: [(i8, i8); 16] = [
    (1, 1), (-1, -3), (-3, 2), (4, -1),
    (-5, -2), (2, 5), (5, 3), (3, -5),
    (-2, 6), (0, -7), (-4, -6), (-6, 4),
    (-8, 0), (7, -4), (6, 7), (-7, -8),
];

fn standard_pattern(count: u32) -> Option<&'static [(i8, i8)]> {
    Some(match count {
        1 => &PATTERN_1[..],
        2 => &PATTERN_2[..],
        4 => &PATTERN_4[..],
        8 => &PATTERN_8[..],
        16 => &PATTERN_16[..],
        _ => return None,
    })
}

/// Offset of sample `index` within its pixel, with `(0, 0)` the top-left corner and `(0.5, 0.5)` the centre.
pub fn sample_offset(count: u32, index: u32) -> (f32, f32) {
    debug_assert!(index < count, "sample index {} out of range for {} samples", index, count);

    match standard_pattern(count) {
        Some(pattern) => {
            let (dx, dy) = pattern[index as usize];

            (0.5 + dx as f32 / 16.0, 0.5 + dy as f32 / 16.0)
        }
        None => {
            let columns = (count as f32).sqrt().ceil() as u32;
            let rows = (count + columns - 1) / columns;

            (((index % columns) as f32 + 0.5) / columns as f32,
             ((index / columns) as f32 + 0.5) / rows as f32)
        }
    }
}

/// Pixel-space position of sample `index` of the pixel at `(x, y)`
#[inline]
pub fn sample_position(count: u32, x: i32, y: i32, index: u32) -> Point2<f32> {
    let (dx, dy) = sample_offset(count, index);

    Point2::new(x as f32 + dx, y as f32 + dy)
}
