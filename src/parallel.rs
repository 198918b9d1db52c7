//! Multi-threaded scan conversion
//!
//! Triangles are independent once they have been clipped and culled, so scan conversion is spread across a
//! worker pool while the geometric stages run on the calling thread. Quads still reach the consumer from a
//! single thread and in the same order as [`Rasterizer::rasterize`](../pipeline/struct.Rasterizer.html#method.rasterize)
//! produces them, so frame buffer writes never race.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use scoped_threadpool::Pool;

use crate::error::RasterResult;
use crate::geometry::{ClipSpaceVertex, ScreenVertex, Triangle, TriangleAssembler};
use crate::pipeline::{FragmentQuad, QuadWalker, Rasterizer};

/// Number of triangles a worker claims at once
pub const TRIANGLES_PER_FETCH: usize = 16;

/// Rasterizes a triangle list on `threads` workers, or one per logical CPU if `None`,
/// handing every quad to `consumer` on the calling thread.
///
/// Errors are reported before any work is dispatched.
pub fn rasterize_parallel<F>(rasterizer: &Rasterizer,
                             vertices: &[ClipSpaceVertex],
                             threads: Option<usize>,
                             mut consumer: F) -> RasterResult<()> where F: FnMut(FragmentQuad) {
    let (context, screen_vertices) = rasterizer.screen_vertices(vertices)?;

    let triangles: Vec<Triangle<ScreenVertex>> = TriangleAssembler::new(screen_vertices).collect();

    if triangles.is_empty() {
        return Ok(());
    }

    let thread_count = threads.unwrap_or_else(num_cpus::get).max(1);

    log::debug!("scan converting {} triangles on {} threads", triangles.len(), thread_count);

    let results: Mutex<Vec<Option<Vec<FragmentQuad>>>> = Mutex::new(vec![None; triangles.len()]);
    let index = AtomicUsize::new(0);

    let mut pool = Pool::new(thread_count as u32);

    pool.scoped(|scope| {
        for _ in 0..thread_count {
            scope.execute(|| {
                loop {
                    let start = index.fetch_add(TRIANGLES_PER_FETCH, Ordering::Relaxed);

                    if start >= triangles.len() {
                        break;
                    }

                    let end = (start + TRIANGLES_PER_FETCH).min(triangles.len());

                    for (i, triangle) in triangles[start..end].iter().enumerate() {
                        let quads: Vec<FragmentQuad> = QuadWalker::for_triangle(context, triangle.clone())
                            .map(|walker| walker.collect())
                            .unwrap_or_default();

                        results.lock()[start + i] = Some(quads);
                    }
                }
            });
        }
    });

    for quads in results.into_inner().into_iter().flatten() {
        for quad in quads {
            consumer(quad);
        }
    }

    Ok(())
}
