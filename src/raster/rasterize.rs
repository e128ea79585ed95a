use anyhow::Context as _;
use rayon::prelude::*;

use crate::foundation::core::GridShape;
use crate::foundation::error::{MaskError, MaskResult};
use crate::oracle::ContainmentOracle;
use crate::raster::grid::{MASKED, MaskGrid, UNMASKED, alloc_flags};
use crate::wcs::projection::TanProjection;

/// How [`rasterize_with`] spreads work across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RasterOptions {
    /// Compute rows on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker count for the pool. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Sequential rasterization of an `nx` by `ny` grid.
pub fn rasterize<O>(
    projection: &TanProjection,
    oracle: &O,
    nx: u32,
    ny: u32,
) -> MaskResult<MaskGrid>
where
    O: ContainmentOracle + ?Sized,
{
    rasterize_with(projection, oracle, nx, ny, &RasterOptions::default())
}

/// Evaluate every pixel center against `oracle`: 1 outside the masked region, 0 inside.
///
/// The first failing pixel aborts the whole grid; its error comes back wrapped in
/// [`MaskError::AtPixel`]. Parallel and sequential runs produce identical grids.
#[tracing::instrument(skip(projection, oracle, options), fields(parallel = options.parallel))]
pub fn rasterize_with<O>(
    projection: &TanProjection,
    oracle: &O,
    nx: u32,
    ny: u32,
    options: &RasterOptions,
) -> MaskResult<MaskGrid>
where
    O: ContainmentOracle + ?Sized,
{
    let shape = GridShape::new(nx, ny)?;
    let width = nx as usize;

    if !options.parallel {
        let mut flags = alloc_flags(shape, MASKED)?;
        for (j, row) in flags.chunks_exact_mut(width).enumerate() {
            fill_row(projection, oracle, j as i64, row)?;
        }
        return Ok(MaskGrid::from_parts(shape, flags));
    }

    let pool = build_thread_pool(options.threads)?;
    tracing::debug!(threads = pool.current_num_threads(), "rasterizing rows in parallel");

    let mut flags = alloc_flags(shape, MASKED)?;
    pool.install(|| {
        flags
            .par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(j, row)| fill_row(projection, oracle, j as i64, row))
    })?;

    Ok(MaskGrid::from_parts(shape, flags))
}

fn fill_row<O>(projection: &TanProjection, oracle: &O, j: i64, row: &mut [u8]) -> MaskResult<()>
where
    O: ContainmentOracle + ?Sized,
{
    for (i, cell) in row.iter_mut().enumerate() {
        let i = i as i64;
        let sky = projection.pixel_to_sky(i, j);
        let contained = oracle
            .contains(sky.ra, sky.dec)
            .map_err(|e| MaskError::at_pixel(i, j, sky.ra, sky.dec, e))?;
        *cell = if contained { MASKED } else { UNMASKED };
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> MaskResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MaskError::invalid_config(
            "raster threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    Ok(builder.build().context("build rayon thread pool")?)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterize.rs"]
mod tests;
