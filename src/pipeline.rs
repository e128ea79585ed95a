use crate::assembly::{MaskImage, assemble};
use crate::foundation::error::MaskResult;
use crate::oracle::ContainmentOracle;
use crate::raster::rasterize::{RasterOptions, rasterize_with};
use crate::wcs::projection::{ProjectionConfig, TanProjection, grid_size};

/// What to rasterize: a field of view centered on a sky position, at a given resolution.
///
/// All angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MaskRequest {
    pub center_ra: f64,
    pub center_dec: f64,
    pub fov_x: f64,
    pub fov_y: f64,
    pub pixel_size: f64,
}

impl MaskRequest {
    /// Build the projection this request describes, without rasterizing anything.
    pub fn projection(&self) -> MaskResult<TanProjection> {
        let shape = grid_size(self.fov_x, self.fov_y, self.pixel_size)?;
        let config = ProjectionConfig::build(
            self.center_ra,
            self.center_dec,
            self.pixel_size,
            shape.width,
            shape.height,
        )?;
        Ok(TanProjection::new(config))
    }
}

/// Size the grid, build the projection, rasterize `oracle` and attach the WCS header.
///
/// Configuration errors surface before any grid is allocated.
#[tracing::instrument(skip(oracle, options))]
pub fn create_mask<O>(
    request: &MaskRequest,
    oracle: &O,
    options: &RasterOptions,
) -> MaskResult<MaskImage>
where
    O: ContainmentOracle + ?Sized,
{
    let projection = request.projection()?;
    let shape = projection.config().shape();
    tracing::info!(
        width = shape.width,
        height = shape.height,
        "rasterizing mask"
    );

    let grid = rasterize_with(&projection, oracle, shape.width, shape.height, options)?;
    tracing::info!(
        masked = grid.masked_count(),
        unmasked = grid.unmasked_count(),
        "mask complete"
    );

    assemble(grid, &projection)
}
