use crate::foundation::error::{MaskError, MaskResult};
use crate::raster::grid::MaskGrid;
use crate::wcs::header::WcsHeader;
use crate::wcs::projection::TanProjection;

/// A finished mask: integer flags plus the header that georeferences them.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskImage {
    pub grid: MaskGrid,
    pub header: WcsHeader,
}

/// Bundle `grid` with the WCS metadata of `projection`.
pub fn assemble(grid: MaskGrid, projection: &TanProjection) -> MaskResult<MaskImage> {
    let expected = projection.config().shape();
    if grid.shape() != expected {
        return Err(MaskError::invalid_config(format!(
            "grid is {}x{} but the projection describes {}x{}",
            grid.width(),
            grid.height(),
            expected.width,
            expected.height
        )));
    }
    Ok(MaskImage {
        grid,
        header: WcsHeader::from_projection(projection),
    })
}

#[cfg(test)]
#[path = "../tests/unit/assembly.rs"]
mod tests;
