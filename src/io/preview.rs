use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::MaskResult;
use crate::raster::grid::{MaskGrid, UNMASKED};

/// Grayscale quick-look bytes: unmasked pixels white, masked black, top row = highest declination.
pub fn preview_luma(grid: &MaskGrid) -> Vec<u8> {
    let mut out = Vec::with_capacity(grid.as_slice().len());
    for row in grid.rows().rev() {
        out.extend(row.iter().map(|&f| if f == UNMASKED { 255 } else { 0 }));
    }
    out
}

pub fn write_png(path: &Path, grid: &MaskGrid) -> MaskResult<()> {
    let luma = preview_luma(grid);
    image::save_buffer_with_format(
        path,
        &luma,
        grid.width(),
        grid.height(),
        image::ColorType::L8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/preview.rs"]
mod tests;
