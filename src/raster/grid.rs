use crate::foundation::core::GridShape;
use crate::foundation::error::{MaskError, MaskResult};

/// Flag value for pixels outside every polygon.
pub const UNMASKED: u8 = 1;
/// Flag value for pixels inside a polygon.
pub const MASKED: u8 = 0;

/// Binary mask, row-major with shape `(height, width)`: `flags[j * width + i]`.
///
/// Rows follow declination (`j`), columns right ascension (`i`). A grid is only ever handed out
/// fully populated and has no mutators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskGrid {
    shape: GridShape,
    flags: Vec<u8>,
}

/// Flag buffer for `shape`, every pixel set to `fill`. Allocation failure is an error, not an
/// abort.
pub(crate) fn alloc_flags(shape: GridShape, fill: u8) -> MaskResult<Vec<u8>> {
    let n = shape.pixel_count();
    let mut flags = Vec::new();
    flags.try_reserve_exact(n).map_err(|e| {
        MaskError::invalid_config(format!(
            "cannot allocate a {}x{} grid: {e}",
            shape.width, shape.height
        ))
    })?;
    flags.resize(n, fill);
    Ok(flags)
}

impl MaskGrid {
    pub(crate) fn from_parts(shape: GridShape, flags: Vec<u8>) -> Self {
        debug_assert_eq!(flags.len(), shape.pixel_count());
        Self { shape, flags }
    }

    /// Validated constructor for callers that already hold flag data.
    pub fn from_flags(shape: GridShape, flags: Vec<u8>) -> MaskResult<Self> {
        let shape = GridShape::new(shape.width, shape.height)?;
        if flags.len() != shape.pixel_count() {
            return Err(MaskError::invalid_config(format!(
                "{}x{} grid needs {} flags, got {}",
                shape.width,
                shape.height,
                shape.pixel_count(),
                flags.len()
            )));
        }
        if let Some(bad) = flags.iter().find(|&&f| f > 1) {
            return Err(MaskError::invalid_config(format!(
                "mask flags must be 0 or 1, got {bad}"
            )));
        }
        Ok(Self { shape, flags })
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn width(&self) -> u32 {
        self.shape.width
    }

    pub fn height(&self) -> u32 {
        self.shape.height
    }

    /// Flag at column `i`, row `j`; `None` outside the grid.
    pub fn get(&self, i: u32, j: u32) -> Option<u8> {
        if i >= self.shape.width || j >= self.shape.height {
            return None;
        }
        self.flags
            .get(j as usize * self.shape.width as usize + i as usize)
            .copied()
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        self.flags.chunks_exact(self.shape.width as usize)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.flags
    }

    pub fn into_flags(self) -> Vec<u8> {
        self.flags
    }

    pub fn unmasked_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f == UNMASKED).count()
    }

    pub fn masked_count(&self) -> usize {
        self.flags.len() - self.unmasked_count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/grid.rs"]
mod tests;
