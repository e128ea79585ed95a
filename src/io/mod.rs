pub mod fits;
pub mod preview;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context as _;

use crate::assembly::MaskImage;
use crate::foundation::core::GridShape;
use crate::foundation::error::MaskResult;
use crate::wcs::header::WcsHeader;

/// Machine-readable description of a written mask.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeaderSidecar {
    pub shape: GridShape,
    pub header: WcsHeader,
}

impl HeaderSidecar {
    pub fn new(image: &MaskImage) -> Self {
        Self {
            shape: image.grid.shape(),
            header: image.header.clone(),
        }
    }
}

pub fn write_header_json(path: &Path, image: &MaskImage) -> MaskResult<()> {
    let f = File::create(path)
        .with_context(|| format!("create header json '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), &HeaderSidecar::new(image))
        .with_context(|| format!("write header json '{}'", path.display()))?;
    Ok(())
}
