//! FITS output: one primary image HDU holding the mask and its WCS keys.

use std::path::Path;

use anyhow::Context as _;
use fitsio::compat::errors::Error as FitsIoError;
use fitsio::compat::fitsfile::FitsFile;
use fitsio::compat::hdu::FitsHdu;
use fitsio::compat::images::{ImageDescription, ImageType, WriteImage};

use crate::assembly::MaskImage;
use crate::foundation::error::{MaskError, MaskResult};
use crate::wcs::header::{CardValue, HeaderCard};

/// Integer type of the stored flags.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FitsPixelType {
    U8,
    I16,
    I32,
    #[default]
    I64,
}

impl FitsPixelType {
    pub fn image_type(self) -> ImageType {
        match self {
            Self::U8 => ImageType::UnsignedByte,
            Self::I16 => ImageType::Short,
            Self::I32 => ImageType::Long,
            Self::I64 => ImageType::LongLong,
        }
    }

    pub fn bitpix(self) -> i64 {
        self.image_type().to_bitpix()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FitsOptions {
    pub pixel_type: FitsPixelType,
    /// Replace an existing file instead of failing.
    pub overwrite: bool,
}

/// Encode `image` as the bytes of a complete FITS file.
pub fn encode_mask(image: &MaskImage, pixel_type: FitsPixelType) -> MaskResult<Vec<u8>> {
    let dims = dimensions(image);
    let description = ImageDescription {
        data_type: pixel_type.image_type(),
        dimensions: &dims,
    };
    let mut fptr = FitsFile::create_in_memory_with_custom_primary(&description)
        .context("create in-memory FITS file")?;
    fill_primary(&mut fptr, image)?;
    Ok(fptr.into_bytes().context("serialize FITS file")?)
}

/// Write `image` to `path` as a FITS file.
#[tracing::instrument(skip(image))]
pub fn write_mask(path: &Path, image: &MaskImage, options: &FitsOptions) -> MaskResult<()> {
    let dims = dimensions(image);
    let description = ImageDescription {
        data_type: options.pixel_type.image_type(),
        dimensions: &dims,
    };

    let mut builder = FitsFile::create(path).with_custom_primary(&description);
    if options.overwrite {
        builder = builder.overwrite();
    }
    let mut fptr = match builder.open() {
        Ok(f) => f,
        Err(FitsIoError::ExistingFile(_)) => {
            return Err(MaskError::Other(anyhow::anyhow!(
                "output file '{}' already exists",
                path.display()
            )));
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("create FITS file '{}'", path.display()))
                .into());
        }
    };

    fill_primary(&mut fptr, image)?;
    let bytes = fptr
        .into_bytes()
        .with_context(|| format!("write FITS file '{}'", path.display()))?;

    tracing::debug!(bytes = bytes.len(), "wrote FITS mask");
    Ok(())
}

/// Row-major dimensions, slowest axis first: `[NAXIS2, NAXIS1]`.
fn dimensions(image: &MaskImage) -> [usize; 2] {
    [image.grid.height() as usize, image.grid.width() as usize]
}

fn fill_primary(fptr: &mut FitsFile, image: &MaskImage) -> MaskResult<()> {
    let hdu = fptr.primary_hdu().context("open primary HDU")?;

    // NAXIS1 varies fastest, which is the grid's row-major layout; flags are
    // converted to the HDU's BITPIX on write
    u8::write_image(fptr, &hdu, image.grid.as_slice()).context("write mask pixels")?;

    for card in image.header.cards() {
        write_card(fptr, &hdu, &card)?;
    }
    Ok(())
}

fn write_card(fptr: &mut FitsFile, hdu: &FitsHdu, card: &HeaderCard) -> MaskResult<()> {
    let written = match &card.value {
        CardValue::Int(v) => hdu.write_key(fptr, card.keyword, (*v, card.comment)),
        CardValue::Real(v) => {
            if !v.is_finite() {
                return Err(MaskError::invalid_config(format!(
                    "FITS value for {} must be finite, got {v}",
                    card.keyword
                )));
            }
            hdu.write_key(fptr, card.keyword, (*v, card.comment))
        }
        CardValue::Text(s) => {
            if !s.is_ascii() {
                return Err(MaskError::invalid_config(format!(
                    "FITS string value for {} must be ASCII",
                    card.keyword
                )));
            }
            hdu.write_key(fptr, card.keyword, (s.as_str(), card.comment))
        }
    };
    Ok(written.with_context(|| format!("write FITS key {}", card.keyword))?)
}

#[cfg(test)]
#[path = "../../tests/unit/io/fits.rs"]
mod tests;
