use crate::foundation::core::{GridShape, SkyCoord};
use crate::foundation::error::{MaskError, MaskResult};
use crate::wcs::projection::{ProjectionConfig, TanProjection};

pub const CTYPE_RA_TAN: &str = "RA---TAN";
pub const CTYPE_DEC_TAN: &str = "DEC--TAN";

/// World coordinate metadata for a TAN-projected mask, in FITS keyword terms.
///
/// `crpix` follows the FITS 1-based pixel convention, so it is the projection's 0-based
/// reference pixel plus one.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WcsHeader {
    pub wcsaxes: u32,
    pub crpix: [f64; 2],
    pub cdelt: [f64; 2],
    pub cunit: [String; 2],
    pub ctype: [String; 2],
    pub crval: [f64; 2],
    pub lonpole: f64,
    pub latpole: f64,
    pub radesys: String,
}

impl WcsHeader {
    pub fn from_projection(projection: &TanProjection) -> Self {
        let cfg = projection.config();
        let [ref_x, ref_y] = cfg.reference_pixel();
        let center = cfg.center();
        Self {
            wcsaxes: 2,
            crpix: [ref_x + 1.0, ref_y + 1.0],
            cdelt: [cfg.pixel_size(), cfg.pixel_size()],
            cunit: ["deg".to_string(), "deg".to_string()],
            ctype: [CTYPE_RA_TAN.to_string(), CTYPE_DEC_TAN.to_string()],
            crval: [center.ra, center.dec],
            lonpole: 180.0,
            latpole: center.dec,
            radesys: "ICRS".to_string(),
        }
    }

    /// Rebuild the projection this header describes for a grid of `shape`.
    pub fn projection(&self, shape: GridShape) -> MaskResult<TanProjection> {
        if self.ctype[0] != CTYPE_RA_TAN || self.ctype[1] != CTYPE_DEC_TAN {
            return Err(MaskError::invalid_config(format!(
                "unsupported axis types {:?}, expected [{CTYPE_RA_TAN}, {CTYPE_DEC_TAN}]",
                self.ctype
            )));
        }
        if self.cdelt[0] != self.cdelt[1] {
            return Err(MaskError::invalid_config(format!(
                "pixel scale must match on both axes, got {:?}",
                self.cdelt
            )));
        }
        if self.lonpole != 180.0 {
            return Err(MaskError::invalid_config(format!(
                "unsupported LONPOLE {}, expected 180",
                self.lonpole
            )));
        }
        let config = ProjectionConfig::new(
            SkyCoord::new(self.crval[0], self.crval[1]),
            self.cdelt[0],
            shape,
            [self.crpix[0] - 1.0, self.crpix[1] - 1.0],
        )?;
        Ok(TanProjection::new(config))
    }

    /// Header cards in the order they are written to a FITS header.
    pub fn cards(&self) -> Vec<HeaderCard> {
        vec![
            HeaderCard::new(
                "WCSAXES",
                CardValue::Int(i64::from(self.wcsaxes)),
                "Number of coordinate axes",
            ),
            HeaderCard::new(
                "CRPIX1",
                CardValue::Real(self.crpix[0]),
                "Pixel coordinate of reference point",
            ),
            HeaderCard::new(
                "CRPIX2",
                CardValue::Real(self.crpix[1]),
                "Pixel coordinate of reference point",
            ),
            HeaderCard::new(
                "CDELT1",
                CardValue::Real(self.cdelt[0]),
                "[deg] Coordinate increment at reference point",
            ),
            HeaderCard::new(
                "CDELT2",
                CardValue::Real(self.cdelt[1]),
                "[deg] Coordinate increment at reference point",
            ),
            HeaderCard::new(
                "CUNIT1",
                CardValue::Text(self.cunit[0].clone()),
                "Units of coordinate increment and value",
            ),
            HeaderCard::new(
                "CUNIT2",
                CardValue::Text(self.cunit[1].clone()),
                "Units of coordinate increment and value",
            ),
            HeaderCard::new(
                "CTYPE1",
                CardValue::Text(self.ctype[0].clone()),
                "Right ascension, gnomonic projection",
            ),
            HeaderCard::new(
                "CTYPE2",
                CardValue::Text(self.ctype[1].clone()),
                "Declination, gnomonic projection",
            ),
            HeaderCard::new(
                "CRVAL1",
                CardValue::Real(self.crval[0]),
                "[deg] Coordinate value at reference point",
            ),
            HeaderCard::new(
                "CRVAL2",
                CardValue::Real(self.crval[1]),
                "[deg] Coordinate value at reference point",
            ),
            HeaderCard::new(
                "LONPOLE",
                CardValue::Real(self.lonpole),
                "[deg] Native longitude of celestial pole",
            ),
            HeaderCard::new(
                "LATPOLE",
                CardValue::Real(self.latpole),
                "[deg] Native latitude of celestial pole",
            ),
            HeaderCard::new(
                "RADESYS",
                CardValue::Text(self.radesys.clone()),
                "Equatorial coordinate system",
            ),
        ]
    }
}

/// One `KEYWORD = value / comment` header key, written through the FITS writer.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCard {
    pub keyword: &'static str,
    pub value: CardValue,
    pub comment: &'static str,
}

impl HeaderCard {
    pub fn new(keyword: &'static str, value: CardValue, comment: &'static str) -> Self {
        Self {
            keyword,
            value,
            comment,
        }
    }
}

/// Value kinds the WCS keys need.
#[derive(Clone, Debug, PartialEq)]
pub enum CardValue {
    Int(i64),
    Real(f64),
    Text(String),
}

#[cfg(test)]
#[path = "../../tests/unit/wcs/header.rs"]
mod tests;
