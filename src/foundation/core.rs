use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::{UnitVec3, normalize_ra_deg};

/// Celestial position in degrees (ICRS right ascension and declination).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkyCoord {
    /// Right ascension in degrees.
    pub ra: f64,
    /// Declination in degrees.
    pub dec: f64,
}

impl SkyCoord {
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Validated constructor: both values finite and `dec` within `[-90, 90]`.
    pub fn checked(ra: f64, dec: f64) -> MaskResult<Self> {
        if !ra.is_finite() || !dec.is_finite() {
            return Err(MaskError::invalid_config(format!(
                "sky coordinate must be finite, got ra={ra}, dec={dec}"
            )));
        }
        if !(-90.0..=90.0).contains(&dec) {
            return Err(MaskError::invalid_config(format!(
                "declination must be within [-90, 90], got {dec}"
            )));
        }
        Ok(Self { ra, dec })
    }

    pub fn is_finite(self) -> bool {
        self.ra.is_finite() && self.dec.is_finite()
    }

    /// Same position with right ascension wrapped into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Self {
            ra: normalize_ra_deg(self.ra),
            dec: self.dec,
        }
    }

    pub fn to_unit_vector(self) -> UnitVec3 {
        UnitVec3::from_radec_deg(self.ra, self.dec)
    }
}

/// Output grid dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridShape {
    /// Pixels along the right-ascension axis (`NAXIS1`).
    pub width: u32,
    /// Pixels along the declination axis (`NAXIS2`).
    pub height: u32,
}

impl GridShape {
    /// Upper bound on `width * height`: one flag byte per pixel, 4 GiB in total.
    pub const MAX_PIXELS: u64 = 1 << 32;

    pub fn new(width: u32, height: u32) -> MaskResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskError::invalid_config(format!(
                "grid dimensions must be >= 1, got {width}x{height}"
            )));
        }
        let count = u64::from(width)
            .checked_mul(u64::from(height))
            .filter(|&n| n <= Self::MAX_PIXELS && usize::try_from(n).is_ok());
        if count.is_none() {
            return Err(MaskError::invalid_config(format!(
                "grid of {width}x{height} pixels exceeds the limit of {} pixels",
                Self::MAX_PIXELS
            )));
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
