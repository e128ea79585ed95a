use std::path::Path;
use std::str::FromStr;

use anyhow::Context as _;

use crate::foundation::core::SkyCoord;
use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::UnitVec3;
use crate::mangle::parse::parse_mask;
use crate::oracle::ContainmentOracle;

const AXIS_NORM_TOLERANCE: f64 = 1e-6;

/// Spherical cap: the points `r` with `1 - r·axis < cm` (or `> -cm` for the complement when
/// `cm < 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cap {
    axis: UnitVec3,
    cm: f64,
}

impl Cap {
    pub fn new(axis: UnitVec3, cm: f64) -> MaskResult<Self> {
        let values = [axis.x, axis.y, axis.z, cm];
        if !values.iter().all(|v| v.is_finite()) {
            return Err(MaskError::invalid_config(format!(
                "cap values must be finite, got {values:?}"
            )));
        }
        let norm = axis.norm();
        if (norm - 1.0).abs() > AXIS_NORM_TOLERANCE {
            return Err(MaskError::invalid_config(format!(
                "cap axis must be a unit vector, got norm {norm}"
            )));
        }
        Ok(Self { axis, cm })
    }

    pub fn axis(&self) -> UnitVec3 {
        self.axis
    }

    pub fn cm(&self) -> f64 {
        self.cm
    }

    pub fn contains(&self, r: UnitVec3) -> bool {
        let d = 1.0 - r.dot(self.axis);
        if self.cm < 0.0 {
            d > -self.cm
        } else {
            d < self.cm
        }
    }
}

/// Intersection of caps, one entry of a mangle file.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub id: i64,
    pub weight: f64,
    pub pixel: Option<i64>,
    /// Area in steradians as recorded in the file, if any.
    pub area_str: Option<f64>,
    caps: Vec<Cap>,
}

impl Polygon {
    pub fn new(id: i64, weight: f64, caps: Vec<Cap>) -> Self {
        Self {
            id,
            weight,
            pixel: None,
            area_str: None,
            caps,
        }
    }

    pub fn with_pixel(mut self, pixel: Option<i64>) -> Self {
        self.pixel = pixel;
        self
    }

    pub fn with_area(mut self, area_str: Option<f64>) -> Self {
        self.area_str = area_str;
        self
    }

    pub fn caps(&self) -> &[Cap] {
        &self.caps
    }

    /// A polygon without caps covers the whole sphere.
    pub fn contains(&self, r: UnitVec3) -> bool {
        self.caps.iter().all(|cap| cap.contains(r))
    }
}

/// A loaded mangle mask: the union of its polygons.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MangleMask {
    polygons: Vec<Polygon>,
    pub pixelization: Option<String>,
    pub snapped: bool,
    pub balkanized: bool,
}

impl MangleMask {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            ..Self::default()
        }
    }

    /// Read and parse a mangle polygon file.
    #[tracing::instrument]
    pub fn open(path: &Path) -> MaskResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read mangle file '{}'", path.display()))?;
        let mask = text.parse::<Self>()?;
        tracing::info!(
            polygons = mask.len(),
            snapped = mask.snapped,
            balkanized = mask.balkanized,
            "loaded mangle mask"
        );
        Ok(mask)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Index (in file order) of the first polygon containing `(ra, dec)`.
    pub fn polygon_index(&self, ra: f64, dec: f64) -> MaskResult<Option<usize>> {
        let sky = SkyCoord::new(ra, dec);
        if !sky.is_finite() {
            return Err(MaskError::oracle(format!(
                "cannot locate non-finite coordinate ra={ra}, dec={dec}"
            )));
        }
        let r = sky.to_unit_vector();
        Ok(self.polygons.iter().position(|poly| poly.contains(r)))
    }

    /// Weight of the polygon containing `(ra, dec)`, or 0 outside the mask.
    pub fn weight(&self, ra: f64, dec: f64) -> MaskResult<f64> {
        Ok(self
            .polygon_index(ra, dec)?
            .map_or(0.0, |idx| self.polygons[idx].weight))
    }
}

impl ContainmentOracle for MangleMask {
    fn contains(&self, ra: f64, dec: f64) -> MaskResult<bool> {
        Ok(self.polygon_index(ra, dec)?.is_some())
    }
}

impl FromStr for MangleMask {
    type Err = MaskError;

    fn from_str(s: &str) -> MaskResult<Self> {
        parse_mask(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mangle/polygon.rs"]
mod tests;
