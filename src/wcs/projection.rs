use crate::foundation::core::{GridShape, SkyCoord};
use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::{DEG_TO_RAD, RAD_TO_DEG, normalize_ra_deg};

/// Number of pixels needed to cover a field of view: `floor(fov / pixel_size) + 1` per axis.
///
/// A zero field of view yields a single pixel. Fails when `pixel_size` is not a positive finite
/// number, or when a negative field of view would make a dimension `<= 0`.
pub fn grid_size(fov_x: f64, fov_y: f64, pixel_size: f64) -> MaskResult<GridShape> {
    if !pixel_size.is_finite() || pixel_size <= 0.0 {
        return Err(MaskError::invalid_config(format!(
            "pixel size must be a positive finite number, got {pixel_size}"
        )));
    }
    let width = axis_len("fov_x", fov_x, pixel_size)?;
    let height = axis_len("fov_y", fov_y, pixel_size)?;
    GridShape::new(width, height)
}

fn axis_len(name: &str, fov: f64, pixel_size: f64) -> MaskResult<u32> {
    if !fov.is_finite() {
        return Err(MaskError::invalid_config(format!(
            "{name} must be finite, got {fov}"
        )));
    }
    let n = (fov / pixel_size).floor() + 1.0;
    if n < 1.0 {
        return Err(MaskError::invalid_config(format!(
            "{name}={fov} with pixel size {pixel_size} gives a degenerate axis of {n} pixels"
        )));
    }
    if n > f64::from(u32::MAX) {
        return Err(MaskError::invalid_config(format!(
            "{name}={fov} with pixel size {pixel_size} gives too many pixels ({n})"
        )));
    }
    Ok(n as u32)
}

/// Immutable description of a TAN projection over a finite pixel grid.
///
/// The reference pixel is a 0-based, possibly fractional pixel position that maps exactly onto
/// the center coordinate, with its right ascension normalized into `[0, 360)`. Pixel scale is the
/// same on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConfig {
    center: SkyCoord,
    pixel_size: f64,
    shape: GridShape,
    reference_pixel: [f64; 2],
}

impl ProjectionConfig {
    pub fn new(
        center: SkyCoord,
        pixel_size: f64,
        shape: GridShape,
        reference_pixel: [f64; 2],
    ) -> MaskResult<Self> {
        let center = SkyCoord::checked(center.ra, center.dec)?.normalized();
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(MaskError::invalid_config(format!(
                "pixel size must be a positive finite number, got {pixel_size}"
            )));
        }
        let shape = GridShape::new(shape.width, shape.height)?;
        if !reference_pixel.iter().all(|v| v.is_finite()) {
            return Err(MaskError::invalid_config(format!(
                "reference pixel must be finite, got {reference_pixel:?}"
            )));
        }
        Ok(Self {
            center,
            pixel_size,
            shape,
            reference_pixel,
        })
    }

    /// Center the projection on `(center_ra, center_dec)` with the reference pixel at
    /// `(nx / 2, ny / 2)`, truncated.
    ///
    /// For even sizes this puts the center half a pixel right/up of the geometric middle of the
    /// grid; masks depend on that exact placement.
    pub fn build(
        center_ra: f64,
        center_dec: f64,
        pixel_size: f64,
        nx: u32,
        ny: u32,
    ) -> MaskResult<Self> {
        let shape = GridShape::new(nx, ny)?;
        let reference_pixel = [f64::from(nx / 2), f64::from(ny / 2)];
        Self::new(
            SkyCoord::new(center_ra, center_dec),
            pixel_size,
            shape,
            reference_pixel,
        )
    }

    pub fn center(&self) -> SkyCoord {
        self.center
    }

    /// Degrees per pixel, both axes.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
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

    /// 0-based `[i, j]` pixel position of the center coordinate.
    pub fn reference_pixel(&self) -> [f64; 2] {
        self.reference_pixel
    }
}

/// Gnomonic (WCS `TAN`) projection with the native pole at the reference point.
///
/// Right ascension increases with the column index `i` and declination with the row index `j`.
/// Pixel queries are not bounds-checked against the grid shape.
#[derive(Clone, Copy, Debug)]
pub struct TanProjection {
    config: ProjectionConfig,
    sin_dec0: f64,
    cos_dec0: f64,
}

impl TanProjection {
    pub fn new(config: ProjectionConfig) -> Self {
        let (sin_dec0, cos_dec0) = (config.center.dec * DEG_TO_RAD).sin_cos();
        Self {
            config,
            sin_dec0,
            cos_dec0,
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Sky coordinate of the center of pixel `(i, j)`.
    pub fn pixel_to_sky(&self, i: i64, j: i64) -> SkyCoord {
        self.pixel_to_sky_f(i as f64, j as f64)
    }

    /// Sky coordinate of a fractional pixel position.
    pub fn pixel_to_sky_f(&self, x: f64, y: f64) -> SkyCoord {
        let [ref_x, ref_y] = self.config.reference_pixel;
        let scale = self.config.pixel_size * DEG_TO_RAD;
        let xi = (x - ref_x) * scale;
        let eta = (y - ref_y) * scale;

        if xi == 0.0 && eta == 0.0 {
            return self.config.center;
        }

        let den = self.cos_dec0 - eta * self.sin_dec0;
        let ra = self.config.center.ra + xi.atan2(den) * RAD_TO_DEG;
        let dec = (self.sin_dec0 + eta * self.cos_dec0).atan2(xi.hypot(den)) * RAD_TO_DEG;

        SkyCoord::new(normalize_ra_deg(ra), dec)
    }

    /// Fractional pixel position `(x, y)` of a sky coordinate.
    ///
    /// Fails for points on or behind the horizon of the tangent plane, where `TAN` diverges.
    pub fn sky_to_pixel(&self, sky: SkyCoord) -> MaskResult<(f64, f64)> {
        if !sky.is_finite() {
            return Err(MaskError::projection(format!(
                "sky coordinate must be finite, got ra={}, dec={}",
                sky.ra, sky.dec
            )));
        }

        let (sin_dec, cos_dec) = (sky.dec * DEG_TO_RAD).sin_cos();
        let (sin_dra, cos_dra) = ((sky.ra - self.config.center.ra) * DEG_TO_RAD).sin_cos();

        let cos_c = self.sin_dec0 * sin_dec + self.cos_dec0 * cos_dec * cos_dra;
        if cos_c <= 0.0 {
            return Err(MaskError::projection(format!(
                "ra={}, dec={} is not on the visible hemisphere of the TAN plane centered at \
                 ra={}, dec={}",
                sky.ra, sky.dec, self.config.center.ra, self.config.center.dec
            )));
        }

        let xi = cos_dec * sin_dra / cos_c;
        let eta = (self.cos_dec0 * sin_dec - self.sin_dec0 * cos_dec * cos_dra) / cos_c;

        let [ref_x, ref_y] = self.config.reference_pixel;
        let scale = self.config.pixel_size * DEG_TO_RAD;
        Ok((ref_x + xi / scale, ref_y + eta / scale))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wcs/projection.rs"]
mod tests;
