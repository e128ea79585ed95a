pub(crate) const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
pub(crate) const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Wrap a right ascension into `[0, 360)`.
pub(crate) fn normalize_ra_deg(ra: f64) -> f64 {
    let wrapped = ra.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Cartesian unit vector on the celestial sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitVec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl UnitVec3 {
    pub fn from_radec_deg(ra: f64, dec: f64) -> Self {
        let (sin_ra, cos_ra) = (ra * DEG_TO_RAD).sin_cos();
        let (sin_dec, cos_dec) = (dec * DEG_TO_RAD).sin_cos();
        Self {
            x: cos_dec * cos_ra,
            y: cos_dec * sin_ra,
            z: sin_dec,
        }
    }

    pub fn dot(self, other: UnitVec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
