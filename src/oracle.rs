use crate::foundation::error::MaskResult;

/// Answers whether a sky position lies inside the masked region.
///
/// Implementations must be free of side effects: the rasterizer may call `contains` from several
/// threads at once and in any pixel order.
pub trait ContainmentOracle: Sync {
    /// `true` iff `(ra, dec)` (degrees) lies inside the union of masked polygons.
    fn contains(&self, ra: f64, dec: f64) -> MaskResult<bool>;
}

impl<T: ContainmentOracle + ?Sized> ContainmentOracle for &T {
    fn contains(&self, ra: f64, dec: f64) -> MaskResult<bool> {
        (**self).contains(ra, dec)
    }
}

impl<T: ContainmentOracle + ?Sized> ContainmentOracle for Box<T> {
    fn contains(&self, ra: f64, dec: f64) -> MaskResult<bool> {
        (**self).contains(ra, dec)
    }
}

/// Adapts a closure into a [`ContainmentOracle`].
pub struct FnOracle<F>(pub F);

impl<F> FnOracle<F>
where
    F: Fn(f64, f64) -> MaskResult<bool> + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ContainmentOracle for FnOracle<F>
where
    F: Fn(f64, f64) -> MaskResult<bool> + Sync,
{
    fn contains(&self, ra: f64, dec: f64) -> MaskResult<bool> {
        (self.0)(ra, dec)
    }
}

/// Oracle with the same answer everywhere: `Constant(true)` masks the whole sky.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constant(pub bool);

impl ContainmentOracle for Constant {
    fn contains(&self, _ra: f64, _dec: f64) -> MaskResult<bool> {
        Ok(self.0)
    }
}

#[cfg(test)]
#[path = "../tests/unit/oracle.rs"]
mod tests;
