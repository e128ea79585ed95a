//! Rasterize mangle spherical-polygon masks into TAN-projected binary masks.
//!
//! The flow is:
//!
//! - size the grid with [`grid_size`] and build a [`TanProjection`]
//! - evaluate every pixel center against a [`ContainmentOracle`] (usually a [`MangleMask`])
//!   with [`rasterize`] or [`rasterize_with`]
//! - bundle the grid and its WCS metadata with [`assemble`]
//!
//! [`create_mask`] runs all three steps; [`io`] persists the result as FITS, PNG or JSON.
//!
//! Pixel flags are 1 outside every polygon and 0 inside one, so the grid can be used directly
//! as a weight map.
#![forbid(unsafe_code)]

mod foundation;

pub mod assembly;
pub mod io;
pub mod mangle;
pub mod oracle;
pub mod pipeline;
pub mod raster;
pub mod wcs;

pub use crate::assembly::{MaskImage, assemble};
pub use crate::foundation::core::{GridShape, SkyCoord};
pub use crate::foundation::error::{MaskError, MaskResult};
pub use crate::foundation::math::UnitVec3;
pub use crate::io::fits::{FitsOptions, FitsPixelType};
pub use crate::mangle::polygon::{Cap, MangleMask, Polygon};
pub use crate::oracle::{Constant, ContainmentOracle, FnOracle};
pub use crate::pipeline::{MaskRequest, create_mask};
pub use crate::raster::grid::{MASKED, MaskGrid, UNMASKED};
pub use crate::raster::rasterize::{RasterOptions, rasterize, rasterize_with};
pub use crate::wcs::header::WcsHeader;
pub use crate::wcs::projection::{ProjectionConfig, TanProjection, grid_size};
