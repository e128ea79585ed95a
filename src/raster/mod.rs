pub mod grid;
pub mod rasterize;
