pub mod header;
pub mod projection;
