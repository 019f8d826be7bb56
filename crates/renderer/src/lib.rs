//! Rasterization of the city scene and assembly of the SVG document.

pub mod city;
pub mod document;
pub mod draw;
pub mod raster;

pub use city::*;
pub use document::*;
pub use draw::*;
pub use raster::*;
