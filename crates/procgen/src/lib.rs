//! Procedural layout of the contribution city: day records in, depth-keyed scene objects out.

pub mod calendar;
pub mod city;
pub mod layout;
pub mod palette;
pub mod sky;

pub use calendar::*;
pub use city::*;
pub use layout::*;
pub use sky::*;
