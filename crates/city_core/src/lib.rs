//! Core types for the contribution city.
//!
//! This crate provides the foundational types used by every other crate:
//! - The isometric projector (grid space to screen space)
//! - Colors, face color sets, blocks and polygons
//! - The dot-matrix glyph table used for voxel text
//! - The error type shared by the composer and the rasterizers

pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod projection;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use projection::*;

// Re-export commonly used types
pub use glam::{Vec2, Vec3};
