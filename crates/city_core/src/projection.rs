//! Fixed isometric projection from city grid space to document space.
//!
//! ```text
//! x = origin.x + (gx - gy) * tile_width
//! y = origin.y + (gx + gy) * tile_height - gz
//! ```
//!
//! Grid x runs down-right on screen, grid y runs down-left, and gz lifts a point
//! straight up with no foreshortening. Larger `gx + gy` is closer to the viewer,
//! which is what the painter's ordering of the composer relies on.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Stateless grid-to-screen transform. All parameters are explicit; there is no camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projector {
    /// Screen x per grid unit along each horizontal axis.
    pub tile_width: f32,
    /// Screen y per grid unit along each horizontal axis.
    pub tile_height: f32,
    /// Screen position of grid (0, 0, 0).
    pub origin: Vec2,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            tile_width: 8.0,
            tile_height: 4.0,
            origin: Vec2::new(232.0, 210.0),
        }
    }
}

impl Projector {
    pub fn new(tile_width: f32, tile_height: f32, origin: Vec2) -> Self {
        Self {
            tile_width,
            tile_height,
            origin,
        }
    }

    /// Project a grid point (`x` = gx, `y` = gy, `z` = gz) to screen space.
    #[inline]
    pub fn project(&self, p: Vec3) -> Vec2 {
        Vec2::new(
            self.origin.x + (p.x - p.y) * self.tile_width,
            self.origin.y + (p.x + p.y) * self.tile_height - p.z,
        )
    }

    #[inline]
    pub fn project_xyz(&self, gx: f32, gy: f32, gz: f32) -> Vec2 {
        self.project(Vec3::new(gx, gy, gz))
    }
}
