//! Screen-space sky decoration. Not part of the depth-sorted scene.

use glam::Vec2;
use rand::Rng;

/// One twinkling star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    /// Animation delay in seconds, one decimal place.
    pub delay: f32,
}

/// Scatter `count` stars over the band `[0, width) x [0, band_height)`.
pub fn scatter_stars<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    width: f32,
    band_height: f32,
) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let x = rng.gen::<f32>() * width;
            let y = rng.gen::<f32>() * band_height;
            let radius = 0.5 + rng.gen::<f32>() * 1.5;
            let delay = (rng.gen::<f32>() * 30.0).round() / 10.0;
            Star {
                position: Vec2::new(x, y),
                radius,
                delay,
            }
        })
        .collect()
}
