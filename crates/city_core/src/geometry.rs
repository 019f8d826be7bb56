//! Grid-space blocks and the screen-space polygons they rasterize into.

use glam::{Vec2, Vec3};

use crate::color::{Color, FaceColors};
use crate::error::{CityError, CityResult};

/// Axis-aligned box in city grid space.
///
/// `origin` is the minimum corner: `x` = gx, `y` = gy, `z` = gz (height).
/// Zero extents are allowed and rasterize to zero-area faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub origin: Vec3,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub colors: FaceColors,
    /// Optional CSS class attached to every emitted face (used for animation).
    pub class: Option<&'static str>,
}

impl Block {
    pub fn new(origin: Vec3, width: f32, depth: f32, height: f32, colors: FaceColors) -> Self {
        Self {
            origin,
            width,
            depth,
            height,
            colors,
            class: None,
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Reject negative or NaN extents before they reach the rasterizer.
    pub fn validate(&self) -> CityResult<()> {
        let ok = |v: f32| v >= 0.0;
        if ok(self.width) && ok(self.depth) && ok(self.height) {
            Ok(())
        } else {
            Err(CityError::NegativeExtent {
                width: self.width,
                depth: self.depth,
                height: self.height,
            })
        }
    }
}

/// A filled quadrilateral in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: [Vec2; 4],
    pub fill: Color,
    pub class: Option<&'static str>,
}

impl Polygon {
    /// Shoelace area; zero for faces of degenerate blocks.
    pub fn area(&self) -> f32 {
        let p = &self.points;
        let mut sum = 0.0;
        for i in 0..4 {
            let a = p[i];
            let b = p[(i + 1) % 4];
            sum += a.x * b.y - b.x * a.y;
        }
        sum.abs() * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_validate_accepts_zero_extents() {
        let b = Block::new(Vec3::ZERO, 0.0, 0.0, 0.0, FaceColors::uniform(Color::WHITE));
        assert!(b.validate().is_ok());
    }

    #[test]
    fn block_validate_rejects_negative_and_nan() {
        let c = FaceColors::uniform(Color::WHITE);
        let neg = Block::new(Vec3::ZERO, 1.0, -0.5, 2.0, c);
        assert!(matches!(neg.validate(), Err(CityError::NegativeExtent { .. })));
        let nan = Block::new(Vec3::ZERO, 1.0, 1.0, f32::NAN, c);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn polygon_area_unit_square() {
        let poly = Polygon {
            points: [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)],
            fill: Color::WHITE,
            class: None,
        };
        assert!((poly.area() - 1.0).abs() < 1e-6);
    }
}
