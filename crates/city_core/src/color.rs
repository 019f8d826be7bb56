//! Flat fill colors and the per-face color sets used by blocks.

use std::fmt;

/// An opaque sRGB fill color, written into the document as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xffffff);

    /// Build a color from a packed `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Scale each channel towards black. `factor` is clamped to 0..=1.
    pub fn darken(self, factor: f32) -> Self {
        let k = 1.0 - factor.clamp(0.0, 1.0);
        let ch = |c: u8| (c as f32 * k).round() as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill colors for the three visible faces of a block.
///
/// `None` means the face is omitted entirely (no polygon is emitted), which is how
/// speckles and lane markings get a top face without side walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceColors {
    pub top: Option<Color>,
    pub right: Option<Color>,
    pub left: Option<Color>,
}

impl FaceColors {
    pub const fn new(top: Color, right: Color, left: Color) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            left: Some(left),
        }
    }

    /// Only the top face is drawn.
    pub const fn top_only(top: Color) -> Self {
        Self {
            top: Some(top),
            right: None,
            left: None,
        }
    }

    /// Same color on every face.
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color, color)
    }

    /// Number of faces that will produce a polygon.
    pub fn visible_faces(&self) -> usize {
        [self.top, self.right, self.left].iter().filter(|c| c.is_some()).count()
    }
}
