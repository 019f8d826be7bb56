//! Layout constants for one render. Loaded as part of the binary's config file.

use city_core::{CityError, CityResult, Projector};
use serde::{Deserialize, Serialize};

/// Every tunable number of the city scene. Missing fields fall back to [`Default`].
///
/// Heights are in screen pixels (gz maps one-to-one to screen y); horizontal
/// distances are in grid units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityLayout {
    /// Document width in pixels.
    pub canvas_width: f32,
    /// Document height in pixels.
    pub canvas_height: f32,
    pub projector: Projector,
    /// Grid x distance between consecutive day lots.
    pub lot_stride: f32,
    /// Grid y of the row every lot sits on.
    pub lot_row: f32,
    /// Building width and depth.
    pub footprint: f32,
    /// Offset of the building from the lot corner along both axes.
    pub lot_inset: f32,
    /// Height offset every building starts from.
    pub base_height: f32,
    pub height_per_contribution: f32,
    /// Buildings never exceed this height.
    pub max_height: f32,
    /// Fixed height of a streetlamp, lamp head included.
    pub lamp_height: f32,
    /// Vertical distance between window rows.
    pub window_row_spacing: f32,
    /// Chance that a window row is lit.
    pub window_lit_probability: f64,
    pub weekday_label_scale: f32,
    pub count_label_scale: f32,
    /// Vertical clearance between a structure and its count label, and between the two labels.
    pub label_gap: f32,
    /// Grass speckles per square grid unit of terrain.
    pub speckle_density: f32,
    /// Height of the sky band stars are scattered over.
    pub star_band_height: f32,
}

impl Default for CityLayout {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 560.0,
            projector: Projector::default(),
            lot_stride: 8.0,
            lot_row: 0.0,
            footprint: 5.0,
            lot_inset: 1.5,
            base_height: 20.0,
            height_per_contribution: 8.0,
            max_height: 120.0,
            lamp_height: 24.0,
            window_row_spacing: 12.0,
            window_lit_probability: 0.72,
            weekday_label_scale: 0.3,
            count_label_scale: 0.35,
            label_gap: 6.0,
            speckle_density: 0.3,
            star_band_height: 160.0,
        }
    }
}

/// Upper bound on window rows per building, `max_height / window_row_spacing`.
const MAX_WINDOW_ROWS: f32 = 1024.0;
/// Upper bound on grass speckles per square grid unit.
const MAX_SPECKLE_DENSITY: f32 = 4.0;
/// Upper bound on the lot stride; the ground strips and lane marks scale with it.
const MAX_LOT_STRIDE: f32 = 1000.0;

impl CityLayout {
    /// Reject values that would make composition loop without bound or hand
    /// impossible parameters to the random source. Config files reach the
    /// composer through here.
    pub fn validate(&self) -> CityResult<()> {
        let invalid = |field: &'static str, value: f64| -> CityResult<()> {
            Err(CityError::InvalidLayout { field, value })
        };

        let p = &self.projector;
        let finite = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("projector.tile_width", p.tile_width),
            ("projector.tile_height", p.tile_height),
            ("projector.origin.x", p.origin.x),
            ("projector.origin.y", p.origin.y),
            ("lot_stride", self.lot_stride),
            ("lot_row", self.lot_row),
            ("footprint", self.footprint),
            ("lot_inset", self.lot_inset),
            ("base_height", self.base_height),
            ("height_per_contribution", self.height_per_contribution),
            ("max_height", self.max_height),
            ("lamp_height", self.lamp_height),
            ("window_row_spacing", self.window_row_spacing),
            ("weekday_label_scale", self.weekday_label_scale),
            ("count_label_scale", self.count_label_scale),
            ("label_gap", self.label_gap),
            ("speckle_density", self.speckle_density),
            ("star_band_height", self.star_band_height),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return invalid(field, value as f64);
            }
        }

        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("lot_stride", self.lot_stride),
            ("footprint", self.footprint),
            ("window_row_spacing", self.window_row_spacing),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return invalid(field, value as f64);
            }
        }

        if self.lot_stride > MAX_LOT_STRIDE {
            return invalid("lot_stride", self.lot_stride as f64);
        }
        if self.max_height / self.window_row_spacing > MAX_WINDOW_ROWS {
            return invalid("window_row_spacing", self.window_row_spacing as f64);
        }
        if !(0.0..=MAX_SPECKLE_DENSITY).contains(&self.speckle_density) {
            return invalid("speckle_density", self.speckle_density as f64);
        }
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&self.window_lit_probability) {
            return invalid("window_lit_probability", self.window_lit_probability);
        }
        Ok(())
    }

    /// Building height for a non-zero count: `base + count * unit`, clamped to `max_height`.
    pub fn building_height(&self, count: u32) -> f32 {
        (self.base_height + count as f32 * self.height_per_contribution).min(self.max_height)
    }

    /// Grid x of the lot for the `index`-th day.
    pub fn lot_x(&self, index: usize) -> f32 {
        self.lot_stride * index as f32
    }

    /// Grid coordinate of the lot center for the `index`-th day.
    pub fn lot_center(&self, index: usize) -> (f32, f32) {
        let half = self.lot_inset + self.footprint * 0.5;
        (self.lot_x(index) + half, self.lot_row + half)
    }
}
