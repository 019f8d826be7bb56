//! Scene composition: turns a week of day records into depth-keyed scene objects.
//!
//! Every object carries a painter's-algorithm depth key. Ground strips, the road and
//! the vehicle use fixed out-of-band keys; each day's structure uses `gx + gy` of its
//! lot. Lots share one grid row and advance along gx, so left-to-right placement is
//! also back-to-front draw order.
//!
//! Composition is pure apart from the injected random source, which decides window
//! litness and grass speckle placement.

use city_core::font::{text_columns, voxel_text_height};
use city_core::{CityResult, Color, FaceColors};
use glam::{Vec2, Vec3};
use rand::Rng;

use crate::calendar::{WeekData, Weekday};
use crate::layout::CityLayout;
use crate::palette;

/// Depth key of the terrain behind the lots.
pub const BACKGROUND_TERRAIN_DEPTH: f32 = -1000.0;
/// Depth key of the road. Above the background terrain, below every lot.
pub const ROAD_DEPTH: f32 = -900.0;
/// Depth key of the car on the road. Above every lot.
pub const VEHICLE_DEPTH: f32 = 900.0;
/// Depth key of the terrain in front of the road.
pub const FOREGROUND_TERRAIN_DEPTH: f32 = 1000.0;

const GROUND_THICKNESS: f32 = 1.0;
const BACKGROUND_MARGIN: f32 = 4.0;
const ROAD_WIDTH: f32 = 5.0;
const FOREGROUND_DEPTH: f32 = 5.0;
const LANE_DASH: f32 = 1.6;
const LANE_PERIOD: f32 = 4.0;
const LANE_WIDTH: f32 = 0.3;
/// Extra height of the rooftop beacon on top-tier buildings.
pub const BEACON_HEIGHT: f32 = 6.0;

/// Voxel text anchored in grid space.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Grid position of the first glyph column; glyph rows stack upward from `anchor.z`.
    pub anchor: Vec3,
    pub scale: f32,
    pub color: Color,
}

/// Placement shared by every per-day structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    /// Position of the day in the week, oldest first.
    pub day: usize,
    pub weekday: Weekday,
    pub count: u32,
    /// Grid (gx, gy) of the lot corner.
    pub position: Vec2,
    /// Minimum corner of the structure standing on the lot.
    pub origin: Vec3,
    pub footprint: f32,
    /// Highest gz of the structure, decorations included.
    pub peak: f32,
    pub weekday_label: Label,
    pub count_label: Label,
}

impl Lot {
    /// Painter's depth key derived from the lot placement.
    pub fn depth(&self) -> f32 {
        self.position.x + self.position.y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub lot: Lot,
    pub height: f32,
    pub level: u8,
    pub faces: FaceColors,
    /// One entry per window row, bottom row first: `true` when lit.
    pub window_rows: Vec<bool>,
    /// Vertical distance between window rows.
    pub window_spacing: f32,
    pub beacon: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Streetlamp {
    pub lot: Lot,
    pub height: f32,
}

/// Flat slab of ground, optionally sprinkled with grass speckles.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainStrip {
    pub origin: Vec3,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub faces: FaceColors,
    /// Grid positions of speckles on the top surface.
    pub speckles: Vec<Vec3>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub origin: Vec3,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    /// Minimum corners of the dashed center markings.
    pub lane_marks: Vec<Vec3>,
    /// Extent of one dash along gx.
    pub dash_length: f32,
    /// Extent of one dash along gy.
    pub dash_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub origin: Vec3,
}

/// The closed set of things a scene is made of.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneKind {
    Terrain(TerrainStrip),
    Road(Road),
    Building(Building),
    Streetlamp(Streetlamp),
    Vehicle(Vehicle),
}

/// A drawable element and its draw-order key.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub depth: f32,
    pub kind: SceneKind,
}

impl SceneObject {
    /// The lot of a per-day structure, `None` for ground, road and vehicle.
    pub fn lot(&self) -> Option<&Lot> {
        match &self.kind {
            SceneKind::Building(b) => Some(&b.lot),
            SceneKind::Streetlamp(s) => Some(&s.lot),
            _ => None,
        }
    }
}

/// All objects of one render, in composition order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Per-day structures, oldest day first.
    pub fn structures(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.lot().is_some())
    }

    /// Objects stable-sorted by ascending depth key.
    pub fn into_draw_order(mut self) -> Vec<SceneObject> {
        self.objects.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        self.objects
    }
}

/// Lay out the city for `week`.
///
/// Fails with [`city_core::CityError::InvalidLayout`] before drawing any random numbers when
/// `layout` does not validate.
pub fn compose_city<R: Rng + ?Sized>(
    week: &WeekData,
    layout: &CityLayout,
    rng: &mut R,
) -> CityResult<Scene> {
    layout.validate()?;
    let days = week.days();
    let stride = layout.lot_stride;
    let span_x = -stride;
    let span_width = (days.len() + 2) as f32 * stride;

    let back_y = layout.lot_row - BACKGROUND_MARGIN;
    let road_y = layout.lot_row + stride;
    let front_y = road_y + ROAD_WIDTH;

    let mut objects = Vec::with_capacity(days.len() + 4);

    objects.push(SceneObject {
        depth: BACKGROUND_TERRAIN_DEPTH,
        kind: SceneKind::Terrain(terrain_strip(
            Vec3::new(span_x, back_y, -GROUND_THICKNESS),
            span_width,
            BACKGROUND_MARGIN + stride,
            palette::BACK_GRASS,
            layout.speckle_density,
            rng,
        )),
    });

    objects.push(SceneObject {
        depth: ROAD_DEPTH,
        kind: SceneKind::Road(road(Vec3::new(span_x, road_y, -GROUND_THICKNESS), span_width)),
    });

    for (index, day) in days.iter().enumerate() {
        let position = Vec2::new(layout.lot_x(index), layout.lot_row);
        let origin = Vec3::new(position.x + layout.lot_inset, position.y + layout.lot_inset, 0.0);
        let lot_with_peak =
            |peak| lot(layout, index, day.weekday, day.count, position, origin, peak);

        if day.count == 0 {
            let height = layout.lamp_height;
            log::debug!(
                "{} {}: streetlamp ({} contributions)",
                day.date,
                day.weekday.abbreviation(),
                day.count
            );
            let lot = lot_with_peak(height);
            objects.push(SceneObject {
                depth: lot.depth(),
                kind: SceneKind::Streetlamp(Streetlamp { lot, height }),
            });
        } else {
            let height = layout.building_height(day.count);
            let level = palette::building_level(day.count);
            let beacon = level >= 4;
            let peak = if beacon { height + BEACON_HEIGHT } else { height };
            let rows = (height / layout.window_row_spacing).floor().max(0.0) as usize;
            let window_rows = (0..rows)
                .map(|_| rng.gen_bool(layout.window_lit_probability))
                .collect();
            log::debug!(
                "{} {}: building level {} height {:.0} ({} contributions)",
                day.date,
                day.weekday.abbreviation(),
                level,
                height,
                day.count
            );
            let lot = lot_with_peak(peak);
            objects.push(SceneObject {
                depth: lot.depth(),
                kind: SceneKind::Building(Building {
                    lot,
                    height,
                    level,
                    faces: palette::building_faces(level),
                    window_rows,
                    window_spacing: layout.window_row_spacing,
                    beacon,
                }),
            });
        }
    }

    objects.push(SceneObject {
        depth: VEHICLE_DEPTH,
        kind: SceneKind::Vehicle(Vehicle {
            origin: Vec3::new(layout.lot_x(2) + stride * 0.6, road_y + 1.0, 0.0),
        }),
    });

    objects.push(SceneObject {
        depth: FOREGROUND_TERRAIN_DEPTH,
        kind: SceneKind::Terrain(terrain_strip(
            Vec3::new(span_x, front_y, -GROUND_THICKNESS),
            span_width,
            FOREGROUND_DEPTH,
            palette::FRONT_GRASS,
            layout.speckle_density,
            rng,
        )),
    });

    log::info!("Composed city: {} objects for {} days", objects.len(), days.len());
    Ok(Scene { objects })
}

fn lot(
    layout: &CityLayout,
    day: usize,
    weekday: Weekday,
    count: u32,
    position: Vec2,
    origin: Vec3,
    peak: f32,
) -> Lot {
    let (cx, cy) = layout.lot_center(day);

    let count_scale = layout.count_label_scale;
    let count_z = peak + layout.label_gap;
    let count_label =
        centered_label(count.to_string(), cx, cy, count_z, count_scale, palette::COUNT_LABEL);

    let weekday_scale = layout.weekday_label_scale;
    let weekday_z = count_z + voxel_text_height(count_scale) + layout.label_gap;
    let weekday_label = centered_label(
        weekday.abbreviation().to_string(),
        cx,
        cy,
        weekday_z,
        weekday_scale,
        palette::WEEKDAY_LABEL,
    );

    Lot {
        day,
        weekday,
        count,
        position,
        origin,
        footprint: layout.footprint,
        peak,
        weekday_label,
        count_label,
    }
}

fn centered_label(text: String, cx: f32, cy: f32, gz: f32, scale: f32, color: Color) -> Label {
    let half_width = text_columns(&text) as f32 * scale * 0.5;
    Label {
        anchor: Vec3::new(cx - half_width, cy - scale * 0.5, gz),
        text,
        scale,
        color,
    }
}

fn terrain_strip<R: Rng + ?Sized>(
    origin: Vec3,
    width: f32,
    depth: f32,
    faces: FaceColors,
    density: f32,
    rng: &mut R,
) -> TerrainStrip {
    let top = origin.z + GROUND_THICKNESS;
    let n = (width * depth * density.max(0.0)) as usize;
    let speckles = (0..n)
        .map(|_| {
            Vec3::new(
                origin.x + rng.gen::<f32>() * width,
                origin.y + rng.gen::<f32>() * depth,
                top,
            )
        })
        .collect();
    TerrainStrip {
        origin,
        width,
        depth,
        height: GROUND_THICKNESS,
        faces,
        speckles,
    }
}

fn road(origin: Vec3, width: f32) -> Road {
    let mark_y = origin.y + (ROAD_WIDTH - LANE_WIDTH) * 0.5;
    let top = origin.z + GROUND_THICKNESS;
    let dashes = (width / LANE_PERIOD).floor() as usize;
    let lane_marks = (0..dashes)
        .map(|i| {
            let x = origin.x + i as f32 * LANE_PERIOD + (LANE_PERIOD - LANE_DASH) * 0.5;
            Vec3::new(x, mark_y, top)
        })
        .collect();
    Road {
        origin,
        width,
        depth: ROAD_WIDTH,
        height: GROUND_THICKNESS,
        lane_marks,
        dash_length: LANE_DASH,
        dash_width: LANE_WIDTH,
    }
}
