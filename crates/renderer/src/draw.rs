//! Per-kind drawing of scene objects.
//!
//! Each scene object becomes a handful of blocks and voxel labels. Within one
//! object the blocks are emitted back to front; ordering between objects is the
//! caller's job (see [`crate::draw_scene`]).

use city_core::{Block, CityResult, FaceColors, Vec3};
use procgen::palette;
use procgen::{
    Building, Label, Lot, Road, SceneKind, SceneObject, Streetlamp, TerrainStrip, Vehicle,
    BEACON_HEIGHT,
};

use crate::raster::SceneCanvas;

const SPECKLE_SIZE: f32 = 0.25;
const SPECKLE_HEIGHT: f32 = 1.2;

const WINDOW_DEPTH: f32 = 0.12;
/// Fraction of the row spacing below the window sill.
const WINDOW_SILL: f32 = 0.3;
/// Fraction of the row spacing the window covers vertically.
const WINDOW_HEIGHT: f32 = 0.45;
/// Window column offsets and width as fractions of the footprint.
const WINDOW_COLUMNS: [f32; 2] = [0.2, 0.6];
const WINDOW_WIDTH: f32 = 0.2;
const BEACON_SIZE: f32 = 0.6;

const PARK_HEIGHT: f32 = 0.6;
const POLE_SIZE: f32 = 0.4;
const LAMP_SIZE: f32 = 1.2;
pub const LAMP_HEAD_HEIGHT: f32 = 3.0;

const CAR_LENGTH: f32 = 3.4;
const CAR_WIDTH: f32 = 1.8;
const CAR_HEIGHT: f32 = 5.0;

/// Append the polygons of one scene object.
pub fn draw_object(canvas: &mut SceneCanvas, object: &SceneObject) -> CityResult<()> {
    match &object.kind {
        SceneKind::Terrain(t) => draw_terrain(canvas, t),
        SceneKind::Road(r) => draw_road(canvas, r),
        SceneKind::Building(b) => draw_building(canvas, b),
        SceneKind::Streetlamp(s) => draw_streetlamp(canvas, s),
        SceneKind::Vehicle(v) => draw_vehicle(canvas, v),
    }
}

fn draw_terrain(canvas: &mut SceneCanvas, strip: &TerrainStrip) -> CityResult<()> {
    let slab = Block::new(strip.origin, strip.width, strip.depth, strip.height, strip.faces);
    canvas.add_block(&slab)?;
    let blade = FaceColors::top_only(palette::GRASS_SPECKLE);
    for &s in &strip.speckles {
        canvas.add_block(&Block::new(s, SPECKLE_SIZE, SPECKLE_SIZE, SPECKLE_HEIGHT, blade))?;
    }
    Ok(())
}

fn draw_road(canvas: &mut SceneCanvas, road: &Road) -> CityResult<()> {
    canvas.add_block(&Block::new(road.origin, road.width, road.depth, road.height, palette::ROAD))?;
    let paint = FaceColors::top_only(palette::LANE_MARK);
    for &m in &road.lane_marks {
        canvas.add_block(&Block::new(m, road.dash_length, road.dash_width, 0.0, paint))?;
    }
    Ok(())
}

fn draw_building(canvas: &mut SceneCanvas, b: &Building) -> CityResult<()> {
    let o = b.lot.origin;
    let f = b.lot.footprint;
    canvas.add_block(&Block::new(o, f, f, b.height, b.faces))?;

    let spacing = b.window_spacing;
    let pane = f * WINDOW_WIDTH;
    for (row, &lit) in b.window_rows.iter().enumerate() {
        let z = row as f32 * spacing + spacing * WINDOW_SILL;
        let h = spacing * WINDOW_HEIGHT;
        let glass = if lit { palette::WINDOW_LIT } else { palette::WINDOW_DARK };
        let edge = glass.darken(0.2);
        for &c in &WINDOW_COLUMNS {
            let along = c * f;
            // Left face (gy + depth plane).
            let left = Block::new(
                Vec3::new(o.x + along, o.y + f, z),
                pane,
                WINDOW_DEPTH,
                h,
                FaceColors {
                    top: None,
                    right: Some(edge),
                    left: Some(glass),
                },
            );
            // Right face (gx + width plane).
            let right = Block::new(
                Vec3::new(o.x + f, o.y + along, z),
                WINDOW_DEPTH,
                pane,
                h,
                FaceColors {
                    top: None,
                    right: Some(glass),
                    left: Some(edge),
                },
            );
            for window in [left, right] {
                let window = if lit { window.with_class("window") } else { window };
                canvas.add_block(&window)?;
            }
        }
    }

    if b.beacon {
        let c = f * 0.5 - BEACON_SIZE * 0.5;
        let beacon = Block::new(
            Vec3::new(o.x + c, o.y + c, b.height),
            BEACON_SIZE,
            BEACON_SIZE,
            BEACON_HEIGHT,
            FaceColors::new(
                palette::BEACON,
                palette::BEACON.darken(0.2),
                palette::BEACON.darken(0.4),
            ),
        )
        .with_class("beacon");
        canvas.add_block(&beacon)?;
    }

    draw_labels(canvas, &b.lot)
}

fn draw_streetlamp(canvas: &mut SceneCanvas, s: &Streetlamp) -> CityResult<()> {
    let o = s.lot.origin;
    let f = s.lot.footprint;
    canvas.add_block(&Block::new(o, f, f, PARK_HEIGHT, palette::building_faces(0)))?;

    let center = |size: f32| o.x + (f - size) * 0.5;
    let center_y = |size: f32| o.y + (f - size) * 0.5;
    let pole_height = s.height - PARK_HEIGHT - LAMP_HEAD_HEIGHT;
    canvas.add_block(&Block::new(
        Vec3::new(center(POLE_SIZE), center_y(POLE_SIZE), PARK_HEIGHT),
        POLE_SIZE,
        POLE_SIZE,
        pole_height,
        palette::LAMP_POLE,
    ))?;
    canvas.add_block(
        &Block::new(
            Vec3::new(center(LAMP_SIZE), center_y(LAMP_SIZE), s.height - LAMP_HEAD_HEIGHT),
            LAMP_SIZE,
            LAMP_SIZE,
            LAMP_HEAD_HEIGHT,
            palette::LAMP_HEAD,
        )
        .with_class("lamp"),
    )?;

    draw_labels(canvas, &s.lot)
}

fn draw_vehicle(canvas: &mut SceneCanvas, v: &Vehicle) -> CityResult<()> {
    let o = v.origin;
    canvas.add_block(&Block::new(o, CAR_LENGTH, CAR_WIDTH, CAR_HEIGHT, palette::VEHICLE_BODY))?;
    canvas.add_block(&Block::new(
        o + Vec3::new(0.7, 0.2, CAR_HEIGHT),
        1.8,
        1.4,
        4.0,
        palette::VEHICLE_CABIN,
    ))?;
    let lamp = FaceColors::uniform(palette::HEADLIGHT);
    for y in [0.25, CAR_WIDTH - 0.65] {
        canvas.add_block(&Block::new(o + Vec3::new(CAR_LENGTH, y, 1.5), 0.1, 0.4, 1.2, lamp))?;
    }
    Ok(())
}

fn draw_labels(canvas: &mut SceneCanvas, lot: &Lot) -> CityResult<()> {
    draw_label(canvas, &lot.count_label)?;
    draw_label(canvas, &lot.weekday_label)
}

fn draw_label(canvas: &mut SceneCanvas, label: &Label) -> CityResult<()> {
    canvas.add_voxel_text(&label.text, label.anchor, label.color, label.scale)
}
