//! Block and voxel text rasterization.
//!
//! A block shows three faces from the fixed viewing direction: the top, the right
//! face (the `gx + width` plane) and the left face (the `gy + depth` plane). The
//! bottom corner at the block origin is always hidden, so only seven corners are
//! projected. Faces never overlap on screen, so the emission order within a block
//! is free; it is top, right, left.

use city_core::font::{glyph, GLYPH_ROWS, LETTER_SPACING, VOXEL_ROW_HEIGHT};
use city_core::{Block, CityResult, Color, FaceColors, Polygon, Projector};
use glam::{Vec2, Vec3};

/// Right face of every voxel text cell.
pub const TEXT_SHADE: Color = Color::hex(0x1b1f2a);

/// Rasterize one block into its visible faces. Faces colored `None` are skipped.
pub fn draw_block(projector: &Projector, block: &Block) -> CityResult<Vec<Polygon>> {
    let mut out = Vec::with_capacity(3);
    push_block(projector, block, &mut out)?;
    Ok(out)
}

/// Rasterize `text` as voxel blocks, one per lit glyph cell.
///
/// `anchor` is the grid position of the first column. Glyph row `r` sits at
/// `anchor.z + (GLYPH_ROWS - r) * scale * VOXEL_ROW_HEIGHT`, so the top row of the
/// glyph is the highest. Each glyph advances the cursor by its width plus one column.
pub fn draw_voxel_text(
    projector: &Projector,
    text: &str,
    anchor: Vec3,
    color: Color,
    scale: f32,
) -> CityResult<Vec<Polygon>> {
    let mut out = Vec::new();
    push_voxel_text(projector, text, anchor, color, scale, &mut out)?;
    Ok(out)
}

fn push_block(projector: &Projector, block: &Block, out: &mut Vec<Polygon>) -> CityResult<()> {
    block.validate()?;
    let (w, d, h) = (block.width, block.depth, block.height);
    let p = |dx: f32, dy: f32, dz: f32| projector.project(block.origin + Vec3::new(dx, dy, dz));

    let top_back = p(0.0, 0.0, h);
    let top_right = p(w, 0.0, h);
    let top_front = p(w, d, h);
    let top_left = p(0.0, d, h);
    let bottom_right = p(w, 0.0, 0.0);
    let bottom_front = p(w, d, 0.0);
    let bottom_left = p(0.0, d, 0.0);

    // Clockwise on screen, starting from the upper-left corner of each face.
    let faces: [(Option<Color>, [Vec2; 4]); 3] = [
        (block.colors.top, [top_back, top_right, top_front, top_left]),
        (block.colors.right, [top_front, top_right, bottom_right, bottom_front]),
        (block.colors.left, [top_left, top_front, bottom_front, bottom_left]),
    ];
    for (fill, points) in faces {
        if let Some(fill) = fill {
            out.push(Polygon {
                points,
                fill,
                class: block.class,
            });
        }
    }
    Ok(())
}

fn push_voxel_text(
    projector: &Projector,
    text: &str,
    anchor: Vec3,
    color: Color,
    scale: f32,
    out: &mut Vec<Polygon>,
) -> CityResult<()> {
    let colors = FaceColors {
        top: Some(color),
        right: Some(TEXT_SHADE),
        left: Some(color),
    };
    let row_height = scale * VOXEL_ROW_HEIGHT;
    let mut cursor = 0usize;
    for ch in text.chars() {
        let g = glyph(ch);
        for (row, col) in g.lit_cells() {
            let origin = Vec3::new(
                anchor.x + (cursor + col) as f32 * scale,
                anchor.y,
                anchor.z + (GLYPH_ROWS - row) as f32 * row_height,
            );
            push_block(projector, &Block::new(origin, scale, scale, row_height, colors), out)?;
        }
        cursor += g.columns() + LETTER_SPACING;
    }
    Ok(())
}

/// Accumulates the polygons of a scene in draw order.
pub struct SceneCanvas {
    projector: Projector,
    polygons: Vec<Polygon>,
}

impl SceneCanvas {
    pub fn new(projector: Projector) -> Self {
        Self {
            projector,
            polygons: Vec::new(),
        }
    }

    pub fn add_block(&mut self, block: &Block) -> CityResult<()> {
        push_block(&self.projector, block, &mut self.polygons)
    }

    pub fn add_voxel_text(
        &mut self,
        text: &str,
        anchor: Vec3,
        color: Color,
        scale: f32,
    ) -> CityResult<()> {
        push_voxel_text(&self.projector, text, anchor, color, scale, &mut self.polygons)
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use city_core::font::text_columns;
    use city_core::CityError;

    const RED: Color = Color::hex(0xff0000);

    fn unit_block(colors: FaceColors) -> Block {
        Block::new(Vec3::new(2.0, 3.0, 0.0), 4.0, 2.0, 10.0, colors)
    }

    /// Signed shoelace area; positive is clockwise with y pointing down.
    fn signed_area(p: &[Vec2; 4]) -> f32 {
        (0..4).map(|i| p[i].x * p[(i + 1) % 4].y - p[(i + 1) % 4].x * p[i].y).sum::<f32>() * 0.5
    }

    #[test]
    fn block_emits_three_quads() {
        let polys = draw_block(&Projector::default(), &unit_block(FaceColors::uniform(RED))).unwrap();
        assert_eq!(polys.len(), 3);
        assert!(polys.iter().all(|p| p.points.len() == 4 && p.area() > 0.0));
    }

    #[test]
    fn block_faces_wind_clockwise() {
        let polys = draw_block(&Projector::default(), &unit_block(FaceColors::uniform(RED))).unwrap();
        for p in &polys {
            assert!(signed_area(&p.points) > 0.0, "face {:?} is not clockwise", p.points);
        }
    }

    #[test]
    fn block_face_order_and_colors() {
        let colors = FaceColors::new(Color::hex(0x111111), Color::hex(0x222222), Color::hex(0x333333));
        let polys = draw_block(&Projector::default(), &unit_block(colors)).unwrap();
        let fills: Vec<Color> = polys.iter().map(|p| p.fill).collect();
        assert_eq!(fills, vec![Color::hex(0x111111), Color::hex(0x222222), Color::hex(0x333333)]);
        // Top face sits higher on screen than either wall's lowest point.
        let top_min_y = polys[0].points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let wall_max_y = polys[2].points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        assert!(top_min_y < wall_max_y);
    }

    #[test]
    fn block_skips_none_faces() {
        let mut colors = FaceColors::uniform(RED);
        colors.right = None;
        let polys = draw_block(&Projector::default(), &unit_block(colors)).unwrap();
        assert_eq!(polys.len(), 2);

        let polys = draw_block(&Projector::default(), &unit_block(FaceColors::top_only(RED))).unwrap();
        assert_eq!(polys.len(), 1);
    }

    #[test]
    fn block_zero_extents_are_zero_area() {
        let flat = Block::new(Vec3::ZERO, 3.0, 3.0, 0.0, FaceColors::uniform(RED));
        let polys = draw_block(&Projector::default(), &flat).unwrap();
        assert_eq!(polys.len(), 3);
        assert!(polys[0].area() > 0.0);
        assert_eq!(polys[1].area(), 0.0);
        assert_eq!(polys[2].area(), 0.0);

        let point = Block::new(Vec3::ONE, 0.0, 0.0, 0.0, FaceColors::uniform(RED));
        let polys = draw_block(&Projector::default(), &point).unwrap();
        assert!(polys.iter().all(|p| p.area() == 0.0));
    }

    #[test]
    fn block_negative_extent_is_an_error() {
        let bad = Block::new(Vec3::ZERO, 1.0, 1.0, -2.0, FaceColors::uniform(RED));
        assert!(matches!(
            draw_block(&Projector::default(), &bad),
            Err(CityError::NegativeExtent { .. })
        ));
    }

    #[test]
    fn block_class_propagates() {
        let b = unit_block(FaceColors::uniform(RED)).with_class("window");
        let polys = draw_block(&Projector::default(), &b).unwrap();
        assert!(polys.iter().all(|p| p.class == Some("window")));
    }

    #[test]
    fn voxel_zero_emits_three_faces_per_cell() {
        let polys = draw_voxel_text(&Projector::default(), "0", Vec3::ZERO, RED, 0.5).unwrap();
        assert_eq!(polys.len(), 3 * glyph('0').lit_count());
        assert_eq!(polys.len(), 57);
    }

    #[test]
    fn voxel_space_emits_nothing() {
        let polys = draw_voxel_text(&Projector::default(), " ", Vec3::ZERO, RED, 0.5).unwrap();
        assert!(polys.is_empty());
        let polys = draw_voxel_text(&Projector::default(), "", Vec3::ZERO, RED, 0.5).unwrap();
        assert!(polys.is_empty());
    }

    #[test]
    fn voxel_text_colors_top_left_and_shades_right() {
        let polys = draw_voxel_text(&Projector::default(), "1", Vec3::ZERO, RED, 1.0).unwrap();
        for cell in polys.chunks(3) {
            assert_eq!(cell[0].fill, RED);
            assert_eq!(cell[1].fill, TEXT_SHADE);
            assert_eq!(cell[2].fill, RED);
        }
    }

    #[test]
    fn voxel_text_top_row_is_highest() {
        // 'T': a full bar in row 0 over a stem in column 2. Cells come row by row.
        let polys = draw_voxel_text(&Projector::default(), "T", Vec3::ZERO, RED, 1.0).unwrap();
        assert_eq!(polys.len(), 3 * 11);
        let max_y = |p: &Polygon| p.points.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);
        let bar_center = &polys[3 * 2];
        let stem_bottom = &polys[3 * 10];
        let rise = max_y(stem_bottom) - max_y(bar_center);
        assert!((rise - 6.0 * VOXEL_ROW_HEIGHT).abs() < 1e-3);
    }

    #[test]
    fn voxel_text_case_folds_and_advances() {
        let projector = Projector::default();
        let upper = draw_voxel_text(&projector, "MON", Vec3::ZERO, RED, 0.3).unwrap();
        let lower = draw_voxel_text(&projector, "mon", Vec3::ZERO, RED, 0.3).unwrap();
        assert_eq!(upper, lower);

        // A leading space shifts every cell by one glyph advance along gx.
        let shifted = draw_voxel_text(&projector, " MON", Vec3::ZERO, RED, 0.3).unwrap();
        assert_eq!(shifted.len(), upper.len());
        let dx = (text_columns(" M") - text_columns("M")) as f32 * 0.3 * projector.tile_width;
        let a = upper[0].points[0];
        let b = shifted[0].points[0];
        assert!((b.x - a.x - dx).abs() < 1e-3);
    }

    #[test]
    fn canvas_accumulates_in_call_order() {
        let mut canvas = SceneCanvas::new(Projector::default());
        assert!(canvas.is_empty());
        canvas.add_block(&unit_block(FaceColors::uniform(RED))).unwrap();
        canvas.add_voxel_text("0", Vec3::new(0.0, 0.0, 20.0), Color::WHITE, 0.3).unwrap();
        assert_eq!(canvas.len(), 3 + 57);
        assert_eq!(canvas.polygons()[0].fill, RED);
        assert_eq!(canvas.into_polygons()[3].fill, Color::WHITE);
    }
}
