//! End-to-end rendering of a week into the contribution city document.

use city_core::{CityError, CityResult, Polygon, Projector};
use procgen::{compose_city, scatter_stars, CityLayout, Scene, WeekData};
use rand::Rng;

use crate::document::{Summary, SvgDocument};
use crate::draw::draw_object;
use crate::raster::SceneCanvas;

/// Upper bound on the star field size.
pub const MAX_STARS: usize = 10_000;

/// Rasterize every scene object in painter's order, back to front.
pub fn draw_scene(projector: &Projector, scene: Scene) -> CityResult<Vec<Polygon>> {
    let mut canvas = SceneCanvas::new(*projector);
    let objects = scene.into_draw_order();
    for object in &objects {
        draw_object(&mut canvas, object)?;
    }
    log::debug!("Rasterized {} objects into {} polygons", objects.len(), canvas.len());
    Ok(canvas.into_polygons())
}

/// Renders weeks with one fixed layout and star field size.
#[derive(Debug, Clone)]
pub struct CityRenderer {
    pub layout: CityLayout,
    pub star_count: usize,
}

impl CityRenderer {
    pub fn new(layout: CityLayout, star_count: usize) -> Self {
        Self { layout, star_count }
    }

    /// Compose, rasterize and assemble the full SVG document for `user`.
    ///
    /// All randomness (window litness, grass speckles, stars) is drawn from `rng`,
    /// so a seeded source gives byte-identical output.
    pub fn render<R: Rng + ?Sized>(
        &self,
        user: &str,
        week: &WeekData,
        rng: &mut R,
    ) -> CityResult<String> {
        if self.star_count > MAX_STARS {
            return Err(CityError::InvalidLayout {
                field: "star_count",
                value: self.star_count as f64,
            });
        }
        let layout = &self.layout;
        let scene = compose_city(week, layout, rng)?;
        let polygons = draw_scene(&layout.projector, scene)?;
        let stars = scatter_stars(
            rng,
            self.star_count,
            layout.canvas_width,
            layout.star_band_height,
        );
        let summary = Summary::new(user, week);

        let svg = SvgDocument {
            width: layout.canvas_width,
            height: layout.canvas_height,
            stars: &stars,
            polygons: &polygons,
            summary: &summary,
        }
        .to_string();
        log::info!(
            "Rendered {} polygons and {} stars ({} bytes)",
            polygons.len(),
            stars.len(),
            svg.len()
        );
        Ok(svg)
    }
}

impl Default for CityRenderer {
    fn default() -> Self {
        Self::new(CityLayout::default(), 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procgen::{DayRecord, SceneKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn week(counts: [u32; 7], total: u64) -> WeekData {
        let days: Vec<DayRecord> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| DayRecord::new(format!("2026-10-{:02}", 11 + i), c, i as u8).unwrap())
            .collect();
        WeekData::from_days(&days, total).unwrap()
    }

    #[test]
    fn renders_sample_week() {
        let svg = CityRenderer::default()
            .render("octocat", &week([0, 3, 0, 9, 15, 1, 0], 321), &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("octocat&apos;s Contribution City"));
        assert!(svg.contains("Today: 0 contributions"));
        assert!(svg.contains("This week: 28 | Total: 321 contributions"));
        assert_eq!(svg.matches("class=\"star\"").count(), 50);
        assert!(svg.contains("class=\"beacon\""));
        assert!(svg.contains("class=\"lamp\""));
    }

    #[test]
    fn same_seed_same_document() {
        let renderer = CityRenderer::default();
        let w = week([2, 0, 4, 0, 12, 7, 1], 99);
        let a = renderer.render("a", &w, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = renderer.render("a", &w, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_week_is_all_streetlamps() {
        let layout = CityLayout::default();
        let w = week([0; 7], 0);
        let scene = compose_city(&w, &layout, &mut StdRng::seed_from_u64(6)).unwrap();
        assert!(scene.structures().all(|o| matches!(o.kind, SceneKind::Streetlamp(_))));
        let svg = CityRenderer::default().render("x", &w, &mut StdRng::seed_from_u64(6)).unwrap();
        assert!(!svg.contains("class=\"window\""));
        assert!(svg.contains("This week: 0 | Total: 0 contributions"));
    }

    #[test]
    fn draw_scene_keeps_background_first() {
        let layout = CityLayout::default();
        let scene = compose_city(&week([1; 7], 7), &layout, &mut StdRng::seed_from_u64(7)).unwrap();
        let polygons = draw_scene(&layout.projector, scene).unwrap();
        // The background slab's top face is the very first polygon.
        assert_eq!(polygons[0].fill, procgen::palette::BACK_GRASS.top.unwrap());
    }

    #[test]
    fn render_faults_propagate() {
        let renderer = CityRenderer::new(
            CityLayout {
                lamp_height: 1.0,
                ..CityLayout::default()
            },
            10,
        );
        let err = renderer
            .render("x", &week([0; 7], 0), &mut StdRng::seed_from_u64(8))
            .unwrap_err();
        assert!(matches!(err, CityError::NegativeExtent { .. }));
    }

    #[test]
    fn unusable_layout_is_a_fault_not_a_panic() {
        let w = week([0, 3, 0, 9, 15, 1, 0], 321);
        let zero_spacing = CityRenderer::new(
            CityLayout {
                window_row_spacing: 0.0,
                ..CityLayout::default()
            },
            50,
        );
        assert_eq!(
            zero_spacing.render("x", &w, &mut StdRng::seed_from_u64(9)).unwrap_err(),
            CityError::InvalidLayout { field: "window_row_spacing", value: 0.0 }
        );

        let nan_probability = CityRenderer::new(
            CityLayout {
                window_lit_probability: f64::NAN,
                ..CityLayout::default()
            },
            50,
        );
        assert!(matches!(
            nan_probability.render("x", &w, &mut StdRng::seed_from_u64(9)),
            Err(CityError::InvalidLayout { field: "window_lit_probability", .. })
        ));
    }

    #[test]
    fn oversized_star_field_is_rejected() {
        let renderer = CityRenderer::new(CityLayout::default(), usize::MAX);
        let err = renderer
            .render("x", &week([1; 7], 7), &mut StdRng::seed_from_u64(10))
            .unwrap_err();
        assert!(matches!(err, CityError::InvalidLayout { field: "star_count", .. }));
    }
}
