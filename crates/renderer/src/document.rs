//! SVG document assembly: sky, stars, moon, the composited scene and the text overlay.

use std::fmt;

use city_core::Polygon;
use procgen::{Star, WeekData};

const SKY_TOP: &str = "#0a0a20";
const SKY_BOTTOM: &str = "#1a1a40";
const MOON: &str = "#ffffee";
const TITLE: &str = "#ffffff";
const STATS: &str = "#8b949e";
const FONT: &str = "Arial, sans-serif";

const STYLE: &str = "\
      @keyframes twinkle { 0%, 100% { opacity: 0.3; } 50% { opacity: 1; } }
      @keyframes windowFlicker { 0%, 90%, 100% { opacity: 1; } 95% { opacity: 0.5; } }
      @keyframes blink { 0%, 100% { opacity: 1; } 50% { opacity: 0.3; } }
      @keyframes glow { 0%, 100% { opacity: 1; } 50% { opacity: 0.75; } }
      .star { animation: twinkle 2s ease-in-out infinite; }
      .window { animation: windowFlicker 5s ease-in-out infinite; }
      .beacon { animation: blink 1.5s ease-in-out infinite; }
      .lamp { animation: glow 3s ease-in-out infinite; }
";

/// Figures printed under the city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    /// Count of the most recent day.
    pub today: u32,
    pub week_total: u64,
    /// Long-window total from the data source.
    pub total: u64,
}

impl Summary {
    pub fn new(user: &str, week: &WeekData) -> Self {
        Self {
            title: format!("{user}'s Contribution City"),
            today: week.latest().count,
            week_total: week.week_total(),
            total: week.total(),
        }
    }
}

/// A complete, self-contained SVG document. Render it with `to_string()`.
pub struct SvgDocument<'a> {
    pub width: f32,
    pub height: f32,
    pub stars: &'a [Star],
    pub polygons: &'a [Polygon],
    pub summary: &'a Summary,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width, self.height);
        writeln!(f, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#)?;
        writeln!(f, "  <defs>")?;
        writeln!(f, r#"    <linearGradient id="sky" x1="0%" y1="0%" x2="0%" y2="100%">"#)?;
        writeln!(f, r#"      <stop offset="0%" stop-color="{SKY_TOP}"/>"#)?;
        writeln!(f, r#"      <stop offset="100%" stop-color="{SKY_BOTTOM}"/>"#)?;
        writeln!(f, "    </linearGradient>")?;
        writeln!(f, "    <style>")?;
        f.write_str(STYLE)?;
        writeln!(f, "    </style>")?;
        writeln!(f, "  </defs>")?;

        writeln!(f, r#"  <rect width="{w}" height="{h}" fill="url(#sky)"/>"#)?;

        writeln!(f, r#"  <g id="stars">"#)?;
        for s in self.stars {
            writeln!(
                f,
                r#"    <circle class="star" cx="{:.1}" cy="{:.1}" r="{:.2}" fill="white" style="animation-delay: {:.1}s"/>"#,
                s.position.x, s.position.y, s.radius, s.delay
            )?;
        }
        writeln!(f, "  </g>")?;

        // Crescent: a lit disc with a sky-colored disc offset over it.
        let (mx, my) = (w - 100.0, 50.0);
        writeln!(f, r#"  <circle cx="{mx}" cy="{my}" r="20" fill="{MOON}" opacity="0.9"/>"#)?;
        writeln!(f, r#"  <circle cx="{}" cy="{}" r="20" fill="url(#sky)"/>"#, mx + 7.0, my - 4.0)?;

        writeln!(f, r#"  <g id="city">"#)?;
        for p in self.polygons {
            write!(f, r#"    <polygon points=""#)?;
            for (i, v) in p.points.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:.1},{:.1}", v.x, v.y)?;
            }
            write!(f, r#"" fill="{}""#, p.fill)?;
            if let Some(class) = p.class {
                write!(f, r#" class="{class}""#)?;
            }
            writeln!(f, "/>")?;
        }
        writeln!(f, "  </g>")?;

        let s = self.summary;
        writeln!(
            f,
            r#"  <text x="24" y="36" fill="{TITLE}" font-family="{FONT}" font-size="18" font-weight="bold">{}</text>"#,
            Escaped(&s.title)
        )?;
        writeln!(
            f,
            r#"  <text x="24" y="{}" fill="{STATS}" font-family="{FONT}" font-size="12">Today: {} contributions</text>"#,
            h - 40.0,
            s.today
        )?;
        writeln!(
            f,
            r#"  <text x="24" y="{}" fill="{STATS}" font-family="{FONT}" font-size="12">This week: {} | Total: {} contributions</text>"#,
            h - 20.0,
            s.week_total,
            s.total
        )?;
        writeln!(f, "</svg>")
    }
}

/// XML-escapes text content and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use city_core::{Color, Vec2};

    fn summary() -> Summary {
        Summary {
            title: "octo's Contribution City".into(),
            today: 1,
            week_total: 28,
            total: 1234,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(Escaped("a<b>&\"c'").to_string(), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn document_contains_every_layer() {
        let stars = [Star {
            position: Vec2::new(10.0, 20.0),
            radius: 1.0,
            delay: 1.5,
        }];
        let polygons = [Polygon {
            points: [Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0), Vec2::new(0.0, 10.0), Vec2::new(-10.0, 5.0)],
            fill: Color::hex(0x2a4a2a),
            class: Some("window"),
        }];
        let s = summary();
        let svg = SvgDocument {
            width: 800.0,
            height: 560.0,
            stars: &stars,
            polygons: &polygons,
            summary: &s,
        }
        .to_string();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 800 560\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("animation-delay: 1.5s"));
        assert!(svg.contains(r##"<polygon points="0.0,0.0 10.0,5.0 0.0,10.0 -10.0,5.0" fill="#2a4a2a" class="window"/>"##));
        assert!(svg.contains("octo&apos;s Contribution City"));
        assert!(svg.contains("Today: 1 contributions"));
        assert!(svg.contains("This week: 28 | Total: 1234 contributions"));
        assert!(!svg.contains("href"));
    }

    #[test]
    fn stars_precede_city() {
        let s = summary();
        let svg = SvgDocument {
            width: 800.0,
            height: 560.0,
            stars: &[],
            polygons: &[],
            summary: &s,
        }
        .to_string();
        let stars = svg.find(r#"<g id="stars">"#).unwrap();
        let city = svg.find(r#"<g id="city">"#).unwrap();
        assert!(stars < city);
    }
}
