//! Drawing a clustering onto a surface.
//!
//! The clustering itself knows nothing about colours. [`draw_clusters`]
//! maps cluster indices to a [`Palette`] and hands points to any
//! [`Surface`]; two surfaces ship with the crate, an SVG document and a
//! character grid for terminals.

use crate::cluster::DbscanResult;
use crate::dataset::Bounds;
use crate::point::Point;
use std::collections::HashMap;

pub const NOISE_COLOR: &str = "#fff";

const COLORS: [&str; 30] = [
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    "#800000", "#808000", "#008000", "#000080", "#800080", "#808080",
    "#C0C0C0", "#FFD700", "#FF6347", "#98FB98", "#FF1493", "#FF4500",
    "#2E8B57", "#4B0082", "#D2691E", "#ADFF2F", "#A52A2A", "#F4A300",
    "#C71585", "#B0E0E6", "#A9A9A9", "#000000", "#FFFFFF", "#8B0000",
];

const BOX_MIN_SIDE: f64 = 30.0;
const BOX_SPREAD: f64 = 5.0;
const BOX_PADDING: f64 = 30.0;

/// A drawing target that can be wiped and repopulated.
pub trait Surface {
    fn clear(&mut self);

    fn place_point(&mut self, point: &Point, color: &str);

    /// Outline a cluster. Surfaces without outlines ignore it.
    fn place_box(&mut self, _outline: &BoundingBox) {}
}

#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<String>,
    noise: String,
}

impl Palette {
    pub fn new(colors: Vec<String>, noise: String) -> Self {
        Self { colors, noise }
    }

    /// Colour for cluster `index`; indices past the end wrap around.
    pub fn color(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return &self.noise;
        }
        &self.colors[index % self.colors.len()]
    }

    pub fn noise(&self) -> &str {
        &self.noise
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            COLORS.iter().map(|c| c.to_string()).collect(),
            NOISE_COLOR.to_string(),
        )
    }
}

/// Coordinate extent of one cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub lower_x: i64,
    pub upper_x: i64,
    pub lower_y: i64,
    pub upper_y: i64,
}

/// Screen rectangle drawn around a cluster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn around(cluster: &[Point]) -> Option<Self> {
        let first = cluster.first()?;
        let init = Self {
            lower_x: first.x,
            upper_x: first.x,
            lower_y: first.y,
            upper_y: first.y,
        };
        Some(cluster.iter().fold(init, |b, p| Self {
            lower_x: b.lower_x.min(p.x),
            upper_x: b.upper_x.max(p.x),
            lower_y: b.lower_y.min(p.y),
            upper_y: b.upper_y.max(p.y),
        }))
    }

    /// Small clusters still get a visible box of at least `BOX_MIN_SIDE`.
    pub fn outline(&self) -> Outline {
        let width = ((self.upper_x - self.lower_x) as f64 + BOX_SPREAD).max(BOX_MIN_SIDE);
        let height = ((self.upper_y - self.lower_y) as f64 + BOX_SPREAD).max(BOX_MIN_SIDE);
        Outline {
            left: self.upper_x as f64 - width / 2.0,
            top: self.upper_y as f64 - height / 2.0,
            width: width + BOX_PADDING,
            height: height + BOX_PADDING,
        }
    }
}

/// Clear `surface` and draw every cluster followed by the noise.
pub fn draw_clusters(surface: &mut dyn Surface, result: &DbscanResult, palette: &Palette, draw_boxes: bool) {
    surface.clear();

    for (index, cluster) in result.clusters.iter().enumerate() {
        if draw_boxes {
            if let Some(bbox) = BoundingBox::around(cluster) {
                surface.place_box(&bbox);
            }
        }
        let color = palette.color(index);
        for p in cluster {
            surface.place_point(p, color);
        }
    }

    for p in &result.noise {
        surface.place_point(p, palette.noise());
    }
}

/// Renders into a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: i64,
    height: i64,
    background: String,
    point_radius: f64,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            background: "#222".to_string(),
            point_radius: 4.0,
            elements: Vec::new(),
        }
    }

    pub fn background(mut self, background: &str) -> Self {
        self.background = background.to_string();
        self
    }

    pub fn point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = point_radius;
        self
    }

    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        out.push('\n');
        out.push_str(&format!(r#"  <rect width="100%" height="100%" fill="{}"/>"#, self.background));
        out.push('\n');
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn place_point(&mut self, point: &Point, color: &str) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"><title>{}</title></circle>"#,
            point.x, point.y, self.point_radius, color, point.value
        ));
    }

    fn place_box(&mut self, outline: &BoundingBox) {
        let o = outline.outline();
        self.elements.push(format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#aaa" stroke-dasharray="4 2"/>"##,
            o.left, o.top, o.width, o.height
        ));
    }
}

/// Renders into a character grid, one glyph per distinct colour.
#[derive(Clone, Debug)]
pub struct TextSurface {
    bounds: Bounds,
    cols: usize,
    rows: usize,
    noise_color: String,
    cells: Vec<Vec<char>>,
    glyphs: HashMap<String, char>,
}

const GLYPHS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NOISE_GLYPH: char = '.';
const EMPTY_GLYPH: char = ' ';

impl TextSurface {
    pub fn new(bounds: Bounds, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            bounds,
            cols,
            rows,
            noise_color: NOISE_COLOR.to_string(),
            cells: vec![vec![EMPTY_GLYPH; cols]; rows],
            glyphs: HashMap::new(),
        }
    }

    pub fn noise_color(mut self, noise_color: &str) -> Self {
        self.noise_color = noise_color.to_string();
        self
    }

    fn cell(&self, point: &Point) -> (usize, usize) {
        let scale = |v: i64, extent: i64, n: usize| -> usize {
            if extent <= 0 {
                return 0;
            }
            let v = v.clamp(0, extent) as f64 / extent as f64;
            ((v * (n - 1) as f64).round() as usize).min(n - 1)
        };
        (
            scale(point.y, self.bounds.height, self.rows),
            scale(point.x, self.bounds.width, self.cols),
        )
    }

    fn glyph(&mut self, color: &str) -> char {
        if color == self.noise_color {
            return NOISE_GLYPH;
        }
        let next = GLYPHS[self.glyphs.len() % GLYPHS.len()] as char;
        *self.glyphs.entry(color.to_string()).or_insert(next)
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in &self.cells {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(EMPTY_GLYPH);
        }
        self.glyphs.clear();
    }

    fn place_point(&mut self, point: &Point, color: &str) {
        let glyph = self.glyph(color);
        let (r, c) = self.cell(point);
        self.cells[r][c] = glyph;
    }
}
