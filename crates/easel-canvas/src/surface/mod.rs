//! Paint surface abstraction.
//!
//! The canvas buffer replays its commands onto anything implementing
//! [`PaintSurface`]. Colors arrive already resolved against the theme.

mod svg;

pub use svg::SvgSurface;

use easel_common::Color;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Position is the top-left corner.
    Left,
    /// Position is the center of the run.
    Center,
}

/// Primitive drawing operations a canvas replays onto.
pub trait PaintSurface {
    /// Fill the entire surface.
    fn fill_background(&mut self, color: Color);

    /// Fill a rectangle; `radius` rounds the corners when non-zero.
    fn fill_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);

    fn fill_ellipse(&mut self, center: Point, rx: f32, ry: f32, color: Color);

    fn stroke_ellipse(&mut self, center: Point, rx: f32, ry: f32, thickness: f32, color: Color);

    fn fill_triangle(&mut self, points: [Point; 3], color: Color);

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color);

    fn text(&mut self, at: Point, text: &str, font_size: f32, align: TextAlign, color: Color);
}
