//! SVG export surface.

use std::fmt::Write as _;

use easel_common::Color;

use super::{PaintSurface, Point, Rect, TextAlign};
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Accumulates an SVG document sized to the logical canvas.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    body: String,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            body: String::with_capacity(4096),
        }
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        let mut doc = String::with_capacity(self.body.len() + 160);
        let _ = writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT,
        );
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }

    fn paint(&mut self, attr: &str, color: Color) {
        let _ = write!(self.body, r##" {attr}="#{}""##, color.to_rgb_digits());
        if color.a < 255 {
            let _ = write!(
                self.body,
                r#" {attr}-opacity="{:.3}""#,
                f32::from(color.a) / 255.0
            );
        }
    }
}

impl PaintSurface for SvgSurface {
    fn fill_background(&mut self, color: Color) {
        let _ = write!(
            self.body,
            r#"  <rect x="0" y="0" width="{}" height="{}""#,
            CANVAS_WIDTH, CANVAS_HEIGHT
        );
        self.paint("fill", color);
        self.body.push_str("/>\n");
    }

    fn fill_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let _ = write!(
            self.body,
            r#"  <rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x, rect.y, rect.w, rect.h
        );
        if radius > 0.0 {
            let _ = write!(self.body, r#" rx="{radius}""#);
        }
        self.paint("fill", color);
        self.body.push_str("/>\n");
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        let _ = write!(
            self.body,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke-width="{thickness}""#,
            rect.x, rect.y, rect.w, rect.h
        );
        self.paint("stroke", color);
        self.body.push_str("/>\n");
    }

    fn fill_ellipse(&mut self, center: Point, rx: f32, ry: f32, color: Color) {
        let _ = write!(
            self.body,
            r#"  <ellipse cx="{}" cy="{}" rx="{rx}" ry="{ry}""#,
            center.x, center.y
        );
        self.paint("fill", color);
        self.body.push_str("/>\n");
    }

    fn stroke_ellipse(&mut self, center: Point, rx: f32, ry: f32, thickness: f32, color: Color) {
        let _ = write!(
            self.body,
            r#"  <ellipse cx="{}" cy="{}" rx="{rx}" ry="{ry}" fill="none" stroke-width="{thickness}""#,
            center.x, center.y
        );
        self.paint("stroke", color);
        self.body.push_str("/>\n");
    }

    fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        let [a, b, c] = points;
        let _ = write!(
            self.body,
            r#"  <polygon points="{},{} {},{} {},{}""#,
            a.x, a.y, b.x, b.y, c.x, c.y
        );
        self.paint("fill", color);
        self.body.push_str("/>\n");
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        let _ = write!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{thickness}" stroke-linecap="round""#,
            from.x, from.y, to.x, to.y
        );
        self.paint("stroke", color);
        self.body.push_str("/>\n");
    }

    fn text(&mut self, at: Point, text: &str, font_size: f32, align: TextAlign, color: Color) {
        let (anchor, baseline) = match align {
            TextAlign::Left => ("start", "hanging"),
            TextAlign::Center => ("middle", "central"),
        };
        let _ = write!(
            self.body,
            r#"  <text x="{}" y="{}" font-size="{font_size}" font-family="sans-serif" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
            at.x, at.y
        );
        self.paint("fill", color);
        self.body.push('>');
        push_escaped(&mut self.body, text);
        self.body.push_str("</text>\n");
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}
