//! Fixed-capacity canvas buffer.
//!
//! Commands are stored in arrival order and painted in that order
//! (painter's algorithm). The command array and the string pool are both
//! sized at construction and never grow; when either is full, new work is
//! refused rather than evicting what is already drawn.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::color::Theme;
use crate::command::{decode, encode, DecodeError, DrawCommand};
use crate::pool::StringPool;
use crate::surface::{PaintSurface, Point, Rect, SvgSurface, TextAlign};

/// Storage limits of a [`CanvasBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLimits {
    pub max_commands: usize,
    pub string_pool_bytes: usize,
}

impl Default for CanvasLimits {
    fn default() -> Self {
        Self {
            max_commands: 256,
            string_pool_bytes: 4096,
        }
    }
}

/// Outcome of [`CanvasBuffer::load_wire_lines`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines decoded and pushed.
    pub accepted: usize,
    /// Lines that failed to decode.
    pub rejected: usize,
    /// Valid-looking lines skipped because the buffer was full.
    pub dropped: usize,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.dropped
    }
}

pub struct CanvasBuffer {
    commands: Vec<DrawCommand>,
    limits: CanvasLimits,
    pool: StringPool,
    theme: Arc<Theme>,
    total_pushed: u64,
}

impl CanvasBuffer {
    pub fn new(limits: CanvasLimits, theme: Arc<Theme>) -> Self {
        Self {
            commands: Vec::with_capacity(limits.max_commands),
            pool: StringPool::with_capacity(limits.string_pool_bytes),
            limits,
            theme,
            total_pushed: 0,
        }
    }

    /// Append a command. Returns `false` and leaves the buffer unchanged
    /// when it is already at capacity.
    pub fn push(&mut self, command: DrawCommand) -> bool {
        if self.is_full() {
            return false;
        }
        self.commands.push(command);
        self.total_pushed += 1;
        true
    }

    /// Remove every command and release all pooled text.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.pool.reset();
    }

    /// Paint every command, oldest first, resolving colors against `theme`.
    pub fn replay(&self, surface: &mut dyn PaintSurface, theme: &Theme) {
        for command in &self.commands {
            paint_command(surface, theme, &self.pool, command);
        }
    }

    /// Paint every command with the buffer's own theme.
    pub fn render(&self, surface: &mut dyn PaintSurface) {
        self.replay(surface, &self.theme);
    }

    /// Render the current canvas into a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = SvgSurface::new();
        self.render(&mut svg);
        svg.finish()
    }

    /// Swap the active theme. Stored commands are not touched; semantic
    /// colors pick up the new palette on the next replay.
    pub fn set_theme(&mut self, theme: Arc<Theme>) {
        debug!(theme = theme.name(), "canvas theme changed");
        self.theme = theme;
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.limits.max_commands
    }

    pub fn limits(&self) -> CanvasLimits {
        self.limits
    }

    pub fn is_full(&self) -> bool {
        self.commands.len() >= self.limits.max_commands
    }

    /// Commands accepted over the buffer's lifetime, across clears.
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Whether anything would be painted.
    pub fn has_content(&self) -> bool {
        !self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn pool(&self) -> &StringPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut StringPool {
        &mut self.pool
    }

    /// Decode one wire line straight into the buffer.
    pub fn push_wire_line(&mut self, line: &str) -> Result<bool, DecodeError> {
        if self.is_full() {
            return Ok(false);
        }
        let command = decode(line, &mut self.pool)?;
        Ok(self.push(command))
    }

    /// Decode newline-delimited wire lines and append them in order.
    ///
    /// Blank lines are ignored. A line that fails to decode is logged and
    /// counted as rejected; the remaining lines are still applied. Once the
    /// buffer is full, further lines are counted as dropped without being
    /// decoded.
    pub fn load_wire_lines(&mut self, wires: &str) -> LoadReport {
        let mut report = LoadReport::default();
        for line in wires.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if self.is_full() {
                report.dropped += 1;
                continue;
            }
            match self.push_wire_line(line) {
                Ok(true) => report.accepted += 1,
                Ok(false) => report.dropped += 1,
                Err(e) => {
                    debug!(error = %e, "rejected wire line");
                    report.rejected += 1;
                }
            }
        }
        if report.dropped > 0 {
            warn!(
                dropped = report.dropped,
                capacity = self.capacity(),
                "canvas full, commands dropped"
            );
        }
        debug!(
            accepted = report.accepted,
            rejected = report.rejected,
            len = self.len(),
            "wire lines loaded"
        );
        report
    }

    /// Encode every stored command as newline-terminated wire lines.
    pub fn to_wire_lines(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            out.push_str(&encode(command, &self.pool));
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Debug for CanvasBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasBuffer")
            .field("len", &self.commands.len())
            .field("limits", &self.limits)
            .field("pool_used", &self.pool.used())
            .field("theme", &self.theme.name())
            .field("total_pushed", &self.total_pushed)
            .finish()
    }
}

fn paint_command(
    surface: &mut dyn PaintSurface,
    theme: &Theme,
    pool: &StringPool,
    command: &DrawCommand,
) {
    match *command {
        DrawCommand::FillRect { x, y, w, h, color } => {
            surface.fill_rect(Rect::new(x, y, w, h), 0.0, theme.resolve(color));
        }
        DrawCommand::StrokeRect {
            x,
            y,
            w,
            h,
            thickness,
            color,
        } => {
            surface.stroke_rect(Rect::new(x, y, w, h), thickness, theme.resolve(color));
        }
        DrawCommand::FillRoundedRect {
            x,
            y,
            w,
            h,
            radius,
            color,
        } => {
            surface.fill_rect(Rect::new(x, y, w, h), radius, theme.resolve(color));
        }
        DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color,
        } => {
            surface.fill_ellipse(Point::new(cx, cy), radius, radius, theme.resolve(color));
        }
        DrawCommand::FillEllipse {
            cx,
            cy,
            rx,
            ry,
            color,
        } => {
            surface.fill_ellipse(Point::new(cx, cy), rx, ry, theme.resolve(color));
        }
        DrawCommand::StrokeCircle {
            cx,
            cy,
            radius,
            thickness,
            color,
        } => {
            surface.stroke_ellipse(
                Point::new(cx, cy),
                radius,
                radius,
                thickness,
                theme.resolve(color),
            );
        }
        DrawCommand::FillTriangle {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            color,
        } => {
            surface.fill_triangle(
                [Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)],
                theme.resolve(color),
            );
        }
        DrawCommand::DrawLine {
            x1,
            y1,
            x2,
            y2,
            thickness,
            color,
        } => {
            surface.line(
                Point::new(x1, y1),
                Point::new(x2, y2),
                thickness,
                theme.resolve(color),
            );
        }
        DrawCommand::DrawText {
            x,
            y,
            text_ref,
            font_size,
            color,
        } => {
            surface.text(
                Point::new(x, y),
                pool.get(text_ref),
                font_size,
                TextAlign::Left,
                theme.resolve(color),
            );
        }
        DrawCommand::DrawTextCentered {
            cx,
            cy,
            text_ref,
            font_size,
            color,
        } => {
            surface.text(
                Point::new(cx, cy),
                pool.get(text_ref),
                font_size,
                TextAlign::Center,
                theme.resolve(color),
            );
        }
        DrawCommand::SetBackground { color } => {
            surface.fill_background(theme.resolve(color));
        }
    }
}
