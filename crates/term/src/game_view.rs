//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, NextSnapshot};
use crate::fb::{FrameBuffer, Style};
use crate::types::{Rgb, GRID_HEIGHT, GRID_WIDTH};

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);

const LABEL: Style = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
const EMPTY: Style = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
const GHOST: Style = Style::new(Rgb::new(140, 140, 140), WELL_BG).dim();
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen origin of the well's border and the size of one grid cell.
#[derive(Debug, Clone, Copy)]
struct Layout {
    origin_x: u16,
    origin_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal view of the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport as needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Style::default().glyph(' '));

        let layout = self.layout(viewport);
        self.draw_border(fb, layout);

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, layout, x as i8, y as i8, *color),
                    None => self.fill_cell(fb, layout, x as i8, y as i8, '·', EMPTY),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            for (x, y) in ghost {
                self.fill_cell(fb, layout, x, y, '░', GHOST);
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells {
                self.draw_block(fb, layout, x, y, active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.paused() {
            self.draw_banner(fb, layout, "PAUSED", None);
        } else if snap.game_over() {
            self.draw_banner(fb, layout, "GAME OVER", Some("R to restart"));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (GRID_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (GRID_HEIGHT as u16) * self.cell_h + 2;
        Layout {
            origin_x: viewport.width.saturating_sub(frame_w) / 2,
            origin_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: Layout) {
        let (x, y, w, h) = (l.origin_x, l.origin_y, l.frame_w, l.frame_h);

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, l: Layout, x: i8, y: i8, color: Rgb) {
        let style = Style::new(color, WELL_BG).bold();
        self.fill_cell(fb, l, x, y, '█', style);
    }

    /// Fill one grid cell; cells outside the visible grid are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, l: Layout, x: i8, y: i8, ch: char, style: Style) {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return;
        }
        let px = l.origin_x + 1 + (x as u16) * self.cell_w;
        let py = l.origin_y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, l: Layout) {
        let panel_x = l.origin_x.saturating_add(l.frame_w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let mut y = l.origin_y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y + 1, value, VALUE);
            y += 3;
        }

        fb.put_str(panel_x, y, "SPEED", LABEL);
        let end = fb.put_u32(panel_x, y + 1, snap.fall_interval_ms, VALUE);
        fb.put_str(end, y + 1, "ms", VALUE.dim());
        y += 3;

        fb.put_str(panel_x, y, "NEXT", LABEL);
        self.draw_preview(fb, panel_x, y + 1, &snap.next);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &NextSnapshot) {
        let style = Style::new(next.color, PANEL_BG).bold();
        for (col, row) in next.matrix.filled() {
            let px = x + (col as u16) * self.cell_w;
            let py = y + (row as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, l: Layout, title: &str, hint: Option<&str>) {
        let mid_y = l.origin_y.saturating_add(l.frame_h / 2);
        let centered = |text: &str| {
            let w = text.chars().count() as u16;
            l.origin_x.saturating_add(l.frame_w.saturating_sub(w) / 2)
        };

        fb.put_str(centered(title), mid_y, title, BANNER);
        if let Some(hint) = hint {
            fb.put_str(centered(hint), mid_y + 1, hint, VALUE);
        }
    }
}
