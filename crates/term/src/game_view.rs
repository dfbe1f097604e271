//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Background per exponent (index 1 = 2, index 11 = 2048).
const TILE_BG: [Rgb; 12] = [
    EMPTY_BG,
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
    Rgb::new(237, 200, 80),
    Rgb::new(237, 197, 63),
    Rgb::new(237, 194, 46),
];

/// Anything past 2048.
const SUPER_BG: Rgb = Rgb::new(60, 58, 50);

/// Style of a tile with magnitude `value` (0 = empty).
pub fn tile_style(value: u32) -> CellStyle {
    if value == 0 {
        return CellStyle::new(DARK_TEXT, EMPTY_BG).dim();
    }
    let exp = value.trailing_zeros() as usize;
    let bg = TILE_BG.get(exp).copied().unwrap_or(SUPER_BG);
    let fg = if exp <= 2 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, bg).bold()
}

/// A terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits six digits and looks roughly square in most fonts.
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board for a `size x size` game.
    ///
    /// Tiles are separated (and surrounded) by one-cell gutters.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let n = size as u16;
        let inner_w = n * (self.tile_w + 1) + 1;
        let inner_h = n * (self.tile_h + 1) + 1;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let gutter = CellStyle::new(BOARD_BG, BOARD_BG);

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', gutter);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..snap.size {
            for x in 0..snap.size {
                self.draw_tile(fb, start_x, start_y, x as u16, y as u16, snap.value_at(x, y));
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Banners go on the top border so no tile is covered.
        if snap.game_over {
            self.draw_banner(fb, start_x, start_y, frame_w, " GAME OVER ");
        } else if snap.won {
            self.draw_banner(fb, start_x, start_y, frame_w, " YOU WIN ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Top-left terminal cell of tile (x, y).
    fn tile_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x + 2 + x * (self.tile_w + 1),
            start_y + 2 + y * (self.tile_h + 1),
        )
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        value: u32,
    ) {
        let (px, py) = self.tile_origin(start_x, start_y, x, y);
        let style = tile_style(value);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        let mid_y = py + self.tile_h / 2;
        if value == 0 {
            fb.put_char(px + self.tile_w / 2, mid_y, '·', style);
            return;
        }
        let digits = decimal_width(value);
        let nx = px + self.tile_w.saturating_sub(digits) / 2;
        fb.put_u32(nx, mid_y, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = start_y;
        for (name, v) in [("GOAL", snap.goal), ("BEST", snap.max_tile), ("MOVES", snap.moves)] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, v, value);
            y = y.saturating_add(2);
        }

        for hint in ["arrows move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, dim);
            y = y.saturating_add(1);
        }
    }

    /// Centre `text` on the top border row of the board frame.
    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, start_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_for_classic_board() {
        let view = GameView::default();
        // 4 tiles * (7 + 1) + 1 gutter + 2 border
        assert_eq!(view.frame_size(4), (35, 19));
        assert_eq!(view.frame_size(2), (19, 11));
    }

    #[test]
    fn small_tiles_use_dark_text() {
        assert_eq!(tile_style(2).fg, DARK_TEXT);
        assert_eq!(tile_style(4).fg, DARK_TEXT);
        assert_eq!(tile_style(8).fg, LIGHT_TEXT);
        assert_eq!(tile_style(2048).bg, Rgb::new(237, 194, 46));
        assert_eq!(tile_style(4096).bg, SUPER_BG);
        assert_eq!(tile_style(0).bg, EMPTY_BG);
    }
}
