//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{piece_data, GameSnapshot, Piece, Shape};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{GamePhase, PieceKind, DEFAULT_TICK_RATE_HZ};

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

const LEFT_PANEL_W: u16 = 16;
const RIGHT_PANEL_W: u16 = 12;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BAND_BG: Rgb = Rgb::new(48, 24, 30);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Where the well and its panels land on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    well_x: u16,
    well_y: u16,
    frame_w: u16,
    frame_h: u16,
    /// First well row drawn (the band is hidden on short terminals)
    first_row: u8,
    panels: bool,
}

/// A lightweight terminal view of one game.
pub struct GameView {
    /// Well cell width in terminal columns.
    cell_w: u16,
    /// Ticks per second, for the elapsed time readout.
    tick_rate_hz: u32,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_tick_rate(mut self, tick_rate_hz: u32) -> Self {
        self.tick_rate_hz = tick_rate_hz.max(1);
        self
    }

    /// Render a snapshot into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::new(' ', Style::new(Rgb::new(220, 220, 220), PANEL_BG)));

        let layout = self.layout(snap, viewport);

        self.draw_border(fb, &layout, snap.invalid_rows);
        self.draw_well(fb, &layout, snap);

        if let Some(ghost) = snap.ghost {
            self.draw_ghost(fb, &layout, ghost);
        }
        if let Some(active) = snap.active {
            let style = Style::new(piece_data(active.piece.kind).highlight, WELL_BG).bold();
            for (x, y) in active.piece.cells() {
                self.draw_well_cell(fb, &layout, x, y, '█', style);
            }
        }

        if layout.panels {
            self.draw_left_panel(fb, &layout, snap);
            self.draw_right_panel(fb, &layout, snap);
        }

        match snap.phase {
            GamePhase::Start => {
                self.draw_overlay(fb, &layout, &["TYTRIS", "", "ENTER TO PLAY"]);
            }
            GamePhase::Paused => {
                self.draw_overlay(fb, &layout, &["PAUSED", "", "P TO RESUME"]);
            }
            GamePhase::GameOver if snap.info.high_score => {
                self.draw_overlay(fb, &layout, &["GAME OVER", "NEW HIGH SCORE", "ENTER TO RETRY"]);
            }
            GamePhase::GameOver => {
                self.draw_overlay(fb, &layout, &["GAME OVER", "", "ENTER TO RETRY"]);
            }
            GamePhase::NewGame | GamePhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let frame_w = snap.width as u16 * self.cell_w + 2;
        let full_h = snap.height as u16 + 2;
        let first_row = if viewport.height < full_h {
            snap.invalid_rows
        } else {
            0
        };
        let frame_h = (snap.height - first_row) as u16 + 2;

        let total_w = LEFT_PANEL_W + frame_w + RIGHT_PANEL_W;
        let panels = viewport.width >= total_w;
        let well_x = if panels {
            (viewport.width - total_w) / 2 + LEFT_PANEL_W
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };

        Layout {
            well_x,
            well_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
            first_row,
            panels,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout, invalid_rows: u8) {
        let style = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (x, y, w, h) = (layout.well_x, layout.well_y, layout.frame_w, layout.frame_h);

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

        // Tick marks on both walls where the invalid band ends.
        if layout.first_row == 0 && invalid_rows > 0 {
            let marker = Style::new(Rgb::new(220, 80, 80), PANEL_BG).bold();
            let band_y = y + invalid_rows as u16;
            fb.put_char(x, band_y, '├', marker);
            fb.put_char(x + w - 1, band_y, '┤', marker);
        }
    }

    fn draw_well(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        for y in layout.first_row..snap.height {
            let bg = if y < snap.invalid_rows { BAND_BG } else { WELL_BG };
            for x in 0..snap.width {
                let (ch, style) = match snap.cell(x as usize, y as usize) {
                    Some(kind) => ('█', Style::new(piece_data(kind).color, bg)),
                    None => ('·', Style::new(Rgb::new(90, 90, 100), bg).dim()),
                };
                self.draw_well_cell(fb, layout, x as i8, y as i8, ch, style);
            }
        }
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, layout: &Layout, ghost: Piece) {
        let style = Style::new(piece_data(ghost.kind).color, WELL_BG).dim();
        for (x, y) in ghost.cells() {
            self.draw_well_cell(fb, layout, x, y, '░', style);
        }
    }

    fn draw_well_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: i8,
        y: i8,
        ch: char,
        style: Style,
    ) {
        if x < 0 || y < layout.first_row as i8 {
            return;
        }
        let row = (y - layout.first_row as i8) as u16;
        if row + 2 >= layout.frame_h {
            return;
        }
        let px = layout.well_x + 1 + x as u16 * self.cell_w;
        let py = layout.well_y + 1 + row;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_mini(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, style: Style) {
        for (dx, dy) in Shape::canonical(kind).cells() {
            let px = x + dx as u16 * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, '█', style);
        }
    }

    fn draw_left_panel(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let x = layout.well_x - LEFT_PANEL_W;
        let width = (LEFT_PANEL_W - 2) as usize;
        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        let mut y = layout.well_y;

        fb.put_str(x, y, "HOLD", label);
        if let Some(kind) = snap.hold {
            let mut style = Style::new(piece_data(kind).color, PANEL_BG);
            style.dim = !snap.can_hold;
            self.draw_mini(fb, x + 1, y + 1, kind, style);
        }
        y += 4;

        let info = &snap.info;
        let secs = info.elapsed_ticks / u64::from(self.tick_rate_hz);
        let rows: [(&str, String); 10] = [
            ("SCORE", info.score.to_string()),
            ("LINES", info.lines_destroyed.to_string()),
            ("SPEED", snap.speed_level.to_string()),
            ("TIME", format!("{:02}:{:02}", secs / 60, secs % 60)),
            ("PIECES", info.pieces_dropped.to_string()),
            ("DROPS", info.quick_drops.to_string()),
            ("SWAPS", info.swaps.to_string()),
            ("DOUBLES", info.doubles.to_string()),
            ("TRIPLES", info.triples.to_string()),
            ("QUADS", info.quads.to_string()),
        ];
        for (name, v) in rows.iter() {
            fb.put_str(x, y, name, label);
            let vx = x + width.saturating_sub(v.len()) as u16;
            fb.put_str(vx, y, v, value);
            y += 1;
        }
    }

    fn draw_right_panel(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let x = layout.well_x + layout.frame_w + 2;
        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let mut y = layout.well_y;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        for (i, &kind) in snap.preview.iter().enumerate() {
            if y + 2 > layout.well_y + layout.frame_h {
                break;
            }
            let mut style = Style::new(piece_data(kind).color, PANEL_BG);
            style.dim = i > 0;
            self.draw_mini(fb, x, y, kind, style);
            y += 3;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, lines: &[&str]) {
        let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = (layout.well_y + layout.frame_h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let w = text.chars().count() as u16;
            let x = layout.well_x + layout.frame_w.saturating_sub(w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}
