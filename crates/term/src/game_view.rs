//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

const BOARD_BG: Rgb = Rgb::new(17, 24, 39);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const OVERLAY_BG: Rgb = Rgb::new(8, 10, 18);

const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const TOKENS_VALUE: CellStyle = CellStyle::new(Rgb::new(250, 204, 21), PANEL_BG).bold();
const OVERLAY_TITLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), OVERLAY_BG).bold();
const OVERLAY_TEXT: CellStyle = CellStyle::new(Rgb::new(200, 200, 210), OVERLAY_BG);
const OVERLAY_HINT: CellStyle = CellStyle::new(Rgb::new(250, 204, 21), OVERLAY_BG).bold();

/// Minimum side panel width for the legend (swatch + space + longest token name).
const LEGEND_MIN_W: u16 = 12;

/// A lightweight terminal renderer for the board, side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed on the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, frame, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match PieceKind::from_code(snap.board[y as usize][x as usize]) {
                    Some(kind) => self.draw_block(fb, frame, x, y, kind),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            self.draw_active(fb, frame, &active);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.status {
            GameStatus::Running => {}
            GameStatus::Ready => draw_overlay(
                fb,
                frame,
                &[
                    OverlayLine::Text("TOKEN TETRIS", OVERLAY_TITLE),
                    OverlayLine::Text("Stack crypto blocks", OVERLAY_TEXT),
                    OverlayLine::Text("and clear lines", OVERLAY_TEXT),
                    OverlayLine::Text("to earn tokens!", OVERLAY_TEXT),
                    OverlayLine::Blank,
                    OverlayLine::Text("ENTER to start", OVERLAY_HINT),
                ],
            ),
            GameStatus::Paused => draw_overlay(
                fb,
                frame,
                &[
                    OverlayLine::Text("GAME PAUSED", OVERLAY_TITLE),
                    OverlayLine::Blank,
                    OverlayLine::Text("ENTER to resume", OVERLAY_HINT),
                ],
            ),
            GameStatus::GameOver => draw_overlay(
                fb,
                frame,
                &[
                    OverlayLine::Text("GAME OVER", OVERLAY_TITLE),
                    OverlayLine::Blank,
                    OverlayLine::Number("FINAL SCORE ", snap.score, OVERLAY_TEXT),
                    OverlayLine::Number("TOKENS ", snap.tokens, OVERLAY_TEXT),
                    OverlayLine::Blank,
                    OverlayLine::Text("ENTER to play again", OVERLAY_HINT),
                ],
            ),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(55, 65, 81), BOARD_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(kind.color(), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn draw_active(&self, fb: &mut FrameBuffer, frame: Frame, active: &ActiveSnapshot) {
        for (x, y) in active.cells() {
            // Rows above the board stay hidden.
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_block(fb, frame, x as u16, y as u16, active.kind);
            }
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let mut y = frame.y;
        for (label, value, style) in [
            ("SCORE", snap.score, VALUE),
            ("LEVEL", snap.level, VALUE),
            ("LINES", snap.lines, VALUE),
            ("TOKENS", snap.tokens, TOKENS_VALUE),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, style);
            y = y.saturating_add(3);
        }

        if panel_w < LEGEND_MIN_W {
            return;
        }
        fb.put_str(panel_x, y, "COINS", LABEL);
        y = y.saturating_add(1);
        for kind in PieceKind::ALL {
            if y >= viewport.height {
                return;
            }
            let swatch = CellStyle::new(kind.color(), PANEL_BG);
            fb.put_str(panel_x, y, "██", swatch);
            fb.put_str(panel_x + 3, y, kind.token_name(), VALUE);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        let hint = VALUE.dim();
        for line in ["SPACE drop", "P pause", "R restart", "Q quit"] {
            if y >= viewport.height {
                return;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum OverlayLine {
    Blank,
    Text(&'static str, CellStyle),
    /// Label followed by a number, centered as one run.
    Number(&'static str, u32, CellStyle),
}

impl OverlayLine {
    fn width(&self) -> u16 {
        match *self {
            OverlayLine::Blank => 0,
            OverlayLine::Text(s, _) => s.chars().count() as u16,
            OverlayLine::Number(s, n, _) => s.chars().count() as u16 + digit_count(n),
        }
    }
}

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[OverlayLine]) {
    let inner_x = frame.x + 1;
    let inner_w = frame.w - 2;
    let h = lines.len() as u16 + 2;
    let top = frame.y.saturating_add(frame.h.saturating_sub(h) / 2);

    fb.fill_rect(inner_x, top, inner_w, h, ' ', CellStyle::new(OVERLAY_BG, OVERLAY_BG));

    for (i, line) in lines.iter().enumerate() {
        let y = top + 1 + i as u16;
        let x = inner_x.saturating_add(inner_w.saturating_sub(line.width()) / 2);
        match *line {
            OverlayLine::Blank => {}
            OverlayLine::Text(s, style) => {
                fb.put_str(x, y, s, style);
            }
            OverlayLine::Number(s, n, style) => {
                let after = fb.put_str(x, y, s, style);
                fb.put_u32(after, y, n, style.bold());
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
