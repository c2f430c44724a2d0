//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. Board row 0 is the floor, so it is drawn on the lowest screen
//! row of the well.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, BOARD_COLUMNS, BOARD_ROWS};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Host-side state shown next to the simulation: best score and pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub high_score: u32,
    pub paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self::new(2, 1)
    }
}

/// Screen rectangle of the well, border included.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
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

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let w = BOARD_COLUMNS as u16 * self.cell_w + 2;
        let h = BOARD_ROWS as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            w - 2,
            h - 2,
            ' ',
            Style::new(WELL_BG, WELL_BG),
        );
        draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), PANEL_BG));

        let empty = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for y in 0..BOARD_ROWS as i8 {
            for x in 0..BOARD_COLUMNS as i8 {
                match snap.cell(x as usize, y as usize) {
                    Some(kind) => self.put_cell(fb, frame, x, y, '█', block_style(kind)),
                    None => self.put_cell(fb, frame, x, y, '·', empty),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            let style = Style::new(Rgb::new(140, 140, 140), WELL_BG).dim();
            for (x, y) in ghost.board_cells() {
                self.put_cell(fb, frame, x, y, '░', style);
            }
        }
        if let Some(active) = snap.active {
            for (x, y) in active.board_cells() {
                self.put_cell(fb, frame, x, y, '█', block_style(active.kind));
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, frame);

        if hud.paused {
            draw_overlay_text(fb, frame, "PAUSED");
        } else if snap.game_over {
            draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Screen origin of board cell `(x, y)`, or `None` outside the well.
    fn cell_origin(&self, frame: Frame, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || x >= BOARD_COLUMNS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
            return None;
        }
        let row_from_top = (BOARD_ROWS as i8 - 1 - y) as u16;
        Some((
            frame.x + 1 + x as u16 * self.cell_w,
            frame.y + 1 + row_from_top * self.cell_h,
        ))
    }

    fn put_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, ch: char, style: Style) {
        if let Some((px, py)) = self.cell_origin(frame, x, y) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: Hud,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", hud.high_score.max(snap.score)),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next);
        y = y.saturating_add(5);

        if snap.fast_drop {
            fb.put_str(panel_x, y, "FAST", value.dim());
        }
    }

    /// Next piece in its spawn orientation, top row first.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let rows = piece.shape.rows() as u16;
        let style = block_style(piece.kind);
        for (dx, dy) in piece.shape.cells() {
            let py = y + (rows - 1 - dy as u16);
            let px = x + dx as u16 * self.cell_w;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

fn block_style(kind: PieceKind) -> Style {
    Style::new(kind_color(kind), WELL_BG).bold()
}

/// Display color for a kind.
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 220, 230),
        PieceKind::L => Rgb::new(60, 110, 230),
        PieceKind::J => Rgb::new(255, 150, 30),
        PieceKind::O => Rgb::new(240, 220, 60),
        PieceKind::S => Rgb::new(90, 210, 100),
        PieceKind::Z => Rgb::new(225, 60, 60),
        PieceKind::T => Rgb::new(230, 180, 40),
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: Style) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    fb.put(x, y, '┌', style);
    fb.put(x + w - 1, y, '┐', style);
    fb.put(x, y + h - 1, '└', style);
    fb.put(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', style);
        fb.put(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', style);
        fb.put(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let y = frame.y.saturating_add(frame.h / 2);
    fb.put_str(x, y, text, Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold());
}
