use blockfall::core::{GameState, Piece};
use blockfall::term::{kind_color, AnchorY, GameView, Hud, Viewport};
use blockfall::types::PieceKind;

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10x20 cells at 2x1 plus border => 22x22
    let fb = view.render(&snap, Hud::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_floor_cell_two_chars_wide_at_bottom() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[0][0] = PieceKind::I.index();
    snap.active = None;
    snap.ghost = None;

    let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(22, 22));

    let y0 = 20;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(1, y0).unwrap().style.fg, kind_color(PieceKind::I));
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let mut state = GameState::new(1);
    assert!(state.set_active(Piece::spawn(PieceKind::O)));
    let snap = state.snapshot();

    let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(22, 22));

    // O spawns at x=4 on rows 18..=19 => screen rows 1..=2, columns 9..=12.
    assert_eq!(fb.get(9, 1).unwrap().ch, '█');
    assert_eq!(fb.get(12, 2).unwrap().ch, '█');
    // Ghost rests on rows 0..=1 => screen rows 19..=20.
    assert_eq!(fb.get(9, 20).unwrap().ch, '░');
    assert_eq!(fb.get(12, 19).unwrap().ch, '░');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.lines = 10;
    let hud = Hud {
        high_score: 5000,
        paused: false,
    };

    let fb = GameView::default().render(&snap, hud, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("5000"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = GameState::new(1).snapshot();
    snap.game_over = true;
    let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(22, 22));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(22, 30));
    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Hud::default(), Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
