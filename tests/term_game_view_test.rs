use tytris::core::{GameConfig, GameSnapshot, GameState};
use tytris::term::{GameView, Viewport};
use tytris::types::{Command, GamePhase, PieceKind};

fn playing() -> GameState {
    let mut game = GameState::new(GameConfig::default(), 1).unwrap();
    game.apply(Command::NewGame);
    game.advance_tick();
    game
}

fn empty_well() -> GameSnapshot {
    let mut snap = playing().snapshot();
    snap.active = None;
    snap.ghost = None;
    snap
}

#[test]
fn term_view_renders_border_corners() {
    // 10 cells * 2 columns + border = 22 wide; 25 rows + border = 27 high.
    let fb = GameView::default().render(&empty_well(), Viewport::new(22, 27));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 26).unwrap().ch, '└');
    assert_eq!(fb.get(21, 26).unwrap().ch, '┘');
}

#[test]
fn term_view_marks_the_invalid_band() {
    let fb = GameView::default().render(&empty_well(), Viewport::new(22, 27));
    assert_eq!(fb.get(0, 3).unwrap().ch, '├');
    assert_eq!(fb.get(21, 3).unwrap().ch, '┤');
    assert_eq!(fb.get(0, 4).unwrap().ch, '│');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = empty_well();
    snap.board[24 * 10] = Some(PieceKind::I);

    let fb = GameView::default().render(&snap, Viewport::new(22, 27));

    // Inside the border: (1, 1) is the origin of well cell (0, 0).
    assert_eq!(fb.get(1, 25).unwrap().ch, '█');
    assert_eq!(fb.get(2, 25).unwrap().ch, '█');
    assert_eq!(fb.get(3, 25).unwrap().ch, '·');
}

#[test]
fn term_view_hides_band_on_short_terminal() {
    let mut snap = empty_well();
    snap.board[24 * 10] = Some(PieceKind::I);

    let fb = GameView::default().render(&snap, Viewport::new(22, 24));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert!(!fb.row_text(3).contains('├'));
    // Row 24 is drawn 3 rows higher than on a tall terminal.
    assert_eq!(fb.get(1, 22).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let snap = playing().snapshot();
    let active = snap.active.unwrap().piece;
    let ghost = snap.ghost.unwrap();
    assert!(ghost.y > active.y);

    let fb = GameView::default().render(&snap, Viewport::new(22, 27));
    for (x, y) in active.cells() {
        let glyph = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(glyph.ch, '█');
        assert!(glyph.style.bold);
    }
    for (x, y) in ghost.cells() {
        let glyph = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(glyph.ch, '░');
        assert!(glyph.style.dim);
    }
}

#[test]
fn term_view_draws_side_panels_when_wide_enough() {
    let mut snap = playing().snapshot();
    snap.info.score = 1234;
    snap.info.lines_destroyed = 56;
    snap.info.elapsed_ticks = 60 * 75;
    snap.hold = Some(PieceKind::T);

    let fb = GameView::default().render(&snap, Viewport::new(80, 30));

    for label in ["HOLD", "NEXT", "SCORE", "LINES", "SPEED", "TIME", "QUADS"] {
        assert!(fb.contains_text(label), "missing {label}");
    }
    assert!(fb.contains_text("1234"));
    assert!(fb.contains_text("56"));
    assert!(fb.contains_text("01:15"));

    // The well is centred between the panels.
    assert_eq!(fb.get(31, 1).unwrap().ch, '┌');
}

#[test]
fn term_view_skips_panels_when_narrow() {
    let fb = GameView::default().render(&playing().snapshot(), Viewport::new(40, 30));
    assert!(!fb.contains_text("SCORE"));
    assert!(!fb.contains_text("NEXT"));
}

#[test]
fn term_view_time_follows_tick_rate() {
    let mut snap = empty_well();
    snap.info.elapsed_ticks = 120 * 10;
    let view = GameView::default().with_tick_rate(120);
    let fb = view.render(&snap, Viewport::new(80, 30));
    assert!(fb.contains_text("00:10"));
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let vp = Viewport::new(80, 30);

    let mut snap = empty_well();
    snap.phase = GamePhase::Paused;
    assert!(view.render(&snap, vp).contains_text("PAUSED"));

    snap.phase = GamePhase::GameOver;
    let fb = view.render(&snap, vp);
    assert!(fb.contains_text("GAME OVER"));
    assert!(!fb.contains_text("NEW HIGH SCORE"));

    snap.info.high_score = true;
    assert!(view.render(&snap, vp).contains_text("NEW HIGH SCORE"));

    snap.phase = GamePhase::Playing;
    let fb = view.render(&snap, vp);
    assert!(!fb.contains_text("PAUSED"));
    assert!(!fb.contains_text("GAME OVER"));
}
