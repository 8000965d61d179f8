use arcade_tetris::core::GameState;
use arcade_tetris::term::{GameView, Viewport};
use arcade_tetris::types::{Phase, Rgb};

fn screen_text(fb: &arcade_tetris::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // board pixels = 10*2 by 20*1 => 20x20, plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let cyan = Rgb::new(0, 255, 255);
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = Some(cyan);
    snap.active = None;
    snap.ghost = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, cyan);

    // Neighbor stays empty
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece_in_its_color() {
    let snap = GameState::new(5).snapshot();
    let active = snap.active.unwrap();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    for (x, y) in active.cells {
        if y < 0 {
            continue;
        }
        let glyph = fb.get(1 + (x as u16) * 2, 1 + y as u16).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, active.color);
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.fall_interval_ms = 900;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    for needle in ["SCORE", "1234", "LEVEL", "LINES", "SPEED", "900ms", "NEXT"] {
        assert!(all.contains(needle), "missing {needle}");
    }
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_phase_banners() {
    let mut snap = GameState::new(1).snapshot();
    let view = GameView::default();

    snap.phase = Phase::Paused;
    let fb = view.render(&snap, Viewport::new(60, 22));
    assert!(screen_text(&fb).contains("PAUSED"));

    snap.phase = Phase::GameOver;
    snap.active = None;
    let fb = view.render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("R to restart"));
}
