use tui_128::core::{GameSnapshot, GameState, Grid, SimpleRng};
use tui_128::term::{tile_style, AnchorY, GameView, Viewport};
use tui_128::term::game_view::{GAME_OVER_TEXT, HELP, STUCK_TEXT, SUBTITLE, TITLE};

fn snapshot_of(rows: [[u32; 4]; 4]) -> GameSnapshot {
    let rows = rows.map(|r| r.map(|v| if v == 0 { None } else { Some(v) }));
    GameState::from_grid(Grid::from_rows(&rows), SimpleRng::new(1)).snapshot()
}

#[test]
fn term_view_draws_title_subtitle_and_help() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let text = fb.to_text();

    assert!(text.contains(TITLE));
    assert!(text.contains(SUBTITLE));
    assert!(text.contains(HELP));
    assert!(text.contains("moves 0"));
    assert!(!text.contains(GAME_OVER_TEXT.trim()));
}

#[test]
fn term_view_centers_tile_value_with_palette_style() {
    let snap = snapshot_of([[0, 0, 0, 0], [0, 64, 0, 0], [0; 4], [0; 4]]);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp);

    let layout = view.layout(vp);
    let (tx, ty) = view.tile_origin(&layout, 1, 1);
    // 6 wide, 3 tall: "64" sits at columns 2..4 of the middle line.
    let row: String = (0..6).map(|dx| fb.get(tx + dx, ty + 1).unwrap().ch).collect();
    assert_eq!(row, "  64  ");
    assert_eq!(fb.get(tx, ty).unwrap().style, tile_style(Some(64)));
    assert_eq!(fb.get(tx + 2, ty + 1).unwrap().style, tile_style(Some(64)));

    let (ex, ey) = view.tile_origin(&layout, 0, 0);
    assert_eq!(fb.get(ex, ey).unwrap().style, tile_style(None));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let snap = snapshot_of([[128, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert!(snap.game_over);
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(fb.to_text().contains(GAME_OVER_TEXT));
}

#[test]
fn term_view_hints_when_no_moves_are_left() {
    let snap = snapshot_of([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(!snap.can_move);
    assert!(!snap.game_over);
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(fb.to_text().contains(STUCK_TEXT));
}

#[test]
fn term_view_can_anchor_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(80, 40));
    let first_line = fb.to_text().lines().next().unwrap_or_default().to_string();
    assert!(first_line.contains(TITLE));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 24));
    view.render_into(&snap, Viewport::new(40, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 30));
    assert!(fb.to_text().contains(SUBTITLE));
}
