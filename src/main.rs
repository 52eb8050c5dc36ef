//! Terminal 128 runner (default binary).
//!
//! Event driven: block on the next terminal event, apply it to the game,
//! redraw. One key press is one turn.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use tui_128::config::Config;
use tui_128::core::GameState;
use tui_128::input::{handle_key_event, should_quit};
use tui_128::logging;
use tui_128::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let view = GameView::default();

    let mut snap = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    let (mut width, mut height) = crossterm::terminal::size().unwrap_or((80, 24));

    loop {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(width, height), &mut fb);
        term.draw(&fb)?;

        match event::read().context("read terminal event")? {
            // Repeats count as moves; releases are ignored.
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    info!(
                        "quit after {} moves, best tile {:?}",
                        game.moves(),
                        game.grid().max_tile()
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let changed = game.apply_action(action);
                    debug!("{} changed={}", action.as_str(), changed);
                }
            }
            Event::Resize(w, h) => {
                width = w;
                height = h;
                term.invalidate();
            }
            _ => {}
        }
    }
}
