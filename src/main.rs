//! Terminal blockfall runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no widget toolkit).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameConfig, GameSession, SessionSnapshot, ShapeCatalog, SimpleRng};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{Command, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.as_millis() as u32);

    let catalog = ShapeCatalog::standard();
    let mut session = GameSession::new(GameConfig::default(), catalog, SimpleRng::new(seed))?;
    let view = GameView::new(catalog);
    let mut snapshot = SessionSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut pending: ArrayVec<Command, 32> = ArrayVec::new();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Ignore terminal auto-repeat and release events.
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        session.handle_command(Command::Quit);
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        // Inputs beyond the per-tick buffer are dropped.
                        let _ = pending.try_push(command);
                    }
                }
            }
        }

        // Tick. The session ignores steps after game over, but the loop keeps
        // rendering the final board until the player quits.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.step(TICK_MS, &pending);
            pending.clear();
        }
    }
}
