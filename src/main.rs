//! Terminal runner (default binary).
//!
//! Polls crossterm for input until the next frame is due, feeds real elapsed time
//! into the simulation and redraws through the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use blockfall::cli::Args;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::highscore::HighScoreStore;
use blockfall::input::{handle_key_event, handle_key_release, should_quit, InputAction};
use blockfall::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use blockfall::types::GameEvent;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = args.init_logger()?;
    let timing = args.timing()?;
    let seed = args.seed();
    let store = args.high_score_store();
    log::info!("starting seed={} timing={:?}", seed, timing);

    let mut game = GameState::with_timing(seed, timing);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    // Key release events need the kitty protocol; without it fast drop ends on lock.
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            std::io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let result = run(&mut term, &mut game, &store);

    if enhanced {
        let _ = execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
    }
    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("fatal error: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, store: &HighScoreStore) -> Result<()> {
    let view = GameView::default();
    let mut hud = Hud {
        high_score: store.load(),
        paused: false,
    };
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = FRAME.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Release => {
                    if let Some(InputAction::Game(cmd)) = handle_key_release(key) {
                        game.apply(cmd);
                    }
                }
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(InputAction::Game(cmd)) if !hud.paused => {
                            game.apply(cmd);
                        }
                        Some(InputAction::TogglePause) if !game.game_over() => {
                            hud.paused = !hud.paused;
                        }
                        Some(InputAction::Restart) => {
                            game.restart();
                            hud.paused = false;
                            log::info!("restart, episode {}", game.episode_id());
                        }
                        _ => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= FRAME {
            last_tick = Instant::now();
            if hud.paused {
                continue;
            }
            for ev in game.tick(elapsed.as_secs_f32()) {
                handle_event(ev, &mut hud, store);
            }
        }
    }
}

fn handle_event(ev: GameEvent, hud: &mut Hud, store: &HighScoreStore) {
    match ev {
        GameEvent::PiecePlaced { kind } => log::trace!("placed {}", kind.as_str()),
        GameEvent::LinesCleared { count, points } => {
            log::debug!("cleared {} lines for {} points", count, points)
        }
        GameEvent::GameOver { score } => {
            log::info!("game over, score {}", score);
            if score > hud.high_score {
                hud.high_score = score;
                if let Err(e) = store.record(score) {
                    log::warn!("could not save high score: {}", e);
                }
            }
        }
    }
}
