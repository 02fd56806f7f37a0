//! Terminal Flip Cards runner (default binary).
//!
//! Plays in the terminal using crossterm for input and the framebuffer
//! renderer from `flip_cards::term`, or runs headless with `--script`.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::{debug, info, warn};

use flip_cards::cli::Args;
use flip_cards::core::{DeckSource, GameSession, SessionSnapshot};
use flip_cards::input::{handle_key_event, should_quit, Cursor};
use flip_cards::logging;
use flip_cards::script;
use flip_cards::term::{BoardView, FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use flip_cards::types::{GameAction, TICK_MS};

/// Unchanged frames are still redrawn this often.
const REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_target())?;

    match args.fixed_deck()? {
        Some(deck) => {
            let pairs = deck.pair_count();
            let session = GameSession::with_deck(deck, pairs, args.delay_ms)
                .context("failed to start game with fixed deck")?;
            launch(session, &args)
        }
        None => {
            let session =
                GameSession::new(args.session_config()).context("failed to start game")?;
            info!(
                seed = session.deck().seed(),
                pairs = session.pair_count(),
                "dealt random deck"
            );
            launch(session, &args)
        }
    }
}

fn launch<D: DeckSource>(mut session: GameSession<D>, args: &Args) -> Result<()> {
    if args.script {
        let stdin = io::stdin();
        return script::run(&mut session, stdin.lock(), io::stdout().lock());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<D: DeckSource>(
    term: &mut TerminalRenderer,
    session: &mut GameSession<D>,
    args: &Args,
) -> Result<()> {
    let view = BoardView::new().with_peek(args.peek);
    let mut cursor = Cursor::new(session.state().slots().len());
    let mut throttle = RenderThrottle::new(REFRESH_MS);
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fingerprint = snap.fingerprint_with(&view_bytes(cursor.index(), w, h));
        if throttle.should_render(started.elapsed().as_millis() as u64, fingerprint) {
            view.render_into(&snap, Some(cursor.index()), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key).and_then(|i| cursor.handle(i)) {
                        dispatch(session, &mut cursor, action);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(slot) = view.slot_at(&snap, viewport, mouse.column, mouse.row) {
                        cursor.move_to(slot);
                        dispatch(session, &mut cursor, GameAction::Select(slot));
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(outcome) = session.tick(TICK_MS) {
                debug!(?outcome, "timer fired");
            }
        }
    }
}

/// Cursor and terminal size, hashed along with the snapshot.
fn view_bytes(cursor: usize, w: u16, h: u16) -> [u8; 12] {
    let mut bytes = [0u8; 12];
    bytes[..8].copy_from_slice(&(cursor as u64).to_le_bytes());
    bytes[8..10].copy_from_slice(&w.to_le_bytes());
    bytes[10..].copy_from_slice(&h.to_le_bytes());
    bytes
}

fn dispatch<D: DeckSource>(session: &mut GameSession<D>, cursor: &mut Cursor, action: GameAction) {
    match session.apply_action(action) {
        Ok(outcome) => {
            debug!(?action, ?outcome, "action applied");
            if action == GameAction::NewGame {
                cursor.resize(session.state().slots().len());
            }
        }
        Err(err) => warn!(?action, %err, "action rejected"),
    }
}
