//! Key presses through the cursor into a live session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use flip_cards::core::{FixedDeck, GameSession, Outcome};
use flip_cards::input::{handle_key_event, should_quit, Cursor};
use flip_cards::types::{Card, GameAction, Rank, Suit, VisualState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed keys the way the terminal loop does; returns the last outcome.
fn press(
    game: &mut GameSession<FixedDeck>,
    cursor: &mut Cursor,
    codes: &[KeyCode],
) -> Option<Outcome> {
    let mut last = None;
    for &code in codes {
        if let Some(action) = handle_key_event(key(code)).and_then(|i| cursor.handle(i)) {
            last = Some(game.apply_action(action).unwrap());
            if action == GameAction::NewGame {
                cursor.resize(game.state().slots().len());
            }
        }
    }
    last
}

fn game() -> GameSession<FixedDeck> {
    let a = Card::new(Rank::Seven, Suit::Clubs);
    let b = Card::new(Rank::Jack, Suit::Hearts);
    let c = Card::new(Rank::Three, Suit::Diamonds);
    // 3x2 board:
    //   a b c
    //   c a b
    let deck = FixedDeck::new(vec![a, b, c, c, a, b]).unwrap();
    GameSession::with_deck(deck, 3, 1000).unwrap()
}

#[test]
fn keys_play_a_match() {
    let mut g = game();
    let mut cursor = Cursor::new(g.state().slots().len());
    assert_eq!(cursor.columns(), 3);

    press(&mut g, &mut cursor, &[KeyCode::Char(' ')]);
    assert_eq!(g.state().slots()[0].state, VisualState::Flipped);

    // Down then right lands on slot 4.
    let outcome = press(
        &mut g,
        &mut cursor,
        &[KeyCode::Down, KeyCode::Right, KeyCode::Enter],
    );
    assert_eq!(cursor.index(), 4);
    assert!(matches!(
        outcome,
        Some(Outcome::Matched {
            first: 0,
            second: 4,
            ..
        })
    ));
}

#[test]
fn vim_and_wasd_keys_move_the_cursor() {
    let mut g = game();
    let mut cursor = Cursor::new(6);
    press(&mut g, &mut cursor, &[KeyCode::Char('l'), KeyCode::Char('l')]);
    assert_eq!(cursor.index(), 2);
    press(&mut g, &mut cursor, &[KeyCode::Char('d')]);
    assert_eq!(cursor.index(), 0);
    press(&mut g, &mut cursor, &[KeyCode::Char('j'), KeyCode::Char('w')]);
    assert_eq!(cursor.index(), 0);
    assert_eq!(g.trials(), 0);
}

#[test]
fn new_game_key_restarts() {
    let mut g = game();
    let mut cursor = Cursor::new(6);
    press(&mut g, &mut cursor, &[KeyCode::Char(' '), KeyCode::Right, KeyCode::Char(' ')]);
    assert_eq!(g.trials(), 1);
    assert!(g.pending_reset().is_some());

    let outcome = press(&mut g, &mut cursor, &[KeyCode::Char('n')]);
    assert_eq!(outcome, Some(Outcome::Restarted { generation: 1 }));
    assert_eq!(g.trials(), 0);
    assert!(g.pending_reset().is_none());
    assert_eq!(cursor.index(), 1);
}

#[test]
fn quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(key(KeyCode::Char('c'))));
    assert_eq!(handle_key_event(key(KeyCode::Char('q'))), None);
}
