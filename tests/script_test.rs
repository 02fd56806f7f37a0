use serde_json::Value;

use flip_cards::core::{FixedDeck, GameSession};
use flip_cards::script;
use flip_cards::types::{Card, Rank, Suit};

fn run(input: &str) -> Vec<Value> {
    let a = Card::new(Rank::Ace, Suit::Spades);
    let b = Card::new(Rank::Queen, Suit::Diamonds);
    let deck = FixedDeck::new(vec![a, b, b, a]).unwrap();
    let mut session = GameSession::with_deck(deck, 2, 1000).unwrap();

    let mut out = Vec::new();
    script::run(&mut session, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn script_reports_each_command() {
    let reports = run("select 0\nselect 1\nwait 500\nwait 500\nshow\n");
    let events: Vec<&str> = reports.iter().map(|r| r["event"].as_str().unwrap()).collect();
    assert_eq!(
        events,
        ["flipped", "mismatched", "waited", "hidden", "show"]
    );

    assert_eq!(reports[1]["trials"], 1);
    assert_eq!(reports[1]["reset_pending"], true);
    assert_eq!(reports[1]["cards"][0], "A♤");
    assert_eq!(reports[1]["cards"][1], "Q♢");
    assert_eq!(reports[1]["states"][1], "flipped");
    assert_eq!(reports[3]["reset_pending"], false);
}

#[test]
fn script_hides_face_down_cards() {
    let reports = run("show");
    assert_eq!(reports.len(), 1);
    let cards = reports[0]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 4);
    assert!(cards.iter().all(Value::is_null));
    assert_eq!(reports[0]["best_score"], Value::Null);
}

#[test]
fn script_continues_after_session_error() {
    let reports = run("select 7\n# comment\n\nselect 0\n");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["event"], "error");
    assert!(reports[0]["error"].as_str().unwrap().contains('7'));
    assert_eq!(reports[1]["event"], "flipped");
    assert!(reports[1].get("error").is_none());
}

#[test]
fn script_completes_a_game() {
    let reports = run("select 0\nselect 3\nselect 1\nflip 2\nnew\n");
    assert_eq!(reports[3]["event"], "matched");
    assert_eq!(reports[3]["complete"], true);
    assert_eq!(reports[3]["best_score"], 2);
    assert_eq!(reports[3]["matched_pairs"], 2);

    assert_eq!(reports[4]["event"], "restarted");
    assert_eq!(reports[4]["trials"], 0);
    assert_eq!(reports[4]["best_score"], 2);
    assert_eq!(reports[4]["generation"], 1);
}

#[test]
fn script_rejects_malformed_line() {
    let deck = FixedDeck::new(vec![
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Two, Suit::Clubs),
    ])
    .unwrap();
    let mut session = GameSession::with_deck(deck, 1, 1000).unwrap();
    let mut out = Vec::new();
    let err = script::run(&mut session, "select 0\njump\n".as_bytes(), &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("line 2"));
    // The first command was still reported.
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}
