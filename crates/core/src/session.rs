//! Session module - the card-selection state machine
//!
//! [`SessionState`] is the authoritative game state and [`SessionState::apply`]
//! is its reducer: every change to the board goes through one [`Event`].
//! [`GameSession`] wraps the reducer with a deck source and the single
//! deferred timer the game needs (hiding a mismatched pair after a delay).
//!
//! Slot lifecycle within one game:
//!
//! ```text
//! NotFlipped ──select──▶ Flipped ──match──▶ Matched
//!      ▲                    │
//!      └──── mismatch reset ┘
//! ```
//!
//! Deferred resets carry the generation of the game that scheduled them.
//! Restarting bumps the generation, so a reset that fires late can never
//! touch the slots of a newer game.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::deck::{validate_pairs, DeckSource, RandomDeck};
use crate::error::{ConfigError, SessionError};
use crate::snapshot::{SessionSnapshot, SlotSnapshot};
use crate::types::{Card, GameAction, VisualState};

/// One board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSlot {
    pub card: Card,
    pub state: VisualState,
}

impl CardSlot {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            state: VisualState::NotFlipped,
        }
    }
}

/// Handle for a scheduled "hide the mismatched pair" transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingReset {
    /// Game generation that scheduled the reset.
    pub generation: u32,
    /// Slot flipped first.
    pub first: usize,
    /// Slot flipped second.
    pub second: usize,
    /// Delay before the reset should fire.
    pub delay_ms: u32,
}

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Reveal the card at a slot index
    Select(usize),
    /// Hide a mismatched pair (fired by the timer)
    ResetMismatch(PendingReset),
    /// Replace the board with a freshly dealt deck
    Restart(Vec<Card>),
}

/// Why a selection had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Slot is already flipped or matched.
    NotFaceDown,
    /// Two cards are face-up waiting for their reset.
    PairPending,
}

/// What an event did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ignored(IgnoreReason),
    /// First card of a turn revealed.
    Flipped { slot: usize },
    /// Second card equals the first; both are now matched.
    Matched {
        first: usize,
        second: usize,
        game_complete: bool,
        new_best: bool,
    },
    /// Second card differs; the handle must be fired after its delay.
    Mismatched(PendingReset),
    /// A mismatched pair was turned face-down again.
    Hidden { first: usize, second: usize },
    /// A reset from an older game (or one already applied) was dropped.
    StaleReset,
    Restarted { generation: u32 },
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ignored(_) => "ignored",
            Outcome::Flipped { .. } => "flipped",
            Outcome::Matched { .. } => "matched",
            Outcome::Mismatched(_) => "mismatched",
            Outcome::Hidden { .. } => "hidden",
            Outcome::StaleReset => "stale_reset",
            Outcome::Restarted { .. } => "restarted",
        }
    }
}

/// Complete board state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    slots: Vec<CardSlot>,
    /// Indices currently in `Flipped`, in flip order.
    flipped: ArrayVec<usize, 2>,
    trials: u32,
    matched_pairs: u32,
    best_score: Option<u32>,
    /// Monotonic game id (increments on restart).
    generation: u32,
    mismatch_delay_ms: u32,
}

impl SessionState {
    /// Build the first game from a dealt deck.
    pub fn new(cards: Vec<Card>, mismatch_delay_ms: u32) -> Result<Self, SessionError> {
        validate_pairs(&cards)?;
        Ok(Self {
            slots: cards.into_iter().map(CardSlot::new).collect(),
            flipped: ArrayVec::new(),
            trials: 0,
            matched_pairs: 0,
            best_score: None,
            generation: 0,
            mismatch_delay_ms,
        })
    }

    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&CardSlot> {
        self.slots.get(index)
    }

    pub fn pair_count(&self) -> usize {
        self.slots.len() / 2
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Slots currently face-up awaiting comparison or reset.
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs as usize == self.pair_count()
    }

    /// Apply one event.
    ///
    /// Only `Select` with an out-of-range index and `Restart` with a deck that
    /// breaks the pairing rule fail; both leave the state untouched.
    pub fn apply(&mut self, event: Event) -> Result<Outcome, SessionError> {
        match event {
            Event::Select(slot) => self.select(slot),
            Event::ResetMismatch(handle) => Ok(self.resolve_reset(handle)),
            Event::Restart(cards) => self.restart(cards),
        }
    }

    fn select(&mut self, slot: usize) -> Result<Outcome, SessionError> {
        let len = self.slots.len();
        let Some(target) = self.slots.get(slot) else {
            return Err(SessionError::SlotOutOfRange { index: slot, len });
        };

        if !target.state.is_selectable() {
            return Ok(Outcome::Ignored(IgnoreReason::NotFaceDown));
        }
        if self.flipped.is_full() {
            return Ok(Outcome::Ignored(IgnoreReason::PairPending));
        }

        self.slots[slot].state = VisualState::Flipped;

        let first = self.flipped.first().copied();
        let Some(first) = first else {
            self.flipped.push(slot);
            debug!(slot, "card flipped");
            return Ok(Outcome::Flipped { slot });
        };

        self.trials += 1;

        if self.slots[first].card == self.slots[slot].card {
            self.slots[first].state = VisualState::Matched;
            self.slots[slot].state = VisualState::Matched;
            self.flipped.clear();
            self.matched_pairs += 1;
            info!(
                first,
                second = slot,
                trials = self.trials,
                matched_pairs = self.matched_pairs,
                "pair matched"
            );

            let game_complete = self.is_complete();
            let mut new_best = false;
            if game_complete {
                new_best = self.best_score.map_or(true, |best| self.trials < best);
                if new_best {
                    self.best_score = Some(self.trials);
                }
                info!(trials = self.trials, new_best, "game complete");
            }

            return Ok(Outcome::Matched {
                first,
                second: slot,
                game_complete,
                new_best,
            });
        }

        self.flipped.push(slot);
        debug!(first, second = slot, trials = self.trials, "pair mismatched");
        Ok(Outcome::Mismatched(PendingReset {
            generation: self.generation,
            first,
            second: slot,
            delay_ms: self.mismatch_delay_ms,
        }))
    }

    fn resolve_reset(&mut self, handle: PendingReset) -> Outcome {
        if handle.generation != self.generation {
            debug!(
                handle_generation = handle.generation,
                generation = self.generation,
                "dropping reset from an older game"
            );
            return Outcome::StaleReset;
        }

        let pair = [handle.first, handle.second];
        let live = pair.iter().all(|&i| {
            self.flipped.contains(&i)
                && self
                    .slots
                    .get(i)
                    .is_some_and(|s| s.state == VisualState::Flipped)
        });
        if !live {
            return Outcome::StaleReset;
        }

        for i in pair {
            self.slots[i].state = VisualState::NotFlipped;
        }
        self.flipped.clear();
        debug!(first = handle.first, second = handle.second, "pair hidden");
        Outcome::Hidden {
            first: handle.first,
            second: handle.second,
        }
    }

    fn restart(&mut self, cards: Vec<Card>) -> Result<Outcome, SessionError> {
        validate_pairs(&cards)?;
        self.generation = self.generation.wrapping_add(1);
        self.slots = cards.into_iter().map(CardSlot::new).collect();
        self.flipped.clear();
        self.trials = 0;
        self.matched_pairs = 0;
        info!(
            generation = self.generation,
            pairs = self.pair_count(),
            best_score = ?self.best_score,
            "new game"
        );
        Ok(Outcome::Restarted {
            generation: self.generation,
        })
    }

    /// Write a read-only view into an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.slots.clear();
        out.slots.extend(self.slots.iter().map(|s| SlotSnapshot {
            card: s.card,
            state: s.state,
        }));
        out.pair_count = self.pair_count();
        out.trials = self.trials;
        out.matched_pairs = self.matched_pairs;
        out.best_score = self.best_score;
        out.generation = self.generation;
        out.reset_pending = self.flipped.is_full();
        out.complete = self.is_complete();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Pure-function form of [`SessionState::apply`].
///
/// The state is handed back even when the event is rejected.
pub fn reduce(
    mut state: SessionState,
    event: Event,
) -> (SessionState, Result<Outcome, SessionError>) {
    let outcome = state.apply(event);
    (state, outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledReset {
    handle: PendingReset,
    remaining_ms: u32,
}

/// A running game: reducer state, deck source and the mismatch timer.
#[derive(Debug, Clone)]
pub struct GameSession<D = RandomDeck> {
    state: SessionState,
    deck: D,
    pending: Option<ScheduledReset>,
}

impl GameSession<RandomDeck> {
    /// Start a session dealing random decks from `config.seed`.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Self::with_deck(
            RandomDeck::new(config.seed),
            config.pair_count,
            config.mismatch_delay_ms,
        )
    }
}

impl<D: DeckSource> GameSession<D> {
    /// Start a session with a custom deck source.
    ///
    /// A zero delay is rejected the same way [`SessionConfig::validate`] rejects it.
    pub fn with_deck(mut deck: D, pair_count: usize, delay_ms: u32) -> Result<Self, SessionError> {
        if delay_ms == 0 {
            return Err(ConfigError::ZeroDelay.into());
        }
        let cards = deck.deal(pair_count)?;
        let state = SessionState::new(cards, delay_ms)?;
        info!(pairs = pair_count, delay_ms, "session started");
        Ok(Self {
            state,
            deck,
            pending: None,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn deck(&self) -> &D {
        &self.deck
    }

    pub fn trials(&self) -> u32 {
        self.state.trials()
    }

    pub fn matched_pairs(&self) -> u32 {
        self.state.matched_pairs()
    }

    pub fn best_score(&self) -> Option<u32> {
        self.state.best_score()
    }

    pub fn pair_count(&self) -> usize {
        self.state.pair_count()
    }

    pub fn generation(&self) -> u32 {
        self.state.generation()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Handle of the scheduled reset, if any.
    pub fn pending_reset(&self) -> Option<PendingReset> {
        self.pending.map(|p| p.handle)
    }

    /// Milliseconds until the scheduled reset fires.
    pub fn reset_remaining_ms(&self) -> Option<u32> {
        self.pending.map(|p| p.remaining_ms)
    }

    /// Select a slot; a mismatch schedules the reset timer.
    pub fn select(&mut self, slot: usize) -> Result<Outcome, SessionError> {
        let outcome = self.state.apply(Event::Select(slot))?;
        if let Outcome::Mismatched(handle) = outcome {
            self.pending = Some(ScheduledReset {
                handle,
                remaining_ms: handle.delay_ms,
            });
        }
        Ok(outcome)
    }

    /// Deal a fresh board. Any scheduled reset is cancelled.
    ///
    /// On a deal failure the current game is left as it was.
    pub fn new_game(&mut self) -> Result<Outcome, SessionError> {
        let cards = self.deck.deal(self.state.pair_count())?;
        let outcome = self.state.apply(Event::Restart(cards))?;
        if let Some(cancelled) = self.pending.take() {
            debug!(
                generation = cancelled.handle.generation,
                "cancelled pending reset"
            );
        }
        Ok(outcome)
    }

    /// Route a display-layer action.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Outcome, SessionError> {
        match action {
            GameAction::Select(slot) => self.select(slot),
            GameAction::NewGame => self.new_game(),
        }
    }

    /// Advance the timer by `elapsed_ms`.
    ///
    /// Returns the reducer outcome when the scheduled reset fires.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Outcome> {
        let scheduled = self.pending.as_mut()?;
        scheduled.remaining_ms = scheduled.remaining_ms.saturating_sub(elapsed_ms);
        if scheduled.remaining_ms > 0 {
            return None;
        }
        let handle = scheduled.handle;
        self.pending = None;
        Some(self.state.resolve_reset(handle))
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::FixedDeck;
    use crate::types::VisualState::{Flipped as F, Matched as M, NotFlipped as N};
    use crate::types::{Rank, Suit};

    const A: Card = Card::new(Rank::Ace, Suit::Spades);
    const B: Card = Card::new(Rank::King, Suit::Hearts);
    const C: Card = Card::new(Rank::Two, Suit::Clubs);

    fn state_abba() -> SessionState {
        SessionState::new(vec![A, B, B, A], 1000).unwrap()
    }

    fn states(state: &SessionState) -> Vec<VisualState> {
        state.slots().iter().map(|s| s.state).collect()
    }

    #[test]
    fn test_new_state() {
        let state = state_abba();
        assert_eq!(state.pair_count(), 2);
        assert_eq!(states(&state), vec![N, N, N, N]);
        assert_eq!(state.trials(), 0);
        assert_eq!(state.matched_pairs(), 0);
        assert_eq!(state.best_score(), None);
        assert_eq!(state.generation(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_new_state_rejects_unpaired_deck() {
        assert!(SessionState::new(vec![A, B], 1000).is_err());
    }

    #[test]
    fn test_first_flip() {
        let mut state = state_abba();
        assert_eq!(
            state.apply(Event::Select(2)).unwrap(),
            Outcome::Flipped { slot: 2 }
        );
        assert_eq!(states(&state), vec![N, N, F, N]);
        assert_eq!(state.trials(), 0);
        assert_eq!(state.flipped(), &[2]);
    }

    #[test]
    fn test_select_flipped_slot_is_noop() {
        let mut state = state_abba();
        state.apply(Event::Select(0)).unwrap();
        let before = state.clone();
        assert_eq!(
            state.apply(Event::Select(0)).unwrap(),
            Outcome::Ignored(IgnoreReason::NotFaceDown)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_matched_slot_is_noop() {
        let mut state = state_abba();
        state.apply(Event::Select(1)).unwrap();
        state.apply(Event::Select(2)).unwrap();
        let before = state.clone();
        assert_eq!(
            state.apply(Event::Select(2)).unwrap(),
            Outcome::Ignored(IgnoreReason::NotFaceDown)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_while_pair_pending_is_noop() {
        let mut state = state_abba();
        state.apply(Event::Select(0)).unwrap();
        state.apply(Event::Select(1)).unwrap();
        let before = state.clone();
        assert_eq!(
            state.apply(Event::Select(2)).unwrap(),
            Outcome::Ignored(IgnoreReason::PairPending)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_out_of_range_rejected() {
        let mut state = state_abba();
        let before = state.clone();
        assert_eq!(
            state.apply(Event::Select(4)),
            Err(SessionError::SlotOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_match_marks_both_and_counts() {
        let mut state = state_abba();
        state.apply(Event::Select(0)).unwrap();
        let outcome = state.apply(Event::Select(3)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Matched {
                first: 0,
                second: 3,
                game_complete: false,
                new_best: false
            }
        );
        assert_eq!(states(&state), vec![M, N, N, M]);
        assert_eq!(state.trials(), 1);
        assert_eq!(state.matched_pairs(), 1);
        assert!(state.flipped().is_empty());
    }

    #[test]
    fn test_mismatch_returns_handle_and_keeps_cards_up() {
        let mut state = state_abba();
        state.apply(Event::Select(0)).unwrap();
        let outcome = state.apply(Event::Select(1)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Mismatched(PendingReset {
                generation: 0,
                first: 0,
                second: 1,
                delay_ms: 1000
            })
        );
        assert_eq!(states(&state), vec![F, F, N, N]);
        assert_eq!(state.trials(), 1);
        assert_eq!(state.matched_pairs(), 0);
    }

    #[test]
    fn test_reset_hides_pair() {
        let mut state = state_abba();
        state.apply(Event::Select(0)).unwrap();
        let Outcome::Mismatched(handle) = state.apply(Event::Select(1)).unwrap() else {
            panic!("expected mismatch");
        };
        assert_eq!(
            state.apply(Event::ResetMismatch(handle)).unwrap(),
            Outcome::Hidden {
                first: 0,
                second: 1
            }
        );
        assert_eq!(states(&state), vec![N, N, N, N]);
        assert!(state.flipped().is_empty());
        assert_eq!(state.trials(), 1);

        // Firing the same handle twice does nothing.
        assert_eq!(
            state.apply(Event::ResetMismatch(handle)).unwrap(),
            Outcome::StaleReset
        );
    }

    #[test]
    fn test_stale_reset_does_not_touch_new_game() {
        let mut state = state_abba();
        state.apply(Event::Select(0)).unwrap();
        let Outcome::Mismatched(handle) = state.apply(Event::Select(1)).unwrap() else {
            panic!("expected mismatch");
        };

        state.apply(Event::Restart(vec![A, B, A, B])).unwrap();
        // Same slots flipped in the new game.
        state.apply(Event::Select(0)).unwrap();
        let second = state.apply(Event::Select(1)).unwrap();
        assert!(matches!(second, Outcome::Mismatched(h) if h.generation == 1));
        let before = state.clone();

        assert_eq!(
            state.apply(Event::ResetMismatch(handle)).unwrap(),
            Outcome::StaleReset
        );
        assert_eq!(state, before);
        assert_eq!(states(&state), vec![F, F, N, N]);
    }

    #[test]
    fn test_restart_resets_counters_keeps_best() {
        let mut state = state_abba();
        for slot in [0, 3, 1, 2] {
            state.apply(Event::Select(slot)).unwrap();
        }
        assert!(state.is_complete());
        assert_eq!(state.best_score(), Some(2));

        let outcome = state.apply(Event::Restart(vec![C, A, A, C])).unwrap();
        assert_eq!(outcome, Outcome::Restarted { generation: 1 });
        assert_eq!(states(&state), vec![N, N, N, N]);
        assert_eq!(state.trials(), 0);
        assert_eq!(state.matched_pairs(), 0);
        assert_eq!(state.best_score(), Some(2));
        assert_eq!(state.slot(0).unwrap().card, C);
    }

    #[test]
    fn test_restart_with_bad_deck_keeps_game() {
        let mut state = state_abba();
        state.apply(Event::Select(0)).unwrap();
        let before = state.clone();
        assert!(state.apply(Event::Restart(vec![A, A, B])).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_best_score_only_improves() {
        let mut state = state_abba();
        // Finish in 2 trials.
        for slot in [0, 3, 1, 2] {
            state.apply(Event::Select(slot)).unwrap();
        }
        assert_eq!(state.best_score(), Some(2));

        // Finish in 3 trials: best stays at 2.
        state.apply(Event::Restart(vec![A, B, B, A])).unwrap();
        state.apply(Event::Select(0)).unwrap();
        let Outcome::Mismatched(h) = state.apply(Event::Select(1)).unwrap() else {
            panic!("expected mismatch");
        };
        state.apply(Event::ResetMismatch(h)).unwrap();
        state.apply(Event::Select(0)).unwrap();
        state.apply(Event::Select(3)).unwrap();
        state.apply(Event::Select(1)).unwrap();
        let last = state.apply(Event::Select(2)).unwrap();
        assert_eq!(
            last,
            Outcome::Matched {
                first: 1,
                second: 2,
                game_complete: true,
                new_best: false
            }
        );
        assert_eq!(state.trials(), 3);
        assert_eq!(state.best_score(), Some(2));
    }

    #[test]
    fn test_equal_score_is_not_a_new_best() {
        let mut state = state_abba();
        for slot in [0, 3, 1, 2] {
            state.apply(Event::Select(slot)).unwrap();
        }
        state.apply(Event::Restart(vec![A, B, B, A])).unwrap();
        state.apply(Event::Select(0)).unwrap();
        state.apply(Event::Select(3)).unwrap();
        state.apply(Event::Select(1)).unwrap();
        let last = state.apply(Event::Select(2)).unwrap();
        assert!(matches!(
            last,
            Outcome::Matched {
                game_complete: true,
                new_best: false,
                ..
            }
        ));
        assert_eq!(state.best_score(), Some(2));
    }

    #[test]
    fn test_reduce_returns_state_on_error() {
        let state = state_abba();
        let (state, result) = reduce(state, Event::Select(9));
        assert!(result.is_err());
        let (state, result) = reduce(state, Event::Select(1));
        assert_eq!(result.unwrap(), Outcome::Flipped { slot: 1 });
        assert_eq!(states(&state), vec![N, F, N, N]);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = state_abba();
        state.apply(Event::Select(0)).unwrap();
        state.apply(Event::Select(1)).unwrap();
        let snap = state.snapshot();
        assert_eq!(snap.slots.len(), 4);
        assert_eq!(snap.slots[0].state, F);
        assert_eq!(snap.slots[0].card, A);
        assert_eq!(snap.trials, 1);
        assert_eq!(snap.pair_count, 2);
        assert!(snap.reset_pending);
        assert!(!snap.complete);
    }

    fn session_abba() -> GameSession<FixedDeck> {
        GameSession::with_deck(FixedDeck::new(vec![A, B, B, A]).unwrap(), 2, 1000).unwrap()
    }

    #[test]
    fn test_session_timer_fires_after_delay() {
        let mut session = session_abba();
        session.select(0).unwrap();
        session.select(1).unwrap();
        assert_eq!(session.reset_remaining_ms(), Some(1000));

        assert_eq!(session.tick(600), None);
        assert_eq!(session.reset_remaining_ms(), Some(400));
        assert_eq!(
            session.tick(400),
            Some(Outcome::Hidden {
                first: 0,
                second: 1
            })
        );
        assert_eq!(session.pending_reset(), None);
        assert_eq!(states(session.state()), vec![N, N, N, N]);
        assert_eq!(session.tick(1000), None);
    }

    #[test]
    fn test_session_new_game_cancels_timer() {
        let mut session = session_abba();
        session.select(0).unwrap();
        session.select(1).unwrap();
        assert!(session.pending_reset().is_some());

        session.new_game().unwrap();
        assert_eq!(session.pending_reset(), None);
        session.select(0).unwrap();

        assert_eq!(session.tick(5000), None);
        assert_eq!(states(session.state()), vec![F, N, N, N]);
    }

    #[test]
    fn test_session_new_game_keeps_board_when_deal_fails() {
        struct OneDeal(bool);
        impl DeckSource for OneDeal {
            fn deal(&mut self, _pair_count: usize) -> Result<Vec<Card>, crate::DeckError> {
                if std::mem::replace(&mut self.0, true) {
                    Err(crate::DeckError::EmptyDeck)
                } else {
                    Ok(vec![A, B, B, A])
                }
            }
        }
        let mut session = GameSession::with_deck(OneDeal(false), 2, 1000).unwrap();
        session.select(0).unwrap();
        assert_eq!(
            session.new_game(),
            Err(SessionError::Deck(crate::DeckError::EmptyDeck))
        );
        assert_eq!(session.generation(), 0);
        assert_eq!(states(session.state()), vec![F, N, N, N]);
    }

    #[test]
    fn test_session_from_config() {
        let session = GameSession::new(SessionConfig::new(9, 7)).unwrap();
        assert_eq!(session.pair_count(), 9);
        assert_eq!(session.state().slots().len(), 18);
        assert_eq!(session.deck().seed(), 7);
        assert!(matches!(
            GameSession::new(SessionConfig::new(60, 7)),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn test_session_with_deck_rejects_zero_delay() {
        let deck = FixedDeck::new(vec![A, B, B, A]).unwrap();
        assert_eq!(
            GameSession::with_deck(deck, 2, 0).err(),
            Some(SessionError::Config(ConfigError::ZeroDelay))
        );
    }

    #[test]
    fn test_session_apply_action() {
        let mut session = session_abba();
        assert_eq!(
            session.apply_action(GameAction::Select(3)).unwrap(),
            Outcome::Flipped { slot: 3 }
        );
        assert_eq!(
            session.apply_action(GameAction::NewGame).unwrap(),
            Outcome::Restarted { generation: 1 }
        );
    }
}
