//! Game state machine: word progression, scoring and streaks.
//!
//! The engine knows nothing about the DOM. The presentation layer calls the
//! inbound operations (`set_level`, `start`, `stop`, `reset`, `handle_char`,
//! `handle_backspace`, `submit`), renders from [`GameEngine::snapshot`], and
//! looks at the returned [`GameEvent`]s for things that need scheduling.
//!
//! States are Idle (`active == false`) and Playing (`active == true`). Typing
//! and submitting are no-ops while Idle.
//!
//! After a word is completed or failed the engine does not move on by itself.
//! It hands out a [`PendingAdvance`] ticket; the caller waits `delay_ms` and
//! then calls [`GameEngine::complete_advance`]. Anything that picks a new word
//! in the meantime invalidates the ticket, so a late timer is harmless.

use crate::config::EngineConfig;
use crate::keyboard::KeyHint;
use crate::level::Level;
use crate::library::WordLibrary;
use crate::rng::{RandomPicker, WordPicker};
use crate::scoring::points_for_word;

pub const MSG_KEEP_GOING: &str = "Keep going...";
pub const MSG_MISMATCH: &str = "Check your spelling...";
pub const MSG_SUCCESS: &str = "Great job! 🎉";
pub const MSG_STOPPED: &str = "Game stopped! Click Start to play again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatusKind {
    Neutral,
    Warning,
    Success,
    Failure,
}

impl StatusKind {
    /// CSS class used by the feedback line.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Neutral => "neutral",
            StatusKind::Warning => "warning",
            StatusKind::Success => "correct",
            StatusKind::Failure => "incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn failure(word: &str) -> Self {
        Self::new(
            StatusKind::Failure,
            format!("Try again! The word was: {}", word),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceCause {
    Completed,
    Failed,
}

/// A word advance waiting for its timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    pub ticket: u64,
    pub delay_ms: u32,
    pub cause: AdvanceCause,
}

/// Per-letter classification of the target word for highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LetterState {
    Correct,
    Incorrect,
    /// The next letter to type.
    Current,
    Pending,
}

impl LetterState {
    pub fn css_class(self) -> &'static str {
        match self {
            LetterState::Correct => "letter correct",
            LetterState::Incorrect => "letter incorrect",
            LetterState::Current => "letter current",
            LetterState::Pending => "letter",
        }
    }
}

/// Something observable that an operation changed, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    LevelChanged(Level),
    WordChanged { word: &'static str },
    PrefixChanged { typed: String },
    StatusChanged(Option<Status>),
    StatsChanged { score: u32, streak: u32 },
    ActiveChanged(bool),
    WordCompleted { word: &'static str, points: u32 },
    WordFailed { word: &'static str },
    AdvanceScheduled(PendingAdvance),
}

/// Mutable game data. Only the engine writes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub level: Level,
    /// Empty only when the level's pool is empty.
    pub current_word: &'static str,
    pub typed: String,
    pub score: u32,
    pub streak: u32,
    pub active: bool,
}

/// Everything the presentation layer needs for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub level: Level,
    pub word: &'static str,
    pub typed: String,
    pub letters: Vec<LetterState>,
    pub score: u32,
    pub streak: u32,
    pub active: bool,
    pub status: Option<Status>,
    /// Only at `Level::Firsttime`.
    pub hint: Option<KeyHint>,
}

#[cfg(feature = "serde_json")]
impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub struct GameEngine<P: WordPicker = RandomPicker> {
    state: GameState,
    status: Option<Status>,
    library: WordLibrary,
    config: EngineConfig,
    picker: P,
    pending: Option<PendingAdvance>,
    next_ticket: u64,
    /// How the displayed word was last resolved, if it was.
    resolution: Option<AdvanceCause>,
}

impl GameEngine<RandomPicker> {
    /// Built-in words, default tuning, first-time level, idle.
    pub fn new() -> Self {
        Self::with_parts(
            WordLibrary::builtin(),
            EngineConfig::default(),
            RandomPicker::new(),
        )
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_parts(WordLibrary::builtin(), config, RandomPicker::new())
    }
}

impl Default for GameEngine<RandomPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: WordPicker> GameEngine<P> {
    pub fn with_parts(library: WordLibrary, config: EngineConfig, picker: P) -> Self {
        let mut engine = Self {
            state: GameState::default(),
            status: None,
            library,
            config,
            picker,
            pending: None,
            next_ticket: 1,
            resolution: None,
        };
        let mut events = Vec::new();
        engine.next_word(&mut events);
        engine
    }

    // --- Accessors -----------------------------------------------------------

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn pending_advance(&self) -> Option<PendingAdvance> {
        self.pending
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn library(&self) -> &WordLibrary {
        &self.library
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// The letter after the typed prefix, if the prefix is shorter than the word.
    pub fn next_key(&self) -> Option<char> {
        self.state
            .current_word
            .chars()
            .nth(self.state.typed.chars().count())
    }

    /// Next key plus finger guidance, shown only to first-time players.
    pub fn key_hint(&self) -> Option<KeyHint> {
        if !self.state.level.shows_keyboard() {
            return None;
        }
        self.next_key().map(KeyHint::new)
    }

    pub fn letter_states(&self) -> Vec<LetterState> {
        let typed: Vec<char> = self.state.typed.chars().collect();
        self.state
            .current_word
            .chars()
            .enumerate()
            .map(|(i, letter)| match typed.get(i) {
                Some(&t) if t == letter => LetterState::Correct,
                Some(_) => LetterState::Incorrect,
                None if i == typed.len() => LetterState::Current,
                None => LetterState::Pending,
            })
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            level: self.state.level,
            word: self.state.current_word,
            typed: self.state.typed.clone(),
            letters: self.letter_states(),
            score: self.state.score,
            streak: self.state.streak,
            active: self.state.active,
            status: self.status.clone(),
            hint: self.key_hint(),
        }
    }

    // --- Inbound operations --------------------------------------------------

    pub fn set_level(&mut self, level: Level) -> Vec<GameEvent> {
        let mut events = Vec::new();
        log::debug!("level -> {}", level.name());
        self.state.level = level;
        events.push(GameEvent::LevelChanged(level));
        self.next_word(&mut events);
        events
    }

    pub fn start(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.active {
            return events;
        }
        self.state.active = true;
        events.push(GameEvent::ActiveChanged(true));
        if self.state.current_word.is_empty() || self.resolution.is_some() {
            self.next_word(&mut events);
        }
        self.set_status(None, &mut events);
        log::info!("game started at {}", self.state.level.name());
        events
    }

    pub fn stop(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.active {
            self.state.active = false;
            self.pending = None;
            events.push(GameEvent::ActiveChanged(false));
        }
        self.set_status(
            Some(Status::new(StatusKind::Neutral, MSG_STOPPED)),
            &mut events,
        );
        log::info!("game stopped");
        events
    }

    /// Start when idle, stop when playing.
    pub fn toggle(&mut self) -> Vec<GameEvent> {
        if self.state.active {
            self.stop()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.state.score = 0;
        self.state.streak = 0;
        self.state.typed.clear();
        events.push(GameEvent::StatsChanged {
            score: 0,
            streak: 0,
        });
        if self.state.active {
            self.state.active = false;
            events.push(GameEvent::ActiveChanged(false));
        }
        self.next_word(&mut events);
        self.set_status(None, &mut events);
        log::info!("game reset");
        events
    }

    /// Accepts `a`-`z` and space; anything else is ignored.
    pub fn handle_char(&mut self, ch: char) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.state.active || self.state.current_word.is_empty() {
            return events;
        }
        if !(ch.is_ascii_lowercase() || ch == ' ') {
            return events;
        }
        self.state.typed.push(ch);
        events.push(GameEvent::PrefixChanged {
            typed: self.state.typed.clone(),
        });

        let word = self.state.current_word;
        if self.state.typed == word {
            self.complete_word(&mut events);
        } else if word.starts_with(self.state.typed.as_str()) {
            self.set_status(
                Some(Status::new(StatusKind::Neutral, MSG_KEEP_GOING)),
                &mut events,
            );
        } else {
            // Warn only; the keystroke is kept.
            self.set_status(
                Some(Status::new(StatusKind::Warning, MSG_MISMATCH)),
                &mut events,
            );
        }
        events
    }

    pub fn handle_backspace(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.state.active || self.state.typed.pop().is_none() {
            return events;
        }
        events.push(GameEvent::PrefixChanged {
            typed: self.state.typed.clone(),
        });
        self.set_status(None, &mut events);
        events
    }

    /// Explicit check. A partial (prefix) entry is not a failure.
    pub fn submit(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.state.active
            || self.state.current_word.is_empty()
            || self.resolution == Some(AdvanceCause::Completed)
        {
            return events;
        }
        let word = self.state.current_word;
        if self.state.typed == word {
            self.complete_word(&mut events);
        } else if word.starts_with(self.state.typed.as_str()) {
            self.set_status(
                Some(Status::new(StatusKind::Neutral, MSG_KEEP_GOING)),
                &mut events,
            );
        } else {
            self.fail_word(&mut events);
        }
        events
    }

    /// Runs a scheduled advance. Tickets that are no longer pending are
    /// ignored.
    pub fn complete_advance(&mut self, ticket: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.pending {
            Some(p) if p.ticket == ticket => {
                self.pending = None;
                self.next_word(&mut events);
                self.set_status(None, &mut events);
            }
            _ => log::debug!("ignoring stale advance ticket {}", ticket),
        }
        events
    }

    // --- Internals -----------------------------------------------------------

    /// Scores the displayed word. A word already scored is only acknowledged
    /// again; a failed word retyped during its delay scores normally.
    fn complete_word(&mut self, events: &mut Vec<GameEvent>) {
        if self.resolution == Some(AdvanceCause::Completed) {
            self.set_status(Some(Status::new(StatusKind::Success, MSG_SUCCESS)), events);
            return;
        }
        let points = points_for_word(self.state.level, self.state.streak, &self.config);
        self.state.score += points;
        self.state.streak += 1;
        self.resolution = Some(AdvanceCause::Completed);
        log::info!(
            "completed '{}' for {} points (streak {})",
            self.state.current_word,
            points,
            self.state.streak
        );
        events.push(GameEvent::WordCompleted {
            word: self.state.current_word,
            points,
        });
        events.push(GameEvent::StatsChanged {
            score: self.state.score,
            streak: self.state.streak,
        });
        self.set_status(Some(Status::new(StatusKind::Success, MSG_SUCCESS)), events);
        self.schedule_advance(AdvanceCause::Completed, self.config.success_delay_ms, events);
    }

    fn fail_word(&mut self, events: &mut Vec<GameEvent>) {
        self.state.streak = 0;
        self.resolution = Some(AdvanceCause::Failed);
        log::info!(
            "failed '{}' with '{}'",
            self.state.current_word,
            self.state.typed
        );
        events.push(GameEvent::WordFailed {
            word: self.state.current_word,
        });
        events.push(GameEvent::StatsChanged {
            score: self.state.score,
            streak: 0,
        });
        self.set_status(Some(Status::failure(self.state.current_word)), events);
        self.schedule_advance(AdvanceCause::Failed, self.config.failure_delay_ms, events);
    }

    fn schedule_advance(&mut self, cause: AdvanceCause, delay_ms: u32, events: &mut Vec<GameEvent>) {
        let advance = PendingAdvance {
            ticket: self.next_ticket,
            delay_ms,
            cause,
        };
        self.next_ticket += 1;
        self.pending = Some(advance);
        events.push(GameEvent::AdvanceScheduled(advance));
    }

    /// Picks a fresh word for the current level and clears typing. Any pending
    /// advance is dropped since its word is gone.
    fn next_word(&mut self, events: &mut Vec<GameEvent>) {
        let pool = self.library.words(self.state.level);
        self.state.current_word = match self.picker.pick(pool.len()).and_then(|i| pool.get(i)) {
            Some(word) => *word,
            None => {
                log::warn!("no words for level {}", self.state.level.name());
                ""
            }
        };
        self.state.typed.clear();
        self.resolution = None;
        self.pending = None;
        log::debug!("word -> '{}'", self.state.current_word);
        events.push(GameEvent::WordChanged {
            word: self.state.current_word,
        });
    }

    fn set_status(&mut self, status: Option<Status>, events: &mut Vec<GameEvent>) {
        if self.status != status {
            self.status = status.clone();
            events.push(GameEvent::StatusChanged(status));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedPicker;

    static CAT: [&str; 1] = ["cat"];
    static PAIR: [&str; 2] = ["dog", "sun"];

    fn engine_with(level: Level, picker: ScriptedPicker) -> GameEngine<ScriptedPicker> {
        let mut engine =
            GameEngine::with_parts(WordLibrary::builtin(), EngineConfig::default(), picker);
        engine.set_level(level);
        engine
    }

    fn cat_engine() -> GameEngine<ScriptedPicker> {
        let lib = WordLibrary::new(&CAT, &CAT, &CAT, &CAT);
        let mut engine = GameEngine::with_parts(lib, EngineConfig::default(), ScriptedPicker::first());
        engine.set_level(Level::Beginner);
        engine
    }

    fn type_str<P: WordPicker>(engine: &mut GameEngine<P>, s: &str) -> Vec<GameEvent> {
        s.chars().flat_map(|c| engine.handle_char(c)).collect()
    }

    #[test]
    fn new_engine_is_idle_with_a_word() {
        let engine = GameEngine::new();
        let state = engine.state();
        assert!(!state.active);
        assert_eq!(state.level, Level::Firsttime);
        assert!(engine.library().contains(Level::Firsttime, state.current_word));
        assert_eq!(state.score, 0);
        assert_eq!(state.streak, 0);
    }

    #[test]
    fn prefix_keeps_going() {
        let mut engine = cat_engine();
        engine.start();
        type_str(&mut engine, "ca");
        assert_eq!(engine.status().unwrap().message, MSG_KEEP_GOING);
        assert_eq!(engine.status().unwrap().kind, StatusKind::Neutral);
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().streak, 0);
    }

    #[test]
    fn mismatch_warns_but_keeps_keystroke() {
        let mut engine = cat_engine();
        engine.start();
        type_str(&mut engine, "cx");
        assert_eq!(engine.state().typed, "cx");
        assert_eq!(engine.status().unwrap().kind, StatusKind::Warning);
        assert_eq!(
            engine.letter_states(),
            vec![LetterState::Correct, LetterState::Incorrect, LetterState::Current]
        );
    }

    #[test]
    fn completing_word_orders_success_before_advance() {
        let mut engine = cat_engine();
        engine.start();
        let events = type_str(&mut engine, "cat");
        let success = events
            .iter()
            .position(|e| matches!(e, GameEvent::StatusChanged(Some(s)) if s.kind == StatusKind::Success))
            .unwrap();
        let scheduled = events
            .iter()
            .position(|e| matches!(e, GameEvent::AdvanceScheduled(_)))
            .unwrap();
        assert!(success < scheduled);
        // Word stays up until the advance runs.
        assert_eq!(engine.state().current_word, "cat");
        let pending = engine.pending_advance().unwrap();
        assert_eq!(pending.cause, AdvanceCause::Completed);
        assert_eq!(pending.delay_ms, 1500);

        let events = engine.complete_advance(pending.ticket);
        assert!(events.contains(&GameEvent::WordChanged { word: "cat" }));
        assert!(events.contains(&GameEvent::StatusChanged(None)));
        assert_eq!(engine.state().typed, "");
        assert!(engine.pending_advance().is_none());
    }

    #[test]
    fn resolved_word_scores_once() {
        let mut engine = cat_engine();
        engine.start();
        type_str(&mut engine, "cat");
        assert_eq!(engine.state().score, 10);
        assert!(engine.submit().is_empty());
        engine.handle_backspace();
        type_str(&mut engine, "t");
        assert_eq!(engine.state().score, 10);
        assert_eq!(engine.state().streak, 1);
        assert_eq!(engine.status().unwrap().kind, StatusKind::Success);
        assert_eq!(engine.pending_advance().unwrap().cause, AdvanceCause::Completed);
    }

    #[test]
    fn keys_after_success_are_still_judged() {
        let mut engine = cat_engine();
        engine.start();
        type_str(&mut engine, "cat");
        type_str(&mut engine, "s");
        assert_eq!(engine.status().unwrap().kind, StatusKind::Warning);
        engine.handle_backspace();
        assert!(engine.status().is_none());
        assert_eq!(engine.state().score, 10);
    }

    #[test]
    fn stop_while_idle_still_reports_status() {
        let mut engine = cat_engine();
        let events = engine.stop();
        assert!(!events.contains(&GameEvent::ActiveChanged(false)));
        assert!(events.contains(&GameEvent::StatusChanged(Some(Status::new(
            StatusKind::Neutral,
            MSG_STOPPED
        )))));
        assert!(!engine.is_active());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut engine = cat_engine();
        engine.start();
        type_str(&mut engine, "cat");
        let ticket = engine.pending_advance().unwrap().ticket;
        engine.set_level(Level::Beginner);
        assert!(engine.complete_advance(ticket).is_empty());
        assert!(engine.complete_advance(ticket + 100).is_empty());
    }

    #[test]
    fn submit_partial_is_not_failure() {
        let mut engine = cat_engine();
        engine.start();
        engine.state.streak = 3;
        type_str(&mut engine, "ca");
        let events = engine.submit();
        assert!(!events.iter().any(|e| matches!(e, GameEvent::WordFailed { .. })));
        assert_eq!(engine.state().streak, 3);
        assert!(engine.pending_advance().is_none());
        assert_eq!(engine.status().unwrap().message, MSG_KEEP_GOING);
    }

    #[test]
    fn submit_wrong_word_fails() {
        let mut engine = cat_engine();
        engine.start();
        engine.state.streak = 7;
        engine.state.score = 40;
        type_str(&mut engine, "cot");
        let events = engine.submit();
        assert!(events.contains(&GameEvent::WordFailed { word: "cat" }));
        assert_eq!(engine.state().streak, 0);
        assert_eq!(engine.state().score, 40);
        let status = engine.status().unwrap();
        assert_eq!(status.kind, StatusKind::Failure);
        assert_eq!(status.message, "Try again! The word was: cat");
        assert_eq!(engine.pending_advance().unwrap().delay_ms, 2000);
    }

    #[test]
    fn stop_cancels_advance_and_start_picks_new_word() {
        let mut engine = engine_with(Level::Beginner, ScriptedPicker::new(vec![0, 1]));
        // set_level consumed index 1 of the script after construction consumed 0
        assert_eq!(engine.state().current_word, "dog");
        engine.start();
        type_str(&mut engine, "dog");
        engine.stop();
        assert!(engine.pending_advance().is_none());
        assert_eq!(engine.status().unwrap().message, MSG_STOPPED);
        engine.start();
        assert_ne!(engine.state().typed, "dog");
        assert!(engine.status().is_none());
    }

    #[test]
    fn start_is_idempotent() {
        let mut engine = cat_engine();
        assert!(!engine.start().is_empty());
        type_str(&mut engine, "c");
        assert!(engine.start().is_empty());
        assert_eq!(engine.state().typed, "c");
    }

    #[test]
    fn toggle_flips_active() {
        let mut engine = cat_engine();
        engine.toggle();
        assert!(engine.is_active());
        engine.toggle();
        assert!(!engine.is_active());
    }

    #[test]
    fn backspace_clears_status() {
        let mut engine = cat_engine();
        engine.start();
        type_str(&mut engine, "cx");
        let events = engine.handle_backspace();
        assert_eq!(engine.state().typed, "c");
        assert!(events.contains(&GameEvent::StatusChanged(None)));
    }

    #[test]
    fn rejects_invalid_chars() {
        let mut engine = cat_engine();
        engine.start();
        for ch in ['C', '1', '\n', 'é', ';'] {
            assert!(engine.handle_char(ch).is_empty(), "{:?}", ch);
        }
        assert_eq!(engine.state().typed, "");
    }

    #[test]
    fn hint_only_at_firsttime() {
        let lib = WordLibrary::new(&CAT, &PAIR, &PAIR, &PAIR);
        let mut engine = GameEngine::with_parts(lib, EngineConfig::default(), ScriptedPicker::first());
        engine.start();
        type_str(&mut engine, "c");
        let hint = engine.key_hint().unwrap();
        assert_eq!(hint.key, 'a');
        assert_eq!(hint.fingers, &[crate::keyboard::Finger::LeftPinky]);
        engine.set_level(Level::Beginner);
        assert!(engine.key_hint().is_none());
        assert_eq!(engine.next_key(), Some('d'));
    }

    #[test]
    fn empty_pool_never_panics() {
        let lib = WordLibrary::new(&[], &[], &[], &[]);
        let mut engine = GameEngine::with_parts(lib, EngineConfig::default(), ScriptedPicker::first());
        assert_eq!(engine.state().current_word, "");
        engine.start();
        assert!(engine.handle_char('a').is_empty());
        assert!(engine.submit().is_empty());
        assert!(engine.handle_backspace().is_empty());
        assert!(engine.snapshot().letters.is_empty());
        assert!(engine.key_hint().is_none());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn snapshot_serializes() {
        let mut engine = cat_engine();
        engine.start();
        type_str(&mut engine, "c");
        let json = engine.snapshot().to_json().unwrap();
        assert!(json.contains(r#""word":"cat""#));
        assert!(json.contains(r#""level":"beginner""#));
        assert!(json.contains(r#""letters":["correct","current","pending"]"#));
    }
}
