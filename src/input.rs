/// Keyboard handling: raw key events → game intents.
///
/// Input never mutates the session directly.  One-shot keys become an
/// `Intent` applied through `compute`; the duck key is a held state read by
/// the next tick.
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::compute;
use crate::entities::{GameState, GameStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Start,
    Jump,
    Restart,
    Acknowledge,
    Quit,
}

/// Map a key press to the intent it triggers in the current status.
pub fn map_key(code: KeyCode, modifiers: KeyModifiers, state: &GameState) -> Option<Intent> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Intent::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Intent::Quit)
        }
        _ => {}
    }

    if state.paused {
        return match code {
            KeyCode::Enter => Some(Intent::Acknowledge),
            _ => None,
        };
    }

    match (state.status, code) {
        (GameStatus::Menu, KeyCode::Char(' ') | KeyCode::Enter) => Some(Intent::Start),
        (GameStatus::Playing, KeyCode::Char(' ') | KeyCode::Up) => Some(Intent::Jump),
        (GameStatus::GameOver, KeyCode::Char(' ')) => Some(Intent::Restart),
        _ => None,
    }
}

/// Apply a non-quit intent to the session.
pub fn apply(state: &GameState, intent: Intent) -> GameState {
    match intent {
        Intent::Start => compute::start_game(state),
        Intent::Jump => compute::jump(state),
        Intent::Restart => compute::restart(state),
        Intent::Acknowledge => compute::acknowledge_milestone(state),
        Intent::Quit => state.clone(),
    }
}

// ── Secret sequence ──────────────────────────────────────────────────────────

/// Progress through a short secret key sequence.  Any out-of-sequence key
/// drops progress back to the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheatSequence {
    code: Vec<char>,
    index: usize,
}

impl CheatSequence {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.chars().flat_map(char::to_lowercase).collect(),
            index: 0,
        }
    }

    pub fn progress(&self) -> usize {
        self.index
    }

    /// Feed one key press; returns `true` when it completes the sequence.
    pub fn feed(&mut self, code: KeyCode) -> bool {
        let matches = match (code, self.code.get(self.index)) {
            (KeyCode::Char(c), Some(&want)) => c.to_lowercase().eq(std::iter::once(want)),
            _ => false,
        };

        if !matches {
            self.index = 0;
            return false;
        }

        self.index += 1;
        if self.index == self.code.len() {
            self.index = 0;
            return true;
        }
        false
    }
}

// ── Held keys ────────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// at 60 FPS the window outlasts the OS initial repeat delay (up to ~500 ms)
/// before auto-repeat starts refreshing it.
pub const HOLD_WINDOW: u64 = 32;

/// Maps each held key to the frame it was last seen (press or repeat).
#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    pub fn press(&mut self, code: KeyCode, frame: u64) {
        self.last_seen.insert(code, frame);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.last_seen.remove(&code);
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&code)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}
