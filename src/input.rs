//! Browser key names -> engine inputs. The engine only takes lowercase
//! letters and space, so normalization happens here, on the caller side.

use crate::engine::{GameEngine, GameEvent};
use crate::rng::WordPicker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Submit,
}

impl KeyInput {
    /// `key` is `KeyboardEvent.key`. Modifier and navigation keys (`"Shift"`,
    /// `"ArrowLeft"`, ...) and non-letter characters map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Backspace" => Some(KeyInput::Backspace),
            "Enter" => Some(KeyInput::Submit),
            " " => Some(KeyInput::Char(' ')),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(KeyInput::Char(c.to_ascii_lowercase()))
                    }
                    _ => None,
                }
            }
        }
    }

    pub fn apply<P: WordPicker>(self, engine: &mut GameEngine<P>) -> Vec<GameEvent> {
        match self {
            KeyInput::Char(c) => engine.handle_char(c),
            KeyInput::Backspace => engine.handle_backspace(),
            KeyInput::Submit => engine.submit(),
        }
    }
}
