//! Static keyboard layout and touch-typing finger assignments used for the
//! first-time hints. Pure data, no engine logic.

/// QWERTY letter rows as drawn on the on-screen keyboard.
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl;", "zxcvbnm,./"];

/// Keys the fingers rest on.
pub const HOME_ROW: &str = "asdfghjkl;";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Finger {
    LeftPinky,
    LeftRing,
    LeftMiddle,
    LeftIndex,
    LeftThumb,
    RightThumb,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
}

impl Finger {
    /// Left to right, as the hands are drawn.
    pub const ALL: [Finger; 10] = [
        Finger::LeftPinky,
        Finger::LeftRing,
        Finger::LeftMiddle,
        Finger::LeftIndex,
        Finger::LeftThumb,
        Finger::RightThumb,
        Finger::RightIndex,
        Finger::RightMiddle,
        Finger::RightRing,
        Finger::RightPinky,
    ];

    /// `data-finger` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Finger::LeftPinky => "left-pinky",
            Finger::LeftRing => "left-ring",
            Finger::LeftMiddle => "left-middle",
            Finger::LeftIndex => "left-index",
            Finger::LeftThumb => "left-thumb",
            Finger::RightThumb => "right-thumb",
            Finger::RightIndex => "right-index",
            Finger::RightMiddle => "right-middle",
            Finger::RightRing => "right-ring",
            Finger::RightPinky => "right-pinky",
        }
    }
}

/// Which finger(s) should press `key`. Space is pressed with either thumb, so
/// both are returned; every other mapped key uses exactly one finger.
pub fn fingers_for(key: char) -> &'static [Finger] {
    use Finger::*;
    match key.to_ascii_lowercase() {
        'q' | 'a' | 'z' => &[LeftPinky],
        'w' | 's' | 'x' => &[LeftRing],
        'e' | 'd' | 'c' => &[LeftMiddle],
        'r' | 't' | 'f' | 'g' | 'v' | 'b' => &[LeftIndex],
        'y' | 'u' | 'h' | 'j' | 'n' | 'm' => &[RightIndex],
        'i' | 'k' | ',' => &[RightMiddle],
        'o' | 'l' | '.' => &[RightRing],
        'p' | ';' | '/' => &[RightPinky],
        ' ' => &[LeftThumb, RightThumb],
        _ => &[],
    }
}

/// The key to press next and the finger(s) to press it with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyHint {
    pub key: char,
    pub fingers: &'static [Finger],
}

impl KeyHint {
    pub fn new(key: char) -> Self {
        Self {
            key,
            fingers: fingers_for(key),
        }
    }
}
