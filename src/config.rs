//! Tunables for the engine. The page may override them with JSON when the
//! `serde_json` feature is on.

/// How long the success message stays before the next word appears.
pub const SUCCESS_DELAY_MS: u32 = 1500;
/// Failures linger a little longer so the correct word can be read.
pub const FAILURE_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub success_delay_ms: u32,
    pub failure_delay_ms: u32,
    /// A bonus is earned for every `streak_step` words in a row...
    pub streak_step: u32,
    /// ...worth this many points each.
    pub streak_bonus: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: SUCCESS_DELAY_MS,
            failure_delay_ms: FAILURE_DELAY_MS,
            streak_step: 5,
            streak_bonus: 5,
        }
    }
}

#[cfg(feature = "serde_json")]
impl EngineConfig {
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(all(test, feature = "serde_json"))]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json(r#"{ "failure_delay_ms": 3000 }"#).unwrap();
        assert_eq!(cfg.failure_delay_ms, 3000);
        assert_eq!(cfg.success_delay_ms, SUCCESS_DELAY_MS);
        assert_eq!(cfg.streak_step, 5);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EngineConfig::from_json("{ nope").is_err());
    }
}
