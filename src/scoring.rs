use crate::config::EngineConfig;
use crate::level::Level;

/// Points for finishing a word. `streak` is the streak *before* this word
/// counts, so the bonus kicks in on the word after every fifth in a row.
pub fn points_for_word(level: Level, streak: u32, config: &EngineConfig) -> u32 {
    let bonus = match config.streak_step {
        0 => 0,
        step => (streak / step) * config.streak_bonus,
    };
    level.base_points() + bonus
}
