//! Site-wide constants shared by the section components.

pub const NAVY: &str = "#003366";

/// Words the hero typewriter cycles through.
pub fn hero_words() -> Vec<String> {
    vec!["AI Solutions".to_string(), "Hexylon Analytics".to_string()]
}

pub const TYPE_DELAY_MS: u32 = 100;
pub const HOLD_DELAY_MS: u32 = 2000;
pub const MIN_DELETE_DELAY_MS: u32 = 30;
