//! Runtime settings taken from the environment.
//!
//! The game has no flags or config files; the only knob is the typewriter
//! delay used when printing narration.

use std::env;
use std::time::Duration;

use log::warn;

/// Environment variable holding the per-character print delay in milliseconds.
pub const TEXT_DELAY_ENV: &str = "MYSTIC_CAVE_TEXT_DELAY_MS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Pause after each printed character; zero prints lines at once.
    pub text_delay: Duration,
}
impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for missing or
    /// unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text_delay = match lookup(TEXT_DELAY_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(err) => {
                    warn!("ignoring {TEXT_DELAY_ENV}='{raw}': {err}");
                    Duration::ZERO
                },
            },
            None => Duration::ZERO,
        };
        Self { text_delay }
    }
}
