//! Command module
//!
//! Describes possible commands used during gameplay. Parsing is pure: it turns
//! a line of input into a [`Command`] without touching game state.
use variantly::Variantly;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Help,
    Inventory,
    MoveTo(String),
    Quit,
    Take(String),
    /// Input that matched no command; holds the normalized line.
    Unknown(String),
    UseItem(String),
}

/// Parses an input string and returns a corresponding `Command`.
///
/// Matching is case-insensitive and ignores surrounding whitespace. `go`
/// takes the single word after it; `take` and `use` take everything after the
/// verb, so multi-word item names survive.
pub fn parse_command(input: &str) -> Command {
    let normalized = input.trim().to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();
    match words.as_slice() {
        ["go", direction, ..] => Command::MoveTo((*direction).to_string()),
        ["take", item @ ..] if !item.is_empty() => Command::Take(item.join(" ")),
        ["use", item @ ..] if !item.is_empty() => Command::UseItem(item.join(" ")),
        ["inventory"] => Command::Inventory,
        ["help"] => Command::Help,
        ["quit"] => Command::Quit,
        _ => Command::Unknown(normalized.clone()),
    }
}
