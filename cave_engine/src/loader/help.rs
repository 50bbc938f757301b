//! module `loader::help`

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

const HELP_BASIC_TEXT: &str = include_str!("../../data/help_basic.txt");
const HELP_COMMANDS_TOML: &str = include_str!("../../data/help_commands.toml");

/// Represents a single command in the help system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML document containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Complete help data including basic text and commands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HelpData {
    pub basic_text: String,
    pub commands: Vec<HelpCommand>,
}

/// Parses help commands from TOML source
/// # Errors
/// - on TOML parsing error
pub fn parse_help_commands(toml_src: &str) -> Result<Vec<HelpCommand>> {
    let wrapper: HelpCommandFile = toml::from_str(toml_src).context("parsing help commands")?;
    info!("{} help commands loaded", wrapper.commands.len());
    Ok(wrapper.commands)
}

/// Loads the built-in help text and command list
/// # Errors
/// - on TOML parsing error
pub fn load_help_data() -> Result<HelpData> {
    let commands = parse_help_commands(HELP_COMMANDS_TOML).context("while loading help commands")?;
    Ok(HelpData {
        basic_text: HELP_BASIC_TEXT.trim().to_string(),
        commands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_system_integration() {
        let help_data = load_help_data().expect("Should successfully load help data");

        assert!(!help_data.basic_text.is_empty(), "Basic help text should not be empty");
        assert!(
            help_data.basic_text.contains("commands listed below"),
            "Should contain expected content"
        );

        let command_names: Vec<&str> = help_data.commands.iter().map(|cmd| cmd.command.as_str()).collect();
        assert_eq!(
            command_names,
            vec!["go [direction]", "take [item]", "use [item]", "inventory", "help", "quit"]
        );

        for command in &help_data.commands {
            assert!(
                !command.description.is_empty(),
                "Command '{}' should have a non-empty description",
                command.command
            );
        }
    }

    #[test]
    fn malformed_help_is_an_error() {
        assert!(parse_help_commands("commands = 3").is_err());
    }
}
