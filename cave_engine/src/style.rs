//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::Options;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn art_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_visited_style(&self) -> ColoredString;
    fn exit_unvisited_style(&self) -> ColoredString;
    fn inventory_style(&self) -> ColoredString;
    fn transition_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn separator_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn art_style(&self) -> ColoredString {
        self.cyan()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.bright_green().bold()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_visited_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn exit_unvisited_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn inventory_style(&self) -> ColoredString {
        self.magenta()
    }
    fn transition_style(&self) -> ColoredString {
        self.green()
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.cyan()
    }
    fn separator_style(&self) -> ColoredString {
        self.yellow()
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn victory_style(&self) -> ColoredString {
        self.bright_green().bold()
    }
}

impl GameStyle for String {
    fn art_style(&self) -> ColoredString {
        self.as_str().art_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_visited_style(&self) -> ColoredString {
        self.as_str().exit_visited_style()
    }
    fn exit_unvisited_style(&self) -> ColoredString {
        self.as_str().exit_unvisited_style()
    }
    fn inventory_style(&self) -> ColoredString {
        self.as_str().inventory_style()
    }
    fn transition_style(&self) -> ColoredString {
        self.as_str().transition_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn separator_style(&self) -> ColoredString {
        self.as_str().separator_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
}

/// Wrapping options for ordinary paragraphs.
pub fn normal_block() -> Options<'static> {
    Options::with_termwidth()
}

/// Wrapping options for list entries indented under a heading.
pub fn indented_block() -> Options<'static> {
    Options::with_termwidth().initial_indent("    ").subsequent_indent("      ")
}
