//! View module.
//! This contains the view to the cave / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::loader::help::HelpCommand;
use crate::settings::Settings;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}"; // ☑
const ICON_FAILURE: &str = "\u{274C}"; // ❌
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_ENGINE: &str = "⚙";
const ICON_CELEBRATE: &str = "🎉"; // U+1F389

const SEPARATOR_WIDTH: usize = 50;

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub text_delay: Duration,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view that prints without delay.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            text_delay: Duration::ZERO,
            items: Vec::new(),
            sequence: 0,
        }
    }

    /// Create a new empty view using the typewriter delay from `settings`.
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            text_delay: settings.text_delay,
            ..Self::new()
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        let has_section = |section: Section| self.items.iter().any(|entry| entry.section == section);
        let transition = has_section(Section::Transition);
        let direct = has_section(Section::DirectResult);
        let system = has_section(Section::System);
        let environment = has_section(Section::Environment);

        // First: movement narration, if any
        if transition {
            self.transitions();
        }
        // Second: immediate results of the player's command
        if direct {
            self.direct_results();
        }
        // Third: game-level messages (welcome, help, victory, farewell)
        if system {
            self.system();
        }
        // Last: the scene the next prompt is issued from
        if environment {
            self.environment();
        }

        // clear the buffer for the next turn
        self.items.clear();
    }

    /// Clears the View's buffer.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Print one line, one character at a time when a delay is configured.
    fn emit(&self, text: &str) {
        if self.text_delay.is_zero() {
            println!("{text}");
            return;
        }
        let mut stdout = io::stdout().lock();
        let mut in_escape = false;
        for ch in text.chars() {
            let _ = write!(stdout, "{ch}");
            // don't pause inside ANSI escape sequences
            match (in_escape, ch) {
                (false, '\x1B') => in_escape = true,
                (true, 'm') => in_escape = false,
                (false, _) => {
                    let _ = stdout.flush();
                    thread::sleep(self.text_delay);
                },
                (true, _) => {},
            }
        }
        let _ = writeln!(stdout);
    }

    fn separator(&self) {
        self.emit(&"-".repeat(SEPARATOR_WIDTH.min(self.width)).separator_style().to_string());
    }

    /// Collect the payloads of all entries matching `pick`, in push order.
    fn collect<'a, T>(&'a self, pick: impl Fn(&'a ViewItem) -> Option<T>) -> Vec<T> {
        let mut picked: Vec<(usize, T)> = self
            .items
            .iter()
            .filter_map(|entry| pick(&entry.view_item).map(|payload| (entry.sequence, payload)))
            .collect();
        picked.sort_by_key(|(sequence, _)| *sequence);
        picked.into_iter().map(|(_, payload)| payload).collect()
    }

    // SECTION AGGREGATORS START HERE --------------------

    fn transitions(&self) {
        for msg in self.collect(|item| match item {
            ViewItem::TransitionMessage(msg) => Some(msg),
            _ => None,
        }) {
            self.emit(&fill(msg, normal_block()).transition_style().to_string());
        }
    }

    fn direct_results(&self) {
        self.inventory();
        self.action_success();
        self.action_failure();
        self.errors();
    }

    fn system(&self) {
        for entry in &self.items {
            match &entry.view_item {
                ViewItem::Welcome { title, intro } => {
                    self.emit(&title.victory_style().to_string());
                    if !intro.is_empty() {
                        self.emit(&fill(intro, normal_block()).description_style().to_string());
                    }
                },
                ViewItem::Help { basic_text, commands } => self.show_help(basic_text, commands),
                ViewItem::EngineMessage(msg) => {
                    self.emit(&format!("{:<4}{}", ICON_ENGINE.dimmed(), msg.italic()));
                },
                ViewItem::Victory(msg) => {
                    self.emit(&format!("{} {}", ICON_CELEBRATE, fill(msg, normal_block()).victory_style()));
                },
                ViewItem::Farewell(msg) => self.emit(&msg.error_style().to_string()),
                _ => {},
            }
        }
    }

    fn environment(&self) {
        self.separator();
        self.room_description();
        self.room_item_list();
        self.separator();
        self.room_exit_list();
        self.carried_items();
        self.separator();
    }

    fn show_help(&self, basic_text: &str, commands: &[HelpCommand]) {
        self.separator();
        if !basic_text.is_empty() {
            self.emit(&fill(basic_text, normal_block()).italic().cyan().to_string());
        }
        self.emit(&"Available commands:".bold().yellow().to_string());
        for command in commands {
            let line = format!("- {} ({})", command.command.bold().green(), command.description.italic());
            self.emit(&fill(&line, indented_block()));
        }
        self.separator();
    }

    fn inventory(&self) {
        for names in self.collect(|item| match item {
            ViewItem::Inventory(names) => Some(names),
            _ => None,
        }) {
            self.emit(&inventory_line(names));
        }
    }

    fn action_success(&self) {
        for msg in self.collect(|item| match item {
            ViewItem::ActionSuccess(msg) => Some(msg),
            _ => None,
        }) {
            self.emit(&fill(
                format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
                normal_block(),
            ));
        }
    }

    fn action_failure(&self) {
        for msg in self.collect(|item| match item {
            ViewItem::ActionFailure(msg) => Some(msg),
            _ => None,
        }) {
            self.emit(&fill(
                format!("{} {}", ICON_FAILURE.bright_red(), msg.denied_style()).as_str(),
                normal_block(),
            ));
        }
    }

    fn errors(&self) {
        for msg in self.collect(|item| match item {
            ViewItem::Error(msg) => Some(msg),
            _ => None,
        }) {
            self.emit(&fill(
                format!("{:<4}{}", ICON_ERROR.error_style(), msg).as_str(),
                normal_block(),
            ));
        }
    }

    /// Used by `flush()` to show the room's art, title and base description
    fn room_description(&self) {
        if let Some((name, art, description)) = self.items.iter().find_map(|entry| match &entry.view_item {
            ViewItem::RoomDescription { name, art, description } => Some((name, art, description)),
            _ => None,
        }) {
            if !art.is_empty() {
                self.emit(&art.art_style().to_string());
            }
            self.emit(&format!("Location: {name}").room_titlebar_style().to_string());
            self.separator();
            self.emit(&fill(description, normal_block()).description_style().to_string());
        }
    }

    fn room_item_list(&self) {
        if let Some(names) = self.items.iter().find_map(|entry| match &entry.view_item {
            ViewItem::RoomItems(names) => Some(names),
            _ => None,
        }) {
            let listed = names.iter().map(|name| name.item_style().to_string()).collect::<Vec<_>>();
            self.emit(&format!("You see the following items: {}", listed.join(", ")));
        }
    }

    fn room_exit_list(&self) {
        if let Some(exit_lines) = self.items.iter().find_map(|entry| match &entry.view_item {
            ViewItem::RoomExits(lines) => Some(lines),
            _ => None,
        }) {
            self.emit(&exit_list_line(exit_lines));
        }
    }

    fn carried_items(&self) {
        if let Some(names) = self.items.iter().find_map(|entry| match &entry.view_item {
            ViewItem::CarriedItems(names) => Some(names),
            _ => None,
        }) {
            self.emit(&inventory_line(names));
        }
    }
}

/// Text of the `inventory` response.
pub fn inventory_line(names: &[String]) -> String {
    if names.is_empty() {
        "Your inventory is empty.".inventory_style().to_string()
    } else {
        format!("Your inventory: {}", names.join(", "))
            .inventory_style()
            .to_string()
    }
}

/// The "Available directions" line. Exits into rooms already seen also name the room.
pub fn exit_list_line(exits: &[ExitLine]) -> String {
    let listed = exits
        .iter()
        .map(|exit| {
            if exit.dest_visited {
                format!(
                    "{} (to {})",
                    exit.direction.exit_visited_style(),
                    exit.destination.room_style()
                )
            } else {
                exit.direction.exit_unvisited_style().to_string()
            }
        })
        .collect::<Vec<_>>();
    format!("{} {}", "Available directions:".subheading_style(), listed.join(", "))
}

/// Subsections of the output, listed in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    /// Narration of the player moving between rooms.
    Transition,
    /// Direct results of the player's command.
    DirectResult,
    /// Meta/game-system feedback (welcome, help, victory, farewell).
    System,
    /// Room description, items, exits and carried items.
    Environment,
}

/// Wrapper for a `ViewItem` recording where and when it was pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub view_item: ViewItem,
    pub sequence: usize,
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    CarriedItems(Vec<String>),
    EngineMessage(String),
    Error(String),
    Farewell(String),
    Help {
        basic_text: String,
        commands: Vec<HelpCommand>,
    },
    Inventory(Vec<String>),
    RoomDescription {
        name: String,
        art: String,
        description: String,
    },
    RoomExits(Vec<ExitLine>),
    RoomItems(Vec<String>),
    TransitionMessage(String),
    Victory(String),
    Welcome {
        title: String,
        intro: String,
    },
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. }
            | ViewItem::RoomItems(_)
            | ViewItem::RoomExits(_)
            | ViewItem::CarriedItems(_) => Section::Environment,
            ViewItem::ActionSuccess(_) | ViewItem::ActionFailure(_) | ViewItem::Error(_) | ViewItem::Inventory(_) => {
                Section::DirectResult
            },
            ViewItem::Welcome { .. }
            | ViewItem::Help { .. }
            | ViewItem::EngineMessage(_)
            | ViewItem::Victory(_)
            | ViewItem::Farewell(_) => Section::System,
            ViewItem::TransitionMessage(_) => Section::Transition,
        }
    }
}

/// Row data for the exit listing portion of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitLine {
    pub direction: String,
    pub destination: String,
    pub dest_visited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_sections_and_sequence() {
        let mut view = View::new();
        view.push(ViewItem::RoomItems(vec!["Torch".into()]));
        view.push(ViewItem::ActionFailure("nope".into()));
        view.push(ViewItem::Victory("yay".into()));

        let sections: Vec<_> = view.items.iter().map(|entry| entry.section).collect();
        assert_eq!(sections, vec![Section::Environment, Section::DirectResult, Section::System]);
        let sequence: Vec<_> = view.items.iter().map(|entry| entry.sequence).collect();
        assert_eq!(sequence, vec![0, 1, 2]);
    }

    #[test]
    fn sections_order_results_before_scene() {
        assert!(Section::Transition < Section::DirectResult);
        assert!(Section::DirectResult < Section::System);
        assert!(Section::System < Section::Environment);
    }

    #[test]
    fn flush_clears_buffer() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("done".into()));
        view.push(ViewItem::Inventory(Vec::new()));
        view.flush();
        assert!(view.items.is_empty());
        // sequence keeps counting across frames
        view.push(ViewItem::EngineMessage("again".into()));
        assert_eq!(view.items[0].sequence, 2);
    }

    #[test]
    fn collect_returns_payloads_in_push_order() {
        let mut view = View::new();
        view.push(ViewItem::ActionFailure("first".into()));
        view.push(ViewItem::ActionSuccess("ignored".into()));
        view.push(ViewItem::ActionFailure("second".into()));
        let failures = view.collect(|item| match item {
            ViewItem::ActionFailure(msg) => Some(msg),
            _ => None,
        });
        assert_eq!(failures, vec!["first", "second"]);
    }

    #[test]
    fn with_settings_copies_delay() {
        let settings = Settings {
            text_delay: Duration::from_millis(5),
        };
        assert_eq!(View::with_settings(&settings).text_delay, Duration::from_millis(5));
    }

    #[test]
    fn collect_follows_sequence() {
        let mut view = View::new();
        view.push(ViewItem::ActionFailure("pushed first".into()));
        view.push(ViewItem::ActionFailure("pushed second".into()));
        view.items.swap(0, 1);
        let failures = view.collect(|item| match item {
            ViewItem::ActionFailure(msg) => Some(msg.as_str()),
            _ => None,
        });
        assert_eq!(failures, vec!["pushed first", "pushed second"]);
    }

    #[test]
    fn inventory_text_for_empty_and_held_items() {
        assert!(inventory_line(&[]).contains("Your inventory is empty."));
        let held = vec!["Key".to_string(), "Artifact".to_string()];
        assert!(inventory_line(&held).contains("Your inventory: Key, Artifact"));
    }

    #[test]
    fn exit_line_names_only_visited_destinations() {
        let exits = vec![
            ExitLine {
                direction: "north".into(),
                destination: "Hallway".into(),
                dest_visited: true,
            },
            ExitLine {
                direction: "west".into(),
                destination: "Dark Room".into(),
                dest_visited: false,
            },
        ];
        let line = exit_list_line(&exits);
        assert!(line.contains("Available directions:"));
        assert!(line.contains("north"));
        assert!(line.contains("Hallway"));
        assert!(line.contains("west"));
        assert!(!line.contains("Dark Room"));
        assert_eq!(line.matches("(to ").count(), 1);
    }
}
