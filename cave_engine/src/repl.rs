//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`GameState`].

mod input;
pub mod inventory;
pub mod item;
pub mod movement;
pub mod system;

pub use input::{InputEvent, InputManager};
pub use inventory::*;
pub use item::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::game::GameState;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

use anyhow::Result;
use log::{info, warn};
use std::io;

const PROMPT: &str = "Enter your command: ";

/// Run the main read–eval–print loop until the session ends.
///
/// Handles prompting, command parsing and dispatching to the various handler
/// modules. Returns when `game.running` drops to false, either through `quit`,
/// end of input, or reaching the terminal room.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(game: &mut GameState, view: &mut View) -> Result<()> {
    let mut input_manager = InputManager::new();
    run_repl_with(game, view, |prompt| input_manager.read_line(prompt))
}

/// Run the loop reading each line through `read_line`, which is handed the prompt.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl_with(
    game: &mut GameState,
    view: &mut View,
    mut read_line: impl FnMut(&str) -> io::Result<InputEvent>,
) -> Result<()> {
    let prompt = PROMPT.prompt_style().to_string();

    start_session(game, view)?;
    view.flush();

    while game.running {
        handle_input(game, view, read_line(&prompt))?;
        view.flush();
    }
    Ok(())
}

/// Act on one read from the input source.
///
/// End of input and unrecoverable read errors end the session as `quit` would.
/// A cancelled or unreadable line only reports back and leaves the game as it was.
///
/// # Errors
/// - Propagates failures from handlers
pub fn handle_input(game: &mut GameState, view: &mut View, event: io::Result<InputEvent>) -> Result<()> {
    match event {
        Ok(InputEvent::Line(line)) => process_input(game, view, &line),
        Ok(InputEvent::Eof) => {
            info!("end of input reached, treating as quit");
            process_input(game, view, "quit")
        },
        Ok(InputEvent::Interrupted) => {
            view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
            Ok(())
        },
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            warn!("discarding unreadable input line: {err}");
            view.push(ViewItem::Error(
                "That line could not be read. Please try again.".to_string(),
            ));
            Ok(())
        },
        Err(err) => {
            warn!("unable to read input ({err}), ending session");
            view.push(ViewItem::Error("Failed to read input.".to_string()));
            process_input(game, view, "quit")
        },
    }
}

/// Greet the player, list the commands and describe the starting room.
///
/// # Errors
/// - if the player's location names no room
pub fn start_session(game: &GameState, view: &mut View) -> Result<()> {
    view.push(ViewItem::Welcome {
        title: game.world.title.clone(),
        intro: game.world.intro.clone(),
    });
    help_handler(game, view);
    game.show_scene(view)
}

/// Play one turn: parse the line, apply it, then check for victory.
///
/// While the session is still active afterwards, the scene for the next prompt
/// is pushed as well.
///
/// # Errors
/// - Propagates failures from handlers
pub fn process_input(game: &mut GameState, view: &mut View, input: &str) -> Result<()> {
    game.turn_count += 1;
    info!("================> BEGIN TURN {} <================", game.turn_count);

    let command = parse_command(input);
    dispatch_command(game, view, &command)?;
    check_victory(game, view);

    if game.running {
        game.show_scene(view)?;
    }
    Ok(())
}

/// Route a parsed command to its handler.
///
/// # Errors
/// - Propagates failures from handlers
pub fn dispatch_command(game: &mut GameState, view: &mut View, command: &Command) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    match command {
        MoveTo(direction) => move_to_handler(game, view, direction)?,
        Take(thing) => take_handler(game, view, thing)?,
        UseItem(thing) => use_handler(game, view, thing)?,
        Inventory => inv_handler(game, view),
        Help => help_handler(game, view),
        Quit => quit_handler(game, view),
        Unknown(input) => {
            warn!("unrecognized command: '{input}'");
            view.push(ViewItem::ActionFailure(
                "Invalid command. Type 'help' to see available commands.".to_string(),
            ));
        },
    }
    Ok(())
}
