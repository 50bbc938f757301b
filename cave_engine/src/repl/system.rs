//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities,
//! plus the end-of-turn victory check.

use crate::game::GameState;
use crate::view::{View, ViewItem};

use log::info;

/// End the session at the player's request. Rooms and inventory are left as they are.
pub fn quit_handler(game: &mut GameState, view: &mut View) {
    info!(
        "player quit in {} after {} turns",
        game.player.location, game.turn_count
    );
    info!("ending inventory: {:?}", game.player.inventory);
    view.push(ViewItem::Farewell(game.world.farewell.clone()));
    game.running = false;
}

/// Show available commands.
pub fn help_handler(game: &GameState, view: &mut View) {
    view.push(ViewItem::Help {
        basic_text: game.help.basic_text.clone(),
        commands: game.help.commands.clone(),
    });
}

/// End the session in victory if the player has reached the terminal room.
///
/// Returns `true` if the game was won on this check.
pub fn check_victory(game: &mut GameState, view: &mut View) -> bool {
    if !game.running || !game.at_terminal_room() {
        return false;
    }
    info!(
        "player reached {} after {} turns",
        game.world.terminal_room, game.turn_count
    );
    view.push(ViewItem::Victory(game.world.victory.clone()));
    game.running = false;
    true
}
