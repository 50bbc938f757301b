//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::game::GameState;
use crate::view::{View, ViewItem};

use anyhow::Result;
use log::{info, warn};

/// Move the player through the exit named `direction`, if the current room has one.
///
/// Unknown directions leave the player where they are.
///
/// # Errors
/// - if the player's room or the exit's destination is missing from the world
pub fn move_to_handler(game: &mut GameState, view: &mut View, direction: &str) -> Result<()> {
    let leaving = game.player.location.clone();
    let Some(destination) = game.current_room()?.exit_to(direction).map(str::to_string) else {
        warn!("no exit '{direction}' from {leaving}");
        view.push(ViewItem::ActionFailure("You can't go that way.".to_string()));
        return Ok(());
    };

    game.world.room_mut(&destination)?.visited = true;
    game.player.location.clone_from(&destination);
    info!("player moved {direction} from {leaving} to {destination}");
    view.push(ViewItem::TransitionMessage(format!(
        "You move {direction} to the {destination}."
    )));
    Ok(())
}
