//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use crate::game::GameState;
use crate::item::{ItemHolder, normalize_item_name};
use crate::view::{View, ViewItem};

use anyhow::Result;
use log::{info, warn};

/// Removes an item from current room and adds it to the end of the inventory.
///
/// # Errors
/// - if the player's room is missing from the world
pub fn take_handler(game: &mut GameState, view: &mut View, thing: &str) -> Result<()> {
    let item = normalize_item_name(thing);
    let room = game.world.room_mut(&game.player.location)?;

    if !room.remove_item(&item) {
        warn!("player tried to take '{item}', not found in {}", room.name);
        view.push(ViewItem::ActionFailure(format!("There is no {item} here.")));
        return Ok(());
    }

    info!("player took the {item} from {}", room.name);
    game.player.add_item(&item);
    view.push(ViewItem::ActionSuccess(format!("You have taken the {item}.")));
    Ok(())
}

/// Lists the player's inventory.
pub fn inv_handler(game: &GameState, view: &mut View) {
    info!("player checked inventory ({} items)", game.player.inventory.len());
    view.push(ViewItem::Inventory(game.player.inventory.clone()));
}
