//! `repl::item` module
//!
//! Contains the repl loop handler for using an item from the inventory

use crate::game::GameState;
use crate::item::{ItemHolder, normalize_item_name};
use crate::view::{View, ViewItem};

use anyhow::Result;
use log::{info, warn};

/// Use a held item in the current room.
///
/// Only combinations listed in the world's unlock table do anything: they open
/// a new exit and consume the item. Everything else is refused without
/// changing state.
///
/// # Errors
/// - if an unlock rule names a room missing from the world
pub fn use_handler(game: &mut GameState, view: &mut View, thing: &str) -> Result<()> {
    let item = normalize_item_name(thing);
    if !game.player.contains_item(&item) {
        warn!("player tried to use '{item}' without holding it");
        view.push(ViewItem::ActionFailure(format!(
            "You don't have a {item} in your inventory."
        )));
        return Ok(());
    }

    let Some(rule) = game.world.unlock_rule(&item, &game.player.location).cloned() else {
        info!("no effect using {item} in {}", game.player.location);
        view.push(ViewItem::ActionFailure(format!("You can't use the {item} here.")));
        return Ok(());
    };

    game.world.add_connection(&rule.room, &rule.direction, &rule.target)?;
    game.player.remove_item(&item);
    info!(
        "{item} used in {}: exit '{}' to {} opened",
        rule.room, rule.direction, rule.target
    );
    view.push(ViewItem::ActionSuccess(rule.message));
    Ok(())
}
