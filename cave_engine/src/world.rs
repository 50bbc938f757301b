//! Data structures representing the cave.
//!
//! [`CaveWorld`] owns every room and the connection topology between them, plus
//! the table of item-unlocks-exit rules. It is built once at startup and only
//! mutated when an unlock rule opens a new exit.

use crate::room::Room;

use log::info;
use std::collections::HashMap;
use thiserror::Error;

/// Failures looking up or wiring rooms. These indicate a broken world, not a
/// player mistake.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("no room named '{0}' in the cave")]
    UnknownRoom(String),
}

/// Using `item` while standing in `room` opens `direction` towards `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockRule {
    pub item: String,
    pub room: String,
    pub direction: String,
    pub target: String,
    pub message: String,
}

/// Complete static layout of the adventure.
#[derive(Debug, Clone, Default)]
pub struct CaveWorld {
    pub title: String,
    pub intro: String,
    pub victory: String,
    pub farewell: String,
    pub rooms: HashMap<String, Room>,
    pub unlocks: Vec<UnlockRule>,
    pub start_room: String,
    /// Entering this room wins the game.
    pub terminal_room: String,
}
impl CaveWorld {
    /// Create a new world with no rooms.
    pub fn new_empty() -> CaveWorld {
        let world = Self::default();
        info!("new, empty 'CaveWorld' created");
        world
    }

    /// Look up a room by name.
    /// # Errors
    /// - if no room has that name
    pub fn room(&self, name: &str) -> Result<&Room, WorldError> {
        self.rooms
            .get(name)
            .ok_or_else(|| WorldError::UnknownRoom(name.to_string()))
    }

    /// Look up a room by name for mutation.
    /// # Errors
    /// - if no room has that name
    pub fn room_mut(&mut self, name: &str) -> Result<&mut Room, WorldError> {
        self.rooms
            .get_mut(name)
            .ok_or_else(|| WorldError::UnknownRoom(name.to_string()))
    }

    /// Add (or overwrite) the exit `direction` from `room_name` to `target`.
    ///
    /// Returns `true` if the connection map changed. Both rooms must exist, so an
    /// exit never names a missing room.
    /// # Errors
    /// - if either room is unknown
    pub fn add_connection(&mut self, room_name: &str, direction: &str, target: &str) -> Result<bool, WorldError> {
        if !self.rooms.contains_key(target) {
            return Err(WorldError::UnknownRoom(target.to_string()));
        }
        let room = self.room_mut(room_name)?;
        let previous = room.exits.insert(direction.to_string(), target.to_string());
        let changed = previous.as_deref() != Some(target);
        if changed {
            info!("exit '{direction}' from {room_name} now leads to {target}");
        }
        Ok(changed)
    }

    /// Find the rule that applies when `item` is used in `room`.
    pub fn unlock_rule(&self, item: &str, room: &str) -> Option<&UnlockRule> {
        self.unlocks.iter().find(|rule| rule.item == item && rule.room == room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_world() -> CaveWorld {
        let mut world = CaveWorld::new_empty();
        world.rooms.insert("Vault".into(), Room::new("Vault", "Shiny."));
        world.rooms.insert("Exit".into(), Room::new("Exit", "Sunlight."));
        world.unlocks.push(UnlockRule {
            item: "Key".into(),
            room: "Vault".into(),
            direction: "south".into(),
            target: "Exit".into(),
            message: "Click.".into(),
        });
        world
    }

    #[test]
    fn room_lookup_works() {
        let world = two_room_world();
        assert_eq!(world.room("Vault").map(|r| r.name.as_str()), Ok("Vault"));
    }

    #[test]
    fn room_lookup_fails_for_unknown_name() {
        let mut world = two_room_world();
        assert_eq!(world.room("Attic").unwrap_err(), WorldError::UnknownRoom("Attic".into()));
        assert!(world.room_mut("Attic").is_err());
    }

    #[test]
    fn add_connection_is_idempotent() {
        let mut world = two_room_world();
        assert_eq!(world.add_connection("Vault", "south", "Exit"), Ok(true));
        assert_eq!(world.add_connection("Vault", "south", "Exit"), Ok(false));
        let vault = world.room("Vault").unwrap();
        assert_eq!(vault.exits.len(), 1);
        assert_eq!(vault.exit_to("south"), Some("Exit"));
    }

    #[test]
    fn add_connection_rejects_unknown_rooms() {
        let mut world = two_room_world();
        assert_eq!(
            world.add_connection("Vault", "down", "Basement"),
            Err(WorldError::UnknownRoom("Basement".into()))
        );
        assert_eq!(
            world.add_connection("Attic", "down", "Vault"),
            Err(WorldError::UnknownRoom("Attic".into()))
        );
        assert!(world.room("Vault").unwrap().exits.is_empty());
    }

    #[test]
    fn unlock_rule_matches_item_and_room() {
        let world = two_room_world();
        assert!(world.unlock_rule("Key", "Vault").is_some());
        assert!(world.unlock_rule("Key", "Exit").is_none());
        assert!(world.unlock_rule("Torch", "Vault").is_none());
    }

    #[test]
    fn world_error_message_names_room() {
        assert_eq!(
            WorldError::UnknownRoom("Attic".into()).to_string(),
            "no room named 'Attic' in the cave"
        );
    }
}
