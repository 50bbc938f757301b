//! Session state for one run through the cave.
//!
//! [`GameState`] ties the world to the player and carries the `running` flag
//! that keeps the REPL alive. It is created once per session and dropped on
//! quit or victory.

use crate::loader::help::HelpData;
use crate::player::Player;
use crate::room::Room;
use crate::view::{View, ViewItem};
use crate::world::{CaveWorld, WorldError};

use anyhow::{Context, Result};
use log::info;

#[derive(Debug, Clone)]
pub struct GameState {
    pub world: CaveWorld,
    pub player: Player,
    pub help: HelpData,
    /// Active while true; the session ends once this drops to false.
    pub running: bool,
    pub turn_count: usize,
}
impl GameState {
    /// Start a session with the player standing in the world's start room.
    ///
    /// # Errors
    /// - if the start room does not exist
    pub fn new(mut world: CaveWorld, help: HelpData) -> Result<GameState> {
        let start = world.start_room.clone();
        world
            .room_mut(&start)
            .with_context(|| format!("placing player in start room '{start}'"))?
            .visited = true;
        info!("player placed in {start}");
        Ok(Self {
            world,
            player: Player::new(start),
            help,
            running: true,
            turn_count: 0,
        })
    }

    /// The room the player occupies.
    /// # Errors
    /// - if the player's location names no room
    pub fn current_room(&self) -> Result<&Room, WorldError> {
        self.world.room(&self.player.location)
    }

    /// Mutable access to the room the player occupies.
    /// # Errors
    /// - if the player's location names no room
    pub fn current_room_mut(&mut self) -> Result<&mut Room, WorldError> {
        self.world.room_mut(&self.player.location)
    }

    /// True if the player stands in the terminal room.
    pub fn at_terminal_room(&self) -> bool {
        self.player.location == self.world.terminal_room
    }

    /// Push the full scene for the current room: the room itself plus what the
    /// player is carrying.
    /// # Errors
    /// - if the player's location names no room
    pub fn show_scene(&self, view: &mut View) -> Result<()> {
        self.current_room()?.show(&self.world, view);
        if !self.player.inventory.is_empty() {
            view.push(ViewItem::CarriedItems(self.player.inventory.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_world() -> CaveWorld {
        let mut world = CaveWorld::new_empty();
        world.rooms.insert("Start".into(), Room::new("Start", "Here."));
        world.rooms.insert("End".into(), Room::new("End", "There."));
        world.start_room = "Start".into();
        world.terminal_room = "End".into();
        world
    }

    #[test]
    fn new_game_starts_in_start_room() {
        let game = GameState::new(small_world(), HelpData::default()).unwrap();
        assert!(game.running);
        assert_eq!(game.player.location, "Start");
        assert!(game.player.inventory.is_empty());
        assert!(game.current_room().unwrap().visited);
        assert!(!game.at_terminal_room());
    }

    #[test]
    fn new_game_fails_without_start_room() {
        let mut world = small_world();
        world.start_room = "Nowhere".into();
        assert!(GameState::new(world, HelpData::default()).is_err());
    }

    #[test]
    fn scene_includes_carried_items_only_when_holding_something() {
        let mut game = GameState::new(small_world(), HelpData::default()).unwrap();
        let mut view = View::new();
        game.show_scene(&mut view).unwrap();
        assert!(
            !view
                .items
                .iter()
                .any(|entry| matches!(entry.view_item, ViewItem::CarriedItems(_)))
        );

        game.player.inventory.push("Torch".into());
        view.reset();
        game.show_scene(&mut view).unwrap();
        assert!(
            view.items
                .iter()
                .any(|entry| entry.view_item == ViewItem::CarriedItems(vec!["Torch".into()]))
        );
    }
}
