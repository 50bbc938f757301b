//! Player -- the explorer's position and belongings
use crate::item::{ItemHolder, push_unique, remove_ordered};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Name of the room the player stands in.
    pub location: String,
    /// Held items, in the order they were picked up.
    pub inventory: Vec<String>,
}
impl Player {
    /// Place a new player with empty hands in `room`.
    pub fn new(room: impl Into<String>) -> Self {
        Self {
            location: room.into(),
            inventory: Vec::new(),
        }
    }
}
impl ItemHolder for Player {
    fn add_item(&mut self, item: &str) {
        push_unique(&mut self.inventory, item);
    }

    fn remove_item(&mut self, item: &str) -> bool {
        remove_ordered(&mut self.inventory, item)
    }

    fn contains_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }
}
