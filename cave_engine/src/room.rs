//! Room definitions.
//!
//! A room is a node in the cave: it has narration, optional ASCII art, a set of
//! directional exits naming other rooms, and the items lying on its floor.

use crate::item::{ItemHolder, push_unique, remove_ordered};
use crate::view::{ExitLine, View, ViewItem};
use crate::world::CaveWorld;

use std::collections::BTreeMap;

/// Any visitable location in the cave.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub art: String,
    /// Direction label -> destination room name. Not necessarily symmetric.
    pub exits: BTreeMap<String, String>,
    pub items: Vec<String>,
    pub visited: bool,
}
impl ItemHolder for Room {
    fn add_item(&mut self, item: &str) {
        push_unique(&mut self.items, item);
    }

    fn remove_item(&mut self, item: &str) -> bool {
        remove_ordered(&mut self.items, item)
    }

    fn contains_item(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }
}
impl Room {
    /// Create an empty room with no exits or items.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Name of the room that `direction` leads to, if there is such an exit.
    pub fn exit_to(&self, direction: &str) -> Option<&str> {
        self.exits.get(direction).map(String::as_str)
    }

    /// Pushes description, item and exit information for the `Room`.
    pub fn show(&self, world: &CaveWorld, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            art: self.art.clone(),
            description: self.description.clone(),
        });

        if !self.items.is_empty() {
            view.push(ViewItem::RoomItems(self.items.clone()));
        }

        let exit_lines = self
            .exits
            .iter()
            .map(|(direction, destination)| ExitLine {
                direction: direction.clone(),
                destination: destination.clone(),
                dest_visited: world.rooms.get(destination).is_some_and(|room| room.visited),
            })
            .collect();
        view.push(ViewItem::RoomExits(exit_lines));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hallway() -> Room {
        let mut room = Room::new("Hallway", "Damp walls.");
        room.exits.insert("south".into(), "Entrance".into());
        room.exits.insert("east".into(), "Treasure Room".into());
        room
    }

    #[test]
    fn exit_to_finds_known_directions() {
        let room = hallway();
        assert_eq!(room.exit_to("east"), Some("Treasure Room"));
        assert_eq!(room.exit_to("up"), None);
    }

    #[test]
    fn item_holder_keeps_items_unique_and_ordered() {
        let mut room = hallway();
        room.add_item("Torch");
        room.add_item("Key");
        room.add_item("Torch");
        assert_eq!(room.items, vec!["Torch", "Key"]);
        assert!(room.contains_item("Key"));
        assert!(room.remove_item("Torch"));
        assert!(!room.contains_item("Torch"));
        assert!(!room.remove_item("Torch"));
    }

    #[test]
    fn show_lists_items_and_exits() {
        let mut world = CaveWorld::default();
        let mut entrance = Room::new("Entrance", "Cave mouth.");
        entrance.visited = true;
        world.rooms.insert("Entrance".into(), entrance);

        let mut room = hallway();
        room.add_item("Lamp");
        let mut view = View::new();
        room.show(&world, &mut view);

        assert!(view.items.iter().any(|entry| matches!(
            &entry.view_item,
            ViewItem::RoomDescription { name, .. } if name == "Hallway"
        )));
        assert!(
            view.items
                .iter()
                .any(|entry| entry.view_item == ViewItem::RoomItems(vec!["Lamp".into()]))
        );
        let exits = view
            .items
            .iter()
            .find_map(|entry| match &entry.view_item {
                ViewItem::RoomExits(lines) => Some(lines.clone()),
                _ => None,
            })
            .expect("exit list pushed");
        // BTreeMap ordering: east before south
        assert_eq!(exits[0].direction, "east");
        assert!(!exits[0].dest_visited);
        assert_eq!(exits[1].direction, "south");
        assert!(exits[1].dest_visited);
    }

    #[test]
    fn show_skips_item_list_for_empty_room() {
        let world = CaveWorld::default();
        let mut view = View::new();
        hallway().show(&world, &mut view);
        assert!(
            !view
                .items
                .iter()
                .any(|entry| matches!(entry.view_item, ViewItem::RoomItems(_)))
        );
    }
}
