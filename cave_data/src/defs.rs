use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room names double as their stable identifiers.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub unlocks: Vec<UnlockDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: Id,
    /// Entering this room ends the session in victory.
    pub terminal_room: Id,
    #[serde(default)]
    pub victory: String,
    #[serde(default)]
    pub farewell: String,
}

/// Room definition: name, narration, exits and the items lying around.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomDef {
    pub name: Id,
    pub desc: String,
    #[serde(default)]
    pub art: String,
    /// Direction label -> destination room name.
    #[serde(default)]
    pub exits: BTreeMap<String, Id>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Using `item` while standing in `room` opens `direction` towards `target`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnlockDef {
    pub item: String,
    pub room: Id,
    pub direction: String,
    pub target: Id,
    pub message: String,
}
