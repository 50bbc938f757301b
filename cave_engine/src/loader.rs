//! Loader utilities for building a `CaveWorld` from serialized data.
//!
//! The cave layout is authored in TOML (`data/cave.toml`) and compiled into the
//! binary, so nothing is read from disk at runtime.

pub mod help;

use crate::game::GameState;
use crate::loader::help::load_help_data;
use crate::room::Room;
use crate::world::{CaveWorld, UnlockRule};

use anyhow::{Context, Result, bail};
use cave_data::WorldDef;
use log::info;

const WORLD_TOML: &str = include_str!("../data/cave.toml");

/// Build the built-in Mystic Cave world.
///
/// # Errors
/// Errors bubble up from deserialization or validation of the world data.
pub fn load_world() -> Result<CaveWorld> {
    load_world_from_str(WORLD_TOML)
}

/// Build a world from TOML source text.
///
/// # Errors
/// - on TOML parsing failure or broken cross-references
pub fn load_world_from_str(toml_src: &str) -> Result<CaveWorld> {
    let worlddef: WorldDef = toml::from_str(toml_src).context("while parsing world definition")?;
    validate_worlddef(&worlddef)?;
    let world = build_world_from_def(&worlddef);
    info!("{} rooms added to CaveWorld", world.rooms.len());
    info!("{} unlock rules added to CaveWorld", world.unlocks.len());
    Ok(world)
}

/// Build the world and help data and start a fresh session.
///
/// # Errors
/// - if the world or help data fails to load
pub fn new_game() -> Result<GameState> {
    let world = load_world().context("while loading CaveWorld")?;
    let help = load_help_data().context("while loading help data")?;
    GameState::new(world, help)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = cave_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("world definition validation failed:\n{details}");
}

/// Convert a validated `WorldDef` into runtime structures.
fn build_world_from_def(def: &WorldDef) -> CaveWorld {
    let rooms = def
        .rooms
        .iter()
        .map(|room_def| {
            let room = Room {
                name: room_def.name.clone(),
                description: room_def.desc.clone(),
                art: room_def.art.trim_end().to_string(),
                exits: room_def.exits.clone(),
                items: room_def.items.clone(),
                visited: false,
            };
            (room.name.clone(), room)
        })
        .collect();

    let unlocks = def
        .unlocks
        .iter()
        .map(|unlock| UnlockRule {
            item: unlock.item.clone(),
            room: unlock.room.clone(),
            direction: unlock.direction.clone(),
            target: unlock.target.clone(),
            message: unlock.message.clone(),
        })
        .collect();

    CaveWorld {
        title: def.game.title.clone(),
        intro: def.game.intro.clone(),
        victory: def.game.victory.clone(),
        farewell: def.game.farewell.clone(),
        rooms,
        unlocks,
        start_room: def.game.start_room.clone(),
        terminal_room: def.game.terminal_room.clone(),
    }
}
