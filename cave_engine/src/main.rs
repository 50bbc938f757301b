#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Mystic Cave **
//! A short text adventure: find the key, unlock the way out.

use cave_engine::settings::Settings;
use cave_engine::{View, new_game, run_repl};

use anyhow::{Context, Result};

use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading the Mystic Cave...");
    let mut game = new_game().context("while loading the Mystic Cave")?;
    info!("world loaded successfully ({} rooms).", game.world.rooms.len());

    let settings = Settings::from_env();
    let mut view = View::with_settings(&settings);
    info!("Starting the game!");

    run_repl(&mut game, &mut view)?;
    info!("session ended after {} turns", game.turn_count);
    Ok(())
}
