#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const CAVE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod game;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod settings;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use game::GameState;
pub use item::ItemHolder;
pub use loader::{load_world, new_game};
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::CaveWorld;
