#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const CASTLE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod ending;
pub mod entity_search;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod scheduler;
pub mod style;
pub mod text;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use castle_data::{Direction, Item, Location, MessageKey};
pub use ending::Ending;
pub use item::{Placement, Placements};
pub use loader::load_text_table;
pub use player::Player;
pub use repl::{process_line, run_session};
pub use room::WorldGraph;
pub use text::TextTable;
pub use view::{View, ViewItem};
pub use world::{CastleWorld, HazardFlags};
