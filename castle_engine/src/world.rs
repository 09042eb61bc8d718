//! Data structures representing the game world.
//!
//! This module defines [`CastleWorld`], the single aggregate that owns all mutable
//! session state, and the hazard flags that drive the darkness and rescue events.

use castle_data::{Item, Location};
use log::info;

use crate::{Placements, Player, TextTable, WorldGraph};

/// World-state switches consulted by the scheduler and by item effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardFlags {
    pub candle_lit: bool,
    pub auntie_tied: bool,
}
impl HazardFlags {
    /// Flags as they stand when a session begins.
    pub fn initial() -> Self {
        Self {
            candle_lit: false,
            auntie_tied: true,
        }
    }
}

/// Complete state of the running game.
///
/// Created once with its text table; `reset` rebuilds everything else for a new session.
#[derive(Debug, Clone)]
pub struct CastleWorld {
    pub graph: WorldGraph,
    pub placements: Placements,
    pub player: Player,
    pub flags: HazardFlags,
    pub text: TextTable,
}
impl CastleWorld {
    /// Create a world ready for its first session.
    pub fn new(text: TextTable) -> CastleWorld {
        let world = Self {
            graph: WorldGraph::new(),
            placements: Placements::new(),
            player: Player::default(),
            flags: HazardFlags::initial(),
            text,
        };
        info!("new 'CastleWorld' created");
        world
    }

    /// Throw away all session state: map overrides, placements, turn count, flags.
    pub fn reset(&mut self) {
        self.graph.reset();
        self.placements.reset();
        self.player = Player::default();
        self.flags = HazardFlags::initial();
        info!("world reset for a new session");
    }

    /// The room the player is standing in.
    pub fn here(&self) -> Location {
        self.player.location
    }

    /// True if the item is carried or lying in the player's room.
    pub fn is_reachable(&self, item: Item) -> bool {
        self.placements.is_held(item) || self.placements.is_present_at(item, self.here())
    }
}
