//! Player -- where the player is, how long they've been at it, and how it ended.
use castle_data::{Location, START_LOCATION};
use log::info;

use crate::Ending;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: Location,
    pub turns: usize,
    pub ending: Option<Ending>,
}
impl Default for Player {
    fn default() -> Player {
        Self {
            location: START_LOCATION,
            turns: 0,
            ending: None,
        }
    }
}
impl Player {
    /// Count one state-changing action.
    pub fn advance_turn(&mut self) {
        self.turns += 1;
        info!("================> TURN {} <================", self.turns);
    }

    /// Record how the session ended. The first ending sticks.
    pub fn finish(&mut self, ending: Ending) {
        if self.ending.is_none() {
            info!("session ended ({ending:?}) after {} turns", self.turns);
            self.ending = Some(ending);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.ending.is_some()
    }
}
