//! Room connectivity.
//!
//! The castle's map is the immutable baseline table from `castle_data` plus a small
//! override layer for exits added (or removed) by scripted reveals during play.
//! Resetting a session clears the overrides, which restores the baseline exactly.

use std::collections::HashMap;

use castle_data::{Direction, Location, ScriptedEdge, baseline_exit};
use log::info;

/// Directed, per-direction connections between rooms.
#[derive(Debug, Clone, Default)]
pub struct WorldGraph {
    overrides: HashMap<(Location, Direction), Option<Location>>,
}
impl WorldGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where heading `dir` from `from` leads, if anywhere.
    pub fn exit(&self, from: Location, dir: Direction) -> Option<Location> {
        match self.overrides.get(&(from, dir)) {
            Some(target) => *target,
            None => baseline_exit(from, dir),
        }
    }

    /// Replace (or remove, with `None`) the exit from `from` heading `dir`.
    pub fn set_exit(&mut self, from: Location, dir: Direction, target: Option<Location>) {
        info!("exit {from} {dir} now leads to {target:?}");
        self.overrides.insert((from, dir), target);
    }

    /// Add a scripted exit. Returns `true` if the exit was not already there.
    pub fn reveal(&mut self, edge: ScriptedEdge) -> bool {
        let already = self.exit(edge.from, edge.dir) == Some(edge.to);
        if !already {
            self.set_exit(edge.from, edge.dir, Some(edge.to));
        }
        !already
    }

    /// Directions with a usable exit from `from`, in N S E W U D order.
    pub fn available_directions(&self, from: Location) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.exit(from, *dir).is_some())
            .collect()
    }

    /// Drop every runtime change and return to the baseline map.
    pub fn reset(&mut self) {
        self.overrides.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castle_data::{FRONT_DOOR, STUDY_PANELS};

    #[test]
    fn reads_through_to_baseline() {
        let graph = WorldGraph::new();
        assert_eq!(graph.exit(Location::Vestibule, Direction::North), Some(Location::Entry));
        assert_eq!(graph.exit(Location::Vestibule, Direction::Up), None);
        assert_eq!(
            graph.available_directions(Location::Vestibule),
            vec![Direction::North, Direction::South]
        );
    }

    #[test]
    fn reveal_adds_once() {
        let mut graph = WorldGraph::new();
        assert!(graph.reveal(FRONT_DOOR));
        assert!(!graph.reveal(FRONT_DOOR));
        assert_eq!(graph.exit(Location::FrontEntrance, Direction::North), Some(Location::Vestibule));
        assert_eq!(graph.available_directions(Location::FrontEntrance), vec![Direction::North]);
    }

    #[test]
    fn overrides_can_remove_baseline_exits() {
        let mut graph = WorldGraph::new();
        graph.set_exit(Location::Kitchen, Direction::North, None);
        assert_eq!(graph.exit(Location::Kitchen, Direction::North), None);
        assert!(graph.available_directions(Location::Kitchen).is_empty());
    }

    #[test]
    fn reset_restores_baseline() {
        let mut graph = WorldGraph::new();
        for edge in STUDY_PANELS {
            graph.reveal(edge);
        }
        assert_eq!(graph.available_directions(Location::Study).len(), 3);
        graph.reset();
        assert_eq!(graph.available_directions(Location::Study), vec![Direction::North]);
    }
}
