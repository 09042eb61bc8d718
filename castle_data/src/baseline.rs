//! Baseline world tables.
//!
//! Everything a fresh session starts from: the exit table, where each item begins,
//! what the player carries, and the handful of fixed identities that the scripted
//! events and the exit gate refer to.

use crate::{Direction, Item, Location};

/// Maximum number of items the player can carry.
pub const INVENTORY_LIMIT: usize = 5;

/// Where every session begins.
pub const START_LOCATION: Location = Location::FrontEntrance;

/// Items carried at the start of a session, in slot order.
pub const STARTING_INVENTORY: &[Item] = &[Item::Key];

/// The room/direction pair leading out of the castle. Crossing it is the win condition.
pub const EXIT_GATE: (Location, Direction) = (Location::Vestibule, Direction::South);

/// Items that must be carried or standing at the exit gate, checked in this order.
pub const EXIT_REQUIREMENTS: [Item; 4] = [Item::Skye, Item::Auntie, Item::Cat, Item::Doll];

/// Scenery noun that opens the secret staircases when examined in the study.
pub const FIREPLACE: &str = "fireplace";

/// Edge created by unlocking the front door.
pub const FRONT_DOOR: ScriptedEdge = ScriptedEdge {
    from: Location::FrontEntrance,
    dir: Direction::North,
    to: Location::Vestibule,
};

/// Edges revealed by the panels beside the study fireplace.
pub const STUDY_PANELS: [ScriptedEdge; 2] = [
    ScriptedEdge {
        from: Location::Study,
        dir: Direction::Up,
        to: Location::Hallway11,
    },
    ScriptedEdge {
        from: Location::Study,
        dir: Direction::Down,
        to: Location::Stairs3,
    },
];

/// An exit that does not exist in the baseline and is only added by a scripted reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedEdge {
    pub from: Location,
    pub dir: Direction,
    pub to: Location,
}

/// Where an item sits when a session begins (items held at start are listed in
/// [`STARTING_INVENTORY`] instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPlacement {
    At(Location),
    Absent,
}

/// Starting placement of every item not carried at the start.
pub const INITIAL_PLACEMENTS: &[(Item, StartPlacement)] = &[
    (Item::PoolCue, StartPlacement::At(Location::BilliardsRoom)),
    (Item::Umbrella, StartPlacement::At(Location::Vestibule)),
    (Item::Newspaper, StartPlacement::At(Location::Library)),
    (Item::Sandwich, StartPlacement::At(Location::Study)),
    (Item::Cat, StartPlacement::At(Location::PipeOrganLoft)),
    (Item::Wine, StartPlacement::At(Location::WineCellar)),
    (Item::Knife, StartPlacement::At(Location::Kitchen)),
    (Item::Candle, StartPlacement::At(Location::GreatHall)),
    (Item::Matches, StartPlacement::At(Location::SmokingRoom)),
    (Item::Auntie, StartPlacement::At(Location::Stables)),
    (Item::Doll, StartPlacement::At(Location::ChildrensBedroom)),
    (Item::SteelBar, StartPlacement::At(Location::Conservatory)),
    (Item::Skye, StartPlacement::Absent),
    (Item::Book, StartPlacement::At(Location::SirHenrysBedroom)),
    (Item::Hairbrush, StartPlacement::At(Location::SittingRoom3)),
    (Item::Note, StartPlacement::At(Location::Bedroom2)),
    (Item::Perfume, StartPlacement::At(Location::LadysBedroom)),
    (Item::BusinessCard, StartPlacement::At(Location::ServantsBedroom)),
    (Item::Soap, StartPlacement::At(Location::Bath)),
    (Item::Menu, StartPlacement::At(Location::DiningRoom)),
    (Item::LightBulb, StartPlacement::At(Location::OakDrawingRoom)),
];

/// Room numbers reached from each room, columns N S E W U D, 0 = no exit.
#[rustfmt::skip]
const BASELINE_EXITS: [[u8; 6]; Location::COUNT] = [
    /*  N   S   E   W   U   D */
    [  0,  0,  0,  0,  0,  0 ], /* 1 FrontEntrance */
    [  3,  1,  0,  0,  0,  0 ], /* 2 Vestibule */
    [  6,  2,  0,  0,  0,  0 ], /* 3 Entry */
    [  9, 14,  5, 10,  0,  0 ], /* 4 PeacockAlley1 */
    [ 18, 17,  6,  4,  0,  0 ], /* 5 PeacockAlley2 */
    [  0,  3,  7,  5,  0,  0 ], /* 6 PeacockAlley3 */
    [ 19,  0,  8,  6, 20,  0 ], /* 7 PeacockAlley4 */
    [ 22, 23,  0,  7,  0,  0 ], /* 8 PeacockAlley5 */
    [  0,  4,  0,  0,  0,  0 ], /* 9 DiningRoom */
    [  0,  0,  4,  0,  0,  0 ], /* 10 Conservatory */
    [  0, 12, 14,  0,  0,  0 ], /* 11 BreakfastRoom */
    [ 11, 13, 15,  0,  0,  0 ], /* 12 ServingRoom */
    [ 12,  0,  0,  0,  0,  0 ], /* 13 Kitchen */
    [  4, 15, 16, 11,  0,  0 ], /* 14 Hallway1 */
    [ 14,  0,  0, 12,  0,  0 ], /* 15 Hallway2 */
    [  0,  0,  0, 14, 44,  0 ], /* 16 Elevator1 */
    [  5,  0,  0,  0,  0,  0 ], /* 17 Study */
    [ 24,  5, 19,  0,  0,  0 ], /* 18 Library */
    [  0,  7, 22, 18,  0,  0 ], /* 19 GreatHall */
    [  7,  0,  0,  0, 21,  0 ], /* 20 Stairs1 */
    [  0,  0,  0,  0, 51, 20 ], /* 21 Landing */
    [  0,  8,  0, 19,  0,  0 ], /* 22 OakDrawingRoom */
    [  8, 25,  0,  0,  0,  0 ], /* 23 SmokingRoom */
    [  0, 18,  0,  0,  0,  0 ], /* 24 CoveredPorch */
    [ 23,  0,  0,  0,  0,  0 ], /* 25 BilliardsRoom */
    [ 41, 31, 27,  0,  0,  0 ], /* 26 Hallway10 */
    [ 42, 48, 28, 26,  0,  0 ], /* 27 Hallway11 */
    [ 39, 36, 29, 27,  0,  0 ], /* 28 Hallway12 */
    [  0,  0, 30, 28,  0, 51 ], /* 29 Hallway13 */
    [ 33, 49,  0, 29,  0,  0 ], /* 30 Hallway14 */
    [ 26, 32, 38, 43,  0,  0 ], /* 31 Corridor1 */
    [ 31,  0, 46, 45,  0,  0 ], /* 32 Corridor2 */
    [ 47, 30, 34, 35,  0,  0 ], /* 33 NarrowHallway */
    [  0,  0,  0, 33,  0,  0 ], /* 34 RoundRoom */
    [  0,  0, 33,  0,  0,  0 ], /* 35 PipeOrganLoft */
    [ 28, 50,  0,  0,  0,  0 ], /* 36 Bedroom1 */
    [  0, 41,  0,  0,  0,  0 ], /* 37 SittingRoom1 */
    [  0,  0,  0, 31,  0,  0 ], /* 38 Bedroom3 */
    [  0, 28,  0, 42,  0,  0 ], /* 39 SirHenrysBedroom */
    [  0,  0, 47,  0,  0,  0 ], /* 40 SittingRoom3 */
    [ 37, 26,  0,  0,  0,  0 ], /* 41 LadysBedroom */
    [  0, 27, 39,  0,  0,  0 ], /* 42 SittingRoom2 */
    [  0,  0, 31,  0,  0,  0 ], /* 43 GuestBedroom */
    [  0,  0, 48,  0,  0, 16 ], /* 44 Elevator2 */
    [  0,  0, 32,  0,  0,  0 ], /* 45 ChildrensBedroom */
    [  0,  0,  0, 32,  0,  0 ], /* 46 ServantsBedroom */
    [  0, 33,  0, 40,  0,  0 ], /* 47 Bedroom4 */
    [ 27,  0,  0, 44,  0,  0 ], /* 48 LinenRoom */
    [ 30,  0,  0,  0,  0,  0 ], /* 49 Bedroom2 */
    [ 36,  0,  0,  0,  0,  0 ], /* 50 Bath */
    [  0,  0,  0,  0, 29, 21 ], /* 51 Stairs2 */
    [  0,  0,  0,  0, 17, 54 ], /* 52 Stairs3 */
    [ 54,  0,  0,  0,  0,  0 ], /* 53 WineCellar */
    [  0, 53, 55,  0, 52,  0 ], /* 54 Tunnel1 */
    [  0,  0, 56, 54,  0,  0 ], /* 55 Tunnel2 */
    [ 57,  0, 58, 55,  0,  0 ], /* 56 Tunnel3 */
    [  0, 56,  0,  0,  0,  0 ], /* 57 SteamPlant */
    [  0,  0,  0, 56, 59,  0 ], /* 58 Tunnel4 */
    [  0,  0,  0,  0,  0, 58 ], /* 59 Stables */
];

/// The baseline exit from `from` heading `dir`, before any scripted reveal.
pub fn baseline_exit(from: Location, dir: Direction) -> Option<Location> {
    Location::from_number(usize::from(BASELINE_EXITS[from.index()][dir.index()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn start_has_no_exits_until_unlocked() {
        for dir in Direction::ALL {
            assert_eq!(baseline_exit(START_LOCATION, dir), None);
        }
    }

    #[test]
    fn scripted_edges_are_absent_from_baseline() {
        assert_eq!(baseline_exit(FRONT_DOOR.from, FRONT_DOOR.dir), None);
        for edge in STUDY_PANELS {
            assert_eq!(baseline_exit(edge.from, edge.dir), None);
        }
    }

    #[test]
    fn exit_gate_is_a_baseline_edge() {
        let (room, dir) = EXIT_GATE;
        assert_eq!(baseline_exit(room, dir), Some(Location::FrontEntrance));
    }

    #[test]
    fn every_item_has_exactly_one_start() {
        let mut seen = HashSet::new();
        for (item, _) in INITIAL_PLACEMENTS {
            assert!(seen.insert(*item), "{item} placed twice");
        }
        for item in STARTING_INVENTORY {
            assert!(seen.insert(*item), "{item} both carried and placed");
        }
        assert_eq!(seen.len(), Item::COUNT);
        assert!(STARTING_INVENTORY.len() <= INVENTORY_LIMIT);
    }

    #[test]
    fn spot_check_exit_table() {
        assert_eq!(baseline_exit(Location::Vestibule, Direction::North), Some(Location::Entry));
        assert_eq!(baseline_exit(Location::Tunnel3, Direction::North), Some(Location::SteamPlant));
        assert_eq!(baseline_exit(Location::Stables, Direction::Down), Some(Location::Tunnel4));
        assert_eq!(baseline_exit(Location::Study, Direction::North), Some(Location::PeacockAlley2));
    }
}
