//! Ending module
//!
//! How a session can finish, and the exit-gate rule that decides whether the
//! player is allowed to walk out of the castle.

use castle_data::{Direction, EXIT_GATE, EXIT_REQUIREMENTS, Item, Location, MessageKey};

use crate::CastleWorld;

/// The terminal outcome of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Lost,
    Quit,
}

/// True if heading `dir` from `from` would cross the way out of the castle.
pub fn is_exit_gate(from: Location, dir: Direction) -> bool {
    (from, dir) == EXIT_GATE
}

/// The first required companion not with the player at the gate, if any.
///
/// A requirement counts as met when the item is carried or standing in the gate room.
pub fn first_missing_requirement(world: &CastleWorld) -> Option<Item> {
    let (gate_room, _) = EXIT_GATE;
    EXIT_REQUIREMENTS
        .into_iter()
        .find(|item| !(world.placements.is_held(*item) || world.placements.is_present_at(*item, gate_room)))
}

/// Narration explaining why the gate refuses, for a missing requirement.
pub fn missing_message(item: Item) -> MessageKey {
    match item {
        Item::Skye => MessageKey::NeedSkye,
        Item::Auntie => MessageKey::NeedAuntie,
        Item::Cat => MessageKey::NeedCat,
        _ => MessageKey::NeedDoll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::embedded_text_table;

    fn world_at_gate() -> CastleWorld {
        let mut world = CastleWorld::new(embedded_text_table().unwrap());
        world.player.location = Location::Vestibule;
        world
    }

    #[test]
    fn only_vestibule_south_is_the_gate() {
        assert!(is_exit_gate(Location::Vestibule, Direction::South));
        assert!(!is_exit_gate(Location::Vestibule, Direction::North));
        assert!(!is_exit_gate(Location::Entry, Direction::South));
    }

    #[test]
    fn requirements_are_checked_in_order() {
        let mut world = world_at_gate();
        assert_eq!(first_missing_requirement(&world), Some(Item::Skye));
        world.placements.move_to_location(Item::Skye, Location::Vestibule);
        assert_eq!(first_missing_requirement(&world), Some(Item::Auntie));
        world.placements.move_to_inventory(Item::Auntie).unwrap();
        assert_eq!(first_missing_requirement(&world), Some(Item::Cat));
        world.placements.move_to_inventory(Item::Cat).unwrap();
        assert_eq!(first_missing_requirement(&world), Some(Item::Doll));
        world.placements.move_to_location(Item::Doll, Location::Vestibule);
        assert_eq!(first_missing_requirement(&world), None);
    }

    #[test]
    fn companions_elsewhere_do_not_count() {
        let mut world = world_at_gate();
        for item in EXIT_REQUIREMENTS {
            world.placements.move_to_location(item, Location::Entry);
        }
        assert_eq!(first_missing_requirement(&world), Some(Item::Skye));
    }

    #[test]
    fn each_requirement_has_its_own_message() {
        let keys: Vec<_> = EXIT_REQUIREMENTS.into_iter().map(missing_message).collect();
        assert_eq!(
            keys,
            vec![
                MessageKey::NeedSkye,
                MessageKey::NeedAuntie,
                MessageKey::NeedCat,
                MessageKey::NeedDoll
            ]
        );
    }
}
