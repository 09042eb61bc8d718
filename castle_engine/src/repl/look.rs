//! Observation command handlers.
//!
//! Looking around and checking the inventory never change the world and never
//! cost a turn.

use crate::scheduler::is_dark;
use crate::{CastleWorld, View, ViewItem};

use super::Outcome;

/// Shows the current room, what is lying in it (unless it is dark) and its exits.
pub fn look_handler(world: &CastleWorld, view: &mut View) -> Outcome {
    let here = world.here();
    view.push(ViewItem::RoomDescription(here));
    if is_dark(world) {
        view.push(ViewItem::Darkness);
    } else {
        view.push(ViewItem::RoomItems(world.placements.items_at(here)));
    }
    view.push(ViewItem::Exits(world.graph.available_directions(here)));
    Outcome::FREE
}

/// Lists carried items in slot order.
pub fn inv_handler(world: &CastleWorld, view: &mut View) -> Outcome {
    view.push(ViewItem::Inventory(world.placements.inventory()));
    Outcome::FREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::embedded_text_table;
    use castle_data::{Direction, Item, Location};

    fn world() -> CastleWorld {
        CastleWorld::new(embedded_text_table().unwrap())
    }

    #[test]
    fn look_lists_items_and_exits() {
        let mut world = world();
        world.player.location = Location::Vestibule;
        let mut view = View::new();
        assert_eq!(look_handler(&world, &mut view), Outcome::FREE);
        assert_eq!(
            view.items(),
            &[
                ViewItem::RoomDescription(Location::Vestibule),
                ViewItem::RoomItems(vec![Item::Umbrella]),
                ViewItem::Exits(vec![Direction::North, Direction::South]),
            ]
        );
    }

    #[test]
    fn look_hides_items_in_the_dark() {
        let mut world = world();
        world.player.location = Location::Vestibule;
        world.player.turns = 21;
        let mut view = View::new();
        look_handler(&world, &mut view);
        assert_eq!(view.items()[1], ViewItem::Darkness);
        assert!(view.items()[2].is_exits());
    }

    #[test]
    fn inventory_lists_held_items() {
        let world = world();
        let mut view = View::new();
        assert_eq!(inv_handler(&world, &mut view), Outcome::FREE);
        assert_eq!(view.items(), &[ViewItem::Inventory(vec![Item::Key])]);
    }
}
