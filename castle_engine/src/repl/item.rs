//! `repl::item` module
//!
//! Handlers for examining and using things. These are where the scripted reveals
//! live: the fireplace panels, the front door, Auntie's ropes, the candle and the
//! boiler.

use castle_data::{FIREPLACE, FRONT_DOOR, Item, Location, MessageKey, START_LOCATION, STUDY_PANELS};
use log::info;

use crate::entity_search::{SearchScope, find_item_match};
use crate::scheduler::BOILER_ROOM;
use crate::{CastleWorld, Ending, View, ViewItem};

use super::Outcome;

/// Room in which examining the fireplace opens the panels.
pub const FIREPLACE_ROOM: Location = Location::Study;

/// Take a close look at something. Costs a turn whenever an object was given,
/// even if it isn't here.
pub fn examine_handler(world: &mut CastleWorld, view: &mut View, thing: Option<&str>) -> Outcome {
    let Some(thing) = thing else {
        view.push(ViewItem::Message(MessageKey::ExamineWhat));
        return Outcome::FREE;
    };

    if thing.eq_ignore_ascii_case(FIREPLACE) && world.here() == FIREPLACE_ROOM {
        for edge in STUDY_PANELS {
            if world.graph.reveal(edge) {
                info!("fireplace panel opened: {} {} -> {}", edge.from, edge.dir, edge.to);
            }
        }
        view.push(ViewItem::Message(MessageKey::FireplacePanels));
        return Outcome::TURN;
    }

    match find_item_match(world, thing, SearchScope::Reachable(world.here())) {
        Ok(Item::Auntie) => {
            let key = if world.flags.auntie_tied {
                MessageKey::AuntieBound
            } else {
                MessageKey::AuntieStory
            };
            view.push(ViewItem::Message(key));
        },
        Ok(item) => view.push(ViewItem::Examine(item)),
        Err(err) => {
            info!("examine '{thing}' failed: {err}");
            view.push(ViewItem::Message(MessageKey::DontSeeIt));
        },
    }
    Outcome::TURN
}

/// Use something that is carried or lying here.
///
/// Only items within reach count; trying to use one that isn't costs nothing.
pub fn use_handler(world: &mut CastleWorld, view: &mut View, thing: Option<&str>) -> Outcome {
    let Some(thing) = thing else {
        view.push(ViewItem::Message(MessageKey::UseWhat));
        return Outcome::FREE;
    };
    let here = world.here();
    let item = match find_item_match(world, thing, SearchScope::Reachable(here)) {
        Ok(item) => item,
        Err(err) => {
            info!("use '{thing}' failed: {err}");
            view.push(ViewItem::Message(MessageKey::DontSeeIt));
            return Outcome::FREE;
        },
    };

    match item {
        Item::Key if here == START_LOCATION => {
            if world.graph.reveal(FRONT_DOOR) {
                info!("front door unlocked");
            }
            view.push(ViewItem::Message(MessageKey::UnlockDoor));
        },
        Item::Wine => {
            info!("player drank the wine");
            view.push(ViewItem::Ending(MessageKey::DrinkWine));
            return Outcome::TURN.ends(Ending::Lost);
        },
        Item::Knife if world.flags.auntie_tied && world.is_reachable(Item::Auntie) => {
            info!("Auntie freed");
            world.flags.auntie_tied = false;
            view.push(ViewItem::Message(MessageKey::CutRopes));
            view.push(ViewItem::Message(MessageKey::AuntieStory));
        },
        Item::Matches => {
            if world.is_reachable(Item::Candle) {
                info!("candle lit at turn {}", world.player.turns);
                world.flags.candle_lit = true;
                view.push(ViewItem::Message(MessageKey::LightCandle));
            } else {
                view.push(ViewItem::Message(MessageKey::NothingToLight));
            }
        },
        Item::SteelBar if here == BOILER_ROOM && world.placements.location_of(Item::Skye).is_absent() => {
            info!("boiler pried open; Skye rescued");
            world.placements.move_to_location(Item::Skye, here);
            view.push(ViewItem::Message(MessageKey::PryBoiler));
        },
        _ => view.push(ViewItem::Message(MessageKey::NothingHappens)),
    }
    Outcome::TURN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::embedded_text_table;
    use castle_data::Direction;

    fn world_at(location: Location) -> CastleWorld {
        let mut world = CastleWorld::new(embedded_text_table().unwrap());
        world.player.location = location;
        world
    }

    #[test]
    fn fireplace_opens_panels_only_in_the_study() {
        let mut world = world_at(Location::Study);
        let mut view = View::new();
        assert_eq!(examine_handler(&mut world, &mut view, Some("Fireplace")), Outcome::TURN);
        assert_eq!(world.graph.exit(Location::Study, Direction::Up), Some(Location::Hallway11));
        assert_eq!(world.graph.exit(Location::Study, Direction::Down), Some(Location::Stairs3));

        let mut world = world_at(Location::Library);
        let mut view = View::new();
        assert_eq!(examine_handler(&mut world, &mut view, Some("fireplace")), Outcome::TURN);
        assert_eq!(view.items(), &[ViewItem::Message(MessageKey::DontSeeIt)]);
    }

    #[test]
    fn examine_costs_a_turn_even_when_absent() {
        let mut world = world_at(Location::Kitchen);
        let mut view = View::new();
        assert_eq!(examine_handler(&mut world, &mut view, Some("menu")), Outcome::TURN);
        assert_eq!(examine_handler(&mut world, &mut view, None), Outcome::FREE);
        assert_eq!(
            view.items(),
            &[
                ViewItem::Message(MessageKey::DontSeeIt),
                ViewItem::Message(MessageKey::ExamineWhat)
            ]
        );
    }

    #[test]
    fn auntie_narration_follows_the_ropes() {
        let mut world = world_at(Location::Stables);
        let mut view = View::new();
        examine_handler(&mut world, &mut view, Some("auntie"));
        world.flags.auntie_tied = false;
        examine_handler(&mut world, &mut view, Some("auntie"));
        assert_eq!(
            view.items(),
            &[
                ViewItem::Message(MessageKey::AuntieBound),
                ViewItem::Message(MessageKey::AuntieStory)
            ]
        );
    }

    #[test]
    fn key_unlocks_front_door_once() {
        let mut world = world_at(START_LOCATION);
        let mut view = View::new();
        assert_eq!(use_handler(&mut world, &mut view, Some("key")), Outcome::TURN);
        assert_eq!(use_handler(&mut world, &mut view, Some("key")), Outcome::TURN);
        assert_eq!(world.graph.exit(START_LOCATION, Direction::North), Some(Location::Vestibule));
        assert_eq!(world.graph.available_directions(START_LOCATION), vec![Direction::North]);
    }

    #[test]
    fn key_elsewhere_does_nothing() {
        let mut world = world_at(Location::Vestibule);
        let mut view = View::new();
        use_handler(&mut world, &mut view, Some("key"));
        assert_eq!(view.items(), &[ViewItem::Message(MessageKey::NothingHappens)]);
    }

    #[test]
    fn using_unreachable_items_is_free() {
        let mut world = world_at(Location::Vestibule);
        let mut view = View::new();
        assert_eq!(use_handler(&mut world, &mut view, Some("wine")), Outcome::FREE);
        assert_eq!(view.items(), &[ViewItem::Message(MessageKey::DontSeeIt)]);
    }

    #[test]
    fn wine_loses_the_game() {
        let mut world = world_at(Location::WineCellar);
        let mut view = View::new();
        assert_eq!(use_handler(&mut world, &mut view, Some("wine")), Outcome::TURN.ends(Ending::Lost));
    }

    #[test]
    fn knife_frees_auntie_only_when_she_is_here() {
        let mut world = world_at(Location::Kitchen);
        let mut view = View::new();
        use_handler(&mut world, &mut view, Some("knife"));
        assert!(world.flags.auntie_tied);
        world.placements.move_to_inventory(Item::Knife).unwrap();
        world.player.location = Location::Stables;
        use_handler(&mut world, &mut view, Some("knife"));
        assert!(!world.flags.auntie_tied);
        assert_eq!(
            view.items(),
            &[
                ViewItem::Message(MessageKey::NothingHappens),
                ViewItem::Message(MessageKey::CutRopes),
                ViewItem::Message(MessageKey::AuntieStory),
            ]
        );
    }

    #[test]
    fn matches_need_a_candle() {
        let mut world = world_at(Location::SmokingRoom);
        let mut view = View::new();
        assert_eq!(use_handler(&mut world, &mut view, Some("matches")), Outcome::TURN);
        assert!(!world.flags.candle_lit);
        assert_eq!(view.items(), &[ViewItem::Message(MessageKey::NothingToLight)]);

        world.placements.move_to_location(Item::Candle, Location::SmokingRoom);
        use_handler(&mut world, &mut view, Some("matches"));
        assert!(world.flags.candle_lit);
    }

    #[test]
    fn steel_bar_frees_skye_in_the_steam_plant() {
        let mut world = world_at(BOILER_ROOM);
        world.placements.move_to_inventory(Item::SteelBar).unwrap();
        let mut view = View::new();
        use_handler(&mut world, &mut view, Some("steel bar"));
        assert!(world.placements.is_present_at(Item::Skye, BOILER_ROOM));
        use_handler(&mut world, &mut view, Some("steel bar"));
        assert_eq!(
            view.items(),
            &[
                ViewItem::Message(MessageKey::PryBoiler),
                ViewItem::Message(MessageKey::NothingHappens)
            ]
        );
    }
}
