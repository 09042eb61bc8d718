//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use castle_data::MessageKey;
use log::info;

use crate::entity_search::{SearchScope, find_item_match};
use crate::item::PlacementError;
use crate::{CastleWorld, View, ViewItem};

use super::Outcome;

/// Removes an item from current room and adds it to inventory.
///
/// Only a successful take costs a turn; a full inventory refuses for free.
pub fn take_handler(world: &mut CastleWorld, view: &mut View, thing: Option<&str>) -> Outcome {
    let Some(thing) = thing else {
        view.push(ViewItem::Message(MessageKey::TakeWhat));
        return Outcome::FREE;
    };
    let item = match find_item_match(world, thing, SearchScope::Reachable(world.here())) {
        Ok(item) if world.placements.is_held(item) => {
            view.push(ViewItem::Message(MessageKey::AlreadyCarrying));
            return Outcome::FREE;
        },
        Ok(item) => item,
        Err(err) => {
            info!("take '{thing}' failed: {err}");
            view.push(ViewItem::EchoMessage(MessageKey::SeeNoSuch, thing.to_string()));
            return Outcome::FREE;
        },
    };

    match world.placements.move_to_inventory(item) {
        Ok(_) => {
            view.push(ViewItem::ItemMessage(MessageKey::Took, item));
            Outcome::TURN
        },
        Err(PlacementError::InventoryFull(limit)) => {
            info!("take {item} refused: inventory full ({limit})");
            view.push(ViewItem::Message(MessageKey::InventoryFull));
            Outcome::FREE
        },
    }
}

/// Drops a carried item in the current room.
pub fn drop_handler(world: &mut CastleWorld, view: &mut View, thing: Option<&str>) -> Outcome {
    let Some(thing) = thing else {
        view.push(ViewItem::Message(MessageKey::DropWhat));
        return Outcome::FREE;
    };
    match find_item_match(world, thing, SearchScope::Inventory) {
        Ok(item) => {
            let here = world.here();
            world.placements.move_to_location(item, here);
            view.push(ViewItem::ItemMessage(MessageKey::Dropped, item));
            Outcome::TURN
        },
        Err(err) => {
            info!("drop '{thing}' failed: {err}");
            view.push(ViewItem::EchoMessage(MessageKey::NotCarrying, thing.to_string()));
            Outcome::FREE
        },
    }
}
