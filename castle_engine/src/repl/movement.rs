//! `repl::movement` module
//!
//! Contains the handler for commands that change player location, including the
//! gate out of the castle.

use castle_data::{Direction, MessageKey};
use log::info;

use crate::ending::{first_missing_requirement, is_exit_gate, missing_message};
use crate::{CastleWorld, Ending, View, ViewItem};

use super::Outcome;

/// Resolve the direction named by the last word of the player's text.
fn resolve_direction(target: &str) -> Option<Direction> {
    target.split_whitespace().last().and_then(Direction::from_word)
}

/// Move the player to a neighboring location, or leave the castle if everyone is along.
pub fn move_to_handler(world: &mut CastleWorld, view: &mut View, target: Option<&str>) -> Outcome {
    let Some(dir) = target.and_then(resolve_direction) else {
        view.push(ViewItem::Message(MessageKey::GoWhere));
        return Outcome::FREE;
    };
    let here = world.here();
    let Some(destination) = world.graph.exit(here, dir) else {
        view.push(ViewItem::DirectionMessage(MessageKey::NoExit, dir));
        return Outcome::FREE;
    };

    if is_exit_gate(here, dir) {
        if let Some(missing) = first_missing_requirement(world) {
            info!("exit gate refused: {missing} not present");
            view.push(ViewItem::Message(missing_message(missing)));
            return Outcome::FREE;
        }
        info!("exit gate crossed with everyone present");
        view.push(ViewItem::Ending(MessageKey::Won));
        return Outcome::FREE.ends(Ending::Won);
    }

    info!("player moved {dir} from {here} to {destination}");
    world.player.location = destination;
    view.push(ViewItem::RoomDescription(destination));
    Outcome::TURN
}
