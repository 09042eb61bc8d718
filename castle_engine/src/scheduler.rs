//! Turn-indexed and state-indexed hazards.
//!
//! After each command the game checks whether night is falling, whether the candle
//! has burned down, and whether the player is standing next to the boiler Skye is
//! trapped in. Checks are pure functions of the world; [`check_hazards`] applies them.

use castle_data::{Item, Location, MessageKey};
use log::info;

use crate::{CastleWorld, Ending, View, ViewItem};

/// Turn at which the player is warned that night is coming.
pub const DUSK_TURN: usize = 10;
/// Turn at which an unlit player passes out in the dark.
pub const DARKNESS_TURN: usize = 20;
/// A lit candle goes out whenever the turn count reaches a multiple of this.
pub const CANDLE_BURN_TURNS: usize = 15;
/// Where the crying can be heard.
pub const BOILER_ROOM: Location = Location::SteamPlant;

/// Events the scheduler can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    DuskWarning,
    DarknessFalls,
    CandleBlowsOut,
    BoilerCrying,
}
impl Hazard {
    pub fn message_key(self) -> MessageKey {
        match self {
            Hazard::DuskWarning => MessageKey::DuskWarning,
            Hazard::DarknessFalls => MessageKey::DarknessFalls,
            Hazard::CandleBlowsOut => MessageKey::CandleBlowsOut,
            Hazard::BoilerCrying => MessageKey::BoilerCrying,
        }
    }
}

/// Hazards due in the current state, in firing order.
///
/// Darkness falling ends the check: nothing after it is reported that cycle.
pub fn due_hazards(world: &CastleWorld) -> Vec<Hazard> {
    let turns = world.player.turns;
    let lit = world.flags.candle_lit;
    let mut due = Vec::new();

    if turns == DUSK_TURN && !lit {
        due.push(Hazard::DuskWarning);
    }
    if turns == DARKNESS_TURN && !lit {
        due.push(Hazard::DarknessFalls);
        return due;
    }
    if lit && turns > 0 && turns % CANDLE_BURN_TURNS == 0 {
        due.push(Hazard::CandleBlowsOut);
    }
    if world.here() == BOILER_ROOM
        && !world.flags.auntie_tied
        && world.placements.location_of(Item::Skye).is_absent()
    {
        due.push(Hazard::BoilerCrying);
    }
    due
}

/// Fire every due hazard, applying its effect and queuing its narration.
pub fn check_hazards(world: &mut CastleWorld, view: &mut View) {
    for hazard in due_hazards(world) {
        info!("hazard {hazard:?} firing at turn {}", world.player.turns);
        match hazard {
            Hazard::DarknessFalls => world.player.finish(Ending::Lost),
            Hazard::CandleBlowsOut => world.flags.candle_lit = false,
            Hazard::DuskWarning | Hazard::BoilerCrying => {},
        }
        view.push(ViewItem::Hazard(hazard.message_key()));
    }
}

/// True once night has fallen and the candle is not lit.
pub fn is_dark(world: &CastleWorld) -> bool {
    world.player.turns > DARKNESS_TURN && !world.flags.candle_lit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::embedded_text_table;

    fn world_at_turn(turns: usize) -> CastleWorld {
        let mut world = CastleWorld::new(embedded_text_table().unwrap());
        world.player.turns = turns;
        world
    }

    #[test]
    fn dusk_warning_only_at_turn_ten_without_light() {
        assert_eq!(due_hazards(&world_at_turn(10)), vec![Hazard::DuskWarning]);
        assert!(due_hazards(&world_at_turn(9)).is_empty());
        assert!(due_hazards(&world_at_turn(11)).is_empty());
        let mut lit = world_at_turn(10);
        lit.flags.candle_lit = true;
        assert!(due_hazards(&lit).is_empty());
    }

    #[test]
    fn darkness_short_circuits_later_rules() {
        let mut world = world_at_turn(20);
        world.player.location = BOILER_ROOM;
        world.flags.auntie_tied = false;
        assert_eq!(due_hazards(&world), vec![Hazard::DarknessFalls]);
    }

    #[test]
    fn darkness_ends_the_session() {
        let mut world = world_at_turn(20);
        let mut view = View::new();
        check_hazards(&mut world, &mut view);
        assert_eq!(world.player.ending, Some(Ending::Lost));
        assert_eq!(view.items(), &[ViewItem::Hazard(MessageKey::DarknessFalls)]);
    }

    #[test]
    fn candle_burns_out_on_multiples_of_fifteen() {
        for turns in [15, 30, 45] {
            let mut world = world_at_turn(turns);
            world.flags.candle_lit = true;
            let mut view = View::new();
            check_hazards(&mut world, &mut view);
            assert!(!world.flags.candle_lit, "turn {turns}");
        }
        let mut world = world_at_turn(16);
        world.flags.candle_lit = true;
        assert!(due_hazards(&world).is_empty());
        assert!(due_hazards(&world_at_turn(15)).is_empty());
    }

    #[test]
    fn boiler_hint_needs_auntie_free_and_skye_missing() {
        let mut world = world_at_turn(3);
        world.player.location = BOILER_ROOM;
        assert!(due_hazards(&world).is_empty());
        world.flags.auntie_tied = false;
        assert_eq!(due_hazards(&world), vec![Hazard::BoilerCrying]);
        // repeats while the condition holds
        assert_eq!(due_hazards(&world), vec![Hazard::BoilerCrying]);
        world.placements.move_to_location(Item::Skye, BOILER_ROOM);
        assert!(due_hazards(&world).is_empty());
    }

    #[test]
    fn dark_after_turn_twenty_unless_lit() {
        assert!(!is_dark(&world_at_turn(20)));
        let mut world = world_at_turn(21);
        assert!(is_dark(&world));
        world.flags.candle_lit = true;
        assert!(!is_dark(&world));
    }
}
