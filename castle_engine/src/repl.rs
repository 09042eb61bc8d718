//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`CastleWorld`].
//!
//! Every handler reports what its command cost as an [`Outcome`]; the loop applies
//! that cost (and any ending) in one place and then lets the hazard scheduler run.

pub mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use input::{InputEvent, InputManager, LineSource, ScriptedInput};
pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use anyhow::{Context, Result};
use castle_data::MessageKey;
use log::{info, warn};

use crate::command::{Command, parse_command};
use crate::scheduler::check_hazards;
use crate::style::GameStyle;
use crate::{CastleWorld, Ending, View, ViewItem};

/// How many turns a command used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnCost {
    Free,
    OneTurn,
}

/// What a handler did to the clock and whether it ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub cost: TurnCost,
    pub ending: Option<Ending>,
}
impl Outcome {
    /// Nothing changed on the clock.
    pub const FREE: Outcome = Outcome {
        cost: TurnCost::Free,
        ending: None,
    };
    /// One turn passed.
    pub const TURN: Outcome = Outcome {
        cost: TurnCost::OneTurn,
        ending: None,
    };

    /// This outcome, but also ending the session.
    pub const fn ends(self, ending: Ending) -> Outcome {
        Outcome {
            cost: self.cost,
            ending: Some(ending),
        }
    }
}

/// Handle a single line of player input: parse, dispatch, charge the turn, run hazards.
///
/// Blank lines are ignored entirely. Output is left queued in `view`.
///
/// # Errors
/// - if reading the quit confirmation from `input` fails.
pub fn process_line(world: &mut CastleWorld, view: &mut View, input: &mut dyn LineSource, line: &str) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    let Some(command) = parse_command(line) else {
        return Ok(());
    };
    let outcome = match &command {
        Help => help_handler(view),
        Inventory => inv_handler(world, view),
        Look => look_handler(world, view),
        Go(target) => move_to_handler(world, view, target.as_deref()),
        Take(thing) => take_handler(world, view, thing.as_deref()),
        Drop(thing) => drop_handler(world, view, thing.as_deref()),
        Examine(thing) => examine_handler(world, view, thing.as_deref()),
        UseItem(thing) => use_handler(world, view, thing.as_deref()),
        Quit => quit_handler(world, view, input)?,
        Unknown => {
            view.push(ViewItem::Message(MessageKey::NotUnderstood));
            return Ok(());
        },
    };

    apply_outcome(world, outcome);
    if !world.player.is_finished() {
        check_hazards(world, view);
    }
    Ok(())
}

fn apply_outcome(world: &mut CastleWorld, outcome: Outcome) {
    if outcome.cost == TurnCost::OneTurn {
        world.player.advance_turn();
    }
    if let Some(ending) = outcome.ending {
        world.player.finish(ending);
    }
}

/// Run the command loop until the session reaches an ending.
///
/// End of input is taken as quitting.
///
/// # Errors
/// - if reading input or writing output fails.
pub fn run_session(world: &mut CastleWorld, view: &mut View, input: &mut dyn LineSource) -> Result<Ending> {
    info!("session started at {}", world.here());
    loop {
        let prompt = world.text.message(MessageKey::Prompt).prompt_style().to_string();
        let event = input.read_line(&prompt).context("reading a command")?;
        match event {
            InputEvent::Line(line) => process_line(world, view, input, &line)?,
            InputEvent::Eof => {
                info!("end of input; treating as quit");
                world.player.finish(Ending::Quit);
            },
            InputEvent::Interrupted => warn!("command canceled"),
        }
        view.flush(&world.text).context("writing game output")?;

        if let Some(ending) = world.player.ending {
            return Ok(ending);
        }
    }
}
