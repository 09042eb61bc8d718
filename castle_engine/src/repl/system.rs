//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are about the game rather than
//! the castle: help and quitting. Neither costs a turn.

use anyhow::{Context, Result};
use castle_data::MessageKey;
use log::info;

use crate::style::GameStyle;
use crate::{CastleWorld, Ending, View, ViewItem};

use super::{InputEvent, LineSource, Outcome};

/// Show the list of commands.
pub fn help_handler(view: &mut View) -> Outcome {
    view.push(ViewItem::Help);
    Outcome::FREE
}

/// True if a confirmation answer starts with 'y' (any case).
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Ask for confirmation and quit on a yes. End of input counts as yes.
///
/// # Errors
/// - if output can't be written or the answer can't be read.
pub fn quit_handler(world: &CastleWorld, view: &mut View, input: &mut dyn LineSource) -> Result<Outcome> {
    view.flush(&world.text).context("writing game output")?;
    let prompt = world.text.message(MessageKey::QuitConfirm).prompt_style().to_string();
    let confirmed = match input.read_line(&prompt).context("reading quit confirmation")? {
        InputEvent::Line(answer) => is_affirmative(&answer),
        InputEvent::Eof => true,
        InputEvent::Interrupted => false,
    };
    if confirmed {
        info!("player quit after {} turns", world.player.turns);
        Ok(Outcome::FREE.ends(Ending::Quit))
    } else {
        Ok(Outcome::FREE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::embedded_text_table;
    use crate::repl::ScriptedInput;

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Yes please"));
        assert!(is_affirmative("  yep"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn quit_follows_the_answer() {
        let world = CastleWorld::new(embedded_text_table().unwrap());
        let mut view = View::captured();
        let mut input = ScriptedInput::new(["n", "Y"]);
        assert_eq!(quit_handler(&world, &mut view, &mut input).unwrap(), Outcome::FREE);
        assert_eq!(
            quit_handler(&world, &mut view, &mut input).unwrap(),
            Outcome::FREE.ends(Ending::Quit)
        );
        // drained input reads as end of input
        assert_eq!(
            quit_handler(&world, &mut view, &mut input).unwrap(),
            Outcome::FREE.ends(Ending::Quit)
        );
    }

    #[test]
    fn help_is_free() {
        let mut view = View::new();
        assert_eq!(help_handler(&mut view), Outcome::FREE);
        assert_eq!(view.items(), &[ViewItem::Help]);
    }
}
