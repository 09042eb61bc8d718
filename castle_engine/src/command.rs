//! Command module
//!
//! Turns a raw input line into a [`Command`]. Parsing is deliberately terse: a bare
//! direction word is a move, otherwise the first letter of the line picks the verb
//! from [`VERB_TABLE`] and everything after the first space is the object.
use castle_data::Direction;
use log::debug;

/// The verbs the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Help,
    Inventory,
    Go,
    Look,
    Take,
    Examine,
    Use,
    Drop,
    Quit,
}
impl Verb {
    pub fn name(self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Inventory => "inventory",
            Verb::Go => "go",
            Verb::Look => "look",
            Verb::Take => "take",
            Verb::Examine => "examine",
            Verb::Use => "use",
            Verb::Drop => "drop",
            Verb::Quit => "quit",
        }
    }
}

/// First-letter dispatch, checked top to bottom after bare direction words.
pub const VERB_TABLE: [(char, Verb); 9] = [
    ('h', Verb::Help),
    ('i', Verb::Inventory),
    ('g', Verb::Go),
    ('l', Verb::Look),
    ('t', Verb::Take),
    ('e', Verb::Examine),
    ('u', Verb::Use),
    ('d', Verb::Drop),
    ('q', Verb::Quit),
];

/// Commands that can be executed by the player.
///
/// `None` in an object-taking command means the player gave no object text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Inventory,
    Go(Option<String>),
    Look,
    Take(Option<String>),
    Examine(Option<String>),
    UseItem(Option<String>),
    Drop(Option<String>),
    Quit,
    Unknown,
}

/// Parse one input line. Returns `None` for a blank line, which the game ignores.
pub fn parse_command(input: &str) -> Option<Command> {
    let line = input.trim();
    let first = line.chars().next()?.to_ascii_lowercase();

    let command = if Direction::from_word(line).is_some() {
        Command::Go(Some(line.to_string()))
    } else {
        let object = object_text(line);
        match VERB_TABLE.iter().find(|(letter, _)| *letter == first).map(|(_, verb)| *verb) {
            Some(Verb::Help) => Command::Help,
            Some(Verb::Inventory) => Command::Inventory,
            Some(Verb::Go) => Command::Go(object),
            Some(Verb::Look) => Command::Look,
            Some(Verb::Take) => Command::Take(object),
            Some(Verb::Examine) => Command::Examine(object),
            Some(Verb::Use) => Command::UseItem(object),
            Some(Verb::Drop) => Command::Drop(object),
            Some(Verb::Quit) => Command::Quit,
            None => Command::Unknown,
        }
    };
    debug!("parsed '{line}' as {command:?}");
    Some(command)
}

/// Everything after the first space, trimmed; `None` if that leaves nothing.
fn object_text(line: &str) -> Option<String> {
    line.split_once(' ')
        .map(|(_, rest)| rest.trim())
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
}
