//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, handlers push [`ViewItem`]s
//! that carry ids and message keys. At the end of a command the view looks the text
//! up in the [`TextTable`], fills in any placeholders and prints the result, wrapped to
//! the terminal width.
use std::io::{self, Write};

use castle_data::{Direction, Item, Location, MessageKey};
use colored::{ColoredString, Colorize};
use log::info;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::GameStyle;
use crate::text::TextTable;

/// Things a handler can ask to have shown.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// "You are ..." for a room.
    RoomDescription(Location),
    /// Shown instead of the item list once night has fallen.
    Darkness,
    RoomItems(Vec<Item>),
    Exits(Vec<Direction>),
    Inventory(Vec<Item>),
    Help,
    Message(MessageKey),
    /// A message with `{item}` filled from the item's name.
    ItemMessage(MessageKey, Item),
    /// A message with `{thing}` filled from what the player typed.
    EchoMessage(MessageKey, String),
    DirectionMessage(MessageKey, Direction),
    /// Close-up narration for an item, or the generic fallback.
    Examine(Item),
    Hazard(MessageKey),
    /// Terminal narration: winning, drinking the wine.
    Ending(MessageKey),
    GameOver { turns: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Room,
    ItemEntry,
    Exits,
    Narration,
    Denied,
    Error,
    Hazard,
    Ending,
    Plain,
}

/// One output line before wrapping and styling.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    tone: Tone,
    text: String,
}
impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self { tone, text: text.into() }
    }

    fn styled(&self) -> ColoredString {
        let text = self.text.as_str();
        match self.tone {
            Tone::Room => text.room_style(),
            Tone::ItemEntry => text.item_style(),
            Tone::Exits => text.exit_style(),
            Tone::Narration => text.description_style(),
            Tone::Denied => text.denied_style(),
            Tone::Error => text.error_style(),
            Tone::Hazard => text.triggered_style(),
            Tone::Ending => text.ending_style(),
            Tone::Plain => text.normal(),
        }
    }
}

/// View aggregates what to display for one command and then renders it.
///
/// A captured view keeps the rendered lines in memory instead of printing them.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    items: Vec<ViewItem>,
    transcript: Option<Vec<String>>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view that prints to stdout.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            transcript: None,
        }
    }

    /// Create a view that records rendered lines rather than printing them.
    pub fn captured() -> Self {
        Self {
            transcript: Some(Vec::new()),
            ..Self::new()
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Items queued since the last flush.
    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    /// Every line flushed so far by a captured view (empty otherwise).
    pub fn transcript(&self) -> &[String] {
        self.transcript.as_deref().unwrap_or_default()
    }

    /// Render the queued items as plain text lines without consuming them.
    pub fn render(&self, text: &TextTable) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| lines_for(item, text))
            .map(|line| line.text)
            .collect()
    }

    /// Compose and display everything queued for this command.
    ///
    /// # Errors
    /// - if writing to stdout fails.
    pub fn flush(&mut self, text: &TextTable) -> io::Result<()> {
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.extend(self.items.iter().flat_map(|item| lines_for(item, text)).map(|line| line.text));
            self.items.clear();
            return Ok(());
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.flush_to(&mut out, text)
    }

    /// Write everything queued to `out`, styled and wrapped.
    ///
    /// # Errors
    /// - if writing to `out` fails.
    pub fn flush_to<W: Write>(&mut self, out: &mut W, text: &TextTable) -> io::Result<()> {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in self.items.drain(..) {
            for line in lines_for(&item, text) {
                let wrapped = fill(&line.text, self.width);
                writeln!(out, "{}", Line::new(line.tone, wrapped).styled())?;
            }
        }
        out.flush()
    }

    /// Drop anything queued without showing it.
    pub fn reset(&mut self) {
        if !self.items.is_empty() {
            info!("discarding {} unshown view items", self.items.len());
        }
        self.items.clear();
    }
}

fn fill_in(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(&format!("{{{placeholder}}}"), value)
}

/// Split a possibly multi-line string into lines of one tone.
fn block(tone: Tone, text: &str) -> Vec<Line> {
    text.lines().map(|line| Line::new(tone, line)).collect()
}

fn listing(text: &TextTable, heading: MessageKey, entries: Vec<String>, empty: MessageKey) -> Vec<Line> {
    let mut lines = vec![Line::new(Tone::Plain, text.message(heading))];
    if entries.is_empty() {
        lines.push(Line::new(Tone::Plain, format!("  {}", text.message(empty))));
    } else {
        lines.extend(entries.into_iter().map(|entry| Line::new(Tone::ItemEntry, format!("  {entry}"))));
    }
    lines
}

fn message_tone(key: MessageKey) -> Tone {
    #[allow(clippy::enum_glob_use)]
    use MessageKey::*;
    match key {
        NotUnderstood => Tone::Error,
        GoWhere | NoExit | NeedSkye | NeedAuntie | NeedCat | NeedDoll | TakeWhat | AlreadyCarrying | SeeNoSuch
        | InventoryFull | DropWhat | NotCarrying | ExamineWhat | DontSeeIt | UseWhat | NothingToLight
        | NothingHappens => Tone::Denied,
        Won | DrinkWine | GameOver => Tone::Ending,
        DuskWarning | DarknessFalls | CandleBlowsOut | BoilerCrying => Tone::Hazard,
        _ => Tone::Narration,
    }
}

fn lines_for(item: &ViewItem, text: &TextTable) -> Vec<Line> {
    match item {
        ViewItem::RoomDescription(location) => vec![Line::new(
            Tone::Room,
            fill_in(text.message(MessageKey::YouAre), "room", text.location(*location)),
        )],
        ViewItem::Darkness => vec![Line::new(Tone::Hazard, text.message(MessageKey::Dark))],
        ViewItem::RoomItems(items) => listing(
            text,
            MessageKey::YouSee,
            items.iter().map(|item| text.item_name(*item).to_string()).collect(),
            MessageKey::NothingSpecial,
        ),
        ViewItem::Exits(dirs) => {
            let mut line = text.message(MessageKey::YouCanGo).to_string();
            for dir in dirs {
                line.push(' ');
                line.push_str(dir.name());
            }
            vec![Line::new(Tone::Exits, line)]
        },
        ViewItem::Inventory(items) => listing(
            text,
            MessageKey::Carrying,
            items.iter().map(|item| text.item_name(*item).to_string()).collect(),
            MessageKey::CarryingNothing,
        ),
        ViewItem::Help => block(Tone::Plain, text.help()),
        ViewItem::Message(key) | ViewItem::Hazard(key) | ViewItem::Ending(key) => {
            block(message_tone(*key), text.message(*key))
        },
        ViewItem::ItemMessage(key, item) => block(
            message_tone(*key),
            &fill_in(text.message(*key), "item", text.item_name(*item)),
        ),
        ViewItem::EchoMessage(key, typed) => block(message_tone(*key), &fill_in(text.message(*key), "thing", typed)),
        ViewItem::DirectionMessage(key, dir) => {
            block(message_tone(*key), &fill_in(text.message(*key), "dir", dir.name()))
        },
        ViewItem::Examine(item) => block(
            Tone::Narration,
            text.examine(*item)
                .unwrap_or_else(|| text.message(MessageKey::NothingSpecialAboutIt)),
        ),
        ViewItem::GameOver { turns } => vec![Line::new(
            Tone::Ending,
            fill_in(text.message(MessageKey::GameOver), "turns", &turns.to_string()),
        )],
    }
}
