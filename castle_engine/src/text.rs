//! Runtime text lookups.
//!
//! [`TextTable`] is the presentation collaborator: given a room, an item or a
//! message key it hands back the display string. It also answers the one question
//! the core needs text for, namely which item a typed name refers to.

use std::collections::HashMap;

use castle_data::{Item, Location, MessageKey, TextDef, ValidationError, validate_text};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("malformed text table: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("text table failed validation:\n{}", list_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn list_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(|err| format!("- {err}")).collect::<Vec<_>>().join("\n")
}

/// Validated, id-keyed display strings.
#[derive(Debug, Clone)]
pub struct TextTable {
    intro: String,
    help: String,
    locations: HashMap<Location, String>,
    items: HashMap<Item, String>,
    examine: HashMap<Item, String>,
    messages: HashMap<MessageKey, String>,
}
impl TextTable {
    /// Build the lookup table from a deserialized definition.
    ///
    /// # Errors
    /// - `TextError::Invalid` listing every missing or unknown entry.
    pub fn from_def(def: &TextDef) -> Result<Self, TextError> {
        let errors = validate_text(def);
        if !errors.is_empty() {
            return Err(TextError::Invalid(errors));
        }
        Ok(Self {
            intro: def.intro.clone(),
            help: def.help.trim_end().to_string(),
            locations: keyed(&def.locations, Location::from_symbol),
            items: keyed(&def.items, Item::from_symbol),
            examine: keyed(&def.examine, Item::from_symbol),
            messages: keyed(&def.messages, MessageKey::from_symbol),
        })
    }

    /// Parse and validate a TOML text table.
    ///
    /// # Errors
    /// - on TOML syntax/shape errors or failed validation.
    pub fn from_toml(source: &str) -> Result<Self, TextError> {
        let def: TextDef = toml::from_str(source)?;
        Self::from_def(&def)
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn location(&self, location: Location) -> &str {
        self.locations.get(&location).map_or(location.symbol(), String::as_str)
    }

    pub fn item_name(&self, item: Item) -> &str {
        self.items.get(&item).map_or(item.symbol(), String::as_str)
    }

    /// Close-up narration for an item, if it has one.
    pub fn examine(&self, item: Item) -> Option<&str> {
        self.examine.get(&item).map(String::as_str)
    }

    pub fn message(&self, key: MessageKey) -> &str {
        self.messages.get(&key).map_or(key.symbol(), |msg| msg.trim_end_matches('\n'))
    }

    /// The item whose name matches `name` exactly, ignoring case.
    pub fn item_named(&self, name: &str) -> Option<Item> {
        let lc_name = name.to_lowercase();
        Item::ALL
            .into_iter()
            .find(|item| self.item_name(*item).to_lowercase() == lc_name)
    }
}

fn keyed<K: Eq + std::hash::Hash>(
    source: &std::collections::BTreeMap<String, String>,
    lookup: impl Fn(&str) -> Option<K>,
) -> HashMap<K, String> {
    source
        .iter()
        .filter_map(|(symbol, text)| lookup(symbol.as_str()).map(|key| (key, text.clone())))
        .collect()
}
