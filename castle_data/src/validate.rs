use std::fmt;

use crate::{Item, Location, MessageKey, TextDef};

/// Problem found in a [`TextDef`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingText { kind: &'static str, id: String },
    UnknownSymbol { kind: &'static str, id: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingText { kind, id } => {
                write!(f, "no text for {kind} '{id}'")
            },
            ValidationError::UnknownSymbol { kind, id } => {
                write!(f, "unknown {kind} symbol '{id}'")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that a text table covers every location, item and message, and names nothing else.
///
/// ```
/// use castle_data::{TextDef, ValidationError, validate_text};
///
/// let errors = validate_text(&TextDef::default());
/// assert!(errors.contains(&ValidationError::MissingText { kind: "item", id: "key".into() }));
/// ```
pub fn validate_text(def: &TextDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if def.help.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "help text is empty".to_string(),
        });
    }

    for loc in Location::ALL {
        require("location", loc.symbol(), def.locations.contains_key(loc.symbol()), &mut errors);
    }
    for item in Item::ALL {
        match def.items.get(item.symbol()) {
            Some(name) if name.trim().is_empty() => errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' has a blank name", item.symbol()),
            }),
            Some(_) => {},
            None => require("item", item.symbol(), false, &mut errors),
        }
    }
    for key in MessageKey::ALL {
        require("message", key.symbol(), def.messages.contains_key(key.symbol()), &mut errors);
    }

    unknown("location", def.locations.keys(), |s| Location::from_symbol(s).is_some(), &mut errors);
    unknown("item", def.items.keys(), |s| Item::from_symbol(s).is_some(), &mut errors);
    unknown("examine", def.examine.keys(), |s| Item::from_symbol(s).is_some(), &mut errors);
    unknown("message", def.messages.keys(), |s| MessageKey::from_symbol(s).is_some(), &mut errors);

    // item names are what the player types, so two items must not share one
    let mut names: Vec<String> = def.items.values().map(|n| n.to_lowercase()).collect();
    names.sort_unstable();
    for pair in names.windows(2) {
        if pair[0] == pair[1] {
            errors.push(ValidationError::InvalidValue {
                context: format!("item name '{}' is used twice", pair[0]),
            });
        }
    }

    errors
}

fn require(kind: &'static str, id: &str, present: bool, errors: &mut Vec<ValidationError>) {
    if !present {
        errors.push(ValidationError::MissingText {
            kind,
            id: id.to_string(),
        });
    }
}

fn unknown<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a String>,
    known: impl Fn(&str) -> bool,
    errors: &mut Vec<ValidationError>,
) {
    for key in keys {
        if !known(key.as_str()) {
            errors.push(ValidationError::UnknownSymbol { kind, id: key.clone() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_def() -> TextDef {
        let mut def = TextDef {
            intro: "intro".into(),
            help: "help".into(),
            ..TextDef::default()
        };
        for loc in Location::ALL {
            def.locations.insert(loc.symbol().into(), format!("in {}", loc.symbol()));
        }
        for item in Item::ALL {
            def.items.insert(item.symbol().into(), item.symbol().replace('_', " "));
        }
        for key in MessageKey::ALL {
            def.messages.insert(key.symbol().into(), key.symbol().into());
        }
        def
    }

    #[test]
    fn complete_table_validates() {
        assert!(validate_text(&complete_def()).is_empty());
    }

    #[test]
    fn reports_missing_and_unknown_entries() {
        let mut def = complete_def();
        def.locations.remove("stables");
        def.examine.insert("unicorn".into(), "sparkly".into());
        let errors = validate_text(&def);
        assert!(errors.contains(&ValidationError::MissingText {
            kind: "location",
            id: "stables".into()
        }));
        assert!(errors.contains(&ValidationError::UnknownSymbol {
            kind: "examine",
            id: "unicorn".into()
        }));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn duplicate_item_names_are_rejected() {
        let mut def = complete_def();
        def.items.insert("soap".into(), "Key".into());
        let errors = validate_text(&def);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidValue { context } if context.contains("'key'"))));
    }

    #[test]
    fn blank_help_is_invalid() {
        let mut def = complete_def();
        def.help = "  ".into();
        assert_eq!(validate_text(&def).len(), 1);
    }
}
