//! Shared data model for the castle adventure: ids, baseline tables and the text table.

pub mod baseline;
pub mod ids;
pub mod text;
pub mod validate;

pub use baseline::*;
pub use ids::{Direction, Item, Location};
pub use text::{MessageKey, TextDef};
pub use validate::{ValidationError, validate_text};
