//! Entity Search Module
//!
//! Handlers take a name typed by the player and need the item it refers to, limited
//! to whatever the handler can act on: just the inventory, or everything within
//! reach of a room. Names resolve by exact, case-insensitive match
//! against the item names in the text table.

use castle_data::{Item, Location};
use thiserror::Error;

use crate::CastleWorld;

/// Where a search is allowed to find its item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Only items the player is carrying.
    Inventory,
    /// Items carried or lying in the given room.
    Reachable(Location),
}

/// Possible reasons a search returns no item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no item named '{0}'")]
    NoMatchingName(String),
    #[error("'{input}' names {item}, which is not in scope")]
    NotInScope { input: String, item: Item },
}

/// Find the item named `pattern` within `scope`.
///
/// # Errors
/// - `NoMatchingName` if no item has that name
/// - `NotInScope` if the item exists but the scope excludes it
pub fn find_item_match(world: &CastleWorld, pattern: &str, scope: SearchScope) -> Result<Item, SearchError> {
    let item = world
        .text
        .item_named(pattern)
        .ok_or_else(|| SearchError::NoMatchingName(pattern.to_string()))?;
    let in_scope = match scope {
        SearchScope::Inventory => world.placements.is_held(item),
        SearchScope::Reachable(room) => {
            world.placements.is_held(item) || world.placements.is_present_at(item, room)
        },
    };
    if in_scope {
        Ok(item)
    } else {
        Err(SearchError::NotInScope {
            input: pattern.to_string(),
            item,
        })
    }
}
