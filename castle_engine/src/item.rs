//! Item placement.
//!
//! Every item is in exactly one place at a time: held in an inventory slot, lying
//! in a room, or absent from the world entirely (not yet revealed). Placement is
//! stored once per item, so the partition holds by construction; inventory order
//! is derived from the slot numbers.

use std::collections::BTreeMap;

use castle_data::{INITIAL_PLACEMENTS, INVENTORY_LIMIT, Item, Location, STARTING_INVENTORY, StartPlacement};
use log::info;
use thiserror::Error;
use variantly::Variantly;

/// Where an item currently is.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Placement {
    /// Carried by the player in the given inventory slot.
    Held(usize),
    /// Lying in a room.
    At(Location),
    /// Not in the world (yet).
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free inventory slot (limit {0})")]
    InventoryFull(usize),
}

/// The placement of every item in the game.
#[derive(Debug, Clone)]
pub struct Placements {
    placements: BTreeMap<Item, Placement>,
    limit: usize,
}
impl Default for Placements {
    fn default() -> Self {
        Self::new()
    }
}
impl Placements {
    /// Placements as they stand at the start of a session.
    pub fn new() -> Self {
        let mut store = Self {
            placements: BTreeMap::new(),
            limit: INVENTORY_LIMIT,
        };
        store.reset();
        store
    }

    /// Put every item back where it starts.
    pub fn reset(&mut self) {
        self.placements.clear();
        for (item, start) in INITIAL_PLACEMENTS {
            let placement = match start {
                StartPlacement::At(loc) => Placement::At(*loc),
                StartPlacement::Absent => Placement::Absent,
            };
            self.placements.insert(*item, placement);
        }
        for (slot, item) in STARTING_INVENTORY.iter().enumerate() {
            self.placements.insert(*item, Placement::Held(slot));
        }
    }

    pub fn location_of(&self, item: Item) -> Placement {
        self.placements.get(&item).copied().unwrap_or(Placement::Absent)
    }

    pub fn is_held(&self, item: Item) -> bool {
        self.location_of(item).is_held()
    }

    pub fn is_present_at(&self, item: Item, location: Location) -> bool {
        self.location_of(item) == Placement::At(location)
    }

    /// Put an item into the first free inventory slot, returning the slot.
    ///
    /// An item already held stays in its slot.
    ///
    /// # Errors
    /// - `InventoryFull` if every slot is occupied; nothing is changed.
    pub fn move_to_inventory(&mut self, item: Item) -> Result<usize, PlacementError> {
        if let Some(slot) = self.location_of(item).held() {
            return Ok(slot);
        }
        let slot = self.free_slot().ok_or(PlacementError::InventoryFull(self.limit))?;
        info!("{item} -> inventory slot {slot}");
        self.placements.insert(item, Placement::Held(slot));
        Ok(slot)
    }

    pub fn move_to_location(&mut self, item: Item, location: Location) {
        info!("{item} -> {location}");
        self.placements.insert(item, Placement::At(location));
    }

    pub fn move_to_absent(&mut self, item: Item) {
        info!("{item} removed from the world");
        self.placements.insert(item, Placement::Absent);
    }

    /// Carried items in slot order.
    pub fn inventory(&self) -> Vec<Item> {
        let mut held: Vec<(usize, Item)> = self
            .placements
            .iter()
            .filter_map(|(item, placement)| placement.held().map(|slot| (slot, *item)))
            .collect();
        held.sort_unstable();
        held.into_iter().map(|(_, item)| item).collect()
    }

    /// Items lying in `location`, in item-number order.
    pub fn items_at(&self, location: Location) -> Vec<Item> {
        self.placements
            .iter()
            .filter(|(_, placement)| **placement == Placement::At(location))
            .map(|(item, _)| *item)
            .collect()
    }

    fn free_slot(&self) -> Option<usize> {
        (0..self.limit).find(|slot| !self.placements.values().any(|p| *p == Placement::Held(*slot)))
    }
}
