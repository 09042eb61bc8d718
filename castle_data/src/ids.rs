//! Closed identifier sets for everything the castle is built from.
//!
//! Rooms, items and directions are small enumerations rather than strings. Text
//! content refers to them by their stable `symbol()`, which is also what the
//! text table uses as keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six directions an exit may lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}
impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Position of this direction within an exit row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Full lowercase name, as shown in exit listings.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Single-letter abbreviation accepted on the command line.
    pub fn letter(self) -> &'static str {
        &self.name()[..1]
    }

    /// Exact (case-insensitive) match against the full name or the single letter.
    pub fn from_word(word: &str) -> Option<Direction> {
        let lc = word.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|dir| lc == dir.name() || lc == dir.letter())
    }
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every room of the castle, numbered 1..=59 as in the baseline map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Location {
    FrontEntrance = 1,
    Vestibule,
    Entry,
    PeacockAlley1,
    PeacockAlley2,
    PeacockAlley3,
    PeacockAlley4,
    PeacockAlley5,
    DiningRoom,
    Conservatory,
    BreakfastRoom,
    ServingRoom,
    Kitchen,
    Hallway1,
    Hallway2,
    Elevator1,
    Study,
    Library,
    GreatHall,
    Stairs1,
    Landing,
    OakDrawingRoom,
    SmokingRoom,
    CoveredPorch,
    BilliardsRoom,
    Hallway10,
    Hallway11,
    Hallway12,
    Hallway13,
    Hallway14,
    Corridor1,
    Corridor2,
    NarrowHallway,
    RoundRoom,
    PipeOrganLoft,
    Bedroom1,
    SittingRoom1,
    Bedroom3,
    SirHenrysBedroom,
    SittingRoom3,
    LadysBedroom,
    SittingRoom2,
    GuestBedroom,
    Elevator2,
    ChildrensBedroom,
    ServantsBedroom,
    Bedroom4,
    LinenRoom,
    Bedroom2,
    Bath,
    Stairs2,
    Stairs3,
    WineCellar,
    Tunnel1,
    Tunnel2,
    Tunnel3,
    SteamPlant,
    Tunnel4,
    Stables,
}
impl Location {
    pub const COUNT: usize = 59;

    #[rustfmt::skip]
    pub const ALL: [Location; Location::COUNT] = {
        use Location::*;
        [
            FrontEntrance, Vestibule, Entry, PeacockAlley1, PeacockAlley2, PeacockAlley3,
            PeacockAlley4, PeacockAlley5, DiningRoom, Conservatory, BreakfastRoom, ServingRoom,
            Kitchen, Hallway1, Hallway2, Elevator1, Study, Library, GreatHall, Stairs1, Landing,
            OakDrawingRoom, SmokingRoom, CoveredPorch, BilliardsRoom, Hallway10, Hallway11,
            Hallway12, Hallway13, Hallway14, Corridor1, Corridor2, NarrowHallway, RoundRoom,
            PipeOrganLoft, Bedroom1, SittingRoom1, Bedroom3, SirHenrysBedroom, SittingRoom3,
            LadysBedroom, SittingRoom2, GuestBedroom, Elevator2, ChildrensBedroom, ServantsBedroom,
            Bedroom4, LinenRoom, Bedroom2, Bath, Stairs2, Stairs3, WineCellar, Tunnel1, Tunnel2,
            Tunnel3, SteamPlant, Tunnel4, Stables,
        ]
    };

    /// The room number (1-based).
    pub fn number(self) -> usize {
        self as usize
    }

    /// Zero-based index for table lookups.
    pub fn index(self) -> usize {
        self.number() - 1
    }

    /// Look up a room by its 1-based number.
    pub fn from_number(number: usize) -> Option<Location> {
        number.checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Stable key used by the text table.
    pub fn symbol(self) -> &'static str {
        use Location::*;
        match self {
            FrontEntrance => "front_entrance",
            Vestibule => "vestibule",
            Entry => "entry",
            PeacockAlley1 => "peacock_alley_1",
            PeacockAlley2 => "peacock_alley_2",
            PeacockAlley3 => "peacock_alley_3",
            PeacockAlley4 => "peacock_alley_4",
            PeacockAlley5 => "peacock_alley_5",
            DiningRoom => "dining_room",
            Conservatory => "conservatory",
            BreakfastRoom => "breakfast_room",
            ServingRoom => "serving_room",
            Kitchen => "kitchen",
            Hallway1 => "hallway_1",
            Hallway2 => "hallway_2",
            Elevator1 => "elevator_1",
            Study => "study",
            Library => "library",
            GreatHall => "great_hall",
            Stairs1 => "stairs_1",
            Landing => "landing",
            OakDrawingRoom => "oak_drawing_room",
            SmokingRoom => "smoking_room",
            CoveredPorch => "covered_porch",
            BilliardsRoom => "billiards_room",
            Hallway10 => "hallway_10",
            Hallway11 => "hallway_11",
            Hallway12 => "hallway_12",
            Hallway13 => "hallway_13",
            Hallway14 => "hallway_14",
            Corridor1 => "corridor_1",
            Corridor2 => "corridor_2",
            NarrowHallway => "narrow_hallway",
            RoundRoom => "round_room",
            PipeOrganLoft => "pipe_organ_loft",
            Bedroom1 => "bedroom_1",
            SittingRoom1 => "sitting_room_1",
            Bedroom3 => "bedroom_3",
            SirHenrysBedroom => "sir_henrys_bedroom",
            SittingRoom3 => "sitting_room_3",
            LadysBedroom => "ladys_bedroom",
            SittingRoom2 => "sitting_room_2",
            GuestBedroom => "guest_bedroom",
            Elevator2 => "elevator_2",
            ChildrensBedroom => "childrens_bedroom",
            ServantsBedroom => "servants_bedroom",
            Bedroom4 => "bedroom_4",
            LinenRoom => "linen_room",
            Bedroom2 => "bedroom_2",
            Bath => "bath",
            Stairs2 => "stairs_2",
            Stairs3 => "stairs_3",
            WineCellar => "wine_cellar",
            Tunnel1 => "tunnel_1",
            Tunnel2 => "tunnel_2",
            Tunnel3 => "tunnel_3",
            SteamPlant => "steam_plant",
            Tunnel4 => "tunnel_4",
            Stables => "stables",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Location> {
        Self::ALL.into_iter().find(|loc| loc.symbol() == symbol)
    }
}
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.symbol(), self.number())
    }
}

/// Every portable thing (and person) in the game, numbered 1..=22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Item {
    PoolCue = 1,
    Umbrella,
    Newspaper,
    Sandwich,
    Cat,
    Wine,
    Knife,
    Candle,
    Matches,
    Auntie,
    Doll,
    Skye,
    SteelBar,
    Book,
    Hairbrush,
    Note,
    Perfume,
    BusinessCard,
    Soap,
    Menu,
    LightBulb,
    Key,
}
impl Item {
    pub const COUNT: usize = 22;

    #[rustfmt::skip]
    pub const ALL: [Item; Item::COUNT] = {
        use Item::*;
        [
            PoolCue, Umbrella, Newspaper, Sandwich, Cat, Wine, Knife, Candle, Matches, Auntie,
            Doll, Skye, SteelBar, Book, Hairbrush, Note, Perfume, BusinessCard, Soap, Menu,
            LightBulb, Key,
        ]
    };

    /// The item number (1-based).
    pub fn number(self) -> usize {
        self as usize
    }

    /// Stable key used by the text table.
    pub fn symbol(self) -> &'static str {
        use Item::*;
        match self {
            PoolCue => "pool_cue",
            Umbrella => "umbrella",
            Newspaper => "newspaper",
            Sandwich => "sandwich",
            Cat => "cat",
            Wine => "wine",
            Knife => "knife",
            Candle => "candle",
            Matches => "matches",
            Auntie => "auntie",
            Doll => "doll",
            Skye => "skye",
            SteelBar => "steel_bar",
            Book => "book",
            Hairbrush => "hairbrush",
            Note => "note",
            Perfume => "perfume",
            BusinessCard => "business_card",
            Soap => "soap",
            Menu => "menu",
            LightBulb => "light_bulb",
            Key => "key",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Item> {
        Self::ALL.into_iter().find(|item| item.symbol() == symbol)
    }
}
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_numbers_follow_table_order() {
        for (idx, loc) in Location::ALL.iter().enumerate() {
            assert_eq!(loc.index(), idx);
            assert_eq!(Location::from_number(idx + 1), Some(*loc));
        }
        assert_eq!(Location::Stables.number(), 59);
        assert_eq!(Location::from_number(0), None);
        assert_eq!(Location::from_number(60), None);
    }

    #[test]
    fn item_numbers_follow_table_order() {
        for (idx, item) in Item::ALL.iter().enumerate() {
            assert_eq!(item.number(), idx + 1);
        }
        assert_eq!(Item::Key.number(), 22);
    }

    #[test]
    fn symbols_round_trip_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for loc in Location::ALL {
            assert_eq!(Location::from_symbol(loc.symbol()), Some(loc));
            assert!(seen.insert(loc.symbol()));
        }
        for item in Item::ALL {
            assert_eq!(Item::from_symbol(item.symbol()), Some(item));
        }
    }

    #[test]
    fn direction_words_and_letters_resolve() {
        assert_eq!(Direction::from_word("N"), Some(Direction::North));
        assert_eq!(Direction::from_word("down"), Some(Direction::Down));
        assert_eq!(Direction::from_word("West"), Some(Direction::West));
        assert_eq!(Direction::from_word("nowhere"), None);
        assert_eq!(Direction::from_word("no"), None);
        assert_eq!(Direction::from_word(""), None);
    }
}
