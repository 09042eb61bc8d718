//! Text-table model.
//!
//! The engine never builds player-facing prose itself; it selects a key and the
//! presentation layer looks the string up here. [`TextDef`] is the serialized form
//! of that table (TOML on disk), keyed by the `symbol()` of each id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete set of display strings for one game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextDef {
    pub intro: String,
    pub help: String,
    /// Location symbol -> short description ("in the kitchen").
    #[serde(default)]
    pub locations: BTreeMap<String, String>,
    /// Item symbol -> name the player types and sees ("steel bar").
    #[serde(default)]
    pub items: BTreeMap<String, String>,
    /// Item symbol -> close-up narration. Sparse: unlisted items get the generic fallback.
    #[serde(default)]
    pub examine: BTreeMap<String, String>,
    /// Message symbol -> template.
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

/// Keys for every fixed narration the engine can select.
///
/// Templates may contain `{item}`, `{thing}`, `{dir}`, `{room}` and `{turns}`
/// placeholders; which ones are filled depends on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageKey {
    // look / inventory framing
    YouAre,
    Dark,
    YouSee,
    NothingSpecial,
    YouCanGo,
    Carrying,
    CarryingNothing,
    // parser
    NotUnderstood,
    // go
    GoWhere,
    NoExit,
    NeedSkye,
    NeedAuntie,
    NeedCat,
    NeedDoll,
    Won,
    // take / drop
    TakeWhat,
    AlreadyCarrying,
    SeeNoSuch,
    InventoryFull,
    Took,
    DropWhat,
    NotCarrying,
    Dropped,
    // examine
    ExamineWhat,
    DontSeeIt,
    FireplacePanels,
    NothingSpecialAboutIt,
    AuntieBound,
    AuntieStory,
    // use
    UseWhat,
    UnlockDoor,
    DrinkWine,
    CutRopes,
    LightCandle,
    NothingToLight,
    PryBoiler,
    NothingHappens,
    // quit / session
    QuitConfirm,
    Prompt,
    GameOver,
    PlayAgain,
    // hazards
    DuskWarning,
    DarknessFalls,
    CandleBlowsOut,
    BoilerCrying,
}
impl MessageKey {
    pub const ALL: [MessageKey; 45] = {
        use MessageKey::*;
        [
            YouAre,
            Dark,
            YouSee,
            NothingSpecial,
            YouCanGo,
            Carrying,
            CarryingNothing,
            NotUnderstood,
            GoWhere,
            NoExit,
            NeedSkye,
            NeedAuntie,
            NeedCat,
            NeedDoll,
            Won,
            TakeWhat,
            AlreadyCarrying,
            SeeNoSuch,
            InventoryFull,
            Took,
            DropWhat,
            NotCarrying,
            Dropped,
            ExamineWhat,
            DontSeeIt,
            FireplacePanels,
            NothingSpecialAboutIt,
            AuntieBound,
            AuntieStory,
            UseWhat,
            UnlockDoor,
            DrinkWine,
            CutRopes,
            LightCandle,
            NothingToLight,
            PryBoiler,
            NothingHappens,
            QuitConfirm,
            Prompt,
            GameOver,
            PlayAgain,
            DuskWarning,
            DarknessFalls,
            CandleBlowsOut,
            BoilerCrying,
        ]
    };

    /// Stable key used in the `[messages]` table.
    pub fn symbol(self) -> &'static str {
        use MessageKey::*;
        match self {
            YouAre => "you_are",
            Dark => "dark",
            YouSee => "you_see",
            NothingSpecial => "nothing_special",
            YouCanGo => "you_can_go",
            Carrying => "carrying",
            CarryingNothing => "carrying_nothing",
            NotUnderstood => "not_understood",
            GoWhere => "go_where",
            NoExit => "no_exit",
            NeedSkye => "need_skye",
            NeedAuntie => "need_auntie",
            NeedCat => "need_cat",
            NeedDoll => "need_doll",
            Won => "won",
            TakeWhat => "take_what",
            AlreadyCarrying => "already_carrying",
            SeeNoSuch => "see_no_such",
            InventoryFull => "inventory_full",
            Took => "took",
            DropWhat => "drop_what",
            NotCarrying => "not_carrying",
            Dropped => "dropped",
            ExamineWhat => "examine_what",
            DontSeeIt => "dont_see_it",
            FireplacePanels => "fireplace_panels",
            NothingSpecialAboutIt => "nothing_special_about_it",
            AuntieBound => "auntie_bound",
            AuntieStory => "auntie_story",
            UseWhat => "use_what",
            UnlockDoor => "unlock_door",
            DrinkWine => "drink_wine",
            CutRopes => "cut_ropes",
            LightCandle => "light_candle",
            NothingToLight => "nothing_to_light",
            PryBoiler => "pry_boiler",
            NothingHappens => "nothing_happens",
            QuitConfirm => "quit_confirm",
            Prompt => "prompt",
            GameOver => "game_over",
            PlayAgain => "play_again",
            DuskWarning => "dusk_warning",
            DarknessFalls => "darkness_falls",
            CandleBlowsOut => "candle_blows_out",
            BoilerCrying => "boiler_crying",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<MessageKey> {
        Self::ALL.into_iter().find(|key| key.symbol() == symbol)
    }
}
