//! The fixed world: seven locations, their starting items, the exits between
//! them and the guarded exits that need an item to pass.

use super::state::{Item, Location, LocationId, World};

/// Where every session begins.
pub const START: LocationId = LocationId::Forest;

// ── Guarded exits ─────────────────────────────────────────────

/// An exit that only opens for a player holding `requires`.
///
/// Narration order on a granted attempt: `approach`, `unlock`, the move,
/// `granted`. On a denied attempt: `approach`, `denied`.
pub struct Guard {
    pub from: LocationId,
    pub direction: &'static str,
    pub requires: &'static str,
    pub approach: Option<&'static str>,
    pub unlock: Option<&'static str>,
    pub granted: &'static str,
    pub denied: &'static str,
}

pub const GUARDS: &[Guard] = &[
    Guard {
        from: LocationId::Tower,
        direction: "in",
        requires: "key",
        approach: None,
        unlock: Some("You use the golden key to unlock the tower door..."),
        granted: "The door creaks open, revealing the tower's mystical interior!",
        denied: "The tower door is locked. You need a key to enter.",
    },
    Guard {
        from: LocationId::Village,
        direction: "east",
        requires: "sword",
        approach: Some("As you approach the dragon's lair, you hear the sound of deep breathing..."),
        unlock: None,
        granted: "Fortunately, you have a sword to defend yourself!",
        denied: "Without a weapon, it would be suicide to enter. You need a sword!",
    },
];

/// The guard on `direction` out of `from`, if any.
pub fn guard(from: LocationId, direction: &str) -> Option<&'static Guard> {
    GUARDS
        .iter()
        .find(|g| g.from == from && g.direction.eq_ignore_ascii_case(direction))
}

// ── Builder ───────────────────────────────────────────────────

fn location(id: LocationId) -> Location {
    match id {
        LocationId::Forest => Location::new(
            id,
            "Mysterious Forest",
            "You find yourself in a dark, mysterious forest. Ancient trees tower above you, \
             their branches creating a canopy that blocks most of the sunlight. Strange sounds \
             echo from the depths of the woods.",
        ),
        LocationId::Village => Location::new(
            id,
            "Abandoned Village",
            "Before you lies an abandoned village. The houses are in ruins, with broken windows \
             and doors hanging off their hinges. Weeds grow through the cobblestone streets. \
             Despite its desolate appearance, you sense that valuable items might be hidden here.",
        ),
        LocationId::Cave => Location::new(
            id,
            "Dark Cave",
            "You enter a damp, dark cave. Water drips from stalactites above, creating echoing \
             sounds throughout the cavern. The air is cold and musty. Deep within the shadows, \
             you can make out the glint of something metallic.",
        ),
        LocationId::Tower => Location::new(
            id,
            "Ancient Tower",
            "An imposing stone tower rises before you. Its walls are covered in mysterious runes \
             that seem to glow faintly in the darkness. A heavy wooden door blocks the entrance, \
             secured with an ornate lock.",
        ),
        LocationId::TowerInside => Location::new(
            id,
            "Tower Interior",
            "Inside the tower, mystical energy fills the air. Ancient books and scrolls line the \
             walls, and a glowing crystal sits atop a pedestal in the center of the room. This \
             appears to be the lair of a powerful wizard!",
        ),
        LocationId::DragonLair => Location::new(
            id,
            "Dragon's Lair",
            "You've entered the lair of an ancient dragon! The cavern is filled with piles of \
             gold and precious gems. In the center, a massive dragon sleeps on a bed of treasure. \
             One wrong move could wake the beast...",
        ),
        LocationId::TreasureRoom => Location::new(
            id,
            "Hidden Treasure Room",
            "You've discovered a hidden treasure room! Chests overflowing with gold and jewels \
             surround you. Ancient artifacts and magical items gleam in the torchlight. You've \
             found the legendary treasure!",
        ),
    }
}

fn starting_items(id: LocationId) -> Vec<Item> {
    match id {
        LocationId::Forest => vec![Item::new("stick", "A sturdy wooden stick", true)],
        LocationId::Village => vec![
            Item::usable(
                "key",
                "An ornate golden key with mystical engravings",
                "The key glows briefly as you hold it. It seems to resonate with magical energy.",
            ),
            Item::usable(
                "potion",
                "A small bottle containing a red healing potion",
                "You drink the potion and feel your wounds healing. (+25 health)",
            ),
        ],
        LocationId::Cave => vec![
            Item::usable(
                "sword",
                "A sharp steel sword with intricate engravings",
                "You raise the sword, feeling its balanced weight. You're ready for battle!",
            ),
            Item::usable(
                "torch",
                "A burning torch that provides light",
                "The torch illuminates the dark corners around you.",
            ),
        ],
        LocationId::Tower => vec![Item::new("door", "A heavy wooden door with an ornate lock", false)],
        LocationId::TowerInside => vec![Item::usable(
            "spellbook",
            "An ancient book of powerful spells",
            "You flip through the pages, learning powerful magic spells!",
        )],
        LocationId::DragonLair => vec![Item::new("dragon", "A massive sleeping dragon", false)],
        LocationId::TreasureRoom => vec![Item::new(
            "treasure",
            "Piles of gold, gems, and precious artifacts",
            false,
        )],
    }
}

fn exits(id: LocationId) -> &'static [(&'static str, LocationId)] {
    match id {
        LocationId::Forest => &[
            ("north", LocationId::Village),
            ("east", LocationId::Cave),
            ("west", LocationId::Tower),
        ],
        LocationId::Village => &[("south", LocationId::Forest), ("east", LocationId::DragonLair)],
        LocationId::Cave => &[("west", LocationId::Forest), ("north", LocationId::TreasureRoom)],
        LocationId::Tower => &[("east", LocationId::Forest), ("in", LocationId::TowerInside)],
        LocationId::TowerInside => &[("out", LocationId::Tower)],
        LocationId::DragonLair => &[("west", LocationId::Village)],
        LocationId::TreasureRoom => &[("south", LocationId::Cave)],
    }
}

/// The bonus dropped into the lair each time the dragon is beaten.
pub fn dragon_gold() -> Item {
    Item::new("dragon gold", "A bag of precious dragon gold", true)
}

/// Construct a fresh world. Every front-end goes through here.
pub fn build() -> World {
    let locations = LocationId::ALL
        .into_iter()
        .map(|id| {
            let mut loc = location(id);
            for item in starting_items(id) {
                loc.add_item(item);
            }
            for &(direction, target) in exits(id) {
                loc.add_connection(direction, target);
            }
            loc
        })
        .collect();
    World::new(locations)
}

// ── Tests ─────────────────────────────────────────────────────
