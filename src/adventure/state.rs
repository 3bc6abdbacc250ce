//! Adventure state: items, locations, the player and the world graph.
//!
//! Plain data plus the mutators that keep its invariants (inventory
//! transfer, health clamping). Story rules live in `logic`.

use serde::Serialize;

use super::world;

/// Health a fresh player starts with, and the ceiling for healing.
pub const MAX_HEALTH: u32 = 100;
/// Health restored by drinking a potion.
pub const POTION_HEAL: u32 = 25;
/// Damage dealt by the dragon to an unarmed player.
pub const DRAGON_DAMAGE: u32 = 50;

/// Use message for items that have no use.
pub const CANNOT_USE: &str = "You can't use that.";

// ── Events ────────────────────────────────────────────────────

/// Semantic tag on a rendered line. Front-ends map it to styling or ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Room titles and banners.
    Heading,
    Narrative,
    Success,
    Error,
    Info,
}

/// One line (or block) of output produced by a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub category: Category,
    pub text: String,
}

impl Event {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

// ── Session status ────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ongoing,
    Won,
    Lost,
    Quit,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Ongoing
    }

    /// Closing lines shown by every front-end once the session ends.
    pub fn banner(self) -> &'static [&'static str] {
        match self {
            Status::Won => &[
                "★ VICTORY! ★",
                "You have successfully completed your quest!",
                "The legendary treasure is yours!",
            ],
            Status::Lost => &[
                "☠ GAME OVER ☠",
                "Your adventure has come to an unfortunate end.",
                "Better luck next time, brave adventurer!",
            ],
            Status::Quit => &["Thanks for playing!"],
            Status::Ongoing => &[],
        }
    }
}

// ── Locations ─────────────────────────────────────────────────

/// Stable identity of a location. Story rules match on this, never on
/// display names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationId {
    Forest,
    Village,
    Cave,
    Tower,
    TowerInside,
    DragonLair,
    TreasureRoom,
}

impl LocationId {
    pub const ALL: [LocationId; 7] = [
        LocationId::Forest,
        LocationId::Village,
        LocationId::Cave,
        LocationId::Tower,
        LocationId::TowerInside,
        LocationId::DragonLair,
        LocationId::TreasureRoom,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LocationId::Forest => "forest",
            LocationId::Village => "village",
            LocationId::Cave => "cave",
            LocationId::Tower => "tower",
            LocationId::TowerInside => "tower_inside",
            LocationId::DragonLair => "dragon_lair",
            LocationId::TreasureRoom => "treasure_room",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ── Items ─────────────────────────────────────────────────────

/// A pickupable and/or usable object. Identity is the name, compared
/// case-insensitively.
#[derive(Clone, Debug)]
pub struct Item {
    name: String,
    description: String,
    can_take: bool,
    can_use: bool,
    use_message: String,
}

impl Item {
    /// An item with no use.
    pub fn new(name: impl Into<String>, description: impl Into<String>, can_take: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            can_take,
            can_use: false,
            use_message: CANNOT_USE.to_string(),
        }
    }

    /// A takeable item that prints `use_message` when used.
    pub fn usable(
        name: impl Into<String>,
        description: impl Into<String>,
        use_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            can_take: true,
            can_use: true,
            use_message: use_message.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn can_take(&self) -> bool {
        self.can_take
    }

    pub fn can_use(&self) -> bool {
        self.can_use
    }

    pub fn use_message(&self) -> &str {
        &self.use_message
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.is_named(&other.name)
    }
}

impl Eq for Item {}

// ── Location ──────────────────────────────────────────────────

/// Why an item could not be taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refusal {
    Absent,
    /// Present but not takeable.
    Fixed,
}

#[derive(Clone, Debug)]
pub struct Location {
    id: LocationId,
    name: String,
    description: String,
    /// Lower-cased direction → target, in registration order.
    exits: Vec<(String, LocationId)>,
    items: Vec<Item>,
    visited: bool,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            items: Vec::new(),
            visited: false,
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Register the exit for `direction`, replacing any previous target.
    pub fn add_connection(&mut self, direction: &str, target: LocationId) {
        let direction = direction.to_lowercase();
        match self.exits.iter_mut().find(|(d, _)| *d == direction) {
            Some(exit) => exit.1 = target,
            None => self.exits.push((direction, target)),
        }
    }

    pub fn connection(&self, direction: &str) -> Option<LocationId> {
        let direction = direction.to_lowercase();
        self.exits
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|&(_, target)| target)
    }

    pub fn directions(&self) -> Vec<&str> {
        self.exits.iter().map(|(d, _)| d.as_str()).collect()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item equal to `item`. `None` if it was not here.
    pub fn remove_item(&mut self, item: &Item) -> Option<Item> {
        let index = self.items.iter().position(|i| i == item)?;
        Some(self.items.remove(index))
    }

    /// Lift a takeable item out of the room. Fixed items stay where they are.
    pub fn take_item(&mut self, name: &str) -> Result<Item, Refusal> {
        let item = self.item(name).ok_or(Refusal::Absent)?;
        if !item.can_take() {
            return Err(Refusal::Fixed);
        }
        let item = item.clone();
        self.remove_item(&item).ok_or(Refusal::Absent)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.is_named(name))
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.item(name).is_some()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Description, then the items present, then the exits.
    pub fn full_description(&self) -> String {
        let mut text = self.description.clone();

        if !self.items.is_empty() {
            text.push_str("\n\nYou can see:");
            for item in &self.items {
                text.push_str(&format!("\n- {}: {}", item.name(), item.description()));
            }
        }

        if !self.exits.is_empty() {
            text.push_str("\n\nAvailable directions: ");
            text.push_str(&self.directions().join(", "));
        }

        text
    }
}

// ── World ─────────────────────────────────────────────────────

/// The fixed location graph. Holds exactly one `Location` per `LocationId`.
#[derive(Clone, Debug)]
pub struct World {
    locations: Vec<Location>,
}

impl World {
    /// Build a world from one location per id, in any order.
    pub(crate) fn new(mut locations: Vec<Location>) -> Self {
        locations.sort_by_key(|l| l.id().index());
        debug_assert!(locations
            .iter()
            .map(Location::id)
            .eq(LocationId::ALL.into_iter()));
        Self { locations }
    }

    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    pub fn location_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.index()]
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }
}

// ── Player ────────────────────────────────────────────────────

/// Result of trying to use an inventory item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UseOutcome {
    /// Not in the inventory. Carries the requested name.
    Missing(String),
    /// Held but has no use. Carries the requested name.
    Unusable(String),
    Used {
        message: String,
        /// Health actually restored, for items that heal.
        healed: Option<u32>,
    },
}

impl UseOutcome {
    pub fn message(&self) -> String {
        match self {
            UseOutcome::Missing(name) => format!("You don't have a {}.", name),
            UseOutcome::Unusable(name) => format!("You can't use the {}.", name),
            UseOutcome::Used { message, .. } => message.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    location: LocationId,
    inventory: Vec<Item>,
    health: u32,
    max_health: u32,
    won: bool,
    lost: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, start: LocationId) -> Self {
        Self {
            name: name.into(),
            location: start,
            inventory: Vec::new(),
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            won: false,
            lost: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> LocationId {
        self.location
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn has_lost(&self) -> bool {
        self.lost
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn set_won(&mut self, won: bool) {
        self.won = won;
    }

    pub fn set_lost(&mut self, lost: bool) {
        self.lost = lost;
    }

    /// Follow the exit for `direction`. `false` leaves the player in place.
    pub fn go(&mut self, world: &mut World, direction: &str) -> bool {
        match world.location(self.location).connection(direction) {
            Some(next) => {
                self.enter(world, next);
                true
            }
            None => false,
        }
    }

    /// Place the player at `id` and mark it visited.
    pub fn enter(&mut self, world: &mut World, id: LocationId) {
        self.location = id;
        world.location_mut(id).set_visited(true);
    }

    /// Add a takeable item. Items that cannot be taken are handed back.
    pub fn add_item(&mut self, item: Item) -> Result<(), Item> {
        if !item.can_take() {
            return Err(item);
        }
        self.inventory.push(item);
        Ok(())
    }

    pub fn remove_item(&mut self, item: &Item) -> Option<Item> {
        let index = self.inventory.iter().position(|i| i == item)?;
        Some(self.inventory.remove(index))
    }

    pub fn inventory_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.is_named(name))
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory_item(name).is_some()
    }

    /// Copy of the inventory in pickup order.
    pub fn inventory(&self) -> Vec<Item> {
        self.inventory.clone()
    }

    pub fn inventory_names(&self) -> Vec<String> {
        self.inventory.iter().map(|i| i.name().to_string()).collect()
    }

    pub fn use_item(&mut self, name: &str) -> UseOutcome {
        let Some(index) = self.inventory.iter().position(|i| i.is_named(name)) else {
            return UseOutcome::Missing(name.to_string());
        };
        if !self.inventory[index].can_use() {
            return UseOutcome::Unusable(name.to_string());
        }

        let message = self.inventory[index].use_message().to_string();
        let healed = self.apply_effect(index);
        UseOutcome::Used { message, healed }
    }

    /// Intrinsic item effects. Key and sword only matter at guarded exits
    /// and in the dragon encounter.
    fn apply_effect(&mut self, index: usize) -> Option<u32> {
        match self.inventory[index].name().to_ascii_lowercase().as_str() {
            "potion" => {
                let before = self.health;
                self.heal(POTION_HEAL);
                self.inventory.remove(index);
                Some(self.health - before)
            }
            _ => None,
        }
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.lost = true;
        }
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }

    pub fn inventory_display(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut text = String::from("Your inventory contains:");
        for item in &self.inventory {
            text.push_str("\n- ");
            text.push_str(item.name());
        }
        text
    }

    pub fn status_display(&self) -> String {
        format!(
            "Health: {}/{}\n{}",
            self.health,
            self.max_health,
            self.inventory_display()
        )
    }
}

// ── Game state ────────────────────────────────────────────────

/// Everything one session mutates: the world, the player, the quit flag and
/// the events produced by the command being processed.
pub struct GameState {
    pub world: World,
    pub player: Player,
    pub quit: bool,
    pub outbox: Vec<Event>,
}

impl GameState {
    pub fn new() -> Self {
        let mut world = world::build();
        let mut player = Player::new("Adventurer", world::START);
        player.enter(&mut world, world::START);
        Self {
            world,
            player,
            quit: false,
            outbox: Vec::new(),
        }
    }

    pub fn emit(&mut self, category: Category, text: impl Into<String>) {
        self.outbox.push(Event::new(category, text));
    }

    pub fn current(&self) -> &Location {
        self.world.location(self.player.location())
    }

    pub fn current_mut(&mut self) -> &mut Location {
        self.world.location_mut(self.player.location())
    }

    pub fn status(&self) -> Status {
        if self.player.has_won() {
            Status::Won
        } else if self.player.has_lost() {
            Status::Lost
        } else if self.quit {
            Status::Quit
        } else {
            Status::Ongoing
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn potion() -> Item {
        Item::usable("potion", "A red potion", "You drink the potion.")
    }

    #[test]
    fn item_identity_ignores_case() {
        let a = Item::new("Stick", "one", true);
        let b = Item::new("sTICK", "two", false);
        assert_eq!(a, b);
        assert!(a.is_named("STICK"));
        assert_ne!(a, Item::new("stone", "", true));
    }

    #[test]
    fn default_state_is_a_fresh_game() {
        let state = GameState::default();
        assert_eq!(state.status(), Status::Ongoing);
        assert_eq!(state.player.location(), world::START);
        assert!(state.current().visited());
        assert!(state.outbox.is_empty());
    }

    #[test]
    fn plain_item_has_default_use_message() {
        let door = Item::new("door", "A heavy door", false);
        assert!(!door.can_use());
        assert_eq!(door.use_message(), CANNOT_USE);
    }

    #[test]
    fn connection_lookup_is_case_insensitive() {
        let mut loc = Location::new(LocationId::Forest, "Forest", "Trees.");
        loc.add_connection("North", LocationId::Village);
        assert_eq!(loc.connection("north"), Some(LocationId::Village));
        assert_eq!(loc.connection("NORTH"), Some(LocationId::Village));
        assert_eq!(loc.connection("south"), None);
    }

    #[test]
    fn add_connection_overwrites_same_direction() {
        let mut loc = Location::new(LocationId::Forest, "Forest", "Trees.");
        loc.add_connection("east", LocationId::Cave);
        loc.add_connection("EAST", LocationId::Tower);
        assert_eq!(loc.connection("east"), Some(LocationId::Tower));
        assert_eq!(loc.directions(), vec!["east"]);
    }

    #[test]
    fn remove_item_reports_presence() {
        let mut loc = Location::new(LocationId::Village, "Village", "Ruins.");
        loc.add_item(potion());
        assert!(loc.remove_item(&potion()).is_some());
        assert!(loc.remove_item(&potion()).is_none());
    }

    #[test]
    fn full_description_lists_items_then_directions() {
        let mut loc = Location::new(LocationId::Village, "Village", "Ruins.");
        loc.add_item(Item::new("key", "A golden key", true));
        loc.add_item(potion());
        loc.add_connection("south", LocationId::Forest);
        loc.add_connection("east", LocationId::DragonLair);
        assert_eq!(
            loc.full_description(),
            "Ruins.\n\nYou can see:\n- key: A golden key\n- potion: A red potion\
             \n\nAvailable directions: south, east"
        );
    }

    #[test]
    fn full_description_of_bare_room_is_just_description() {
        let loc = Location::new(LocationId::Cave, "Cave", "Dark.");
        assert_eq!(loc.full_description(), "Dark.");
    }

    #[test]
    fn location_keys_are_distinct() {
        let keys: Vec<&str> = LocationId::ALL.iter().map(|id| id.key()).collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key), "duplicate key {}", key);
        }
    }

    #[test]
    fn take_item_lifts_takeable() {
        let mut loc = Location::new(LocationId::Village, "Village", "Ruins.");
        loc.add_item(potion());
        let item = loc.take_item("POTION").unwrap();
        assert!(item.is_named("potion"));
        assert!(loc.items().is_empty());
        assert_eq!(loc.take_item("potion").unwrap_err(), Refusal::Absent);
    }

    #[test]
    fn take_item_leaves_fixed_items_in_place() {
        let mut loc = Location::new(LocationId::DragonLair, "Lair", "Hot.");
        loc.add_item(Item::new("dragon", "A dragon", false));
        loc.add_item(Item::new("dragon gold", "Gold", true));
        assert_eq!(loc.take_item("dragon").unwrap_err(), Refusal::Fixed);
        let names: Vec<&str> = loc.items().iter().map(Item::name).collect();
        assert_eq!(names, vec!["dragon", "dragon gold"]);
    }

    #[test]
    fn add_item_refuses_untakeable() {
        let mut p = Player::new("Tester", LocationId::Forest);
        let door = Item::new("door", "A door", false);
        let refused = p.add_item(door).unwrap_err();
        assert!(refused.is_named("door"));
        assert!(p.inventory().is_empty());
    }

    #[test]
    fn inventory_keeps_pickup_order() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.add_item(Item::new("stick", "", true)).unwrap();
        p.add_item(potion()).unwrap();
        p.add_item(Item::new("torch", "", true)).unwrap();
        assert_eq!(p.inventory_names(), vec!["stick", "potion", "torch"]);
    }

    #[test]
    fn inventory_snapshot_is_detached() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.add_item(potion()).unwrap();
        let mut snapshot = p.inventory();
        snapshot.clear();
        assert!(p.has_item("potion"));
    }

    #[test]
    fn use_missing_item() {
        let mut p = Player::new("Tester", LocationId::Forest);
        let outcome = p.use_item("potion");
        assert_eq!(outcome, UseOutcome::Missing("potion".into()));
        assert_eq!(outcome.message(), "You don't have a potion.");
    }

    #[test]
    fn use_unusable_item() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.add_item(Item::new("stick", "A stick", true)).unwrap();
        let outcome = p.use_item("stick");
        assert_eq!(outcome.message(), "You can't use the stick.");
        assert!(p.has_item("stick"));
    }

    #[test]
    fn potion_heals_and_is_consumed() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.add_item(potion()).unwrap();
        p.take_damage(40);
        let outcome = p.use_item("POTION");
        assert_eq!(
            outcome,
            UseOutcome::Used {
                message: "You drink the potion.".into(),
                healed: Some(25),
            }
        );
        assert_eq!(p.health(), 85);
        assert!(!p.has_item("potion"));
    }

    #[test]
    fn potion_heal_is_clamped() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.add_item(potion()).unwrap();
        p.take_damage(10);
        let outcome = p.use_item("potion");
        assert!(matches!(outcome, UseOutcome::Used { healed: Some(10), .. }));
        assert_eq!(p.health(), MAX_HEALTH);
    }

    #[test]
    fn using_one_potion_leaves_the_other() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.add_item(potion()).unwrap();
        p.add_item(potion()).unwrap();
        p.use_item("potion");
        assert_eq!(p.inventory_names(), vec!["potion"]);
    }

    #[test]
    fn key_and_sword_have_no_intrinsic_effect() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.add_item(Item::usable("sword", "", "You raise the sword.")).unwrap();
        p.take_damage(30);
        let outcome = p.use_item("sword");
        assert!(matches!(outcome, UseOutcome::Used { healed: None, .. }));
        assert_eq!(p.health(), 70);
        assert!(p.has_item("sword"));
    }

    #[test]
    fn damage_to_zero_loses() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.take_damage(50);
        assert!(!p.has_lost());
        p.take_damage(50);
        assert_eq!(p.health(), 0);
        assert!(p.has_lost());
        assert!(!p.is_alive());
        p.take_damage(50);
        assert_eq!(p.health(), 0);
    }

    #[test]
    fn set_health_is_clamped() {
        let mut p = Player::new("Tester", LocationId::Forest);
        p.set_health(500);
        assert_eq!(p.health(), MAX_HEALTH);
        p.set_health(0);
        assert!(!p.is_alive());
    }

    #[test]
    fn status_display_format() {
        let mut p = Player::new("Tester", LocationId::Forest);
        assert_eq!(p.status_display(), "Health: 100/100\nYour inventory is empty.");
        p.add_item(Item::new("stick", "", true)).unwrap();
        p.take_damage(5);
        assert_eq!(
            p.status_display(),
            "Health: 95/100\nYour inventory contains:\n- stick"
        );
    }

    #[test]
    fn go_follows_exit_and_marks_visited() {
        let mut state = GameState::new();
        assert!(!state.world.location(LocationId::Village).visited());
        assert!(state.player.go(&mut state.world, "north"));
        assert_eq!(state.player.location(), LocationId::Village);
        assert!(state.world.location(LocationId::Village).visited());
    }

    #[test]
    fn go_without_exit_stays_put() {
        let mut state = GameState::new();
        assert!(!state.player.go(&mut state.world, "south"));
        assert_eq!(state.player.location(), world::START);
    }

    #[test]
    fn status_priority() {
        let mut state = GameState::new();
        assert_eq!(state.status(), Status::Ongoing);
        state.quit = true;
        assert_eq!(state.status(), Status::Quit);
        state.player.set_lost(true);
        assert_eq!(state.status(), Status::Lost);
        state.player.set_won(true);
        assert_eq!(state.status(), Status::Won);
    }

    #[test]
    fn banners() {
        assert!(Status::Ongoing.banner().is_empty());
        assert_eq!(Status::Won.banner()[0], "★ VICTORY! ★");
        assert_eq!(Status::Lost.banner()[0], "☠ GAME OVER ☠");
        assert!(!Status::Ongoing.is_terminal());
        assert!(Status::Quit.is_terminal());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_location() -> impl Strategy<Value = LocationId> {
        proptest::sample::select(LocationId::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_health_stays_in_range(
            ops in proptest::collection::vec((any::<bool>(), 0u32..300), 0..40),
        ) {
            let mut p = Player::new("Tester", LocationId::Forest);
            for (damage, amount) in ops {
                if damage { p.take_damage(amount) } else { p.heal(amount) }
                prop_assert!(p.health() <= p.max_health());
                prop_assert!(p.has_lost() || p.health() > 0);
            }
        }

        #[test]
        fn prop_damage_then_heal_restores(start in 0u32..=100, d in 0u32..=100) {
            let mut p = Player::new("Tester", LocationId::Forest);
            p.set_health(start);
            p.take_damage(d);
            p.heal(d);
            let expected = if d <= start { start } else { d.min(MAX_HEALTH) };
            prop_assert_eq!(p.health(), expected);
        }

        #[test]
        fn prop_unregistered_direction_never_moves(
            from in arb_location(),
            direction in "[a-z]{1,8}",
        ) {
            let mut state = GameState::new();
            state.player.enter(&mut state.world, from);
            prop_assume!(state.world.location(from).connection(&direction).is_none());
            prop_assert!(!state.player.go(&mut state.world, &direction));
            prop_assert_eq!(state.player.location(), from);
        }

        #[test]
        fn prop_untakeable_never_enters_inventory(name in "[a-z]{1,10}") {
            let mut p = Player::new("Tester", LocationId::Forest);
            prop_assert!(p.add_item(Item::new(name, "fixed", false)).is_err());
            prop_assert!(p.inventory().is_empty());
        }
    }
}
