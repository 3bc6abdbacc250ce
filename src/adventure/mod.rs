//! Text adventure: the session every front-end drives.
//!
//! A front-end calls [`Session::start`] once, then feeds each line the
//! player types to [`Session::submit`] and renders the returned events until
//! [`Session::status`] is terminal.

pub mod actions;
pub mod logic;
pub mod state;
pub mod world;

use log::info;
use serde::Serialize;

pub use state::{Category, Event, Item, LocationId, Status};
use state::GameState;

/// Scripted walkthrough from the first room to the treasure: `(step title,
/// commands)`. Played by the `demo` binary.
pub const DEMO_SCRIPT: &[(&str, &[&str])] = &[
    ("Looking around and taking the stick", &["look", "take stick"]),
    ("Moving to the village", &["go north"]),
    ("Collecting items from the village", &["take key", "take potion"]),
    ("Exploring the cave", &["go south", "go east"]),
    ("Collecting weapons from the cave", &["take sword", "take torch"]),
    ("Using the healing potion", &["use potion", "status"]),
    ("Heading to the Ancient Tower", &["go west", "go west"]),
    ("Using the key to enter the tower", &["go in"]),
    ("Collecting the ancient spellbook", &["take spellbook", "use spellbook"]),
    ("Facing the dragon", &["go out", "go east", "go north", "go east", "take dragon gold"]),
    ("Finding the treasure room", &["go west", "go south", "go east", "go north"]),
];

/// Read-only view for status panels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub player: String,
    pub location: LocationId,
    pub location_name: String,
    pub health: u32,
    pub max_health: u32,
    pub inventory: Vec<String>,
    pub status: Status,
}

pub struct Session {
    state: GameState,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Render the starting room.
    pub fn start(&mut self) -> Vec<Event> {
        logic::describe_location(&mut self.state);
        self.flush()
    }

    /// Process one line of input. Ignored once the session is over.
    pub fn submit(&mut self, line: &str) -> Vec<Event> {
        if self.status().is_terminal() {
            return Vec::new();
        }
        if let Some(command) = actions::parse(line) {
            logic::execute(&mut self.state, command);
            logic::check_game_state(&mut self.state);
        }

        let status = self.status();
        if status.is_terminal() {
            info!("session ended: {:?}", status);
        }
        self.flush()
    }

    /// Throw the current game away and begin a fresh one.
    pub fn restart(&mut self) -> Vec<Event> {
        *self = Session::new();
        self.start()
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn health(&self) -> u32 {
        self.state.player.health()
    }

    pub fn max_health(&self) -> u32 {
        self.state.player.max_health()
    }

    pub fn location(&self) -> LocationId {
        self.state.player.location()
    }

    pub fn location_name(&self) -> &str {
        self.state.current().name()
    }

    pub fn location_description(&self) -> String {
        self.state.current().full_description()
    }

    /// Held items in pickup order.
    pub fn inventory(&self) -> Vec<String> {
        self.state.player.inventory_names()
    }

    /// Exits out of the current room.
    pub fn directions(&self) -> Vec<String> {
        self.state
            .current()
            .directions()
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.state.player.name().to_string(),
            location: self.location(),
            location_name: self.location_name().to_string(),
            health: self.health(),
            max_health: self.max_health(),
            inventory: self.inventory(),
            status: self.status(),
        }
    }

    fn flush(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.state.outbox)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
