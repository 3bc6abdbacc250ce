//! Click action IDs for the browser front-end.
//!
//! Each registered click target carries one of these IDs; [`resolve`] turns
//! it back into what the tap means.

/// Tap on the input line: submit whatever has been typed.
pub const SUBMIT: u16 = 1;
/// Tap on the "play again" prompt of a finished game.
pub const RESTART: u16 = 2;
/// The "New game" tab, available at any point of a game.
pub const NEW_GAME: u16 = 3;

/// `DIRECTION_BASE + i` moves in `DIRECTIONS[i]`.
pub const DIRECTION_BASE: u16 = 100;
/// `QUICK_BASE + i` runs `QUICK_ACTIONS[i]`.
pub const QUICK_BASE: u16 = 200;
/// `INVENTORY_BASE + i` examines the i-th held item.
pub const INVENTORY_BASE: u16 = 300;

pub const DIRECTIONS: [&str; 6] = ["north", "south", "east", "west", "in", "out"];
pub const QUICK_ACTIONS: [&str; 4] = ["look", "inventory", "status", "help"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A command line to hand to the session.
    Command(String),
    Submit,
    Restart,
    /// Start over, asking first if the game is still running.
    NewGame,
}

/// Map an action ID to its action. `inventory` is the held item list the
/// inventory panel was drawn from.
pub fn resolve(action_id: u16, inventory: &[String]) -> Option<Action> {
    match action_id {
        SUBMIT => Some(Action::Submit),
        RESTART => Some(Action::Restart),
        NEW_GAME => Some(Action::NewGame),
        id if (DIRECTION_BASE..QUICK_BASE).contains(&id) => DIRECTIONS
            .get((id - DIRECTION_BASE) as usize)
            .map(|dir| Action::Command(format!("go {}", dir))),
        id if (QUICK_BASE..INVENTORY_BASE).contains(&id) => QUICK_ACTIONS
            .get((id - QUICK_BASE) as usize)
            .map(|word| Action::Command(word.to_string())),
        id if id >= INVENTORY_BASE => inventory
            .get((id - INVENTORY_BASE) as usize)
            .map(|item| Action::Command(format!("look {}", item))),
        _ => None,
    }
}

/// "north" → "North".
pub fn label(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
