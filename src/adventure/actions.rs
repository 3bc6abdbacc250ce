//! Typed commands parsed from a line of player input.

/// One parsed line. Arguments are already lower-cased; an empty argument
/// means none was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Look(Option<String>),
    Take(String),
    Drop(String),
    Use(String),
    Inventory,
    Status,
    Help,
    Quit,
    /// Anything else. Carries the command word.
    Unknown(String),
}

/// Trim and lower-case `input`, then split it into a command word and the
/// whole remainder as its argument. `None` for blank input.
pub fn parse(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let (word, argument) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start().to_string()),
        None => (input.as_str(), String::new()),
    };

    let command = match word {
        "go" | "move" => Command::Go(argument),
        "look" | "examine" => Command::Look(if argument.is_empty() {
            None
        } else {
            Some(argument)
        }),
        "take" | "get" | "pick" => Command::Take(argument),
        "drop" => Command::Drop(argument),
        "use" => Command::Use(argument),
        "inventory" | "inv" | "items" => Command::Inventory,
        "status" | "stats" => Command::Status,
        "help" | "commands" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Some(command)
}

/// Lines printed by `help`.
pub const HELP: &[&str] = &[
    "Available commands:",
    "  go <direction>  - Move in a direction (north, south, east, west, in, out)",
    "  look [item]     - Examine your current location or a specific item",
    "  take <item>     - Pick up an item",
    "  drop <item>     - Drop an item from your inventory",
    "  use <item>      - Use an item from your inventory",
    "  inventory       - Check your inventory",
    "  status          - Check your health and inventory",
    "  help            - Display this help message",
    "  quit            - Exit the game",
];
