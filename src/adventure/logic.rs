//! Command dispatch and story rules. Pure game logic, no rendering or I/O.
//!
//! Every handler writes its narration to `state.outbox`. Nothing here fails:
//! a bad direction or a missing item is an ordinary outcome with its own
//! message.

use log::{debug, info};

use super::actions::{Command, HELP};
use super::state::{Category, GameState, LocationId, Refusal, UseOutcome, DRAGON_DAMAGE};
use super::world::{self, Guard};

/// Apply one command to the game.
pub fn execute(state: &mut GameState, command: Command) {
    debug!("command: {:?}", command);
    match command {
        Command::Go(direction) => go(state, &direction),
        Command::Look(target) => look(state, target.as_deref()),
        Command::Take(name) => take(state, &name),
        Command::Drop(name) => drop_item(state, &name),
        Command::Use(name) => use_item(state, &name),
        Command::Inventory => {
            let text = state.player.inventory_display();
            state.emit(Category::Info, text);
        }
        Command::Status => {
            let text = state.player.status_display();
            state.emit(Category::Info, text);
        }
        Command::Help => {
            for line in HELP {
                state.emit(Category::Info, *line);
            }
        }
        Command::Quit => {
            state.quit = true;
            state.emit(Category::Heading, "Thank you for playing! Goodbye!");
        }
        Command::Unknown(word) => {
            debug!("unknown command word {:?}", word);
            state.emit(
                Category::Error,
                "I don't understand that command. Type 'help' for available commands.",
            );
        }
    }
}

/// Health at zero means the game is lost, however it got there.
pub fn check_game_state(state: &mut GameState) {
    if !state.player.is_alive() && !state.player.has_lost() {
        info!("player health reached zero");
        state.player.set_lost(true);
    }
}

/// Heading plus full description of the current room.
pub fn describe_location(state: &mut GameState) {
    let heading = format!("═══ {} ═══", state.current().name());
    let body = state.current().full_description();
    state.emit(Category::Heading, heading);
    state.emit(Category::Info, body);
}

// ── Movement ──────────────────────────────────────────────────

fn go(state: &mut GameState, direction: &str) {
    if direction.is_empty() {
        state.emit(Category::Error, "Go where? Specify a direction.");
        return;
    }

    if let Some(guard) = world::guard(state.player.location(), direction) {
        guarded_move(state, guard);
        return;
    }

    if state.player.go(&mut state.world, direction) {
        arrive(state);
    } else {
        debug!("no exit {:?} from {:?}", direction, state.player.location());
        state.emit(Category::Error, "You can't go that way.");
    }
}

fn guarded_move(state: &mut GameState, guard: &Guard) {
    if let Some(approach) = guard.approach {
        state.emit(Category::Narrative, approach);
    }

    if !state.player.has_item(guard.requires) {
        debug!("guard at {:?} {} needs {}", guard.from, guard.direction, guard.requires);
        state.emit(Category::Error, guard.denied);
        return;
    }

    if let Some(unlock) = guard.unlock {
        state.emit(Category::Narrative, unlock);
    }
    if !state.player.go(&mut state.world, guard.direction) {
        state.emit(Category::Error, "You can't go that way.");
        return;
    }
    state.emit(Category::Success, guard.granted);
    arrive(state);
}

/// Render the new room, then run whatever happens on entering it.
fn arrive(state: &mut GameState) {
    let here = state.player.location();
    info!("entered {}", here.key());
    describe_location(state);
    match here {
        LocationId::DragonLair => dragon_encounter(state),
        LocationId::TreasureRoom => victory(state),
        _ => {}
    }
}

/// Fires on every entry into the lair; beating the dragon once does not
/// stop it from waking again.
fn dragon_encounter(state: &mut GameState) {
    state.emit(Category::Error, "SUDDENLY, THE DRAGON AWAKENS!");
    state.emit(
        Category::Narrative,
        "The massive beast rears its head and breathes fire in your direction!",
    );

    if state.player.has_item("sword") {
        info!("dragon defeated");
        state.emit(Category::Success, "You quickly draw your sword and prepare for battle!");
        state.emit(Category::Success, "After an epic fight, you manage to defeat the dragon!");
        state.emit(
            Category::Narrative,
            "The dragon collapses, leaving behind a path to its treasure hoard.",
        );
        state.current_mut().add_item(world::dragon_gold());
    } else {
        info!("dragon burns an unarmed player");
        state.emit(Category::Error, "Without a weapon, you cannot defend yourself!");
        state.player.take_damage(DRAGON_DAMAGE);
        state.emit(Category::Error, "The dragon's flames sear your flesh! (-50 health)");
        if !state.player.is_alive() {
            state.emit(Category::Error, "You have been slain by the dragon!");
        }
    }
}

fn victory(state: &mut GameState) {
    info!("treasure found");
    state.emit(Category::Heading, "★★★ CONGRATULATIONS! ★★★");
    state.emit(Category::Success, "You have discovered the legendary treasure!");
    state.emit(Category::Narrative, "The room is filled with unimaginable riches!");
    state.player.set_won(true);
}

// ── Items ─────────────────────────────────────────────────────

fn look(state: &mut GameState, target: Option<&str>) {
    let Some(target) = target else {
        describe_location(state);
        return;
    };

    let description = state
        .current()
        .item(target)
        .or_else(|| state.player.inventory_item(target))
        .map(|item| item.description().to_string());

    match description {
        Some(text) => state.emit(Category::Info, text),
        None => state.emit(Category::Error, format!("You don't see a {} here.", target)),
    }
}

fn take(state: &mut GameState, name: &str) {
    if name.is_empty() {
        state.emit(Category::Error, "Take what?");
        return;
    }

    let refusal = match state.current_mut().take_item(name) {
        Ok(item) => match state.player.add_item(item) {
            Ok(()) => None,
            Err(item) => {
                state.current_mut().add_item(item);
                Some(Refusal::Fixed)
            }
        },
        Err(refusal) => Some(refusal),
    };

    match refusal {
        None => state.emit(Category::Success, format!("You take the {}.", name)),
        Some(Refusal::Absent) => {
            state.emit(Category::Error, format!("There's no {} here.", name))
        }
        Some(Refusal::Fixed) => {
            state.emit(Category::Error, format!("You can't take the {}.", name))
        }
    }
}

fn drop_item(state: &mut GameState, name: &str) {
    if name.is_empty() {
        state.emit(Category::Error, "Drop what?");
        return;
    }

    let Some(item) = state.player.inventory_item(name).cloned() else {
        state.emit(Category::Error, format!("You don't have a {}.", name));
        return;
    };
    if let Some(item) = state.player.remove_item(&item) {
        state.current_mut().add_item(item);
    }
    state.emit(Category::Success, format!("You drop the {}.", name));
}

fn use_item(state: &mut GameState, name: &str) {
    if name.is_empty() {
        state.emit(Category::Error, "Use what?");
        return;
    }

    let outcome = state.player.use_item(name);
    let category = match outcome {
        UseOutcome::Missing(_) | UseOutcome::Unusable(_) => Category::Error,
        UseOutcome::Used { healed: Some(_), .. } => Category::Success,
        UseOutcome::Used { healed: None, .. } => Category::Narrative,
    };
    state.emit(category, outcome.message());
}

// ── Tests ─────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::adventure::actions::parse;
    use crate::adventure::state::Item;
    use proptest::prelude::*;

    fn arb_line() -> impl Strategy<Value = String> {
        proptest::sample::select(vec![
            "go north", "go south", "go east", "go west", "go in", "go out",
            "look", "take key", "take sword", "take potion", "take stick",
            "take dragon gold", "take door", "drop key", "drop sword",
            "drop stick", "use potion", "use key", "inventory", "status", "dance",
        ])
        .prop_map(String::from)
    }

    fn holders(state: &GameState, item: &Item) -> usize {
        let in_rooms: usize = state
            .world
            .locations()
            .map(|l| l.items().iter().filter(|i| *i == item).count())
            .sum();
        let held = state.player.inventory().iter().filter(|i| *i == item).count();
        in_rooms + held
    }

    proptest! {
        #[test]
        fn prop_items_never_duplicated(lines in proptest::collection::vec(arb_line(), 0..60)) {
            let mut s = GameState::new();
            let key = Item::new("key", "", true);
            let sword = Item::new("sword", "", true);
            let stick = Item::new("stick", "", true);
            for line in &lines {
                if let Some(command) = parse(line) {
                    execute(&mut s, command);
                    check_game_state(&mut s);
                }
                s.outbox.clear();
                prop_assert_eq!(holders(&s, &key), 1);
                prop_assert_eq!(holders(&s, &sword), 1);
                prop_assert_eq!(holders(&s, &stick), 1);
                prop_assert!(s.player.inventory().iter().all(Item::can_take));
                prop_assert!(s.player.health() <= s.player.max_health());
            }
        }

        #[test]
        fn prop_take_then_drop_returns_item(lines in proptest::collection::vec(arb_line(), 0..30)) {
            let mut s = GameState::new();
            for line in &lines {
                if let Some(command) = parse(line) {
                    execute(&mut s, command);
                }
            }
            s.outbox.clear();
            let here = s.player.location();
            let Some(item) = s.current().items().iter().find(|i| i.can_take()).cloned() else {
                return Ok(());
            };
            let before = s.current().items().len();
            execute(&mut s, Command::Take(item.name().to_string()));
            execute(&mut s, Command::Drop(item.name().to_string()));
            prop_assert_eq!(s.player.location(), here);
            prop_assert!(s.current().has_item(item.name()));
            prop_assert_eq!(s.current().items().len(), before);
            prop_assert!(!s.player.has_item(item.name()) || holders(&s, &item) > 1);
        }
    }
}
