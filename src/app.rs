//! Browser front-end state: the session, the line being typed, and the log
//! panel's history.

use text_adventure::adventure::{Category, Event, Session, Status};

use crate::actions::{self, Action};
use crate::input::InputEvent;

/// Longest command line the input box accepts.
pub const INPUT_LIMIT: usize = 48;
/// Entries kept in the log panel.
pub const LOG_LIMIT: usize = 200;

const CONFIRM_NEW_GAME: &str = "Tap New game again to abandon this adventure and start over.";

const WELCOME: &[&str] = &[
    "═══════════════════════════════════════════",
    "    Welcome to the Adventure Game!",
    "═══════════════════════════════════════════",
];

const INTRO: &[&str] = &[
    "You are an adventurer seeking legendary treasure hidden",
    "in these mystical lands. Type commands or tap the buttons to play!",
];

/// One row group in the log panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// The command line as the player entered it.
    Echo(String),
    Event(Event),
}

pub struct App {
    pub session: Session,
    pub input: String,
    pub log: Vec<Entry>,
    /// Set by the first "New game" tap of an unfinished game; any other
    /// input clears it.
    pub confirm_new_game: bool,
}

impl App {
    pub fn new() -> Self {
        let mut app = Self {
            session: Session::new(),
            input: String::new(),
            log: Vec::new(),
            confirm_new_game: false,
        };
        app.begin();
        app
    }

    /// Apply one input event. Returns the events the session produced.
    pub fn handle_input(&mut self, event: &InputEvent) -> Vec<Event> {
        if *event != InputEvent::Click(actions::NEW_GAME) {
            self.confirm_new_game = false;
        }
        match event {
            InputEvent::Key(c) => {
                if !c.is_control() && self.input.chars().count() < INPUT_LIMIT {
                    self.input.push(*c);
                }
                Vec::new()
            }
            InputEvent::Backspace => {
                self.input.pop();
                Vec::new()
            }
            InputEvent::Enter => self.submit_input(),
            InputEvent::Click(id) => {
                match actions::resolve(*id, &self.session.inventory()) {
                    Some(Action::Command(line)) => self.run(&line),
                    Some(Action::Submit) => self.submit_input(),
                    Some(Action::Restart) => self.restart(),
                    Some(Action::NewGame) => self.new_game(),
                    None => Vec::new(),
                }
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.session.status().is_terminal()
    }

    fn submit_input(&mut self) -> Vec<Event> {
        if self.is_over() {
            return self.restart();
        }
        let line = std::mem::take(&mut self.input);
        self.run(&line)
    }

    fn run(&mut self, line: &str) -> Vec<Event> {
        let line = line.trim();
        if line.is_empty() || self.is_over() {
            return Vec::new();
        }
        self.push(Entry::Echo(line.to_string()));
        let events = self.session.submit(line);
        self.record(&events);

        let status = self.session.status();
        if status.is_terminal() {
            self.push_banner(status);
        }
        events
    }

    /// A finished game restarts at once; a running one needs a second tap.
    fn new_game(&mut self) -> Vec<Event> {
        if self.is_over() || self.confirm_new_game {
            return self.restart();
        }
        self.confirm_new_game = true;
        self.push(Entry::Event(Event::new(Category::Info, CONFIRM_NEW_GAME)));
        Vec::new()
    }

    fn restart(&mut self) -> Vec<Event> {
        self.session = Session::new();
        self.input.clear();
        self.log.clear();
        self.confirm_new_game = false;
        self.begin()
    }

    fn begin(&mut self) -> Vec<Event> {
        for line in WELCOME {
            self.push(Entry::Event(Event::new(Category::Heading, *line)));
        }
        for line in INTRO {
            self.push(Entry::Event(Event::new(Category::Narrative, *line)));
        }
        let events = self.session.start();
        self.record(&events);
        events
    }

    fn push_banner(&mut self, status: Status) {
        let category = match status {
            Status::Won => Category::Success,
            Status::Lost => Category::Error,
            _ => Category::Heading,
        };
        for line in status.banner() {
            self.push(Entry::Event(Event::new(category, *line)));
        }
    }

    fn record(&mut self, events: &[Event]) {
        for event in events {
            self.push(Entry::Event(event.clone()));
        }
    }

    fn push(&mut self, entry: Entry) {
        self.log.push(entry);
        if self.log.len() > LOG_LIMIT {
            let excess = self.log.len() - LOG_LIMIT;
            self.log.drain(..excess);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
