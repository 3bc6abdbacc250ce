//! Scripted walkthrough: plays a fixed list of commands through the same
//! session the other front-ends use and prints every step.

use std::io::{self, Write};

use log::info;
use text_adventure::adventure::{Session, DEMO_SCRIPT};

fn main() -> io::Result<()> {
    env_logger::init();
    let mut out = io::stdout().lock();

    writeln!(out, "═══════════════════════════════════════════")?;
    writeln!(out, "    Text-Based Adventure Game DEMO")?;
    writeln!(out, "═══════════════════════════════════════════")?;
    writeln!(out)?;

    let mut session = Session::new();
    writeln!(out, "─── STEP 1: Starting in the Mysterious Forest ───")?;
    for event in session.start() {
        writeln!(out, "{}", event.text)?;
    }

    for (step, (title, commands)) in DEMO_SCRIPT.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "─── STEP {}: {} ───", step + 2, title)?;
        for command in commands.iter() {
            writeln!(out, "> {}", command)?;
            for event in session.submit(command) {
                writeln!(out, "{}", event.text)?;
            }
        }
        if session.status().is_terminal() {
            info!("demo reached {:?} at step {}", session.status(), step + 2);
            break;
        }
    }

    writeln!(out)?;
    writeln!(out, "═══════════════════════════════════════════")?;
    for line in session.status().banner() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "           DEMO COMPLETE!")?;
    writeln!(out, "═══════════════════════════════════════════")?;
    Ok(())
}
