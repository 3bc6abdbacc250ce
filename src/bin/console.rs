//! Console front-end: read commands from stdin, print what happens.

use std::io::{self, BufRead, Write};

use log::debug;
use text_adventure::adventure::{Event, Session, Status};

const RULE: &str = "═══════════════════════════════════════════";

/// Next line of input, decoded lossily so stray bytes become ordinary
/// (unrecognised) input. `None` at end of input.
fn read_command(input: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

fn print_events(out: &mut impl Write, events: &[Event]) -> io::Result<()> {
    for event in events {
        writeln!(out, "{}", event.text)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut stdin = io::stdin().lock();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "    Welcome to the Text-Based Adventure!")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "You are an adventurer seeking the legendary treasure hidden")?;
    writeln!(out, "somewhere in these mystical lands. Your quest will take you")?;
    writeln!(out, "through forests, villages, caves, and ancient towers.")?;
    writeln!(out)?;
    writeln!(out, "Type 'help' for the list of commands.")?;
    writeln!(out)?;

    let mut session = Session::new();
    let events = session.start();
    print_events(&mut out, &events)?;

    let mut buf = Vec::new();
    while !session.status().is_terminal() {
        write!(out, "\n> ")?;
        out.flush()?;

        let Some(line) = read_command(&mut stdin, &mut buf)? else {
            debug!("end of input");
            break;
        };
        let events = session.submit(&line);
        print_events(&mut out, &events)?;
    }

    let status = match session.status() {
        Status::Ongoing => Status::Quit,
        other => other,
    };
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    for line in status.banner() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}
