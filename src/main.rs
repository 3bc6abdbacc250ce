mod actions;
mod app;
mod input;
mod render;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::App;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use text_adventure::adventure::{Event, Snapshot};

/// Convert a mouse position to a terminal cell using the grid container's
/// bounding rect.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let document = web_sys::window()?.document()?;

    // DomBackend renders into a <div> directly under <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Mirror a command's events, then the resulting status panel, to the
/// devtools console as JSON records.
fn log_turn(events: &[Event], snapshot: &Snapshot) {
    if events.is_empty() {
        return;
    }
    for event in events {
        if let Ok(json) = serde_json::to_string(event) {
            web_sys::console::log_1(&json.into());
        }
    }
    if let Ok(json) = serde_json::to_string(snapshot) {
        web_sys::console::log_1(&json.into());
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(App::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action_id = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                    .and_then(|(col, row)| cs.hit_test(col, row))
            };

            if let Some(id) = action_id {
                let mut app = app.borrow_mut();
                let events = app.handle_input(&InputEvent::Click(id));
                log_turn(&events, &app.session.snapshot());
            }
        }
    });

    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c),
                KeyCode::Backspace => InputEvent::Backspace,
                KeyCode::Enter => InputEvent::Enter,
                _ => return,
            };
            let mut app = app.borrow_mut();
            let events = app.handle_input(&event);
            log_turn(&events, &app.session.snapshot());
        }
    });

    terminal.draw_web(move |f| {
        let app = app.borrow();
        let mut cs = click_state.borrow_mut();
        render::render(&app, f, &mut cs);
    });

    Ok(())
}
