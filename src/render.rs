//! Drawing for the browser front-end. Pure function of `App`; the only side
//! effect besides drawing is registering click targets.

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use text_adventure::adventure::{Category, Snapshot, Status};

use crate::actions::{
    label, DIRECTIONS, DIRECTION_BASE, INVENTORY_BASE, NEW_GAME, QUICK_ACTIONS, QUICK_BASE,
    RESTART, SUBMIT,
};
use crate::app::{App, Entry};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

pub fn render(app: &App, f: &mut Frame, cs: &mut ClickState) {
    let size = f.area();
    cs.terminal_cols = size.width;
    cs.terminal_rows = size.height;
    cs.clear_targets();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(8),    // room / status / log
            Constraint::Length(3), // directions
            Constraint::Length(3), // quick actions
            Constraint::Length(3), // input line
        ])
        .split(size);

    let snap = app.session.snapshot();
    render_title(f, &snap, chunks[0]);
    if is_narrow_layout(size.width) {
        render_narrow(f, app, &snap, chunks[1], cs);
    } else {
        render_wide(f, app, &snap, chunks[1], cs);
    }
    render_directions(f, app, chunks[2], cs);
    render_quick_actions(f, app, chunks[3], cs);
    render_input(f, app, chunks[4], cs);
}

fn render_title(f: &mut Frame, snap: &Snapshot, area: Rect) {
    let (title, color) = match snap.status {
        Status::Ongoing => ("Text Adventure", Color::Cyan),
        Status::Won => ("★ VICTORY! ★", Color::Yellow),
        Status::Lost => ("☠ GAME OVER ☠", Color::Red),
        Status::Quit => ("Thanks for playing!", Color::Cyan),
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Room and status on the left, log on the right.
fn render_wide(f: &mut Frame, app: &App, snap: &Snapshot, area: Rect, cs: &mut ClickState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(inventory_height(snap)),
        ])
        .split(columns[0]);

    render_room(f, app, snap, left[0]);
    render_health(f, snap, left[1]);
    render_inventory(f, snap, left[2], cs);
    render_log(f, app, columns[1]);
}

/// Everything stacked; the log takes what is left.
fn render_narrow(f: &mut Frame, app: &App, snap: &Snapshot, area: Rect, cs: &mut ClickState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(inventory_height(snap)),
            Constraint::Min(3),
        ])
        .split(area);

    render_room(f, app, snap, rows[0]);
    render_health(f, snap, rows[1]);
    render_inventory(f, snap, rows[2], cs);
    render_log(f, app, rows[3]);
}

fn render_room(f: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    // The narrow layout only has room for the name.
    let text = if area.height > 3 {
        app.session.location_description()
    } else {
        String::new()
    };
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(format!(" {} ", snap.location_name)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_health(f: &mut Frame, snap: &Snapshot, area: Rect) {
    let health = snap.health;
    let max = snap.max_health.max(1);
    let ratio = health as f64 / max as f64;
    let color = match health * 100 / max {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", snap.player)),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", health, max));
    f.render_widget(gauge, area);
}

/// Borders plus one row per item, or one row for the empty message.
fn inventory_height(snap: &Snapshot) -> u16 {
    snap.inventory.len().max(1) as u16 + 2
}

fn render_inventory(f: &mut Frame, snap: &Snapshot, area: Rect, cs: &mut ClickState) {
    let items = &snap.inventory;
    let mut list = ClickableList::new();
    if items.is_empty() {
        list.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, item) in items.iter().enumerate() {
        list.push_clickable(
            Line::from(vec![
                Span::styled(" • ", Style::default().fg(Color::DarkGray)),
                Span::styled(item.clone(), Style::default().fg(Color::Magenta)),
            ]),
            INVENTORY_BASE + i as u16,
        );
    }
    if !snap.status.is_terminal() {
        list.register_targets(area, cs, 1, 1);
    }

    let title = format!(" Inventory ({}) ", items.len());
    let widget = Paragraph::new(list.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title),
    );
    f.render_widget(widget, area);
}

fn category_style(category: Category) -> Style {
    match category {
        Category::Heading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Category::Narrative => Style::default().fg(Color::LightYellow),
        Category::Success => Style::default().fg(Color::Green),
        Category::Error => Style::default().fg(Color::Red),
        Category::Info => Style::default().fg(Color::Gray),
    }
}

fn log_lines(app: &App) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for entry in &app.log {
        match entry {
            Entry::Echo(command) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("> {}", command),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            Entry::Event(event) => {
                let style = category_style(event.category);
                lines.extend(
                    event
                        .text
                        .split('\n')
                        .map(|part| Line::from(Span::styled(part, style))),
                );
            }
        }
    }
    lines
}

/// Newest line pinned to the bottom edge.
fn render_log(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Log ");
    let inner = block.inner(area);

    let paragraph = Paragraph::new(log_lines(app)).wrap(Wrap { trim: false });
    let total = paragraph.line_count(inner.width) as u16;
    let scroll = total.saturating_sub(inner.height);

    f.render_widget(paragraph.block(block).scroll((scroll, 0)), area);
}

fn render_directions(f: &mut Frame, app: &App, area: Rect, cs: &mut ClickState) {
    let open = app.session.directions();
    let mut bar = TabBar::new(" │ ");
    for (i, dir) in DIRECTIONS.iter().enumerate() {
        let style = if !app.is_over() && open.iter().any(|d| d == dir) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        bar = bar.tab(label(dir), style, DIRECTION_BASE + i as u16);
    }
    bar.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Go "),
    )
    .render(f, area, cs);
}

fn render_quick_actions(f: &mut Frame, app: &App, area: Rect, cs: &mut ClickState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.is_over() {
        TabBar::new(" │ ")
            .tab(
                "Play again",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                RESTART,
            )
            .block(block)
            .render(f, area, cs);
        return;
    }

    let mut bar = TabBar::new(" │ ");
    for (i, word) in QUICK_ACTIONS.iter().enumerate() {
        bar = bar.tab(
            label(word),
            Style::default().fg(Color::Cyan),
            QUICK_BASE + i as u16,
        );
    }
    let (new_game, style) = if app.confirm_new_game {
        (
            "New game?",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        ("New game", Style::default().fg(Color::DarkGray))
    };
    bar.tab(new_game, style, NEW_GAME)
        .block(block)
        .render(f, area, cs);
}

fn render_input(f: &mut Frame, app: &App, area: Rect, cs: &mut ClickState) {
    let (line, action_id) = if app.is_over() {
        (
            Line::from(Span::styled(
                "Press Enter or tap here to play again",
                Style::default().fg(Color::DarkGray),
            )),
            RESTART,
        )
    } else {
        (
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Green)),
                Span::styled(app.input.clone(), Style::default().fg(Color::White)),
                Span::styled("█", Style::default().fg(Color::Green)),
            ]),
            SUBMIT,
        )
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Command "),
    );
    f.render_widget(widget, area);
    cs.add_click_target(area, action_id);
}
