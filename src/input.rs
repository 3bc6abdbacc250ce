//! Browser input: normalized events, click targets and pixel → cell conversion.
//!
//! Kept free of `web_sys` so the hit-testing can be unit tested.

use ratzilla::ratatui::layout::Rect;

/// Columns below which the layout stacks panels vertically.
pub const NARROW_WIDTH: u16 = 60;

/// Input normalized from keyboard, mouse and touch.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable character typed into the command line.
    Key(char),
    Backspace,
    Enter,
    /// A tap on a registered target, identified by its action ID
    /// (see `actions`).
    Click(u16),
}

/// A clickable region in terminal cell coordinates.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Targets registered by the last draw, shared with the mouse handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a one-row target spanning `area`, if `row` lies inside it.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Register one target per label of a horizontal bar.
    ///
    /// `labels` holds `(display_width, action_id)` for each padded label.
    /// Each target covers its label plus half of the separators around it;
    /// the first and last reach the edges of the bar.
    pub fn register_tab_targets(
        &mut self,
        labels: &[(u16, u16)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = labels.len();
        if n == 0 || total_width == 0 {
            return;
        }

        let mut starts = Vec::with_capacity(n);
        let mut cursor = 0u16;
        for (i, &(w, _)) in labels.iter().enumerate() {
            if i > 0 {
                cursor += separator_width;
            }
            starts.push(cursor);
            cursor += w;
        }
        let end = |i: usize| starts[i] + labels[i].0;

        for (i, &(_, action_id)) in labels.iter().enumerate() {
            let left = if i == 0 {
                0
            } else {
                end(i - 1) + (starts[i] - end(i - 1)) / 2
            };
            let right = if i == n - 1 {
                total_width
            } else {
                end(i) + (starts[i + 1] - end(i)) / 2
            };

            let width = right.min(total_width).saturating_sub(left);
            if width > 0 {
                self.add_click_target(Rect::new(x + left, y, width, height), action_id);
            }
        }
    }

    /// Action ID under a cell. Later targets sit on top of earlier ones.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action_id)
        })
    }
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_narrow_layout(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// Map a pixel offset along one axis of the grid to a cell index.
/// `None` outside the grid or for degenerate sizes.
fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}

/// `click_y` is relative to the grid container's top edge.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    pixel_to_cell(click_y, grid_height, terminal_rows)
}

/// `click_x` is relative to the grid container's left edge.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    pixel_to_cell(click_x, grid_width, terminal_cols)
}
