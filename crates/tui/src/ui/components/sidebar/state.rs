use ratatui::layout::{Position, Rect};

use super::layout::RowTarget;

/// Layout and interaction state for the sidebar.
///
/// Expansion itself lives in the panel controller; this only tracks what the
/// terminal host needs for hit testing and keyboard selection.
#[derive(Debug, Default, Clone)]
pub(crate) struct SidebarState {
    /// Keyboard cursor as an index into the menu's flattened entries.
    pub selected_index: Option<usize>,
    /// Last rendered outer area; the hover hit region.
    pub last_area: Rect,
    /// Area rows were drawn into (inside the borders).
    pub rows_area: Rect,
    /// First row drawn, when the menu is taller than the panel.
    pub row_offset: usize,
    /// Click target for every row, in layout order.
    pub row_targets: Vec<RowTarget>,
    /// Whether the pointer was inside `last_area` at the previous mouse event.
    pub pointer_inside: bool,
}

impl SidebarState {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.last_area.contains(Position::new(column, row))
    }

    /// Resolves a click position to the row target under it.
    pub fn target_at(&self, column: u16, row: u16) -> RowTarget {
        if !self.rows_area.contains(Position::new(column, row)) {
            return RowTarget::None;
        }
        let index = self.row_offset + usize::from(row - self.rows_area.y);
        self.row_targets.get(index).copied().unwrap_or(RowTarget::None)
    }

    /// Moves the keyboard cursor, wrapping at both ends.
    pub fn cycle_selection(&mut self, forward: bool, entry_count: usize) {
        if entry_count == 0 {
            self.selected_index = None;
            return;
        }
        let next = match self.selected_index {
            None if forward => 0,
            None => entry_count - 1,
            Some(current) if forward => (current + 1) % entry_count,
            Some(current) => (current + entry_count - 1) % entry_count,
        };
        self.selected_index = Some(next);
    }

    /// Forgets hit regions when the sidebar is not drawn (closed drawer).
    pub fn clear_layout(&mut self) {
        self.last_area = Rect::default();
        self.rows_area = Rect::default();
        self.row_targets.clear();
        self.row_offset = 0;
    }
}

/// Scroll offset keeping `focus_row` inside a viewport of `height` rows.
pub(crate) fn scroll_offset(row_count: usize, height: usize, focus_row: Option<usize>) -> usize {
    if row_count <= height || height == 0 {
        return 0;
    }
    let max_offset = row_count - height;
    match focus_row {
        Some(row) if row >= height => (row + 1 - height).min(max_offset),
        _ => 0,
    }
}
