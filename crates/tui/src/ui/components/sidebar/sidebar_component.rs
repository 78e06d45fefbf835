use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use plantnxt_nav::ExpansionState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use super::layout::{RowContext, RowTarget, build_rows};
use super::state::scroll_offset;
use crate::app::{App, Effect};
use crate::ui::components::Component;
use crate::ui::theme::Theme;

/// Renders the collapsible navigation panel and translates terminal input into
/// controller calls.
///
/// Pointer enter/leave is derived from consecutive mouse events against the
/// last rendered area, so the controller sees exactly one `set_hovered` per
/// crossing, like DOM enter/leave events.
#[derive(Debug, Default)]
pub(crate) struct SidebarComponent {
    theme: Theme,
}

impl SidebarComponent {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Draws the panel with an explicit layout; the small-screen drawer always
    /// uses the expanded one.
    pub fn render_with(&mut self, frame: &mut Frame, rect: Rect, app: &mut App, expansion: ExpansionState) {
        let block = self.theme.block(None, app.panel.state().pinned());
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let rows = build_rows(&RowContext {
            menu: &app.menu,
            panel: app.panel.state(),
            expansion,
            active_destination: app.active_destination.as_deref(),
            selected_index: app.sidebar.selected_index,
            inner_width: inner.width,
            theme: &self.theme,
        });

        let focus_row = app
            .sidebar
            .selected_index
            .and_then(|selected| rows.iter().position(|row| row.target == RowTarget::Entry(selected)));
        let offset = scroll_offset(rows.len(), usize::from(inner.height), focus_row);

        let targets: Vec<RowTarget> = rows.iter().map(|row| row.target).collect();
        let lines: Vec<_> = rows.into_iter().skip(offset).map(|row| row.line).collect();
        frame.render_widget(Paragraph::new(lines), inner);

        let sidebar = &mut app.sidebar;
        sidebar.last_area = rect;
        sidebar.rows_area = inner;
        sidebar.row_offset = offset;
        sidebar.row_targets = targets;
    }

    fn activate(app: &mut App, index: usize) -> Vec<Effect> {
        let Some(entry) = app.menu.entries().nth(index).cloned() else {
            return Vec::new();
        };
        app.sidebar.selected_index = Some(index);
        let destination = app.panel.activate(&entry).to_string();
        vec![Effect::Navigate(destination)]
    }

    fn update_hover(app: &mut App, column: u16, row: u16) {
        let inside = app.sidebar.contains(column, row);
        if inside != app.sidebar.pointer_inside {
            app.sidebar.pointer_inside = inside;
            app.panel.set_hovered(inside);
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let entry_count = app.menu.entry_count();
        match key.code {
            KeyCode::Char('p') => {
                app.panel.toggle_pin();
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.sidebar.cycle_selection(true, entry_count);
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.sidebar.cycle_selection(false, entry_count);
                Vec::new()
            }
            KeyCode::Home => {
                app.sidebar.selected_index = (entry_count > 0).then_some(0);
                Vec::new()
            }
            KeyCode::End => {
                app.sidebar.selected_index = entry_count.checked_sub(1);
                Vec::new()
            }
            KeyCode::Enter => match app.sidebar.selected_index {
                Some(index) => Self::activate(app, index),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Self::update_hover(app, mouse.column, mouse.row);
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => {
                Self::update_hover(app, mouse.column, mouse.row);
                match app.sidebar.target_at(mouse.column, mouse.row) {
                    RowTarget::Pin => {
                        app.panel.toggle_pin();
                        Vec::new()
                    }
                    RowTarget::Entry(index) => Self::activate(app, index),
                    RowTarget::None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let expansion = app.panel.expansion();
        self.render_with(frame, rect, app, expansion);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseEvent};
    use plantnxt_nav::{NavigationPanelController, PanelState, Role, default_catalog};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::ui::components::sidebar::layout::{COLLAPSED_WIDTH, EXPANDED_WIDTH, panel_width};

    fn app() -> App {
        App::new(&default_catalog(), Some(Role::Cfo), NavigationPanelController::new())
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(component: &mut SidebarComponent, app: &mut App) {
        let width = panel_width(app.panel.expansion());
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).expect("terminal");
        terminal
            .draw(|frame| component.render(frame, Rect::new(0, 0, width, 40), app))
            .expect("draw");
    }

    #[test]
    fn pointer_crossing_drives_hover_once_per_edge() {
        let mut component = SidebarComponent::default();
        let mut app = app();
        draw(&mut component, &mut app);
        assert_eq!(app.sidebar.last_area.width, COLLAPSED_WIDTH);

        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, 2, 5));
        assert_eq!(app.panel.state(), PanelState::new(false, true));
        draw(&mut component, &mut app);
        assert_eq!(app.sidebar.last_area.width, EXPANDED_WIDTH);

        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, 60, 5));
        assert_eq!(app.panel.state(), PanelState::new(false, false));
    }

    #[test]
    fn unpin_click_collapses_even_with_pointer_over_panel() {
        let mut component = SidebarComponent::default();
        let mut app = app();
        draw(&mut component, &mut app);
        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, 2, 2));
        draw(&mut component, &mut app);

        let pin_row = app
            .sidebar
            .row_targets
            .iter()
            .position(|target| *target == RowTarget::Pin)
            .expect("pin row while hovered") as u16;
        let y = app.sidebar.rows_area.y + pin_row;

        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 2, y));
        assert!(app.panel.state().pinned());
        draw(&mut component, &mut app);

        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 2, y));
        assert_eq!(app.panel.state(), PanelState::new(false, false));
    }

    #[test]
    fn clicking_an_entry_navigates() {
        let mut component = SidebarComponent::default();
        let mut app = app();
        app.panel.toggle_pin();
        draw(&mut component, &mut app);

        let (row, index) = app
            .sidebar
            .row_targets
            .iter()
            .enumerate()
            .find_map(|(row, target)| match target {
                RowTarget::Entry(index) if *index == 2 => Some((row as u16, *index)),
                _ => None,
            })
            .expect("third entry row");
        let y = app.sidebar.rows_area.y + row;
        let effects = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 3, y));

        let expected = app.menu.entries().nth(index).map(|entry| entry.destination.clone()).expect("entry");
        assert_eq!(effects, vec![Effect::Navigate(expected)]);
        assert_eq!(app.sidebar.selected_index, Some(2));
    }

    #[test]
    fn keyboard_pin_and_enter() {
        let mut component = SidebarComponent::default();
        let mut app = app();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        component.handle_key_events(&mut app, key(KeyCode::Char('p')));
        assert!(app.panel.state().is_expanded());

        component.handle_key_events(&mut app, key(KeyCode::Down));
        component.handle_key_events(&mut app, key(KeyCode::Down));
        let effects = component.handle_key_events(&mut app, key(KeyCode::Enter));
        let second = app.menu.entries().nth(1).map(|entry| entry.destination.clone()).expect("entry");
        assert_eq!(effects, vec![Effect::Navigate(second)]);

        component.handle_key_events(&mut app, key(KeyCode::End));
        assert_eq!(app.sidebar.selected_index, Some(app.menu.entry_count() - 1));
    }
}
