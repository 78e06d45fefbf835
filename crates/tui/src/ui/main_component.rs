//! Top-level view: sidebar beside the route content.
//!
//! On narrow terminals the sidebar is not laid out beside the content at all.
//! It becomes a drawer toggled with `m`, drawn expanded over the content and
//! dismissed on navigation, `Esc`, or a click outside it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use plantnxt_nav::ExpansionState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;

use crate::app::{App, Effect};
use crate::ui::components::sidebar::layout::{EXPANDED_WIDTH, panel_width};
use crate::ui::components::{Component, ContentComponent, SidebarComponent};
use crate::ui::theme::Theme;

/// Terminals narrower than this use the drawer instead of a side-by-side panel.
pub(crate) const DRAWER_BREAKPOINT: u16 = 60;

#[derive(Debug, Default)]
pub(crate) struct MainView {
    sidebar: SidebarComponent,
    content: ContentComponent,
    /// Whether the last render used the drawer layout.
    compact: bool,
}

impl MainView {
    pub fn new(theme: Theme) -> Self {
        Self {
            sidebar: SidebarComponent::new(theme.clone()),
            content: ContentComponent::new(theme),
            compact: false,
        }
    }

    fn toggle_drawer(app: &mut App) {
        if app.panel.is_drawer_open() {
            app.panel.close_drawer();
        } else {
            app.panel.open_drawer();
        }
    }

    /// The sidebar is not on screen; drop its hit regions and end any hover.
    fn hide_sidebar(app: &mut App) {
        app.sidebar.clear_layout();
        if app.sidebar.pointer_inside {
            app.sidebar.pointer_inside = false;
            app.panel.set_hovered(false);
        }
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![Effect::Quit],
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Esc if app.panel.is_drawer_open() => {
                app.panel.close_drawer();
                Vec::new()
            }
            KeyCode::Esc => vec![Effect::Quit],
            KeyCode::Char('m') if self.compact => {
                Self::toggle_drawer(app);
                Vec::new()
            }
            _ => self.sidebar.handle_key_events(app, key),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let outside = !app.sidebar.contains(mouse.column, mouse.row);
        if self.compact
            && app.panel.is_drawer_open()
            && outside
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
        {
            app.panel.close_drawer();
        }
        self.sidebar.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.compact = area.width < DRAWER_BREAKPOINT;

        if !self.compact {
            let [sidebar, content] =
                Layout::horizontal([Constraint::Length(panel_width(app.panel.expansion())), Constraint::Min(0)])
                    .areas(area);
            self.sidebar.render(frame, sidebar, app);
            self.content.render(frame, content, app);
            return;
        }

        self.content.render(frame, area, app);
        if app.panel.is_drawer_open() {
            let drawer = Rect {
                width: EXPANDED_WIDTH.min(area.width),
                ..area
            };
            frame.render_widget(Clear, drawer);
            self.sidebar.render_with(frame, drawer, app, ExpansionState::Expanded);
        } else {
            Self::hide_sidebar(app);
        }
    }
}
