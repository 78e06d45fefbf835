//! Route content pane.
//!
//! Stands in for the page the host shell would mount at the active route: it
//! shows which entry is active, the panel state the controller reports and
//! key hints for the terminal host.

use plantnxt_nav::ExpansionState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::Theme;

const HINTS: &[(&str, &str)] = &[
    ("↑/↓", " select  "),
    ("Enter", " open  "),
    ("p", " pin  "),
    ("m", " menu  "),
    ("q", " quit"),
];

#[derive(Debug, Default)]
pub(crate) struct ContentComponent {
    theme: Theme,
}

impl ContentComponent {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn body_lines(&self, app: &App) -> Vec<Line<'static>> {
        let theme = &self.theme;
        let mut lines = Vec::new();

        match app.active_entry() {
            Some(entry) => {
                lines.push(Line::from(Span::styled(entry.label.clone(), theme.group_header_style())));
                lines.push(Line::from(Span::styled(entry.destination.clone(), theme.muted_style())));
                lines.push(Line::default());
                if !entry.description.is_empty() {
                    lines.push(Line::from(Span::styled(entry.description.clone(), theme.text_style())));
                }
                if let Some(phase) = &entry.phase {
                    lines.push(Line::from(Span::styled(phase.clone(), theme.badge_style())));
                }
            }
            None if app.menu.is_empty() => {
                lines.push(Line::from(Span::styled(
                    "No navigation entries are available for this role.",
                    theme.muted_style(),
                )));
            }
            None => {
                lines.push(Line::from(Span::styled("Select a destination.", theme.muted_style())));
            }
        }

        lines.push(Line::default());
        let state = app.panel.state();
        let layout = match state.expansion() {
            ExpansionState::Collapsed => "collapsed",
            ExpansionState::Expanded => "expanded",
        };
        lines.push(Line::from(vec![
            Span::styled("panel ", theme.muted_style()),
            Span::styled(layout, theme.text_style()),
            Span::styled(format!("  pinned={} hovered={}", state.pinned(), state.hovered()), theme.muted_style()),
        ]));
        let role = app.role.map_or_else(|| "all roles".to_string(), |role| role.to_string());
        lines.push(Line::from(vec![
            Span::styled("viewing as ", theme.muted_style()),
            Span::styled(role, theme.text_style()),
        ]));

        // Collapsed rows only show icons, so surface the selected entry's tooltip here.
        if !state.is_expanded()
            && let Some(entry) = app.sidebar.selected_index.and_then(|index| app.menu.entries().nth(index))
        {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", entry.label), theme.text_style()),
                Span::styled(entry.tooltip(), theme.muted_style()),
            ]));
        }

        lines
    }
}

impl Component for ContentComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let block = self.theme.block(Some("PlantNxt"), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        frame.render_widget(Paragraph::new(self.body_lines(app)).wrap(Wrap { trim: false }), body);
        frame.render_widget(Paragraph::new(Line::from(self.theme.hint_spans(HINTS))), footer);
    }
}
