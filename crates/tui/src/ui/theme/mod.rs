//! Semantic colors and style builders for the terminal host.

mod nord;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub(crate) struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent_primary: Color,
    pub accent_secondary: Color,
    /// Phase badges next to entry labels.
    pub badge: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

#[derive(Debug, Clone)]
pub(crate) struct Theme {
    roles: ThemeRoles,
}

impl Default for Theme {
    fn default() -> Self {
        Self { roles: nord::roles() }
    }
}

impl Theme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.roles.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.roles.text_muted)
    }

    pub fn group_header_style(&self) -> Style {
        Style::default().fg(self.roles.accent_secondary).add_modifier(Modifier::BOLD)
    }

    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.roles.badge)
    }

    /// Active route: inverted accent, matching the highlighted link of the web layout.
    pub fn active_style(&self) -> Style {
        Style::default()
            .bg(self.roles.accent_primary)
            .fg(self.roles.background)
            .add_modifier(Modifier::BOLD)
    }

    /// Keyboard selection cursor.
    pub fn selected_style(&self) -> Style {
        Style::default().bg(self.roles.selection_bg).fg(self.roles.selection_fg)
    }

    pub fn pin_style(&self, pinned: bool) -> Style {
        if pinned {
            Style::default().fg(self.roles.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            self.muted_style()
        }
    }

    pub fn panel_style(&self) -> Style {
        Style::default().bg(self.roles.surface).fg(self.roles.text)
    }

    /// Bordered block with the theme's panel background and an optional bold title.
    pub fn block<'a>(&self, title: Option<&'a str>, highlighted: bool) -> Block<'a> {
        let border_color = if highlighted { self.roles.accent_primary } else { self.roles.border };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(border_color))
            .style(self.panel_style());
        if let Some(title) = title {
            block = block.title(Span::styled(title, self.text_style().add_modifier(Modifier::BOLD)));
        }
        block
    }

    /// Builds `key description` hint spans for the footer.
    pub fn hint_spans<'a>(&self, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
        hints
            .iter()
            .flat_map(|(key, description)| {
                [
                    Span::styled(*key, Style::default().fg(self.roles.accent_primary)),
                    Span::styled(*description, self.muted_style()),
                ]
            })
            .collect()
    }
}
