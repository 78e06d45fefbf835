//! Pure row layout for the sidebar.
//!
//! Rows are computed from the menu and the controller's [`PanelState`] without
//! touching the terminal, so the icon-only and labeled layouts can be tested
//! directly. Each row carries the hit target a click on it resolves to.

use plantnxt_nav::{ExpansionState, NavigationMenu, PanelState};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::Theme;

/// Outer width (including borders) of the icon-only layout.
pub(crate) const COLLAPSED_WIDTH: u16 = 6;
/// Outer width (including borders) of the labeled layout.
pub(crate) const EXPANDED_WIDTH: u16 = 34;

const BRAND_MARK: &str = "P";
const BRAND_NAME: &str = "PlantNxt";
const PIN_LABEL: &str = "[ ] pin";
const UNPIN_LABEL: &str = "[x] pinned";

/// What a click on a row activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowTarget {
    None,
    Pin,
    /// Index into the menu's flattened entry order.
    Entry(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SidebarRow {
    pub line: Line<'static>,
    pub target: RowTarget,
}

impl SidebarRow {
    fn new(line: Line<'static>, target: RowTarget) -> Self {
        Self { line, target }
    }

    fn blank() -> Self {
        Self::new(Line::default(), RowTarget::None)
    }
}

pub(crate) fn panel_width(expansion: ExpansionState) -> u16 {
    match expansion {
        ExpansionState::Collapsed => COLLAPSED_WIDTH,
        ExpansionState::Expanded => EXPANDED_WIDTH,
    }
}

/// Inputs for [`build_rows`].
pub(crate) struct RowContext<'a> {
    pub menu: &'a NavigationMenu,
    pub panel: PanelState,
    /// Layout to draw; the drawer always draws expanded regardless of `panel`.
    pub expansion: ExpansionState,
    pub active_destination: Option<&'a str>,
    pub selected_index: Option<usize>,
    /// Width available inside the borders.
    pub inner_width: u16,
    pub theme: &'a Theme,
}

pub(crate) fn build_rows(ctx: &RowContext<'_>) -> Vec<SidebarRow> {
    let width = usize::from(ctx.inner_width);
    let expanded = ctx.expansion.is_expanded();
    let mut rows = Vec::new();

    let brand = if expanded { format!("{BRAND_MARK} {BRAND_NAME}") } else { BRAND_MARK.to_string() };
    rows.push(SidebarRow::new(
        Line::from(Span::styled(fit(&brand, width), ctx.theme.group_header_style())),
        RowTarget::None,
    ));
    if ctx.panel.shows_pin_control() && expanded {
        let label = if ctx.panel.pinned() { UNPIN_LABEL } else { PIN_LABEL };
        rows.push(SidebarRow::new(
            Line::from(Span::styled(fit(label, width), ctx.theme.pin_style(ctx.panel.pinned()))),
            RowTarget::Pin,
        ));
    }

    let mut index = 0;
    for group in &ctx.menu.groups {
        rows.push(SidebarRow::blank());
        if expanded {
            rows.push(SidebarRow::new(
                Line::from(Span::styled(fit(&group.name.to_uppercase(), width), ctx.theme.muted_style())),
                RowTarget::None,
            ));
        }
        for entry in &group.entries {
            let mut line = if expanded {
                expanded_entry_line(&entry.icon, &entry.label, entry.phase.as_deref(), width, ctx.theme)
            } else {
                Line::from(Span::raw(center(&entry.icon, width)))
            };
            if ctx.active_destination == Some(entry.destination.as_str()) {
                line = line.style(ctx.theme.active_style());
            } else if ctx.selected_index == Some(index) {
                line = line.style(ctx.theme.selected_style());
            }
            rows.push(SidebarRow::new(line, RowTarget::Entry(index)));
            index += 1;
        }
    }

    rows
}

fn expanded_entry_line(icon: &str, label: &str, phase: Option<&str>, width: usize, theme: &Theme) -> Line<'static> {
    let icon = fit(icon, 2);
    let badge = phase.map(short_phase).unwrap_or_default();
    // icon, gap, label, gap, badge
    let label_width = width.saturating_sub(3 + badge.width() + usize::from(!badge.is_empty()));
    let mut spans = vec![
        Span::styled(icon, theme.muted_style()),
        Span::raw(" "),
        Span::styled(fit(label, label_width), theme.text_style()),
    ];
    if !badge.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(badge, theme.badge_style()));
    }
    Line::from(spans)
}

/// "Phase 2" -> "P2"; anything else is kept as written.
fn short_phase(phase: &str) -> String {
    match phase.strip_prefix("Phase ") {
        Some(number) => format!("P{number}"),
        None => phase.to_string(),
    }
}

/// Truncates to `width` display columns (with an ellipsis) or pads with spaces.
pub(crate) fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{text}{}", " ".repeat(width - text.width()));
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out.push_str(&" ".repeat(width - 1 - used));
    out
}

fn center(text: &str, width: usize) -> String {
    let text = fit(text.trim(), width.min(text.trim().width()));
    let left = width.saturating_sub(text.width()) / 2;
    fit(&format!("{}{}", " ".repeat(left), text), width)
}
