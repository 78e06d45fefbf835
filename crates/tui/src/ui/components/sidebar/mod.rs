//! Collapsible navigation sidebar component.
//!
//! Terminal rendition of the PlantNxt navigation panel. It supports:
//! - An icon-only collapsed layout and a labeled, grouped expanded layout
//! - Hover expansion derived from pointer enter/leave across the panel area
//! - A pin control, visible while expanded, that keeps the panel open
//! - Keyboard navigation (Up/Down/Home/End/Enter, `p` to toggle the pin)
//!
//! Expansion is owned by [`plantnxt_nav::NavigationPanelController`]; this
//! component only feeds it hover and pin input and draws whatever state it
//! reports. Activating an entry yields an `Effect::Navigate` for the host.

pub(crate) mod layout;
mod sidebar_component;
mod state;

pub(crate) use sidebar_component::SidebarComponent;
pub(crate) use state::SidebarState;
