//! Application state shared by the terminal components.
//!
//! `App` owns the single [`NavigationPanelController`] instance, the menu built
//! for the current viewer and the route the host shell considers active.
//! Components mutate it through their event handlers and report host-level
//! side effects as [`Effect`]s.

use plantnxt_nav::{NavigationEntry, NavigationMenu, NavigationPanelController, Role, build_menu};
use tracing::info;

use crate::ui::components::sidebar::SidebarState;

/// Host-level side effects requested by components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    /// Route to the given destination.
    Navigate(String),
    /// Leave the event loop.
    Quit,
}

#[derive(Debug)]
pub(crate) struct App {
    /// Grouped, role-filtered menu; immutable for the lifetime of the app.
    pub menu: NavigationMenu,
    pub panel: NavigationPanelController,
    pub sidebar: SidebarState,
    pub role: Option<Role>,
    /// Route most recently handed to the host shell.
    pub active_destination: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(entries: &[NavigationEntry], role: Option<Role>, panel: NavigationPanelController) -> Self {
        let menu = build_menu(entries, role);
        let active_destination = menu.entries().next().map(|entry| entry.destination.clone());
        Self {
            menu,
            panel,
            sidebar: SidebarState::default(),
            role,
            active_destination,
            should_quit: false,
        }
    }

    /// The menu entry matching the active route, if it is visible to this viewer.
    pub fn active_entry(&self) -> Option<&NavigationEntry> {
        self.active_destination
            .as_deref()
            .and_then(|destination| self.menu.find_by_destination(destination))
    }

    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(destination) => {
                    info!(%destination, "navigating");
                    self.active_destination = Some(destination);
                }
                Effect::Quit => self.should_quit = true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use plantnxt_nav::default_catalog;

    use super::*;

    #[test]
    fn first_visible_entry_is_active_initially() {
        let app = App::new(&default_catalog(), Some(Role::PlantHead), NavigationPanelController::new());
        assert_eq!(app.active_destination.as_deref(), Some("/oee"));
        assert_eq!(app.active_entry().map(|entry| entry.id.as_str()), Some("oee"));
    }

    #[test]
    fn navigate_effect_updates_active_route() {
        let mut app = App::new(&default_catalog(), Some(Role::Ceo), NavigationPanelController::new());
        app.apply_effects(vec![Effect::Navigate("/alerts".to_string())]);
        assert_eq!(app.active_entry().map(|entry| entry.label.as_str()), Some("Alerts"));

        app.apply_effects(vec![Effect::Quit]);
        assert!(app.should_quit);
    }
}
