//! # PlantNxt Terminal Host
//!
//! A terminal rendition of the PlantNxt application shell: the collapsible
//! navigation panel beside a content pane showing the active route.
//!
//! ## Key Features
//!
//! - Icon-only collapsed panel that expands while the pointer is over it
//! - Pin control that keeps the panel open and is remembered across sessions
//! - Role-filtered, grouped menu built by `plantnxt_nav::build_menu`
//! - Drawer layout for narrow terminals
//!
//! ## Architecture
//!
//! The sidebar and content pane are components that handle their own input and
//! rendering while sharing an `App`. All expansion decisions are made by a
//! single `NavigationPanelController`; the terminal layer only reports pointer
//! and pin input to it.

mod app;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use plantnxt_nav::{NavigationEntry, NavigationPanelController, PersistPin, Role};
use plantnxt_util::UserPreferences;
use tracing::info;

use crate::app::App;
use crate::ui::main_component::MainView;
use crate::ui::theme::Theme;

/// Inputs for [`run`].
#[derive(Debug)]
pub struct RunOptions {
    /// Full catalog; filtered for `role` before display.
    pub entries: Vec<NavigationEntry>,
    /// Viewer role. `None` shows only unrestricted entries.
    pub role: Option<Role>,
    /// Source of the initial pin state and sink for pin changes.
    pub preferences: Arc<UserPreferences>,
}

/// Runs the terminal host until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or the event
/// loop fails to read input or draw.
pub fn run(options: RunOptions) -> Result<()> {
    let RunOptions {
        entries,
        role,
        preferences,
    } = options;

    let mut panel = NavigationPanelController::from_store(&preferences);
    panel.subscribe(PersistPin(Arc::clone(&preferences)));

    let app = App::new(&entries, role, panel);
    info!(
        role = ?role,
        entries = app.menu.entry_count(),
        pinned = app.panel.state().pinned(),
        "starting terminal host"
    );
    ui::runtime::run_app(app, MainView::new(Theme::default()))
}
