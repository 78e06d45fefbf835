//! # PlantNxt navigation core
//!
//! Host-independent logic behind the collapsible navigation panel:
//!
//! - [`NavigationPanelController`] derives the panel's expanded/collapsed layout
//!   from pointer hover and an explicit pin toggle.
//! - [`build_menu`] turns the static entry list into the grouped, role-filtered
//!   menu a renderer draws.
//! - [`default_catalog`] and [`load_catalog`] supply that entry list, validated
//!   once at startup.
//!
//! Everything here is synchronous and single-threaded. Persistence and
//! rendering are collaborators reached through [`PinStore`] and
//! [`PanelObserver`].

mod catalog;
mod config;
mod controller;
mod menu;

pub use catalog::default_catalog;
pub use config::{CatalogError, CatalogFile, CatalogFormat, RawEntry, load_catalog, parse_catalog, validate_catalog};
pub use controller::{NavigationPanelController, PanelChange, PanelInput, PanelObserver, PinStore, PersistPin, transition};
pub use menu::build_menu;
pub use plantnxt_types::{ExpansionState, NavigationEntry, NavigationGroup, NavigationMenu, PanelState, Role};
