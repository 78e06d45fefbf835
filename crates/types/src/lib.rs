//! Shared type definitions for the PlantNxt navigation panel.
//!
//! The types here are deliberately free of behaviour that depends on a host:
//! roles gate visibility, entries describe menu items, and [`PanelState`]
//! captures the derived expansion of the collapsible panel. The controller and
//! menu builder live in `plantnxt-nav`.

mod navigation;
mod panel;
mod role;

pub use navigation::{NavigationEntry, NavigationGroup, NavigationMenu};
pub use panel::{ExpansionState, PanelState};
pub use role::{ParseRoleError, Role};
