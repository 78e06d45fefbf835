use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Role;

/// A single item in the navigation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Identifier, unique within the full entry list.
    pub id: String,
    /// Human-friendly label shown in the expanded layout.
    pub label: String,
    /// Opaque route identifier handed to the router on activation.
    pub destination: String,
    /// One-line summary of the destination.
    #[serde(default)]
    pub description: String,
    /// Section name; first-seen order decides section order.
    pub group: String,
    /// Roles allowed to see the entry. `None` means visible to everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_roles: Option<BTreeSet<Role>>,
    /// Short glyph used by the collapsed, icon-only layout.
    #[serde(default)]
    pub icon: String,
    /// Release badge rendered next to the label (e.g. "Phase 1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

impl NavigationEntry {
    /// Creates an entry visible to everyone with no description, icon or phase.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        destination: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            destination: destination.into(),
            description: String::new(),
            group: group.into(),
            required_roles: None,
            icon: String::new(),
            phase: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// Restricts the entry to the given roles.
    pub fn with_required_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.required_roles = Some(roles.into_iter().collect());
        self
    }

    /// Whether a viewer with `role` (or no role at all) may see this entry.
    pub fn is_visible_to(&self, role: Option<Role>) -> bool {
        match (&self.required_roles, role) {
            (None, _) => true,
            (Some(allowed), Some(role)) => allowed.contains(&role),
            (Some(_), None) => false,
        }
    }

    /// Hover text for the collapsed layout, where the label is not drawn.
    pub fn tooltip(&self) -> String {
        match &self.phase {
            Some(phase) => format!("{} ({})", self.description, phase),
            None => self.description.clone(),
        }
    }
}

/// Entries sharing a section name, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    pub name: String,
    pub entries: Vec<NavigationEntry>,
}

impl NavigationGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }
}

/// The ordered, grouped, role-filtered menu a host renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationMenu {
    pub groups: Vec<NavigationGroup>,
}

impl NavigationMenu {
    pub fn new(groups: Vec<NavigationGroup>) -> Self {
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.entries.is_empty())
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }

    /// All entries flattened in display order.
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.groups.iter().flat_map(|group| group.entries.iter())
    }

    /// Locates the entry that routes to `destination`, used to mark the active item.
    pub fn find_by_destination(&self, destination: &str) -> Option<&NavigationEntry> {
        self.entries().find(|entry| entry.destination == destination)
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.name.as_str()).collect()
    }
}
