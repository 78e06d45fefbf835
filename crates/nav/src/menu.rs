use indexmap::IndexMap;
use plantnxt_types::{NavigationEntry, NavigationGroup, NavigationMenu, Role};
use tracing::debug;

/// Builds the grouped, role-filtered menu for a viewer.
///
/// An entry is kept when it has no role restriction, or when `role` is one of
/// its required roles; with `role = None` only unrestricted entries survive.
/// Kept entries are partitioned by `group` without sorting: a group appears at
/// the position of its first kept member and entries retain input order.
///
/// The function is pure, so repeated calls with the same input produce equal
/// menus. An empty result is a valid, empty menu.
pub fn build_menu(entries: &[NavigationEntry], role: Option<Role>) -> NavigationMenu {
    let mut grouped: IndexMap<&str, NavigationGroup> = IndexMap::new();
    for entry in entries.iter().filter(|entry| entry.is_visible_to(role)) {
        grouped
            .entry(entry.group.as_str())
            .or_insert_with(|| NavigationGroup::new(entry.group.as_str()))
            .entries
            .push(entry.clone());
    }

    let menu = NavigationMenu::new(grouped.into_values().collect());
    debug!(
        role = ?role,
        input = entries.len(),
        visible = menu.entry_count(),
        groups = ?menu.group_names(),
        "built navigation menu"
    );
    menu
}
