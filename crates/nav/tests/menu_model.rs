use std::fs;

use plantnxt_nav::{CatalogError, NavigationEntry, NavigationMenu, Role, build_menu, default_catalog, load_catalog};

fn layout(menu: &NavigationMenu) -> Vec<(String, Vec<String>)> {
    menu.groups
        .iter()
        .map(|group| (group.name.clone(), group.entries.iter().map(|entry| entry.id.clone()).collect()))
        .collect()
}

#[test]
fn build_menu_is_pure() {
    let catalog = default_catalog();
    for role in Role::ALL.into_iter().map(Some).chain([None]) {
        assert_eq!(build_menu(&catalog, role), build_menu(&catalog, role), "role {role:?}");
    }
}

#[test]
fn no_role_keeps_only_unrestricted_entries() {
    let catalog = default_catalog();
    let menu = build_menu(&catalog, None);
    assert!(menu.entries().all(|entry| entry.required_roles.is_none()));
    let unrestricted = catalog.iter().filter(|entry| entry.required_roles.is_none()).count();
    assert_eq!(menu.entry_count(), unrestricted);
}

#[test]
fn order_survives_shuffling_unrelated_groups() {
    let ops = [
        NavigationEntry::new("o1", "O1", "/o1", "Ops"),
        NavigationEntry::new("o2", "O2", "/o2", "Ops"),
    ];
    let fin = [
        NavigationEntry::new("f1", "F1", "/f1", "Finance"),
        NavigationEntry::new("f2", "F2", "/f2", "Finance").with_required_roles([Role::Cfo]),
    ];

    let interleaved = vec![ops[0].clone(), fin[0].clone(), ops[1].clone(), fin[1].clone()];
    let clustered = vec![ops[0].clone(), ops[1].clone(), fin[0].clone(), fin[1].clone()];
    let late_finance = vec![ops[0].clone(), ops[1].clone(), fin[1].clone(), fin[0].clone()];

    let expected = vec![
        ("Ops".to_string(), vec!["o1".to_string(), "o2".to_string()]),
        ("Finance".to_string(), vec!["f1".to_string(), "f2".to_string()]),
    ];
    assert_eq!(layout(&build_menu(&interleaved, Some(Role::Cfo))), expected);
    assert_eq!(layout(&build_menu(&clustered, Some(Role::Cfo))), expected);

    // Reordering within a group is reflected, not corrected.
    let reordered = layout(&build_menu(&late_finance, Some(Role::Cfo)));
    assert_eq!(reordered[1].1, vec!["f2".to_string(), "f1".to_string()]);
}

#[test]
fn cfo_scenario_drops_admin_group_entirely() {
    let entries = vec![
        NavigationEntry::new("A", "A", "/a", "Ops"),
        NavigationEntry::new("B", "B", "/b", "Admin").with_required_roles([Role::Ceo]),
        NavigationEntry::new("C", "C", "/c", "Ops"),
    ];
    let menu = build_menu(&entries, Some(Role::Cfo));
    assert_eq!(layout(&menu), vec![("Ops".to_string(), vec!["A".to_string(), "C".to_string()])]);
}

#[test]
fn empty_filtered_result_is_an_empty_menu() {
    let entries = vec![NavigationEntry::new("B", "B", "/b", "Admin").with_required_roles([Role::Ceo])];
    let menu = build_menu(&entries, None);
    assert!(menu.is_empty());
    assert_eq!(menu.entry_count(), 0);
}

#[test]
fn load_catalog_reads_json_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nav.json");
    fs::write(
        &path,
        r#"{"entries":[
            {"id":"oee","label":"OEE","destination":"/oee","group":"Ops"},
            {"id":"fin","label":"Finance","destination":"/fin","group":"Finance","required_roles":["CFO"]}
        ]}"#,
    )
    .expect("write catalog");

    let entries = load_catalog(&path).expect("load catalog");
    let menu = build_menu(&entries, Some(Role::Coo));
    assert_eq!(menu.group_names(), vec!["Ops"]);
}

#[test]
fn load_catalog_fails_fast_on_undefined_role() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nav.yaml");
    fs::write(
        &path,
        "entries:\n  - id: x\n    label: X\n    destination: /x\n    group: Ops\n    required_roles: [Shift Lead]\n",
    )
    .expect("write catalog");

    let error = load_catalog(&path).unwrap_err();
    assert!(matches!(error, CatalogError::UnknownRole { ref role, .. } if role == "Shift Lead"));
    assert_eq!(error.to_string(), "entry 'x' references undefined role 'Shift Lead'");
}

#[test]
fn load_catalog_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let error = load_catalog(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, CatalogError::Io { .. }));
}
