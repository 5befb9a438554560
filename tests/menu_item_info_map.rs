use std::cell::Cell;
use std::sync::Arc;

use blankslate::menu::{Menu, MenuItem, default_app_menu};
use blankslate::menu_index::{
    MenuItemInfo, MenuItemInfoCache, SEPARATOR_LABEL, build_menu_item_info_map,
};
use blankslate::platform::Platform;

fn identity(token: &str) -> String {
    token.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn collect_ids(items: &[MenuItem], ids: &mut Vec<String>) {
    for item in items {
        ids.push(item.id().to_string());
        if let MenuItem::Submenu { items, .. } = item {
            collect_ids(items, ids);
        }
    }
}

fn sample_menu() -> Menu {
    Menu::new(vec![
        MenuItem::submenu(
            "file-menu",
            "File",
            vec![
                MenuItem::action("open-working-directory", "Open Working Directory")
                    .with_accelerator("Ctrl+Shift+O"),
                MenuItem::separator("file-separator"),
                MenuItem::submenu(
                    "recent",
                    "Open Recent",
                    vec![
                        MenuItem::action("reopen-last", "Reopen Last").with_accelerator("Ctrl+R"),
                        MenuItem::action("clear-recent", "Clear Recent"),
                    ],
                ),
            ],
        ),
        MenuItem::action("about", "About"),
    ])
}

#[test]
fn opening_working_directory_resolves_label_keys_and_parent() {
    let menu = Arc::new(Menu::new(vec![MenuItem::submenu(
        "file-menu",
        "File",
        vec![
            MenuItem::action("open-working-directory", "Open Working Directory")
                .with_accelerator("Ctrl+Shift+O"),
        ],
    )]));
    let mut cache = MenuItemInfoCache::new(identity);

    let info = cache
        .lookup(Some(&menu), "open-working-directory")
        .expect("leaf item should be indexed");

    assert_eq!(
        info,
        MenuItemInfo {
            label: "Open Working Directory".to_string(),
            accelerator_keys: strings(&["Ctrl", "Shift", "O"]),
            parent_menu_labels: strings(&["File"]),
        }
    );
}

#[test]
fn every_item_in_the_default_menu_is_indexed() {
    for platform in [Platform::MacOs, Platform::Windows, Platform::Linux] {
        let menu = default_app_menu(platform);
        let map = build_menu_item_info_map(Some(&menu), &platform);

        let mut ids = Vec::new();
        collect_ids(&menu.items, &mut ids);
        assert!(!ids.is_empty());
        for id in &ids {
            assert!(map.contains_key(id), "{id} missing on {platform:?}");
        }
        assert_eq!(map.len(), ids.len(), "ids should be unique on {platform:?}");
    }
}

#[test]
fn parent_labels_list_ancestors_nearest_first() {
    let menu = sample_menu();
    let map = build_menu_item_info_map(Some(&menu), &identity);

    assert!(map["file-menu"].parent_menu_labels.is_empty());
    assert!(map["about"].is_top_level());
    assert_eq!(map["recent"].parent_menu_labels, strings(&["File"]));
    assert_eq!(
        map["reopen-last"].parent_menu_labels,
        strings(&["Open Recent", "File"])
    );
    assert_eq!(
        map["clear-recent"].parent_menu_labels.len(),
        2,
        "depth three item should have two ancestors"
    );
}

#[test]
fn separators_use_sentinel_label_and_never_carry_keys() {
    let menu = sample_menu();
    let map = build_menu_item_info_map(Some(&menu), &identity);

    let separator = &map["file-separator"];
    assert_eq!(separator.label, SEPARATOR_LABEL);
    assert!(separator.accelerator_keys.is_empty());
    assert_eq!(separator.parent_menu_labels, strings(&["File"]));
}

#[test]
fn submenus_and_items_without_accelerators_have_no_keys() {
    let menu = sample_menu();
    let map = build_menu_item_info_map(Some(&menu), &identity);

    assert!(!map["file-menu"].has_accelerator());
    assert!(!map["recent"].has_accelerator());
    assert!(map["clear-recent"].accelerator_keys.is_empty());
    assert_eq!(map["reopen-last"].accelerator_keys, strings(&["Ctrl", "R"]));
}

#[test]
fn accelerator_tokens_go_through_the_resolver_in_order() {
    let menu = Menu::new(vec![
        MenuItem::action("save-as", "Save As").with_accelerator("Ctrl+Shift+S"),
    ]);
    let symbols = |token: &str| match token {
        "Ctrl" => "⌃".to_string(),
        "Shift" => "⇧".to_string(),
        other => other.to_string(),
    };

    let map = build_menu_item_info_map(Some(&menu), &symbols);

    assert_eq!(map["save-as"].accelerator_keys, strings(&["⌃", "⇧", "S"]));
}

#[test]
fn space_key_accelerators_keep_the_space_token() {
    let menu = Menu::new(vec![MenuItem::submenu(
        "view",
        "View",
        vec![
            MenuItem::action("quick-look", "Quick Look").with_accelerator("Ctrl+ "),
            MenuItem::action("preview", "Preview").with_accelerator("Shift+ +A"),
        ],
    )]);

    let windows = build_menu_item_info_map(Some(&menu), &Platform::Windows);
    assert_eq!(
        windows["quick-look"].accelerator_keys,
        strings(&["Ctrl", "Space"])
    );

    let macos = build_menu_item_info_map(Some(&menu), &Platform::MacOs);
    assert_eq!(
        macos["preview"].accelerator_keys,
        strings(&["⇧", "Space", "A"])
    );
}

#[test]
fn checkbox_items_are_indexed_like_actions() {
    let menu = Menu::new(vec![MenuItem::submenu(
        "view",
        "View",
        vec![MenuItem::checkbox("wrap", "Wrap lines", true).with_accelerator("Alt+Z")],
    )]);

    let map = build_menu_item_info_map(Some(&menu), &Platform::Windows);

    assert_eq!(map["wrap"].label, "Wrap lines");
    assert_eq!(map["wrap"].accelerator_keys, strings(&["Alt", "Z"]));
    assert_eq!(map["wrap"].parent_menu_labels, strings(&["View"]));
}

#[test]
fn access_key_markers_are_stripped_from_labels_and_parents() {
    let menu = default_app_menu(Platform::MacOs);
    let map = build_menu_item_info_map(Some(&menu), &Platform::MacOs);

    let info = &map["open-working-directory"];
    assert_eq!(info.label, "Show in Finder");
    assert_eq!(info.parent_menu_labels, strings(&["Repository"]));
    assert_eq!(info.accelerator_keys, strings(&["⌘", "⇧", "F"]));
}

#[test]
fn missing_menu_and_empty_menu_yield_empty_maps() {
    assert!(build_menu_item_info_map(None, &identity).is_empty());
    assert!(build_menu_item_info_map(Some(&Menu::default()), &identity).is_empty());

    let menu = Menu::new(vec![MenuItem::submenu("empty", "Empty", Vec::new())]);
    let map = build_menu_item_info_map(Some(&menu), &identity);
    assert_eq!(map.len(), 1);
}

#[test]
fn duplicate_ids_keep_the_item_visited_last() {
    let menu = Menu::new(vec![
        MenuItem::action("dup", "First"),
        MenuItem::submenu(
            "tools",
            "Tools",
            vec![MenuItem::action("dup", "Second").with_accelerator("F2")],
        ),
    ]);

    let map = build_menu_item_info_map(Some(&menu), &identity);

    assert_eq!(map.len(), 2);
    assert_eq!(map["dup"].label, "Second");
    assert_eq!(map["dup"].parent_menu_labels, strings(&["Tools"]));
}

#[test]
fn flattening_twice_gives_equal_maps() {
    let menu = default_app_menu(Platform::Linux);

    let first = build_menu_item_info_map(Some(&menu), &Platform::Linux);
    let second = build_menu_item_info_map(Some(&menu), &Platform::Linux);

    assert_eq!(first, second);
}

#[test]
fn cache_reuses_map_for_the_same_menu_reference() {
    let resolved = Cell::new(0usize);
    let counting = |token: &str| {
        resolved.set(resolved.get() + 1);
        token.to_string()
    };
    let menu = Arc::new(sample_menu());
    let mut cache = MenuItemInfoCache::new(counting);

    let first = cache.get(Some(&menu));
    let resolved_after_first = resolved.get();
    assert!(resolved_after_first > 0);

    let second = cache.get(Some(&menu));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(resolved.get(), resolved_after_first, "cache hit must not traverse");

    let _ = cache.lookup(Some(&menu), "reopen-last");
    assert_eq!(resolved.get(), resolved_after_first);
}

#[test]
fn cache_rebuilds_for_an_equal_menu_behind_a_new_reference() {
    let resolved = Cell::new(0usize);
    let counting = |token: &str| {
        resolved.set(resolved.get() + 1);
        token.to_string()
    };
    let menu = Arc::new(sample_menu());
    let copy = Arc::new(sample_menu());
    let mut cache = MenuItemInfoCache::new(counting);

    let first = cache.get(Some(&menu));
    let resolved_after_first = resolved.get();
    let second = cache.get(Some(&copy));

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
    assert_eq!(resolved.get(), resolved_after_first * 2);
}

#[test]
fn cache_only_remembers_the_most_recent_menu() {
    let menu_a = Arc::new(sample_menu());
    let menu_b = Arc::new(default_app_menu(Platform::Linux));
    let mut cache = MenuItemInfoCache::new(Platform::Linux);

    let first_a = cache.get(Some(&menu_a));
    let _ = cache.get(Some(&menu_b));
    let second_a = cache.get(Some(&menu_a));

    assert!(!Arc::ptr_eq(&first_a, &second_a));
    assert_eq!(first_a, second_a);
}

#[test]
fn missing_menu_is_its_own_cache_key() {
    let menu = Arc::new(sample_menu());
    let mut cache = MenuItemInfoCache::new(identity);

    let empty = cache.get(None);
    assert!(empty.is_empty());
    assert!(Arc::ptr_eq(&empty, &cache.get(None)));

    let populated = cache.get(Some(&menu));
    assert!(!populated.is_empty());

    let empty_again = cache.get(None);
    assert!(empty_again.is_empty());
    assert!(!Arc::ptr_eq(&empty, &empty_again));
}

#[test]
fn cleared_cache_rebuilds_on_next_get() {
    let menu = Arc::new(sample_menu());
    let mut cache = MenuItemInfoCache::new(identity);

    let first = cache.get(Some(&menu));
    cache.clear();
    let second = cache.get(Some(&menu));

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
}

#[test]
fn unknown_id_lookup_is_absent() {
    let menu = Arc::new(sample_menu());
    let mut cache = MenuItemInfoCache::new(identity);

    assert_eq!(cache.lookup(Some(&menu), "nonexistent-id"), None);
    assert_eq!(cache.lookup(None, "open-working-directory"), None);
}
