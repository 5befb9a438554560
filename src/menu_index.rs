use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::keys::{ModifierResolver, accelerator_keys};
use crate::menu::{Menu, MenuItem, strip_access_key};

pub const SEPARATOR_LABEL: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemInfo {
    pub label: String,
    pub accelerator_keys: Vec<String>,
    /// Nearest parent first, top-level menu last.
    pub parent_menu_labels: Vec<String>,
}

impl MenuItemInfo {
    pub fn is_top_level(&self) -> bool {
        self.parent_menu_labels.is_empty()
    }

    pub fn has_accelerator(&self) -> bool {
        !self.accelerator_keys.is_empty()
    }

    fn child_parent_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.parent_menu_labels.len() + 1);
        labels.push(self.label.clone());
        labels.extend(self.parent_menu_labels.iter().cloned());
        labels
    }
}

pub type MenuItemInfoMap = BTreeMap<String, MenuItemInfo>;

/// Flattens the menu into one entry per item id. Submenus are registered before
/// their children; on duplicate ids the item visited last wins.
pub fn build_menu_item_info_map(
    menu: Option<&Menu>,
    resolver: &impl ModifierResolver,
) -> MenuItemInfoMap {
    let mut map = MenuItemInfoMap::new();
    if let Some(menu) = menu {
        collect_menu_items(&menu.items, None, resolver, &mut map);
    }
    map
}

fn collect_menu_items(
    items: &[MenuItem],
    parent: Option<&MenuItemInfo>,
    resolver: &impl ModifierResolver,
    map: &mut MenuItemInfoMap,
) {
    for item in items {
        let info = MenuItemInfo {
            label: item
                .label()
                .map(strip_access_key)
                .unwrap_or_else(|| SEPARATOR_LABEL.to_string()),
            accelerator_keys: item_accelerator_keys(item, resolver),
            parent_menu_labels: parent
                .map(MenuItemInfo::child_parent_labels)
                .unwrap_or_default(),
        };

        let children = match item {
            MenuItem::Submenu { items, .. } => Some((items, info.clone())),
            MenuItem::Separator { .. } | MenuItem::Action { .. } | MenuItem::Checkbox { .. } => {
                None
            }
        };

        if map.insert(item.id().to_string(), info).is_some() {
            warn!("duplicate menu item id `{}`; keeping the later item", item.id());
        }

        if let Some((child_items, submenu_info)) = children {
            collect_menu_items(child_items, Some(&submenu_info), resolver, map);
        }
    }
}

fn item_accelerator_keys(item: &MenuItem, resolver: &impl ModifierResolver) -> Vec<String> {
    match item {
        MenuItem::Separator { .. } | MenuItem::Submenu { .. } => Vec::new(),
        MenuItem::Action { accelerator, .. } | MenuItem::Checkbox { accelerator, .. } => accelerator
            .as_deref()
            .map(|accelerator| accelerator_keys(accelerator, resolver))
            .unwrap_or_default(),
    }
}

struct CachedMap {
    menu: Option<Arc<Menu>>,
    map: Arc<MenuItemInfoMap>,
}

/// Remembers the map built for the most recent menu. A different `Arc` (even one
/// holding an equal menu) triggers a rebuild; `None` is a key of its own.
pub struct MenuItemInfoCache<R> {
    resolver: R,
    last: Option<CachedMap>,
}

impl<R: ModifierResolver> MenuItemInfoCache<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            last: None,
        }
    }

    pub fn get(&mut self, menu: Option<&Arc<Menu>>) -> Arc<MenuItemInfoMap> {
        if let Some(cached) = &self.last {
            if same_menu(cached.menu.as_ref(), menu) {
                return Arc::clone(&cached.map);
            }
        }

        let map = Arc::new(build_menu_item_info_map(
            menu.map(|menu| &**menu),
            &self.resolver,
        ));
        debug!("rebuilt menu item info map with {} entries", map.len());
        self.last = Some(CachedMap {
            menu: menu.cloned(),
            map: Arc::clone(&map),
        });
        map
    }

    pub fn lookup(&mut self, menu: Option<&Arc<Menu>>, id: &str) -> Option<MenuItemInfo> {
        self.get(menu).get(id).cloned()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

fn same_menu(cached: Option<&Arc<Menu>>, requested: Option<&Arc<Menu>>) -> bool {
    match (cached, requested) {
        (Some(cached), Some(requested)) => Arc::ptr_eq(cached, requested),
        (None, None) => true,
        _ => false,
    }
}
