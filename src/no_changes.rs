use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::menu::{ActionId, Menu};
use crate::menu_index::{MenuItemInfo, MenuItemInfoCache};
use crate::platform::Platform;

pub const NO_LOCAL_CHANGES: &str = "No local changes";
pub const MENU_PATH_SEPARATOR: &str = " -> ";
const ACTIONS_DESCRIPTION: &str = "You have no uncommitted changes in your repository! Here’s some friendly suggestions for what to do next.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankSlateStyle {
    Classic,
    #[default]
    Actions,
}

/// Where an action lives in the menu and which keys trigger it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverabilityHint {
    pub menu_path: String,
    pub keys: Vec<String>,
}

impl DiscoverabilityHint {
    pub fn from_menu_item(info: &MenuItemInfo) -> Self {
        Self {
            menu_path: info.parent_menu_labels.join(MENU_PATH_SEPARATOR),
            keys: info.accelerator_keys.clone(),
        }
    }
}

impl fmt::Display for DiscoverabilityHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.menu_path.is_empty() {
            write!(f, "{} menu", self.menu_path)?;
            if !self.keys.is_empty() {
                f.write_str(" or ")?;
            }
        }
        for (ix, key) in self.keys.iter().enumerate() {
            if ix > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{key}]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoChangesAction {
    pub title: String,
    pub hint: DiscoverabilityHint,
    pub button_text: String,
    /// What the button invokes; running it is up to the caller.
    pub action: ActionId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlankSlate {
    Classic {
        prompt: String,
        action: ActionId,
    },
    Actions {
        description: String,
        actions: Vec<NoChangesAction>,
    },
}

impl fmt::Display for BlankSlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{NO_LOCAL_CHANGES}")?;
        match self {
            Self::Classic { prompt, .. } => writeln!(f, "{prompt}"),
            Self::Actions {
                description,
                actions,
            } => {
                writeln!(f, "{description}")?;
                for action in actions {
                    writeln!(f)?;
                    writeln!(f, "{}", action.title)?;
                    writeln!(f, "  {}", action.hint)?;
                    writeln!(f, "  <{}>", action.button_text)?;
                }
                Ok(())
            }
        }
    }
}

/// The panel shown when the selected repository has nothing to commit.
pub struct NoChanges {
    repository: PathBuf,
    platform: Platform,
    style: BlankSlateStyle,
    menu_items: MenuItemInfoCache<Platform>,
}

impl NoChanges {
    pub fn new(repository: impl Into<PathBuf>, platform: Platform, style: BlankSlateStyle) -> Self {
        Self {
            repository: repository.into(),
            platform,
            style,
            menu_items: MenuItemInfoCache::new(platform),
        }
    }

    pub fn repository(&self) -> &Path {
        &self.repository
    }

    pub fn render(&mut self, menu: Option<&Arc<Menu>>) -> BlankSlate {
        match self.style {
            BlankSlateStyle::Classic => BlankSlate::Classic {
                prompt: format!(
                    "Would you like to open this repository in {}?",
                    self.platform.file_manager_phrase()
                ),
                action: ActionId::OpenWorkingDirectory,
            },
            BlankSlateStyle::Actions => BlankSlate::Actions {
                description: ACTIONS_DESCRIPTION.to_string(),
                actions: self.render_actions(menu),
            },
        }
    }

    pub fn render_actions(&mut self, menu: Option<&Arc<Menu>>) -> Vec<NoChangesAction> {
        self.show_in_file_manager_action(menu).into_iter().collect()
    }

    pub fn menu_item_info(&mut self, menu: Option<&Arc<Menu>>, id: ActionId) -> Option<MenuItemInfo> {
        self.menu_items.lookup(menu, id.as_str())
    }

    fn show_in_file_manager_action(&mut self, menu: Option<&Arc<Menu>>) -> Option<NoChangesAction> {
        let action = ActionId::OpenWorkingDirectory;
        let Some(menu_item) = self.menu_item_info(menu, action) else {
            error!("could not find menu item `{action}` for the show in file manager action");
            return None;
        };

        let file_manager = self.platform.file_manager_name();
        Some(NoChangesAction {
            title: format!("View the files in your repository in {file_manager}"),
            hint: DiscoverabilityHint::from_menu_item(&menu_item),
            button_text: format!("Show in {file_manager}"),
            action,
        })
    }
}
