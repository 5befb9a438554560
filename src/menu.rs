use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

pub const APP_NAME: &str = "Blankslate";

/// Read-only snapshot of the application menu as handed over by the menu
/// subsystem. Identity matters: callers share it behind an `Arc` and replace the
/// `Arc` whenever the menu changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuItem {
    Separator {
        id: String,
    },
    Action {
        id: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accelerator: Option<String>,
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
    Checkbox {
        id: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accelerator: Option<String>,
        #[serde(default = "default_enabled")]
        enabled: bool,
        #[serde(default)]
        checked: bool,
    },
    Submenu {
        id: String,
        label: String,
        #[serde(default = "default_enabled")]
        enabled: bool,
        #[serde(default)]
        items: Vec<MenuItem>,
    },
}

fn default_enabled() -> bool {
    true
}

impl MenuItem {
    pub fn separator(id: impl Into<String>) -> Self {
        Self::Separator { id: id.into() }
    }

    pub fn action(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Action {
            id: id.into(),
            label: label.into(),
            accelerator: None,
            enabled: true,
        }
    }

    pub fn checkbox(id: impl Into<String>, label: impl Into<String>, checked: bool) -> Self {
        Self::Checkbox {
            id: id.into(),
            label: label.into(),
            accelerator: None,
            enabled: true,
            checked,
        }
    }

    pub fn submenu(id: impl Into<String>, label: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self::Submenu {
            id: id.into(),
            label: label.into(),
            enabled: true,
            items,
        }
    }

    /// Only leaf items carry accelerators; this is a no-op on separators and submenus.
    pub fn with_accelerator(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Action { accelerator, .. } | Self::Checkbox { accelerator, .. } => {
                *accelerator = Some(value.into());
            }
            Self::Separator { .. } | Self::Submenu { .. } => {}
        }
        self
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Separator { id }
            | Self::Action { id, .. }
            | Self::Checkbox { id, .. }
            | Self::Submenu { id, .. } => id.as_str(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Separator { .. } => None,
            Self::Action { label, .. }
            | Self::Checkbox { label, .. }
            | Self::Submenu { label, .. } => Some(label.as_str()),
        }
    }

    pub fn accelerator(&self) -> Option<&str> {
        match self {
            Self::Action { accelerator, .. } | Self::Checkbox { accelerator, .. } => {
                accelerator.as_deref()
            }
            Self::Separator { .. } | Self::Submenu { .. } => None,
        }
    }
}

/// Drops the `&` access-key markers used in menu labels; `&&` is a literal `&`.
pub fn strip_access_key(label: &str) -> String {
    let mut stripped = String::with_capacity(label.len());
    let mut chars = label.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '&' {
            if chars.peek() == Some(&'&') {
                stripped.push('&');
                chars.next();
            }
            continue;
        }
        stripped.push(ch);
    }
    stripped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    ShowAbout,
    Preferences,
    NewRepository,
    AddLocalRepository,
    CloneRepository,
    ShowChanges,
    ShowHistory,
    ShowRepositoryList,
    ShowBranchesList,
    GoToCommitMessage,
    ToggleStashedChanges,
    Repository,
    Push,
    Pull,
    RemoveRepository,
    ViewRepositoryOnGitHub,
    OpenInShell,
    OpenWorkingDirectory,
    OpenExternalEditor,
    ShowRepositorySettings,
    Branch,
    CreateBranch,
    RenameBranch,
    DeleteBranch,
    UpdateBranch,
    CompareToBranch,
    MergeBranch,
    RebaseBranch,
    CreatePullRequest,
}

impl ActionId {
    pub const ALL: [ActionId; 29] = [
        Self::ShowAbout,
        Self::Preferences,
        Self::NewRepository,
        Self::AddLocalRepository,
        Self::CloneRepository,
        Self::ShowChanges,
        Self::ShowHistory,
        Self::ShowRepositoryList,
        Self::ShowBranchesList,
        Self::GoToCommitMessage,
        Self::ToggleStashedChanges,
        Self::Repository,
        Self::Push,
        Self::Pull,
        Self::RemoveRepository,
        Self::ViewRepositoryOnGitHub,
        Self::OpenInShell,
        Self::OpenWorkingDirectory,
        Self::OpenExternalEditor,
        Self::ShowRepositorySettings,
        Self::Branch,
        Self::CreateBranch,
        Self::RenameBranch,
        Self::DeleteBranch,
        Self::UpdateBranch,
        Self::CompareToBranch,
        Self::MergeBranch,
        Self::RebaseBranch,
        Self::CreatePullRequest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShowAbout => "show-about",
            Self::Preferences => "preferences",
            Self::NewRepository => "new-repository",
            Self::AddLocalRepository => "add-local-repository",
            Self::CloneRepository => "clone-repository",
            Self::ShowChanges => "show-changes",
            Self::ShowHistory => "show-history",
            Self::ShowRepositoryList => "show-repository-list",
            Self::ShowBranchesList => "show-branches-list",
            Self::GoToCommitMessage => "go-to-commit-message",
            Self::ToggleStashedChanges => "toggle-stashed-changes",
            Self::Repository => "repository",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::RemoveRepository => "remove-repository",
            Self::ViewRepositoryOnGitHub => "view-repository-on-github",
            Self::OpenInShell => "open-in-shell",
            Self::OpenWorkingDirectory => "open-working-directory",
            Self::OpenExternalEditor => "open-external-editor",
            Self::ShowRepositorySettings => "show-repository-settings",
            Self::Branch => "branch",
            Self::CreateBranch => "create-branch",
            Self::RenameBranch => "rename-branch",
            Self::DeleteBranch => "delete-branch",
            Self::UpdateBranch => "update-branch",
            Self::CompareToBranch => "compare-to-branch",
            Self::MergeBranch => "merge-branch",
            Self::RebaseBranch => "rebase-branch",
            Self::CreatePullRequest => "create-pull-request",
        }
    }
}

impl AsRef<str> for ActionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .ok_or_else(|| anyhow!("unknown menu action id `{value}`"))
    }
}

fn action(id: ActionId, label: &str) -> MenuItem {
    MenuItem::action(id.as_str(), label)
}

/// The menu the application installs when nothing else is configured.
pub fn default_app_menu(platform: Platform) -> Menu {
    let macos = platform.is_macos();
    let mut roots = Vec::new();

    if macos {
        roots.push(MenuItem::submenu(
            "app",
            APP_NAME,
            vec![
                action(ActionId::ShowAbout, &format!("About {APP_NAME}")),
                MenuItem::separator("app-separator-1"),
                action(ActionId::Preferences, "Settings…").with_accelerator("CmdOrCtrl+,"),
                MenuItem::separator("app-separator-2"),
                MenuItem::action("quit", format!("Quit {APP_NAME}")).with_accelerator("Cmd+Q"),
            ],
        ));
    }

    let mut file_items = vec![
        action(ActionId::NewRepository, "New &repository…").with_accelerator("CmdOrCtrl+N"),
        MenuItem::separator("file-separator-1"),
        action(ActionId::AddLocalRepository, "Add &local repository…")
            .with_accelerator("CmdOrCtrl+O"),
        action(ActionId::CloneRepository, "Clo&ne repository…")
            .with_accelerator("CmdOrCtrl+Shift+O"),
    ];
    if !macos {
        file_items.extend([
            MenuItem::separator("file-separator-2"),
            action(ActionId::Preferences, "&Options…").with_accelerator("CmdOrCtrl+,"),
            MenuItem::separator("file-separator-3"),
            MenuItem::action("exit", "E&xit").with_accelerator("Alt+F4"),
        ]);
    }
    roots.push(MenuItem::submenu("file", "&File", file_items));

    roots.push(MenuItem::submenu(
        "edit",
        "&Edit",
        vec![
            MenuItem::action("undo", "&Undo").with_accelerator("CmdOrCtrl+Z"),
            MenuItem::action("redo", "&Redo").with_accelerator("CmdOrCtrl+Shift+Z"),
            MenuItem::separator("edit-separator-1"),
            MenuItem::action("cut", "Cu&t").with_accelerator("CmdOrCtrl+X"),
            MenuItem::action("copy", "&Copy").with_accelerator("CmdOrCtrl+C"),
            MenuItem::action("paste", "&Paste").with_accelerator("CmdOrCtrl+V"),
            MenuItem::action("select-all", "Select &all").with_accelerator("CmdOrCtrl+A"),
        ],
    ));

    roots.push(MenuItem::submenu(
        "view",
        "&View",
        vec![
            action(ActionId::ShowChanges, "&Changes").with_accelerator("CmdOrCtrl+1"),
            action(ActionId::ShowHistory, "&History").with_accelerator("CmdOrCtrl+2"),
            action(ActionId::ShowRepositoryList, "Repository &list")
                .with_accelerator("CmdOrCtrl+T"),
            action(ActionId::ShowBranchesList, "&Branches list").with_accelerator("CmdOrCtrl+B"),
            MenuItem::separator("view-separator-1"),
            action(ActionId::GoToCommitMessage, "Go to &summary").with_accelerator("CmdOrCtrl+G"),
            MenuItem::checkbox(
                ActionId::ToggleStashedChanges.as_str(),
                "Show stashed changes",
                false,
            )
            .with_accelerator("CmdOrCtrl+H"),
            MenuItem::separator("view-separator-2"),
            MenuItem::action("toggle-full-screen", "Toggle &full screen").with_accelerator(
                if macos { "Ctrl+Cmd+F" } else { "F11" },
            ),
        ],
    ));

    let shell_label = match platform {
        Platform::MacOs | Platform::Linux => "Open in &Terminal",
        Platform::Windows => "Open in Co&mmand Prompt",
    };
    let working_directory_label = match platform {
        Platform::MacOs => "Show in &Finder",
        Platform::Windows => "Show in E&xplorer",
        Platform::Linux => "Show in your File &Manager",
    };
    roots.push(MenuItem::submenu(
        ActionId::Repository.as_str(),
        "&Repository",
        vec![
            action(ActionId::Push, "&Push").with_accelerator("CmdOrCtrl+P"),
            action(ActionId::Pull, "Pu&ll").with_accelerator("CmdOrCtrl+Shift+P"),
            action(ActionId::RemoveRepository, "&Remove…")
                .with_accelerator("CmdOrCtrl+Backspace"),
            MenuItem::separator("repository-separator-1"),
            action(ActionId::ViewRepositoryOnGitHub, "&View on GitHub")
                .with_accelerator("CmdOrCtrl+Shift+G"),
            action(ActionId::OpenInShell, shell_label).with_accelerator("Ctrl+`"),
            action(ActionId::OpenWorkingDirectory, working_directory_label)
                .with_accelerator("CmdOrCtrl+Shift+F"),
            action(ActionId::OpenExternalEditor, "&Open in external editor")
                .with_accelerator("CmdOrCtrl+Shift+A"),
            MenuItem::separator("repository-separator-2"),
            action(ActionId::ShowRepositorySettings, "Repository &settings…"),
        ],
    ));

    roots.push(MenuItem::submenu(
        ActionId::Branch.as_str(),
        "&Branch",
        vec![
            action(ActionId::CreateBranch, "New &branch…").with_accelerator("CmdOrCtrl+Shift+N"),
            action(ActionId::RenameBranch, "&Rename…").with_accelerator("CmdOrCtrl+Shift+R"),
            action(ActionId::DeleteBranch, "&Delete…").with_accelerator("CmdOrCtrl+Shift+D"),
            MenuItem::separator("branch-separator-1"),
            action(ActionId::UpdateBranch, "&Update from default branch")
                .with_accelerator("CmdOrCtrl+Shift+U"),
            action(ActionId::CompareToBranch, "&Compare to branch")
                .with_accelerator("CmdOrCtrl+Shift+B"),
            action(ActionId::MergeBranch, "&Merge into current branch…")
                .with_accelerator("CmdOrCtrl+Shift+M"),
            action(ActionId::RebaseBranch, "R&ebase current branch…")
                .with_accelerator("CmdOrCtrl+Shift+E"),
            MenuItem::separator("branch-separator-2"),
            action(ActionId::CreatePullRequest, "Create &pull request")
                .with_accelerator("CmdOrCtrl+R"),
        ],
    ));

    let mut help_items = vec![
        MenuItem::action("report-issue", "&Report issue…"),
        MenuItem::action("show-user-guides", "Show User Guides"),
    ];
    if !macos {
        help_items.extend([
            MenuItem::separator("help-separator-1"),
            action(ActionId::ShowAbout, &format!("&About {APP_NAME}")),
        ]);
    }
    roots.push(MenuItem::submenu("help", "&Help", help_items));

    Menu::new(roots)
}
