use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[serde(rename = "macos", alias = "darwin")]
    MacOs,
    #[serde(alias = "win32")]
    Windows,
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for. Only the process entry point
    /// should call this; everything else takes a `Platform` argument.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    pub fn is_macos(self) -> bool {
        self == Self::MacOs
    }

    pub fn file_manager_name(self) -> &'static str {
        match self {
            Self::MacOs => "Finder",
            Self::Windows => "Explorer",
            Self::Linux => "Your File Manager",
        }
    }

    // Variant used mid-sentence, where the generic name is not capitalized.
    pub fn file_manager_phrase(self) -> &'static str {
        match self {
            Self::MacOs | Self::Windows => self.file_manager_name(),
            Self::Linux => "your File Manager",
        }
    }
}
