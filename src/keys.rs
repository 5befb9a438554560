use crate::platform::Platform;

const ACCELERATOR_DELIMITER: char = '+';

pub trait ModifierResolver {
    fn resolve(&self, token: &str) -> String;
}

impl ModifierResolver for Platform {
    fn resolve(&self, token: &str) -> String {
        display_name_for_modifier(*self, token)
    }
}

impl<F> ModifierResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, token: &str) -> String {
        self(token)
    }
}

/// Maps a raw accelerator token (`CmdOrCtrl`, `Shift`, `S`, ...) to how the
/// given platform labels it. Unknown tokens are ordinary keys and pass through.
pub fn display_name_for_modifier(platform: Platform, token: &str) -> String {
    let macos = platform.is_macos();
    let name = match token.to_ascii_lowercase().as_str() {
        "cmdorctrl" | "commandorcontrol" => {
            if macos {
                "⌘"
            } else {
                "Ctrl"
            }
        }
        "ctrl" | "control" => {
            if macos {
                "⌃"
            } else {
                "Ctrl"
            }
        }
        "shift" => {
            if macos {
                "⇧"
            } else {
                "Shift"
            }
        }
        "alt" => {
            if macos {
                "⌥"
            } else {
                "Alt"
            }
        }
        // Only ever bound on macOS.
        "cmd" | "command" => "⌘",
        "option" => "⌥",
        " " => "Space",
        _ => return token.to_string(),
    };
    name.to_string()
}

/// Splits a raw accelerator like `CmdOrCtrl+Shift+F` into its tokens. A
/// trailing `++` means the `+` key itself. Whitespace is kept: `" "` is the
/// space key.
pub fn split_accelerator(accelerator: &str) -> Vec<&str> {
    if accelerator.is_empty() {
        return Vec::new();
    }
    if accelerator == "+" {
        return vec!["+"];
    }

    let (modifiers, plus_key) = match accelerator.strip_suffix("++") {
        Some(prefix) => (prefix, true),
        None => (accelerator, false),
    };

    let mut tokens = modifiers
        .split(ACCELERATOR_DELIMITER)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>();
    if plus_key {
        tokens.push("+");
    }
    tokens
}

pub fn accelerator_keys(accelerator: &str, resolver: &impl ModifierResolver) -> Vec<String> {
    split_accelerator(accelerator)
        .into_iter()
        .map(|token| resolver.resolve(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_uses_modifier_symbols() {
        let keys = accelerator_keys("CmdOrCtrl+Shift+F", &Platform::MacOs);
        assert_eq!(keys, vec!["⌘", "⇧", "F"]);

        let keys = accelerator_keys("Ctrl+Alt+Option+Cmd+K", &Platform::MacOs);
        assert_eq!(keys, vec!["⌃", "⌥", "⌥", "⌘", "K"]);
    }

    #[test]
    fn other_platforms_use_modifier_names() {
        for platform in [Platform::Windows, Platform::Linux] {
            let keys = accelerator_keys("CmdOrCtrl+Shift+F", &platform);
            assert_eq!(keys, vec!["Ctrl", "Shift", "F"]);

            let keys = accelerator_keys("control+alt+Delete", &platform);
            assert_eq!(keys, vec!["Ctrl", "Alt", "Delete"]);
        }
    }

    #[test]
    fn modifier_matching_ignores_case() {
        assert_eq!(display_name_for_modifier(Platform::MacOs, "SHIFT"), "⇧");
        assert_eq!(
            display_name_for_modifier(Platform::Linux, "CommandOrControl"),
            "Ctrl"
        );
    }

    #[test]
    fn space_key_gets_a_visible_name() {
        assert_eq!(display_name_for_modifier(Platform::Windows, " "), "Space");
    }

    #[test]
    fn unknown_tokens_pass_through_unchanged() {
        assert_eq!(display_name_for_modifier(Platform::MacOs, "F5"), "F5");
        assert_eq!(display_name_for_modifier(Platform::Linux, "Plus"), "Plus");
    }

    #[test]
    fn split_handles_plus_key_and_blank_input() {
        assert_eq!(split_accelerator("Ctrl++"), vec!["Ctrl", "+"]);
        assert_eq!(split_accelerator("+"), vec!["+"]);
        assert!(split_accelerator("").is_empty());
        assert_eq!(split_accelerator("F11"), vec!["F11"]);
    }

    #[test]
    fn space_key_survives_splitting() {
        assert_eq!(split_accelerator("Ctrl+ "), vec!["Ctrl", " "]);
        assert_eq!(
            accelerator_keys("Ctrl+ ", &Platform::Windows),
            vec!["Ctrl", "Space"]
        );
        assert_eq!(
            accelerator_keys("Shift+ +A", &Platform::MacOs),
            vec!["⇧", "Space", "A"]
        );
        assert_eq!(accelerator_keys(" ", &Platform::Linux), vec!["Space"]);
    }

    #[test]
    fn closures_act_as_resolvers() {
        let shout = |token: &str| token.to_uppercase();
        assert_eq!(accelerator_keys("Ctrl+s", &shout), vec!["CTRL", "S"]);
    }
}
