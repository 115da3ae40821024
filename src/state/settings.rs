// src/state/settings.rs
//! Application settings consumed by the shell UI (theme, add-on and
//! auto-copy flags). Persisted like every other slice.

use serde::{Deserialize, Serialize};

use super::Slice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub theme: String,
    pub color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            color: "pink".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub addons_enabled: bool,
    pub linked_sections_enabled: bool,
    pub auto_copy_on_template_change: bool,
    pub auto_copy_on_output_change: bool,
}

#[derive(Debug, Clone)]
pub enum SettingsAction {
    SetTheme(Theme),
    SetAddonsEnabled(bool),
    SetLinkedSectionsEnabled(bool),
    SetAutoCopyOnTemplateChange(bool),
    SetAutoCopyOnOutputChange(bool),
}

pub fn reduce(state: &Settings, action: SettingsAction) -> (Settings, Vec<Slice>) {
    let mut next = state.clone();
    match action {
        SettingsAction::SetTheme(theme) => next.theme = theme,
        SettingsAction::SetAddonsEnabled(enabled) => next.addons_enabled = enabled,
        SettingsAction::SetLinkedSectionsEnabled(enabled) => {
            next.linked_sections_enabled = enabled
        }
        SettingsAction::SetAutoCopyOnTemplateChange(enabled) => {
            next.auto_copy_on_template_change = enabled
        }
        SettingsAction::SetAutoCopyOnOutputChange(enabled) => {
            next.auto_copy_on_output_change = enabled
        }
    }
    (next, vec![Slice::Settings])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme.theme, "light");
        assert_eq!(settings.theme.color, "pink");
        assert!(!settings.addons_enabled);
        assert!(!settings.auto_copy_on_output_change);
    }

    #[test]
    fn test_reduce_sets_flags() {
        let settings = Settings::default();
        let (settings, changed) = reduce(&settings, SettingsAction::SetAddonsEnabled(true));
        assert!(settings.addons_enabled);
        assert_eq!(changed, vec![Slice::Settings]);

        let (settings, _) = reduce(
            &settings,
            SettingsAction::SetTheme(Theme {
                theme: "dark".to_string(),
                color: "teal".to_string(),
            }),
        );
        assert_eq!(settings.theme.theme, "dark");
    }
}
