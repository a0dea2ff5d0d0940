use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::{Plain, StyleTable, Theme};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Environment variable naming an alternative user config file.
pub const CONFIG_ENV_VAR: &str = "SHELLEXPLAIN_CONFIG";

const USER_CONFIG_PATH: &str = "~/.config/shellexplain/config.toml";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// Style string per role name, e.g. `program = "bold green"`.
    #[serde(default)]
    pub theme: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Paint output with the theme; when false every role is left unstyled.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Level for the file log: off, error, warn, info, debug or trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            log_level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".into()
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    theme: ThemeOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    color: Option<bool>,
    log_level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ThemeOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    remove: Vec<String>,
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

// ── Merge logic ──

/// Merge user theme entries into the defaults.
/// In replace mode: user entries replace the defaults entirely.
/// In merge mode: remove roles first, then insert user entries (overriding).
fn merge_theme(
    base: &mut BTreeMap<String, String>,
    add: BTreeMap<String, String>,
    remove: &[String],
    replace: bool,
) {
    if replace {
        *base = add;
    } else {
        base.retain(|role, _| !remove.contains(role));
        base.extend(add);
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge the user overlay from `$SHELLEXPLAIN_CONFIG` or
    ///    `~/.config/shellexplain/config.toml` (if it exists)
    ///
    /// Scalars override; theme entries override per role. Set `replace = true`
    /// under `[theme]` to drop the default theme, or list roles in `remove`.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Path of the user overlay file, with `~` and `$VARS` expanded.
    pub fn user_config_path() -> PathBuf {
        let raw = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| USER_CONFIG_PATH.to_string());
        match shellexpand::full(&raw) {
            Ok(expanded) => PathBuf::from(expanded.into_owned()),
            Err(_) => PathBuf::from(shellexpand::tilde(&raw).into_owned()),
        }
    }

    fn load_overlay() -> Option<ConfigOverlay> {
        let content = std::fs::read_to_string(Self::user_config_path()).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("shellexplain: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.color {
            self.settings.color = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }

        let t = overlay.theme;
        merge_theme(&mut self.theme, t.entries, &t.remove, t.replace);
    }

    /// Apply an overlay from a TOML string.
    pub fn apply_overlay_str(&mut self, toml_str: &str) -> Result<()> {
        let overlay: ConfigOverlay = toml::from_str(toml_str)?;
        self.apply_overlay(overlay);
        Ok(())
    }

    /// The style table this configuration selects.
    ///
    /// With color on, the theme must cover every role.
    pub fn style_table(&self) -> Result<Box<dyn StyleTable>> {
        if !self.settings.color {
            return Ok(Box::new(Plain));
        }
        let theme = Theme::from_entries(&self.theme)?;
        theme.validate()?;
        Ok(Box::new(theme))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.settings.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::render::StyleRole;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert!(config.settings.color);
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
        assert!(!config.theme.is_empty());
    }

    #[test]
    fn default_theme_covers_every_role() {
        let config = Config::default_config();
        for role in StyleRole::all() {
            assert!(config.theme.contains_key(role.as_str()), "missing {role}");
        }
        assert!(config.style_table().is_ok());
    }

    #[test]
    fn overlay_overrides_one_role() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
                [theme]
                program = "italic red"
            "#,
            )
            .unwrap();
        assert_eq!(config.theme["program"], "italic red");
        assert!(config.theme.contains_key("option"));
    }

    #[test]
    fn overlay_remove_makes_theme_incomplete() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
                [theme]
                remove = ["assignmentValue"]
            "#,
            )
            .unwrap();
        assert!(!config.theme.contains_key("assignmentValue"));
        let err = config.style_table().err().unwrap();
        assert!(matches!(err, Error::MissingStyle(StyleRole::AssignmentValue)));
    }

    #[test]
    fn overlay_replace_theme() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
                [theme]
                replace = true
                program = "green"
            "#,
            )
            .unwrap();
        assert_eq!(config.theme.len(), 1);
    }

    #[test]
    fn color_off_selects_plain_table() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
                [settings]
                color = false
                log_level = "debug"

                [theme]
                replace = true
            "#,
            )
            .unwrap();
        let table = config.style_table().unwrap();
        assert_eq!(table.style(StyleRole::AssignmentName, "A").unwrap(), "A");
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn bad_style_string_is_reported() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
                [theme]
                word = "sparkly"
            "#,
            )
            .unwrap();
        let err = config.style_table().err().unwrap();
        assert!(err.to_string().contains("`word`"), "{err}");
    }

    #[test]
    fn invalid_overlay_is_an_error() {
        let mut config = Config::default_config();
        assert!(config.apply_overlay_str("[settings]\ncolor = \"yes\"").is_err());
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let original = Config::default_config();
        let mut config = Config::default_config();
        config.apply_overlay_str("").unwrap();
        assert_eq!(config.theme, original.theme);
        assert_eq!(config.settings.color, original.settings.color);
    }
}
