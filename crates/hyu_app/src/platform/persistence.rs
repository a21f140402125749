use std::fs;
use std::path::{Path, PathBuf};

use hyu_core::Theme;
use hyu_logging::{hyu_info, hyu_warn};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "hyu";
const PREFS_FILENAME: &str = "preferences.ron";

/// On-disk shape of the preference file. The theme is stored as the literal
/// string "light" or "dark"; anything else reads as no preference.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPrefs {
    theme: String,
}

fn prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFS_FILENAME))
}

pub(crate) fn load_theme() -> Option<Theme> {
    load_theme_from(&prefs_path()?)
}

fn load_theme_from(path: &Path) -> Option<Theme> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            hyu_warn!("Failed to read preferences from {:?}: {}", path, err);
            return None;
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            hyu_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return None;
        }
    };

    Theme::parse(&prefs.theme)
}

/// Best effort: failures are logged and otherwise ignored, the in-memory
/// theme is already correct.
pub(crate) fn save_theme(theme: Theme) {
    match prefs_path() {
        Some(path) => save_theme_to(&path, theme),
        None => hyu_warn!("No config directory; theme preference not saved"),
    }
}

fn save_theme_to(path: &Path, theme: Theme) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            hyu_warn!("Failed to create {:?}: {}", parent, err);
            return;
        }
    }

    let prefs = PersistedPrefs {
        theme: theme.as_str().to_owned(),
    };
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            hyu_warn!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    if let Err(err) = fs::write(path, content) {
        hyu_warn!("Failed to write preferences to {:?}: {}", path, err);
    } else {
        hyu_info!("Saved theme preference to {:?}", path);
    }
}

/// Ambient dark/light signal for terminals: the `COLORFGBG` convention
/// ("<fg>;<bg>", where background palette indices 0-6 and 8 mean a dark
/// background). Absent or unparsable means no signal.
pub(crate) fn ambient_theme() -> Option<Theme> {
    parse_colorfgbg(&std::env::var("COLORFGBG").ok()?)
}

fn parse_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match bg {
        0..=6 | 8 => Theme::Dark,
        _ => Theme::Light,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_the_prefs_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFS_FILENAME);

        assert_eq!(load_theme_from(&path), None, "missing file is no pref");

        save_theme_to(&path, Theme::Dark);
        assert_eq!(load_theme_from(&path), Some(Theme::Dark));

        save_theme_to(&path, Theme::Light);
        assert_eq!(load_theme_from(&path), Some(Theme::Light));
    }

    #[test]
    fn stored_value_is_the_literal_string() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFS_FILENAME);

        save_theme_to(&path, Theme::Dark);
        let content = fs::read_to_string(&path).expect("prefs file");
        assert!(content.contains("\"dark\""), "content: {content}");
    }

    #[test]
    fn corrupt_or_unknown_prefs_read_as_no_preference() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFS_FILENAME);

        fs::write(&path, "not ron at all {{{").expect("write");
        assert_eq!(load_theme_from(&path), None);

        fs::write(&path, "(theme: \"solarized\")").expect("write");
        assert_eq!(load_theme_from(&path), None);
    }

    #[test]
    fn colorfgbg_backgrounds_map_to_themes() {
        assert_eq!(parse_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(parse_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(parse_colorfgbg("12;8"), Some(Theme::Dark));
        assert_eq!(parse_colorfgbg("0;7"), Some(Theme::Light));
        assert_eq!(parse_colorfgbg("default;default"), None);
        assert_eq!(parse_colorfgbg(""), None);
    }
}
