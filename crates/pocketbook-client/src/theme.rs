use std::fmt;

use serde::Serialize;

use crate::ClientResult;
use crate::storage::{Storage, THEME_KEY};

pub const COLORFGBG_ENV_VAR: &str = "COLORFGBG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Stored,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTheme {
    pub theme: Theme,
    pub source: ThemeSource,
}

/// Stored preference when present and valid, else the system preference.
pub fn resolve(storage: &dyn Storage) -> ResolvedTheme {
    if let Some(theme) = stored_theme(storage) {
        return ResolvedTheme {
            theme,
            source: ThemeSource::Stored,
        };
    }
    ResolvedTheme {
        theme: system_theme(),
        source: ThemeSource::System,
    }
}

pub fn set(storage: &dyn Storage, theme: Theme) -> ClientResult<()> {
    if let Err(error) = storage.set_item(THEME_KEY, theme.as_str()) {
        tracing::error!("failed to save theme preference: {error}");
        return Err(error);
    }
    Ok(())
}

/// Flips the resolved theme and persists the result.
pub fn toggle(storage: &dyn Storage) -> ClientResult<Theme> {
    let next = resolve(storage).theme.toggled();
    set(storage, next)?;
    Ok(next)
}

pub fn system_theme() -> Theme {
    std::env::var(COLORFGBG_ENV_VAR)
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
        .unwrap_or_default()
}

/// Reads the background slot of a `fg;bg` or `fg;extra;bg` value. ANSI
/// colors 0 through 6 and 8 are dark backgrounds.
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    if background <= 6 || background == 8 {
        Some(Theme::Dark)
    } else {
        Some(Theme::Light)
    }
}

fn stored_theme(storage: &dyn Storage) -> Option<Theme> {
    match storage.get_item(THEME_KEY) {
        Ok(Some(value)) => Theme::parse(&value),
        Ok(None) => None,
        Err(error) => {
            tracing::warn!("failed to read theme preference: {error}");
            None
        }
    }
}
