//! User-facing outcome messages attached to command results.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn added(description: &str) -> Self {
        Self::new(
            NotificationLevel::Success,
            format!("\"{description}\" added successfully!"),
        )
    }

    pub fn updated(old_description: &str, new_description: &str) -> Self {
        let message = if old_description == new_description {
            format!("\"{old_description}\" updated successfully!")
        } else {
            format!("\"{old_description}\" updated to \"{new_description}\" successfully!")
        };
        Self::new(NotificationLevel::Info, message)
    }

    pub fn deleted(description: &str) -> Self {
        Self::new(
            NotificationLevel::Warning,
            format!("\"{description}\" deleted successfully!"),
        )
    }

    pub fn cleared() -> Self {
        Self::new(
            NotificationLevel::Warning,
            "All transactions cleared successfully!",
        )
    }

    pub fn nothing_to_clear() -> Self {
        Self::new(NotificationLevel::Info, "There are no transactions to clear.")
    }

    pub fn exported(count: usize) -> Self {
        Self::new(
            NotificationLevel::Info,
            format!("Exported {count} transactions successfully!"),
        )
    }

    pub fn nothing_to_export() -> Self {
        Self::new(NotificationLevel::Warning, "No transactions to export!")
    }

    pub fn theme_saved(theme: &str) -> Self {
        Self::new(NotificationLevel::Info, format!("Switched to {theme} theme."))
    }

    pub fn failed(action: FailedAction) -> Self {
        Self::new(NotificationLevel::Error, action.message())
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Operations whose persistence step can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedAction {
    Add,
    Update,
    Delete,
    Clear,
    Export,
    SaveTheme,
}

impl FailedAction {
    const fn message(self) -> &'static str {
        match self {
            Self::Add => "Failed to add transaction!",
            Self::Update => "Failed to update transaction!",
            Self::Delete => "Failed to delete transaction!",
            Self::Clear => "Failed to clear transactions!",
            Self::Export => "Failed to export data!",
            Self::SaveTheme => "Failed to save theme preference!",
        }
    }
}
