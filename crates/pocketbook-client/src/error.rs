use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `pocketbook {cmd} --help` for usage."),
            None => "Run `pocketbook --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn transaction_not_found(id: &str) -> Self {
        Self::new(
            "transaction_not_found",
            &format!("Transaction `{id}` was not found."),
            vec![
                "Run `pocketbook list` to find a valid transaction id.".to_string(),
                "Retry the command with an id from that list.".to_string(),
            ],
        )
        .with_data(json!({
            "id": id,
        }))
    }

    pub fn confirmation_required(transaction_count: usize) -> Self {
        Self::new(
            "confirmation_required",
            &format!(
                "Clearing deletes all {transaction_count} transactions and cannot be undone."
            ),
            vec![
                "Run `pocketbook export` first if you want a copy of your data.".to_string(),
                "Re-run `pocketbook clear --yes` to confirm.".to_string(),
            ],
        )
        .with_data(json!({
            "transaction_count": transaction_count,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn tracker_home_unavailable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "tracker_home_unavailable",
            &format!("Cannot use tracker home `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `POCKETBOOK_HOME` to a writable directory."
            )],
        )
    }

    pub fn storage_invalid_key(key: &str) -> Self {
        Self::new(
            "storage_invalid_key",
            &format!("Storage key `{key}` is not valid."),
            vec!["Use keys made of ASCII letters, digits, `-` and `_`.".to_string()],
        )
    }

    pub fn storage_read_failed(key: &str, detail: &str) -> Self {
        Self::new(
            "storage_read_failed",
            &format!("Could not read `{key}` from storage: {detail}"),
            Vec::new(),
        )
    }

    pub fn storage_write_failed(key: &str, detail: &str) -> Self {
        Self::new(
            "storage_write_failed",
            &format!("Could not write `{key}` to storage: {detail}"),
            vec!["Check free disk space and permissions on the tracker home.".to_string()],
        )
    }

    pub fn storage_quota_exceeded(key: &str, size: usize, quota: usize) -> Self {
        Self::new(
            "storage_quota_exceeded",
            &format!("Value for `{key}` is {size} bytes, over the {quota} byte storage quota."),
            vec![
                "Export your data with `pocketbook export`.".to_string(),
                "Delete old transactions or run `pocketbook clear --yes`.".to_string(),
            ],
        )
        .with_data(json!({
            "key": key,
            "size": size,
            "quota": quota,
        }))
    }

    pub fn export_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_failed",
            &format!("Could not write export to `{location}`: {detail}"),
            vec!["Choose a writable path with `pocketbook export --output <path>`.".to_string()],
        )
    }

    /// Failures to write data out: storage writes and export files.
    pub fn is_persistence_failure(&self) -> bool {
        self.code.starts_with("storage_") || self.code == "export_failed"
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
