use std::path::PathBuf;

use crate::ClientResult;
use crate::commands::common::{RunOptions, notify_storage_failure, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ExportData;
use crate::export::{default_file_name, render_csv, write_export};
use crate::ledger::Ledger;
use crate::notify::{FailedAction, Notification};
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// `expenses-YYYY-MM-DD.csv` in the current directory.
    DefaultFile,
    File(PathBuf),
    /// Return the CSV in the result instead of writing a file.
    Inline,
}

pub fn run(target: ExportTarget) -> ClientResult<SuccessEnvelope> {
    run_with_options(target, &RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(target: ExportTarget, options: &RunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage, target, options)
}

pub fn run_in(
    storage: &dyn Storage,
    target: ExportTarget,
    options: &RunOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let ledger = Ledger::load(storage);
    if ledger.is_empty() {
        return success(
            "export",
            ExportData {
                applied: false,
                transaction_count: 0,
                path: None,
                csv: None,
                notification: Notification::nothing_to_export(),
                storage_error: None,
            },
        );
    }

    let csv = render_csv(ledger.transactions())?;
    let count = ledger.len();
    let path = match target {
        ExportTarget::Inline => {
            return success(
                "export",
                ExportData {
                    applied: true,
                    transaction_count: count,
                    path: None,
                    csv: Some(csv),
                    notification: Notification::exported(count),
                    storage_error: None,
                },
            );
        }
        ExportTarget::DefaultFile => PathBuf::from(default_file_name(options.today())),
        ExportTarget::File(path) => path,
    };

    let data = match write_export(&path, &csv) {
        Ok(()) => ExportData {
            applied: true,
            transaction_count: count,
            path: Some(path.display().to_string()),
            csv: None,
            notification: Notification::exported(count),
            storage_error: None,
        },
        Err(error) => {
            tracing::error!("failed to export transactions: {error}");
            let (notification, detail) = notify_storage_failure(error, FailedAction::Export)?;
            ExportData {
                applied: false,
                transaction_count: count,
                path: Some(path.display().to_string()),
                csv: None,
                notification,
                storage_error: Some(detail),
            }
        }
    };
    success("export", data)
}
