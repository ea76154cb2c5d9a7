use crate::commands::common::{RunOptions, notify_storage_failure, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ClearData;
use crate::ledger::Ledger;
use crate::notify::{FailedAction, Notification};
use crate::storage::Storage;
use crate::{ClientError, ClientResult};

pub fn run(confirmed: bool) -> ClientResult<SuccessEnvelope> {
    run_with_options(confirmed, &RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(confirmed: bool, options: &RunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage, confirmed)
}

/// Deletes every transaction. Requires `confirmed` unless the collection is
/// already empty, in which case nothing is written.
pub fn run_in(storage: &dyn Storage, confirmed: bool) -> ClientResult<SuccessEnvelope> {
    let mut ledger = Ledger::load(storage);
    if ledger.is_empty() {
        return success(
            "clear",
            ClearData {
                applied: false,
                removed_count: 0,
                notification: Notification::nothing_to_clear(),
                storage_error: None,
            },
        );
    }
    if !confirmed {
        return Err(ClientError::confirmation_required(ledger.len()));
    }

    let data = match ledger.clear() {
        Ok(removed_count) => ClearData {
            applied: true,
            removed_count,
            notification: Notification::cleared(),
            storage_error: None,
        },
        Err(error) => {
            let (notification, detail) = notify_storage_failure(error, FailedAction::Clear)?;
            ClearData {
                applied: false,
                removed_count: 0,
                notification,
                storage_error: Some(detail),
            }
        }
    };
    success("clear", data)
}
