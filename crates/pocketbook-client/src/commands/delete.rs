use crate::ClientResult;
use crate::commands::common::{RunOptions, notify_storage_failure, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::TransactionChangeData;
use crate::ledger::Ledger;
use crate::notify::{FailedAction, Notification};
use crate::storage::Storage;

pub fn run(id: &str) -> ClientResult<SuccessEnvelope> {
    run_with_options(id, &RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(id: &str, options: &RunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage, id)
}

pub fn run_in(storage: &dyn Storage, id: &str) -> ClientResult<SuccessEnvelope> {
    let mut ledger = Ledger::load(storage);
    let data = match ledger.delete(id) {
        Ok(removed) => TransactionChangeData {
            applied: true,
            notification: Notification::deleted(&removed.description),
            transaction: Some(removed),
            previous: None,
            transaction_count: ledger.len(),
            storage_error: None,
        },
        Err(error) => {
            let (notification, detail) = notify_storage_failure(error, FailedAction::Delete)?;
            TransactionChangeData {
                applied: false,
                transaction: ledger.find(id).cloned(),
                previous: None,
                transaction_count: ledger.len(),
                notification,
                storage_error: Some(detail),
            }
        }
    };
    success("delete", data)
}
