use crate::commands::common::{RunOptions, notify_storage_failure, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::TransactionChangeData;
use crate::ledger::Ledger;
use crate::model::TransactionUpdate;
use crate::notify::{FailedAction, Notification};
use crate::storage::Storage;
use crate::{ClientError, ClientResult};

pub fn run(id: &str, update: &TransactionUpdate) -> ClientResult<SuccessEnvelope> {
    run_with_options(id, update, &RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(
    id: &str,
    update: &TransactionUpdate,
    options: &RunOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage, id, update)
}

pub fn run_in(
    storage: &dyn Storage,
    id: &str,
    update: &TransactionUpdate,
) -> ClientResult<SuccessEnvelope> {
    if update.is_empty() {
        return Err(ClientError::invalid_argument_with_recovery(
            "Nothing to change: pass at least one field to update.",
            vec![
                "Use --description, --amount, --type, --category, or --date.".to_string(),
                "Run `pocketbook edit --help` for usage.".to_string(),
            ],
        ));
    }

    let mut ledger = Ledger::load(storage);
    let data = match ledger.edit(id, update) {
        Ok(edited) => TransactionChangeData {
            applied: true,
            notification: Notification::updated(
                &edited.before.description,
                &edited.after.description,
            ),
            transaction: Some(edited.after),
            previous: Some(edited.before),
            transaction_count: ledger.len(),
            storage_error: None,
        },
        Err(error) => {
            let (notification, detail) = notify_storage_failure(error, FailedAction::Update)?;
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
    success("edit", data)
}
