use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ClientResult;
use crate::commands::common::{RunOptions, notify_storage_failure, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::TransactionChangeData;
use crate::ledger::Ledger;
use crate::model::{TransactionDraft, TransactionKind};
use crate::notify::{FailedAction, Notification};
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: Option<String>,
    /// Defaults to today.
    pub date: Option<NaiveDate>,
}

pub fn run(request: AddRequest) -> ClientResult<SuccessEnvelope> {
    run_with_options(request, &RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(request: AddRequest, options: &RunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage, request, options)
}

pub fn run_in(
    storage: &dyn Storage,
    request: AddRequest,
    options: &RunOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let mut ledger = Ledger::load(storage);
    let draft = TransactionDraft {
        description: request.description,
        amount: request.amount,
        kind: request.kind,
        category: request.category,
        date: request.date.unwrap_or_else(|| options.today()),
    };

    let data = match ledger.add(draft, options.now()) {
        Ok(transaction) => TransactionChangeData {
            applied: true,
            notification: Notification::added(&transaction.description),
            transaction: Some(transaction),
            previous: None,
            transaction_count: ledger.len(),
            storage_error: None,
        },
        Err(error) => {
            let (notification, detail) = notify_storage_failure(error, FailedAction::Add)?;
            TransactionChangeData {
                applied: false,
                transaction: None,
                previous: None,
                transaction_count: ledger.len(),
                notification,
                storage_error: Some(detail),
            }
        }
    };
    success("add", data)
}
