use crate::ClientResult;
use crate::commands::common::{RunOptions, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::CategoriesData;
use crate::ledger::Ledger;
use crate::model::TransactionKind;
use crate::storage::Storage;

pub fn run() -> ClientResult<SuccessEnvelope> {
    run_with_options(&RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(options: &RunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage)
}

pub fn run_in(storage: &dyn Storage) -> ClientResult<SuccessEnvelope> {
    let ledger = Ledger::load(storage);
    success(
        "categories",
        CategoriesData {
            in_use: ledger.categories(),
            income_defaults: defaults(TransactionKind::Income),
            expense_defaults: defaults(TransactionKind::Expense),
        },
    )
}

fn defaults(kind: TransactionKind) -> Vec<String> {
    kind.default_categories()
        .iter()
        .map(|category| (*category).to_string())
        .collect()
}
