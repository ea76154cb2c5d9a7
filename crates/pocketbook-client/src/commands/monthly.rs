use crate::ClientResult;
use crate::aggregate::monthly_totals;
use crate::commands::common::{RunOptions, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::MonthlyData;
use crate::ledger::Ledger;
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
        "monthly",
        MonthlyData {
            months: monthly_totals(ledger.transactions()),
        },
    )
}
