use crate::ClientResult;
use crate::aggregate::summarize;
use crate::commands::common::{RunOptions, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
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
    success("summary", summarize(ledger.transactions()))
}
