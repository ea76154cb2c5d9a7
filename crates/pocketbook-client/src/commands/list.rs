use crate::ClientResult;
use crate::aggregate::summarize;
use crate::commands::common::{RunOptions, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ListData;
use crate::dates::parse_year_month_strict;
use crate::ledger::Ledger;
use crate::model::{Filters, Transaction};
use crate::storage::Storage;

pub fn run(filters: Filters) -> ClientResult<SuccessEnvelope> {
    run_with_options(filters, &RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(filters: Filters, options: &RunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage, filters)
}

/// Transactions matching `filters`, in the order they were recorded.
pub fn run_in(storage: &dyn Storage, filters: Filters) -> ClientResult<SuccessEnvelope> {
    if let Some(month) = &filters.month {
        parse_year_month_strict(month, "list")?;
    }

    let ledger = Ledger::load(storage);
    let matched = filters
        .apply(ledger.transactions())
        .into_iter()
        .cloned()
        .collect::<Vec<Transaction>>();

    let data = ListData {
        filters_active: filters.is_active(),
        total_count: ledger.len(),
        matched_count: matched.len(),
        totals: summarize(&matched),
        filters,
        transactions: matched,
    };
    success("list", data)
}
