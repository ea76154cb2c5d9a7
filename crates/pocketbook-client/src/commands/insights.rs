use crate::ClientResult;
use crate::aggregate::month_insights;
use crate::commands::common::{RunOptions, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::dates::{month_key, parse_year_month_strict};
use crate::ledger::Ledger;
use crate::storage::Storage;

pub fn run(month: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(month, &RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(month: Option<&str>, options: &RunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage, month, options)
}

/// Insights for `month`, or the current month when none is given.
pub fn run_in(
    storage: &dyn Storage,
    month: Option<&str>,
    options: &RunOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let selected = match month {
        Some(value) => parse_year_month_strict(value, "insights")?,
        None => month_key(&options.today()),
    };

    let ledger = Ledger::load(storage);
    success("insights", month_insights(ledger.transactions(), &selected))
}
