#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pocketbook_client::commands::RunOptions;
use pocketbook_client::commands::add::{self, AddRequest};
use pocketbook_client::model::TransactionKind;
use pocketbook_client::storage::TRANSACTIONS_KEY;
use rust_decimal::Decimal;
use serde_json::Value;
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in(std::env::temp_dir())?;
    let home = dir.path().join("pocketbook-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_default()
}

pub fn options(home: &Path) -> RunOptions<'_> {
    RunOptions {
        home_override: Some(home),
        now: Some(fixed_now()),
        today: Some(date("2024-01-15")),
    }
}

pub fn request(
    description: &str,
    cents: i64,
    kind: TransactionKind,
    category: &str,
    on: &str,
) -> AddRequest {
    AddRequest {
        description: description.to_string(),
        amount: Decimal::new(cents, 2),
        kind,
        category: Some(category.to_string()),
        date: Some(date(on)),
    }
}

/// Adds a transaction and returns its id.
pub fn add_row(home: &Path, request: AddRequest) -> Option<String> {
    let result = add::run_with_options(request, &options(home));
    assert!(result.is_ok());
    let envelope = result.ok()?;
    envelope.data["transaction"]["id"]
        .as_str()
        .map(ToString::to_string)
}

pub fn stored_transactions(home: &Path) -> Option<Value> {
    let raw = fs::read_to_string(home.join(TRANSACTIONS_KEY)).ok()?;
    serde_json::from_str(&raw).ok()
}
