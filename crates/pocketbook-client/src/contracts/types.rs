use serde::Serialize;

use crate::aggregate::{MonthTotals, Totals};
use crate::model::{Filters, Transaction};
use crate::notify::Notification;
use crate::theme::{Theme, ThemeSource};

/// Result of `add`, `edit`, and `delete`.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionChangeData {
    /// False when the change could not be saved and nothing was modified.
    pub applied: bool,
    pub transaction: Option<Transaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Transaction>,
    pub transaction_count: usize,
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearData {
    pub applied: bool,
    pub removed_count: usize,
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListData {
    pub filters: Filters,
    pub filters_active: bool,
    pub total_count: usize,
    pub matched_count: usize,
    /// Totals over the matched transactions only.
    pub totals: Totals,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyData {
    pub months: Vec<MonthTotals>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesData {
    pub in_use: Vec<String>,
    pub income_defaults: Vec<String>,
    pub expense_defaults: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub applied: bool,
    pub transaction_count: usize,
    /// Destination file, or `None` when the CSV went to stdout or was not
    /// written.
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<String>,
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeData {
    pub theme: Theme,
    pub source: ThemeSource,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_error: Option<String>,
}
