//! Reductions over the transaction collection: all-time totals, per-month
//! totals and per-category breakdowns for a selected month.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::dates::month_key;
use crate::model::{Transaction, TransactionKind};

const RATIO_DECIMALS: u32 = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub savings_rate: Decimal,
    pub transaction_count: usize,
    pub income_count: usize,
    pub expense_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    /// Fraction of the breakdown total, between 0 and 1.
    pub share: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthInsights {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub savings_rate: Decimal,
    /// Expenses as a fraction of income; zero when there is no income.
    pub expense_ratio: Decimal,
    pub transaction_count: usize,
    pub expense_breakdown: Vec<CategoryShare>,
    pub income_breakdown: Vec<CategoryShare>,
    pub overall: Totals,
}

pub fn summarize(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => {
                totals.income = totals.income.saturating_add(transaction.amount);
                totals.income_count += 1;
            }
            TransactionKind::Expense => {
                totals.expense = totals.expense.saturating_add(transaction.amount);
                totals.expense_count += 1;
            }
        }
    }
    totals.transaction_count = transactions.len();
    totals.balance = totals.income.saturating_sub(totals.expense);
    totals.savings_rate = savings_rate(totals.income, totals.balance);
    totals
}

/// `balance / income`, or zero when there is no income.
pub fn savings_rate(income: Decimal, balance: Decimal) -> Decimal {
    ratio(balance, income)
}

pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthTotals> {
    let mut months: BTreeMap<String, MonthTotals> = BTreeMap::new();
    for transaction in transactions {
        let key = month_key(&transaction.date);
        let entry = months.entry(key.clone()).or_insert_with(|| MonthTotals {
            month: key,
            ..MonthTotals::default()
        });
        match transaction.kind {
            TransactionKind::Income => entry.income = entry.income.saturating_add(transaction.amount),
            TransactionKind::Expense => entry.expense = entry.expense.saturating_add(transaction.amount),
        }
        entry.transaction_count += 1;
    }

    months
        .into_values()
        .map(|mut month| {
            month.balance = month.income.saturating_sub(month.expense);
            month
        })
        .collect()
}

/// Category totals for one kind, largest first. Equal amounts fall back to
/// category name order so the output is stable.
pub fn category_breakdown<'a, I>(transactions: I, kind: TransactionKind) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut by_category: HashMap<&str, Decimal> = HashMap::new();
    for transaction in transactions {
        if transaction.kind != kind {
            continue;
        }
        let slot = by_category
            .entry(transaction.category.as_str())
            .or_insert(Decimal::ZERO);
        *slot = slot.saturating_add(transaction.amount);
    }

    let total = by_category
        .values()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(*amount));

    let mut rows = by_category
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category: category.to_string(),
            amount,
            share: ratio(amount, total),
        })
        .collect::<Vec<CategoryShare>>();
    rows.sort_by(|left, right| {
        right
            .amount
            .cmp(&left.amount)
            .then_with(|| left.category.cmp(&right.category))
    });
    rows
}

pub fn month_insights(transactions: &[Transaction], month: &str) -> MonthInsights {
    let in_month = transactions
        .iter()
        .filter(|transaction| month_key(&transaction.date) == month)
        .collect::<Vec<&Transaction>>();

    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for transaction in &in_month {
        match transaction.kind {
            TransactionKind::Income => income = income.saturating_add(transaction.amount),
            TransactionKind::Expense => expense = expense.saturating_add(transaction.amount),
        }
    }
    let balance = income.saturating_sub(expense);

    MonthInsights {
        month: month.to_string(),
        income,
        expense,
        balance,
        savings_rate: savings_rate(income, balance),
        expense_ratio: ratio(expense, income),
        transaction_count: in_month.len(),
        expense_breakdown: category_breakdown(in_month.iter().copied(), TransactionKind::Expense),
        income_breakdown: category_breakdown(in_month.iter().copied(), TransactionKind::Income),
        overall: summarize(transactions),
    }
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .map(|value| value.round_dp(RATIO_DECIMALS))
        .unwrap_or(Decimal::ZERO)
}
