use serde::Serialize;

use crate::dates::month_key;
use crate::model::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            other => TransactionKind::parse(other).map(Self::from),
        }
    }

    fn admits(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl From<TransactionKind> for TypeFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::Income,
            TransactionKind::Expense => Self::Expense,
        }
    }
}

/// View filters for the transaction list. Never persisted.
///
/// `None` (or an empty search term) means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    #[serde(rename = "type")]
    pub kind: TypeFilter,
    pub category: Option<String>,
    pub month: Option<String>,
    pub search: Option<String>,
}

impl Filters {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.kind.admits(transaction.kind) {
            return false;
        }
        if let Some(category) = &self.category
            && transaction.category != *category
        {
            return false;
        }
        if let Some(month) = &self.month
            && month_key(&transaction.date) != *month
        {
            return false;
        }
        if let Some(term) = self.search_term()
            && !transaction
                .description
                .to_lowercase()
                .contains(&term.to_lowercase())
        {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|transaction| self.matches(transaction))
            .collect()
    }

    /// True when type, category, or search narrows the view. The month
    /// selection alone does not count.
    pub fn is_active(&self) -> bool {
        self.kind != TypeFilter::All || self.category.is_some() || self.search_term().is_some()
    }

    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }
}
