//! The transaction collection and its persistence.
//!
//! A [`Ledger`] is loaded once per command from a [`Storage`] and rewrites
//! the whole collection on every mutation. Mutations stage the next
//! collection, write it, and only then replace the in-memory copy, so a
//! failed write leaves both copies as they were.

use chrono::{DateTime, Utc};
use ulid::Ulid;

use crate::dates::format_timestamp;
use crate::model::{Transaction, TransactionDraft, TransactionUpdate};
use crate::storage::{Storage, TRANSACTIONS_KEY};
use crate::{ClientError, ClientResult};

pub struct Ledger<'a> {
    storage: &'a dyn Storage,
    transactions: Vec<Transaction>,
}

/// Before and after images of an edited transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
    pub before: Transaction,
    pub after: Transaction,
}

impl<'a> Ledger<'a> {
    pub fn load(storage: &'a dyn Storage) -> Self {
        Self {
            storage,
            transactions: read_transactions(storage),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    pub fn add(&mut self, draft: TransactionDraft, now: DateTime<Utc>) -> ClientResult<Transaction> {
        let transaction = Transaction::from_draft(draft, new_transaction_id(), format_timestamp(&now))?;
        let mut next = self.transactions.clone();
        next.push(transaction.clone());
        self.commit(next)?;
        tracing::debug!("added transaction {}", transaction.id);
        Ok(transaction)
    }

    pub fn edit(&mut self, id: &str, update: &TransactionUpdate) -> ClientResult<Edited> {
        let index = self.position(id)?;
        let before = self.transactions[index].clone();
        let after = update.apply_to(&before)?;

        let mut next = self.transactions.clone();
        next[index] = after.clone();
        self.commit(next)?;
        tracing::debug!("edited transaction {id}");
        Ok(Edited { before, after })
    }

    pub fn delete(&mut self, id: &str) -> ClientResult<Transaction> {
        let index = self.position(id)?;
        let mut next = self.transactions.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        tracing::debug!("deleted transaction {id}");
        Ok(removed)
    }

    /// Removes every transaction and returns how many were removed.
    pub fn clear(&mut self) -> ClientResult<usize> {
        let removed = self.transactions.len();
        self.commit(Vec::new())?;
        tracing::debug!("cleared {removed} transactions");
        Ok(removed)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for transaction in &self.transactions {
            if !seen.iter().any(|category| *category == transaction.category) {
                seen.push(transaction.category.clone());
            }
        }
        seen
    }

    fn position(&self, id: &str) -> ClientResult<usize> {
        self.transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or_else(|| ClientError::transaction_not_found(id))
    }

    fn commit(&mut self, next: Vec<Transaction>) -> ClientResult<()> {
        let encoded = serde_json::to_string(&next)
            .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
        if let Err(error) = self.storage.set_item(TRANSACTIONS_KEY, &encoded) {
            tracing::error!("failed to save transactions: {error}");
            return Err(error);
        }
        self.transactions = next;
        Ok(())
    }
}

fn read_transactions(storage: &dyn Storage) -> Vec<Transaction> {
    let raw = match storage.get_item(TRANSACTIONS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!("failed to read stored transactions, starting empty: {error}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Transaction>>(&raw) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::warn!("stored transactions are not valid JSON, starting empty: {error}");
            Vec::new()
        }
    }
}

fn new_transaction_id() -> String {
    format!("txn_{}", Ulid::new())
}
