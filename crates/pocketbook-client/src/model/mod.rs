pub mod filters;
pub mod transaction;

pub use filters::{Filters, TypeFilter};
pub use transaction::{Transaction, TransactionDraft, TransactionKind, TransactionUpdate};
