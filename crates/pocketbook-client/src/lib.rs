pub mod aggregate;
pub mod commands;
pub mod contracts;
pub mod dates;
pub mod error;
pub mod export;
pub mod ledger;
pub mod model;
pub mod notify;
pub mod state;
pub mod storage;
pub mod theme;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
