use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::notify::{FailedAction, Notification};
use crate::state::resolve_tracker_home;
use crate::storage::FileStorage;
use crate::{ClientError, ClientResult};

/// Overrides for the environment a command runs in.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions<'a> {
    pub home_override: Option<&'a Path>,
    pub now: Option<DateTime<Utc>>,
    /// Calendar day used for date defaults; the local date when unset.
    pub today: Option<NaiveDate>,
}

impl RunOptions<'_> {
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

pub(crate) fn open_storage(options: &RunOptions<'_>) -> ClientResult<FileStorage> {
    let home = resolve_tracker_home(options.home_override)?;
    tracing::debug!("using tracker home {}", home.display());
    Ok(FileStorage::new(&home))
}

/// Turns a failed write into an error notification. Any other error
/// still fails the command.
pub(crate) fn notify_storage_failure(
    error: ClientError,
    action: FailedAction,
) -> ClientResult<(Notification, String)> {
    if error.is_persistence_failure() {
        return Ok((Notification::failed(action), error.message));
    }
    Err(error)
}
