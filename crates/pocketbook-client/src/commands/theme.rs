use crate::ClientResult;
use crate::commands::common::{RunOptions, notify_storage_failure, open_storage};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ThemeData;
use crate::notify::{FailedAction, Notification};
use crate::storage::Storage;
use crate::theme::{self, Theme, ThemeSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

pub fn run(action: ThemeAction) -> ClientResult<SuccessEnvelope> {
    run_with_options(action, &RunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(action: ThemeAction, options: &RunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let storage = open_storage(options)?;
    run_in(&storage, action)
}

pub fn run_in(storage: &dyn Storage, action: ThemeAction) -> ClientResult<SuccessEnvelope> {
    let current = theme::resolve(storage);
    let saved = match action {
        ThemeAction::Show => {
            return success(
                "theme",
                ThemeData {
                    theme: current.theme,
                    source: current.source,
                    changed: false,
                    notification: None,
                    storage_error: None,
                },
            );
        }
        ThemeAction::Set(theme) => theme::set(storage, theme).map(|()| theme),
        ThemeAction::Toggle => theme::toggle(storage),
    };

    let data = match saved {
        Ok(target) => ThemeData {
            theme: target,
            source: ThemeSource::Stored,
            changed: target != current.theme,
            notification: Some(Notification::theme_saved(target.as_str())),
            storage_error: None,
        },
        Err(error) => {
            let (notification, detail) = notify_storage_failure(error, FailedAction::SaveTheme)?;
            ThemeData {
                theme: current.theme,
                source: current.source,
                changed: false,
                notification: Some(notification),
                storage_error: Some(detail),
            }
        }
    };
    success("theme", data)
}
