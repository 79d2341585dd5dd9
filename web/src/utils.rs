use gloo::storage::{LocalStorage, Storage};
use serde_json::Value;
use trivia_core as trivia;

/// LocalStorage entry a type is persisted under.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

/// Board state slot in the browser's LocalStorage.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LocalStore;

impl StorageKey for LocalStore {
    const KEY: &'static str = "jeopardyGameState";
}

impl trivia::StateStore for LocalStore {
    fn read(&self) -> Option<Value> {
        match LocalStorage::get::<Value>(Self::KEY) {
            Ok(value) => Some(value),
            Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log::warn!("stored board state is unreadable, starting fresh: {}", err);
                None
            }
        }
    }

    fn write(&mut self, value: &Value) -> trivia::Result<()> {
        LocalStorage::set(Self::KEY, value)
            .map_err(|err| trivia::BoardError::Storage(err.to_string()))
    }
}

/// Asks through the browser's blocking `window.confirm`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BrowserConfirm;

impl trivia::Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}
