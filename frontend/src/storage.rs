use common::session::SessionStore;
use web_sys::Storage;

/// `window.localStorage`, looked up on every access so a storage that becomes
/// unavailable (private mode, quota) degrades to "signed out" instead of failing.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

/// Logs a failed storage write. A failed remove during a sign-out leaves the
/// credential behind, so it must not pass silently.
fn checked<E: std::fmt::Debug>(result: Result<(), E>, action: &str, key: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("could not {action} {key} in localStorage: {err:?}");
            false
        }
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            checked(storage.set_item(key, value), "write", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            checked(storage.remove_item(key), "remove", key);
        }
    }
}
