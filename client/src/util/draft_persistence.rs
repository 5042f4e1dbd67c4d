//! Browser localStorage persistence for the editor draft.
//!
//! Only the demo page uses this; the map widget itself never stores
//! anything. Outside the browser every call is a no-op.

#[cfg(test)]
#[path = "draft_persistence_test.rs"]
mod draft_persistence_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "mapdraft_draft";

/// Load the saved draft, if any.
pub fn load_draft() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Save `draft`, replacing whatever was stored. Empty text removes the entry.
pub fn save_draft(draft: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let result = if draft.trim().is_empty() {
            storage.remove_item(STORAGE_KEY)
        } else {
            storage.set_item(STORAGE_KEY, draft)
        };
        if result.is_err() {
            log::warn!("draft not persisted: localStorage refused the write");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = draft;
    }
}
