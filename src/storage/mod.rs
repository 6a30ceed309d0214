//! Persistence.
//!
//! - `kv` - the key-value store contract plus file and memory stores
//! - `draft_store` - the draft and saved-proposal layout on top of it
//! - `backend` - the save/load/upload capability with local fallback
//!
//! ## Error Handling
//!
//! Writes return `StorageResult<T>`. Reads of persisted state never fail;
//! malformed data degrades to empty values and is logged. Callers log write
//! failures and carry on: nothing here is fatal to the application.

mod backend;
mod draft_store;
mod error;
mod kv;

pub use backend::*;
pub use draft_store::*;
pub use error::*;
pub use kv::*;

use crate::settings::{AppSettings, default_data_dir};
use std::sync::Arc;

const STORE_FILE: &str = "storage.json";

/// Store handle shared between the draft store and the local backend
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Open the file store in the platform data directory.
///
/// Without a usable data directory the session runs on an in-memory store
/// and nothing survives a restart.
pub fn open_local_store(settings: &AppSettings) -> SharedStore {
    let Some(dir) = default_data_dir() else {
        tracing::warn!("No data directory available, drafts will not persist");
        return Arc::new(MemoryKvStore::new());
    };

    match FileKvStore::open(dir.join(STORE_FILE), settings.storage.quota_bytes) {
        Ok(store) => {
            tracing::debug!("Opened store at {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!("Failed to open store in {}: {}, using memory", dir.display(), e);
            Arc::new(MemoryKvStore::new())
        }
    }
}

/// Local backend, fronted by the document store when it is enabled
pub fn build_backend(
    settings: &AppSettings,
    drafts: DraftStore<SharedStore>,
) -> Box<dyn ProposalBackend> {
    let local = LocalBackend::new(drafts);
    match (&settings.remote.root, settings.remote_enabled()) {
        (Some(root), true) => {
            tracing::info!("Document store enabled at {}", root.display());
            Box::new(FallbackBackend::new(DocumentStoreBackend::new(root), local))
        }
        _ => Box::new(local),
    }
}
