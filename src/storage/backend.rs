//! Proposal backends: where an explicitly saved draft and exported images go.
//!
//! The local backend always works. A document store can be configured in
//! front of it; [`FallbackBackend`] tries the document store first and
//! quietly falls back to the local one on any failure.

use super::draft_store::DraftStore;
use super::error::{StorageError, StorageResult};
use super::kv::KeyValueStore;
use crate::constants::LOCAL_ID_PREFIX;
use crate::types::Draft;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

const PROPOSALS_DIR: &str = "proposals";
const IMAGES_DIR: &str = "images";

/// Capability interface for persisting proposals and uploading images
pub trait ProposalBackend {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Store `draft`, returning the id it can be loaded back with
    fn save(&self, draft: &Draft) -> StorageResult<String>;

    /// Load a draft by id; `Ok(None)` when the id is unknown
    fn load(&self, id: &str) -> StorageResult<Option<Draft>>;

    /// Upload an exported image; returns where it ended up, if anywhere
    fn upload(&self, bytes: &[u8], filename: &str) -> StorageResult<Option<String>>;
}

impl<T: ProposalBackend + ?Sized> ProposalBackend for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn save(&self, draft: &Draft) -> StorageResult<String> {
        (**self).save(draft)
    }

    fn load(&self, id: &str) -> StorageResult<Option<Draft>> {
        (**self).load(id)
    }

    fn upload(&self, bytes: &[u8], filename: &str) -> StorageResult<Option<String>> {
        (**self).upload(bytes, filename)
    }
}

// ============================================================================
// LocalBackend
// ============================================================================

/// Backend over the local draft keys. There is only one local slot, so
/// every id loads the current draft. Uploads are not supported.
#[derive(Clone, Debug)]
pub struct LocalBackend<S> {
    drafts: DraftStore<S>,
}

impl<S: KeyValueStore> LocalBackend<S> {
    pub fn new(drafts: DraftStore<S>) -> Self {
        Self { drafts }
    }
}

impl<S: KeyValueStore> ProposalBackend for LocalBackend<S> {
    fn name(&self) -> &'static str {
        "local"
    }

    fn save(&self, draft: &Draft) -> StorageResult<String> {
        self.drafts.save_draft(draft)?;
        Ok(format!("{}{}", LOCAL_ID_PREFIX, Utc::now().timestamp_millis()))
    }

    fn load(&self, _id: &str) -> StorageResult<Option<Draft>> {
        Ok(Some(self.drafts.load_draft()))
    }

    fn upload(&self, _bytes: &[u8], _filename: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }
}

// ============================================================================
// DocumentStoreBackend
// ============================================================================

/// Stored shape of a proposal document
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProposalDocument {
    #[serde(flatten)]
    draft: Draft,
    created_at: String,
    updated_at: String,
}

/// Document store rooted at a directory (typically a synced or network
/// share): `proposals/<uuid>.json` for drafts, `proposals/images/` for
/// uploaded exports.
#[derive(Clone, Debug)]
pub struct DocumentStoreBackend {
    root: PathBuf,
}

impl DocumentStoreBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn proposals_dir(&self) -> PathBuf {
        self.root.join(PROPOSALS_DIR)
    }

    fn ensure_root(&self) -> StorageResult<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(StorageError::Unavailable(format!(
                "document store root {} is not reachable",
                self.root.display()
            )))
        }
    }
}

impl ProposalBackend for DocumentStoreBackend {
    fn name(&self) -> &'static str {
        "document-store"
    }

    fn save(&self, draft: &Draft) -> StorageResult<String> {
        self.ensure_root()?;
        let dir = self.proposals_dir();
        std::fs::create_dir_all(&dir)?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let doc = ProposalDocument {
            draft: draft.clone(),
            created_at: now.clone(),
            updated_at: now,
        };
        std::fs::write(
            dir.join(format!("{}.json", id)),
            serde_json::to_string_pretty(&doc)?,
        )?;
        tracing::info!("Saved proposal document {}", id);
        Ok(id)
    }

    fn load(&self, id: &str) -> StorageResult<Option<Draft>> {
        self.ensure_root()?;
        let uuid = Uuid::parse_str(id).map_err(|_| StorageError::InvalidId(id.to_string()))?;

        let path = self.proposals_dir().join(format!("{}.json", uuid));
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let doc: ProposalDocument = serde_json::from_str(&content)?;
        Ok(Some(doc.draft))
    }

    fn upload(&self, bytes: &[u8], filename: &str) -> StorageResult<Option<String>> {
        self.ensure_root()?;
        let dir = self.proposals_dir().join(IMAGES_DIR);
        std::fs::create_dir_all(&dir)?;

        let name = std::path::Path::new(filename)
            .file_name()
            .ok_or_else(|| StorageError::InvalidId(filename.to_string()))?;
        let path = dir.join(name);
        std::fs::write(&path, bytes)?;
        tracing::info!("Uploaded image to {}", path.display());
        Ok(Some(path.display().to_string()))
    }
}

// ============================================================================
// FallbackBackend
// ============================================================================

/// Tries `primary`, and on any error logs it and uses `fallback` instead.
/// Ids issued by the local backend go straight to the fallback.
#[derive(Clone, Debug)]
pub struct FallbackBackend<P, F> {
    primary: P,
    fallback: F,
}

impl<P: ProposalBackend, F: ProposalBackend> FallbackBackend<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ProposalBackend, F: ProposalBackend> ProposalBackend for FallbackBackend<P, F> {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    fn save(&self, draft: &Draft) -> StorageResult<String> {
        match self.primary.save(draft) {
            Ok(id) => Ok(id),
            Err(e) => {
                tracing::warn!(
                    "{} save failed: {}, falling back to {}",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.save(draft)
            }
        }
    }

    fn load(&self, id: &str) -> StorageResult<Option<Draft>> {
        if id.starts_with(LOCAL_ID_PREFIX) {
            return self.fallback.load(id);
        }
        match self.primary.load(id) {
            Ok(Some(draft)) => Ok(Some(draft)),
            Ok(None) => self.fallback.load(id),
            Err(e) => {
                tracing::warn!(
                    "{} load failed: {}, falling back to {}",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.load(id)
            }
        }
    }

    fn upload(&self, bytes: &[u8], filename: &str) -> StorageResult<Option<String>> {
        match self.primary.upload(bytes, filename) {
            Ok(url) => Ok(url),
            Err(e) => {
                tracing::warn!("{} upload failed: {}", self.primary.name(), e);
                self.fallback.upload(bytes, filename)
            }
        }
    }
}
