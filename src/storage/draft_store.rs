//! Draft and saved-proposal persistence on top of a key-value store.
//!
//! Three keys are used:
//! - customer fields: `{"name", "meetingDate", "requirements"}`
//! - property blocks: `["raw block", ...]` (blank blocks are not stored)
//! - saved proposals: `[SavedProposal, ...]`, newest first, at most 50
//!
//! Reads never fail: missing or malformed values are logged and come back
//! as empty structures.

use super::error::StorageResult;
use super::kv::KeyValueStore;
use crate::constants::MAX_SAVED_PROPOSALS;
use crate::settings::StorageSettings;
use crate::types::{Draft, SavedProposal, datetime_local};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The three keys used by [`DraftStore`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub customer: String,
    pub properties: String,
    pub saved: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::from(&StorageSettings::default())
    }
}

impl From<&StorageSettings> for StorageKeys {
    fn from(settings: &StorageSettings) -> Self {
        Self {
            customer: settings.customer_data_key.clone(),
            properties: settings.property_data_key.clone(),
            saved: settings.saved_list_key.clone(),
        }
    }
}

impl StorageKeys {
    pub fn all(&self) -> [&str; 3] {
        [&self.customer, &self.properties, &self.saved]
    }
}

/// Stored shape of the customer fields
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredCustomer {
    name: String,
    meeting_date: Option<String>,
    requirements: String,
}

#[derive(Clone, Debug)]
pub struct DraftStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ==================== Current Draft ====================

    /// Persist the customer fields and the non-blank property blocks
    pub fn save_draft(&self, draft: &Draft) -> StorageResult<()> {
        let customer = StoredCustomer {
            name: draft.customer_name.clone(),
            meeting_date: Some(
                draft
                    .meeting_date_time
                    .as_ref()
                    .map(datetime_local::format)
                    .unwrap_or_default(),
            ),
            requirements: draft.requirements.clone(),
        };
        self.store
            .set(&self.keys.customer, &serde_json::to_string(&customer)?)?;
        self.store.set(
            &self.keys.properties,
            &serde_json::to_string(&draft.filled_properties())?,
        )?;
        Ok(())
    }

    /// Load the stored draft; absent parts come back empty.
    ///
    /// `properties` holds only what was stored, so it may be empty.
    pub fn load_draft(&self) -> Draft {
        let customer: StoredCustomer = self.read_or_default(&self.keys.customer);
        let properties: Vec<String> = self.read_or_default(&self.keys.properties);

        Draft {
            customer_name: customer.name,
            meeting_date_time: customer.meeting_date.as_deref().and_then(datetime_local::parse),
            requirements: customer.requirements,
            properties,
        }
    }

    /// Remove the two draft keys (saved proposals are untouched)
    pub fn clear_draft(&self) -> StorageResult<()> {
        self.store.remove(&self.keys.customer)?;
        self.store.remove(&self.keys.properties)?;
        Ok(())
    }

    // ==================== Saved Proposals ====================

    /// All saved proposals, newest first.
    ///
    /// Entries that no longer decode are skipped one by one, so a single bad
    /// entry never costs the rest of the list.
    pub fn saved_proposals(&self) -> Vec<SavedProposal> {
        let entries: Vec<serde_json::Value> = self.read_or_default(&self.keys.saved);
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(proposal) => Some(proposal),
                Err(e) => {
                    tracing::warn!("Skipping malformed saved proposal #{}: {}", i, e);
                    None
                }
            })
            .collect()
    }

    pub fn find_proposal(&self, id: i64) -> Option<SavedProposal> {
        self.saved_proposals().into_iter().find(|p| p.id == id)
    }

    /// Insert `proposal` at the front, replacing any entry with the same id
    /// and evicting the oldest entries beyond the cap
    pub fn save_proposal(&self, proposal: SavedProposal) -> StorageResult<()> {
        let mut list = self.saved_proposals();
        list.retain(|p| p.id != proposal.id);
        list.insert(0, proposal);
        if list.len() > MAX_SAVED_PROPOSALS {
            let evicted = list.len() - MAX_SAVED_PROPOSALS;
            list.truncate(MAX_SAVED_PROPOSALS);
            tracing::debug!("Evicted {} oldest saved proposal(s)", evicted);
        }
        self.write_saved(&list)
    }

    /// Returns whether an entry was removed
    pub fn delete_proposal(&self, id: i64) -> StorageResult<bool> {
        let mut list = self.saved_proposals();
        let before = list.len();
        list.retain(|p| p.id != id);
        if list.len() == before {
            return Ok(false);
        }
        self.write_saved(&list)?;
        Ok(true)
    }

    pub fn clear_saved(&self) -> StorageResult<()> {
        self.store.remove(&self.keys.saved)
    }

    /// Remove all three keys
    pub fn clear_all(&self) -> StorageResult<()> {
        self.clear_draft()?;
        self.clear_saved()
    }

    fn write_saved(&self, list: &[SavedProposal]) -> StorageResult<()> {
        self.store.set(&self.keys.saved, &serde_json::to_string(list)?)
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                tracing::warn!("Failed to read '{}': {}", key, e);
                return T::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Malformed JSON under '{}': {}", key, e);
            T::default()
        })
    }
}
