//! Core types shared across the parser, renderer, storage and controller.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Draft
// ============================================================================

/// The proposal currently being edited.
///
/// `properties` holds the raw text of each listing block exactly as typed;
/// parsing happens on every render and is never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    pub customer_name: String,
    #[serde(with = "datetime_local", default)]
    pub meeting_date_time: Option<NaiveDateTime>,
    pub requirements: String,
    pub properties: Vec<String>,
}

impl Draft {
    /// Create a draft with `property_count` empty listing blocks
    pub fn with_blocks(property_count: usize) -> Self {
        Self {
            properties: vec![String::new(); property_count],
            ..Self::default()
        }
    }

    /// Blocks whose trimmed text is non-empty, in order
    pub fn filled_properties(&self) -> Vec<String> {
        self.properties
            .iter()
            .filter(|text| !text.trim().is_empty())
            .cloned()
            .collect()
    }

    /// True when no field carries any content
    pub fn is_blank(&self) -> bool {
        self.customer_name.trim().is_empty()
            && self.meeting_date_time.is_none()
            && self.requirements.trim().is_empty()
            && self.properties.iter().all(|p| p.trim().is_empty())
    }
}

// ============================================================================
// Parsed Listings
// ============================================================================

/// Category of a listing detail line, decided by its field label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailCategory {
    /// 전세 / 매매 / 월세
    Price,
    /// 정보 / 면적
    Info,
    /// 특징 / 향
    Feature,
    /// 비고
    Note,
}

impl DetailCategory {
    /// CSS class suffix used by the preview markup
    pub fn css_class(&self) -> &'static str {
        match self {
            DetailCategory::Price => "price",
            DetailCategory::Info => "info",
            DetailCategory::Feature => "feature",
            DetailCategory::Note => "note",
        }
    }
}

/// One line of listing detail with its category, if any label matched
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailLine {
    pub text: String,
    pub category: Option<DetailCategory>,
}

/// Structured view of one free-text listing block
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProperty {
    pub title: String,
    pub detail_lines: Vec<DetailLine>,
    pub contact_info: Option<String>,
}

impl ParsedProperty {
    /// The result for input that cannot be interpreted
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.detail_lines.is_empty() && self.contact_info.is_none()
    }
}

// ============================================================================
// Saved Proposals
// ============================================================================

/// A named snapshot of a draft, kept in the saved list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProposal {
    /// Creation timestamp in milliseconds, unique within the list
    pub id: i64,
    pub customer_name: String,
    #[serde(with = "datetime_local", default)]
    pub meeting_date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub properties: Vec<String>,
    /// Human-readable save time
    #[serde(default)]
    pub saved_at: String,
}

impl SavedProposal {
    /// Snapshot `draft` under `id`
    pub fn from_draft(id: i64, draft: &Draft, saved_at: impl Into<String>) -> Self {
        Self {
            id,
            customer_name: draft.customer_name.clone(),
            meeting_date_time: draft.meeting_date_time,
            requirements: draft.requirements.clone(),
            properties: draft.filled_properties(),
            saved_at: saved_at.into(),
        }
    }

    /// Rebuild the draft this proposal was saved from
    pub fn to_draft(&self) -> Draft {
        Draft {
            customer_name: self.customer_name.clone(),
            meeting_date_time: self.meeting_date_time,
            requirements: self.requirements.clone(),
            properties: self.properties.clone(),
        }
    }
}

// ============================================================================
// Date/time wire format
// ============================================================================

/// `datetime-local` style timestamps (`2024-03-15T14:30`).
///
/// Deserialization is lenient: empty or unparseable values become `None`
/// instead of failing the whole record.
pub mod datetime_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M";

    const ACCEPTED: [&str; 4] = [
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn format(value: &NaiveDateTime) -> String {
        value.format(FORMAT).to_string()
    }

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        ACCEPTED
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }
}
