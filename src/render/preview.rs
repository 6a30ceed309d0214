//! Preview document model built from a draft.

use crate::constants::{
    PLACEHOLDER_CUSTOMER_NAME, PLACEHOLDER_MEETING_DATE, PLACEHOLDER_REQUIREMENTS,
};
use crate::parser::parse_property_block;
use crate::types::{Draft, ParsedProperty};
use chrono::NaiveDateTime;

/// Display pattern for the meeting date/time
pub const MEETING_DATE_FORMAT: &str = "%Y. %m. %d. %H:%M";

/// Header fields as displayed, placeholders already applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewHeader {
    pub customer_name: String,
    pub meeting_date: String,
    pub requirements: String,
}

/// One numbered listing in the preview
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewEntry {
    /// 1-based display number; blocks that failed to parse are not counted
    pub number: usize,
    pub property: ParsedProperty,
    /// Whether the contact line is shown (export may hide it temporarily)
    pub contact_visible: bool,
}

impl PreviewEntry {
    /// The contact line, if present and currently visible
    pub fn visible_contact(&self) -> Option<&str> {
        if self.contact_visible {
            self.property.contact_info.as_deref()
        } else {
            None
        }
    }
}

/// Everything the preview panel shows for one draft
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewDocument {
    pub header: PreviewHeader,
    pub entries: Vec<PreviewEntry>,
}

impl PreviewDocument {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries carrying contact info, visible or not
    pub fn contact_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.property.contact_info.is_some())
            .count()
    }
}

/// Build the preview for `draft`.
///
/// Blank blocks, blocks with fewer than two lines and blocks without a title
/// are skipped, and numbering stays sequential across the ones kept.
pub fn build_preview(draft: &Draft) -> PreviewDocument {
    let header = PreviewHeader {
        customer_name: or_placeholder(&draft.customer_name, PLACEHOLDER_CUSTOMER_NAME),
        meeting_date: format_meeting_datetime(draft.meeting_date_time),
        requirements: or_placeholder(&draft.requirements, PLACEHOLDER_REQUIREMENTS),
    };

    let entries = draft
        .properties
        .iter()
        .filter_map(|block| parse_property_block(block))
        .filter(|property| !property.title.is_empty())
        .enumerate()
        .map(|(i, property)| PreviewEntry {
            number: i + 1,
            property,
            contact_visible: true,
        })
        .collect();

    PreviewDocument { header, entries }
}

/// Format a meeting time as `YYYY. MM. DD. HH:MM`, or the placeholder
pub fn format_meeting_datetime(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(dt) => dt.format(MEETING_DATE_FORMAT).to_string(),
        None => PLACEHOLDER_MEETING_DATE.to_string(),
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
