//! Listing text parsing
//!
//! Agents paste listings copied from a listing board. A block looks like:
//!
//! ```text
//! [매물 1]
//! ➡️강남 오피스텔
//! ➡️전세: 3억
//! ➡️면적: 33㎡
//! ➡️문의: 공인중개사 김OO 010-1234-5678
//! ```
//!
//! The first line is a header and is skipped, the second is the title, and
//! the last one is taken as the agent contact when it names a realtor office
//! or carries a phone number. Everything in between is a detail line,
//! categorized by its field label.
//!
//! A detail line that is last and happens to hold a phone-like number is
//! read as contact info. That mirrors how listing boards lay blocks out and
//! is kept as-is.

use crate::constants::LINE_MARKER;
use crate::types::{DetailCategory, DetailLine, ParsedProperty};
use regex::Regex;
use std::sync::OnceLock;

/// Substrings that mark a line as a realtor office line
const REALTOR_TERMS: [&str; 2] = ["중개사", "공인"];

/// Field labels per category, checked in this order; first match wins
const CATEGORY_LABELS: [(DetailCategory, &[&str]); 4] = [
    (DetailCategory::Price, &["전세:", "매매:", "월세:"]),
    (DetailCategory::Info, &["정 보:", "면적:"]),
    (DetailCategory::Feature, &["특 징:", "향:"]),
    (DetailCategory::Note, &["공개비고:", "비고:"]),
];

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX.get_or_init(|| Regex::new(r"\d{2,3}-\d{3,4}-\d{4}").expect("phone pattern"))
}

fn contact_label_regex() -> &'static Regex {
    static CONTACT_LABEL_REGEX: OnceLock<Regex> = OnceLock::new();
    CONTACT_LABEL_REGEX
        .get_or_init(|| Regex::new(r"^(?:➡️)?\s*문\s*의\s*:\s*").expect("contact label pattern"))
}

/// Split a raw block into trimmed, non-empty lines
pub fn block_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse a raw listing block.
///
/// Returns `None` when the block has fewer than two non-empty lines, which
/// is not enough to hold a header and a title.
pub fn parse_property_block(text: &str) -> Option<ParsedProperty> {
    let lines = block_lines(text);
    if lines.len() < 2 {
        return None;
    }
    Some(parse_property_lines(&lines))
}

/// Parse pre-split, trimmed, non-empty lines into a structured listing.
///
/// Fewer than two lines produce [`ParsedProperty::empty`].
pub fn parse_property_lines<S: AsRef<str>>(lines: &[S]) -> ParsedProperty {
    if lines.len() < 2 {
        return ParsedProperty::empty();
    }

    let title = strip_marker(lines[1].as_ref()).to_string();

    let last = lines[lines.len() - 1].as_ref();
    let (contact_info, detail_end) = if is_contact_line(last) {
        let contact = strip_contact_label(last);
        let contact = (!contact.is_empty()).then(|| contact.to_string());
        (contact, lines.len() - 1)
    } else {
        (None, lines.len())
    };

    let detail_lines = lines
        .get(2..detail_end.max(2))
        .unwrap_or_default()
        .iter()
        .map(|line| {
            let text = strip_marker(line.as_ref());
            DetailLine {
                text: text.to_string(),
                category: classify_detail(text),
            }
        })
        .collect();

    ParsedProperty {
        title,
        detail_lines,
        contact_info,
    }
}

/// Whether a line looks like the agent contact line
pub fn is_contact_line(line: &str) -> bool {
    REALTOR_TERMS.iter().any(|term| line.contains(term)) || phone_regex().is_match(line)
}

/// Category of a detail line, by substring match on its field label
pub fn classify_detail(line: &str) -> Option<DetailCategory> {
    CATEGORY_LABELS
        .iter()
        .find(|(_, labels)| labels.iter().any(|label| line.contains(label)))
        .map(|(category, _)| *category)
}

/// Drop one leading marker glyph and surrounding whitespace
fn strip_marker(line: &str) -> &str {
    line.strip_prefix(LINE_MARKER).unwrap_or(line).trim()
}

/// Drop a leading `문의:` label (with or without the marker glyph)
fn strip_contact_label(line: &str) -> &str {
    match contact_label_regex().find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}
