//! Preview markup.
//!
//! Produces the report fragment shown in the preview panel and a standalone
//! page around it for rasterization. All user text is escaped; no scripts or
//! event handlers are emitted.

use super::preview::{PreviewDocument, PreviewEntry};
use std::fmt::Write;

/// Page styles for the standalone report (white background, print friendly)
const REPORT_STYLES: &str = "html,body{margin:0;background:#ffffff;color:#1f2937;\
font-family:'Noto Sans KR','Apple SD Gothic Neo','Malgun Gothic',sans-serif;}\
.report{max-width:720px;margin:0 auto;padding:32px;}\
.report h1{font-size:1.6rem;margin:0 0 1.25rem;color:#111827;}\
.customer-info{border:1px solid #e5e7eb;border-radius:10px;padding:16px 20px;margin-bottom:24px;}\
.customer-row{display:flex;gap:12px;margin:6px 0;}\
.customer-row .label{min-width:88px;font-weight:700;color:#4b5563;}\
.requirements{white-space:pre-wrap;}\
.property-preview{border-left:4px solid #2563eb;padding:8px 16px;margin:0 0 20px;}\
.property-preview h3{margin:0 0 8px;font-size:1.15rem;}\
.detail-item{margin:3px 0;padding-left:22px;position:relative;}\
.detail-item::before{content:'☑';position:absolute;left:0;color:#9ca3af;}\
.detail-item.price::before{content:'💰';}\
.detail-item.info::before{content:'📐';}\
.detail-item.feature::before{content:'✨';}\
.detail-item.note::before{content:'📝';}\
.realtor-info{margin-top:8px;font-size:0.9rem;color:#374151;}";

impl PreviewDocument {
    /// The report fragment (what the preview container holds)
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<div id=\"report-container\" class=\"report\">");

        out.push_str("<section class=\"customer-info\">");
        write_row(&mut out, "고객명", "preview-customerName", &self.header.customer_name, "");
        write_row(&mut out, "미팅 일시", "preview-meetingDate", &self.header.meeting_date, "");
        write_row(
            &mut out,
            "희망 조건",
            "preview-requirements",
            &self.header.requirements,
            " requirements",
        );
        out.push_str("</section>");

        out.push_str("<section id=\"preview-properties\">");
        for entry in &self.entries {
            write_entry(&mut out, entry);
        }
        out.push_str("</section></div>");
        out
    }

    /// A complete HTML page wrapping the report, ready for rasterization
    pub fn to_page(&self, title: &str) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<!DOCTYPE html><html lang=\"ko\"><head><meta charset=\"utf-8\">\
             <title>{}</title><style>{}</style></head><body>",
            escape_html(title),
            REPORT_STYLES
        );
        out.push_str(&self.to_html());
        out.push_str("</body></html>");
        out
    }
}

fn write_row(out: &mut String, label: &str, id: &str, value: &str, extra_class: &str) {
    let _ = write!(
        out,
        "<div class=\"customer-row\"><span class=\"label\">{}</span>\
         <span id=\"{}\" class=\"value{}\">{}</span></div>",
        label,
        id,
        extra_class,
        escape_html(value)
    );
}

fn write_entry(out: &mut String, entry: &PreviewEntry) {
    let property = &entry.property;
    let _ = write!(
        out,
        "<div class=\"property-preview\"><h3>{}. {}</h3><div class=\"property-details\">",
        entry.number,
        escape_html(&property.title)
    );
    for line in &property.detail_lines {
        let class = match line.category {
            Some(category) => format!("detail-item {}", category.css_class()),
            None => "detail-item".to_string(),
        };
        let _ = write!(out, "<div class=\"{}\">{}</div>", class, escape_html(&line.text));
    }
    out.push_str("</div>");

    if let Some(contact) = entry.visible_contact() {
        let _ = write!(
            out,
            "<div class=\"realtor-info property-realtor-info\"><strong>📞 문의:</strong> {}</div>",
            escape_html(contact)
        );
    }
    out.push_str("</div>");
}

/// Escape text for use in element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
