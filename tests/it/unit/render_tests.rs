//! Unit tests for the preview model and its markup.

use crate::helpers::{DraftBuilder, GANGNAM_LISTING, MAPO_LISTING, PLAIN_LISTING};
use proposalboard::render::{HtmlSurface, PreviewSurface, build_preview, format_meeting_datetime};

#[test]
fn test_empty_draft_shows_placeholders() {
    let doc = build_preview(&DraftBuilder::new().build());
    assert_eq!(doc.header.customer_name, "고객명");
    assert_eq!(doc.header.meeting_date, "일시 미입력");
    assert_eq!(doc.header.requirements, "고객 희망 조건이 여기에 표시됩니다.");
    assert_eq!(doc.entry_count(), 0);
}

#[test]
fn test_meeting_date_format() {
    let draft = DraftBuilder::new().meeting(2024, 3, 5, 9, 7).build();
    assert_eq!(
        format_meeting_datetime(draft.meeting_date_time),
        "2024. 03. 05. 09:07"
    );
    assert_eq!(build_preview(&draft).header.meeting_date, "2024. 03. 05. 09:07");
}

#[test]
fn test_numbering_skips_unparseable_blocks() {
    let draft = DraftBuilder::new()
        .property(GANGNAM_LISTING)
        .property("")
        .property("한 줄짜리")
        .property(MAPO_LISTING)
        .build();

    let doc = build_preview(&draft);
    let numbered: Vec<_> = doc
        .entries
        .iter()
        .map(|e| (e.number, e.property.title.as_str()))
        .collect();
    assert_eq!(numbered, vec![(1, "강남 오피스텔"), (2, "마포 아파트")]);
}

#[test]
fn test_block_with_marker_only_title_is_skipped() {
    let draft = DraftBuilder::new()
        .property("헤더\n➡️")
        .property(PLAIN_LISTING)
        .build();
    let doc = build_preview(&draft);
    assert_eq!(doc.entry_count(), 1);
    assert_eq!(doc.entries[0].number, 1);
}

#[test]
fn test_markup_structure() {
    let draft = DraftBuilder::new()
        .customer("홍길동")
        .requirements("역세권\n반려동물 가능")
        .property(GANGNAM_LISTING)
        .build();
    let html = build_preview(&draft).to_html();

    assert!(html.starts_with("<div id=\"report-container\" class=\"report\">"));
    assert!(html.contains("<span id=\"preview-customerName\" class=\"value\">홍길동</span>"));
    assert!(html.contains("<h3>1. 강남 오피스텔</h3>"));
    assert!(html.contains("<div class=\"detail-item price\">전세: 3억</div>"));
    assert!(html.contains("<div class=\"detail-item note\">공개비고: 즉시 입주 가능</div>"));
    assert!(html.contains(
        "<strong>📞 문의:</strong> 공인중개사 김OO 010-1234-5678</div>"
    ));
}

#[test]
fn test_hidden_contact_is_not_rendered() {
    let draft = DraftBuilder::new().property(GANGNAM_LISTING).build();
    let mut doc = build_preview(&draft);
    doc.entries[0].contact_visible = false;

    let html = doc.to_html();
    assert!(!html.contains("realtor-info"));
    assert!(!html.contains("010-1234-5678"));
    assert_eq!(doc.contact_count(), 1);
}

#[test]
fn test_user_text_is_escaped() {
    let draft = DraftBuilder::new()
        .customer("<script>alert('x')</script>")
        .property("헤더\n➡️A & B \"타워\"")
        .build();
    let html = build_preview(&draft).to_html();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("1. A &amp; B &quot;타워&quot;"));
}

#[test]
fn test_page_wraps_fragment() {
    let doc = build_preview(&DraftBuilder::new().customer("김철수").build());
    let page = doc.to_page("미팅 매물 제안서");
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>미팅 매물 제안서</title>"));
    assert!(page.contains(&doc.to_html()));
    assert!(page.ends_with("</body></html>"));
}

#[test]
fn test_html_surface_replaces_content() {
    let mut surface = HtmlSurface::new("제안서");
    surface.replace(&build_preview(&DraftBuilder::new().customer("첫번째").build()));
    surface.replace(&build_preview(&DraftBuilder::new().customer("두번째").build()));

    assert_eq!(surface.render_count(), 2);
    assert!(surface.markup().contains("두번째"));
    assert!(!surface.markup().contains("첫번째"));
}

#[test]
fn test_html_surface_mirrors_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.html");
    let mut surface = HtmlSurface::new("제안서").with_mirror(&path);

    surface.replace(&build_preview(&DraftBuilder::new().customer("박민수").build()));

    let page = std::fs::read_to_string(&path).unwrap();
    assert!(page.contains("<title>제안서</title>"));
    assert!(page.contains("박민수"));
}
