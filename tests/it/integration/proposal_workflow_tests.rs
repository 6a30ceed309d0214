//! Proposal Workflow Integration Tests

use crate::helpers::{GANGNAM_LISTING, MAPO_LISTING, PLAIN_LISTING, TestApp, assert_block_count, meeting_time};
use proposalboard::app::{AppError, ValidationError, ViewMode};
use proposalboard::notifications::NoticeVariant;
use proposalboard::settings::AppSettings;

#[test]
fn test_startup_has_default_blocks_and_renders() {
    let t = TestApp::new();
    assert_block_count(t.app.draft(), 3);
    assert_eq!(t.app.mode(), ViewMode::Input);
    assert_eq!(t.surface.count(), 1);
    assert_eq!(t.app.preview().header.customer_name, "고객명");
    assert_eq!(t.app.notices().count(), 0);
}

#[test]
fn test_edits_update_preview() {
    let mut t = TestApp::new();
    t.app.set_customer_name("홍길동");
    t.app.set_meeting_date_time(Some(meeting_time(2024, 3, 15, 14, 30)));
    t.app.set_requirements("역세권");
    t.app.set_property_text(0, GANGNAM_LISTING).unwrap();
    t.app.set_property_text(2, MAPO_LISTING).unwrap();

    let doc = t.surface.last().unwrap();
    assert_eq!(doc.header.customer_name, "홍길동");
    assert_eq!(doc.header.meeting_date, "2024. 03. 15. 14:30");
    assert_eq!(doc.header.requirements, "역세권");
    let titles: Vec<_> = doc.entries.iter().map(|e| e.property.title.as_str()).collect();
    assert_eq!(titles, vec!["강남 오피스텔", "마포 아파트"]);
    assert_eq!(doc.entries[1].number, 2);
    assert_eq!(&doc, t.app.preview());
}

#[test]
fn test_property_ceiling() {
    let mut t = TestApp::new();
    for expected in 3..10 {
        assert_eq!(t.app.add_property().unwrap(), expected);
    }
    assert_block_count(t.app.draft(), 10);
    assert!(!t.app.can_add_property());

    let err = t.app.add_property().unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::TooManyProperties { max: 10 })
    ));
    assert_block_count(t.app.draft(), 10);

    let notice = t.app.notices().latest().unwrap();
    assert_eq!(notice.message, "최대 10개까지만 추가할 수 있습니다.");
    assert_eq!(notice.variant, NoticeVariant::Warning);
    assert!(notice.blocking);
}

#[test]
fn test_configured_ceiling() {
    let mut settings = AppSettings::default();
    settings.max_property_count = 4;
    let mut t = TestApp::with_settings(settings);

    t.app.add_property().unwrap();
    let err = t.app.add_property().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        t.latest_message().as_deref(),
        Some("최대 4개까지만 추가할 수 있습니다.")
    );
}

#[test]
fn test_remove_property() {
    let mut t = TestApp::new();
    t.app.set_property_text(0, GANGNAM_LISTING).unwrap();
    t.app.set_property_text(1, PLAIN_LISTING).unwrap();

    t.app.remove_property(0).unwrap();
    assert_block_count(t.app.draft(), 2);
    assert_eq!(t.app.preview().entries[0].property.title, "성수 사무실");
    assert_eq!(t.app.preview().entries[0].number, 1);

    let err = t.app.remove_property(5).unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::NoSuchProperty(5))
    ));
    assert_eq!(t.latest_message().as_deref(), Some("매물 6번이 없습니다."));
}

#[test]
fn test_edit_out_of_range_is_rejected() {
    let mut t = TestApp::new();
    let renders = t.surface.count();
    assert!(t.app.set_property_text(3, GANGNAM_LISTING).is_err());
    assert_eq!(t.surface.count(), renders);
}

#[test]
fn test_switch_mode_renders_preview() {
    let mut t = TestApp::new();
    let renders = t.surface.count();

    t.app.switch_mode(ViewMode::Preview);
    assert_eq!(t.app.mode(), ViewMode::Preview);
    assert_eq!(t.surface.count(), renders + 1);

    t.app.switch_mode(ViewMode::Input);
    assert_eq!(t.app.mode(), ViewMode::Input);
    assert_eq!(t.surface.count(), renders + 1);
}

#[test]
fn test_save_requires_customer_name() {
    let mut t = TestApp::new();
    t.app.set_customer_name("   ");

    let err = t.app.save_proposal().unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::MissingCustomerName)
    ));
    assert_eq!(t.latest_message().as_deref(), Some("고객명을 입력해주세요."));
    assert!(t.app.saved_proposals().is_empty());
}

#[test]
fn test_save_then_load_restores_draft() {
    let mut t = TestApp::new();
    t.app.set_customer_name("홍길동");
    t.app.set_meeting_date_time(Some(meeting_time(2024, 3, 15, 14, 30)));
    t.app.set_requirements("남향");
    t.app.set_property_text(1, GANGNAM_LISTING).unwrap();

    let id = t.app.save_proposal().unwrap();
    assert_eq!(
        t.latest_message().as_deref(),
        Some("'홍길동' 제안서가 저장되었습니다.")
    );

    t.app.set_customer_name("다른 고객");
    t.app.set_property_text(1, MAPO_LISTING).unwrap();
    t.app.add_property().unwrap();

    t.app.load_proposal(id).unwrap();
    let draft = t.app.draft();
    assert_eq!(draft.customer_name, "홍길동");
    assert_eq!(draft.meeting_date_time, Some(meeting_time(2024, 3, 15, 14, 30)));
    assert_eq!(draft.requirements, "남향");
    assert_eq!(draft.properties, vec![GANGNAM_LISTING.to_string()]);
    assert_eq!(t.app.preview().entries[0].property.title, "강남 오피스텔");
}

#[test]
fn test_saved_ids_are_unique_and_newest_first() {
    let mut t = TestApp::new();
    t.app.set_customer_name("고객");
    let first = t.app.save_proposal().unwrap();
    let second = t.app.save_proposal().unwrap();

    assert!(second > first);
    let ids: Vec<_> = t.app.saved_proposals().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_fifty_first_save_evicts_oldest() {
    let mut t = TestApp::new();
    t.app.set_customer_name("첫 고객");
    let oldest = t.app.save_proposal().unwrap();

    for i in 0..50 {
        t.app.set_customer_name(format!("고객 {}", i));
        t.app.save_proposal().unwrap();
    }

    let saved = t.app.saved_proposals();
    assert_eq!(saved.len(), 50);
    assert!(saved.iter().all(|p| p.id != oldest));
    assert_eq!(saved[0].customer_name, "고객 49");
}

#[test]
fn test_load_unknown_proposal() {
    let mut t = TestApp::new();
    t.app.set_customer_name("그대로");

    let err = t.app.load_proposal(404).unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref id) if id == "404"));
    assert_eq!(t.app.draft().customer_name, "그대로");
}

#[test]
fn test_delete_proposal() {
    let mut t = TestApp::new();
    t.app.set_customer_name("삭제 대상");
    let id = t.app.save_proposal().unwrap();

    t.app.delete_proposal(id).unwrap();
    assert!(t.app.saved_proposals().is_empty());
    assert!(matches!(
        t.app.delete_proposal(id),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_open_remote_from_document_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = AppSettings::default();
    settings.remote.enabled = true;
    settings.remote.root = Some(dir.path().to_path_buf());

    let mut t = TestApp::with_settings(settings.clone());
    assert_eq!(t.app.backend_name(), "document-store");
    t.app.set_customer_name("원격 고객");
    t.app.set_property_text(0, PLAIN_LISTING).unwrap();
    t.app.save_proposal().unwrap();

    let docs: Vec<_> = std::fs::read_dir(dir.path().join("proposals"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .collect();
    assert_eq!(docs.len(), 1);
    let remote_id = docs[0]
        .path()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap();

    let mut other = TestApp::with_settings(settings);
    other.app.open_remote(&remote_id).unwrap();
    assert_eq!(other.app.draft().customer_name, "원격 고객");
    assert_eq!(other.app.preview().entries[0].property.title, "성수 사무실");
}

#[test]
fn test_open_remote_falls_back_to_local_draft() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = AppSettings::default();
    settings.remote.enabled = true;
    settings.remote.root = Some(dir.path().join("unmounted"));

    let mut t = TestApp::with_settings(settings);
    t.app.set_customer_name("로컬 고객");
    t.app.set_property_text(0, GANGNAM_LISTING).unwrap();

    t.app.open_remote("local_1700000000000").unwrap();
    assert_eq!(t.app.draft().customer_name, "로컬 고객");
    assert_block_count(t.app.draft(), 1);
}
