//! Event Flow Integration Tests
//!
//! Drive the controller only through `handle`, the way a front end does.

use crate::helpers::{GANGNAM_LISTING, PLAIN_LISTING, TestApp, meeting_time};
use proposalboard::app::{AppError, AppEvent, ExportOptions, ViewMode};
use proposalboard::export::ExportFormat;
use proposalboard::storage::KeyValueStore;
use std::time::Duration;

#[test]
fn test_editing_session() {
    let mut t = TestApp::new();
    let events = vec![
        AppEvent::CustomerNameChanged("최지우".to_string()),
        AppEvent::MeetingDateChanged(Some(meeting_time(2024, 6, 1, 11, 0))),
        AppEvent::RequirementsChanged("3억 이하 전세".to_string()),
        AppEvent::PropertyChanged {
            index: 0,
            text: GANGNAM_LISTING.to_string(),
        },
        AppEvent::AddProperty,
        AppEvent::PropertyChanged {
            index: 3,
            text: PLAIN_LISTING.to_string(),
        },
        AppEvent::RemoveProperty(1),
        AppEvent::SwitchMode(ViewMode::Preview),
    ];
    for event in events {
        t.app.handle(event).unwrap();
    }

    assert_eq!(t.app.mode(), ViewMode::Preview);
    assert_eq!(t.app.property_count(), 3);
    let titles: Vec<_> = t
        .app
        .preview()
        .entries
        .iter()
        .map(|e| e.property.title.clone())
        .collect();
    assert_eq!(titles, vec!["강남 오피스텔", "성수 사무실"]);
}

#[test]
fn test_save_load_delete_through_events() {
    let mut t = TestApp::new();
    t.app
        .handle(AppEvent::CustomerNameChanged("이벤트 고객".to_string()))
        .unwrap();
    t.app.handle(AppEvent::SaveProposal).unwrap();
    let id = t.app.saved_proposals()[0].id;

    t.app
        .handle(AppEvent::CustomerNameChanged("변경".to_string()))
        .unwrap();
    t.app.handle(AppEvent::LoadProposal(id)).unwrap();
    assert_eq!(t.app.draft().customer_name, "이벤트 고객");

    t.app.handle(AppEvent::DeleteProposal(id)).unwrap();
    assert!(t.app.saved_proposals().is_empty());
}

#[test]
fn test_rejections_surface_as_errors() {
    let mut t = TestApp::new();
    assert!(matches!(
        t.app.handle(AppEvent::SaveProposal),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        t.app.handle(AppEvent::RemoveProperty(9)),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        t.app.handle(AppEvent::LoadProposal(1)),
        Err(AppError::NotFound(_))
    ));
    assert_eq!(t.app.notices().count(), 3);
}

#[test]
fn test_export_and_reset_events() {
    let mut t = TestApp::new();
    t.app
        .handle(AppEvent::PropertyChanged {
            index: 0,
            text: GANGNAM_LISTING.to_string(),
        })
        .unwrap();
    t.app
        .handle(AppEvent::Export(ExportOptions::new(ExportFormat::Png)))
        .unwrap();
    assert_eq!(t.sink.filenames().len(), 1);

    t.app.handle(AppEvent::Reset { confirmed: false }).unwrap();
    assert_eq!(t.app.preview().entry_count(), 1);

    t.app.handle(AppEvent::Reset { confirmed: true }).unwrap();
    assert_eq!(t.app.preview().entry_count(), 0);
}

#[test]
fn test_tick_and_unload_events() {
    let mut t = TestApp::new();
    t.app
        .handle(AppEvent::CustomerNameChanged("틱".to_string()))
        .unwrap();
    t.store.remove("proposal_customer_data").unwrap();

    t.app
        .handle(AppEvent::Tick(t.started + Duration::from_secs(31)))
        .unwrap();
    assert!(t.raw("proposal_customer_data").is_some());

    t.store.remove("proposal_customer_data").unwrap();
    t.app.handle(AppEvent::Unload).unwrap();
    assert!(t.raw("proposal_customer_data").is_some());
}
