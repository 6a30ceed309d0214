//! Unit tests for settings loading and clamping.

use proposalboard::export::ExportFormat;
use proposalboard::settings::AppSettings;

#[test]
fn test_defaults() {
    let settings = AppSettings::default();
    assert_eq!(settings.title, "미팅 매물 제안서");
    assert_eq!(settings.default_property_count, 3);
    assert_eq!(settings.max_property_count, 10);
    assert_eq!(settings.download.quality, 0.9);
    assert_eq!(settings.download.format, ExportFormat::Jpeg);
    assert_eq!(settings.download.filename, "매물제안서");
    assert_eq!(settings.storage.customer_data_key, "proposal_customer_data");
    assert_eq!(settings.storage.property_data_key, "proposal_property_data");
    assert_eq!(settings.storage.saved_list_key, "proposal_saved_list");
    assert!(settings.storage.auto_save);
    assert_eq!(settings.export.scale, 2.0);
    assert!(!settings.remote_enabled());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = AppSettings::load_from(&dir.path().join("nope.json"));
    assert_eq!(settings, AppSettings::default());
}

#[test]
fn test_partial_file_overrides_named_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"download":{"format":"png"},"storage":{"auto_save":false}}"#,
    )
    .unwrap();

    let settings = AppSettings::load_from(&path);
    assert_eq!(settings.download.format, ExportFormat::Png);
    assert_eq!(settings.download.quality, 0.9);
    assert!(!settings.storage.auto_save);
    assert_eq!(settings.max_property_count, 10);
}

#[test]
fn test_jpg_alias_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"download":{"format":"jpg"}}"#).unwrap();
    assert_eq!(AppSettings::load_from(&path).download.format, ExportFormat::Jpeg);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{\"title\": ").unwrap();
    assert_eq!(AppSettings::load_from(&path), AppSettings::default());
}

#[test]
fn test_values_are_clamped() {
    let mut settings = AppSettings::default();
    settings.max_property_count = 99;
    settings.default_property_count = 50;
    settings.download.quality = 3.0;
    settings.export.scale = -1.0;
    settings.download.filename = "  ".to_string();

    let settings = settings.sanitized();
    assert_eq!(settings.max_property_count, 10);
    assert_eq!(settings.default_property_count, 10);
    assert_eq!(settings.download.quality, 1.0);
    assert_eq!(settings.export.scale, 2.0);
    assert_eq!(settings.download.filename, "매물제안서");
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = AppSettings::default();
    settings.remote.enabled = true;
    settings.remote.root = Some(dir.path().join("store"));
    settings.save_to(&path).unwrap();

    let loaded = AppSettings::load_from(&path);
    assert_eq!(loaded, settings);
    assert!(loaded.remote_enabled());
}
