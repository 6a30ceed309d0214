//! Unit tests for export formats, encoding, delivery and the pipeline.

use crate::helpers::{DraftBuilder, FakeRasterizer, GANGNAM_LISTING, MAPO_LISTING, MemorySink};
use chrono::NaiveDate;
use image::{Rgba, RgbaImage};
use proposalboard::export::{
    ContactVisibilityGuard, DirectorySink, DownloadSink, ExportFormat, ExportOutcome,
    ExportRequest, encode_bitmap, export_filename, export_preview,
};
use proposalboard::render::build_preview;

fn request(format: ExportFormat, include_contact: bool) -> ExportRequest {
    ExportRequest {
        format,
        include_contact,
        customer_name: "홍길동".to_string(),
        filename_prefix: "매물제안서".to_string(),
        quality: 0.9,
        scale: 2.0,
        page_title: "미팅 매물 제안서".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    }
}

fn sample_doc() -> proposalboard::render::PreviewDocument {
    build_preview(
        &DraftBuilder::new()
            .customer("홍길동")
            .property(GANGNAM_LISTING)
            .property(MAPO_LISTING)
            .build(),
    )
}

// ============================================================================
// Formats and file names
// ============================================================================

#[test]
fn test_format_parsing_and_extensions() {
    assert_eq!("png".parse::<ExportFormat>(), Ok(ExportFormat::Png));
    assert_eq!("JPG".parse::<ExportFormat>(), Ok(ExportFormat::Jpeg));
    assert_eq!("jpeg".parse::<ExportFormat>(), Ok(ExportFormat::Jpeg));
    assert_eq!("pdf".parse::<ExportFormat>(), Ok(ExportFormat::Pdf));
    assert!("gif".parse::<ExportFormat>().is_err());

    assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
    assert_eq!(ExportFormat::Png.mime_type(), "image/png");
    assert!(!ExportFormat::Pdf.is_available());
}

#[test]
fn test_export_filename() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    assert_eq!(
        export_filename("매물제안서", "홍길동", date, ExportFormat::Png),
        "매물제안서_홍길동_2024-03-15.png"
    );
    assert_eq!(
        export_filename("매물제안서", "", date, ExportFormat::Jpeg),
        "매물제안서_고객_2024-03-15.jpg"
    );
    assert_eq!(
        export_filename("매물제안서", "A/B", date, ExportFormat::Pdf),
        "매물제안서_A_B_2024-03-15.pdf"
    );
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_png_is_lossless() {
    let mut bitmap = RgbaImage::new(3, 2);
    bitmap.put_pixel(1, 1, Rgba([12, 34, 56, 128]));

    let bytes = encode_bitmap(&bitmap, ExportFormat::Png, 0.9).unwrap().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded, bitmap);
}

#[test]
fn test_jpeg_encodes() {
    let bitmap = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
    let bytes = encode_bitmap(&bitmap, ExportFormat::Jpeg, 0.9).unwrap().unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
}

#[test]
fn test_pdf_is_not_encoded() {
    let bitmap = RgbaImage::new(1, 1);
    assert!(encode_bitmap(&bitmap, ExportFormat::Pdf, 0.9).unwrap().is_none());
}

// ============================================================================
// Sinks
// ============================================================================

#[test]
fn test_directory_sink_never_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path().join("downloads"));

    let first = sink.deliver("제안서.png", b"one").unwrap();
    let second = sink.deliver("제안서.png", b"two").unwrap();

    assert_eq!(first.file_name().unwrap(), "제안서.png");
    assert_eq!(second.file_name().unwrap(), "제안서 (1).png");
    assert_eq!(std::fs::read(&first).unwrap(), b"one");
    assert_eq!(std::fs::read(&second).unwrap(), b"two");
}

// ============================================================================
// Contact visibility
// ============================================================================

#[test]
fn test_guard_hides_and_restores() {
    let mut doc = sample_doc();
    doc.entries[1].contact_visible = false;
    let before = doc.clone();

    {
        let guard = ContactVisibilityGuard::new(&mut doc, true);
        assert!(guard.document().entries.iter().all(|e| !e.contact_visible));
        assert!(!guard.document().to_html().contains("realtor-info"));
    }

    assert_eq!(doc, before);
}

#[test]
fn test_guard_without_hiding_changes_nothing() {
    let mut doc = sample_doc();
    let before = doc.clone();
    {
        let guard = ContactVisibilityGuard::new(&mut doc, false);
        assert_eq!(guard.document(), &before);
    }
    assert_eq!(doc, before);
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_pipeline_delivers_png() {
    let mut doc = sample_doc();
    let rasterizer = FakeRasterizer::default();
    let sink = MemorySink::default();

    let outcome =
        export_preview(&mut doc, &request(ExportFormat::Png, true), &rasterizer, &sink).unwrap();

    let ExportOutcome::Delivered { filename, bytes, .. } = outcome else {
        panic!("expected a delivered file");
    };
    assert_eq!(filename, "매물제안서_홍길동_2024-03-15.png");
    assert_eq!(sink.filenames(), vec![filename]);
    assert!(!bytes.is_empty());

    let pages = rasterizer.pages.lock();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].1, 2.0);
    assert!(pages[0].0.contains("010-1234-5678"));
}

#[test]
fn test_pipeline_hides_contacts_in_image_only() {
    let mut doc = sample_doc();
    let before = doc.clone();
    let rasterizer = FakeRasterizer::default();

    export_preview(
        &mut doc,
        &request(ExportFormat::Jpeg, false),
        &rasterizer,
        &MemorySink::default(),
    )
    .unwrap();

    let page = rasterizer.last_page().unwrap();
    assert!(!page.contains("010-1234-5678"));
    assert!(!page.contains("02-333-4444"));
    assert!(page.contains("강남 오피스텔"));
    assert_eq!(doc, before);
}

#[test]
fn test_pipeline_restores_contacts_on_failure() {
    let mut doc = sample_doc();
    let before = doc.clone();

    let result = export_preview(
        &mut doc,
        &request(ExportFormat::Png, false),
        &FakeRasterizer::failing(),
        &MemorySink::default(),
    );

    assert!(result.is_err());
    assert_eq!(doc, before);
}

#[test]
fn test_pipeline_pdf_not_ready() {
    let mut doc = sample_doc();
    let rasterizer = FakeRasterizer::default();
    let sink = MemorySink::default();

    let outcome =
        export_preview(&mut doc, &request(ExportFormat::Pdf, true), &rasterizer, &sink).unwrap();

    assert_eq!(outcome, ExportOutcome::NotReady(ExportFormat::Pdf));
    assert_eq!(rasterizer.calls(), 0);
    assert!(sink.filenames().is_empty());
}
