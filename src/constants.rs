//! Application-wide constants.
//!
//! Centralizes the limits, storage keys and display strings shared by the
//! parser, renderer, persistence layer and controller.

// ============================================================================
// Draft Limits
// ============================================================================

/// Number of empty property blocks a fresh draft starts with
pub const DEFAULT_PROPERTY_COUNT: usize = 3;

/// Hard ceiling on property blocks per draft
pub const MAX_PROPERTY_COUNT: usize = 10;

/// Maximum number of saved proposals kept (oldest evicted)
pub const MAX_SAVED_PROPOSALS: usize = 50;

// ============================================================================
// Timing
// ============================================================================

/// Periodic autosave interval in seconds
pub const AUTOSAVE_INTERVAL_SECS: u64 = 30;

// ============================================================================
// Storage Keys
// ============================================================================

/// Key holding the customer fields of the current draft
pub const CUSTOMER_DATA_KEY: &str = "proposal_customer_data";

/// Key holding the raw property blocks of the current draft
pub const PROPERTY_DATA_KEY: &str = "proposal_property_data";

/// Key holding the saved proposal list
pub const SAVED_LIST_KEY: &str = "proposal_saved_list";

/// Default byte quota of the file-backed store (browser local storage size)
pub const DEFAULT_STORAGE_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Prefix of ids handed out by the local backend
pub const LOCAL_ID_PREFIX: &str = "local_";

// ============================================================================
// Export
// ============================================================================

/// Rasterization scale factor (high-DPI output)
pub const EXPORT_SCALE: f32 = 2.0;

/// Default JPEG quality (0.1 ..= 1.0)
pub const DEFAULT_JPEG_QUALITY: f32 = 0.9;

/// Default file name prefix for exported images
pub const DEFAULT_FILENAME_PREFIX: &str = "매물제안서";

/// Customer name used in file names when none was entered
pub const FALLBACK_FILENAME_CUSTOMER: &str = "고객";

/// External HTML-to-image program used by the command rasterizer
pub const DEFAULT_RASTERIZER_PROGRAM: &str = "wkhtmltoimage";

// ============================================================================
// Preview Placeholders
// ============================================================================

/// Shown instead of an empty customer name
pub const PLACEHOLDER_CUSTOMER_NAME: &str = "고객명";

/// Shown when no meeting date/time was entered
pub const PLACEHOLDER_MEETING_DATE: &str = "일시 미입력";

/// Shown instead of empty requirements
pub const PLACEHOLDER_REQUIREMENTS: &str = "고객 희망 조건이 여기에 표시됩니다.";

// ============================================================================
// Parser Markers
// ============================================================================

/// Marker glyph listing boards put in front of lines
pub const LINE_MARKER: &str = "➡️";

// ============================================================================
// Application
// ============================================================================

/// Default application title
pub const APP_TITLE: &str = "미팅 매물 제안서";

// ============================================================================
// User Messages
// ============================================================================

/// Question asked before everything is cleared
pub const RESET_CONFIRM_PROMPT: &str = "모든 입력 내용을 초기화하시겠습니까?\n\n이 작업은 되돌릴 수 없습니다.";

/// Shown after a confirmed reset
pub const RESET_DONE_MESSAGE: &str = "✅ 모든 내용이 초기화되었습니다.";

/// Shown when PDF is picked as the download format
pub const PDF_NOT_READY_MESSAGE: &str = "PDF 다운로드는 준비 중입니다. JPG 또는 PNG를 이용해주세요.";

/// Shown when an export fails for any reason
pub const EXPORT_FAILED_MESSAGE: &str = "다운로드 중 오류가 발생했습니다. 다시 시도해 주세요.";
