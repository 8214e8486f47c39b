//! Application configuration.
//!
//! Centralized constants for the intake widget. Everything here is fixed at
//! compile time: the widget has no environment, no persisted settings, and
//! talks only to same-origin paths.

/// Conversion endpoint receiving the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field name carrying the spreadsheet.
pub const UPLOAD_FIELD: &str = "file";

/// Prefix of the generated statement download path.
///
/// The server's `output_filename` is appended verbatim.
pub const DOWNLOAD_PREFIX: &str = "/download/";

/// The only accepted file name suffix (case-sensitive).
pub const ACCEPTED_EXTENSION: &str = ".xlsx";

/// Unit appended to every formatted monetary total.
pub const CURRENCY_UNIT: &str = "원";

// =============================================================================
// User-facing messages
// =============================================================================

/// Blocking notice shown when a non-`.xlsx` file is offered.
pub const INVALID_EXTENSION_MESSAGE: &str = "Excel 파일(.xlsx)만 업로드 가능합니다.";

/// Failure reason used when the server reports failure without an `error`.
pub const DEFAULT_FAILURE_MESSAGE: &str = "변환 중 오류가 발생했습니다.";

/// Prefix of every failure alert.
pub const FAILURE_ALERT_PREFIX: &str = "오류: ";

// =============================================================================
// DOM contract
// =============================================================================

/// Element ids rendered by the page markup and relied upon by styling.
pub mod ids {
    pub const DROP_ZONE: &str = "uploadBox";
    pub const FILE_INPUT: &str = "fileInput";
    pub const PROGRESS: &str = "progress";
    pub const RESULT: &str = "result";
    pub const TOTAL_SALES: &str = "totalSales";
    pub const TOTAL_COST: &str = "totalCost";
    pub const GROSS_PROFIT: &str = "grossProfit";
    pub const DEPOSIT_AMOUNT: &str = "depositAmount";
    pub const DOWNLOAD_BUTTON: &str = "downloadBtn";
    pub const RESET_BUTTON: &str = "resetBtn";
}

