//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Conversion endpoint response structures
//! - **UI Types** - Visibility phase and display slots
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{self, ids};

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the `/upload` conversion endpoint.
///
/// Error bodies (`{"error": "..."}` with a 4xx/5xx status) deserialize into
/// this type as well, with `success` defaulting to `false`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Whether the conversion succeeded
    #[serde(default)]
    pub success: bool,
    /// Failure reason reported by the server
    #[serde(default)]
    pub error: Option<String>,
    /// Whether a previous upload for the same period was replaced
    #[serde(default)]
    pub updated: Option<bool>,
    /// Name of the generated statement, relative to `/download/`
    #[serde(default)]
    pub output_filename: Option<String>,
    /// Stored record id
    #[serde(default)]
    pub id: Option<i64>,
    /// Computed financial summary
    #[serde(default)]
    pub result: Option<StatementResult>,
}

/// Financial summary computed by the converter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementResult {
    /// Period label of the ledger (e.g. "2024-01")
    #[serde(default)]
    pub transaction_period: Option<String>,
    /// Gross sales
    pub total_maechul: f64,
    /// Cost of goods sold
    pub maechul_wonka: f64,
    /// Gross profit
    pub maechul_total_iik: f64,
    /// Total deposits
    pub ipgeum_total: f64,
}

/// A successful conversion, with every field the renderer needs present.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedStatement {
    pub result: StatementResult,
    pub updated: bool,
    pub output_filename: String,
    pub record_id: Option<i64>,
}

impl UploadResponse {
    /// Split the response into a renderable statement or a failure.
    ///
    /// `success: false` is an application failure carrying the server's
    /// message (or the default one). A success lacking `result` or
    /// `output_filename` is treated as unparseable.
    pub fn into_statement(self) -> AppResult<ConvertedStatement> {
        if !self.success {
            let reason = self
                .error
                .unwrap_or_else(|| config::DEFAULT_FAILURE_MESSAGE.to_string());
            return Err(AppError::Upload(reason));
        }

        let result = self
            .result
            .ok_or_else(|| AppError::Parse("response has no `result`".to_string()))?;
        let output_filename = self
            .output_filename
            .ok_or_else(|| AppError::Parse("response has no `output_filename`".to_string()))?;

        Ok(ConvertedStatement {
            result,
            updated: self.updated.unwrap_or(false),
            output_filename,
            record_id: self.id,
        })
    }
}

// =============================================================================
// UI Types
// =============================================================================

/// Visibility phase of the widget. Exactly one is shown at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Drop zone visible
    #[default]
    Idle,
    /// Progress indicator visible
    InFlight,
    /// Result panel visible
    Complete,
}

impl Phase {
    /// CSS `display` value for a section belonging to `section`.
    pub fn display_for(self, section: Phase) -> &'static str {
        if self == section {
            "block"
        } else {
            "none"
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::InFlight => write!(f, "in-flight"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}

/// The four monetary display fields of the result panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TotalSlot {
    TotalSales,
    TotalCost,
    GrossProfit,
    DepositAmount,
}

impl TotalSlot {
    /// All slots, in display order.
    pub const ALL: [TotalSlot; 4] = [
        TotalSlot::TotalSales,
        TotalSlot::TotalCost,
        TotalSlot::GrossProfit,
        TotalSlot::DepositAmount,
    ];

    /// Position in [`TotalSlot::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Element id of the display field.
    pub fn element_id(self) -> &'static str {
        match self {
            TotalSlot::TotalSales => ids::TOTAL_SALES,
            TotalSlot::TotalCost => ids::TOTAL_COST,
            TotalSlot::GrossProfit => ids::GROSS_PROFIT,
            TotalSlot::DepositAmount => ids::DEPOSIT_AMOUNT,
        }
    }

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            TotalSlot::TotalSales => "매출 합계",
            TotalSlot::TotalCost => "매출 원가",
            TotalSlot::GrossProfit => "매출 총이익",
            TotalSlot::DepositAmount => "입금 합계",
        }
    }

    /// The total this slot always displays.
    pub fn value_of(self, result: &StatementResult) -> f64 {
        match self {
            TotalSlot::TotalSales => result.total_maechul,
            TotalSlot::TotalCost => result.maechul_wonka,
            TotalSlot::GrossProfit => result.maechul_total_iik,
            TotalSlot::DepositAmount => result.ipgeum_total,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Rejected input file.
    Validation(String),
    /// Network/HTTP error.
    Network(String),
    /// Response body could not be understood.
    Parse(String),
    /// Conversion reported failure.
    Upload(String),
}

impl AppError {
    /// The bare reason, as shown to the user.
    pub fn reason(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Network(msg)
            | AppError::Parse(msg)
            | AppError::Upload(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn success_json() -> &'static str {
        r#"{
            "success": true,
            "output_filename": "손익계산서_20240131_120000.xlsx",
            "id": 42,
            "updated": true,
            "result": {
                "transaction_period": "2024-01",
                "total_maechul": 1234567,
                "maechul_wonka": 500000.4,
                "maechul_total_iik": 734567,
                "ipgeum_total": 100000,
                "unrelated_extra": "ignored"
            }
        }"#
    }

    #[test]
    fn test_success_response_converts() {
        let response: UploadResponse = serde_json::from_str(success_json()).unwrap();
        let statement = response.into_statement().unwrap();

        assert!(statement.updated);
        assert_eq!(statement.record_id, Some(42));
        assert_eq!(statement.output_filename, "손익계산서_20240131_120000.xlsx");
        assert_eq!(statement.result.transaction_period.as_deref(), Some("2024-01"));
        assert_eq!(statement.result.total_maechul, 1234567.0);
        assert_eq!(statement.result.maechul_wonka, 500000.4);
    }

    #[test]
    fn test_error_body_without_success_is_application_failure() {
        // Shape of the server's 400 answer
        let response: UploadResponse =
            serde_json::from_str(r#"{"error": "파일이 없습니다"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(
            response.into_statement(),
            Err(AppError::Upload("파일이 없습니다".to_string()))
        );
    }

    #[test]
    fn test_failure_without_error_uses_default_message() {
        let response: UploadResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = response.into_statement().unwrap_err();
        assert_eq!(err.reason(), config::DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_success_missing_result_is_parse_error() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"success": true, "output_filename": "out.xlsx"}"#).unwrap();
        assert!(matches!(response.into_statement(), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_success_missing_output_filename_is_parse_error() {
        let response: UploadResponse = serde_json::from_str(
            r#"{"success": true, "result": {"total_maechul": 1, "maechul_wonka": 1,
                "maechul_total_iik": 0, "ipgeum_total": 0}}"#,
        )
        .unwrap();
        assert!(matches!(response.into_statement(), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_slot_mapping_is_fixed() {
        let result = StatementResult {
            transaction_period: None,
            total_maechul: 1.0,
            maechul_wonka: 2.0,
            maechul_total_iik: 3.0,
            ipgeum_total: 4.0,
        };
        let values: Vec<f64> = TotalSlot::ALL.iter().map(|s| s.value_of(&result)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(TotalSlot::GrossProfit.element_id(), "grossProfit");
        assert_eq!(TotalSlot::DepositAmount.index(), 3);
    }

    #[test]
    fn test_phase_display_for() {
        assert_eq!(Phase::Idle.display_for(Phase::Idle), "block");
        assert_eq!(Phase::InFlight.display_for(Phase::Idle), "none");
        assert_eq!(Phase::Complete.to_string(), "complete");
    }
}
