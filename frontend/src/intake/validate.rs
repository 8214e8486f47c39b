//! File name validation.

use crate::config::{ACCEPTED_EXTENSION, INVALID_EXTENSION_MESSAGE};
use crate::types::{AppError, AppResult};

/// Accept a file name only if it ends with `.xlsx`, exactly.
///
/// No case folding and no trimming: `REPORT.XLSX` and `report.xlsx ` are
/// both rejected.
pub fn validate_file_name(name: &str) -> AppResult<()> {
    if name.ends_with(ACCEPTED_EXTENSION) {
        Ok(())
    } else {
        Err(AppError::Validation(INVALID_EXTENSION_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_xlsx() {
        for name in ["ledger.xlsx", ".xlsx", "2024년 1월 매출.xlsx", "a.b.xlsx"] {
            assert!(validate_file_name(name).is_ok(), "{} should pass", name);
        }
    }

    #[test]
    fn test_rejects_everything_else() {
        for name in [
            "ledger.xls",
            "ledger.XLSX",
            "ledger.Xlsx",
            "ledger.xlsx ",
            "ledger.xlsx.csv",
            "ledger.csv",
            "xlsx",
            "",
        ] {
            assert_eq!(
                validate_file_name(name),
                Err(AppError::Validation(INVALID_EXTENSION_MESSAGE.to_string())),
                "{:?} should be rejected",
                name
            );
        }
    }
}
