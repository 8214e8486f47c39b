//! Service HTTP pour l'envoi du fichier Excel au convertisseur

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{UPLOAD_ENDPOINT, UPLOAD_FIELD};
use crate::types::{AppError, AppResult, UploadResponse};

/// Upload a spreadsheet and parse whatever JSON the endpoint answers.
///
/// The HTTP status is not treated as a failure on its own: the converter
/// answers rejected uploads with 4xx/5xx and an `{"error": ...}` body, which
/// must reach the caller as an application failure.
pub async fn upload_xlsx(file: &File) -> AppResult<UploadResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(UPLOAD_ENDPOINT)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        log::warn!("{} answered HTTP {}", UPLOAD_ENDPOINT, response.status());
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    parse_upload_response(&body)
}

/// Parse the endpoint's JSON body.
pub fn parse_upload_response(body: &str) -> AppResult<UploadResponse> {
    serde_json::from_str(body)
        .map_err(|e| AppError::Parse(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        // Réponse telle que renvoyée par le convertisseur
        let json = r#"{
            "success": true,
            "output_filename": "손익계산서_20240201_093015.xlsx",
            "result": {
                "transaction_period": "2024-01",
                "total_maechul": 1234567,
                "maechul_wonka": 500000,
                "maechul_total_iik": 734567,
                "ipgeum_total": 100000
            },
            "id": 7,
            "updated": false
        }"#;

        let result = parse_upload_response(json);
        assert!(result.is_ok());

        let response = result.unwrap();
        assert!(response.success);
        assert_eq!(response.updated, Some(false));
        assert_eq!(response.id, Some(7));
        assert_eq!(
            response.result.unwrap().transaction_period.as_deref(),
            Some("2024-01")
        );
    }

    #[test]
    fn test_server_error_body() {
        let response =
            parse_upload_response(r#"{"error": "Excel 파일(.xlsx)만 업로드 가능합니다"}"#).unwrap();
        assert!(!response.success);
        assert!(response.result.is_none());
    }

    #[test]
    fn test_html_error_page_is_parse_error() {
        let err = parse_upload_response("<html><body>502 Bad Gateway</body></html>").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(err.reason().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_non_numeric_total_is_parse_error() {
        let err = parse_upload_response(
            r#"{"success": true, "output_filename": "o.xlsx",
                "result": {"total_maechul": "lots", "maechul_wonka": 0,
                           "maechul_total_iik": 0, "ipgeum_total": 0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
