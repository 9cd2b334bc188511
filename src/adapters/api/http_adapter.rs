//! reqwest adapter for the LoanVista service.
//!
//! Keeps a cookie store so `/api/download-report` sees the session that made the
//! last `/api/predict` call. Application-level refusals (`success: false`, non-OK
//! report responses) become `DomainError::Api` with the server's message.

use super::disposition::report_filename;
use crate::domain::{DomainError, HealthStatus, LoanApplication, PredictionResult, ReportFile};
use crate::ports::LoanApiPort;
use reqwest::header::CONTENT_DISPOSITION;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Shown when a failed report download has no readable `message`.
const DOWNLOAD_FALLBACK_MESSAGE: &str = "Error downloading report";

/// HTTP client for one LoanVista server.
pub struct HttpLoanApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLoanApi {
    /// Create a client for `base_url` (e.g. "http://127.0.0.1:5000").
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Http(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// `/api/predict` envelope. Sent with the same shape on 2xx, 400 and 500.
#[derive(Deserialize)]
struct PredictResponse {
    success: bool,
    result: Option<PredictionResult>,
    message: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn interpret_predict(body: &str) -> Result<PredictionResult, DomainError> {
    let envelope: PredictResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Decode(format!("predict response: {}", e)))?;
    if !envelope.success {
        return Err(DomainError::Api(
            envelope
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }
    envelope
        .result
        .ok_or_else(|| DomainError::Decode("predict response has no result".to_string()))
}

fn interpret_chat(body: &str) -> Result<String, DomainError> {
    let envelope: ChatResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Decode(format!("chat response: {}", e)))?;
    if envelope.success {
        Ok(envelope.message)
    } else {
        Err(DomainError::Api(envelope.message))
    }
}

/// Message for a non-OK report response; falls back when the body is not the JSON error shape.
fn download_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DOWNLOAD_FALLBACK_MESSAGE.to_string())
}

fn transport(e: reqwest::Error) -> DomainError {
    DomainError::Http(e.to_string())
}

#[async_trait::async_trait]
impl LoanApiPort for HttpLoanApi {
    async fn predict(
        &self,
        application: &LoanApplication,
    ) -> Result<PredictionResult, DomainError> {
        info!(
            loan_amnt = application.loan_amnt,
            credit_score = application.credit_score,
            "submitting application"
        );

        let response = self
            .client
            .post(self.url("/api/predict"))
            .json(application)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        debug!(status = %status, body_len = body.len(), "predict response received");

        let result = interpret_predict(&body)?;
        info!(
            prediction = result.prediction,
            probability = result.probability,
            risk_factors = result.risk_factors.len(),
            "prediction received"
        );
        Ok(result)
    }

    async fn download_report(&self) -> Result<ReportFile, DomainError> {
        let response = self
            .client
            .get(self.url("/api/download-report"))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "report download refused");
            return Err(DomainError::Api(download_error_message(&body)));
        }

        let filename = report_filename(
            response
                .headers()
                .get(CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok()),
        );
        let bytes = response.bytes().await.map_err(transport)?.to_vec();
        info!(filename = %filename, size = bytes.len(), "report downloaded");

        Ok(ReportFile { filename, bytes })
    }

    async fn chat(&self, message: &str) -> Result<String, DomainError> {
        debug!(len = message.len(), "sending chat message");
        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(transport)?;

        let body = response.text().await.map_err(transport)?;
        interpret_chat(&body)
    }

    async fn health(&self) -> Result<HealthStatus, DomainError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(transport)?;

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| DomainError::Decode(format!("health response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_predict_success() {
        let body = r#"{"success": true, "result": {
            "prediction": 1, "probability": 0.82, "risk_factors": [],
            "application_data": {"person_age": 30, "person_income": 60000,
                "loan_amnt": 10000, "credit_score": 700, "loan_intent": "PERSONAL"}
        }}"#;
        let result = interpret_predict(body).unwrap();
        assert_eq!(result.prediction, 1);
        assert_eq!(result.probability, 0.82);
    }

    #[test]
    fn test_interpret_predict_refusal() {
        let body = r#"{"success": false, "message": "Missing field: credit_score"}"#;
        match interpret_predict(body) {
            Err(DomainError::Api(m)) => assert_eq!(m, "Missing field: credit_score"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_predict_garbage() {
        assert!(matches!(
            interpret_predict("<html>502</html>"),
            Err(DomainError::Decode(_))
        ));
        assert!(matches!(
            interpret_predict(r#"{"success": true}"#),
            Err(DomainError::Decode(_))
        ));
    }

    #[test]
    fn test_interpret_chat() {
        assert_eq!(
            interpret_chat(r#"{"success": true, "message": "Hi"}"#).unwrap(),
            "Hi"
        );
        assert!(matches!(
            interpret_chat(r#"{"success": false, "message": "No message provided"}"#),
            Err(DomainError::Api(_))
        ));
    }

    #[test]
    fn test_download_error_message() {
        assert_eq!(
            download_error_message(r#"{"success": false, "message": "No prediction available."}"#),
            "No prediction available."
        );
        assert_eq!(download_error_message("Internal Server Error"), DOWNLOAD_FALLBACK_MESSAGE);
        assert_eq!(download_error_message(r#"{"message": ""}"#), DOWNLOAD_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let api = HttpLoanApi::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.url("/health"), "http://localhost:5000/health");
    }
}
