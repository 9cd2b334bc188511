//! Mock LoanVista API for offline runs and tests.
//!
//! Returns deterministic responses without network calls and mirrors the
//! server's session rule: no report before a prediction.

use super::disposition::report_filename;
use crate::domain::{
    ApplicationSummary, DomainError, HealthStatus, LoanApplication, PredictionResult, ReportFile,
    YesNo,
};
use crate::ports::LoanApiPort;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

/// PNG signature; enough for a file viewer to recognise the placeholder report.
const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// How every call of a failing mock fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    /// Service answers with `success: false` and this message.
    Refuse(String),
    /// Service cannot be reached.
    Offline,
}

impl MockFailure {
    fn to_error(&self) -> DomainError {
        match self {
            MockFailure::Refuse(msg) => DomainError::Api(msg.clone()),
            MockFailure::Offline => DomainError::Http("connection refused".to_string()),
        }
    }
}

/// Mock API. Probability is fixed or derived from the credit score.
pub struct MockLoanApi {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    probability: Option<f64>,
    content_disposition: Option<String>,
    failure: Option<MockFailure>,
    last_prediction: Mutex<Option<PredictionResult>>,
}

impl MockLoanApi {
    /// Create a mock with default delay (100ms).
    pub fn new() -> Self {
        Self {
            delay_ms: 100,
            probability: None,
            content_disposition: None,
            failure: None,
            last_prediction: Mutex::new(None),
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Always predict with this probability (approval at >= 0.5).
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    /// Header value sent with reports; none means the header is absent.
    pub fn with_content_disposition(mut self, header: impl Into<String>) -> Self {
        self.content_disposition = Some(header.into());
        self
    }

    pub fn failing(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    async fn simulate(&self) -> Result<(), DomainError> {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        match &self.failure {
            Some(f) => Err(f.to_error()),
            None => Ok(()),
        }
    }

    fn probability_for(&self, app: &LoanApplication) -> f64 {
        self.probability.unwrap_or_else(|| {
            let score = (app.credit_score as f64 - 300.0) / 550.0;
            let penalty = match app.previous_loan_defaults_on_file {
                YesNo::Yes => 0.3,
                YesNo::No => 0.0,
            };
            (score - penalty).clamp(0.0, 1.0)
        })
    }
}

impl Default for MockLoanApi {
    fn default() -> Self {
        Self::new()
    }
}

fn risk_factors(app: &LoanApplication) -> Vec<String> {
    let mut risks = Vec::new();
    if app.credit_score < 600 {
        risks.push("Low credit score (< 600)".to_string());
    }
    if app.previous_loan_defaults_on_file == YesNo::Yes {
        risks.push("Previous loan defaults on file".to_string());
    }
    if app.person_income > 0.0 && app.loan_amnt / app.person_income > 0.4 {
        risks.push("High debt-to-income ratio (> 40%)".to_string());
    }
    if app.person_emp_exp == 0 {
        risks.push("No employment experience".to_string());
    }
    if app.cb_person_cred_hist_length < 2.0 {
        risks.push("Short credit history (< 2 years)".to_string());
    }
    risks
}

#[async_trait::async_trait]
impl LoanApiPort for MockLoanApi {
    async fn predict(
        &self,
        application: &LoanApplication,
    ) -> Result<PredictionResult, DomainError> {
        info!(
            credit_score = application.credit_score,
            "[MOCK] Simulating prediction"
        );
        self.simulate().await?;

        let probability = self.probability_for(application);
        let result = PredictionResult {
            prediction: u8::from(probability >= 0.5),
            probability,
            application_data: ApplicationSummary::from(application),
            risk_factors: risk_factors(application),
        };
        if let Ok(mut last) = self.last_prediction.lock() {
            *last = Some(result.clone());
        }
        Ok(result)
    }

    async fn download_report(&self) -> Result<ReportFile, DomainError> {
        info!("[MOCK] Simulating report download");
        self.simulate().await?;

        let has_prediction = self
            .last_prediction
            .lock()
            .map(|last| last.is_some())
            .unwrap_or(false);
        if !has_prediction {
            return Err(DomainError::Api(
                "No prediction available. Please submit an application first.".to_string(),
            ));
        }

        Ok(ReportFile {
            filename: report_filename(self.content_disposition.as_deref()),
            bytes: PNG_MAGIC.to_vec(),
        })
    }

    async fn chat(&self, message: &str) -> Result<String, DomainError> {
        info!(len = message.len(), "[MOCK] Simulating chat reply");
        self.simulate().await?;

        Ok(format!(
            "[MOCK] You asked: *{}*\n\nA few **general** pointers:\n\
             1. Keep your credit utilisation low\n\
             2. Pay every instalment on time\n\n\
             - Ask a licensed advisor before borrowing",
            message.trim()
        ))
    }

    async fn health(&self) -> Result<HealthStatus, DomainError> {
        self.simulate().await?;
        Ok(HealthStatus {
            status: "healthy".to_string(),
            model_loaded: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Education, Gender, HomeOwnership, LoanIntent};

    fn application(credit_score: i64) -> LoanApplication {
        LoanApplication {
            person_age: 28.0,
            person_gender: Gender::Male,
            person_education: Education::Bachelor,
            person_income: 20000.0,
            person_emp_exp: 0,
            person_home_ownership: HomeOwnership::Own,
            loan_amnt: 10000.0,
            loan_intent: LoanIntent::Venture,
            cb_person_cred_hist_length: 1.0,
            credit_score,
            previous_loan_defaults_on_file: YesNo::Yes,
        }
    }

    #[tokio::test]
    async fn test_report_requires_prediction() {
        let api = MockLoanApi::new().with_delay(0);
        let err = api.download_report().await.unwrap_err();
        assert!(matches!(err, DomainError::Api(_)));

        api.predict(&application(700)).await.unwrap();
        let report = api.download_report().await.unwrap();
        assert_eq!(report.filename, "loan_application_report.png");
        assert_eq!(&report.bytes[1..4], b"PNG");
    }

    #[tokio::test]
    async fn test_fixed_probability_and_risks() {
        let api = MockLoanApi::new().with_delay(0).with_probability(0.82);
        let result = api.predict(&application(550)).await.unwrap();
        assert_eq!(result.prediction, 1);
        assert_eq!(result.risk_factors.len(), 5);
        assert_eq!(result.application_data.loan_intent, "VENTURE");
    }

    #[tokio::test]
    async fn test_failure_modes() {
        let api = MockLoanApi::new()
            .with_delay(0)
            .failing(MockFailure::Offline);
        assert!(matches!(api.chat("hi").await, Err(DomainError::Http(_))));

        let api = MockLoanApi::new()
            .with_delay(0)
            .failing(MockFailure::Refuse("Model not loaded".to_string()));
        match api.predict(&application(700)).await {
            Err(DomainError::Api(m)) => assert_eq!(m, "Model not loaded"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
