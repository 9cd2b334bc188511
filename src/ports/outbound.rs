//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, HealthStatus, LoanApplication, PredictionResult, ReportFile};
use std::path::PathBuf;

/// LoanVista service API.
#[async_trait::async_trait]
pub trait LoanApiPort: Send + Sync {
    /// `POST /api/predict`. `DomainError::Api` carries the service's message when it
    /// answers `success: false`.
    async fn predict(&self, application: &LoanApplication)
    -> Result<PredictionResult, DomainError>;

    /// `GET /api/download-report`. Report for the last prediction of this session.
    async fn download_report(&self) -> Result<ReportFile, DomainError>;

    /// `POST /api/chat`. Returns the bot reply text.
    async fn chat(&self, message: &str) -> Result<String, DomainError>;

    /// `GET /health`.
    async fn health(&self) -> Result<HealthStatus, DomainError>;
}

/// Destination for downloaded reports (the browser's "save file").
#[async_trait::async_trait]
pub trait ReportSinkPort: Send + Sync {
    /// Store the report and return where it landed.
    async fn save(&self, report: &ReportFile) -> Result<PathBuf, DomainError>;
}
