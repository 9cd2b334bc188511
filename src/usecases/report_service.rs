//! Download the report for the last prediction and hand it to the report sink.

use crate::domain::{DomainError, Effect};
use crate::ports::{LoanApiPort, ReportSinkPort};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReportService {
    api: Arc<dyn LoanApiPort>,
    sink: Arc<dyn ReportSinkPort>,
}

impl ReportService {
    pub fn new(api: Arc<dyn LoanApiPort>, sink: Arc<dyn ReportSinkPort>) -> Self {
        Self { api, sink }
    }

    pub async fn download(&self) -> Vec<Effect> {
        let mut effects = vec![Effect::DownloadBusy(true)];

        let saved = match self.api.download_report().await {
            Ok(report) => self.sink.save(&report).await,
            Err(e) => Err(e),
        };

        match saved {
            Ok(path) => {
                info!(path = %path.display(), "report ready");
                effects.push(Effect::ReportSaved(path));
            }
            // Non-OK response: the server's message (or the generic fallback) as-is.
            Err(DomainError::Api(message)) => {
                warn!(message = %message, "report refused");
                effects.push(Effect::Alert(message));
            }
            Err(e) => {
                warn!(error = %e, "report download failed");
                effects.push(Effect::Alert(format!("Error downloading report: {}", e)));
            }
        }

        effects.push(Effect::DownloadBusy(false));
        effects
    }
}
