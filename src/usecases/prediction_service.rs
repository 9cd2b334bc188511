//! Submit an application and turn the answer into effects.
//!
//! Busy on -> request -> result or alert -> busy off. The busy-off effect is
//! emitted on every path.

use crate::domain::{ConfettiPlan, DomainError, Effect, LoanApplication, ResultView};
use crate::ports::LoanApiPort;
use std::sync::Arc;
use tracing::{info, warn};

pub struct PredictionService {
    api: Arc<dyn LoanApiPort>,
    confetti: bool,
}

impl PredictionService {
    /// `confetti`: celebrate approvals (false disables the animation only).
    pub fn new(api: Arc<dyn LoanApiPort>, confetti: bool) -> Self {
        Self { api, confetti }
    }

    pub async fn submit(&self, application: &LoanApplication) -> Vec<Effect> {
        let mut effects = vec![Effect::SubmitBusy(true)];

        match self.api.predict(application).await {
            Ok(result) => {
                let view = ResultView::from_result(&result);
                info!(
                    approved = view.is_approved(),
                    band = %view.band,
                    "application classified"
                );
                let approved = view.is_approved();
                effects.push(Effect::ShowResult(view));
                if approved && self.confetti {
                    effects.push(Effect::Celebrate(ConfettiPlan::celebrate(&mut rand::rng())));
                }
            }
            Err(DomainError::Api(message)) => {
                warn!(message = %message, "application refused");
                effects.push(Effect::Alert(format!("Error: {}", message)));
            }
            Err(e) => {
                warn!(error = %e, "application request failed");
                effects.push(Effect::Alert(format!(
                    "Error processing application: {}",
                    e
                )));
            }
        }

        effects.push(Effect::SubmitBusy(false));
        effects
    }
}
