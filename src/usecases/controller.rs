//! Intent dispatch. Owns the chat widget state and routes each intent to its service.

use crate::domain::{ChatWidget, Effect, Intent};
use crate::ports::{LoanApiPort, ReportSinkPort};
use crate::usecases::{ChatService, PredictionService, ReportService};
use std::sync::Arc;
use tracing::debug;

pub struct Controller {
    prediction: PredictionService,
    reports: ReportService,
    chat: ChatService,
    widget: ChatWidget,
}

impl Controller {
    pub fn new(api: Arc<dyn LoanApiPort>, sink: Arc<dyn ReportSinkPort>, confetti: bool) -> Self {
        Self {
            prediction: PredictionService::new(Arc::clone(&api), confetti),
            reports: ReportService::new(Arc::clone(&api), sink),
            chat: ChatService::new(api),
            widget: ChatWidget::new(),
        }
    }

    pub fn chat_widget(&self) -> &ChatWidget {
        &self.widget
    }

    /// Handle one intent. Effects are returned in the order the UI must apply them.
    pub async fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        debug!(?intent, "dispatch");
        match intent {
            Intent::SubmitApplication(application) => self.prediction.submit(&application).await,
            Intent::DownloadReport => self.reports.download().await,
            Intent::ToggleChat => {
                if self.widget.toggle() {
                    vec![Effect::ChatOpened, Effect::FocusChatInput]
                } else {
                    vec![Effect::ChatClosed]
                }
            }
            Intent::CloseChat => {
                self.widget.close();
                vec![Effect::ChatClosed]
            }
            Intent::PopupElapsed => {
                if self.widget.popup_elapsed() {
                    vec![Effect::ChatOpened]
                } else {
                    Vec::new()
                }
            }
            Intent::SendChat(text) => self.chat.send(&text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::MockLoanApi;
    use crate::domain::{DomainError, ReportFile};
    use std::path::PathBuf;

    struct NullSink;

    #[async_trait::async_trait]
    impl ReportSinkPort for NullSink {
        async fn save(&self, report: &ReportFile) -> Result<PathBuf, DomainError> {
            Ok(PathBuf::from(&report.filename))
        }
    }

    fn controller() -> Controller {
        Controller::new(
            Arc::new(MockLoanApi::new().with_delay(0).with_probability(0.82)),
            Arc::new(NullSink),
            true,
        )
    }

    #[tokio::test]
    async fn test_toggle_opens_and_focuses() {
        let mut c = controller();
        assert_eq!(
            c.dispatch(Intent::ToggleChat).await,
            vec![Effect::ChatOpened, Effect::FocusChatInput]
        );
        assert_eq!(c.dispatch(Intent::ToggleChat).await, vec![Effect::ChatClosed]);
    }

    #[tokio::test]
    async fn test_popup_suppressed_after_manual_toggle() {
        let mut c = controller();
        c.dispatch(Intent::ToggleChat).await;
        c.dispatch(Intent::CloseChat).await;
        assert!(c.dispatch(Intent::PopupElapsed).await.is_empty());
        assert!(!c.chat_widget().is_visible());
    }

    #[tokio::test]
    async fn test_popup_opens_untouched_widget() {
        let mut c = controller();
        assert_eq!(c.dispatch(Intent::PopupElapsed).await, vec![Effect::ChatOpened]);
        assert!(c.chat_widget().is_visible());
    }

    #[tokio::test]
    async fn test_report_after_submission() {
        use crate::domain::{Education, Gender, HomeOwnership, LoanApplication, LoanIntent, YesNo};

        let mut c = controller();
        let before = c.dispatch(Intent::DownloadReport).await;
        assert!(matches!(before[1], Effect::Alert(_)));

        let app = LoanApplication {
            person_age: 33.0,
            person_gender: Gender::Female,
            person_education: Education::Doctorate,
            person_income: 95000.0,
            person_emp_exp: 8,
            person_home_ownership: HomeOwnership::Own,
            loan_amnt: 20000.0,
            loan_intent: LoanIntent::Personal,
            cb_person_cred_hist_length: 9.5,
            credit_score: 760,
            previous_loan_defaults_on_file: YesNo::No,
        };
        let submitted = c.dispatch(Intent::SubmitApplication(app)).await;
        assert!(submitted.iter().any(|e| matches!(e, Effect::Celebrate(_))));

        let after = c.dispatch(Intent::DownloadReport).await;
        assert_eq!(
            after[1],
            Effect::ReportSaved(PathBuf::from("loan_application_report.png"))
        );
    }
}
