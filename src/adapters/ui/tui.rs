//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Menu choices and chat input become intents; the controller's effects are
//! drawn with the terminal renderer.

use super::html::render_result_page;
use super::terminal;
use crate::domain::{
    ChatMessage, DomainError, Education, Effect, FormField, Gender, HomeOwnership, Intent,
    LoanApplication, LoanIntent, ReportFile, ResultView, Sender, YesNo,
};
use crate::ports::{InputPort, ReportSinkPort};
use crate::usecases::Controller;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select, Text};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info};

const RESULT_PAGE_FILENAME: &str = "loan_result.html";

/// Gold prompt prefix and answers for every inquire prompt.
pub fn apply_theme() {
    let gold = Color::Rgb {
        r: 0xd4,
        g: 0xaf,
        b: 0x37,
    };
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("◆").with_fg(gold))
        .with_highlighted_option_prefix(Styled::new("›").with_fg(gold))
        .with_answer(StyleSheet::new().with_fg(gold));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Apply,
    DownloadReport,
    SaveResultCard,
    Chat,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::Apply,
        MenuItem::DownloadReport,
        MenuItem::SaveResultCard,
        MenuItem::Chat,
        MenuItem::Quit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::Apply => "Apply for a loan",
            MenuItem::DownloadReport => "Download visual report",
            MenuItem::SaveResultCard => "Save result card (HTML)",
            MenuItem::Chat => "Chat with the finance advisor",
            MenuItem::Quit => "Quit",
        })
    }
}

/// Esc and Ctrl-C both mean "go back" inside a flow.
fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn non_negative_f64(v: &f64) -> Result<Validation, inquire::CustomUserError> {
    if *v >= 0.0 {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Value must not be negative".into()))
    }
}

fn non_negative_i64(v: &i64) -> Result<Validation, inquire::CustomUserError> {
    if *v >= 0 {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Value must not be negative".into()))
    }
}

fn ask_f64(field: FormField, default: f64) -> Result<Option<f64>, DomainError> {
    answered(
        CustomType::<f64>::new(field.label())
            .with_default(default)
            .with_formatter(&|v| field.display(v))
            .with_default_value_formatter(&|v| field.display(v))
            .with_validator(non_negative_f64)
            .with_error_message("Please type a number")
            .prompt(),
    )
}

fn ask_i64(field: FormField, default: i64) -> Result<Option<i64>, DomainError> {
    answered(
        CustomType::<i64>::new(field.label())
            .with_default(default)
            .with_formatter(&|v| field.display(v as f64))
            .with_default_value_formatter(&|v| field.display(v as f64))
            .with_validator(non_negative_i64)
            .with_error_message("Please type a whole number")
            .prompt(),
    )
}

fn ask_choice<T: fmt::Display + Copy>(label: &str, options: &[T]) -> Result<Option<T>, DomainError> {
    answered(Select::new(label, options.to_vec()).prompt())
}

/// Walk the form. `None` when the user backs out.
fn prompt_application() -> Result<Option<LoanApplication>, DomainError> {
    let Some(person_age) = ask_f64(FormField::Age, 30.0)? else {
        return Ok(None);
    };
    let Some(person_gender) = ask_choice("Gender", &Gender::ALL)? else {
        return Ok(None);
    };
    let Some(person_education) = ask_choice("Education", &Education::ALL)? else {
        return Ok(None);
    };
    let Some(person_income) = ask_f64(FormField::Income, 50000.0)? else {
        return Ok(None);
    };
    let Some(person_emp_exp) = ask_i64(FormField::EmploymentExperience, 5)? else {
        return Ok(None);
    };
    let Some(person_home_ownership) = ask_choice("Home ownership", &HomeOwnership::ALL)? else {
        return Ok(None);
    };
    let Some(loan_amnt) = ask_f64(FormField::LoanAmount, 10000.0)? else {
        return Ok(None);
    };
    let Some(loan_intent) = ask_choice("Loan purpose", &LoanIntent::ALL)? else {
        return Ok(None);
    };
    let Some(cb_person_cred_hist_length) = ask_f64(FormField::CreditHistoryLength, 5.0)? else {
        return Ok(None);
    };
    let Some(credit_score) = ask_i64(FormField::CreditScore, 650)? else {
        return Ok(None);
    };
    let Some(previous_loan_defaults_on_file) =
        ask_choice("Previous loan defaults on file", &YesNo::ALL)?
    else {
        return Ok(None);
    };

    Ok(Some(LoanApplication {
        person_age,
        person_gender,
        person_education,
        person_income,
        person_emp_exp,
        person_home_ownership,
        loan_amnt,
        loan_intent,
        cb_person_cred_hist_length,
        credit_score,
        previous_loan_defaults_on_file,
    }))
}

/// Spinner text for intents that wait on the network.
fn busy_label(intent: &Intent) -> Option<&'static str> {
    match intent {
        Intent::SubmitApplication(_) => Some("Analyzing application..."),
        Intent::DownloadReport => Some("Generating report..."),
        Intent::SendChat(text) if !text.trim().is_empty() => Some("Typing..."),
        _ => None,
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    controller: AsyncMutex<Controller>,
    sink: Arc<dyn ReportSinkPort>,
    popup_after: Duration,
    started: Instant,
    last_result: Mutex<Option<ResultView>>,
    transcript: Mutex<Vec<(DateTime<Local>, ChatMessage)>>,
}

impl TuiInputPort {
    pub fn new(controller: Controller, sink: Arc<dyn ReportSinkPort>, popup_after: Duration) -> Self {
        Self {
            controller: AsyncMutex::new(controller),
            sink,
            popup_after,
            started: Instant::now(),
            last_result: Mutex::new(None),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Dispatch with a spinner while the request is in flight.
    /// Returns whether the chat widget was opened.
    async fn handle(&self, intent: Intent) -> bool {
        let mut pending = busy_label(&intent).map(spinner);
        let effects = self.controller.lock().await.dispatch(intent).await;
        self.apply(effects, &mut pending).await
    }

    async fn apply(&self, effects: Vec<Effect>, pending: &mut Option<ProgressBar>) -> bool {
        let mut chat_opened = false;
        for effect in effects {
            match effect {
                // The spinner started before dispatch; only the "settled" side matters here.
                Effect::SubmitBusy(true) | Effect::DownloadBusy(true) | Effect::TypingStarted => {}
                Effect::SubmitBusy(false) | Effect::DownloadBusy(false) | Effect::TypingStopped => {
                    if let Some(pb) = pending.take() {
                        pb.finish_and_clear();
                    }
                }
                Effect::ShowResult(view) => {
                    terminal::print_result(&view);
                    if let Ok(mut last) = self.last_result.lock() {
                        *last = Some(view);
                    }
                }
                Effect::Celebrate(plan) => terminal::play_confetti(&plan).await,
                Effect::Alert(message) => terminal::print_alert(&message),
                Effect::ReportSaved(path) => {
                    terminal::print_notice(&format!("Report saved to {}", path.display()))
                }
                Effect::ChatOpened => chat_opened = true,
                Effect::ChatClosed => terminal::print_notice("Chat closed."),
                Effect::FocusChatInput => debug!("chat input focused"),
                Effect::AppendChat(message) => {
                    let now = Local::now();
                    // inquire already echoed the user's line
                    if message.sender == Sender::Bot {
                        terminal::print_chat_message(&message, now);
                    }
                    if let Ok(mut transcript) = self.transcript.lock() {
                        transcript.push((now, message));
                    }
                }
            }
        }
        if let Some(pb) = pending.take() {
            pb.finish_and_clear();
        }
        chat_opened
    }

    async fn chat_loop(&self) -> Result<(), DomainError> {
        terminal::print_notice(
            "Finance advisor: budgeting, loans, credit, taxes. Esc closes the chat.",
        );
        let history: Vec<(DateTime<Local>, ChatMessage)> = self
            .transcript
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default();
        for (at, message) in &history {
            terminal::print_chat_message(message, *at);
        }

        loop {
            let Some(input) = answered(Text::new("You:").prompt())? else {
                break;
            };
            self.handle(Intent::SendChat(input)).await;
        }

        self.handle(Intent::CloseChat).await;
        Ok(())
    }

    async fn save_result_card(&self) {
        let view = self.last_result.lock().ok().and_then(|last| last.clone());
        let Some(view) = view else {
            terminal::print_alert("No result yet. Submit an application first.");
            return;
        };
        let page = ReportFile {
            filename: RESULT_PAGE_FILENAME.to_string(),
            bytes: render_result_page(&view).into_bytes(),
        };
        match self.sink.save(&page).await {
            Ok(path) => terminal::print_notice(&format!("Result card saved to {}", path.display())),
            Err(e) => terminal::print_alert(&e.to_string()),
        }
    }

    async fn popup_due(&self) -> bool {
        self.started.elapsed() >= self.popup_after
            && self.controller.lock().await.chat_widget().popup_pending()
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            if self.popup_due().await && self.handle(Intent::PopupElapsed).await {
                self.chat_loop().await?;
            }

            let Some(choice) =
                answered(Select::new("What would you like to do?", MenuItem::ALL.to_vec()).prompt())?
            else {
                break;
            };

            match choice {
                MenuItem::Apply => {
                    if let Some(application) = prompt_application()? {
                        self.handle(Intent::SubmitApplication(application)).await;
                    }
                }
                MenuItem::DownloadReport => {
                    self.handle(Intent::DownloadReport).await;
                }
                MenuItem::SaveResultCard => self.save_result_card().await,
                MenuItem::Chat => {
                    if self.handle(Intent::ToggleChat).await {
                        self.chat_loop().await?;
                    }
                }
                MenuItem::Quit => break,
            }
        }
        info!("session ended");
        Ok(())
    }
}
