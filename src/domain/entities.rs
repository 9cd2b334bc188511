//! Domain entities. Pure data structures for the loan application flow.
//!
//! Wire names match the LoanVista service exactly; no HTTP types here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Applicant gender as accepted by the service encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    Associate,
    Bachelor,
    Doctorate,
    #[serde(rename = "High School")]
    HighSchool,
    Master,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HomeOwnership {
    Mortgage,
    Other,
    Own,
    Rent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoanIntent {
    DebtConsolidation,
    Education,
    HomeImprovement,
    Medical,
    Personal,
    Venture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    No,
    Yes,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];
}

impl Education {
    pub const ALL: [Education; 5] = [
        Education::Associate,
        Education::Bachelor,
        Education::Doctorate,
        Education::HighSchool,
        Education::Master,
    ];
}

impl HomeOwnership {
    pub const ALL: [HomeOwnership; 4] = [
        HomeOwnership::Mortgage,
        HomeOwnership::Other,
        HomeOwnership::Own,
        HomeOwnership::Rent,
    ];
}

impl LoanIntent {
    pub const ALL: [LoanIntent; 6] = [
        LoanIntent::DebtConsolidation,
        LoanIntent::Education,
        LoanIntent::HomeImprovement,
        LoanIntent::Medical,
        LoanIntent::Personal,
        LoanIntent::Venture,
    ];

    /// Wire value, e.g. `DEBTCONSOLIDATION`.
    pub fn as_str(self) -> &'static str {
        match self {
            LoanIntent::DebtConsolidation => "DEBTCONSOLIDATION",
            LoanIntent::Education => "EDUCATION",
            LoanIntent::HomeImprovement => "HOMEIMPROVEMENT",
            LoanIntent::Medical => "MEDICAL",
            LoanIntent::Personal => "PERSONAL",
            LoanIntent::Venture => "VENTURE",
        }
    }
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::No, YesNo::Yes];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        })
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Education::Associate => "Associate",
            Education::Bachelor => "Bachelor",
            Education::Doctorate => "Doctorate",
            Education::HighSchool => "High School",
            Education::Master => "Master",
        })
    }
}

impl fmt::Display for HomeOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HomeOwnership::Mortgage => "Mortgage",
            HomeOwnership::Other => "Other",
            HomeOwnership::Own => "Own",
            HomeOwnership::Rent => "Rent",
        })
    }
}

impl fmt::Display for LoanIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoanIntent::DebtConsolidation => "Debt Consolidation",
            LoanIntent::Education => "Education",
            LoanIntent::HomeImprovement => "Home Improvement",
            LoanIntent::Medical => "Medical",
            LoanIntent::Personal => "Personal",
            LoanIntent::Venture => "Venture",
        })
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        })
    }
}

/// Loan application form. Serialized as the `POST /api/predict` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub person_age: f64,
    pub person_gender: Gender,
    pub person_education: Education,
    pub person_income: f64,
    pub person_emp_exp: i64,
    pub person_home_ownership: HomeOwnership,
    pub loan_amnt: f64,
    pub loan_intent: LoanIntent,
    pub cb_person_cred_hist_length: f64,
    pub credit_score: i64,
    pub previous_loan_defaults_on_file: YesNo,
}

/// Subset of the echoed application shown on the result card.
///
/// The service echoes the whole request; fields not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub person_age: f64,
    pub person_income: f64,
    pub loan_amnt: f64,
    pub credit_score: i64,
    pub loan_intent: String,
}

impl From<&LoanApplication> for ApplicationSummary {
    fn from(app: &LoanApplication) -> Self {
        Self {
            person_age: app.person_age,
            person_income: app.person_income,
            loan_amnt: app.loan_amnt,
            credit_score: app.credit_score,
            loan_intent: app.loan_intent.as_str().to_string(),
        }
    }
}

/// One prediction from the service. Consumed immediately to render a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 1 = approved, anything else = rejected.
    pub prediction: u8,
    /// Model probability of approval, 0.0..=1.0.
    pub probability: f64,
    pub application_data: ApplicationSummary,
    #[serde(default)]
    pub risk_factors: Vec<String>,
}

impl PredictionResult {
    pub fn is_approved(&self) -> bool {
        self.prediction == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class prefix used by the chat markup (`user-message`, `bot-message`).
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A single chat turn. Lives only as long as the transcript that shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Service liveness from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// A downloaded report, ready to be handed to a report sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}
