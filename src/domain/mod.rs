//! Core domain layer. No external I/O dependencies.
//!
//! Entities, banding and formatting rules, view models. Dependencies flow inward.

pub mod chat;
pub mod classifier;
pub mod confetti;
pub mod entities;
pub mod errors;
pub mod formatter;
pub mod intent;
pub mod view;

pub use chat::ChatWidget;
pub use classifier::{ConfidenceBand, Decision, classify};
pub use confetti::ConfettiPlan;
pub use entities::{
    ApplicationSummary, ChatMessage, Education, Gender, HealthStatus, HomeOwnership,
    LoanApplication, LoanIntent, PredictionResult, ReportFile, Sender, YesNo,
};
pub use errors::DomainError;
pub use formatter::format_chat_message;
pub use intent::{Effect, Intent};
pub use view::{FormField, ResultView};
