//! Application use cases. Orchestrate domain logic via ports.

pub mod chat_service;
pub mod controller;
pub mod prediction_service;
pub mod report_service;

pub use chat_service::ChatService;
pub use controller::Controller;
pub use prediction_service::PredictionService;
pub use report_service::ReportService;
