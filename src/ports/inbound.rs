//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive front-end drives the controller until the user quits.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    async fn run(&self) -> Result<(), DomainError>;
}
