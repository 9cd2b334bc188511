//! One chat turn: echo the user, show typing, ask the service, show the reply.

use crate::domain::{ChatMessage, DomainError, Effect};
use crate::ports::LoanApiPort;
use std::sync::Arc;
use tracing::{debug, warn};

const REFUSED_REPLY: &str = "Sorry, I encountered an error. Please try again.";
const OFFLINE_REPLY: &str = "Sorry, I'm having trouble connecting. Please try again.";

pub struct ChatService {
    api: Arc<dyn LoanApiPort>,
}

impl ChatService {
    pub fn new(api: Arc<dyn LoanApiPort>) -> Self {
        Self { api }
    }

    /// Blank input produces no effects.
    pub async fn send(&self, input: &str) -> Vec<Effect> {
        let message = input.trim();
        if message.is_empty() {
            return Vec::new();
        }

        let mut effects = vec![
            Effect::AppendChat(ChatMessage::user(message)),
            Effect::TypingStarted,
        ];

        let reply = match self.api.chat(message).await {
            Ok(reply) => {
                debug!(len = reply.len(), "chat reply received");
                reply
            }
            Err(DomainError::Api(m)) => {
                warn!(message = %m, "chat refused");
                REFUSED_REPLY.to_string()
            }
            Err(e) => {
                warn!(error = %e, "chat request failed");
                OFFLINE_REPLY.to_string()
            }
        };

        effects.push(Effect::TypingStopped);
        effects.push(Effect::AppendChat(ChatMessage::bot(reply)));
        effects
    }
}
