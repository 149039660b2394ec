//! Message handling pipeline.
//!
//! ```text
//! text
//!   ↓ command::parse          (pure; rejects invalid input)
//! BotCommand
//!   ↓ LedgerService::execute  (the only stage that reads or mutates the ledger)
//! Outcome
//!   ↓ Responder::reply        (pure projection; renders text and document)
//! Reply
//! ```
//!
//! The transport (HTTP webhook, tests) only ever sees `Bot::handle`.

use std::sync::Arc;

use fintrack_report::DocumentRenderer;

use crate::command;
use crate::reply::{Reply, Responder};
use crate::service::LedgerService;

#[derive(Debug, Clone)]
pub struct Bot {
    service: Arc<LedgerService>,
    responder: Responder,
}

impl Bot {
    pub fn new(service: Arc<LedgerService>, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self {
            service,
            responder: Responder::new(renderer),
        }
    }

    pub fn service(&self) -> &Arc<LedgerService> {
        &self.service
    }

    /// Handle one inbound chat message end to end.
    pub async fn handle(&self, text: &str) -> Reply {
        match command::parse(text) {
            Ok(cmd) => {
                tracing::debug!(command = ?cmd, "command accepted");
                let outcome = self.service.execute(cmd).await;
                self.responder.reply(&outcome)
            }
            Err(err) => {
                tracing::warn!(error = %err, "input rejected");
                self.responder.reject(&err)
            }
        }
    }
}
