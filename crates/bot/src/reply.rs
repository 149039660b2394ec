//! Outcome → user-facing reply.

use std::sync::Arc;

use fintrack_report::{Document, DocumentRenderer, format_document, format_text};

use crate::command::ValidationError;
use crate::service::Outcome;

pub const WELCOME: &str = "Welcome to the Finance Tracker Bot!";
pub const EXITING: &str = "Exiting Finance Tracker Bot.";
pub const RECORDED: &str = "Transaction added successfully.";
pub const DOCUMENT_READY: &str = "PDF generated successfully.";

/// What the transport delivers back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub attachment: Option<Document>,
    /// The bot should stop after delivering this reply.
    pub shutdown: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachment: None,
            shutdown: false,
        }
    }
}

/// Builds replies; owns the document renderer.
#[derive(Debug, Clone)]
pub struct Responder {
    renderer: Arc<dyn DocumentRenderer>,
}

impl Responder {
    pub fn new(renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self { renderer }
    }

    pub fn reply(&self, outcome: &Outcome) -> Reply {
        match outcome {
            Outcome::Welcome => Reply::text(WELCOME),
            Outcome::Exiting => Reply {
                shutdown: true,
                ..Reply::text(EXITING)
            },
            Outcome::Recorded(_) => Reply::text(RECORDED),
            Outcome::Summary(summary) => {
                let mut text = format_text(summary);
                match format_document(self.renderer.as_ref(), summary) {
                    Ok(document) => {
                        text.push_str(DOCUMENT_READY);
                        Reply {
                            attachment: Some(document),
                            ..Reply::text(text)
                        }
                    }
                    Err(err) => {
                        // The text summary still goes out; only the document is dropped.
                        tracing::warn!(error = %err, "document rendering failed");
                        text.push_str(&format!("Error generating PDF: {err}\n"));
                        Reply::text(text)
                    }
                }
            }
        }
    }

    pub fn reject(&self, err: &ValidationError) -> Reply {
        Reply::text(err.user_message())
    }
}
