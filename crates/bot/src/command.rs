//! Inbound text → command (validation boundary in front of the ledger).

use thiserror::Error;

use fintrack_core::{Amount, DomainError};
use fintrack_ledger::Category;

/// Prefix every bot directive and category token carries.
pub const COMMAND_MARKER: char = '/';

pub const START: &str = "/start";
pub const EXIT: &str = "/exit";
pub const SUMMARY: &str = "/Last30";

/// A validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Exit,
    /// Show the trailing-window report.
    Summary,
    Record { category: Category, amount: Amount },
}

/// Input rejected before it reaches the ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected `<category> <amount>`, got {0} token(s)")]
    Format(usize),

    #[error("unknown transaction type {0:?}")]
    Category(String),

    #[error("amount {0:?} is not a number")]
    Amount(String),

    #[error("amount {0:?} is too large")]
    AmountTooLarge(String),
}

impl ValidationError {
    /// Corrective message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::Format(_) => {
                "Invalid input. Please enter transaction in the format '/Type Amount'."
            }
            ValidationError::Category(_) => {
                "Invalid transaction type. Please use '/Debt' or '/Credit'."
            }
            ValidationError::Amount(_) => "Invalid input. Amount must be a number.",
            ValidationError::AmountTooLarge(_) => {
                "Invalid input. Amount must not exceed 1000000000000000 in magnitude."
            }
        }
    }
}

/// Parse one chat message.
///
/// Directives are matched exactly (case-sensitive). Anything else must be
/// `/<Category> <amount>` with exactly two whitespace-separated tokens.
pub fn parse(text: &str) -> Result<BotCommand, ValidationError> {
    match text.trim() {
        START => return Ok(BotCommand::Start),
        EXIT => return Ok(BotCommand::Exit),
        SUMMARY => return Ok(BotCommand::Summary),
        _ => {}
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [category_token, amount_token] = tokens.as_slice() else {
        return Err(ValidationError::Format(tokens.len()));
    };

    let category = category_token
        .strip_prefix(COMMAND_MARKER)
        .and_then(|name| name.parse::<Category>().ok())
        .ok_or_else(|| ValidationError::Category(category_token.to_string()))?;

    let amount = amount_token.parse::<Amount>().map_err(|err| match err {
        DomainError::OutOfRange(_) => ValidationError::AmountTooLarge(amount_token.to_string()),
        DomainError::Validation(_) => ValidationError::Amount(amount_token.to_string()),
    })?;

    Ok(BotCommand::Record { category, amount })
}
