//! Finance tracker chat bot: command validation, the ledger service and the
//! messaging-gateway webhook.
//!
//! A message flows through three stages connected by plain data:
//! - `command`: text → [`BotCommand`] (or a [`ValidationError`])
//! - `service`: [`BotCommand`] → [`Outcome`] (the only stage touching the ledger)
//! - `reply`: [`Outcome`] → [`Reply`] (text plus optional document)

pub mod app;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod reply;
pub mod service;
pub mod shutdown;

pub use command::{BotCommand, ValidationError};
pub use config::{Config, ConfigError};
pub use dispatcher::Bot;
pub use reply::{Reply, Responder};
pub use service::{LedgerService, Outcome, SharedClock};
pub use shutdown::Shutdown;
