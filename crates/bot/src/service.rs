//! Ledger ownership and serialized access.
//!
//! `LedgerService` is the single owner of the process ledger. Appends take the write
//! lock (one writer at a time, in arrival order); queries take the read lock and copy
//! out what they need, so a reader never observes a half-applied append.

use std::sync::Arc;

use tokio::sync::RwLock;

use fintrack_core::{Amount, Clock, SystemClock};
use fintrack_ledger::{Category, Ledger, Totals, Transaction};
use fintrack_report::Summary;

use crate::command::BotCommand;

/// Clock shared between the service and whoever drives it (tests advance it by hand).
pub type SharedClock = Arc<dyn Clock>;

/// Result of executing a [`BotCommand`]; input to the reply stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Welcome,
    Exiting,
    Recorded(Transaction),
    Summary(Summary),
}

#[derive(Debug)]
pub struct LedgerService {
    ledger: RwLock<Ledger<SharedClock>>,
    window_days: u32,
}

impl LedgerService {
    pub fn new(clock: SharedClock, window_days: u32) -> Self {
        Self {
            ledger: RwLock::new(Ledger::with_clock(clock)),
            window_days,
        }
    }

    pub fn with_system_clock(window_days: u32) -> Self {
        Self::new(Arc::new(SystemClock), window_days)
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub async fn execute(&self, command: BotCommand) -> Outcome {
        match command {
            BotCommand::Start => Outcome::Welcome,
            BotCommand::Exit => Outcome::Exiting,
            BotCommand::Record { category, amount } => {
                Outcome::Recorded(self.record(category, amount).await)
            }
            BotCommand::Summary => Outcome::Summary(self.summary().await),
        }
    }

    pub async fn record(&self, category: Category, amount: Amount) -> Transaction {
        let mut ledger = self.ledger.write().await;
        let tx = ledger.record(category, amount).clone();
        tracing::info!(
            category = %tx.category(),
            amount = %tx.amount(),
            entries = ledger.len(),
            "transaction recorded"
        );
        tx
    }

    /// Trailing-window report data, taken from one consistent snapshot.
    pub async fn summary(&self) -> Summary {
        let ledger = self.ledger.read().await;
        let window = ledger.recent(self.window_days);
        let totals = ledger.totals();
        tracing::debug!(
            window_days = self.window_days,
            in_window = window.transactions.len(),
            entries = ledger.len(),
            "summary computed"
        );
        Summary::new(self.window_days, window, totals)
    }

    pub async fn totals(&self) -> Totals {
        self.ledger.read().await.totals()
    }

    pub async fn len(&self) -> usize {
        self.ledger.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ledger.read().await.is_empty()
    }
}
