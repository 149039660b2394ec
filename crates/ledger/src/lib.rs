//! Personal finance ledger (append-only, in-memory).
//!
//! Pure domain logic only: no IO, no transport, no persistence concerns.

pub mod ledger;
pub mod transaction;

pub use ledger::{DEFAULT_WINDOW_DAYS, Ledger, RecentWindow, Totals};
pub use transaction::{Category, Transaction};
