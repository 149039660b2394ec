use core::fmt;

use serde::Serialize;

use fintrack_core::Amount;
use fintrack_ledger::{RecentWindow, Totals, Transaction};

/// `chrono` format used for transaction timestamps in every rendering.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything a report shows: the trailing-window transactions and the three totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub window_days: u32,
    pub transactions: Vec<Transaction>,
    pub window_total: Amount,
    pub total_debt: Amount,
    pub total_credit: Amount,
}

impl Summary {
    pub fn new(window_days: u32, window: RecentWindow, totals: Totals) -> Self {
        Self {
            window_days,
            transactions: window.transactions,
            window_total: window.total,
            total_debt: totals.debt,
            total_credit: totals.credit,
        }
    }

    /// Report lines in display order: header, one entry per transaction, then the totals.
    pub fn lines(&self) -> impl Iterator<Item = ReportLine<'_>> + '_ {
        core::iter::once(ReportLine::Header {
            window_days: self.window_days,
        })
        .chain(self.transactions.iter().map(ReportLine::Entry))
        .chain([
            ReportLine::WindowTotal {
                window_days: self.window_days,
                total: self.window_total,
            },
            ReportLine::TotalDebt(self.total_debt),
            ReportLine::TotalCredit(self.total_credit),
        ])
    }
}

/// One line of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLine<'a> {
    Header { window_days: u32 },
    Entry(&'a Transaction),
    WindowTotal { window_days: u32, total: Amount },
    TotalDebt(Amount),
    TotalCredit(Amount),
}

impl ReportLine<'_> {
    /// True for the closing summary lines (renderers may set them apart).
    pub fn is_total(&self) -> bool {
        matches!(
            self,
            ReportLine::WindowTotal { .. } | ReportLine::TotalDebt(_) | ReportLine::TotalCredit(_)
        )
    }
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Header { window_days } => {
                write!(f, "Transactions in the last {window_days} days:")
            }
            ReportLine::Entry(tx) => write!(
                f,
                "Timestamp: {}, Type: {}, Amount: {}",
                tx.timestamp().format(TIMESTAMP_FORMAT),
                tx.category(),
                tx.amount()
            ),
            ReportLine::WindowTotal { window_days, total } => {
                write!(f, "Total spent in the last {window_days} days: {total}")
            }
            ReportLine::TotalDebt(total) => write!(f, "Total Debt: {total}"),
            ReportLine::TotalCredit(total) => write!(f, "Total Credit: {total}"),
        }
    }
}
