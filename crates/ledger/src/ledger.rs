use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use fintrack_core::{Amount, Clock, SystemClock};

use crate::transaction::{Category, Transaction};

/// Length of the trailing summary window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// All-time totals by category.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub debt: Amount,
    pub credit: Amount,
}

impl Totals {
    /// `(total_debt, total_credit)`.
    pub fn as_tuple(&self) -> (Amount, Amount) {
        (self.debt, self.credit)
    }
}

/// Transactions inside a trailing window, plus their summed amount.
///
/// `total` adds every category together (debt and credit alike).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecentWindow {
    pub transactions: Vec<Transaction>,
    pub total: Amount,
}

/// Append-only transaction history.
///
/// The ledger is the sole owner of its transactions. Queries hand out owned copies, so a
/// result computed before an append is never affected by it.
///
/// Invariant: timestamps are non-decreasing in insertion order. `record` clamps the clock
/// reading to the previous timestamp if the clock ever steps backwards.
#[derive(Debug)]
pub struct Ledger<C = SystemClock> {
    transactions: Vec<Transaction>,
    clock: C,
}

impl Ledger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Ledger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Ledger<C> {
    /// Empty ledger stamping transactions with `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            transactions: Vec::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Append a transaction stamped with the current time.
    pub fn record(&mut self, category: Category, amount: Amount) -> &Transaction {
        let now = self.clock.now();
        let timestamp = match self.transactions.last() {
            Some(last) if last.timestamp() > now => last.timestamp(),
            _ => now,
        };

        let index = self.transactions.len();
        self.transactions
            .push(Transaction::new(timestamp, category, amount));
        tracing::debug!(%category, %amount, %timestamp, position = index, "transaction appended");

        &self.transactions[index]
    }

    /// Sum of amounts per category over the whole history.
    pub fn totals(&self) -> Totals {
        self.transactions
            .iter()
            .fold(Totals::default(), |mut totals, tx| {
                match tx.category() {
                    Category::Debt => totals.debt += tx.amount(),
                    Category::Credit => totals.credit += tx.amount(),
                }
                totals
            })
    }

    /// Transactions with `timestamp > now - window_days`, in insertion order.
    ///
    /// A window reaching past the earliest representable instant covers everything.
    pub fn recent_window(&self, now: DateTime<Utc>, window_days: u32) -> RecentWindow {
        let cutoff = Duration::try_days(i64::from(window_days))
            .and_then(|span| now.checked_sub_signed(span));

        // Timestamps are sorted, so everything after the first in-window entry is in-window.
        let start = match cutoff {
            Some(cutoff) => self
                .transactions
                .partition_point(|tx| tx.timestamp() <= cutoff),
            None => 0,
        };
        let transactions = self.transactions[start..].to_vec();
        let total = transactions.iter().map(Transaction::amount).sum();

        RecentWindow { transactions, total }
    }

    /// [`recent_window`](Self::recent_window) anchored at the ledger clock's "now".
    pub fn recent(&self, window_days: u32) -> RecentWindow {
        self.recent_window(self.clock.now(), window_days)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use fintrack_core::ManualClock;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    fn manual_ledger(start: DateTime<Utc>) -> (Arc<ManualClock>, Ledger<Arc<ManualClock>>) {
        let clock = Arc::new(ManualClock::new(start));
        let ledger = Ledger::with_clock(clock.clone());
        (clock, ledger)
    }

    #[test]
    fn totals_group_amounts_by_category() {
        let mut ledger = Ledger::new();
        ledger.record(Category::Credit, amount("100.00"));
        ledger.record(Category::Debt, amount("40.00"));

        let totals = ledger.totals();
        assert_eq!(totals.as_tuple(), (amount("40.00"), amount("100.00")));
    }

    #[test]
    fn recent_window_excludes_old_transactions() {
        let now = test_time();
        let (clock, mut ledger) = manual_ledger(now - Duration::days(40));
        ledger.record(Category::Credit, amount("50.00"));
        clock.set(now - Duration::days(5));
        ledger.record(Category::Debt, amount("20.00"));

        let window = ledger.recent_window(now, DEFAULT_WINDOW_DAYS);
        assert_eq!(window.transactions.len(), 1);
        assert_eq!(window.transactions[0].category(), Category::Debt);
        assert_eq!(window.transactions[0].timestamp(), now - Duration::days(5));
        assert_eq!(window.total, amount("20.00"));
    }

    #[test]
    fn empty_ledger_has_zero_totals_and_empty_window() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals().as_tuple(), (Amount::ZERO, Amount::ZERO));

        let window = ledger.recent_window(test_time(), DEFAULT_WINDOW_DAYS);
        assert!(window.transactions.is_empty());
        assert_eq!(window.total, Amount::ZERO);
    }

    #[test]
    fn window_cutoff_is_strictly_after() {
        let now = test_time();
        let (clock, mut ledger) = manual_ledger(now - Duration::days(30));
        ledger.record(Category::Debt, amount("1"));
        clock.advance(Duration::seconds(1));
        ledger.record(Category::Debt, amount("2"));

        let window = ledger.recent_window(now, 30);
        assert_eq!(window.transactions.len(), 1);
        assert_eq!(window.total, amount("2"));
    }

    #[test]
    fn window_total_mixes_categories() {
        let now = test_time();
        let (_clock, mut ledger) = manual_ledger(now - Duration::days(1));
        ledger.record(Category::Credit, amount("10.00"));
        ledger.record(Category::Debt, amount("2.50"));

        assert_eq!(ledger.recent_window(now, 30).total, amount("12.50"));
    }

    #[test]
    fn recent_uses_ledger_clock() {
        let now = test_time();
        let (clock, mut ledger) = manual_ledger(now - Duration::days(31));
        ledger.record(Category::Debt, amount("7"));
        clock.set(now);
        ledger.record(Category::Debt, amount("3"));

        let window = ledger.recent(DEFAULT_WINDOW_DAYS);
        assert_eq!(window.transactions.len(), 1);
        assert_eq!(window.total, amount("3"));
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let now = test_time();
        let (clock, mut ledger) = manual_ledger(now);
        ledger.record(Category::Credit, amount("1"));
        clock.set(now - Duration::hours(3));
        let second = ledger.record(Category::Credit, amount("1")).clone();

        assert_eq!(second.timestamp(), now);
        assert!(
            ledger
                .transactions()
                .windows(2)
                .all(|w| w[0].timestamp() <= w[1].timestamp())
        );
    }

    #[test]
    fn negative_and_zero_amounts_are_accepted() {
        let mut ledger = Ledger::new();
        ledger.record(Category::Debt, amount("-5"));
        ledger.record(Category::Debt, Amount::ZERO);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.totals().debt, amount("-5"));
    }

    #[test]
    fn results_are_snapshots() {
        let now = test_time();
        let (_clock, mut ledger) = manual_ledger(now);
        ledger.record(Category::Credit, amount("1"));

        let window = ledger.recent_window(now, 30);
        let totals = ledger.totals();
        ledger.record(Category::Debt, amount("9"));

        assert_eq!(window.transactions.len(), 1);
        assert_eq!(window.total, amount("1"));
        assert_eq!(totals.as_tuple(), (Amount::ZERO, amount("1")));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn huge_window_covers_everything() {
        let now = test_time();
        let (_clock, mut ledger) = manual_ledger(now - Duration::days(3650));
        ledger.record(Category::Credit, amount("4"));

        let window = ledger.recent(u32::MAX);
        assert_eq!(window.transactions.len(), 1);
        assert_eq!(window.total, amount("4"));
    }

    #[test]
    fn aggregates_saturate_on_extreme_amounts() {
        let now = test_time();
        let (_clock, mut ledger) = manual_ledger(now);
        let huge = Amount::new(Decimal::MAX);
        ledger.record(Category::Credit, huge);
        ledger.record(Category::Credit, huge);
        ledger.record(Category::Debt, amount("1"));

        assert_eq!(ledger.totals().as_tuple(), (amount("1"), huge));
        let window = ledger.recent(DEFAULT_WINDOW_DAYS);
        assert_eq!(window.transactions.len(), 3);
        assert_eq!(window.total, huge);
    }

    fn arb_entry() -> impl Strategy<Value = (bool, i64, i64)> {
        // (is_debt, amount in cents, minutes elapsed since the previous entry)
        (any::<bool>(), -1_000_000i64..1_000_000i64, 0i64..20_000i64)
    }

    fn replay(entries: &[(bool, i64, i64)]) -> Ledger<Arc<ManualClock>> {
        let (clock, mut ledger) = manual_ledger(test_time() - Duration::days(90));
        for &(is_debt, cents, minutes) in entries {
            clock.advance(Duration::minutes(minutes));
            let category = if is_debt { Category::Debt } else { Category::Credit };
            ledger.record(category, Amount::new(Decimal::new(cents, 2)));
        }
        ledger
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: totals equal the per-category sums of everything recorded.
        #[test]
        fn totals_match_grouped_sums(entries in prop::collection::vec(arb_entry(), 0..64)) {
            let ledger = replay(&entries);

            let mut debt = Decimal::ZERO;
            let mut credit = Decimal::ZERO;
            for &(is_debt, cents, _) in &entries {
                if is_debt {
                    debt += Decimal::new(cents, 2);
                } else {
                    credit += Decimal::new(cents, 2);
                }
            }

            let totals = ledger.totals();
            prop_assert_eq!(totals.debt.as_decimal(), debt);
            prop_assert_eq!(totals.credit.as_decimal(), credit);
            prop_assert_eq!(ledger.len(), entries.len());
        }

        /// Property: the window is exactly the in-order subsequence after the cutoff,
        /// its total is the sum over that subsequence, and asking twice gives the same answer.
        #[test]
        fn window_matches_naive_filter(
            entries in prop::collection::vec(arb_entry(), 0..64),
            days in 0u32..120,
        ) {
            let ledger = replay(&entries);
            let now = ledger.clock().now();
            let cutoff = now - Duration::days(i64::from(days));

            let expected: Vec<Transaction> = ledger
                .transactions()
                .iter()
                .filter(|tx| tx.timestamp() > cutoff)
                .cloned()
                .collect();
            let expected_total: Amount = expected.iter().map(Transaction::amount).sum();

            let window = ledger.recent_window(now, days);
            prop_assert_eq!(&window.transactions, &expected);
            prop_assert_eq!(window.total, expected_total);
            prop_assert_eq!(ledger.recent_window(now, days), window);
        }
    }
}
