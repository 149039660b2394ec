use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fintrack_core::{Amount, DomainError};

/// Closed classification of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Credit,
    Debt,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Credit => "Credit",
            Category::Debt => "Debt",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on `"Credit"` / `"Debt"`.
impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Credit" => Ok(Category::Credit),
            "Debt" => Ok(Category::Debt),
            other => Err(DomainError::validation(format!(
                "unknown transaction category: {other:?}"
            ))),
        }
    }
}

/// One recorded monetary event (immutable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    timestamp: DateTime<Utc>,
    category: Category,
    amount: Amount,
}

impl Transaction {
    pub(crate) fn new(timestamp: DateTime<Utc>, category: Category, amount: Amount) -> Self {
        Self {
            timestamp,
            category,
            amount,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_is_exact_and_case_sensitive() {
        assert_eq!("Credit".parse::<Category>().unwrap(), Category::Credit);
        assert_eq!("Debt".parse::<Category>().unwrap(), Category::Debt);

        for token in ["credit", "DEBT", "Refund", "/Debt", " Debt", ""] {
            let err = token.parse::<Category>().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "token {token:?}");
        }
    }

    #[test]
    fn category_display_round_trips_through_parse() {
        for category in [Category::Credit, Category::Debt] {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
