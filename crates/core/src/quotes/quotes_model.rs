//! Quote domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, Result};

/// Decision recorded on a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "PENDING",
            QuoteStatus::Accepted => "ACCEPTED",
            QuoteStatus::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a quote on a given day.
///
/// `Expired` is never stored; it follows from a pending quote outliving its
/// validity date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteState {
    Generated,
    Accepted,
    Rejected,
    Expired,
}

impl QuoteState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, QuoteState::Generated)
    }
}

/// A priced, time-bounded offer for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub estimated_amount: Decimal,
    pub issue_date: NaiveDate,
    /// Last day the quote can be accepted, strictly after `issue_date`.
    pub validity_date: NaiveDate,
    pub status: QuoteStatus,
    pub content: String,
}

impl Quote {
    pub fn is_accepted(&self) -> bool {
        self.status == QuoteStatus::Accepted
    }

    /// Whether the quote can still be acted on `date` (inclusive).
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date <= self.validity_date
    }

    pub fn state_on(&self, date: NaiveDate) -> QuoteState {
        match self.status {
            QuoteStatus::Accepted => QuoteState::Accepted,
            QuoteStatus::Rejected => QuoteState::Rejected,
            QuoteStatus::Pending if self.is_valid_on(date) => QuoteState::Generated,
            QuoteStatus::Pending => QuoteState::Expired,
        }
    }

    /// Records the client's decision on `date`.
    ///
    /// Only a pending quote within its validity window can be decided.
    /// Repeating the recorded decision is a no-op; reversing it is refused.
    pub fn decide_on(&mut self, accept: bool, date: NaiveDate) -> Result<()> {
        let decision = if accept {
            QuoteStatus::Accepted
        } else {
            QuoteStatus::Rejected
        };

        match self.status {
            current if current == decision => Ok(()),
            QuoteStatus::Pending => {
                if !self.is_valid_on(date) {
                    return Err(QuoteError::Expired {
                        id: self.id.clone(),
                        validity_date: self.validity_date,
                    }
                    .into());
                }
                self.status = decision;
                Ok(())
            }
            current => Err(QuoteError::AlreadyDecided {
                id: self.id.clone(),
                status: current,
            }
            .into()),
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quote for project '{}': {}, issued {}, valid until {}, {}",
            self.project_name,
            crate::utils::money::format_currency(self.estimated_amount),
            self.issue_date,
            self.validity_date,
            self.status
        )
    }
}
