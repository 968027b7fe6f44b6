// Ledger module
// Rent ledger shown on the payments screen; data is mock and embedded

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MOCK_LEDGER_JSON: &str = include_str!("../../../assets/mock_ledger.json");

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid ledger data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    RentCharge,
    Payment,
    LateFee,
    Credit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub kind: TransactionKind,
    /// Positive magnitude in cents; `kind` decides the direction
    pub amount_cents: i64,
}

/// Totals shown above the transaction list, in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total_charged: i64,
    pub total_paid: i64,
    pub total_credits: i64,
    pub balance_due: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub property: String,
    pub tenant: String,
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn from_json(content: &str) -> Result<Self, LedgerError> {
        let mut ledger: Ledger = serde_json::from_str(content)?;
        ledger.transactions.sort_by_key(|t| (t.date, t.id));
        Ok(ledger)
    }

    /// The ledger bundled with the app
    pub fn mock() -> Result<Self, LedgerError> {
        Self::from_json(MOCK_LEDGER_JSON)
    }

    pub fn summary(&self) -> LedgerSummary {
        let mut summary = LedgerSummary::default();
        for transaction in &self.transactions {
            match transaction.kind {
                TransactionKind::RentCharge | TransactionKind::LateFee => {
                    summary.total_charged += transaction.amount_cents
                }
                TransactionKind::Payment => summary.total_paid += transaction.amount_cents,
                TransactionKind::Credit => summary.total_credits += transaction.amount_cents,
            }
        }
        summary.balance_due = summary.total_charged - summary.total_paid - summary.total_credits;
        summary
    }

    /// Share placeholder; nothing leaves the app
    pub fn share(&self) {
        log::info!(
            "Share requested for ledger of {} ({} transactions); sharing is not available",
            self.property,
            self.transactions.len()
        );
    }
}

/// Render cents as dollars, e.g. `-1234` -> `-$12.34`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}
