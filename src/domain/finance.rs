//! Income and expense transactions

use crate::domain::record::{reconcile, Collection, Counter, Document, Record};
use crate::domain::validate::{positive_amount, required_text};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FIRST_TRANSACTION_ID: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(format!(
                "Invalid transaction type: '{}'. Valid types are: income, expense",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
}

impl Record for Transaction {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinanceSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub total_transactions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceDocument {
    #[serde(default)]
    pub transactions: Collection<Transaction>,
    #[serde(default = "FinanceDocument::transaction_counter")]
    pub next_transaction_id: Counter,
}

impl Default for FinanceDocument {
    fn default() -> Self {
        FinanceDocument {
            transactions: Collection::default(),
            next_transaction_id: Self::transaction_counter(),
        }
    }
}

impl Document for FinanceDocument {
    const NAME: &'static str = "finance";

    // Files written before the counter was persisted rely on this to continue numbering.
    fn reconcile_counters(&mut self) {
        reconcile(&mut self.next_transaction_id, &self.transactions);
    }
}

impl FinanceDocument {
    fn transaction_counter() -> Counter {
        Counter::starting_at(FIRST_TRANSACTION_ID)
    }

    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        description: &str,
        date: String,
    ) -> Result<&Transaction> {
        let amount = positive_amount("Transaction amount", amount)?;
        let description = required_text("Description", description)?;

        let id = self.next_transaction_id.next_id();
        Ok(self.transactions.add(Transaction {
            id,
            date,
            kind,
            amount,
            description,
        }))
    }

    pub fn summary(&self) -> FinanceSummary {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;

        for t in &self.transactions {
            match t.kind {
                TransactionKind::Income => total_income += t.amount,
                TransactionKind::Expense => total_expenses += t.amount,
            }
        }

        FinanceSummary {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            total_transactions: self.transactions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2025-01-17 10:00:00";

    #[test]
    fn test_expense_on_empty_list() {
        let mut doc = FinanceDocument::default();
        doc.add_transaction(TransactionKind::Expense, 50.00, "Groceries", NOW.to_string())
            .unwrap();

        let summary = doc.summary();
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expenses, 50.0);
        assert_eq!(summary.net_balance, -50.0);
        assert_eq!(summary.total_transactions, 1);
    }

    #[test]
    fn test_ids_come_from_counter() {
        let mut doc = FinanceDocument::default();
        let a = doc
            .add_transaction(TransactionKind::Income, 1000.0, "Salary", NOW.to_string())
            .unwrap()
            .id;
        let b = doc
            .add_transaction(TransactionKind::Expense, 20.0, "Lunch", NOW.to_string())
            .unwrap()
            .id;
        assert_eq!((a, b), (1, 2));
        assert_eq!(doc.next_transaction_id.peek(), 3);
    }

    #[test]
    fn test_rejects_non_positive_amount_and_empty_description() {
        let mut doc = FinanceDocument::default();
        assert!(doc
            .add_transaction(TransactionKind::Income, 0.0, "Nothing", NOW.to_string())
            .is_err());
        assert!(doc
            .add_transaction(TransactionKind::Income, 5.0, "  ", NOW.to_string())
            .is_err());
        assert!(doc.transactions.is_empty());
        assert_eq!(doc.next_transaction_id.peek(), 1);
    }

    #[test]
    fn test_legacy_file_without_counter_continues_numbering() {
        let json = r#"{"transactions": [
            {"id": 1, "date": "2024-01-01 09:00:00", "type": "income", "amount": 100.0, "description": "Gift"},
            {"id": 2, "date": "2024-01-02 09:00:00", "type": "expense", "amount": 30.0, "description": "Food"}
        ]}"#;
        let mut doc: FinanceDocument = serde_json::from_str(json).unwrap();
        doc.reconcile_counters();

        let id = doc
            .add_transaction(TransactionKind::Expense, 5.0, "Coffee", NOW.to_string())
            .unwrap()
            .id;
        assert_eq!(id, 3);
    }

    #[test]
    fn test_kind_serializes_as_type_field() {
        let mut doc = FinanceDocument::default();
        doc.add_transaction(TransactionKind::Income, 10.0, "Tip", NOW.to_string())
            .unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains(r#""type":"income""#));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            TransactionKind::from_str("Income").unwrap(),
            TransactionKind::Income
        );
        assert!(TransactionKind::from_str("transfer").is_err());
    }
}
