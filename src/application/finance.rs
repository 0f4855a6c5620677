//! Personal finance use cases

use crate::domain::finance::{FinanceDocument, FinanceSummary, Transaction, TransactionKind};
use crate::domain::validate::timestamp_now;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, StoreSession, WorkspaceRepository};

/// Service for the personal finance tracker
pub struct FinanceService {
    session: StoreSession<FinanceDocument>,
}

impl FinanceService {
    pub fn new(session: StoreSession<FinanceDocument>) -> Self {
        FinanceService { session }
    }

    /// Open the finance data file named in the workspace config
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = repository.store(&config.files.finance);
        Ok(Self::new(StoreSession::open(store)))
    }

    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        description: &str,
    ) -> Result<Transaction> {
        let transaction = self.session.commit(|doc| {
            doc.add_transaction(kind, amount, description, timestamp_now())
                .cloned()
        })?;
        tracing::info!(transaction_id = transaction.id, kind = %kind, "Recorded transaction");
        Ok(transaction)
    }

    pub fn summary(&self) -> FinanceSummary {
        self.session.document().summary()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.session.document().transactions.as_slice()
    }
}
