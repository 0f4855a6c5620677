//! ATM use cases behind a single-attempt PIN check

use crate::domain::atm::{AccountEntry, AtmDocument};
use crate::domain::validate::timestamp_now;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, StoreSession, WorkspaceRepository};

/// An authenticated ATM session for one account
pub struct AtmService {
    session: StoreSession<AtmDocument>,
    account_id: u64,
}

impl AtmService {
    /// Authenticate against an already opened session
    pub fn login(session: StoreSession<AtmDocument>, pin: &str) -> Result<Self> {
        let account_id = session.document().authenticate(pin).map_err(|e| {
            tracing::warn!("Rejected PIN");
            e
        })?;
        tracing::debug!(account_id = account_id, "Authenticated");
        Ok(AtmService {
            session,
            account_id,
        })
    }

    /// Open the ATM data file named in the workspace config and authenticate
    pub fn open(repository: &FileSystemRepository, pin: &str) -> Result<Self> {
        let config = repository.load_config()?;
        let store = repository.store(&config.files.atm);
        Self::login(StoreSession::open(store), pin)
    }

    pub fn balance(&self) -> Result<f64> {
        Ok(self.session.document().account(self.account_id)?.balance)
    }

    pub fn deposit(&mut self, amount: f64) -> Result<AccountEntry> {
        let account_id = self.account_id;
        let entry = self
            .session
            .commit(|doc| doc.deposit(account_id, amount, timestamp_now()))?;
        tracing::info!(entry_id = entry.id, account_id = account_id, "Deposit recorded");
        Ok(entry)
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<AccountEntry> {
        let account_id = self.account_id;
        let entry = self
            .session
            .commit(|doc| doc.withdraw(account_id, amount, timestamp_now()))?;
        tracing::info!(entry_id = entry.id, account_id = account_id, "Withdrawal recorded");
        Ok(entry)
    }

    pub fn history(&self) -> Vec<&AccountEntry> {
        self.session.document().history(self.account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorekeepError;
    use crate::infrastructure::RecordStore;
    use tempfile::TempDir;

    fn seeded_session(temp: &TempDir) -> StoreSession<AtmDocument> {
        let store = RecordStore::new(temp.path().join("atm_data.json"));
        store.save(&AtmDocument::seeded().unwrap()).unwrap();
        StoreSession::open(store)
    }

    #[test]
    fn test_wrong_pin_is_rejected() {
        let temp = TempDir::new().unwrap();
        let result = AtmService::login(seeded_session(&temp), "0000");
        assert!(matches!(result, Err(StorekeepError::Authentication)));
    }

    #[test]
    fn test_deposit_and_withdraw_persist() {
        let temp = TempDir::new().unwrap();
        let mut atm = AtmService::login(seeded_session(&temp), "4321").unwrap();

        atm.deposit(100.0).unwrap();
        atm.withdraw(50.0).unwrap();
        assert_eq!(atm.balance().unwrap(), 550.0);

        let store = RecordStore::<AtmDocument>::new(temp.path().join("atm_data.json"));
        let reopened = AtmService::login(StoreSession::open(store), "4321").unwrap();
        assert_eq!(reopened.balance().unwrap(), 550.0);
        assert_eq!(reopened.history().len(), 2);
    }
}
