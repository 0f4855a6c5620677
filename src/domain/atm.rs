//! Bank accounts behind a PIN, with deposit and withdrawal history

use crate::domain::record::{reconcile, Collection, Counter, Document, Record};
use crate::domain::validate::positive_amount;
use crate::error::{Result, StorekeepError};
use serde::{Deserialize, Serialize};
use std::fmt;

const FIRST_ACCOUNT_ID: u64 = 1;
const FIRST_ENTRY_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub pin: String,
    pub balance: f64,
}

impl Record for Account {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Deposit => write!(f, "deposit"),
            EntryKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub id: u64,
    pub account_id: u64,
    pub kind: EntryKind,
    pub amount: f64,
    pub balance_after: f64,
    pub time: String,
}

impl Record for AccountEntry {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmDocument {
    #[serde(default)]
    pub accounts: Collection<Account>,
    #[serde(default = "AtmDocument::account_counter")]
    pub next_account_id: Counter,
    #[serde(default)]
    pub entries: Collection<AccountEntry>,
    #[serde(default = "AtmDocument::entry_counter")]
    pub next_entry_id: Counter,
}

impl Default for AtmDocument {
    fn default() -> Self {
        AtmDocument {
            accounts: Collection::default(),
            next_account_id: Self::account_counter(),
            entries: Collection::default(),
            next_entry_id: Self::entry_counter(),
        }
    }
}

impl Document for AtmDocument {
    const NAME: &'static str = "atm";

    fn reconcile_counters(&mut self) {
        reconcile(&mut self.next_account_id, &self.accounts);
        reconcile(&mut self.next_entry_id, &self.entries);
    }
}

impl AtmDocument {
    fn account_counter() -> Counter {
        Counter::starting_at(FIRST_ACCOUNT_ID)
    }

    fn entry_counter() -> Counter {
        Counter::starting_at(FIRST_ENTRY_ID)
    }

    /// Open an account. PINs must be four digits and unique.
    pub fn open_account(&mut self, pin: &str, balance: f64) -> Result<&Account> {
        if pin.len() != 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorekeepError::InvalidInput(
                "PIN must be exactly 4 digits".to_string(),
            ));
        }
        if self.accounts.find(|a| a.pin == pin).is_some() {
            return Err(StorekeepError::Rejected(
                "An account with this PIN already exists".to_string(),
            ));
        }
        if !balance.is_finite() || balance < 0.0 {
            return Err(StorekeepError::InvalidInput(
                "Opening balance must be zero or positive".to_string(),
            ));
        }

        let id = self.next_account_id.next_id();
        Ok(self.accounts.add(Account {
            id,
            pin: pin.to_string(),
            balance,
        }))
    }

    /// Single-attempt PIN check
    pub fn authenticate(&self, pin: &str) -> Result<u64> {
        self.accounts
            .find(|a| a.pin == pin.trim())
            .map(|a| a.id)
            .ok_or(StorekeepError::Authentication)
    }

    pub fn account(&self, account_id: u64) -> Result<&Account> {
        self.accounts
            .find_by_id(account_id)
            .ok_or(StorekeepError::RecordNotFound {
                kind: "account",
                id: account_id,
            })
    }

    pub fn deposit(&mut self, account_id: u64, amount: f64, time: String) -> Result<AccountEntry> {
        let amount = positive_amount("Amount", amount)?;
        self.post(account_id, EntryKind::Deposit, amount, time)
    }

    pub fn withdraw(&mut self, account_id: u64, amount: f64, time: String) -> Result<AccountEntry> {
        let amount = positive_amount("Amount", amount)?;
        let balance = self.account(account_id)?.balance;
        if amount > balance {
            return Err(StorekeepError::Rejected(format!(
                "Insufficient funds. Your current balance is ${:.2}.",
                balance
            )));
        }
        self.post(account_id, EntryKind::Withdrawal, amount, time)
    }

    pub fn history(&self, account_id: u64) -> Vec<&AccountEntry> {
        self.entries
            .iter()
            .filter(|e| e.account_id == account_id)
            .collect()
    }

    fn post(
        &mut self,
        account_id: u64,
        kind: EntryKind,
        amount: f64,
        time: String,
    ) -> Result<AccountEntry> {
        let account = self
            .accounts
            .find_by_id_mut(account_id)
            .ok_or(StorekeepError::RecordNotFound {
                kind: "account",
                id: account_id,
            })?;

        match kind {
            EntryKind::Deposit => account.balance += amount,
            EntryKind::Withdrawal => account.balance -= amount,
        }
        let balance_after = account.balance;

        let id = self.next_entry_id.next_id();
        let entry = self.entries.add(AccountEntry {
            id,
            account_id,
            kind,
            amount,
            balance_after,
            time,
        });
        Ok(entry.clone())
    }

    /// Starter accounts for a fresh workspace
    pub fn seeded() -> Result<Self> {
        let mut doc = AtmDocument::default();
        doc.open_account("1234", 1500.50)?;
        doc.open_account("4321", 500.00)?;
        doc.open_account("9999", 10000.00)?;
        Ok(doc)
    }
}
