//! Domain layer - Records, documents and their mutations

pub mod atm;
pub mod finance;
pub mod hospital;
pub mod inventory;
pub mod library;
pub mod record;
pub mod validate;
pub mod weather;

pub use atm::AtmDocument;
pub use finance::{FinanceDocument, TransactionKind};
pub use hospital::{HospitalDocument, Patient};
pub use inventory::InventoryDocument;
pub use library::LibraryDocument;
pub use record::{Collection, Counter, Document, Record};
