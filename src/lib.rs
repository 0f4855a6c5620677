//! storekeep - Small JSON-backed record keepers for the terminal
//!
//! Hospital appointments, store inventory, personal finance, an ATM and a
//! library lending desk, each persisted as one JSON document through a shared
//! record store, plus a current-weather lookup.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::StorekeepError;
