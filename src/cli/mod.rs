//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{
    AtmCommand, Cli, Commands, FinanceCommand, HospitalCommand, InventoryCommand, LibraryCommand,
};
