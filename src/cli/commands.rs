//! CLI command definitions

use crate::domain::TransactionKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "storekeep")]
#[command(about = "Small JSON-backed record keepers for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Create empty data files instead of starter data
        #[arg(long)]
        empty: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Doctors and appointments
    #[command(subcommand)]
    Hospital(HospitalCommand),

    /// Products, purchases and earnings
    #[command(subcommand)]
    Inventory(InventoryCommand),

    /// Income and expenses
    #[command(subcommand)]
    Finance(FinanceCommand),

    /// Account balance, deposits and withdrawals
    #[command(subcommand)]
    Atm(AtmCommand),

    /// Book catalogue and lending
    #[command(subcommand)]
    Library(LibraryCommand),

    /// Current weather for a city
    Weather {
        /// City name (e.g., Berlin, "New York")
        city: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum HospitalCommand {
    /// Register a new doctor
    AddDoctor {
        #[arg(long)]
        name: String,

        #[arg(long)]
        specialization: String,

        /// Availability, e.g. "Mon-Fri 9AM-5PM"
        #[arg(long)]
        timings: String,
    },

    /// List registered doctors
    Doctors,

    /// Book an appointment with a doctor
    Book {
        /// Doctor ID
        #[arg(long = "doctor")]
        doctor_id: u64,

        #[arg(long)]
        patient: String,

        #[arg(long)]
        age: u32,

        /// Disease or symptoms
        #[arg(long)]
        condition: String,
    },

    /// List booked appointments
    Appointments,
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// Add a product, or restock one with the same name
    Add {
        #[arg(long)]
        name: String,

        /// Unit price (used for new products only)
        #[arg(long)]
        price: f64,

        #[arg(long)]
        quantity: u64,
    },

    /// Purchase a product
    Purchase {
        /// Product ID
        #[arg(long = "product")]
        product_id: u64,

        #[arg(long)]
        quantity: u64,
    },

    /// Show available stock
    Stock,

    /// Show total earnings and stock value
    Summary,
}

#[derive(Subcommand, Debug)]
pub enum FinanceCommand {
    /// Record income or an expense
    Add {
        /// income or expense
        #[arg(value_parser = parse_transaction_kind)]
        kind: TransactionKind,

        #[arg(long)]
        amount: f64,

        /// e.g. Salary, Groceries
        #[arg(long)]
        description: String,
    },

    /// Show income, expenses and net balance
    Summary,

    /// List all transactions
    List,
}

#[derive(Args, Debug)]
pub struct PinArg {
    /// 4-digit account PIN
    #[arg(long)]
    pub pin: String,
}

#[derive(Subcommand, Debug)]
pub enum AtmCommand {
    /// Check balance
    Balance {
        #[command(flatten)]
        auth: PinArg,
    },

    /// Deposit money
    Deposit {
        #[command(flatten)]
        auth: PinArg,

        #[arg(long)]
        amount: f64,
    },

    /// Withdraw money
    Withdraw {
        #[command(flatten)]
        auth: PinArg,

        #[arg(long)]
        amount: f64,
    },

    /// Show deposits and withdrawals
    History {
        #[command(flatten)]
        auth: PinArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum LibraryCommand {
    /// View all books and their availability
    List,

    /// Add a book or more copies of an existing one
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        copies: u64,
    },

    /// Borrow one copy
    Borrow {
        title: String,
    },

    /// Return one copy
    Return {
        title: String,

        /// Add an unknown title to the catalogue with one copy
        #[arg(long)]
        add_missing: bool,
    },
}

fn parse_transaction_kind(value: &str) -> Result<TransactionKind, String> {
    value.parse()
}
