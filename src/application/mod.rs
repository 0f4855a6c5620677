//! Application layer - Use cases and orchestration

pub mod atm;
pub mod finance;
pub mod hospital;
pub mod init;
pub mod inventory;
pub mod library;
pub mod manage_config;
pub mod weather;

pub use atm::AtmService;
pub use finance::FinanceService;
pub use hospital::HospitalService;
pub use inventory::InventoryService;
pub use library::LibraryService;
pub use manage_config::ConfigService;
pub use weather::WeatherService;
