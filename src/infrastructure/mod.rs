//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod session;
pub mod store;
pub mod weather;

pub use config::Config;
pub use repository::{FileSystemRepository, WorkspaceRepository};
pub use session::StoreSession;
pub use store::{LoadStatus, RecordStore};
pub use weather::WeatherClient;
