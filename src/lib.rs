pub mod client;
pub mod config;
pub mod models;
pub mod session;
pub mod store;

pub use client::{ApiError, ExecutionApi, ExecutionClient};
pub use config::Config;
pub use session::SessionTokens;
pub use store::{NotificationStore, StoreState};
