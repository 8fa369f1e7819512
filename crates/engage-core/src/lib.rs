//! Domain types and pure list-state primitives for the engage dashboard client.
//!
//! Everything in this crate is synchronous and side-effect free: entity
//! types, the filter/search engine, the selection tracker, the pager state
//! machine, and environment-driven configuration. Network I/O lives in
//! `engage-api`; stateful orchestration lives in `engage-store`.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod filter;
pub mod pager;
pub mod selection;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_config, load_config_from_env};
pub use filter::{filter_collection, FilterState, Filterable};
pub use pager::Pager;
pub use selection::Selection;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
