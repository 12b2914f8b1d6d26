//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → PORT environment override
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running with no file gives port 3000, the
//!   jsonplaceholder upstream and docs at /api-docs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    DocsConfig, LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, RelayConfig,
    UpstreamConfig,
};
