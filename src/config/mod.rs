//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! With no file, `AppConfig::default()` is used: the service listens on
//! port 3000 on all interfaces.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, CONFIG_ENV_VAR};
pub use schema::{AppConfig, ListenerConfig, LogFormat, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
