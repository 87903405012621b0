//! # Infrastructure Layer
//!
//! Technical concerns around the resolution engine: configuration, logging
//! and the JSON adapters for the descriptor and plan boundaries.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML and environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | JSON descriptor source and plan writer |
//! | [`utils`] | File and JSON helpers |

pub mod adapters;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use adapters::{JsonDescriptorSource, JsonPlanWriter};
pub use config::{ConfigLoader, VeldConfig};
pub use error_ext::ErrorContext;
