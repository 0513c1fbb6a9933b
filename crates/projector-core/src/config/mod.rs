//! # Configuration System
//!
//! Hierarchical TOML configuration for projector. Files are only ever read.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.projector/config.toml` (global user preferences)
//! 3. **Project config** - `./.projector/config.toml` (directory-specific overrides)
//! 4. **Explicit config** - the file passed with `--config`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.projector/config.toml
//! [window]
//! title = "Unity Hub 3.9.1"
//!
//! [display]
//! width = 1920
//! height = 1080
//!
//! [controls]
//! quit_key = "q"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use projector_core::config::ProjectorConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProjectorConfig::load_hierarchy(None)?;
//!     let request = config.to_request()?;
//!     println!("projecting '{}'", request.window_title());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::path::Path;

// Public API exports
pub use types::{ControlsConfig, DisplayConfig, ProjectorConfig, WindowConfig};
pub use validation::validate_config;

use crate::errors::ConfigError;
use crate::projector::ProjectionRequest;

impl ProjectorConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        loading::load_hierarchy(explicit)
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Validate and turn the configuration into a projection request.
    ///
    /// See [`validation::to_request`] for details.
    pub fn to_request(&self) -> Result<ProjectionRequest, ConfigError> {
        validation::to_request(self)
    }
}
