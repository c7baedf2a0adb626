//! Project Aster - an autonomous, modular AI research companion.
//!
//! Only the input processor exists today; see [`process`].

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::processor::{process, InputProcessor};
pub use domain::model::{OutputFormat, ProcessOutcome};
pub use domain::ports::Processor;
pub use utils::error::{AsterError, Result};

pub const VERSION: &str = "0.1.0";
pub const AUTHOR: &str = "Jeff Richley";
pub const EMAIL: &str = "jeffrichley@gmail.com";
