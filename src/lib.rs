pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::DiscordClient;
pub use core::engine::LookupEngine;
pub use utils::error::{LookupError, Result};
