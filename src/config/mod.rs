#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod users;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
