//! Frontend components
//!
//! The command-line interface and its configuration file.

pub mod cli;
pub mod config;

pub use cli::main as cli_main;
pub use config::Config;
