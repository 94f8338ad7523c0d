//! Cross-cutting infrastructure

pub mod logging;

pub use logging::{
    LogConfig, LogFormat, LogOutput, init_logging, init_cli_logging, init_file_logging,
};
