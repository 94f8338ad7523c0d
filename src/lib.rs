//! heightwise - compound unit arithmetic
//!
//! Quantities split across a major and a minor unit (feet and inches, meters
//! and centimeters), normalized so the minor part lies in `[0, ratio)`, with
//! scaling and conversion between unit systems.

// Core modules
pub mod core;
pub mod errors;
pub mod frontend;
pub mod infrastructure;

// Re-export commonly used items
pub use crate::core::{
    CompoundQuantity, Measurement, UnitSystem, Height, System, Imperial, Metric,
    to_minor_units, from_minor_units, scale, convert, render,
};
pub use errors::{DomainError, ErrorKind, Result};
pub use frontend::{cli_main, Config};
pub use infrastructure::{LogConfig, LogFormat, LogOutput, init_logging};
