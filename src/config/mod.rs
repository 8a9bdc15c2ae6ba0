//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (limits, timeouts, retry parameters)
//! - Configuration types shared by the library and the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, ParsePolicy, SuffixSource};
