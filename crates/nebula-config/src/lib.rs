//! Configuration for the Nebula geometry subsystem.
//!
//! Settings persist to disk as RON files and tolerate missing or unknown
//! fields, so config files written by older or newer builds still load.
//! Hot-reload detection compares the file on disk with the values in use.

mod config;
mod error;

pub use config::{Config, DebugConfig, FrustumConfig, IntersectionConfig};
pub use error::ConfigError;
