//! Jalan Core — error taxonomy, configuration, data paths.

pub mod config;
pub mod error;

pub use config::{DataPaths, JalanConfig};
pub use error::{Error, Result};
