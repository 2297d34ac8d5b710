//! # Printer Module
//!
//! This module provides printer-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware settings, alignment tuning, settings file

pub mod config;

pub use config::{AlignmentParameters, CharWidths, PrinterConfig, Settings};
