//! # Error Types
//!
//! This module defines error types used throughout the cashout library.
//!
//! Composition errors (`InvalidAmount`, `InvalidBarcodePayload`,
//! `PositionOutOfRange`, `UnknownTemplate`) are raised before any byte is
//! handed to a transport. The remaining variants belong to the collaborators
//! around the composer: configuration, request decoding and the device.

use thiserror::Error;

/// Main error type for cashout operations
#[derive(Debug, Error)]
pub enum CashoutError {
    /// Amount is not a finite, non-negative number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Barcode payload is empty, too long, or not ASCII digits
    #[error("Invalid barcode payload: {0}")]
    InvalidBarcodePayload(String),

    /// A positioning opcode argument does not fit its encoding
    #[error("Position out of range: {axis} = {value} (allowed 0..={max})")]
    PositionOutOfRange {
        axis: Axis,
        value: i64,
        max: i64,
    },

    /// Template name not recognised
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Settings file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Print request could not be decoded
    #[error("Request error: {0}")]
    Request(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Positioning axis reported by [`CashoutError::PositionOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Transport-agnostic classification of a [`CashoutError`].
///
/// A front end (HTTP handler, CLI, queue worker) maps these to its own
/// status codes without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidAmount,
    InvalidBarcodePayload,
    PositionOutOfRange,
    UnknownTemplate,
    Transport,
    Config,
    Request,
}

impl ErrorKind {
    /// True for failures caused by the caller's input rather than the device
    /// or the environment.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidAmount
                | ErrorKind::InvalidBarcodePayload
                | ErrorKind::PositionOutOfRange
                | ErrorKind::UnknownTemplate
                | ErrorKind::Request
        )
    }
}

impl CashoutError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CashoutError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            CashoutError::InvalidBarcodePayload(_) => ErrorKind::InvalidBarcodePayload,
            CashoutError::PositionOutOfRange { .. } => ErrorKind::PositionOutOfRange,
            CashoutError::UnknownTemplate(_) => ErrorKind::UnknownTemplate,
            CashoutError::Transport(_) | CashoutError::Io(_) => ErrorKind::Transport,
            CashoutError::Config(_) => ErrorKind::Config,
            CashoutError::Request(_) => ErrorKind::Request,
        }
    }
}
