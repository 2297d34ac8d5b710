//! # Ticket Printer Control Commands
//!
//! This module implements the page-control opcodes understood by ESC/POS-like
//! casino ticket printers (TransAct Epic Edge and compatibles).
//!
//! ## Protocol Overview
//!
//! Commands are byte sequences starting with an escape character. Unlike a
//! receipt printer's line mode, a ticket is laid out as a page: every field is
//! placed with absolute X/Y positioning and the page is ejected with a single
//! form feed.
//!
//! ## Escape Sequence Structure
//!
//! - Single byte: `LF`, `FF`
//! - Two bytes: `ESC *`
//! - Multi-byte with parameters: `ESC X hi lo`, `ESC Y n`, `GS V n`
//!
//! ## Byte Order
//!
//! The absolute X command uses **big-endian** encoding:
//! - position 300 (0x012C) is sent as bytes `[0x01, 0x2C]`

use crate::error::{Axis, CashoutError};

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for orientation and barcode commands.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Terminates a text field
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - Prints the composed page and ejects the ticket
pub const FF: u8 = 0x0C;

/// Largest value the two-byte absolute X argument can carry.
pub const MAX_POSITION_X: i64 = u16::MAX as i64;

/// Largest value the one-byte absolute Y argument can carry.
pub const MAX_POSITION_Y: i64 = u8::MAX as i64;

// ============================================================================
// PAGE SETUP
// ============================================================================

/// # Reset (ESC *)
///
/// Clears the page buffer and returns the printer to its power-on state.
/// Always the first command of a ticket.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * |
/// | Hex     | 1B 2A |
///
/// ## Example
///
/// ```
/// use cashout::protocol::commands;
///
/// assert_eq!(commands::reset(), vec![0x1B, 0x2A]);
/// ```
#[inline]
pub fn reset() -> Vec<u8> {
    vec![ESC, b'*']
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Portrait = 0,
    #[default]
    Landscape = 1,
}

/// # Select Orientation (GS V n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS V n |
/// | Hex     | 1D 56 n |
///
/// - `n = 0`: portrait
/// - `n = 1`: landscape
#[inline]
pub fn orientation(orientation: Orientation) -> Vec<u8> {
    vec![GS, b'V', orientation as u8]
}

/// Convenience function for landscape orientation
#[inline]
pub fn landscape() -> Vec<u8> {
    orientation(Orientation::Landscape)
}

/// Convenience function for portrait orientation
#[inline]
pub fn portrait() -> Vec<u8> {
    orientation(Orientation::Portrait)
}

// ============================================================================
// POSITIONING
// ============================================================================

/// # Absolute Horizontal Position (ESC X hi lo)
///
/// Moves the print head to `pos` dots from the left edge of the page.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC X hi lo |
/// | Hex     | 1B 58 hi lo |
///
/// `hi = pos / 256`, `lo = pos % 256`.
///
/// ## Errors
///
/// [`CashoutError::PositionOutOfRange`] when `pos` is negative or does not fit
/// in two bytes. The value is never wrapped.
///
/// ## Example
///
/// ```
/// use cashout::protocol::commands;
///
/// assert_eq!(commands::position_x(300)?, vec![0x1B, 0x58, 0x01, 0x2C]);
/// assert!(commands::position_x(-1).is_err());
/// # Ok::<(), cashout::CashoutError>(())
/// ```
pub fn position_x(pos: i64) -> Result<Vec<u8>, CashoutError> {
    let value = u16::try_from(pos).map_err(|_| CashoutError::PositionOutOfRange {
        axis: Axis::X,
        value: pos,
        max: MAX_POSITION_X,
    })?;
    let [hi, lo] = u16_be(value);
    Ok(vec![ESC, b'X', hi, lo])
}

/// # Absolute Vertical Position (ESC Y n)
///
/// Moves to `y` millimetres from the top of the page.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC Y n |
/// | Hex     | 1B 59 n |
///
/// ## Errors
///
/// [`CashoutError::PositionOutOfRange`] when `y` is outside `0..=255`.
pub fn position_y(y: i64) -> Result<Vec<u8>, CashoutError> {
    let value = u8::try_from(y).map_err(|_| CashoutError::PositionOutOfRange {
        axis: Axis::Y,
        value: y,
        max: MAX_POSITION_Y,
    })?;
    Ok(vec![ESC, b'Y', value])
}

// ============================================================================
// PAPER CONTROL
// ============================================================================

/// Line feed, terminates every text field.
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// # Form Feed (FF)
///
/// Prints the page and ejects the ticket. Exactly one per ticket, always last.
#[inline]
pub fn form_feed() -> Vec<u8> {
    vec![FF]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as big-endian bytes [high, low]
///
/// ```
/// use cashout::protocol::commands::u16_be;
///
/// assert_eq!(u16_be(0x1234), [0x12, 0x34]);
/// assert_eq!(u16_be(950), [0x03, 0xB6]);
/// ```
#[inline]
pub const fn u16_be(value: u16) -> [u8; 2] {
    [(value >> 8) as u8, value as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        assert_eq!(reset(), vec![0x1B, 0x2A]);
    }

    #[test]
    fn test_orientation() {
        assert_eq!(landscape(), vec![0x1D, 0x56, 0x01]);
        assert_eq!(portrait(), vec![0x1D, 0x56, 0x00]);
        assert_eq!(Orientation::default(), Orientation::Landscape);
    }

    #[test]
    fn test_position_x() {
        assert_eq!(position_x(0).unwrap(), vec![0x1B, 0x58, 0x00, 0x00]);
        assert_eq!(position_x(255).unwrap(), vec![0x1B, 0x58, 0x00, 0xFF]);
        assert_eq!(position_x(256).unwrap(), vec![0x1B, 0x58, 0x01, 0x00]);
        assert_eq!(position_x(320).unwrap(), vec![0x1B, 0x58, 0x01, 0x40]);
        assert_eq!(position_x(65535).unwrap(), vec![0x1B, 0x58, 0xFF, 0xFF]);
    }

    #[test]
    fn test_position_x_rejects_out_of_range() {
        for bad in [-1, -300, 65536, 100_000] {
            match position_x(bad) {
                Err(CashoutError::PositionOutOfRange { axis, value, .. }) => {
                    assert_eq!(axis, Axis::X);
                    assert_eq!(value, bad);
                }
                other => panic!("expected PositionOutOfRange for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_position_y() {
        assert_eq!(position_y(0).unwrap(), vec![0x1B, 0x59, 0x00]);
        assert_eq!(position_y(45).unwrap(), vec![0x1B, 0x59, 45]);
        assert_eq!(position_y(255).unwrap(), vec![0x1B, 0x59, 0xFF]);
        assert!(position_y(256).is_err());
        assert!(position_y(-1).is_err());
    }

    #[test]
    fn test_feeds() {
        assert_eq!(line_feed(), vec![0x0A]);
        assert_eq!(form_feed(), vec![0x0C]);
    }

    #[test]
    fn test_u16_be() {
        assert_eq!(u16_be(0x0000), [0x00, 0x00]);
        assert_eq!(u16_be(0x00FF), [0x00, 0xFF]);
        assert_eq!(u16_be(0xFF00), [0xFF, 0x00]);
        assert_eq!(u16_be(300), [0x01, 0x2C]);
    }
}
