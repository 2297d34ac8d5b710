//! # Ticket Barcode Commands
//!
//! Vouchers carry their validation number as a Code128-B barcode. Printing
//! one takes three commands sent back to back:
//!
//! 1. Bar height (`GS h n`)
//! 2. Module width (`GS w n`)
//! 3. Symbol (`GS k 9 len data`)
//!
//! ```
//! use cashout::protocol::barcode;
//!
//! let cmd = barcode::block(b"0100001", 80, 6, barcode::DEFAULT_MAX_SYMBOL_LEN)?;
//! assert_eq!(&cmd[..6], &[0x1D, 0x68, 80, 0x1D, 0x77, 6]);
//! # Ok::<(), cashout::CashoutError>(())
//! ```

use super::commands::GS;
use crate::error::CashoutError;

/// Symbology selector for Code128-B in `GS k`.
pub const CODE128_B: u8 = 0x09;

/// Default bound on the number of payload characters in one symbol.
pub const DEFAULT_MAX_SYMBOL_LEN: usize = 127;

/// Hard bound imposed by the one-byte length prefix.
pub const LENGTH_PREFIX_MAX: usize = u8::MAX as usize;

/// # Barcode Height (GS h n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1D 68 n |
#[inline]
pub fn height(dots: u8) -> Vec<u8> {
    vec![GS, b'h', dots]
}

/// # Barcode Module Width (GS w n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1D 77 n |
#[inline]
pub fn module_width(dots: u8) -> Vec<u8> {
    vec![GS, b'w', dots]
}

/// # Code128-B Symbol (GS k 9 len data)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1D 6B 09 len data... |
///
/// ## Errors
///
/// [`CashoutError::InvalidBarcodePayload`] when the payload is empty, longer
/// than `max_len` (itself capped at 255), or contains anything but ASCII
/// digits.
pub fn code128b(payload: &[u8], max_len: usize) -> Result<Vec<u8>, CashoutError> {
    validate_payload(payload, max_len)?;

    let mut cmd = Vec::with_capacity(4 + payload.len());
    cmd.extend([GS, b'k', CODE128_B, payload.len() as u8]);
    cmd.extend_from_slice(payload);
    Ok(cmd)
}

/// Height, width and symbol commands in the order the printer expects.
pub fn block(
    payload: &[u8],
    height_dots: u8,
    module_width_dots: u8,
    max_len: usize,
) -> Result<Vec<u8>, CashoutError> {
    let symbol = code128b(payload, max_len)?;

    let mut cmd = Vec::with_capacity(6 + symbol.len());
    cmd.extend(height(height_dots));
    cmd.extend(module_width(module_width_dots));
    cmd.extend(symbol);
    Ok(cmd)
}

/// Check a payload against the symbol rules without building bytes.
pub fn validate_payload(payload: &[u8], max_len: usize) -> Result<(), CashoutError> {
    let limit = max_len.min(LENGTH_PREFIX_MAX);

    if payload.is_empty() {
        return Err(CashoutError::InvalidBarcodePayload(
            "payload has no digits".to_string(),
        ));
    }
    if payload.len() > limit {
        return Err(CashoutError::InvalidBarcodePayload(format!(
            "payload is {} characters, maximum is {}",
            payload.len(),
            limit
        )));
    }
    if let Some(bad) = payload.iter().find(|b| !b.is_ascii_digit()) {
        return Err(CashoutError::InvalidBarcodePayload(format!(
            "non-digit byte 0x{:02X} in payload",
            bad
        )));
    }
    Ok(())
}

/// Keep only the ASCII digits of a validation code.
///
/// ```
/// use cashout::protocol::barcode::digits_only;
///
/// assert_eq!(digits_only("01-2345 6789"), "0123456789");
/// ```
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_and_width() {
        assert_eq!(height(80), vec![0x1D, 0x68, 80]);
        assert_eq!(module_width(6), vec![0x1D, 0x77, 6]);
    }

    #[test]
    fn test_code128b_layout() {
        let cmd = code128b(b"0123", DEFAULT_MAX_SYMBOL_LEN).unwrap();
        assert_eq!(cmd, vec![0x1D, 0x6B, 0x09, 4, b'0', b'1', b'2', b'3']);
    }

    #[test]
    fn test_block_order() {
        let cmd = block(b"42", 80, 6, DEFAULT_MAX_SYMBOL_LEN).unwrap();
        assert_eq!(
            cmd,
            vec![0x1D, 0x68, 80, 0x1D, 0x77, 6, 0x1D, 0x6B, 0x09, 2, b'4', b'2']
        );
    }

    #[test]
    fn test_empty_payload_rejected() {
        assert!(matches!(
            code128b(b"", DEFAULT_MAX_SYMBOL_LEN),
            Err(CashoutError::InvalidBarcodePayload(_))
        ));
    }

    #[test]
    fn test_length_bound() {
        let ok = vec![b'7'; 127];
        assert!(code128b(&ok, DEFAULT_MAX_SYMBOL_LEN).is_ok());

        let long = vec![b'7'; 128];
        assert!(code128b(&long, DEFAULT_MAX_SYMBOL_LEN).is_err());

        // Configured bounds above the length prefix are capped
        let too_long = vec![b'7'; 256];
        assert!(code128b(&too_long, 1000).is_err());
        assert!(code128b(&vec![b'7'; 255], 1000).is_ok());
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(code128b(b"12-34", DEFAULT_MAX_SYMBOL_LEN).is_err());
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("010000000000000001"), "010000000000000001");
        assert_eq!(digits_only("AB-12 34/5"), "12345");
        assert_eq!(digits_only("----"), "");
    }
}
