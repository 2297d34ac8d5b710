//! # Code Generation
//!
//! Converts IR programs to printer bytes.
//!
//! Every op is validated while compiling into a fresh buffer. The first
//! invalid op aborts compilation and the buffer is dropped, so callers get
//! either a complete stream or an error, never a prefix.

use super::ops::{Op, Program};
use crate::error::CashoutError;
use crate::printer::PrinterConfig;
use crate::protocol::{barcode, commands, text};

/// Substitute for characters the printer cannot render.
const REPLACEMENT: u8 = b'?';

impl Program {
    /// Compile the IR program to printer bytes.
    ///
    /// Uses the default printer configuration (Epic Edge).
    pub fn to_bytes(&self) -> Result<Vec<u8>, CashoutError> {
        self.to_bytes_with_config(&PrinterConfig::default())
    }

    /// Compile the IR program with a specific printer config.
    pub fn to_bytes_with_config(&self, config: &PrinterConfig) -> Result<Vec<u8>, CashoutError> {
        let mut out = Vec::new();

        for op in &self.ops {
            match op {
                // ===== Page Control =====
                Op::Reset => out.extend(commands::reset()),
                Op::SetOrientation(orientation) => {
                    out.extend(commands::orientation(*orientation));
                }
                Op::FormFeed => out.extend(commands::form_feed()),

                // ===== Style Changes =====
                Op::SetAlign(alignment) => out.extend(text::align(*alignment)),
                Op::SetFont(font) => out.extend(text::font(*font)),

                // ===== Positioning =====
                Op::MoveX(x) => out.extend(commands::position_x(*x)?),
                Op::MoveY(y) => out.extend(commands::position_y(*y)?),

                // ===== Content =====
                Op::Text(s) => out.extend(printable_ascii(s)),
                Op::Newline => out.extend(commands::line_feed()),
                Op::Barcode {
                    payload,
                    height,
                    module_width,
                } => {
                    out.extend(barcode::block(
                        payload.as_bytes(),
                        *height,
                        *module_width,
                        config.symbol_limit(),
                    )?);
                }
            }
        }

        Ok(out)
    }
}

/// Map text to printable ASCII.
///
/// Anything outside `0x20..=0x7E` becomes `?`. This keeps stray control
/// characters (a form feed inside a voucher label, say) from acting as
/// commands.
pub fn printable_ascii(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(|c| {
        if c.is_ascii() && !c.is_ascii_control() {
            c as u8
        } else {
            REPLACEMENT
        }
    })
}
