//! # Barcode Components
//!
//! The validation barcode printed on every voucher.

use super::Component;
use crate::ir::Op;
use crate::printer::PrinterConfig;
use crate::protocol::barcode::digits_only;

/// A positioned Code128-B barcode.
///
/// Non-digit characters of the validation code are dropped before encoding,
/// so `"01-0000-0001"` is encoded as `0100000001`.
/// A code with no digits at all compiles to an `InvalidBarcodePayload` error.
///
/// ## Example
///
/// ```
/// use cashout::components::BarcodeField;
///
/// let barcode = BarcodeField::new("01-2345-6789")
///     .at(250, 25)
///     .height(80)
///     .module_width(6);
/// assert_eq!(barcode.payload(), "0123456789");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeField {
    payload: String,
    x: Option<i64>,
    y: Option<i64>,
    height: u8,
    module_width: u8,
}

impl BarcodeField {
    /// Create from a raw validation code. Defaults to the Epic Edge
    /// geometry (80 dots high, 6-dot modules).
    pub fn new(validation: &str) -> Self {
        let config = PrinterConfig::default();
        Self {
            payload: digits_only(validation),
            x: None,
            y: None,
            height: config.barcode_height,
            module_width: config.barcode_module_width,
        }
    }

    /// Absolute position: `x` in dots, `y` in millimetres.
    pub fn at(mut self, x: impl Into<i64>, y: impl Into<i64>) -> Self {
        self.x = Some(x.into());
        self.y = Some(y.into());
        self
    }

    pub fn height(mut self, dots: u8) -> Self {
        self.height = dots;
        self
    }

    pub fn module_width(mut self, dots: u8) -> Self {
        self.module_width = dots;
        self
    }

    /// Take height and module width from a printer config.
    pub fn geometry(self, config: &PrinterConfig) -> Self {
        self.height(config.barcode_height)
            .module_width(config.barcode_module_width)
    }

    /// Digits that will be encoded.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl Component for BarcodeField {
    fn emit(&self, ops: &mut Vec<Op>) {
        if let Some(x) = self.x {
            ops.push(Op::MoveX(x));
        }
        if let Some(y) = self.y {
            ops.push(Op::MoveY(y));
        }
        ops.push(Op::Barcode {
            payload: self.payload.clone(),
            height: self.height,
            module_width: self.module_width,
        });
        ops.push(Op::Newline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;
    use crate::error::CashoutError;

    #[test]
    fn test_barcode_ops() {
        let ir = BarcodeField::new("0100").at(250, 25).compile();
        assert_eq!(
            ir.ops,
            vec![
                Op::MoveX(250),
                Op::MoveY(25),
                Op::Barcode {
                    payload: "0100".into(),
                    height: 80,
                    module_width: 6,
                },
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_separators_stripped_before_length_prefix() {
        let bytes = BarcodeField::new("12-34").build().unwrap();
        assert_eq!(
            bytes,
            vec![0x1D, 0x68, 80, 0x1D, 0x77, 6, 0x1D, 0x6B, 0x09, 4, b'1', b'2', b'3', b'4', 0x0A]
        );
    }

    #[test]
    fn test_no_digits_is_an_error() {
        let result = BarcodeField::new("ABC-/").build();
        assert!(matches!(result, Err(CashoutError::InvalidBarcodePayload(_))));
    }

    #[test]
    fn test_custom_geometry() {
        let config = PrinterConfig {
            barcode_height: 60,
            barcode_module_width: 4,
            ..PrinterConfig::default()
        };
        let field = BarcodeField::new("9").geometry(&config);
        let ir = field.compile();
        assert!(matches!(
            ir.ops[0],
            Op::Barcode {
                height: 60,
                module_width: 4,
                ..
            }
        ));
    }
}
