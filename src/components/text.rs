//! # Text Components
//!
//! A single positioned line of text.

use super::Component;
use crate::ir::Op;
use crate::protocol::text::{Alignment, FontSpec};

/// A positioned text field.
///
/// Emits, in order: justification (if set), X, Y, font, the text and a line
/// feed. Anything left unset is inherited from the printer state.
///
/// ## Example
///
/// ```
/// use cashout::components::*;
/// use cashout::protocol::text::FontSpec;
///
/// let title = Field::new("CASHOUT TICKET")
///     .at(300, 0)
///     .font(FontSpec::LARGE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    content: String,
    x: Option<i64>,
    y: Option<i64>,
    font: Option<FontSpec>,
    alignment: Option<Alignment>,
}

impl Field {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            x: None,
            y: None,
            font: None,
            alignment: None,
        }
    }

    /// Absolute position: `x` in dots, `y` in millimetres.
    pub fn at(mut self, x: impl Into<i64>, y: impl Into<i64>) -> Self {
        self.x = Some(x.into());
        self.y = Some(y.into());
        self
    }

    pub fn x(mut self, x: impl Into<i64>) -> Self {
        self.x = Some(x.into());
        self
    }

    pub fn y(mut self, y: impl Into<i64>) -> Self {
        self.y = Some(y.into());
        self
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    /// Printer-side justification for this line.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Component for Field {
    fn emit(&self, ops: &mut Vec<Op>) {
        if let Some(alignment) = self.alignment {
            ops.push(Op::SetAlign(alignment));
        }
        if let Some(x) = self.x {
            ops.push(Op::MoveX(x));
        }
        if let Some(y) = self.y {
            ops.push(Op::MoveY(y));
        }
        if let Some(font) = self.font {
            ops.push(Op::SetFont(font));
        }
        ops.push(Op::Text(self.content.clone()));
        ops.push(Op::Newline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_plain_field() {
        let ir = Field::new("Hello").compile();
        assert_eq!(ir.ops, vec![Op::Text("Hello".into()), Op::Newline]);
    }

    #[test]
    fn test_field_order() {
        let ir = Field::new("Amount: 5.00PHP")
            .align(Alignment::Left)
            .at(320, 15)
            .font(FontSpec::NORMAL)
            .compile();
        assert_eq!(
            ir.ops,
            vec![
                Op::SetAlign(Alignment::Left),
                Op::MoveX(320),
                Op::MoveY(15),
                Op::SetFont(FontSpec::NORMAL),
                Op::Text("Amount: 5.00PHP".into()),
                Op::Newline,
            ]
        );
    }

    #[test]
    fn test_field_bytes() {
        let bytes = Field::new("OK").at(256u32, 10).build().unwrap();
        assert_eq!(
            bytes,
            vec![0x1B, 0x58, 0x01, 0x00, 0x1B, 0x59, 10, b'O', b'K', 0x0A]
        );
    }
}
