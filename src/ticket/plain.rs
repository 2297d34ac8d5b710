//! Plain landscape ticket.
//!
//! The first-generation layout: fixed coordinates tuned by hand on the Epic
//! Edge, no amount in words, no metadata.
//!
//! ```text
//! y(mm)  x(dots)
//!  0     300  CASHOUT TICKET            (large, bold)
//! 10     320  Valid Date: 01.01.2025
//! 15     320  Amount: 0.00PHP
//! 25     250  ||||||||||||||||||||||    (Code128-B)
//! 35     320  010000000000000001        (inherits font)
//! 45     280  Ticket #0001  Time: 12:00:00
//! 50     320  ---- THANK YOU ----
//! ```

use super::{FOOTER, LayoutContext, VoucherRecord};
use crate::components::{BarcodeField, Field, Ticket};
use crate::error::CashoutError;
use crate::protocol::text::FontSpec;

pub fn layout(record: &VoucherRecord, ctx: &LayoutContext<'_>) -> Result<Ticket, CashoutError> {
    let payload = record.barcode_payload()?;

    Ok(Ticket::landscape()
        .child(
            Field::new(&record.voucher_type)
                .at(300, 0)
                .font(FontSpec::LARGE),
        )
        .child(
            Field::new(record.valid_date_line())
                .at(320, 10)
                .font(FontSpec::NORMAL),
        )
        .child(
            Field::new(record.amount_line())
                .at(320, 15)
                .font(FontSpec::NORMAL),
        )
        .child(BarcodeField::new(&payload).at(250, 25).geometry(ctx.printer))
        .child(Field::new(&record.validation).at(320, 35))
        .child(
            Field::new(record.ticket_line())
                .at(280, 45)
                .font(FontSpec::NORMAL),
        )
        .child(Field::new(FOOTER).at(320, 50).font(FontSpec::NORMAL)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;
    use crate::ir::Op;
    use crate::printer::{AlignmentParameters, PrinterConfig};

    #[test]
    fn test_validation_line_inherits_font() {
        let printer = PrinterConfig::default();
        let alignment = AlignmentParameters::default();
        let ctx = LayoutContext::new(&printer, &alignment);

        let ir = layout(&VoucherRecord::default(), &ctx).unwrap().compile();
        let pos = ir
            .iter()
            .position(|op| *op == Op::Text("010000000000000001".into()))
            .unwrap();
        assert_eq!(ir.ops[pos - 1], Op::MoveY(35));
        assert_eq!(ir.ops[pos - 2], Op::MoveX(320));
    }

    #[test]
    fn test_no_digit_validation_fails_before_layout() {
        let printer = PrinterConfig::default();
        let alignment = AlignmentParameters::default();
        let ctx = LayoutContext::new(&printer, &alignment);

        let record = VoucherRecord {
            validation: "N/A".into(),
            ..VoucherRecord::default()
        };
        assert!(layout(&record, &ctx).is_err());
    }
}
