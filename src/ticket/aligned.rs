//! Detailed ticket with computed horizontal positions.
//!
//! Rows match the detailed layout. Title, amount in words, barcode and
//! footer are centered on the configured page width; the metadata line is
//! right-aligned. The remaining rows keep their fixed X.
//!
//! The printer's own justification is forced to left right after the
//! orientation so it cannot shift the absolute positions computed here.

use super::{FOOTER, LayoutContext, VoucherRecord, rows};
use crate::amount::amount_in_words;
use crate::components::{BarcodeField, Field, Ticket};
use crate::error::CashoutError;
use crate::protocol::text::{Alignment, FontSpec};

pub fn layout(record: &VoucherRecord, ctx: &LayoutContext<'_>) -> Result<Ticket, CashoutError> {
    let payload = record.barcode_payload()?;
    let aligner = ctx.aligner();

    let barcode_x = aligner.barcode_center(&payload, ctx.printer.barcode_module_width)?;
    let words = amount_in_words(record.amount);
    let words_x = aligner.center(&words, FontSpec::SMALL);
    let title_x = aligner.center(&record.voucher_type, FontSpec::LARGE);
    let footer_x = aligner.center(FOOTER, FontSpec::NORMAL);

    let metadata = record.metadata_line().map(|line| {
        let x = aligner.right(&line, FontSpec::SMALL);
        Field::new(line).at(x, rows::METADATA).font(FontSpec::SMALL)
    });

    Ok(Ticket::landscape()
        .justify(Alignment::Left)
        .child(
            Field::new(&record.voucher_type)
                .at(title_x, rows::TITLE)
                .font(FontSpec::LARGE),
        )
        .child(
            Field::new(record.valid_date_line())
                .at(320, rows::VALID_DATE)
                .font(FontSpec::NORMAL),
        )
        .child(
            Field::new(record.amount_line())
                .at(320, rows::AMOUNT)
                .font(FontSpec::NORMAL),
        )
        .child(
            Field::new(words)
                .at(words_x, rows::WORDS)
                .font(FontSpec::SMALL),
        )
        .child(
            BarcodeField::new(&payload)
                .at(barcode_x, rows::BARCODE)
                .geometry(ctx.printer),
        )
        .child(
            Field::new(&record.validation)
                .at(320, rows::VALIDATION)
                .font(FontSpec::NORMAL),
        )
        .maybe_child(metadata)
        .child(
            Field::new(record.ticket_line())
                .at(280, rows::TICKET)
                .font(FontSpec::NORMAL),
        )
        .child(
            Field::new(FOOTER)
                .at(footer_x, rows::FOOTER)
                .font(FontSpec::NORMAL),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;
    use crate::ir::Op;
    use crate::printer::{AlignmentParameters, PrinterConfig};

    fn program(record: &VoucherRecord, alignment: &AlignmentParameters) -> Vec<Op> {
        let printer = PrinterConfig::default();
        let ctx = LayoutContext::new(&printer, alignment);
        layout(record, &ctx).unwrap().compile().ops
    }

    /// X emitted right before the op matching `pred` (skipping the Y move).
    fn x_before(ops: &[Op], pred: impl Fn(&Op) -> bool) -> i64 {
        let pos = ops.iter().position(pred).unwrap();
        ops[..pos]
            .iter()
            .rev()
            .find_map(|op| match op {
                Op::MoveX(x) => Some(*x),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_left_justification_after_orientation() {
        let ops = program(&VoucherRecord::default(), &AlignmentParameters::default());
        assert_eq!(ops[2], Op::SetAlign(Alignment::Left));
    }

    #[test]
    fn test_centered_positions() {
        let ops = program(&VoucherRecord::default(), &AlignmentParameters::default());

        // "CASHOUT TICKET": 14 chars * 18 = 252; (950 - 252) / 2 = 349
        assert_eq!(
            x_before(&ops, |op| *op == Op::Text("CASHOUT TICKET".into())),
            349
        );
        // Footer: 19 chars * 12 = 228; (950 - 228) / 2 = 361
        assert_eq!(x_before(&ops, |op| *op == Op::Text(FOOTER.into())), 361);
        // 18 digits: round(18 * 6.2) = 112 modules * 6 = 672; (950 - 672) / 2 = 139
        assert_eq!(x_before(&ops, |op| matches!(op, Op::Barcode { .. })), 139);
    }

    #[test]
    fn test_metadata_right_aligned() {
        let record = VoucherRecord {
            asset: Some("A-1".into()),
            ..VoucherRecord::default()
        };
        let ops = program(&record, &AlignmentParameters::default());
        // "Asset: A-1": 10 chars * 10 = 100; 950 - 100 - 20 = 830
        assert_eq!(
            x_before(&ops, |op| *op == Op::Text("Asset: A-1".into())),
            830
        );
    }

    #[test]
    fn test_follows_page_width() {
        let narrow = AlignmentParameters {
            page_width: 750,
            ..AlignmentParameters::default()
        };
        let ops = program(&VoucherRecord::default(), &narrow);
        assert_eq!(x_before(&ops, |op| *op == Op::Text(FOOTER.into())), 261);
    }
}
