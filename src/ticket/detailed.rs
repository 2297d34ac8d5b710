//! Detailed landscape ticket.
//!
//! Adds the amount in words under the figure and a metadata line (location,
//! asset, floor) above the ticket number. Coordinates are fixed.
//!
//! ```text
//! y(mm)  x(dots)
//!  0     300  CASHOUT TICKET
//!  8     320  Valid Date: 01.01.2025
//! 12     320  Amount: 1234.50PHP
//! 16     200  ONE THOUSAND TWO HUNDRED THIRTY-FOUR PESOS AND FIFTY CENTAVOS
//! 21     250  ||||||||||||||||||||||
//! 32     320  010000000000000001
//! 38     200  Location: Main Hall  Asset: A-1042  Floor: 2   (only if any)
//! 44     280  Ticket #0001  Time: 12:00:00
//! 50     320  ---- THANK YOU ----
//! ```

use super::{FOOTER, LayoutContext, VoucherRecord, rows};
use crate::amount::amount_in_words;
use crate::components::{BarcodeField, Field, Ticket};
use crate::error::CashoutError;
use crate::protocol::text::FontSpec;

pub fn layout(record: &VoucherRecord, ctx: &LayoutContext<'_>) -> Result<Ticket, CashoutError> {
    let payload = record.barcode_payload()?;
    let metadata = record.metadata_line().map(|line| {
        Field::new(line)
            .at(200, rows::METADATA)
            .font(FontSpec::SMALL)
    });

    Ok(Ticket::landscape()
        .child(
            Field::new(&record.voucher_type)
                .at(300, rows::TITLE)
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
            Field::new(amount_in_words(record.amount))
                .at(200, rows::WORDS)
                .font(FontSpec::SMALL),
        )
        .child(
            BarcodeField::new(&payload)
                .at(250, rows::BARCODE)
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
                .at(320, rows::FOOTER)
                .font(FontSpec::NORMAL),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use crate::components::ComponentExt;
    use crate::ir::Op;
    use crate::printer::{AlignmentParameters, PrinterConfig};

    fn texts(record: &VoucherRecord) -> Vec<String> {
        let printer = PrinterConfig::default();
        let alignment = AlignmentParameters::default();
        let ctx = LayoutContext::new(&printer, &alignment);
        layout(record, &ctx)
            .unwrap()
            .compile()
            .into_iter()
            .filter_map(|op| match op {
                Op::Text(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_words_printed() {
        let record = VoucherRecord {
            amount: Amount::new(1234, 50).unwrap(),
            ..VoucherRecord::default()
        };
        let lines = texts(&record);
        assert!(lines.contains(
            &"ONE THOUSAND TWO HUNDRED THIRTY-FOUR PESOS AND FIFTY CENTAVOS".to_string()
        ));
    }

    #[test]
    fn test_metadata_only_when_present() {
        let plain = texts(&VoucherRecord::default());
        assert!(!plain.iter().any(|l| l.contains("Asset")));

        let record = VoucherRecord {
            asset: Some("A-1042".into()),
            floor: Some("2".into()),
            ..VoucherRecord::default()
        };
        let lines = texts(&record);
        assert!(lines.contains(&"Asset: A-1042  Floor: 2".to_string()));
        assert_eq!(lines.len(), plain.len() + 1);
    }
}
