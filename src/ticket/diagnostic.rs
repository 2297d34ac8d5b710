//! Calibration ticket.
//!
//! ```text
//! y(mm)
//!  0   CALIBRATION                       (large, centered)
//! 10   |0   |100   |200 ...   |900       (ruler, small)
//! 20   page=950 normal=12 large=18 small=10 margin=20
//! 28   CENTER 0123456789                 (centered with current constants)
//! 36   |475                              (page center)
//! 44   RIGHT                             (right-aligned with margin)
//! ```
//!
//! Compare the printed ruler against the marks: if the centered string is
//! off, adjust `char_width`; if the page center mark is off, adjust
//! `page_width`.

use super::LayoutContext;
use crate::components::{Field, Ruler, Ticket};
use crate::error::CashoutError;
use crate::protocol::text::{Alignment, FontSpec};

pub const TITLE: &str = "CALIBRATION";
pub const CENTER_TEST: &str = "CENTER 0123456789";
pub const RIGHT_TEST: &str = "RIGHT";

pub fn layout(ctx: &LayoutContext<'_>) -> Result<Ticket, CashoutError> {
    let params = ctx.alignment;
    let aligner = ctx.aligner();
    let widths = params.char_width;
    let middle = params.page_width / 2;

    let summary = format!(
        "page={} normal={} large={} small={} margin={}",
        params.page_width, widths.normal, widths.large, widths.small, params.right_margin
    );

    Ok(Ticket::landscape()
        .justify(Alignment::Left)
        .child(
            Field::new(TITLE)
                .at(aligner.center(TITLE, FontSpec::LARGE), 0)
                .font(FontSpec::LARGE),
        )
        .child(Ruler::new(params.ruler_max, params.ruler_step).y(10))
        .child(Field::new(summary).at(0, 20).font(FontSpec::SMALL))
        .child(
            Field::new(CENTER_TEST)
                .at(aligner.center(CENTER_TEST, FontSpec::NORMAL), 28)
                .font(FontSpec::NORMAL),
        )
        .child(
            Field::new(format!("|{middle}"))
                .at(middle, 36)
                .font(FontSpec::SMALL),
        )
        .child(
            Field::new(RIGHT_TEST)
                .at(aligner.right(RIGHT_TEST, FontSpec::NORMAL), 44)
                .font(FontSpec::NORMAL),
        ))
}
