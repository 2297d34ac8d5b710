//! Horizontal alignment from character-width heuristics.
//!
//! The printer has no notion of "center this field" once absolute
//! positioning is in use, so center and right alignment are computed here:
//!
//! ```text
//! text_width = chars * per_char_dots
//! center     = max(0, (page_width - text_width) / 2)
//! right      = max(0, page_width - text_width - margin)
//! ```
//!
//! Proportional glyph widths are not modelled; the per-font widths in
//! [`AlignmentParameters`] are calibrated with the diagnostic ticket.

use crate::error::CashoutError;
use crate::printer::AlignmentParameters;
use crate::protocol::text::{Alignment, FontSpec};

/// Approximate rendered width of `text` in dots.
pub fn text_width(text: &str, per_char_dots: u32) -> u32 {
    (text.chars().count() as u32).saturating_mul(per_char_dots)
}

/// Left edge that centers a block of `content_width` dots.
pub fn center_x(content_width: u32, page_width: u32) -> u32 {
    page_width.saturating_sub(content_width) / 2
}

/// Left edge that places a block of `content_width` dots `margin` dots from
/// the right edge.
pub fn right_x(content_width: u32, page_width: u32, margin: u32) -> u32 {
    page_width
        .saturating_sub(content_width)
        .saturating_sub(margin)
}

/// ```
/// use cashout::layout::center_align;
///
/// assert_eq!(center_align("ABC", 12, 950), 457);
/// ```
pub fn center_align(text: &str, per_char_dots: u32, page_width: u32) -> u32 {
    center_x(text_width(text, per_char_dots), page_width)
}

pub fn right_align(text: &str, per_char_dots: u32, page_width: u32, margin: u32) -> u32 {
    right_x(text_width(text, per_char_dots), page_width, margin)
}

/// Alignment calculator bound to one set of tuning constants.
#[derive(Debug, Clone, Copy)]
pub struct Aligner<'a> {
    params: &'a AlignmentParameters,
}

impl<'a> Aligner<'a> {
    pub fn new(params: &'a AlignmentParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AlignmentParameters {
        self.params
    }

    /// X position for `text` printed in `font` with the given alignment.
    /// Left alignment returns the left margin of the page (0).
    pub fn text_x(&self, text: &str, font: FontSpec, alignment: Alignment) -> u32 {
        let per_char = self.params.char_width.for_font(font);
        match alignment {
            Alignment::Left => 0,
            Alignment::Center => center_align(text, per_char, self.params.page_width),
            Alignment::Right => right_align(
                text,
                per_char,
                self.params.page_width,
                self.params.right_margin,
            ),
        }
    }

    pub fn center(&self, text: &str, font: FontSpec) -> u32 {
        self.text_x(text, font, Alignment::Center)
    }

    pub fn right(&self, text: &str, font: FontSpec) -> u32 {
        self.text_x(text, font, Alignment::Right)
    }

    /// X position that centers a barcode of `payload`.
    pub fn barcode_center(&self, payload: &str, module_width: u8) -> Result<u32, CashoutError> {
        let width = self
            .params
            .barcode_width
            .width_dots(payload, module_width)?;
        Ok(center_x(width, self.params.page_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BarcodeWidthModel;

    #[test]
    fn test_center_align() {
        assert_eq!(center_align("ABC", 12, 950), 457);
        assert_eq!(center_align("", 12, 950), 475);
        // Odd remainder floors
        assert_eq!(center_align("AB", 12, 951), 463);
    }

    #[test]
    fn test_center_clamps_to_zero() {
        let wide = "X".repeat(200);
        assert_eq!(center_align(&wide, 12, 950), 0);
    }

    #[test]
    fn test_right_align() {
        assert_eq!(right_align("ABC", 12, 950, 20), 894);
        assert_eq!(right_align("ABC", 12, 40, 20), 0);
    }

    #[test]
    fn test_text_width_counts_chars() {
        assert_eq!(text_width("PESO", 10), 40);
        assert_eq!(text_width("ÑÑ", 10), 20);
    }

    #[test]
    fn test_aligner_uses_font_width() {
        let params = AlignmentParameters::default();
        let aligner = Aligner::new(&params);
        assert_eq!(aligner.center("ABC", FontSpec::NORMAL), 457);
        // Large font is 18 dots per character
        assert_eq!(aligner.center("ABC", FontSpec::LARGE), 448);
        assert_eq!(aligner.text_x("ABC", FontSpec::NORMAL, Alignment::Left), 0);
        assert_eq!(aligner.right("ABC", FontSpec::NORMAL), 894);
    }

    #[test]
    fn test_barcode_center() {
        let params = AlignmentParameters::default();
        let aligner = Aligner::new(&params);
        // 112 modules * 6 dots = 672; (950 - 672) / 2 = 139
        assert_eq!(aligner.barcode_center("010000000000000001", 6).unwrap(), 139);

        let exact = AlignmentParameters {
            barcode_width: BarcodeWidthModel::exact(),
            ..AlignmentParameters::default()
        };
        let wide = Aligner::new(&exact)
            .barcode_center("010000000000000001", 6)
            .unwrap();
        assert!(wide < 139);
    }
}
