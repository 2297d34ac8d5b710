//! # Ticket Text Commands
//!
//! Font and justification selection.
//!
//! ## Font Selection
//!
//! The ticket printer takes font metrics directly instead of a font number:
//! `ESC F w h b` sets character width and height in points and the bold flag.
//!
//! | Preset | Width | Height | Bold | Used for |
//! |--------|-------|--------|------|----------|
//! | [`FontSpec::NORMAL`] | 12 | 12 | no | body lines |
//! | [`FontSpec::LARGE`] | 18 | 12 | yes | voucher title |
//! | [`FontSpec::SMALL`] | 10 | 10 | no | amount in words, metadata |

use super::commands::ESC;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use cashout::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

/// Convenience function for left alignment
#[inline]
pub fn align_left() -> Vec<u8> {
    align(Alignment::Left)
}

/// Convenience function for center alignment
#[inline]
pub fn align_center() -> Vec<u8> {
    align(Alignment::Center)
}

/// Convenience function for right alignment
#[inline]
pub fn align_right() -> Vec<u8> {
    align(Alignment::Right)
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Font metrics passed to `ESC F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    /// Character width in points
    pub width_pt: u8,
    /// Character height in points
    pub height_pt: u8,
    pub bold: bool,
}

impl FontSpec {
    /// 12pt regular
    pub const NORMAL: Self = Self::new(12, 12, false);

    /// 18pt wide, bold
    pub const LARGE: Self = Self::new(18, 12, true);

    /// 10pt regular
    pub const SMALL: Self = Self::new(10, 10, false);

    pub const fn new(width_pt: u8, height_pt: u8, bold: bool) -> Self {
        Self {
            width_pt,
            height_pt,
            bold,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// # Select Font (ESC F w h b)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC F w h b |
/// | Hex     | 1B 46 w h b |
///
/// - `w`: character width in points
/// - `h`: character height in points
/// - `b`: 1 for bold, 0 otherwise
///
/// ## Example
///
/// ```
/// use cashout::protocol::text::{font, FontSpec};
///
/// assert_eq!(font(FontSpec::LARGE), vec![0x1B, 0x46, 18, 12, 1]);
/// ```
pub fn font(spec: FontSpec) -> Vec<u8> {
    vec![ESC, b'F', spec.width_pt, spec.height_pt, u8::from(spec.bold)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align_left(), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align_center(), vec![0x1B, 0x61, 0x01]);
        assert_eq!(align_right(), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_font_presets() {
        assert_eq!(font(FontSpec::NORMAL), vec![0x1B, 0x46, 12, 12, 0]);
        assert_eq!(font(FontSpec::LARGE), vec![0x1B, 0x46, 18, 12, 1]);
        assert_eq!(font(FontSpec::SMALL), vec![0x1B, 0x46, 10, 10, 0]);
    }

    #[test]
    fn test_font_custom() {
        assert_eq!(font(FontSpec::new(24, 24, true)), vec![0x1B, 0x46, 24, 24, 1]);
        assert_eq!(FontSpec::default(), FontSpec::NORMAL);
    }
}
