//! # Printer Configuration
//!
//! Hardware settings for the ticket printer and the tuning constants used to
//! align fields on the page.
//!
//! ## Supported Printers
//!
//! | Model | Interface | Baud | Page width (landscape) |
//! |-------|-----------|------|------------------------|
//! | TransAct Epic Edge | USB CDC serial | 9600 | ~950 dots |
//!
//! ## Settings File
//!
//! Both structs can be loaded from one JSON file; any key left out keeps its
//! default:
//!
//! ```json
//! {
//!   "printer": { "device": "/dev/ttyACM0" },
//!   "alignment": {
//!     "page_width": 940,
//!     "char_width": { "normal": 13 },
//!     "barcode_width": { "model": "exact", "quiet_zone_modules": 10 }
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CashoutError;
use crate::layout::BarcodeWidthModel;
use crate::protocol::barcode::{DEFAULT_MAX_SYMBOL_LEN, LENGTH_PREFIX_MAX};
use crate::protocol::commands::MAX_POSITION_X;
use crate::protocol::text::FontSpec;

/// Default serial device of the Epic Edge on macOS.
pub const DEFAULT_DEVICE: &str = "/dev/cu.usbmodemEpic_Edge1";

/// Default serial speed.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// # Printer Configuration
///
/// - **device** / **baud_rate**: where and how fast to write
/// - **barcode_height** / **barcode_module_width**: `GS h` / `GS w` arguments
/// - **max_barcode_len**: longest payload accepted in one symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: String,

    /// Serial device path
    pub device: String,

    pub baud_rate: u32,

    /// Bar height in dots
    pub barcode_height: u8,

    /// Narrow module width in dots
    pub barcode_module_width: u8,

    /// Maximum barcode payload length (capped at 255 by the length prefix)
    pub max_barcode_len: usize,
}

impl PrinterConfig {
    /// # TransAct Epic Edge
    ///
    /// Casino ticket printer in landscape page mode.
    pub fn epic_edge() -> Self {
        Self {
            name: "TransAct Epic Edge".to_string(),
            device: DEFAULT_DEVICE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            barcode_height: 80,
            barcode_module_width: 6,
            max_barcode_len: DEFAULT_MAX_SYMBOL_LEN,
        }
    }

    /// Effective payload bound after the length-prefix cap.
    #[inline]
    pub fn symbol_limit(&self) -> usize {
        self.max_barcode_len.min(LENGTH_PREFIX_MAX)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::epic_edge()
    }
}

// ============================================================================
// ALIGNMENT PARAMETERS
// ============================================================================

/// Assumed per-character advance, in dots, of each font preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharWidths {
    pub normal: u32,
    pub large: u32,
    pub small: u32,
}

impl CharWidths {
    /// Width for a font. Fonts outside the presets fall back to their point
    /// width, one dot per point.
    pub fn for_font(&self, font: FontSpec) -> u32 {
        if font == FontSpec::NORMAL {
            self.normal
        } else if font == FontSpec::LARGE {
            self.large
        } else if font == FontSpec::SMALL {
            self.small
        } else {
            u32::from(font.width_pt)
        }
    }
}

impl Default for CharWidths {
    fn default() -> Self {
        Self {
            normal: 12,
            large: 18,
            small: 10,
        }
    }
}

/// # Alignment Parameters
///
/// Device-specific constants consumed by [`crate::layout::Aligner`] and the
/// diagnostic ticket. None of these are derived; recalibrate them by printing
/// `cashout calibrate` and comparing the ruler with the physical ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentParameters {
    /// Assumed printable page width in dots
    pub page_width: u32,

    pub char_width: CharWidths,

    /// Gap kept between right-aligned text and the page edge
    pub right_margin: u32,

    pub barcode_width: BarcodeWidthModel,

    /// Last ruler mark on the diagnostic ticket
    pub ruler_max: u32,

    /// Spacing of ruler marks
    pub ruler_step: u32,
}

impl Default for AlignmentParameters {
    fn default() -> Self {
        Self {
            page_width: 950,
            char_width: CharWidths::default(),
            right_margin: 20,
            barcode_width: BarcodeWidthModel::default(),
            ruler_max: 900,
            ruler_step: 100,
        }
    }
}

// ============================================================================
// SETTINGS FILE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub printer: PrinterConfig,
    pub alignment: AlignmentParameters,
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CashoutError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            CashoutError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
            .map_err(|e| CashoutError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self, CashoutError> {
        let settings: Settings =
            serde_json::from_str(text).map_err(|e| CashoutError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would make composition meaningless.
    pub fn validate(&self) -> Result<(), CashoutError> {
        if self.alignment.ruler_step == 0 {
            return Err(CashoutError::Config("ruler_step must be positive".into()));
        }
        let max_x = MAX_POSITION_X as u32;
        if self.alignment.ruler_max > max_x || self.alignment.page_width > max_x {
            return Err(CashoutError::Config(format!(
                "page_width and ruler_max must not exceed {max_x}"
            )));
        }
        if self.printer.barcode_module_width == 0 {
            return Err(CashoutError::Config(
                "barcode_module_width must be positive".into(),
            ));
        }
        self.alignment.barcode_width.validate()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epic_edge_defaults() {
        let config = PrinterConfig::default();
        assert_eq!(config.device, DEFAULT_DEVICE);
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.barcode_height, 80);
        assert_eq!(config.barcode_module_width, 6);
        assert_eq!(config.symbol_limit(), 127);
    }

    #[test]
    fn test_symbol_limit_capped() {
        let config = PrinterConfig {
            max_barcode_len: 4000,
            ..PrinterConfig::default()
        };
        assert_eq!(config.symbol_limit(), 255);
    }

    #[test]
    fn test_char_width_lookup() {
        let widths = CharWidths::default();
        assert_eq!(widths.for_font(FontSpec::NORMAL), 12);
        assert_eq!(widths.for_font(FontSpec::LARGE), 18);
        assert_eq!(widths.for_font(FontSpec::SMALL), 10);
        assert_eq!(widths.for_font(FontSpec::new(24, 24, false)), 24);
    }

    #[test]
    fn test_partial_settings() {
        let settings = Settings::from_json(
            r#"{"alignment": {"page_width": 940, "char_width": {"normal": 13}}}"#,
        )
        .unwrap();
        assert_eq!(settings.alignment.page_width, 940);
        assert_eq!(settings.alignment.char_width.normal, 13);
        assert_eq!(settings.alignment.char_width.large, 18);
        assert_eq!(settings.printer, PrinterConfig::default());
    }

    #[test]
    fn test_invalid_settings() {
        assert!(Settings::from_json("{not json").is_err());
        assert!(Settings::from_json(r#"{"alignment": {"ruler_step": 0}}"#).is_err());
        assert!(Settings::from_json(r#"{"alignment": {"ruler_max": 70000}}"#).is_err());
        assert!(
            Settings::from_json(
                r#"{"alignment": {"barcode_width": {"model": "empirical", "modules_per_character": -1.0}}}"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_out_of_range_width_models_rejected() {
        let empirical = Settings::from_json(
            r#"{"alignment": {"barcode_width": {"model": "empirical", "modules_per_character": 1e9}}}"#,
        );
        assert!(matches!(empirical, Err(CashoutError::Config(_))));

        let exact = Settings::from_json(
            r#"{"alignment": {"barcode_width": {"model": "exact", "quiet_zone_modules": 4000000000}}}"#,
        );
        assert!(matches!(exact, Err(CashoutError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/cashout.json").unwrap_err();
        assert!(matches!(err, CashoutError::Config(_)));
    }
}
