//! Rendered barcode width estimation.
//!
//! The printer does not report how wide a symbol came out, so centering a
//! barcode needs a width model. Two are available:
//!
//! - [`BarcodeWidthModel::Empirical`]: `round(len * modules_per_character)`
//!   modules. `modules_per_character` is a device-tuned fudge factor measured
//!   from printouts (about 6.2 on the Epic Edge for 18-digit validation
//!   numbers). It is not a property of Code128 and drifts for payload lengths
//!   outside the range it was measured on.
//! - [`BarcodeWidthModel::Exact`]: counts the modules of the encoded
//!   Code128-B symbol (start, data, checksum, stop) plus quiet zones on both
//!   sides.

use barcoders::sym::code128::Code128;
use serde::{Deserialize, Serialize};

use crate::error::CashoutError;

/// Code128 recommends ten modules of quiet zone on each side.
pub const DEFAULT_QUIET_ZONE_MODULES: u32 = 10;

/// Largest accepted quiet zone per side.
pub const MAX_QUIET_ZONE_MODULES: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum BarcodeWidthModel {
    Empirical { modules_per_character: f64 },
    Exact { quiet_zone_modules: u32 },
}

impl BarcodeWidthModel {
    pub const DEFAULT_MODULES_PER_CHARACTER: f64 = 6.2;

    /// Upper bound for the empirical factor. A Code128 character is eleven
    /// modules, so anything near this is a typo.
    pub const MAX_MODULES_PER_CHARACTER: f64 = 100.0;

    pub fn exact() -> Self {
        Self::Exact {
            quiet_zone_modules: DEFAULT_QUIET_ZONE_MODULES,
        }
    }

    /// Reject parameters the width arithmetic cannot represent.
    pub fn validate(&self) -> Result<(), CashoutError> {
        match *self {
            Self::Empirical {
                modules_per_character,
            } if !(modules_per_character.is_finite()
                && modules_per_character > 0.0
                && modules_per_character <= Self::MAX_MODULES_PER_CHARACTER) =>
            {
                Err(CashoutError::Config(format!(
                    "modules_per_character must be in (0, {}]",
                    Self::MAX_MODULES_PER_CHARACTER
                )))
            }
            Self::Exact { quiet_zone_modules } if quiet_zone_modules > MAX_QUIET_ZONE_MODULES => {
                Err(CashoutError::Config(format!(
                    "quiet_zone_modules must not exceed {MAX_QUIET_ZONE_MODULES}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Estimated symbol width in modules.
    ///
    /// ## Errors
    ///
    /// `InvalidBarcodePayload` for an empty payload, `Config` when the model
    /// parameters push the width past `u32`.
    pub fn modules(&self, payload: &str) -> Result<u32, CashoutError> {
        if payload.is_empty() {
            return Err(CashoutError::InvalidBarcodePayload(
                "cannot measure an empty payload".to_string(),
            ));
        }
        match *self {
            Self::Empirical {
                modules_per_character,
            } => {
                let modules = (payload.chars().count() as f64 * modules_per_character).round();
                if !(modules.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&modules)) {
                    return Err(too_wide());
                }
                Ok(modules as u32)
            }
            Self::Exact { quiet_zone_modules } => {
                let symbol = code128b_modules(payload)?;
                quiet_zone_modules
                    .checked_mul(2)
                    .and_then(|quiet| quiet.checked_add(symbol))
                    .ok_or_else(too_wide)
            }
        }
    }

    /// Estimated symbol width in dots for a given module width.
    pub fn width_dots(&self, payload: &str, module_width: u8) -> Result<u32, CashoutError> {
        self.modules(payload)?
            .checked_mul(u32::from(module_width))
            .ok_or_else(too_wide)
    }
}

fn too_wide() -> CashoutError {
    CashoutError::Config("barcode width model overflows; check barcode_width settings".to_string())
}

impl Default for BarcodeWidthModel {
    fn default() -> Self {
        Self::Empirical {
            modules_per_character: Self::DEFAULT_MODULES_PER_CHARACTER,
        }
    }
}

/// Module count of the Code128-B encoding of `payload`, without quiet zones.
pub fn code128b_modules(payload: &str) -> Result<u32, CashoutError> {
    // Character set B is selected with the U+0181 prefix.
    let prefixed = format!("\u{0181}{}", payload);
    let barcode = Code128::new(&prefixed)
        .map_err(|e| CashoutError::InvalidBarcodePayload(format!("{e:?}")))?;
    Ok(barcode.encode().len() as u32)
}
