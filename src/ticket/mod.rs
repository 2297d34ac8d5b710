//! # Voucher Tickets
//!
//! Composition of a [`VoucherRecord`] into a printer byte stream.
//!
//! Every template is a pure function from a record to a [`Ticket`] component,
//! so all of them share the same envelope:
//!
//! ```text
//! Reset → Orientation → [Justification] → fields... → FormFeed
//! ```
//!
//! | Template | Fields | Positioning |
//! |----------|--------|-------------|
//! | `plain` | title, date, amount, barcode, validation, ticket, footer | fixed |
//! | `detailed` | plain + amount in words + metadata | fixed |
//! | `aligned` | detailed | computed by [`Aligner`] |
//! | `diagnostic` | ruler, calibration strings | computed |
//!
//! ## Example
//!
//! ```
//! use cashout::ticket::{Template, VoucherRecord, compose};
//!
//! let bytes = compose(Template::Plain, &VoucherRecord::default())?;
//! assert_eq!(&bytes[..4], &[0x1B, 0x2A, 0x1D, 0x56]);
//! assert_eq!(bytes.last(), Some(&0x0C));
//! # Ok::<(), cashout::CashoutError>(())
//! ```

mod aligned;
mod detailed;
mod diagnostic;
mod plain;
mod record;
pub mod request;

pub use record::VoucherRecord;
pub use request::{VoucherRequest, defaults};

use std::fmt;
use std::str::FromStr;

use crate::components::{ComponentExt, Ticket};
use crate::error::CashoutError;
use crate::ir::Program;
use crate::layout::Aligner;
use crate::printer::{AlignmentParameters, PrinterConfig, Settings};

/// Closing line printed on every voucher.
pub const FOOTER: &str = "---- THANK YOU ----";

/// Vertical positions (mm) shared by the detailed and aligned layouts.
pub(crate) mod rows {
    pub const TITLE: i64 = 0;
    pub const VALID_DATE: i64 = 8;
    pub const AMOUNT: i64 = 12;
    pub const WORDS: i64 = 16;
    pub const BARCODE: i64 = 21;
    pub const VALIDATION: i64 = 32;
    pub const METADATA: i64 = 38;
    pub const TICKET: i64 = 44;
    pub const FOOTER: i64 = 50;
}

// ============================================================================
// TEMPLATES
// ============================================================================

/// Named layout selector. The caller decides which one to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Template {
    #[default]
    Plain,
    Detailed,
    Aligned,
    Diagnostic,
}

impl Template {
    pub fn all() -> &'static [Template] {
        &[
            Template::Plain,
            Template::Detailed,
            Template::Aligned,
            Template::Diagnostic,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Plain => "plain",
            Template::Detailed => "detailed",
            Template::Aligned => "aligned",
            Template::Diagnostic => "diagnostic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Plain => "Landscape voucher at fixed coordinates",
            Template::Detailed => "Plain voucher plus amount in words and location/asset/floor",
            Template::Aligned => "Detailed voucher with computed center/right alignment",
            Template::Diagnostic => "Ruler and test strings for calibrating alignment",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = CashoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Template::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CashoutError::UnknownTemplate(s.to_string()))
    }
}

// ============================================================================
// COMPOSER
// ============================================================================

/// Everything a layout may consult besides the record.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub printer: &'a PrinterConfig,
    pub alignment: &'a AlignmentParameters,
}

impl<'a> LayoutContext<'a> {
    pub fn new(printer: &'a PrinterConfig, alignment: &'a AlignmentParameters) -> Self {
        Self { printer, alignment }
    }

    pub fn aligner(&self) -> Aligner<'a> {
        Aligner::new(self.alignment)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Drop font/alignment opcodes that repeat the last emitted state.
    /// Changes the byte stream, so it is off by default.
    pub dedupe_styles: bool,
}

/// Turns records into byte streams for one printer.
///
/// Holds configuration only; composing never mutates it, so one composer can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    printer: PrinterConfig,
    alignment: AlignmentParameters,
    options: ComposeOptions,
}

impl Composer {
    pub fn new(printer: PrinterConfig, alignment: AlignmentParameters) -> Self {
        Self {
            printer,
            alignment,
            options: ComposeOptions::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.printer.clone(), settings.alignment.clone())
    }

    pub fn with_options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn printer(&self) -> &PrinterConfig {
        &self.printer
    }

    pub fn alignment(&self) -> &AlignmentParameters {
        &self.alignment
    }

    /// Build the component tree for a template.
    pub fn layout(&self, template: Template, record: &VoucherRecord) -> Result<Ticket, CashoutError> {
        let ctx = LayoutContext::new(&self.printer, &self.alignment);
        match template {
            Template::Plain => plain::layout(record, &ctx),
            Template::Detailed => detailed::layout(record, &ctx),
            Template::Aligned => aligned::layout(record, &ctx),
            Template::Diagnostic => diagnostic::layout(&ctx),
        }
    }

    /// IR for a template, after the optional style pass.
    pub fn program(&self, template: Template, record: &VoucherRecord) -> Result<Program, CashoutError> {
        let program = self.layout(template, record)?.compile();
        Ok(if self.options.dedupe_styles {
            program.dedupe_styles()
        } else {
            program
        })
    }

    /// Compose the complete byte stream.
    ///
    /// ## Errors
    ///
    /// Any validation failure aborts before a byte is returned:
    /// `InvalidBarcodePayload`, `PositionOutOfRange`.
    pub fn compose(&self, template: Template, record: &VoucherRecord) -> Result<Vec<u8>, CashoutError> {
        let bytes = self
            .program(template, record)?
            .optimize()
            .to_bytes_with_config(&self.printer)?;
        tracing::debug!(%template, bytes = bytes.len(), "composed ticket");
        Ok(bytes)
    }

    /// The calibration ticket for the configured alignment constants.
    pub fn diagnostic(&self) -> Result<Vec<u8>, CashoutError> {
        self.compose(Template::Diagnostic, &VoucherRecord::default())
    }
}

/// Compose with the default Epic Edge configuration.
pub fn compose(template: Template, record: &VoucherRecord) -> Result<Vec<u8>, CashoutError> {
    Composer::default().compose(template, record)
}

// ============================================================================
// TESTS
// ============================================================================
