//! # Cashout - Casino Voucher Ticket Composer
//!
//! Cashout turns a voucher record into the byte stream a TransAct Epic Edge
//! ticket printer expects in landscape page mode. It provides:
//!
//! - **Protocol**: bit-exact command primitives (reset, orientation,
//!   absolute position, font, alignment, Code128-B barcode, form feed)
//! - **Amount formatting**: pesos and centavos in English words
//! - **Alignment**: center/right positions from calibrated character widths
//! - **Templates**: plain, detailed, aligned and diagnostic layouts
//! - **Transport**: raw serial output and file capture
//!
//! ## Quick Start
//!
//! ```no_run
//! use cashout::{
//!     Composer, Settings, Template,
//!     ticket::VoucherRequest,
//!     transport::{PrintSink, SerialTransport},
//! };
//!
//! let settings = Settings::default();
//! let record = VoucherRequest::from_json(r#"{"amount": 1500.5, "ticketNo": "0042"}"#)?
//!     .into_record()?;
//!
//! // Open the device first so a missing printer fails before composing
//! let mut printer = SerialTransport::from_config(&settings.printer)?;
//!
//! let bytes = Composer::from_settings(&settings).compose(Template::Detailed, &record)?;
//! printer.send(&bytes)?;
//! # Ok::<(), cashout::CashoutError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Command byte builders |
//! | [`amount`] | Amount parsing and words |
//! | [`layout`] | Alignment arithmetic and barcode widths |
//! | [`components`] | Declarative ticket components |
//! | [`ir`] | Op program, optimizer and codegen |
//! | [`ticket`] | Records, requests, templates and the composer |
//! | [`printer`] | Printer and alignment configuration |
//! | [`transport`] | Output backends |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Currently tested with:
//! - TransAct Epic Edge (USB CDC serial, 9600 baud)

pub mod amount;
pub mod components;
pub mod error;
pub mod ir;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod ticket;
pub mod transport;

// Re-exports for convenience
pub use amount::Amount;
pub use error::CashoutError;
pub use printer::{PrinterConfig, Settings};
pub use ticket::{Composer, Template, VoucherRecord};
