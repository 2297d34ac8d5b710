//! # Ticket Printer Protocol
//!
//! Low-level command builders for the ESC/POS-like page protocol spoken by
//! casino ticket printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Reset, orientation, absolute positioning, feeds
//! - [`text`]: Font metrics and justification
//! - [`barcode`]: Code128-B barcode block
//!
//! ## Usage Example
//!
//! ```
//! use cashout::protocol::{barcode, commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::reset());
//! data.extend(commands::landscape());
//!
//! data.extend(commands::position_x(300)?);
//! data.extend(commands::position_y(0)?);
//! data.extend(text::font(text::FontSpec::LARGE));
//! data.extend(b"CASHOUT TICKET\n");
//!
//! data.extend(commands::position_x(250)?);
//! data.extend(commands::position_y(25)?);
//! data.extend(barcode::block(b"010000000000000001", 80, 6, 127)?);
//! data.extend(commands::line_feed());
//!
//! data.extend(commands::form_feed());
//! assert_eq!(data.last(), Some(&0x0C));
//! # Ok::<(), cashout::CashoutError>(())
//! ```
//!
//! ## Command Table
//!
//! | Command | Bytes |
//! |---|---|
//! | Reset | `1B 2A` |
//! | Orientation landscape | `1D 56 01` |
//! | Orientation portrait | `1D 56 00` |
//! | Absolute X | `1B 58 hi lo` |
//! | Absolute Y (mm) | `1B 59 y` |
//! | Font select | `1B 46 w h bold` |
//! | Alignment | `1B 61 n` |
//! | Barcode height | `1D 68 h` |
//! | Barcode width | `1D 77 w` |
//! | Barcode symbol (Code128-B) | `1D 6B 09 len data` |
//! | Form feed | `0C` |

pub mod barcode;
pub mod commands;
pub mod text;
