//! # Layout
//!
//! Position arithmetic for page-mode tickets.
//!
//! - [`align`]: center/right alignment from per-character dot widths
//! - [`barcode_width`]: rendered barcode width models

pub mod align;
pub mod barcode_width;

pub use align::{Aligner, center_align, center_x, right_align, right_x, text_width};
pub use barcode_width::{BarcodeWidthModel, code128b_modules};
