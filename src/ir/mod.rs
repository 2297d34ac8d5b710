//! # Intermediate Representation (IR)
//!
//! The IR is a "bytecode" representation that sits between ticket components
//! and raw printer bytes.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │ Components  │ ──► │     IR      │ ──► │ Optimizer │ ──► │ Codegen  │
//! │  (fields)   │     │  (Vec<Op>)  │     │ (opt-in)  │     │ (bytes)  │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use cashout::ir::{Op, Program};
//! use cashout::protocol::commands::Orientation;
//! use cashout::protocol::text::FontSpec;
//!
//! let mut program = Program::with_reset();
//! program.push(Op::SetOrientation(Orientation::Landscape));
//! program.push(Op::MoveX(320));
//! program.push(Op::MoveY(50));
//! program.push(Op::SetFont(FontSpec::NORMAL));
//! program.push(Op::Text("---- THANK YOU ----".into()));
//! program.push(Op::Newline);
//! program.push(Op::FormFeed);
//!
//! let bytes = program.to_bytes()?;
//! assert_eq!(bytes.last(), Some(&0x0C));
//! # Ok::<(), cashout::CashoutError>(())
//! ```

mod codegen;
mod ops;
mod optimize;

pub use codegen::printable_ascii;
pub use ops::*;
