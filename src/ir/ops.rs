//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for ticket
//! printing. The IR is a sequence of opcodes that can be inspected,
//! optionally optimized, and compiled to printer bytes.
//!
//! ```text
//! Components → IR (inspectable) → Optimizer (optional) → Codegen → Bytes
//! ```
//!
//! Each opcode is a single atomic operation. Positions are kept as signed
//! integers so out-of-range values surface as errors in codegen instead of
//! wrapping.

use crate::protocol::commands::Orientation;
use crate::protocol::text::{Alignment, FontSpec};

/// Printer state tracked by the redundant-style pass.
///
/// `None` means "unknown": nothing has been selected since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    pub alignment: Option<Alignment>,
    pub font: Option<FontSpec>,
}

/// IR opcodes - the "bytecode" for ticket printing.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Page Control ==========
    /// Reset the printer (ESC *).
    Reset,

    /// Select page orientation.
    SetOrientation(Orientation),

    /// Eject the page. Always last.
    FormFeed,

    // ========== Style Changes ==========
    /// Set text justification.
    SetAlign(Alignment),

    /// Select font metrics.
    SetFont(FontSpec),

    // ========== Positioning ==========
    /// Absolute horizontal position in dots.
    MoveX(i64),

    /// Absolute vertical position in millimetres.
    MoveY(i64),

    // ========== Content ==========
    /// Literal text (no trailing newline). Printed as ASCII.
    Text(String),

    /// Line feed.
    Newline,

    /// Code128-B barcode. `payload` must already be digits only.
    Barcode {
        payload: String,
        height: u8,
        module_width: u8,
    },
}

/// A compiled IR program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create a program with an initial Reset op.
    pub fn with_reset() -> Self {
        Self {
            ops: vec![Op::Reset],
        }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Number of form feeds in the program.
    pub fn form_feeds(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::FormFeed)).count()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
