//! # IR Optimizer
//!
//! Optional passes over a ticket program.
//!
//! 1. **Merge adjacent text**: byte-identical, always safe
//! 2. **Remove redundant styles**: drops `SetFont` / `SetAlign` that repeat
//!    what is already selected. This shortens the stream, so it is opt-in;
//!    the default composition emits every field's font verbatim.

use super::ops::{Op, Program, StyleState};

impl Program {
    /// Apply the byte-preserving passes.
    pub fn optimize(self) -> Self {
        Program {
            ops: merge_adjacent_text(self.ops),
        }
    }

    /// Drop font and alignment selections that do not change printer state.
    pub fn dedupe_styles(self) -> Self {
        Program {
            ops: remove_redundant_styles(self.ops),
        }
    }
}

/// Remove style changes that don't change the current state.
///
/// State is forgotten at every `Reset`, so the first selection after a
/// reset is always kept.
fn remove_redundant_styles(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut state = StyleState::default();

    for op in ops {
        match &op {
            Op::Reset => {
                state = StyleState::default();
                result.push(op);
            }
            Op::SetAlign(a) => {
                if state.alignment != Some(*a) {
                    state.alignment = Some(*a);
                    result.push(op);
                }
            }
            Op::SetFont(f) => {
                if state.font != Some(*f) {
                    state.font = Some(*f);
                    result.push(op);
                }
            }

            // Non-style ops pass through unchanged
            _ => result.push(op),
        }
    }

    result
}

/// Merge consecutive Text ops into a single op.
fn merge_adjacent_text(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut pending_text: Option<String> = None;

    for op in ops {
        match op {
            Op::Text(s) => {
                if let Some(ref mut pending) = pending_text {
                    pending.push_str(&s);
                } else {
                    pending_text = Some(s);
                }
            }
            other => {
                if let Some(text) = pending_text.take() {
                    result.push(Op::Text(text));
                }
                result.push(other);
            }
        }
    }

    if let Some(text) = pending_text {
        result.push(Op::Text(text));
    }

    result
}
