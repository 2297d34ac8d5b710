//! # Ruler Component
//!
//! A row of position marks used to calibrate the page width.
//!
//! ```text
//! |0        |100      |200      |300   ...   |900
//! ```
//!
//! Each mark is placed with an absolute X command and labelled with its own
//! position, so the physical offset of every `|` can be compared against the
//! number printed next to it.

use super::Component;
use crate::ir::Op;
use crate::protocol::text::FontSpec;

/// Horizontal ruler with marks every `step` dots from 0 to `max` inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruler {
    y: i64,
    max: u32,
    step: u32,
    font: FontSpec,
}

impl Ruler {
    pub fn new(max: u32, step: u32) -> Self {
        Self {
            y: 0,
            max,
            step,
            font: FontSpec::SMALL,
        }
    }

    /// Vertical position in millimetres.
    pub fn y(mut self, y: impl Into<i64>) -> Self {
        self.y = y.into();
        self
    }

    pub fn font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    /// Positions of the marks. A zero step yields only the origin mark.
    pub fn marks(&self) -> Vec<u32> {
        if self.step == 0 {
            return vec![0];
        }
        (0..=self.max).step_by(self.step as usize).collect()
    }
}

impl Component for Ruler {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::MoveY(self.y));
        ops.push(Op::SetFont(self.font));
        for mark in self.marks() {
            ops.push(Op::MoveX(i64::from(mark)));
            ops.push(Op::Text(format!("|{mark}")));
        }
        ops.push(Op::Newline);
    }
}
