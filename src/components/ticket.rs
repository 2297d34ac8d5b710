//! # Ticket Component
//!
//! The root container. Owns the envelope every layout shares:
//!
//! ```text
//! Reset → Orientation → [Justification] → fields... → FormFeed
//! ```

use super::Component;
use crate::ir::Op;
use crate::protocol::commands::Orientation;
use crate::protocol::text::Alignment;

/// Ticket is the root container component.
///
/// ## Example
///
/// ```
/// use cashout::components::*;
///
/// let ticket = Ticket::landscape()
///     .child(Field::new("VOID").at(400, 20));
///
/// let ir = ticket.compile();
/// assert_eq!(ir.form_feeds(), 1);
/// ```
pub struct Ticket {
    children: Vec<Box<dyn Component>>,
    orientation: Orientation,
    justification: Option<Alignment>,
}

impl Default for Ticket {
    fn default() -> Self {
        Self::landscape()
    }
}

impl Ticket {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            children: Vec::new(),
            orientation,
            justification: None,
        }
    }

    pub fn landscape() -> Self {
        Self::new(Orientation::Landscape)
    }

    pub fn portrait() -> Self {
        Self::new(Orientation::Portrait)
    }

    /// Emit a justification opcode once, right after the orientation.
    pub fn justify(mut self, alignment: Alignment) -> Self {
        self.justification = Some(alignment);
        self
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add a child only when present.
    pub fn maybe_child<C: Component + 'static>(self, component: Option<C>) -> Self {
        match component {
            Some(c) => self.child(c),
            None => self,
        }
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }
}

impl Component for Ticket {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::Reset);
        ops.push(Op::SetOrientation(self.orientation));
        if let Some(alignment) = self.justification {
            ops.push(Op::SetAlign(alignment));
        }

        for child in &self.children {
            child.emit(ops);
        }

        ops.push(Op::FormFeed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentExt, Field};

    #[test]
    fn test_empty_ticket() {
        let ir = Ticket::landscape().compile();
        assert_eq!(
            ir.ops,
            vec![
                Op::Reset,
                Op::SetOrientation(Orientation::Landscape),
                Op::FormFeed
            ]
        );
        assert_eq!(
            Ticket::landscape().build().unwrap(),
            vec![0x1B, 0x2A, 0x1D, 0x56, 0x01, 0x0C]
        );
    }

    #[test]
    fn test_portrait_with_justification() {
        let ir = Ticket::portrait().justify(Alignment::Left).compile();
        assert_eq!(ir.ops[1], Op::SetOrientation(Orientation::Portrait));
        assert_eq!(ir.ops[2], Op::SetAlign(Alignment::Left));
    }

    #[test]
    fn test_children_between_envelope() {
        let ir = Ticket::landscape()
            .child(Field::new("A"))
            .maybe_child(None::<Field>)
            .maybe_child(Some(Field::new("B")))
            .compile();
        assert_eq!(ir.ops.first(), Some(&Op::Reset));
        assert_eq!(ir.ops.last(), Some(&Op::FormFeed));
        assert_eq!(ir.form_feeds(), 1);
        let texts: Vec<_> = ir
            .iter()
            .filter_map(|op| match op {
                Op::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["A", "B"]);
    }
}
