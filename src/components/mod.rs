//! # Ticket Components
//!
//! Declarative building blocks for page-mode tickets.
//!
//! Instead of concatenating escape sequences, a layout describes *what* goes
//! where:
//!
//! ```
//! use cashout::components::*;
//! use cashout::protocol::text::FontSpec;
//!
//! let ticket = Ticket::landscape()
//!     .child(Field::new("CASHOUT TICKET").at(300, 0).font(FontSpec::LARGE))
//!     .child(BarcodeField::new("01-0000-0001").at(250, 25))
//!     .child(Field::new("---- THANK YOU ----").at(320, 50).font(FontSpec::NORMAL));
//!
//! // Compile to IR (inspectable)
//! let ir = ticket.compile();
//! println!("{:#?}", ir);
//!
//! // Generate bytes
//! let bytes = ticket.build()?;
//! assert_eq!(bytes.last(), Some(&0x0C));
//! # Ok::<(), cashout::CashoutError>(())
//! ```
//!
//! ## Component Trait
//!
//! All components implement [`Component`], which emits IR ops. Components
//! never fail; invalid values (an empty barcode, an off-page position) are
//! rejected when the program is compiled to bytes.

mod barcode;
mod ruler;
mod text;
mod ticket;

pub use barcode::*;
pub use ruler::*;
pub use text::*;
pub use ticket::*;

use crate::error::CashoutError;
use crate::ir::{Op, Program};
use crate::printer::PrinterConfig;

/// Trait for declarative components.
pub trait Component {
    /// Emit IR ops for this component into the ops vector.
    fn emit(&self, ops: &mut Vec<Op>);
}

/// Extension trait for compiling components.
pub trait ComponentExt: Component {
    /// Compile this component to an IR program.
    fn compile(&self) -> Program {
        let mut ops = Vec::new();
        self.emit(&mut ops);
        Program { ops }
    }

    /// Compile and generate bytes with the default printer config.
    fn build(&self) -> Result<Vec<u8>, CashoutError> {
        self.build_with_config(&PrinterConfig::default())
    }

    /// Compile and generate bytes with a specific printer config.
    fn build_with_config(&self, config: &PrinterConfig) -> Result<Vec<u8>, CashoutError> {
        self.compile().optimize().to_bytes_with_config(config)
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, ops: &mut Vec<Op>) {
        self.as_ref().emit(ops);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, ops: &mut Vec<Op>) {
        (*self).emit(ops);
    }
}
