//! # Printer Transport Layer
//!
//! Destinations for composed byte streams.
//!
//! ## Available Transports
//!
//! - [`serial`]: raw TTY at a configured baud rate (Unix)
//! - [`file`]: any file or pipe, for dry runs and captures
//!
//! A sink receives one whole ticket per [`PrintSink::send`] call and must
//! write it in order. Sinks never retry; serializing concurrent tickets to
//! one device is the caller's job.

pub mod file;
#[cfg(unix)]
pub mod serial;

pub use file::FileSink;
#[cfg(unix)]
pub use serial::SerialTransport;

use crate::error::CashoutError;

/// Something a composed ticket can be written to.
pub trait PrintSink {
    /// Write one complete stream.
    fn send(&mut self, data: &[u8]) -> Result<(), CashoutError>;
}

impl PrintSink for Vec<u8> {
    fn send(&mut self, data: &[u8]) -> Result<(), CashoutError> {
        self.extend_from_slice(data);
        Ok(())
    }
}

impl<S: PrintSink + ?Sized> PrintSink for Box<S> {
    fn send(&mut self, data: &[u8]) -> Result<(), CashoutError> {
        (**self).send(data)
    }
}
