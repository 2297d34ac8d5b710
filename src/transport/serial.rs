//! # Serial Transport
//!
//! Writes composed tickets to the printer's USB CDC serial device.
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data passes through untouched:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR,
//!   ICRNL, IXON, IXOFF, IXANY cleared
//! - **No output processing**: OPOST cleared (no LF → CRLF)
//! - **8N1**: CS8, no parity, one stop bit
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN cleared
//!
//! Software flow control must stay off: position and font arguments can
//! contain 0x11 / 0x13.
//!
//! ## Delivery
//!
//! One composed stream is written with a single `write_all` and then drained
//! with `tcdrain`, so its bytes reach the device in order. Nothing is retried.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;

use super::PrintSink;
use crate::error::CashoutError;
use crate::printer::PrinterConfig;

/// Speeds the printer firmware accepts.
pub const SUPPORTED_BAUD_RATES: &[u32] = &[1200, 2400, 4800, 9600, 19200, 38400, 57600, 115200];

/// # Serial Printer Transport
///
/// ## Example
///
/// ```no_run
/// use cashout::transport::{PrintSink, SerialTransport};
///
/// let mut transport = SerialTransport::open("/dev/ttyACM0", 9600)?;
/// transport.send(&[0x1B, 0x2A, 0x0C])?;
/// # Ok::<(), cashout::CashoutError>(())
/// ```
pub struct SerialTransport {
    file: File,
    device: String,
}

impl SerialTransport {
    /// Open and configure a serial device.
    ///
    /// ## Errors
    ///
    /// Returns `Transport` if:
    /// - The device doesn't exist or permission is denied (dialout group)
    /// - The baud rate is not one of [`SUPPORTED_BAUD_RATES`]
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, baud_rate: u32) -> Result<Self, CashoutError> {
        let path = device.as_ref();
        let speed = baud_constant(baud_rate)?;

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            CashoutError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd(), speed)?;
        tracing::info!(device = %path.display(), baud_rate, "serial port open");

        Ok(Self {
            file,
            device: path.display().to_string(),
        })
    }

    /// Open the device named in a printer config.
    pub fn from_config(config: &PrinterConfig) -> Result<Self, CashoutError> {
        Self::open(&config.device, config.baud_rate)
    }

    pub fn device(&self) -> &str {
        &self.device
    }
}

impl PrintSink for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), CashoutError> {
        self.file
            .write_all(data)
            .map_err(|e| CashoutError::Transport(format!("Write failed: {}", e)))?;
        self.file
            .flush()
            .map_err(|e| CashoutError::Transport(format!("Flush failed: {}", e)))?;
        drain(self.file.as_raw_fd())?;
        tracing::info!(device = %self.device, bytes = data.len(), "ticket sent");
        Ok(())
    }
}

#[cfg(unix)]
fn baud_constant(baud_rate: u32) -> Result<libc::speed_t, CashoutError> {
    let speed = match baud_rate {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        other => {
            return Err(CashoutError::Transport(format!(
                "Unsupported baud rate {other} (expected one of {SUPPORTED_BAUD_RATES:?})"
            )));
        }
    };
    Ok(speed)
}

/// Configure a file descriptor for raw 8N1 at the given speed.
#[cfg(unix)]
fn configure_tty_raw(fd: i32, speed: libc::speed_t) -> Result<(), CashoutError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(CashoutError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // 8N1
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CLOCAL;

    let result = unsafe {
        libc::cfsetispeed(&mut termios, speed) | libc::cfsetospeed(&mut termios, speed)
    };
    if result != 0 {
        return Err(CashoutError::Transport(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(CashoutError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

/// Block until everything written has been transmitted.
#[cfg(unix)]
fn drain(fd: i32) -> Result<(), CashoutError> {
    let result = unsafe { libc::tcdrain(fd) };
    if result != 0 {
        return Err(CashoutError::Transport(format!(
            "tcdrain failed: {}",
            io::Error::last_os_error()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_baud_rates() {
        for rate in SUPPORTED_BAUD_RATES {
            assert!(baud_constant(*rate).is_ok(), "{rate}");
        }
    }

    #[test]
    fn test_unsupported_baud_rate() {
        assert!(matches!(
            baud_constant(9601),
            Err(CashoutError::Transport(_))
        ));
    }

    #[test]
    fn test_open_missing_device() {
        let result = SerialTransport::open("/nonexistent/ttyACM9", 9600);
        assert!(matches!(result, Err(CashoutError::Transport(msg)) if msg.contains("Failed to open")));
    }

    #[test]
    fn test_bad_baud_rejected_before_open() {
        let result = SerialTransport::open("/nonexistent/ttyACM9", 1234);
        assert!(matches!(result, Err(CashoutError::Transport(msg)) if msg.contains("baud")));
    }
}
