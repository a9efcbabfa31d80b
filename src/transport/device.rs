//! # Device Node Transport
//!
//! Writes finished command buffers to a printer exposed as a character
//! device, such as the Linux `usblp` driver's `/dev/usb/lp0`, a serial port
//! or a file.
//!
//! ## Device Setup (Linux)
//!
//! ```bash
//! # USB printers appear once the usblp module is loaded
//! $ ls -l /dev/usb/lp*
//! crw-rw---- 1 root lp 180, 0 ... /dev/usb/lp0
//!
//! # Add yourself to the lp group to write without root
//! $ sudo usermod -aG lp $USER
//! ```
//!
//! ## Chunked Writes
//!
//! Large buffers (bit images, long receipts) are written in chunks with a
//! short pause between them so the printer's receive buffer can drain.
//! The transport never reads printer status and never retries.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::EscchainError;

/// Default device path (Linux usblp)
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Device Printer Transport
///
/// ## Example
///
/// ```no_run
/// use escchain::transport::DeviceTransport;
/// use escchain::protocol::commands;
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
///
/// // Send initialization
/// transport.write_all(&commands::init())?;
///
/// # Ok::<(), escchain::error::EscchainError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open the printer device write-only.
    ///
    /// The path must already exist; a missing device node is an error, not
    /// a new file.
    ///
    /// ## Errors
    ///
    /// Returns [`EscchainError::Transport`] if the device doesn't exist or
    /// permission is denied.
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, EscchainError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            EscchainError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;
        debug!(device = %path.display(), "opened printer device");

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Open with default device path (/dev/usb/lp0)
    pub fn open_default() -> Result<Self, EscchainError> {
        Self::open(DEFAULT_DEVICE)
    }

    /// Set the chunk size for large writes.
    ///
    /// A size of 0 is treated as 1.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Write data to the printer.
    ///
    /// Small writes are sent directly. Large writes are chunked.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), EscchainError> {
        if data.len() <= self.chunk_size {
            self.file
                .write_all(data)
                .map_err(|e| EscchainError::Transport(format!("Write failed: {}", e)))?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file
                    .write_all(chunk)
                    .map_err(|e| EscchainError::Transport(format!("Write failed: {}", e)))?;

                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        self.file
            .flush()
            .map_err(|e| EscchainError::Transport(format!("Flush failed: {}", e)))?;
        debug!(bytes = data.len(), "wrote job");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_to_existing_file() {
        let target = NamedTempFile::new().unwrap();
        let mut transport = DeviceTransport::open(target.path()).unwrap();
        transport.write_all(&[0x1B, 0x40, b'h', b'i', 0x0A]).unwrap();
        drop(transport);

        assert_eq!(fs::read(target.path()).unwrap(), vec![0x1B, 0x40, b'h', b'i', 0x0A]);
    }

    #[test]
    fn test_chunked_write_is_complete() {
        let target = NamedTempFile::new().unwrap();
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();

        let mut transport = DeviceTransport::open(target.path()).unwrap();
        transport.set_chunk_size(1000);
        transport.set_chunk_delay(Duration::ZERO);
        transport.write_all(&data).unwrap();
        drop(transport);

        assert_eq!(fs::read(target.path()).unwrap(), data);
    }

    #[test]
    fn test_open_missing_device_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let node = dir.path().join("lp0");

        let result = DeviceTransport::open(&node);
        assert!(matches!(result, Err(EscchainError::Transport(_))));
        assert!(!node.exists());
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = DeviceTransport::open(dir.path().join("usb").join("lp0"));
        assert!(matches!(result, Err(EscchainError::Transport(_))));
    }
}
