//! # Printer Transport Layer
//!
//! This module provides communication backends for sending data to printers.
//!
//! ## Available Transports
//!
//! - [`device`]: Raw writes to a device node (USB line printer, serial port, file)

pub mod device;

pub use device::DeviceTransport;
