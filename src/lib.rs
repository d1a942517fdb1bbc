//! # MIPI RFFE Command Encoder
//!
//! Encoding and validation of MIPI RFFE (RF Front-End) register-write
//! commands for digital-pattern instruments.
//!
//! RFFE is a two-wire serial bus used to configure RF front-end devices
//! such as power amplifiers and antenna switches. This library provides:
//!
//! - Range validation of register-write requests per command kind
//! - Register 0 Write frame assembly with odd parity
//! - Serialization into one element per bit, most significant bit first
//! - A transmitter trait for handing frames to instrument drivers
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use mipi_rffe_encoder::{encode, CommandKind, RegisterWriteRequest};
//!
//! let request = RegisterWriteRequest::single(0x0, 0x0000, 0x00);
//! let frame = encode(&request, CommandKind::RegisterZeroWrite)?;
//! assert_eq!(frame.bits(), &[0u8; 12]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod transmit;

pub use crate::core::{CommandKind, RegisterWriteRequest};
pub use encoder::{encode, validate};
pub use error::{EncodeError, Field, Result};
pub use frame::EncodedFrame;
pub use transmit::{PatternTransmitter, TransmitConfig, TransmitConfigBuilder, Trigger};

/// MIPI RFFE protocol constants
pub mod consts {
    /// Highest 4-bit slave address
    pub const SLAVE_ADDRESS_MAX: u8 = 15;

    /// Width of the slave address field in bits
    pub const SLAVE_ADDRESS_BITS: u32 = 4;

    /// Width of the Register 0 Write data field in bits
    pub const DATA_FIELD_BITS: u32 = 7;

    /// Mask selecting the data bits of a Register 0 Write
    pub const DATA_FIELD_MASK: u8 = 0x7F;

    /// Transmitted bits in a Register 0 Write: address, data, parity
    pub const REG0_WRITE_FRAME_BITS: u32 = SLAVE_ADDRESS_BITS + DATA_FIELD_BITS + 1;

    /// Pin name used by the reference pattern files for SDATA
    pub const DEFAULT_DATA_PIN: &str = "RFFEDATA";
}
