//! Error types for RFFE command encoding

use thiserror::Error;

/// Result type for RFFE encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Request field checked during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// 4-bit target device address
    SlaveAddress,
    /// Register address
    RegisterAddress,
    /// Number of bytes to write
    ByteCount,
    /// Write payload
    WriteData,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::SlaveAddress => write!(f, "slave address"),
            Field::RegisterAddress => write!(f, "register address"),
            Field::ByteCount => write!(f, "byte count"),
            Field::WriteData => write!(f, "write data length"),
        }
    }
}

/// Error types encountered while validating, encoding or transmitting commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A request field lies outside the range its command kind allows
    #[error("{field} {value} out of range [{min}, {max}]")]
    FieldOutOfRange {
        field: Field,
        value: u64,
        min: u64,
        max: u64,
    },

    /// Command kind name has no supported variant
    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    /// Operation exists in the API but has no implementation
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Transmission settings are unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The pattern instrument rejected or failed the transfer
    #[error("Transmit error: {0}")]
    Transmit(String),
}

impl EncodeError {
    /// Create a new FieldOutOfRange error
    pub fn out_of_range(field: Field, value: u64, min: u64, max: u64) -> Self {
        EncodeError::FieldOutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Create a new UnsupportedCommand error
    pub fn unsupported_command(name: impl Into<String>) -> Self {
        EncodeError::UnsupportedCommand(name.into())
    }

    /// Create a new InvalidConfig error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        EncodeError::InvalidConfig(msg.into())
    }

    /// Create a new Transmit error
    pub fn transmit(msg: impl Into<String>) -> Self {
        EncodeError::Transmit(msg.into())
    }

    /// The field that failed validation, if this is a range error
    pub fn field(&self) -> Option<Field> {
        match self {
            EncodeError::FieldOutOfRange { field, .. } => Some(*field),
            _ => None,
        }
    }
}
