//! Core request and command types for MIPI RFFE register writes

use crate::error::{EncodeError, Result};

/// Supported RFFE command kinds
///
/// Each variant carries static limits; there is no per-variant behavior
/// beyond the table below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// Register 0 Write: one 7-bit data value sent to register 0
    RegisterZeroWrite,
}

impl CommandKind {
    /// Every supported command kind
    pub const ALL: [CommandKind; 1] = [CommandKind::RegisterZeroWrite];

    /// Maximum number of bytes a single command may carry
    pub fn byte_count_limit(&self) -> usize {
        match self {
            CommandKind::RegisterZeroWrite => 1,
        }
    }

    /// Highest register address the command accepts
    pub fn upper_address_limit(&self) -> u32 {
        match self {
            CommandKind::RegisterZeroWrite => 0xFFFF,
        }
    }

    /// Name of the frame as used by pattern files and instrument sequencers
    pub fn frame_name(&self) -> &'static str {
        match self {
            CommandKind::RegisterZeroWrite => "Reg0Write",
        }
    }

    /// Look up a command kind by its frame name
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.frame_name() == name)
            .ok_or_else(|| EncodeError::unsupported_command(name))
    }
}

impl std::str::FromStr for CommandKind {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.frame_name())
    }
}

/// A register write addressed to one device on the RFFE bus
///
/// Fields are stored unvalidated; see [`crate::encoder::validate`].
/// Only the first byte of `write_data` is used by
/// [`CommandKind::RegisterZeroWrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterWriteRequest {
    /// Target device address (valid range 0-15)
    pub slave_address: u8,
    /// Register to write
    pub register_address: u32,
    /// Payload bytes
    pub write_data: Vec<u8>,
    /// Number of payload bytes the caller intends to write
    pub byte_count: usize,
}

impl RegisterWriteRequest {
    /// Create a new request
    pub fn new(
        slave_address: u8,
        register_address: u32,
        write_data: impl Into<Vec<u8>>,
        byte_count: usize,
    ) -> Self {
        RegisterWriteRequest {
            slave_address,
            register_address,
            write_data: write_data.into(),
            byte_count,
        }
    }

    /// Create a single-byte write, the shape Register 0 Write expects
    pub fn single(slave_address: u8, register_address: u32, data: u8) -> Self {
        Self::new(slave_address, register_address, vec![data], 1)
    }

    /// First payload byte, the only one a Register 0 Write carries
    pub fn first_byte(&self) -> Option<u8> {
        self.write_data.first().copied()
    }
}

impl std::fmt::Display for RegisterWriteRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SA-{} reg=0x{:04X} data={:02X?} count={}",
            self.slave_address, self.register_address, self.write_data, self.byte_count
        )
    }
}
