//! Boundary between encoded frames and pattern instruments
//!
//! Hardware back ends implement [`PatternTransmitter`]; this crate never
//! talks to an instrument itself.

use log::debug;

use crate::core::{CommandKind, RegisterWriteRequest};
use crate::encoder;
use crate::error::{EncodeError, Result};
use crate::frame::EncodedFrame;

/// When the instrument starts shifting bits out
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// Start as soon as the frame is loaded
    #[default]
    Immediate,
    /// Wait for the named trigger condition
    Conditional(String),
}

/// Where and how a frame is put on the bus
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransmitConfig {
    /// Physical pin the bits are shifted onto
    pub pin: String,
    /// Start condition
    pub trigger: Trigger,
    /// Number of response bits to capture, if any
    pub capture_width: Option<usize>,
}

/// Something that can shift an encoded frame onto a pin, one bit per clock
pub trait PatternTransmitter {
    /// Send `frame` according to `config`
    ///
    /// Bits go out most significant first. When `config.capture_width` is
    /// set the captured response bits are returned.
    fn send(&mut self, frame: &EncodedFrame, config: &TransmitConfig) -> Result<Option<Vec<u8>>>;
}

/// Validate, encode and transmit a register write
///
/// The transmitter is never called for an invalid request.
pub fn write_register<T: PatternTransmitter + ?Sized>(
    transmitter: &mut T,
    request: &RegisterWriteRequest,
    kind: CommandKind,
    config: &TransmitConfig,
) -> Result<Option<Vec<u8>>> {
    let frame = encoder::encode(request, kind)?;
    debug!(
        "Sending {} ({} bits) on pin {} with trigger {:?}",
        kind,
        frame.len(),
        config.pin,
        config.trigger
    );
    transmitter.send(&frame, config)
}

/// Read a register over RFFE
///
/// Register reads are not supported; this always fails.
pub fn read_register<T: PatternTransmitter + ?Sized>(
    _transmitter: &mut T,
    _slave_address: u8,
    _register_address: u32,
    _config: &TransmitConfig,
) -> Result<Vec<u8>> {
    Err(EncodeError::NotImplemented("register read"))
}

/// Builder for [`TransmitConfig`]
pub struct TransmitConfigBuilder {
    pin: String,
    trigger: Trigger,
    capture_width: Option<usize>,
}

impl TransmitConfigBuilder {
    /// Create a new builder for a pin, sending immediately with no capture
    pub fn new(pin: impl Into<String>) -> Self {
        TransmitConfigBuilder {
            pin: pin.into(),
            trigger: Trigger::Immediate,
            capture_width: None,
        }
    }

    /// Set the trigger
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Capture `width` response bits after the frame
    pub fn with_capture(mut self, width: usize) -> Self {
        self.capture_width = Some(width);
        self
    }

    /// Build the config
    pub fn build(self) -> Result<TransmitConfig> {
        if self.pin.trim().is_empty() {
            return Err(EncodeError::invalid_config("pin name is empty"));
        }
        if let Trigger::Conditional(name) = &self.trigger {
            if name.trim().is_empty() {
                return Err(EncodeError::invalid_config("trigger name is empty"));
            }
        }
        if self.capture_width == Some(0) {
            return Err(EncodeError::invalid_config("capture width must be positive"));
        }

        Ok(TransmitConfig {
            pin: self.pin,
            trigger: self.trigger,
            capture_width: self.capture_width,
        })
    }
}
