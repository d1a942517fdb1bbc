//! Validation and encoding of RFFE register-write commands

use log::{debug, warn};

use crate::consts::{DATA_FIELD_MASK, SLAVE_ADDRESS_MAX};
use crate::core::{CommandKind, RegisterWriteRequest};
use crate::error::{EncodeError, Field, Result};
use crate::frame::{EncodedFrame, Reg0WriteWord};

/// Check a request against the limits of a command kind
///
/// Checks run in order (slave address, register address, byte count,
/// write data length) and the first failure is returned.
pub fn validate(request: &RegisterWriteRequest, kind: CommandKind) -> Result<()> {
    if request.slave_address > SLAVE_ADDRESS_MAX {
        return Err(EncodeError::out_of_range(
            Field::SlaveAddress,
            request.slave_address as u64,
            0,
            SLAVE_ADDRESS_MAX as u64,
        ));
    }

    if request.register_address > kind.upper_address_limit() {
        return Err(EncodeError::out_of_range(
            Field::RegisterAddress,
            request.register_address as u64,
            0,
            kind.upper_address_limit() as u64,
        ));
    }

    if request.byte_count < 1 || request.byte_count > kind.byte_count_limit() {
        return Err(EncodeError::out_of_range(
            Field::ByteCount,
            request.byte_count as u64,
            1,
            kind.byte_count_limit() as u64,
        ));
    }

    if request.write_data.is_empty() {
        return Err(EncodeError::out_of_range(
            Field::WriteData,
            0,
            1,
            u64::MAX,
        ));
    }

    Ok(())
}

/// Validate a request and encode it into a transmittable frame
///
/// A failed validation returns the error and no frame.
pub fn encode(request: &RegisterWriteRequest, kind: CommandKind) -> Result<EncodedFrame> {
    validate(request, kind)?;

    match kind {
        CommandKind::RegisterZeroWrite => Ok(encode_register_zero_write(request)),
    }
}

fn encode_register_zero_write(request: &RegisterWriteRequest) -> EncodedFrame {
    let data = request.write_data[0];

    if request.write_data.len() > 1 {
        warn!(
            "Reg0Write carries one byte, ignoring {} trailing byte(s)",
            request.write_data.len() - 1
        );
    }
    if data & !DATA_FIELD_MASK != 0 {
        warn!(
            "Reg0Write data 0x{:02X} exceeds 7 bits, sending 0x{:02X}",
            data,
            data & DATA_FIELD_MASK
        );
    }

    let word = Reg0WriteWord::assemble(request.slave_address, data);
    let frame = EncodedFrame::from_word(word, 1);
    debug!("Encoded {} as Reg0Write frame {}", request, frame);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIND: CommandKind = CommandKind::RegisterZeroWrite;

    /// Parity input as written out in the protocol: address, command bit, data
    fn parity_input_string(slave_address: u8, data: u8) -> String {
        format!("{:04b}1{:07b}", slave_address, data & 0x7F)
    }

    #[test]
    fn test_encode_all_zero() -> Result<()> {
        let frame = encode(&RegisterWriteRequest::single(0x0, 0, 0x00), KIND)?;
        assert_eq!(frame.bits(), &[0u8; 12]);
        assert_eq!(frame.byte_count(), 1);
        Ok(())
    }

    #[test]
    fn test_encode_full_address() -> Result<()> {
        // 1111 1 0001000 holds six ones, so the parity bit is 1
        let frame = encode(&RegisterWriteRequest::single(0xF, 0, 0x08), KIND)?;
        assert_eq!(frame.bits(), &[1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1]);
        Ok(())
    }

    #[test]
    fn test_encode_matches_bit_string() -> Result<()> {
        for slave_address in 0..=15u8 {
            for data in 0..=255u8 {
                let input = parity_input_string(slave_address, data);
                let parity = if input.matches('1').count() % 2 == 0 { "1" } else { "0" };
                let expected = format!("{:04b}{:07b}{}", slave_address, data & 0x7F, parity);

                let frame = encode(&RegisterWriteRequest::single(slave_address, 0, data), KIND)?;
                assert_eq!(frame.len(), 12);
                assert_eq!(frame.to_string(), expected);
            }
        }
        Ok(())
    }

    #[test]
    fn test_parity_always_odd() -> Result<()> {
        for slave_address in 0..=15u8 {
            for data in 0..=255u8 {
                let frame = encode(&RegisterWriteRequest::single(slave_address, 0, data), KIND)?;
                // command bit is not transmitted but counts toward parity
                assert_eq!((frame.ones() + 1) % 2, 1);
            }
        }
        Ok(())
    }

    #[test]
    fn test_register_address_range() -> Result<()> {
        for register_address in [0, 1, 0x1C, 0x7FFF, 0xFFFF] {
            let frame = encode(&RegisterWriteRequest::single(5, register_address, 0x2A), KIND)?;
            assert_eq!(frame.len(), 12);
        }

        let err = validate(&RegisterWriteRequest::single(5, 0x1_0000, 0x2A), KIND).unwrap_err();
        assert_eq!(
            err,
            EncodeError::FieldOutOfRange {
                field: Field::RegisterAddress,
                value: 0x1_0000,
                min: 0,
                max: 0xFFFF,
            }
        );
        Ok(())
    }

    #[test]
    fn test_slave_address_out_of_range() {
        let err = validate(&RegisterWriteRequest::single(16, 0, 0), KIND).unwrap_err();
        assert_eq!(err.field(), Some(Field::SlaveAddress));
        assert!(encode(&RegisterWriteRequest::single(255, 0, 0), KIND).is_err());
    }

    #[test]
    fn test_byte_count_out_of_range() {
        for byte_count in [0, 2, 8] {
            let req = RegisterWriteRequest::new(1, 0, vec![0x01, 0x02], byte_count);
            let err = validate(&req, KIND).unwrap_err();
            assert_eq!(err.field(), Some(Field::ByteCount));
        }
    }

    #[test]
    fn test_validation_reports_first_failure() {
        // every field is bad; only the slave address is reported
        let req = RegisterWriteRequest::new(99, 0x2_0000, Vec::new(), 0);
        assert_eq!(validate(&req, KIND).unwrap_err().field(), Some(Field::SlaveAddress));

        let req = RegisterWriteRequest::new(1, 0x2_0000, Vec::new(), 0);
        assert_eq!(validate(&req, KIND).unwrap_err().field(), Some(Field::RegisterAddress));
    }

    #[test]
    fn test_empty_write_data() {
        let req = RegisterWriteRequest::new(1, 0, Vec::new(), 1);
        assert_eq!(validate(&req, KIND).unwrap_err().field(), Some(Field::WriteData));
    }

    #[test]
    fn test_trailing_bytes_ignored() -> Result<()> {
        let single = encode(&RegisterWriteRequest::single(3, 0, 0x11), KIND)?;
        let multi = encode(&RegisterWriteRequest::new(3, 0, vec![0x11, 0xFF, 0x42], 1), KIND)?;
        assert_eq!(single, multi);
        Ok(())
    }

    #[test]
    fn test_high_data_bit_dropped() -> Result<()> {
        let low = encode(&RegisterWriteRequest::single(7, 0, 0x25), KIND)?;
        let high = encode(&RegisterWriteRequest::single(7, 0, 0xA5), KIND)?;
        assert_eq!(low, high);
        Ok(())
    }

    #[test]
    fn test_encode_deterministic() -> Result<()> {
        let req = RegisterWriteRequest::single(9, 0x1234, 0x5A);
        assert_eq!(encode(&req, KIND)?, encode(&req, KIND)?);
        Ok(())
    }
}
