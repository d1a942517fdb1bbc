//! Bit-level frame types for RFFE commands

use bitfield::bitfield;

use crate::consts::REG0_WRITE_FRAME_BITS;

bitfield! {
    /// Packed Register 0 Write frame as transmitted
    ///
    /// Layout (bit 11 is sent first):
    /// - Bits 11-8: slave address
    /// - Bits 7-1: data
    /// - Bit 0: parity
    ///
    /// The command bit that sits between address and data in the protocol
    /// is implied and not part of the transmitted word.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct Reg0WriteWord(u16);
    impl Debug;
    pub u8, slave_address, set_slave_address: 11, 8;
    pub u8, data, set_data: 7, 1;
    pub parity, set_parity: 0;
}

impl Reg0WriteWord {
    /// Assemble a word from its fields, computing parity over the command bit as well
    pub fn assemble(slave_address: u8, data: u8) -> Self {
        let mut word = Reg0WriteWord(0);
        word.set_slave_address(slave_address & 0x0F);
        word.set_data(data & 0x7F);
        word.set_parity(parity_bit(word.parity_input()) == 1);
        word
    }

    /// Bits covered by parity: address, command bit, data
    ///
    /// Returned as a 12-bit value with the command bit at bit 7.
    pub fn parity_input(&self) -> u16 {
        ((self.slave_address() as u16) << 8) | 0x80 | self.data() as u16
    }

    /// Raw 12-bit value
    pub fn value(&self) -> u16 {
        self.0 & 0x0FFF
    }
}

/// Odd parity bit for a packed value
///
/// Returns 1 when the number of set bits is even, so that the total
/// including the parity bit is odd.
pub fn parity_bit(bits: u16) -> u8 {
    if bits.count_ones() % 2 == 0 {
        1
    } else {
        0
    }
}

/// A serialized command ready for transmission
///
/// One element per bit, each 0 or 1, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedFrame {
    bits: Vec<u8>,
    byte_count: usize,
}

impl EncodedFrame {
    /// Serialize a Register 0 Write word
    pub fn from_word(word: Reg0WriteWord, byte_count: usize) -> Self {
        let value = word.value();
        let bits = (0..REG0_WRITE_FRAME_BITS)
            .rev()
            .map(|i| ((value >> i) & 1) as u8)
            .collect();
        EncodedFrame { bits, byte_count }
    }

    /// Bits in transmission order
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Byte count the instrument sequencer needs alongside the bits
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Number of bits in the frame
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the frame carries no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Consume the frame, returning its bits
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }
}

impl std::fmt::Display for EncodedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}
