// src/common/frame.rs

use arrayvec::ArrayVec;

use super::{crc::encode_word, error::Sgp41Error};

/// Largest transaction the transmit side accepts: 2 code bytes + 3 bytes per word.
pub const MAX_FRAME_LEN: usize = 16;

/// The bytes placed on the wire for one command.
///
/// Built on a fixed-capacity buffer; every push is length-checked, so a frame can
/// never outgrow `MAX_FRAME_LEN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    bytes: ArrayVec<u8, MAX_FRAME_LEN>,
}

impl CommandFrame {
    /// Starts a frame with the big-endian 16-bit command code or register address.
    pub fn new(code: u16) -> Self {
        let mut bytes = ArrayVec::new();
        // Capacity is well above two bytes
        bytes.extend(code.to_be_bytes());
        CommandFrame { bytes }
    }

    /// A frame consisting of a single raw byte (the general-call reset).
    pub fn single_byte(byte: u8) -> Self {
        let mut bytes = ArrayVec::new();
        bytes.push(byte);
        CommandFrame { bytes }
    }

    /// Appends a parameter word followed by its CRC8.
    pub fn push_word<E>(&mut self, value: u16) -> Result<(), Sgp41Error<E>>
    where
        E: core::fmt::Debug,
    {
        self.push_bytes(&encode_word(value))
    }

    /// Appends already-encoded bytes (pre-computed parameter groups or a raw register payload).
    pub fn push_bytes<E>(&mut self, data: &[u8]) -> Result<(), Sgp41Error<E>>
    where
        E: core::fmt::Debug,
    {
        self.bytes
            .try_extend_from_slice(data)
            .map_err(|_| Sgp41Error::BufferOverflow {
                needed: self.bytes.len() + data.len(),
                got: MAX_FRAME_LEN,
            })
    }

    /// Builds `code` followed by `params` in one step.
    pub fn with_params<E>(code: u16, params: &[u8]) -> Result<Self, Sgp41Error<E>>
    where
        E: core::fmt::Debug,
    {
        let mut frame = Self::new(code);
        frame.push_bytes::<E>(params)?;
        Ok(frame)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
