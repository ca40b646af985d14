// src/common/crc.rs

use super::error::Sgp41Error;
use crc::{Algorithm, Crc};

/// Sensirion CRC-8 used on every 16-bit word exchanged with the SGP41.
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789"), catalogued as CRC-8/NRSC-5
/// Residue: 0x00
pub const SENSIRION_CRC8: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SENSIRION_CRC8);

/// Size of one CRC-protected word on the wire: two value bytes and the checksum.
pub const WORD_GROUP_LEN: usize = 3;

/// Calculates the Sensirion CRC-8 over `data`.
///
/// The sensor checksums each big-endian word separately, so `data` is normally
/// exactly two bytes.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Encodes a 16-bit parameter word as `[MSB, LSB, CRC]`.
pub fn encode_word(value: u16) -> [u8; WORD_GROUP_LEN] {
    let [msb, lsb] = value.to_be_bytes();
    [msb, lsb, calculate_crc8(&[msb, lsb])]
}

/// Verifies a single `[MSB, LSB, CRC]` group and returns the decoded word.
///
/// `group` is the group's position in the response, reported on mismatch.
///
/// * `Err(Sgp41Error::BufferOverflow)` if `bytes` is not exactly three bytes long.
/// * `Err(Sgp41Error::CrcMismatch)` if the trailer is wrong.
pub fn verify_word_group<E>(bytes: &[u8], group: usize) -> Result<u16, Sgp41Error<E>>
where
    E: core::fmt::Debug,
{
    let &[msb, lsb, expected] = bytes else {
        return Err(Sgp41Error::BufferOverflow { needed: WORD_GROUP_LEN, got: bytes.len() });
    };
    let calculated = calculate_crc8(&[msb, lsb]);
    if calculated == expected {
        Ok(u16::from_be_bytes([msb, lsb]))
    } else {
        Err(Sgp41Error::CrcMismatch { group, expected, calculated })
    }
}

/// Decodes a response block of `N` CRC-protected words.
///
/// Every group is checked before anything is returned, so a single bad trailer
/// rejects the whole block.
///
/// * `Err(Sgp41Error::BufferOverflow)` if `response` is not exactly `N * 3` bytes.
/// * `Err(Sgp41Error::CrcMismatch)` for the first group whose trailer is wrong.
pub fn decode_words<E, const N: usize>(response: &[u8]) -> Result<[u16; N], Sgp41Error<E>>
where
    E: core::fmt::Debug,
{
    let needed = N * WORD_GROUP_LEN;
    if response.len() != needed {
        return Err(Sgp41Error::BufferOverflow { needed, got: response.len() });
    }
    let mut words = [0u16; N];
    for (index, (group, word)) in response
        .chunks_exact(WORD_GROUP_LEN)
        .zip(words.iter_mut())
        .enumerate()
    {
        *word = verify_word_group::<E>(group, index)?;
    }
    Ok(words)
}
