// src/common/command.rs

//! SGP41 command catalogue.
//!
//! Every device-addressed command is a 16-bit big-endian code, optionally followed by
//! CRC-protected parameter words. Soft reset is the exception: it is the single byte
//! `0x06` sent to the I2C general-call address.

use core::fmt;
use core::time::Duration;

use super::timing;

/// Fixed 7-bit I2C address of the SGP41.
pub const SGP41_ADDRESS: u8 = 0x59;

/// I2C general-call address, used only by soft reset.
pub const GENERAL_CALL_ADDRESS: u8 = 0x00;

/// Compensation parameters sent when the caller supplies none.
///
/// These are the encoded 50 %RH (`0x8000`) and 25 degC (`0x6666`) words with their
/// CRC bytes, sent verbatim.
pub const DEFAULT_COMPENSATION: [u8; 6] = [0x80, 0x00, 0xA2, 0x66, 0x66, 0x93];

/// Represents an SGP41 command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Execute Conditioning (`0x2612`) - heats the NOx hotplate, returns raw VOC.
    ExecuteConditioning,
    /// Measure Raw (`0x2619`) - returns raw VOC and NOx counts.
    MeasureRaw,
    /// Execute Self Test (`0x280E`) - returns the chip-defined test result word.
    ExecuteSelfTest,
    /// Turn Heater Off (`0x3615`) - returns the sensor to idle.
    TurnHeaterOff,
    /// Get Serial Number (`0x3682`) - returns three words forming a 48-bit id.
    GetSerialId,
    /// Soft Reset (`0x06` general call) - resets every device on the bus that honours it.
    SoftReset,
}

impl Command {
    /// The command code placed at the start of the frame.
    pub const fn code(self) -> u16 {
        match self {
            Command::ExecuteConditioning => 0x2612,
            Command::MeasureRaw => 0x2619,
            Command::ExecuteSelfTest => 0x280E,
            Command::TurnHeaterOff => 0x3615,
            Command::GetSerialId => 0x3682,
            Command::SoftReset => 0x0006,
        }
    }

    /// Wait between the write and the read (or the next command).
    pub const fn settle_time(self) -> Duration {
        match self {
            Command::ExecuteConditioning | Command::MeasureRaw => timing::MEASURE_RAW_SETTLE,
            Command::ExecuteSelfTest => timing::SELF_TEST_SETTLE,
            Command::TurnHeaterOff => timing::HEATER_OFF_SETTLE,
            Command::GetSerialId => timing::SERIAL_ID_SETTLE,
            Command::SoftReset => timing::SOFT_RESET_SETTLE,
        }
    }

    /// Number of CRC-protected words in the response.
    pub const fn response_words(self) -> usize {
        match self {
            Command::ExecuteConditioning | Command::ExecuteSelfTest => 1,
            Command::MeasureRaw => 2,
            Command::GetSerialId => 3,
            Command::TurnHeaterOff | Command::SoftReset => 0,
        }
    }

    /// Number of parameter words the command carries.
    pub const fn parameter_words(self) -> usize {
        match self {
            Command::ExecuteConditioning | Command::MeasureRaw => 2,
            _ => 0,
        }
    }

    /// I2C address the command is sent to.
    pub const fn address(self) -> u8 {
        match self {
            Command::SoftReset => GENERAL_CALL_ADDRESS,
            _ => SGP41_ADDRESS,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::ExecuteConditioning => "execute conditioning",
            Command::MeasureRaw => "measure raw",
            Command::ExecuteSelfTest => "execute self test",
            Command::TurnHeaterOff => "turn heater off",
            Command::GetSerialId => "get serial id",
            Command::SoftReset => "soft reset",
        };
        write!(f, "{} ({:#06x})", name, self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::crc::encode_word;
    use core::fmt::Write;
    use heapless::String as HeaplessString;

    #[test]
    fn test_command_codes() {
        assert_eq!(Command::ExecuteConditioning.code(), 0x2612);
        assert_eq!(Command::MeasureRaw.code(), 0x2619);
        assert_eq!(Command::ExecuteSelfTest.code(), 0x280E);
        assert_eq!(Command::TurnHeaterOff.code(), 0x3615);
        assert_eq!(Command::GetSerialId.code(), 0x3682);
        assert_eq!(Command::SoftReset.code(), 0x0006);
    }

    #[test]
    fn test_settle_times() {
        assert_eq!(Command::ExecuteConditioning.settle_time(), Duration::from_millis(50));
        assert_eq!(Command::MeasureRaw.settle_time(), Duration::from_millis(50));
        assert_eq!(Command::ExecuteSelfTest.settle_time(), Duration::from_millis(320));
        assert_eq!(Command::TurnHeaterOff.settle_time(), Duration::from_millis(1));
        assert_eq!(Command::GetSerialId.settle_time(), Duration::from_millis(1));
        assert_eq!(Command::SoftReset.settle_time(), Duration::from_millis(5));
    }

    #[test]
    fn test_response_shapes() {
        assert_eq!(Command::ExecuteConditioning.response_words(), 1);
        assert_eq!(Command::MeasureRaw.response_words(), 2);
        assert_eq!(Command::ExecuteSelfTest.response_words(), 1);
        assert_eq!(Command::GetSerialId.response_words(), 3);
        assert_eq!(Command::TurnHeaterOff.response_words(), 0);
        assert_eq!(Command::SoftReset.response_words(), 0);
    }

    #[test]
    fn test_addresses() {
        assert_eq!(Command::MeasureRaw.address(), SGP41_ADDRESS);
        assert_eq!(Command::SoftReset.address(), GENERAL_CALL_ADDRESS);
    }

    #[test]
    fn test_default_compensation_is_encoded_defaults() {
        let rh = encode_word(0x8000);
        let t = encode_word(0x6666);
        assert_eq!(&DEFAULT_COMPENSATION[..3], &rh);
        assert_eq!(&DEFAULT_COMPENSATION[3..], &t);
    }

    #[test]
    fn test_display() {
        let mut out = HeaplessString::<32>::new();
        write!(out, "{}", Command::GetSerialId).unwrap();
        assert_eq!(out.as_str(), "get serial id (0x3682)");
    }
}
