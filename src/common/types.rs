// src/common/types.rs

use core::fmt;

// --- Measurement Results ---

/// Raw VOC and NOx ticks from one measure-raw command.
///
/// These are unprocessed counts; turning them into a gas index is the job of a
/// separate algorithm stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RawSignals {
    pub sraw_voc: u16,
    pub sraw_nox: u16,
}

impl RawSignals {
    pub(crate) fn from_words(words: [u16; 2]) -> Self {
        RawSignals { sraw_voc: words[0], sraw_nox: words[1] }
    }
}

// --- Identification ---

/// The 48-bit chip serial number, as the three words the sensor returns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SerialId(pub [u16; 3]);

impl SerialId {
    pub fn words(&self) -> [u16; 3] {
        self.0
    }

    /// The serial number as a single integer, first word most significant.
    pub fn as_u64(&self) -> u64 {
        (u64::from(self.0[0]) << 32) | (u64::from(self.0[1]) << 16) | u64::from(self.0[2])
    }
}

impl fmt::Display for SerialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}{:04X}{:04X}", self.0[0], self.0[1], self.0[2])
    }
}

impl From<SerialId> for u64 {
    fn from(value: SerialId) -> Self {
        value.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String as HeaplessString;

    #[test]
    fn test_serial_id_as_u64() {
        let id = SerialId([0x1234, 0x5678, 0x9ABC]);
        assert_eq!(id.as_u64(), 0x1234_5678_9ABC);
        assert_eq!(u64::from(id), 0x1234_5678_9ABC);
    }

    #[test]
    fn test_serial_id_display() {
        let mut out = HeaplessString::<16>::new();
        write!(out, "{}", SerialId([0x0001, 0xABCD, 0x00FF])).unwrap();
        assert_eq!(out.as_str(), "0001ABCD00FF");
    }

    #[test]
    fn test_raw_signals_from_words() {
        let raw = RawSignals::from_words([0x6A5C, 0x3F12]);
        assert_eq!(raw.sraw_voc, 0x6A5C);
        assert_eq!(raw.sraw_nox, 0x3F12);
    }
}
