// src/common/error.rs

use core::fmt;

/// Status code returned by the C-style API for a successful operation.
pub const STATUS_OK: u8 = 0;
/// Status code for a failed transaction (bus I/O, CRC or frame length).
pub const STATUS_FAILED: u8 = 1;
/// Status code for an absent handle or output location.
pub const STATUS_NULL_HANDLE: u8 = 2;
/// Status code for a handle that is not initialised, or for link / bus init-deinit failures.
pub const STATUS_NOT_READY: u8 = 3;
/// Status code for a heater-off failure while de-initialising.
pub const STATUS_HEATER_OFF_FAILED: u8 = 4;

/// The capability slots a handle must have linked before `init` succeeds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Binding {
    /// The diagnostic sink (`link_debug_print`).
    DebugPrint,
    /// The I2C bus: init, deinit, write command and read command (`link_iic`).
    Iic,
    /// The millisecond delay (`link_delay`).
    Delay,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::DebugPrint => f.write_str("debug_print"),
            Binding::Iic => f.write_str("iic"),
            Binding::Delay => f.write_str("delay_ms"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Sgp41Error<E = ()>
where
    E: core::fmt::Debug, // Debug for the generic bus error
{
    /// A required handle or output reference was absent.
    ///
    /// The typed API cannot produce this (references are never null); the variant
    /// keeps the status-code table complete for callers bridging to C.
    #[error("Handle is null")]
    NullHandle,

    /// Operation attempted before `init` or after `deinit`.
    #[error("Handle is not initialised")]
    NotReady,

    /// `init` attempted with a capability left unlinked.
    #[error("Missing binding: {0} is not linked")]
    MissingBinding(Binding),

    /// The linked bus reported failure from `iic_init`.
    #[error("I2C init failed: {0:?}")]
    TransportInitFailed(E),

    /// The linked bus reported failure from `iic_deinit`.
    #[error("I2C deinit failed: {0:?}")]
    TransportDeinitFailed(E),

    /// A write or read on the linked bus failed mid-transaction.
    #[error("I2C transfer failed: {0:?}")]
    TransportIo(E),

    /// A response group's CRC8 trailer did not match its value bytes.
    #[error("CRC mismatch in group {group}: expected {expected:#04x}, calculated {calculated:#04x}")]
    CrcMismatch { group: usize, expected: u8, calculated: u8 },

    /// A frame would exceed the transmit buffer.
    #[error("Buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },

    /// `deinit` could not turn the heater off; the bus was left open.
    #[error("Turning the heater off failed: {0:?}")]
    HeaterOffFailed(E),
}

impl<E: core::fmt::Debug> Sgp41Error<E> {
    /// Maps the error onto the closed status-code set of the C-style API.
    pub fn status_code(&self) -> u8 {
        match self {
            Sgp41Error::TransportIo(_)
            | Sgp41Error::CrcMismatch { .. }
            | Sgp41Error::BufferOverflow { .. } => STATUS_FAILED,
            Sgp41Error::NullHandle => STATUS_NULL_HANDLE,
            Sgp41Error::NotReady
            | Sgp41Error::MissingBinding(_)
            | Sgp41Error::TransportInitFailed(_)
            | Sgp41Error::TransportDeinitFailed(_) => STATUS_NOT_READY,
            Sgp41Error::HeaterOffFailed(_) => STATUS_HEATER_OFF_FAILED,
        }
    }
}

/// Status code of a driver result: `STATUS_OK` or the error's code.
pub fn status_of<T, E: core::fmt::Debug>(result: &Result<T, Sgp41Error<E>>) -> u8 {
    match result {
        Ok(_) => STATUS_OK,
        Err(e) => e.status_code(),
    }
}
