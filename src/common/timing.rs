// src/common/timing.rs

use core::time::Duration;

// Settling times are the minimum wait between a command write and the read of its
// result. The linked delay must block for at least this long; shorter waits read
// stale or incomplete data.

// === Measurement ===

/// Execute-conditioning and measure-raw: one VOC/NOx conversion.
pub const MEASURE_RAW_SETTLE: Duration = Duration::from_millis(50);
/// Built-in self test of the hotplates.
pub const SELF_TEST_SETTLE: Duration = Duration::from_millis(320);

// === Maintenance ===

/// Serial-number readout.
pub const SERIAL_ID_SETTLE: Duration = Duration::from_millis(1);
/// Pause after turning the heater off, before the bus is used again.
pub const HEATER_OFF_SETTLE: Duration = Duration::from_millis(1);
/// Time for the sensor to come back after a general-call reset.
pub const SOFT_RESET_SETTLE: Duration = Duration::from_millis(5);

// === Register access ===

/// Default settle time for the generic register read accessor.
pub const REGISTER_READ_SETTLE: Duration = Duration::from_millis(320);

/// Converts a settle time to the whole milliseconds passed to the linked delay.
///
/// Rounds up, so the delay never undershoots, and saturates at `u32::MAX`.
#[inline]
pub const fn as_delay_ms(settle: Duration) -> u32 {
    let ms = settle.as_nanos().div_ceil(1_000_000);
    if ms > u32::MAX as u128 {
        u32::MAX
    } else {
        ms as u32
    }
}
