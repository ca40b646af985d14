// src/common/hal_traits.rs

use core::fmt::{self, Debug};

/// Abstraction for the I2C bus the driver talks through.
///
/// Addresses are 7-bit. All calls are blocking: they return once the transfer has
/// finished or failed.
pub trait Sgp41Iic {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// Opens the bus. Called exactly once by `Sgp41::init`.
    fn iic_init(&mut self) -> Result<(), Self::Error>;

    /// Closes the bus. Called by `Sgp41::deinit` after the heater is off.
    fn iic_deinit(&mut self) -> Result<(), Self::Error>;

    /// Writes `buf` to the device at `addr` in a single transfer.
    fn iic_write_cmd(&mut self, addr: u8, buf: &[u8]) -> Result<(), Self::Error>;

    /// Reads exactly `buf.len()` bytes from the device at `addr`.
    fn iic_read_cmd(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Abstraction for the blocking delay used between command and read.
pub trait Sgp41Timer {
    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Diagnostic sink. Fire-and-forget; nothing it does is consulted by the driver.
pub trait Sgp41DebugPrint {
    fn debug_print(&mut self, args: fmt::Arguments<'_>);
}

impl<F> Sgp41DebugPrint for F
where
    F: FnMut(fmt::Arguments<'_>),
{
    fn debug_print(&mut self, args: fmt::Arguments<'_>) {
        self(args)
    }
}

/// Sink that forwards driver diagnostics to the `log` facade at info level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogDebugPrint;

impl Sgp41DebugPrint for LogDebugPrint {
    fn debug_print(&mut self, args: fmt::Arguments<'_>) {
        log::info!("{}", args);
    }
}

/// Adapts an `embedded-hal` 1.0 I2C bus to `Sgp41Iic`.
///
/// The HAL bus is already open when handed over, so init and deinit do nothing.
#[cfg(feature = "impl-generic-hal")]
#[derive(Debug)]
pub struct HalIic<I2C> {
    i2c: I2C,
}

#[cfg(feature = "impl-generic-hal")]
impl<I2C> HalIic<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C) -> Self {
        HalIic { i2c }
    }

    /// Returns the wrapped bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(feature = "impl-generic-hal")]
impl<I2C> Sgp41Iic for HalIic<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn iic_init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn iic_deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn iic_write_cmd(&mut self, addr: u8, buf: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(addr, buf)
    }

    fn iic_read_cmd(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(addr, buf)
    }
}

/// Adapts an `embedded-hal` 1.0 delay provider to `Sgp41Timer`.
#[cfg(feature = "impl-generic-hal")]
#[derive(Debug)]
pub struct HalDelay<D>(pub D);

#[cfg(feature = "impl-generic-hal")]
impl<D> Sgp41Timer for HalDelay<D>
where
    D: embedded_hal::delay::DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String as HeaplessString;

    #[test]
    fn test_closure_is_a_debug_sink() {
        let mut captured = HeaplessString::<64>::new();
        {
            let mut sink = |args: fmt::Arguments<'_>| {
                let _ = captured.write_fmt(args);
            };
            sink.debug_print(format_args!("sgp41: {} failed.", "init"));
        }
        assert_eq!(captured.as_str(), "sgp41: init failed.");
    }

    #[test]
    fn test_log_sink_accepts_arguments() {
        // No logger is installed in tests; this only checks the call is well-formed.
        let mut sink = LogDebugPrint;
        sink.debug_print(format_args!("sgp41: {:#06x}", 0x3682));
    }
}
