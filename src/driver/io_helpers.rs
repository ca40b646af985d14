// src/driver/io_helpers.rs

use super::Sgp41;
use crate::common::{
    error::{Binding, Sgp41Error},
    hal_traits::{Sgp41DebugPrint, Sgp41Iic, Sgp41Timer},
};
use core::fmt;

impl<IF, T, P> Sgp41<IF, T, P>
where
    IF: Sgp41Iic,
    T: Sgp41Timer,
    P: Sgp41DebugPrint,
{
    /// Fails with `NotReady` unless `init` has succeeded. Touches nothing.
    pub(super) fn check_ready(&self) -> Result<(), Sgp41Error<IF::Error>> {
        if self.inited {
            Ok(())
        } else {
            log::debug!("sgp41: handle is not initialised");
            Err(Sgp41Error::NotReady)
        }
    }

    /// Sends a failure message to the linked sink (if any) and to `log`.
    pub(super) fn report(&mut self, args: fmt::Arguments<'_>) {
        log::warn!("{}", args);
        if let Some(debug) = self.debug.as_mut() {
            debug.debug_print(args);
        }
    }

    /// The linked bus. Always present once the handle is ready.
    pub(super) fn bus(&mut self) -> Result<&mut IF, Sgp41Error<IF::Error>> {
        self.iic.as_mut().ok_or(Sgp41Error::MissingBinding(Binding::Iic))
    }

    /// Blocks on the linked delay.
    pub(super) fn delay_ms(&mut self, ms: u32) {
        if let Some(timer) = self.timer.as_mut() {
            timer.delay_ms(ms);
        }
    }
}
