// src/driver/mod.rs

use crate::common::{
    error::{Binding, Sgp41Error},
    hal_traits::{Sgp41DebugPrint, Sgp41Iic, Sgp41Timer},
};

mod io_helpers;
mod operations;
mod transaction;

#[cfg(test)]
pub(crate) mod mock;

/// One SGP41 on one bus.
///
/// A handle starts empty. Link the bus, the delay and the diagnostic sink, then
/// call [`Sgp41::init`]. Every other operation fails with `NotReady` until `init`
/// has succeeded, and again after [`Sgp41::deinit`].
#[derive(Debug)]
pub struct Sgp41<IF, T, P> {
    iic: Option<IF>,
    timer: Option<T>,
    debug: Option<P>,
    inited: bool,
}

impl<IF, T, P> Sgp41<IF, T, P> {
    /// Creates an empty, uninitialised handle.
    pub const fn new() -> Self {
        Sgp41 {
            iic: None,
            timer: None,
            debug: None,
            inited: false,
        }
    }

    /// Creates a handle with all three capabilities linked. `init` is still required.
    pub fn with_links(iic: IF, timer: T, debug: P) -> Self {
        Sgp41 {
            iic: Some(iic),
            timer: Some(timer),
            debug: Some(debug),
            inited: false,
        }
    }

    /// Links the I2C bus (init, deinit, write command, read command).
    pub fn link_iic(&mut self, iic: IF) -> &mut Self {
        self.iic = Some(iic);
        self
    }

    /// Links the millisecond delay.
    pub fn link_delay(&mut self, timer: T) -> &mut Self {
        self.timer = Some(timer);
        self
    }

    /// Links the diagnostic sink.
    pub fn link_debug_print(&mut self, debug: P) -> &mut Self {
        self.debug = Some(debug);
        self
    }

    /// True between a successful `init` and a successful `deinit`.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.inited
    }

    /// Gives the linked capabilities back. The bus is not closed; call `deinit` first.
    pub fn release(self) -> (Option<IF>, Option<T>, Option<P>) {
        (self.iic, self.timer, self.debug)
    }

    fn missing_binding(&self) -> Option<Binding> {
        if self.debug.is_none() {
            Some(Binding::DebugPrint)
        } else if self.iic.is_none() {
            Some(Binding::Iic)
        } else if self.timer.is_none() {
            Some(Binding::Delay)
        } else {
            None
        }
    }
}

impl<IF, T, P> Default for Sgp41<IF, T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<IF, T, P> Sgp41<IF, T, P>
where
    IF: Sgp41Iic,
    T: Sgp41Timer,
    P: Sgp41DebugPrint,
{
    /// Validates the links and opens the bus.
    ///
    /// * `Err(Sgp41Error::MissingBinding)` if a capability is unlinked; no bus call is made.
    /// * `Err(Sgp41Error::TransportInitFailed)` if `iic_init` fails.
    pub fn init(&mut self) -> Result<(), Sgp41Error<IF::Error>> {
        if let Some(binding) = self.missing_binding() {
            self.report(format_args!("sgp41: {} is null.", binding));
            return Err(Sgp41Error::MissingBinding(binding));
        }

        let result = self.bus()?.iic_init();
        if let Err(e) = result {
            self.report(format_args!("sgp41: iic init failed."));
            return Err(Sgp41Error::TransportInitFailed(e));
        }
        self.inited = true;
        log::debug!("sgp41: initialised");

        Ok(())
    }

    /// Turns the heater off, then closes the bus.
    ///
    /// If the heater cannot be turned off the bus is left open and the handle stays
    /// ready, so the caller can retry or escalate.
    pub fn deinit(&mut self) -> Result<(), Sgp41Error<IF::Error>> {
        self.check_ready()?;

        if let Err(e) = self.turn_heater_off() {
            self.report(format_args!("sgp41: turn heater off failed."));
            return Err(match e {
                Sgp41Error::TransportIo(io) => Sgp41Error::HeaterOffFailed(io),
                other => other,
            });
        }

        let result = self.bus()?.iic_deinit();
        if let Err(e) = result {
            self.report(format_args!("sgp41: iic close failed."));
            return Err(Sgp41Error::TransportDeinitFailed(e));
        }
        self.inited = false;
        log::debug!("sgp41: closed");

        Ok(())
    }
}
