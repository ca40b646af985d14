// src/lib.rs

//! Driver for the Sensirion SGP41 VOC and NOx sensor over I2C.
//!
//! The bus, the millisecond delay and a diagnostic sink are supplied by the caller
//! through [`Sgp41Iic`], [`Sgp41Timer`] and [`Sgp41DebugPrint`]. Raw signals are
//! returned as ticks; gas-index processing is out of scope.

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{info, ChipInfo, RawSignals, SerialId, Sgp41DebugPrint, Sgp41Error, Sgp41Iic, Sgp41Timer};
pub use driver::Sgp41;
