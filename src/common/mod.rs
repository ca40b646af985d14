// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod command;
pub mod convert;
pub mod crc;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod info;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

pub use command::{Command, DEFAULT_COMPENSATION, GENERAL_CALL_ADDRESS, SGP41_ADDRESS};
pub use convert::{humidity_to_ticks, temperature_to_ticks};
pub use crc::{calculate_crc8, decode_words, encode_word, verify_word_group};
pub use error::{status_of, Binding, Sgp41Error};
pub use frame::CommandFrame;
pub use hal_traits::{LogDebugPrint, Sgp41DebugPrint, Sgp41Iic, Sgp41Timer};
pub use info::{info, ChipInfo};
pub use types::{RawSignals, SerialId};

// --- Feature-gated re-exports ---

// embedded-hal 1.0 adapters
#[cfg(feature = "impl-generic-hal")]
pub use hal_traits::{HalDelay, HalIic};
