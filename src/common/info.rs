// src/common/info.rs

use core::fmt;

/// Static description of the chip and this driver.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChipInfo {
    pub chip_name: &'static str,
    pub manufacturer_name: &'static str,
    pub interface: &'static str,
    pub supply_voltage_min_v: f32,
    pub supply_voltage_max_v: f32,
    pub max_current_ma: f32,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub driver_version: u32,
}

pub const CHIP_INFO: ChipInfo = ChipInfo {
    chip_name: "Sensirion SGP41",
    manufacturer_name: "Sensirion",
    interface: "IIC",
    supply_voltage_min_v: 1.70,
    supply_voltage_max_v: 3.60,
    max_current_ma: 4.80,
    temperature_min: -10.0,
    temperature_max: 50.0,
    driver_version: 1000,
};

/// Returns the chip descriptor. Needs no handle and touches no bus.
pub const fn info() -> ChipInfo {
    CHIP_INFO
}

impl fmt::Display for ChipInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) via {}, {:.2}-{:.2} V, max {:.2} mA, {:.1}..{:.1} C, driver v{}.{}",
            self.chip_name,
            self.manufacturer_name,
            self.interface,
            self.supply_voltage_min_v,
            self.supply_voltage_max_v,
            self.max_current_ma,
            self.temperature_min,
            self.temperature_max,
            self.driver_version / 1000,
            (self.driver_version % 1000) / 100,
        )
    }
}
