// src/driver/operations.rs

use super::Sgp41;
use crate::common::{
    command::{Command, DEFAULT_COMPENSATION},
    convert,
    error::Sgp41Error,
    frame::CommandFrame,
    hal_traits::{Sgp41DebugPrint, Sgp41Iic, Sgp41Timer},
    timing,
    types::{RawSignals, SerialId},
};
use core::time::Duration;

impl<IF, T, P> Sgp41<IF, T, P>
where
    IF: Sgp41Iic,
    T: Sgp41Timer,
    P: Sgp41DebugPrint,
{
    // --- Measurement ---

    /// Runs one conditioning cycle and returns the raw VOC ticks.
    ///
    /// Conditioning pre-heats the NOx hotplate; call it once per second for the first
    /// seconds after power-up, before steady-state measurement. Repeated calls are fine.
    pub fn get_execute_conditioning(&mut self) -> Result<u16, Sgp41Error<IF::Error>> {
        self.check_ready()?;
        let command = Command::ExecuteConditioning;
        let frame = CommandFrame::with_params::<IF::Error>(command.code(), &DEFAULT_COMPENSATION)?;
        let [sraw_voc] = self.read_words::<1>(command, &frame)?;
        Ok(sraw_voc)
    }

    /// Measures raw VOC and NOx ticks, compensated for the given humidity and temperature ticks.
    ///
    /// Use [`Sgp41::humidity_convert_to_register`] and
    /// [`Sgp41::temperature_convert_to_register`] to produce the arguments.
    pub fn get_measure_raw(
        &mut self,
        raw_humidity: u16,
        raw_temperature: u16,
    ) -> Result<RawSignals, Sgp41Error<IF::Error>> {
        self.check_ready()?;
        let mut frame = CommandFrame::new(Command::MeasureRaw.code());
        frame.push_word::<IF::Error>(raw_humidity)?;
        frame.push_word::<IF::Error>(raw_temperature)?;
        let words = self.read_words::<2>(Command::MeasureRaw, &frame)?;
        Ok(RawSignals::from_words(words))
    }

    /// Measures raw VOC and NOx ticks with the sensor's default compensation
    /// (50 %RH, 25 degC), sent as fixed pre-encoded parameter bytes.
    pub fn get_measure_raw_without_compensation(&mut self) -> Result<RawSignals, Sgp41Error<IF::Error>> {
        self.check_ready()?;
        let command = Command::MeasureRaw;
        let frame = CommandFrame::with_params::<IF::Error>(command.code(), &DEFAULT_COMPENSATION)?;
        let words = self.read_words::<2>(command, &frame)?;
        Ok(RawSignals::from_words(words))
    }

    /// Converts `rh_percent` and `temperature_c`, then measures with compensation.
    pub fn get_measure_raw_compensated(
        &mut self,
        rh_percent: f32,
        temperature_c: f32,
    ) -> Result<RawSignals, Sgp41Error<IF::Error>> {
        let raw_humidity = self.humidity_convert_to_register(rh_percent)?;
        let raw_temperature = self.temperature_convert_to_register(temperature_c)?;
        self.get_measure_raw(raw_humidity, raw_temperature)
    }

    /// Runs the built-in self test and returns the result word as the chip reports it.
    ///
    /// The bit layout is chip-defined and not interpreted here.
    pub fn get_measure_test(&mut self) -> Result<u16, Sgp41Error<IF::Error>> {
        self.check_ready()?;
        let command = Command::ExecuteSelfTest;
        let [result] = self.read_words::<1>(command, &CommandFrame::new(command.code()))?;
        Ok(result)
    }

    // --- Maintenance ---

    /// Sends the one-byte general-call reset, then waits for the sensor to restart.
    ///
    /// Every device on the bus that honours general call resets too. The handle
    /// stays ready.
    pub fn soft_reset(&mut self) -> Result<(), Sgp41Error<IF::Error>> {
        self.check_ready()?;
        let command = Command::SoftReset;
        let frame = CommandFrame::single_byte(command.code() as u8);
        if let Err(e) = self.send_command(command, &frame) {
            self.report(format_args!("sgp41: write soft reset failed."));
            return Err(e);
        }

        Ok(())
    }

    /// Switches the hotplates off and returns the sensor to idle.
    pub fn turn_heater_off(&mut self) -> Result<(), Sgp41Error<IF::Error>> {
        self.check_ready()?;
        let command = Command::TurnHeaterOff;
        if let Err(e) = self.send_command(command, &CommandFrame::new(command.code())) {
            self.report(format_args!("sgp41: write turn heater off failed."));
            return Err(e);
        }

        Ok(())
    }

    /// Reads the 48-bit serial number.
    pub fn get_serial_id(&mut self) -> Result<SerialId, Sgp41Error<IF::Error>> {
        self.check_ready()?;
        let command = Command::GetSerialId;
        let words = self.read_words::<3>(command, &CommandFrame::new(command.code()))?;
        Ok(SerialId(words))
    }

    // --- Conversions ---

    /// Relative humidity in percent to compensation ticks. No clamping.
    pub fn humidity_convert_to_register(&self, rh: f32) -> Result<u16, Sgp41Error<IF::Error>> {
        self.check_ready()?;
        Ok(convert::humidity_to_ticks(rh))
    }

    /// Temperature in degrees Celsius to compensation ticks. No clamping.
    pub fn temperature_convert_to_register(&self, temp: f32) -> Result<u16, Sgp41Error<IF::Error>> {
        self.check_ready()?;
        Ok(convert::temperature_to_ticks(temp))
    }

    // --- Raw register access ---

    /// Writes `reg` followed by `buf` verbatim.
    ///
    /// No CRC is added: if the target expects CRC-protected words, `buf` must already
    /// contain them (see [`crate::common::crc::encode_word`]). `buf` may be at most
    /// 14 bytes.
    pub fn set_reg(&mut self, reg: u16, buf: &[u8]) -> Result<(), Sgp41Error<IF::Error>> {
        self.check_ready()?;
        if let Err(e) = self.iic_write(reg, buf) {
            self.report(format_args!("sgp41: set reg {:#06x} failed.", reg));
            return Err(e);
        }
        Ok(())
    }

    /// Writes `reg`, waits the default 320 ms, then reads `buf.len()` bytes verbatim.
    ///
    /// Unlike the measurement commands, the response is not CRC-checked; callers
    /// needing integrity must verify the groups themselves
    /// (see [`crate::common::crc::decode_words`]).
    pub fn get_reg(&mut self, reg: u16, buf: &mut [u8]) -> Result<(), Sgp41Error<IF::Error>> {
        self.get_reg_with_settle(reg, buf, timing::REGISTER_READ_SETTLE)
    }

    /// As [`Sgp41::get_reg`], with a caller-chosen settle time.
    pub fn get_reg_with_settle(
        &mut self,
        reg: u16,
        buf: &mut [u8],
        settle: Duration,
    ) -> Result<(), Sgp41Error<IF::Error>> {
        self.check_ready()?;
        if let Err(e) = self.iic_read(reg, timing::as_delay_ms(settle), buf) {
            self.report(format_args!("sgp41: get reg {:#06x} failed.", reg));
            return Err(e);
        }
        Ok(())
    }
}
