// src/driver/transaction.rs

use super::Sgp41;
use crate::common::{
    command::{Command, SGP41_ADDRESS},
    crc::{decode_words, WORD_GROUP_LEN},
    error::Sgp41Error,
    frame::CommandFrame,
    hal_traits::{Sgp41DebugPrint, Sgp41Iic, Sgp41Timer},
    timing,
};

/// Largest CRC-protected response in the catalogue (serial id, three words).
const MAX_RESPONSE_LEN: usize = 3 * WORD_GROUP_LEN;

impl<IF, T, P> Sgp41<IF, T, P>
where
    IF: Sgp41Iic,
    T: Sgp41Timer,
    P: Sgp41DebugPrint,
{
    /// Puts one frame on the wire.
    pub(super) fn write_frame(
        &mut self,
        addr: u8,
        frame: &CommandFrame,
    ) -> Result<(), Sgp41Error<IF::Error>> {
        log::debug!("sgp41: write {:02x?} to {:#04x}", frame.as_bytes(), addr);
        let result = self.bus()?.iic_write_cmd(addr, frame.as_bytes());
        result.map_err(Sgp41Error::TransportIo)
    }

    /// Write-only transaction: `code` followed by pre-encoded `params`, no read.
    pub(super) fn iic_write(&mut self, code: u16, params: &[u8]) -> Result<(), Sgp41Error<IF::Error>> {
        let frame = CommandFrame::with_params::<IF::Error>(code, params)?;
        self.write_frame(SGP41_ADDRESS, &frame)
    }

    /// Write-then-read transaction: send `frame` to `addr`, wait, read `output.len()` bytes.
    fn iic_read_with_param(
        &mut self,
        addr: u8,
        frame: &CommandFrame,
        delay_ms: u32,
        output: &mut [u8],
    ) -> Result<(), Sgp41Error<IF::Error>> {
        self.write_frame(addr, frame)?;
        self.delay_ms(delay_ms);
        let result = self.bus()?.iic_read_cmd(addr, output);
        result.map_err(Sgp41Error::TransportIo)
    }

    /// Read-only transaction: send the bare 16-bit code or register address, wait, read.
    pub(super) fn iic_read(
        &mut self,
        code: u16,
        delay_ms: u32,
        output: &mut [u8],
    ) -> Result<(), Sgp41Error<IF::Error>> {
        self.iic_read_with_param(SGP41_ADDRESS, &CommandFrame::new(code), delay_ms, output)
    }

    /// Sends a catalogue command that has no response, then waits its settle time.
    pub(super) fn send_command(
        &mut self,
        command: Command,
        frame: &CommandFrame,
    ) -> Result<(), Sgp41Error<IF::Error>> {
        debug_assert_eq!(command.response_words(), 0);
        self.write_frame(command.address(), frame)?;
        self.delay_ms(timing::as_delay_ms(command.settle_time()));
        Ok(())
    }

    /// Runs a catalogue command and decodes its `N` CRC-checked response words.
    ///
    /// `frame` carries the command code and its parameter groups. Nothing is returned
    /// unless every group's CRC matches.
    pub(super) fn read_words<const N: usize>(
        &mut self,
        command: Command,
        frame: &CommandFrame,
    ) -> Result<[u16; N], Sgp41Error<IF::Error>> {
        debug_assert_eq!(N, command.response_words());
        debug_assert_eq!(frame.len(), 2 + command.parameter_words() * WORD_GROUP_LEN);

        let needed = N * WORD_GROUP_LEN;
        let mut buf = [0u8; MAX_RESPONSE_LEN];
        let response = buf
            .get_mut(..needed)
            .ok_or(Sgp41Error::<IF::Error>::BufferOverflow { needed, got: MAX_RESPONSE_LEN })?;

        let delay = timing::as_delay_ms(command.settle_time());
        if let Err(e) = self.iic_read_with_param(command.address(), frame, delay, response) {
            self.report(format_args!("sgp41: {} failed.", command));
            return Err(e);
        }

        match decode_words(response) {
            Ok(words) => Ok(words),
            Err(e) => {
                if let Sgp41Error::CrcMismatch { group, .. } = e {
                    self.report(format_args!("sgp41: {} crc {} check error.", command, group + 1));
                }
                Err(e)
            }
        }
    }
}
