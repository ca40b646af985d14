// src/driver/mock.rs

//! Recording doubles for the three capabilities, shared by the driver's unit tests.

use super::Sgp41;
use crate::common::hal_traits::{Sgp41DebugPrint, Sgp41Iic, Sgp41Timer};
use arrayvec::ArrayVec;
use core::cell::RefCell;
use core::fmt::{self, Write};
use heapless::{String as HeaplessString, Vec as HeaplessVec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockIoError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Init,
    Deinit,
    Write { addr: u8, bytes: ArrayVec<u8, 16> },
    Read { addr: u8, len: usize },
    Delay(u32),
    Print(HeaplessString<96>),
}

impl Event {
    pub fn write(addr: u8, bytes: &[u8]) -> Self {
        let mut buf = ArrayVec::new();
        buf.try_extend_from_slice(bytes).unwrap();
        Event::Write { addr, bytes: buf }
    }
}

/// Everything the doubles saw, plus what they should answer.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: HeaplessVec<Event, 32>,
    pub staged: HeaplessVec<u8, 16>,
    pub fail_init: bool,
    pub fail_deinit: bool,
    pub fail_write: bool,
    pub fail_read: bool,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes handed out by the next read.
    pub fn stage_read(&mut self, bytes: &[u8]) {
        self.staged.clear();
        self.staged.extend_from_slice(bytes).unwrap();
    }

    /// Bus traffic only: init, deinit, writes and reads.
    pub fn transport_calls(&self) -> usize {
        self.events
            .iter()
            .filter(|e| !matches!(e, Event::Delay(_) | Event::Print(_)))
            .count()
    }

    pub fn last_print(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Print(s) => Some(s.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, event: Event) {
        self.events.push(event).unwrap();
    }
}

pub struct MockIic<'a>(pub &'a RefCell<EventLog>);
pub struct MockTimer<'a>(pub &'a RefCell<EventLog>);
pub struct MockSink<'a>(pub &'a RefCell<EventLog>);

impl Sgp41Iic for MockIic<'_> {
    type Error = MockIoError;

    fn iic_init(&mut self) -> Result<(), Self::Error> {
        let mut log = self.0.borrow_mut();
        log.push(Event::Init);
        if log.fail_init {
            Err(MockIoError)
        } else {
            Ok(())
        }
    }

    fn iic_deinit(&mut self) -> Result<(), Self::Error> {
        let mut log = self.0.borrow_mut();
        log.push(Event::Deinit);
        if log.fail_deinit {
            Err(MockIoError)
        } else {
            Ok(())
        }
    }

    fn iic_write_cmd(&mut self, addr: u8, buf: &[u8]) -> Result<(), Self::Error> {
        let mut log = self.0.borrow_mut();
        log.push(Event::write(addr, buf));
        if log.fail_write {
            Err(MockIoError)
        } else {
            Ok(())
        }
    }

    fn iic_read_cmd(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        let mut log = self.0.borrow_mut();
        log.push(Event::Read { addr, len: buf.len() });
        if log.fail_read {
            return Err(MockIoError);
        }
        buf.fill(0);
        let n = buf.len().min(log.staged.len());
        buf[..n].copy_from_slice(&log.staged[..n]);
        Ok(())
    }
}

impl Sgp41Timer for MockTimer<'_> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(Event::Delay(ms));
    }
}

impl Sgp41DebugPrint for MockSink<'_> {
    fn debug_print(&mut self, args: fmt::Arguments<'_>) {
        let mut line = HeaplessString::new();
        let _ = line.write_fmt(args);
        self.0.borrow_mut().push(Event::Print(line));
    }
}

pub type MockSgp41<'a> = Sgp41<MockIic<'a>, MockTimer<'a>, MockSink<'a>>;

/// A handle with all three capabilities linked, not yet initialised.
pub fn linked(log: &RefCell<EventLog>) -> MockSgp41<'_> {
    Sgp41::with_links(MockIic(log), MockTimer(log), MockSink(log))
}

/// An initialised handle with the init traffic already cleared from the log.
pub fn ready(log: &RefCell<EventLog>) -> MockSgp41<'_> {
    let mut sgp = linked(log);
    sgp.init().unwrap();
    log.borrow_mut().events.clear();
    sgp
}
