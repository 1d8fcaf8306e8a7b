//! Test doubles for the bus and delay
//!
//! `FakeBus` models each device as a register file (for register-style
//! peripherals) plus a queue of scripted raw read responses (for
//! command-style peripherals). Every transaction is logged.

use std::collections::{HashMap, VecDeque};
use std::vec::Vec;

use dadabit_hal::{DelayNs, I2cBus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeError {
    /// Bus forced offline
    Nack,
    /// Scripted response length differs from the requested length
    ShortRead,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Txn {
    Write(u8, Vec<u8>),
    Read(u8, usize),
    WriteRead(u8, Vec<u8>, usize),
}

#[derive(Default)]
pub struct FakeBus {
    registers: HashMap<(u8, u8), u8>,
    responses: HashMap<u8, VecDeque<Vec<u8>>>,
    pub log: Vec<Txn>,
    pub offline: bool,
}

impl FakeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_register(&mut self, address: u8, register: u8, value: u8) {
        self.registers.insert((address, register), value);
    }

    pub fn register(&self, address: u8, register: u8) -> u8 {
        self.registers.get(&(address, register)).copied().unwrap_or(0)
    }

    /// Queue the bytes returned by the next plain `read` from `address`
    pub fn push_response(&mut self, address: u8, bytes: &[u8]) {
        self.responses
            .entry(address)
            .or_default()
            .push_back(bytes.to_vec());
    }

    pub fn pending_responses(&self, address: u8) -> usize {
        self.responses.get(&address).map_or(0, VecDeque::len)
    }

    /// All plain writes to `address`, in order
    pub fn writes_to(&self, address: u8) -> Vec<Vec<u8>> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Txn::Write(a, data) if *a == address => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reads_from(&self, address: u8) -> usize {
        self.log
            .iter()
            .filter(|t| matches!(t, Txn::Read(a, _) if *a == address))
            .count()
    }
}

impl I2cBus for FakeBus {
    type Error = FakeError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        if self.offline {
            return Err(FakeError::Nack);
        }
        self.log.push(Txn::Write(address, data.to_vec()));
        if let [register, value] = data {
            self.registers.insert((address, *register), *value);
        }
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        if self.offline {
            return Err(FakeError::Nack);
        }
        self.log.push(Txn::Read(address, buf.len()));
        let response = self
            .responses
            .get_mut(&address)
            .and_then(VecDeque::pop_front)
            .ok_or(FakeError::Nack)?;
        if response.len() != buf.len() {
            return Err(FakeError::ShortRead);
        }
        buf.copy_from_slice(&response);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        if self.offline {
            return Err(FakeError::Nack);
        }
        self.log
            .push(Txn::WriteRead(address, write_data.to_vec(), read_buf.len()));
        let base = write_data.first().copied().unwrap_or(0);
        for (i, byte) in read_buf.iter_mut().enumerate() {
            *byte = self.register(address, base.wrapping_add(i as u8));
        }
        Ok(())
    }
}

/// Records every requested delay
#[derive(Default)]
pub struct FakeDelay {
    pub calls_ns: Vec<u32>,
}

impl FakeDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls_ms(&self) -> Vec<u32> {
        self.calls_ns.iter().map(|ns| ns / 1_000_000).collect()
    }

    pub fn total_us(&self) -> u64 {
        self.calls_ns.iter().map(|&ns| ns as u64 / 1_000).sum()
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls_ns.push(ns);
    }
}
