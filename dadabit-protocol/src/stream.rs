//! Byte-stream framer for the companion serial link
//!
//! Polled once per scheduler tick with whatever bytes arrived since the
//! last tick. Bytes accumulate until a `$` marker is seen; the text before
//! the first marker is decoded and then the whole accumulator is cleared.
//!
//! Clearing is unconditional: anything after the first marker, including a
//! second complete frame that arrived in the same poll, is discarded. The
//! companion controller re-sends its status periodically, so a lost report
//! is replaced on a later tick.

use heapless::Vec;

use crate::command::{decode_command, Command};

/// Frame terminator
pub const FRAME_MARKER: u8 = b'$';

/// Default accumulator capacity, enough for several status frames
pub const DEFAULT_CAPACITY: usize = 64;

/// Accumulates partial frames across polls
#[derive(Debug, Clone)]
pub struct CommandFramer<const N: usize = DEFAULT_CAPACITY> {
    pending: Vec<u8, N>,
}

impl<const N: usize> Default for CommandFramer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CommandFramer<N> {
    /// Create an empty framer
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Bytes waiting for a marker
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Drop everything buffered
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Append newly received bytes
    ///
    /// If the accumulator fills up before any marker arrived, the partial
    /// frame is oversized garbage: it is discarded and appending continues
    /// with the rest of `incoming`. Once a marker is buffered, overflowing
    /// bytes are simply not stored since they would be cleared anyway.
    pub fn extend(&mut self, incoming: &[u8]) {
        for &byte in incoming {
            if self.pending.push(byte).is_err() {
                if self.pending.contains(&FRAME_MARKER) {
                    return;
                }
                self.pending.clear();
                // Capacity is at least one after a clear unless N == 0
                let _ = self.pending.push(byte);
            }
        }
    }

    /// Feed one tick worth of bytes and decode at most one frame
    ///
    /// Returns `None` while no marker is buffered, and also when the frame
    /// before the marker is not a recognised command. In both marker cases
    /// the accumulator is emptied.
    pub fn poll(&mut self, incoming: &[u8]) -> Option<Command> {
        self.extend(incoming);

        let marker = self.pending.iter().position(|&b| b == FRAME_MARKER)?;
        let command = decode_command(&self.pending[..marker]);
        self.pending.clear();
        command
    }
}
