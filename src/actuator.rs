//! Actuator.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! The pattern/level pair handed from the sampling loop to the tick interrupt.
//!
//! Both halves are packed into one `AtomicU16` so a tick can never observe a new
//! pattern with a stale level (or the other way round). The sampling loop is the only
//! writer and the intensity modulator the only reader.

use core::sync::atomic::{
    AtomicU16,
    Ordering::{Acquire, Release},
};

/// Actuation Struct
///
/// One lit LED `pattern` plus a signed `level` in [-16, 15]. The sign picks the
/// direction the pattern is shifted while dimmed, the magnitude the duty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Actuation {
    pub pattern: u8,
    pub level: i8,
}

impl Actuation {
    const fn pack(self) -> u16 {
        ((self.pattern as u16) << 8) | (self.level as u8 as u16)
    }

    const fn unpack(bits: u16) -> Self {
        Actuation {
            pattern: (bits >> 8) as u8,
            level: bits as u8 as i8,
        }
    }
}

/// ActuatorState Struct
///
/// Lock-free cell holding the latest `Actuation`. Usable from a `static`.
pub struct ActuatorState(AtomicU16);

impl Default for ActuatorState {
    fn default() -> Self {
        ActuatorState::new()
    }
}

impl ActuatorState {
    /// Starts blank: no LED lit, level 0.
    pub const fn new() -> Self {
        ActuatorState(AtomicU16::new(0))
    }

    /// Publish a new pair in a single store.
    pub fn store(&self, actuation: Actuation) {
        self.0.store(actuation.pack(), Release);
    }

    pub fn load(&self) -> Actuation {
        Actuation::unpack(self.0.load(Acquire))
    }
}
