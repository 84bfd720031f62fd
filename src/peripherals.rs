//! Peripherals.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! The hardware the control loop talks to, one trait per device. The firmware binds
//! these to the micro:bit; the unit tests bind them to scripted fakes.

use core::fmt::{Arguments, Debug};

/// Accelerometer axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
}

pub trait Accelerometer {
    type Error: Debug;

    /// true once a reading newer than the last one is available
    fn data_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    /// latest reading for `axis`, never blocks waiting for a new one
    fn read_axis(&mut self, axis: Axis) -> Result<i32, Self::Error>;
}

/// Periodic tick source driving the intensity modulator.
///
/// The tick handler runs to completion before the next tick can be delivered, so the
/// handler is never re-entered. Ticks that arrive while it is still running are lost,
/// not queued.
pub trait TickTimer {
    fn start_periodic(&mut self, period_us: u32);
    /// clear the pending tick so the timer re-arms
    fn acknowledge(&mut self);
    fn stop(&mut self);
}

pub trait LedBar {
    /// bit i of `pattern` drives LED i
    fn write(&mut self, pattern: u8);
}

pub trait CommandInput {
    /// pending operator character, `None` when nothing was typed
    fn poll(&mut self) -> Option<char>;
}

pub trait StatusOutput {
    fn write_line(&mut self, line: Arguments<'_>);
}
