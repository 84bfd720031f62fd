//! Lib.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Tilt bar control loop: samples one accelerometer axis, optionally smooths it with a
//! 50 tap low-pass FIR filter, maps it to a single lit LED on an 8 LED bar plus a signed
//! intensity level, and animates that LED from a periodic timer interrupt.
//!
//! The crate is hardware independent. The firmware binary binds the traits in
//! [`peripherals`] to the micro:bit v2.

#![cfg_attr(not(test), no_std)]

pub mod actuator;
pub mod config;
pub mod fir;
pub mod modulator;
pub mod peripherals;
pub mod sampler;
pub mod tilt;

#[cfg(test)]
mod testing;

pub use actuator::{Actuation, ActuatorState};
pub use fir::{FirFilter, LOW_PASS_TAPS};
pub use modulator::IntensityModulator;
pub use sampler::{Command, Mode, SamplingLoop, Step};
pub use tilt::TiltMapper;
