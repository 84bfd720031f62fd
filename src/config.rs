//! Config.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Compile-time tuning for the tilt bar. Everything the firmware needs to know about
//! its sensor scaling, LED animation and startup state lives here.

use crate::sampler::Mode;

/// calibration offset added to every (rounded) reading before the tilt bit fields are extracted
pub const TILT_OFFSET: i32 = -32;

/// duty counter runs 0..=DUTY_WINDOW + 1 before wrapping back to zero
pub const DUTY_WINDOW: u8 = 16;

/// Intensity modulator tick period. 46us at the 1MHz timer rate, close to the
/// 0x900 cycles at 50MHz the LED animation was tuned for.
pub const TICK_PERIOD_US: u32 = 46;

/// mode the sampling loop starts in
pub const DEFAULT_MODE: Mode = Mode::Filtered;

/// mG per accelerometer count handed to the tilt mapper (~4mG, i.e. ~256 counts per g)
pub const MG_PER_COUNT: i32 = 4;

/// number of taps in the default low-pass kernel
pub const LOW_PASS_ORDER: usize = 50;
