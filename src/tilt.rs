//! Tilt.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Converts a (raw or filtered) axis reading into the LED bar pattern and the
//! signed intensity level the modulator animates it with.
//!
//! After the calibration offset is applied, bits [6:8] of the reading select
//! which LED is lit and bits [1:5] give the tilt magnitude.

use crate::{actuator::Actuation, config::TILT_OFFSET};

/// TiltMapper Struct
///
/// Pure mapping from an axis reading to an `Actuation`. The offset is the only state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TiltMapper {
    offset: i32,
}

impl Default for TiltMapper {
    fn default() -> Self {
        TiltMapper::new(TILT_OFFSET)
    }
}

impl TiltMapper {
    pub const fn new(offset: i32) -> Self {
        TiltMapper { offset }
    }

    /// Map a reading to its LED pattern and level.
    ///
    /// The pattern is `(8 >> code) | (8 << (8 - code))` truncated to 8 bits, so exactly one
    /// LED is lit for every direction code. For code 0 the upper term shifts out of the byte
    /// entirely and only bit 3 remains. The level is the 5-bit field sign-extended to
    /// [-16, 15].
    pub fn map(&self, value: f32) -> Actuation {
        let reading = TiltMapper::round(value).wrapping_add(self.offset);

        let code = ((reading >> 6) & 0x07) as u32;
        let pattern = ((8u32 >> code) | (8u32 << (8 - code))) as u8;

        // sign-extend the 5-bit field
        let level = (((reading >> 1) & 0x1f) << 27) >> 27;

        Actuation {
            pattern,
            level: level as i8,
        }
    }

    /// custom #![no_std] rounding, half away from zero. Casting to i32 truncates toward
    /// zero (and saturates, NaN becomes 0); the lost fraction decides whether to step one
    /// further from zero.
    fn round(number: f32) -> i32 {
        let mut integer: i32 = number as i32;
        let remainder: f32 = number - (integer as f32);
        if remainder >= 0.5 {
            integer = integer.saturating_add(1);
        } else if remainder <= -0.5 {
            integer = integer.saturating_sub(1);
        }
        integer
    }
}
