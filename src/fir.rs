//! Fir.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Circular-buffer FIR filter used to smooth accelerometer readings.
//!
//! Each `FirFilter` owns its own history. One instance per axis: feeding two signals
//! through the same instance would mix their histories.

use crate::config::LOW_PASS_ORDER;

/// Symmetric low-pass kernel. The designed response has 49 taps; the 50th is zero.
pub static LOW_PASS_TAPS: [f32; LOW_PASS_ORDER] = [
    0.0046, 0.0074, -0.0024, -0.0071, 0.0033, 0.0001, -0.0094, 0.0040, 0.0044, -0.0133, //
    0.0030, 0.0114, -0.0179, -0.0011, 0.0223, -0.0225, -0.0109, 0.0396, -0.0263, -0.0338, //
    0.0752, -0.0289, -0.1204, 0.2879, 0.6369, 0.2879, -0.1204, -0.0289, 0.0752, -0.0338, //
    -0.0263, 0.0396, -0.0109, -0.0225, 0.0223, -0.0011, -0.0179, 0.0114, 0.0030, -0.0133, //
    0.0044, 0.0040, -0.0094, 0.0001, 0.0033, -0.0071, -0.0024, 0.0074, 0.0046, 0.0,
];

/// FirFilter Struct
///
/// Ring buffer of the last N samples plus the slot the next sample will be written to.
/// The coefficients are borrowed so every axis can share one kernel.
#[derive(Clone, Debug)]
pub struct FirFilter<const N: usize> {
    taps: &'static [f32; N],
    history: [f32; N],
    cursor: usize,
}

impl<const N: usize> FirFilter<N> {
    /// Generates a new filter with a zeroed history. The first N - 1 outputs include
    /// that zero warm-up.
    pub const fn new(taps: &'static [f32; N]) -> Self {
        FirFilter {
            taps,
            history: [0.0; N],
            cursor: 0,
        }
    }

    /// Store `sample` and return the dot product of the history, newest first, with the taps.
    ///
    /// The newest sample pairs with `taps[0]`, the one before it with `taps[1]` and so on,
    /// wrapping around the ring buffer.
    pub fn convolve(&mut self, sample: f32) -> f32 {
        self.history[self.cursor] = sample;

        let mut output = 0.0;
        let mut slot = self.cursor;
        for tap in self.taps.iter() {
            output += self.history[slot] * tap;
            slot = if slot == 0 { N - 1 } else { slot - 1 };
        }

        self.cursor += 1;
        if self.cursor >= N {
            self.cursor = 0;
        }

        output
    }

    /// zero the history and rewind the cursor
    pub fn reset(&mut self) {
        self.history = [0.0; N];
        self.cursor = 0;
    }

    pub fn taps(&self) -> &[f32; N] {
        self.taps
    }
}
