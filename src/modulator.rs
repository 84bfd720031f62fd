//! Modulator.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Tick-driven brightness animation for the LED bar.
//!
//! Every tick the modulator either shows the pattern as is or shifted one LED toward the
//! tilt, for `|level|` ticks out of every `DUTY_WINDOW + 2`. The larger the tilt, the
//! longer the neighbouring LED is lit, which reads as the bar leaning further over.

use crate::{
    actuator::{Actuation, ActuatorState},
    config::DUTY_WINDOW,
    peripherals::{LedBar, TickTimer},
};

/// IntensityModulator Struct
///
/// Owns the LED bar, the tick timer and the duty counter. Meant to live behind a
/// `LockMut` that only the tick interrupt and setup/shutdown code touch.
pub struct IntensityModulator<L, T> {
    bar: L,
    timer: T,
    duty: u8,
}

impl<L: LedBar, T: TickTimer> IntensityModulator<L, T> {
    pub fn new(bar: L, timer: T) -> Self {
        IntensityModulator { bar, timer, duty: 0 }
    }

    /// configure the timer period and start ticking
    pub fn start(&mut self, period_us: u32) {
        self.duty = 0;
        self.timer.start_periodic(period_us);
    }

    /// Tick handler. Acknowledges the timer, emits exactly one LED write for the pair
    /// currently in `state` and advances the duty counter. Returns the written pattern.
    pub fn on_tick(&mut self, state: &ActuatorState) -> u8 {
        self.timer.acknowledge();

        let Actuation { pattern, level } = state.load();
        let output = if i32::from(self.duty) < i32::from(level).abs() {
            if level < 0 { pattern << 1 } else { pattern >> 1 }
        } else {
            pattern
        };
        self.bar.write(output);

        if self.duty > DUTY_WINDOW {
            self.duty = 0;
        } else {
            self.duty += 1;
        }

        output
    }

    /// stop ticking and blank the bar
    pub fn shutdown(&mut self) {
        self.timer.stop();
        self.bar.write(0);
    }

    pub fn duty(&self) -> u8 {
        self.duty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingBar, RecordingTimer};

    fn modulator() -> IntensityModulator<RecordingBar, RecordingTimer> {
        IntensityModulator::new(RecordingBar::default(), RecordingTimer::default())
    }

    fn state(pattern: u8, level: i8) -> ActuatorState {
        let state = ActuatorState::new();
        state.store(Actuation { pattern, level });
        state
    }

    #[test]
    fn acknowledges_and_writes_once_per_tick() {
        let mut m = modulator();
        let state = state(0b0000_1000, 3);
        for tick in 1..=40 {
            m.on_tick(&state);
            assert_eq!(m.timer.acks, tick);
            assert_eq!(m.bar.writes.len(), tick);
        }
    }

    #[test]
    fn duty_counter_wraps_after_window() {
        let mut m = modulator();
        let state = state(0, 0);
        for expected in 1..=DUTY_WINDOW + 1 {
            m.on_tick(&state);
            assert_eq!(m.duty(), expected);
        }
        m.on_tick(&state);
        assert_eq!(m.duty(), 0);
    }

    #[test]
    fn positive_level_shifts_right_for_level_ticks() {
        let mut m = modulator();
        let state = state(0b0001_0000, 5);
        let period = usize::from(DUTY_WINDOW) + 2;
        for _ in 0..period {
            m.on_tick(&state);
        }
        let shifted = m.bar.writes.iter().filter(|&&p| p == 0b0000_1000).count();
        let full = m.bar.writes.iter().filter(|&&p| p == 0b0001_0000).count();
        assert_eq!(shifted, 5);
        assert_eq!(full, period - 5);
        assert!(m.bar.writes[..5].iter().all(|&p| p == 0b0000_1000));
    }

    #[test]
    fn negative_level_shifts_left() {
        let mut m = modulator();
        let state = state(0b0001_0000, -16);
        let period = usize::from(DUTY_WINDOW) + 2;
        for _ in 0..period {
            m.on_tick(&state);
        }
        assert!(m.bar.writes[..16].iter().all(|&p| p == 0b0010_0000));
        assert!(m.bar.writes[16..].iter().all(|&p| p == 0b0001_0000));
    }

    #[test]
    fn zero_level_always_emits_pattern() {
        let mut m = modulator();
        let state = state(0b1000_0000, 0);
        for _ in 0..50 {
            assert_eq!(m.on_tick(&state), 0b1000_0000);
        }
    }

    #[test]
    fn shifted_edge_bits_fall_off_the_bar() {
        let mut m = modulator();
        assert_eq!(m.on_tick(&state(0b1000_0000, -4)), 0);
        assert_eq!(m.on_tick(&state(0b0000_0001, 4)), 0);
    }

    #[test]
    fn picks_up_new_state_on_next_tick() {
        let mut m = modulator();
        let state = state(0b0000_0001, 0);
        assert_eq!(m.on_tick(&state), 0b0000_0001);
        state.store(Actuation {
            pattern: 0b0100_0000,
            level: 0,
        });
        assert_eq!(m.on_tick(&state), 0b0100_0000);
    }

    #[test]
    fn start_and_shutdown_drive_the_timer() {
        let mut m = modulator();
        m.start(46);
        assert_eq!(m.timer.period_us, Some(46));
        m.shutdown();
        assert!(m.timer.stopped);
        assert_eq!(m.bar.writes.last(), Some(&0));
    }
}
