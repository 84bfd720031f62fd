//! Testing.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Host-side stand-ins for the micro:bit peripherals.

use std::{collections::VecDeque, fmt::Arguments};

use crate::peripherals::{Accelerometer, Axis, CommandInput, LedBar, StatusOutput, TickTimer};

pub fn isclose(a: f32, b: f32, rtol: f32, atol: f32) -> bool {
    (a - b).abs() <= a.abs().max(b.abs()) * rtol + atol
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadError;

/// Replays (x, y) pairs. Reports no fresh data once the script runs out.
pub struct ScriptedAccel {
    samples: Vec<(i32, i32)>,
    next: usize,
    not_ready: usize,
    fail: bool,
    pub reads: usize,
}

impl ScriptedAccel {
    pub fn new(samples: &[(i32, i32)]) -> Self {
        ScriptedAccel {
            samples: samples.to_vec(),
            next: 0,
            not_ready: 0,
            fail: false,
            reads: 0,
        }
    }

    pub fn not_ready_for(mut self, polls: usize) -> Self {
        self.not_ready = polls;
        self
    }

    pub fn fail_first(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Accelerometer for ScriptedAccel {
    type Error = ReadError;

    fn data_ready(&mut self) -> Result<bool, ReadError> {
        if self.not_ready > 0 {
            self.not_ready -= 1;
            return Ok(false);
        }
        Ok(self.next < self.samples.len())
    }

    fn read_axis(&mut self, axis: Axis) -> Result<i32, ReadError> {
        if self.fail {
            self.fail = false;
            return Err(ReadError);
        }
        self.reads += 1;
        let (x, y) = self.samples[self.next];
        Ok(match axis {
            Axis::X => x,
            Axis::Y => {
                self.next += 1;
                y
            }
        })
    }
}

/// Hands out one scripted character per poll, then nothing.
pub struct ScriptedInput(VecDeque<char>);

impl ScriptedInput {
    pub fn new(script: &str) -> Self {
        ScriptedInput(script.chars().collect())
    }
}

impl CommandInput for ScriptedInput {
    fn poll(&mut self) -> Option<char> {
        self.0.pop_front()
    }
}

#[derive(Default)]
pub struct Lines(pub Vec<String>);

impl StatusOutput for Lines {
    fn write_line(&mut self, line: Arguments<'_>) {
        self.0.push(std::fmt::format(line));
    }
}

#[derive(Default)]
pub struct RecordingBar {
    pub writes: Vec<u8>,
}

impl LedBar for RecordingBar {
    fn write(&mut self, pattern: u8) {
        self.writes.push(pattern);
    }
}

#[derive(Default)]
pub struct RecordingTimer {
    pub period_us: Option<u32>,
    pub acks: usize,
    pub stopped: bool,
}

impl TickTimer for RecordingTimer {
    fn start_periodic(&mut self, period_us: u32) {
        self.period_us = Some(period_us);
        self.stopped = false;
    }

    fn acknowledge(&mut self) {
        self.acks += 1;
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
