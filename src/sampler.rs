//! Sampler.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! The main-loop side of the tilt bar: operator commands, the Raw/Filtered/Calibration
//! mode state machine, and the per-sample read -> filter -> map -> publish pipeline.

use crate::{
    actuator::{Actuation, ActuatorState},
    fir::FirFilter,
    peripherals::{Accelerometer, Axis, CommandInput, StatusOutput},
    tilt::TiltMapper,
};

/// Mode Enum
///
/// How samples are processed before they reach the tilt mapper. Calibration is
/// reserved: selecting it stops sampling and leaves the LED bar as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Raw = 0,
    Filtered = 1,
    Calibration = 2,
}

/// TryFrom<u8> implementation for Mode enum
impl TryFrom<u8> for Mode {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Raw),
            1 => Ok(Mode::Filtered),
            2 => Ok(Mode::Calibration),
            _ => Err(()),
        }
    }
}

impl Mode {
    fn describe(self) -> &'static str {
        match self {
            Mode::Raw => "raw",
            Mode::Filtered => "filtering",
            Mode::Calibration => "calibration",
        }
    }
}

/// Operator command, one character each
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Select(Mode),
    Quit,
}

impl TryFrom<char> for Command {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Command::Select(Mode::Raw)),
            '1' => Ok(Command::Select(Mode::Filtered)),
            '2' => Ok(Command::Select(Mode::Calibration)),
            'q' | 'Q' => Ok(Command::Quit),
            _ => Err(()),
        }
    }
}

/// Outcome of one pass through the loop body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// nothing was published (no fresh sample, or calibration mode)
    Idle,
    /// a new pair was published to the modulator
    Updated(Actuation),
    Quit,
}

/// SamplingLoop Struct
///
/// Owns the current mode, one filter per axis and the tilt mapper. The X axis drives
/// the LED bar; Y is filtered and reported alongside it.
pub struct SamplingLoop<const N: usize> {
    mode: Mode,
    mapper: TiltMapper,
    filters: [FirFilter<N>; 2],
}

impl<const N: usize> SamplingLoop<N> {
    pub fn new(taps: &'static [f32; N], mode: Mode) -> Self {
        SamplingLoop {
            mode,
            mapper: TiltMapper::default(),
            filters: [FirFilter::new(taps), FirFilter::new(taps)],
        }
    }

    pub fn with_mapper(mut self, mapper: TiltMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn banner<O: StatusOutput>(&self, out: &mut O) {
        out.write_line(format_args!("MB2 Tilt Bar"));
        out.write_line(format_args!(
            "Default mode: {} (2 = calibration, 1 = filtering, 0 = raw)",
            self.mode as u8
        ));
    }

    /// Apply one operator character. Unknown characters leave the mode alone; anything
    /// other than whitespace is reported.
    pub fn handle_command<O: StatusOutput>(
        &mut self,
        ch: char,
        out: &mut O,
    ) -> Option<Command> {
        match Command::try_from(ch) {
            Ok(Command::Select(mode)) => {
                self.mode = mode;
                out.write_line(format_args!(
                    "Switched to Mode {} ({}).",
                    mode as u8,
                    mode.describe()
                ));
                Some(Command::Select(mode))
            }
            Ok(Command::Quit) => {
                out.write_line(format_args!("Exiting..."));
                Some(Command::Quit)
            }
            Err(()) => {
                if !ch.is_whitespace() {
                    out.write_line(format_args!("Unrecognized command: {}", ch));
                }
                None
            }
        }
    }

    /// One pass of the loop body: poll for a command, then, if the sensor has a fresh
    /// reading, sample both axes, filter them in Filtered mode and publish the mapped X
    /// axis to `state`.
    pub fn step<A, C, O>(
        &mut self,
        accel: &mut A,
        input: &mut C,
        out: &mut O,
        state: &ActuatorState,
    ) -> Result<Step, A::Error>
    where
        A: Accelerometer,
        C: CommandInput,
        O: StatusOutput,
    {
        if let Some(ch) = input.poll() {
            if let Some(Command::Quit) = self.handle_command(ch, out) {
                return Ok(Step::Quit);
            }
        }

        let (x, y) = match self.mode {
            Mode::Calibration => return Ok(Step::Idle),
            Mode::Raw | Mode::Filtered => {
                if !accel.data_ready()? {
                    return Ok(Step::Idle);
                }
                (accel.read_axis(Axis::X)?, accel.read_axis(Axis::Y)?)
            }
        };

        let primary = match self.mode {
            Mode::Filtered => {
                let fx = self.filters[Axis::X as usize].convolve(x as f32);
                let fy = self.filters[Axis::Y as usize].convolve(y as f32);
                out.write_line(format_args!("filtered {:.3} {:.3}", fx, fy));
                fx
            }
            _ => {
                out.write_line(format_args!("raw {} {}", x, y));
                x as f32
            }
        };

        let actuation = self.mapper.map(primary);
        state.store(actuation);
        Ok(Step::Updated(actuation))
    }

    /// Run until the operator quits. A failed read skips that sample.
    pub fn run<A, C, O>(
        &mut self,
        accel: &mut A,
        input: &mut C,
        out: &mut O,
        state: &ActuatorState,
    ) where
        A: Accelerometer,
        C: CommandInput,
        O: StatusOutput,
    {
        loop {
            match self.step(accel, input, out, state) {
                Ok(Step::Quit) => break,
                Ok(_) => {}
                Err(e) => out.write_line(format_args!("Accelerometer read failed: {:?}", e)),
            }
        }
    }
}
