//! Board.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! micro:bit v2 bindings for the tilt bar peripherals: the LSM303AGR accelerometer on
//! TWIM0, eight edge connector pins as the LED bar, TIMER1 as the modulator tick and
//! the RTT channels as the operator console.

use core::fmt::Arguments;

use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};
use lsm303agr::{
    interface::I2cInterface, mode::MagOneShot, AccelMode, AccelOutputDataRate, Lsm303agr,
};
use microbit::{
    hal::{
        gpio::{Output, Pin, PushPull},
        timer::Periodic,
        twim, Timer,
    },
    pac::{TIMER1, TWIM0},
};
use rtt_target::{rprintln, DownChannel};

use tilt_bar::{
    config::MG_PER_COUNT,
    peripherals::{Accelerometer, Axis, CommandInput, LedBar, StatusOutput, TickTimer},
};

/// number of LEDs (and edge pins) in the bar
pub const BAR_WIDTH: usize = 8;

type Sensor = Lsm303agr<I2cInterface<twim::Twim<TWIM0>>, MagOneShot>;

/// TiltSensor Struct
///
/// The LSM303AGR accelerometer in high resolution mode at 50Hz. Readings are handed out
/// in ~4mG counts rather than mG.
pub struct TiltSensor(Sensor);

impl TiltSensor {
    /// initialize the I2C TWIM0 communication with the accelerometer registers w/in the
    /// LSM303AGR. Fails if the device does not answer.
    pub fn open<D: DelayNs>(
        i2c: twim::Twim<TWIM0>,
        delay: &mut D,
    ) -> Result<Self, lsm303agr::Error<twim::Error>> {
        let mut sensor = Lsm303agr::new_with_i2c(i2c);
        sensor.init()?;
        sensor.set_accel_mode_and_odr(
            delay,
            AccelMode::HighResolution,
            AccelOutputDataRate::Hz50,
        )?;
        Ok(TiltSensor(sensor))
    }
}

impl Accelerometer for TiltSensor {
    type Error = lsm303agr::Error<twim::Error>;

    fn data_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.accel_status()?.xyz_new_data())
    }

    fn read_axis(&mut self, axis: Axis) -> Result<i32, Self::Error> {
        let acceleration = self.0.acceleration()?;
        let mg = match axis {
            Axis::X => acceleration.x_mg(),
            Axis::Y => acceleration.y_mg(),
        };
        Ok(mg / MG_PER_COUNT)
    }
}

/// PinBar Struct
///
/// Bit i of a pattern drives pin i, high = lit.
pub struct PinBar([Pin<Output<PushPull>>; BAR_WIDTH]);

impl PinBar {
    pub fn new(pins: [Pin<Output<PushPull>>; BAR_WIDTH]) -> Self {
        PinBar(pins)
    }
}

impl LedBar for PinBar {
    fn write(&mut self, pattern: u8) {
        for (bit, pin) in self.0.iter_mut().enumerate() {
            // nrf gpio writes are infallible
            let _ = pin.set_state(PinState::from(pattern & (1 << bit) != 0));
        }
    }
}

/// TIMER1 in periodic mode, counting at 1MHz
pub struct Ticker(Timer<TIMER1, Periodic>);

impl Ticker {
    pub fn new(timer: Timer<TIMER1, Periodic>) -> Self {
        Ticker(timer)
    }
}

impl TickTimer for Ticker {
    fn start_periodic(&mut self, period_us: u32) {
        self.0.reset_event();
        self.0.enable_interrupt();
        self.0.start(period_us);
    }

    fn acknowledge(&mut self) {
        self.0.reset_event();
    }

    fn stop(&mut self) {
        self.0.disable_interrupt();
        self.0.reset_event();
    }
}

/// Operator keystrokes arriving on RTT down channel 0
pub struct RttCommands(DownChannel);

impl RttCommands {
    pub fn new(channel: DownChannel) -> Self {
        RttCommands(channel)
    }
}

impl CommandInput for RttCommands {
    fn poll(&mut self) -> Option<char> {
        let mut byte = [0u8; 1];
        match self.0.read(&mut byte) {
            0 => None,
            _ => Some(char::from(byte[0])),
        }
    }
}

/// Status text on the RTT print channel
pub struct RttLog;

impl StatusOutput for RttLog {
    fn write_line(&mut self, line: Arguments<'_>) {
        rprintln!("{}", line);
    }
}
