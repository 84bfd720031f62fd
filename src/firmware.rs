//! Firmware.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Entry point and TIMER1 interrupt handler.
//!
//! The main loop is the only writer of ACTUATOR and the TIMER1 handler the only reader.
//! MODULATOR (LED pins, tick timer, duty counter) is touched by the handler, and by
//! main only before the interrupt is unmasked and after it is masked again.

use panic_rtt_target as _;
use rtt_target::{rtt_init_default, set_print_channel};

use cortex_m_rt::entry;
use microbit::{
    board::Board,
    hal::{gpio::Level, twim, Timer},
    pac::{interrupt, twim0::frequency::FREQUENCY_A, Interrupt, NVIC},
};

use critical_section_lock_mut::LockMut;
use tilt_bar::{
    config::{DEFAULT_MODE, TICK_PERIOD_US},
    peripherals::StatusOutput,
    ActuatorState, IntensityModulator, SamplingLoop, LOW_PASS_TAPS,
};

use crate::board::{PinBar, RttCommands, RttLog, Ticker, TiltSensor};

/// Global Mutable objects: Used inside interrupt handler
static ACTUATOR: ActuatorState = ActuatorState::new();
static MODULATOR: LockMut<IntensityModulator<PinBar, Ticker>> = LockMut::new();

/// TIMER1 Interrupt handler
///
/// One modulator tick: acknowledge the timer, emit the (possibly shifted) pattern,
/// advance the duty counter. TIMER1 cannot preempt itself, so a tick never starts
/// while the previous one is still running; a tick that arrives late is simply skipped.
#[interrupt]
fn TIMER1() {
    MODULATOR.with_lock(|modulator| {
        modulator.on_tick(&ACTUATOR);
    });
}

/// Entry point
///
/// Opens the RTT console, brings up the accelerometer and the LED bar, starts the
/// TIMER1 tick and then samples until the operator quits. TIMER0 is only used as the
/// delay source while configuring the accelerometer.
#[entry]
fn main() -> ! {
    let channels = rtt_init_default!();
    set_print_channel(channels.up.0);
    let mut commands = RttCommands::new(channels.down.0);
    let mut log = RttLog;

    let board = Board::take().unwrap();
    let mut delay = Timer::new(board.TIMER0);

    let mut sampler = SamplingLoop::new(&LOW_PASS_TAPS, DEFAULT_MODE);
    sampler.banner(&mut log);

    let i2c = { twim::Twim::new(board.TWIM0, board.i2c_internal.into(), FREQUENCY_A::K100) };
    let mut sensor = match TiltSensor::open(i2c, &mut delay) {
        Ok(sensor) => sensor,
        Err(e) => {
            log.write_line(format_args!(
                "Error: Could not open accelerometer device ({:?})",
                e
            ));
            park();
        }
    };

    // LED i of the bar sits on the i-th pin of this list
    let edge = board.edge;
    let bar = PinBar::new([
        edge.e00.into_push_pull_output(Level::Low).degrade(),
        edge.e01.into_push_pull_output(Level::Low).degrade(),
        edge.e02.into_push_pull_output(Level::Low).degrade(),
        edge.e08.into_push_pull_output(Level::Low).degrade(),
        edge.e09.into_push_pull_output(Level::Low).degrade(),
        edge.e12.into_push_pull_output(Level::Low).degrade(),
        board.pins.p0_17.into_push_pull_output(Level::Low).degrade(), // edge 13
        edge.e16.into_push_pull_output(Level::Low).degrade(),
    ]);

    MODULATOR.init(IntensityModulator::new(
        bar,
        Ticker::new(Timer::periodic(board.TIMER1)),
    ));
    MODULATOR.with_lock(|modulator| modulator.start(TICK_PERIOD_US));

    // Set up the NVIC to handle the tick.
    unsafe { NVIC::unmask(Interrupt::TIMER1) };
    NVIC::unpend(Interrupt::TIMER1);

    sampler.run(&mut sensor, &mut commands, &mut log, &ACTUATOR);

    // quit: no more ticks, then blank the bar
    NVIC::mask(Interrupt::TIMER1);
    MODULATOR.with_lock(|modulator| modulator.shutdown());
    park()
}

/// Nothing left to do; sleep forever.
fn park() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
