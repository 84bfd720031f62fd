//! Main.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Uses the Accelerometer within the LSM303AGR eCompass module to drive an 8 LED bar wired to
//! the edge connector. The lit LED follows the X axis tilt and a TIMER1 interrupt leans it
//! toward its neighbour for a share of every animation period proportional to the tilt.
//!
//! The firmware starts in filtering mode, where readings pass through a 50 tap low-pass FIR
//! filter. Commands typed into the RTT terminal switch modes while it runs: '0' raw, '1'
//! filtered, '2' calibration (reserved, does nothing), 'q' to stop.
//!
//! Only meaningful on the micro:bit v2 (thumbv7em-none-eabihf); a host build just says so.

#![cfg_attr(target_os = "none", no_std, no_main)]

#[cfg(target_os = "none")]
mod board;
#[cfg(target_os = "none")]
mod firmware;

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("MB2-Tilt-Bar is micro:bit v2 firmware");
    eprintln!("build it with --target thumbv7em-none-eabihf");
}
