//! Two-button PWM brightness controller.
//!
//! An ON and an OFF button are polled on a fixed cadence, their LOW to HIGH
//! transitions become press events, and a Mealy state machine walks an LED
//! through four brightness levels (off, 20 %, 50 %, 100 %) by issuing duty
//! cycle commands to a PWM channel.
//!
//! The control logic in [`control`] only talks to hardware through the
//! capability traits in [`hardware::traits`], so it runs unchanged against
//! embassy peripherals on the target and against fakes on the host.

#![cfg_attr(not(test), no_std)]

// Must stay first so the logging macros are visible to every other module.
#[macro_use]
mod fmt;

pub mod config;
pub mod control;
pub mod error;
pub mod hardware;

pub use error::Error;
