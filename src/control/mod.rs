//! Edge detection, the brightness state machine and the PWM actuator, plus
//! the controller that runs them as one polling loop.

pub mod actuator;
pub mod controller;
pub mod debouncer;
pub mod edge_detector;
pub mod state_machine;

pub use actuator::{Actuation, BrightnessActuator, BrightnessCommand};
pub use controller::{BrightnessController, TickReport};
pub use debouncer::StableDebouncer;
pub use edge_detector::{EdgeDetector, EdgeSource, PressEvent, PressEvents};
pub use state_machine::{BrightnessState, BrightnessStateMachine};
