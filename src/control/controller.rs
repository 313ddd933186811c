#[cfg(feature = "async")]
use embedded_hal_async::delay::DelayNs;

use super::actuator::{Actuation, BrightnessActuator, BrightnessCommand};
use super::edge_detector::{EdgeDetector, EdgeSource, PressEvents};
use super::state_machine::{BrightnessState, BrightnessStateMachine};
use crate::config::ControllerConfig;
use crate::hardware::traits::{DigitalInput, Line, PwmSink};

/// Outcome of one control-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub events: PressEvents,
    /// State after the tick.
    pub state: BrightnessState,
    pub command: Option<BrightnessCommand>,
    /// `None` when no command was issued.
    pub actuation: Option<Actuation>,
}

/// Buttons in, PWM out.
///
/// Owns both collaborators and all loop state, so several independent
/// controllers can coexist and none of them touches global state. `E` picks
/// the debounce policy; the default is the single-sample [`EdgeDetector`].
pub struct BrightnessController<I, S, E = EdgeDetector> {
    input: I,
    edges: E,
    machine: BrightnessStateMachine,
    actuator: BrightnessActuator<S>,
    config: ControllerConfig,
}

impl<I, S> BrightnessController<I, S, EdgeDetector>
where
    I: DigitalInput,
    S: PwmSink,
{
    pub fn new(input: I, sink: S, config: ControllerConfig) -> Self {
        Self::with_edge_source(input, sink, EdgeDetector::new(), config)
    }
}

impl<I, S, E> BrightnessController<I, S, E>
where
    I: DigitalInput,
    S: PwmSink,
    E: EdgeSource,
{
    pub fn with_edge_source(input: I, sink: S, edges: E, config: ControllerConfig) -> Self {
        Self {
            input,
            edges,
            machine: BrightnessStateMachine::new(),
            actuator: BrightnessActuator::new(sink, config.pwm_period),
            config,
        }
    }

    /// Reads both lines and derives this tick's press events.
    pub fn sample(&mut self) -> PressEvents {
        let on = self.input.read_level(Line::On);
        let off = self.input.read_level(Line::Off);
        self.edges.update(on, off)
    }

    /// Feeds events to the state machine and applies any resulting command.
    ///
    /// The state is committed before the PWM is touched, so a dropped command
    /// leaves the LED out of step with the state until the next command.
    pub fn evaluate(&mut self, events: PressEvents) -> TickReport {
        let command = self.machine.step(events);
        let actuation = command.map(|command| self.actuator.apply(command));

        TickReport {
            events,
            state: self.machine.state(),
            command,
            actuation,
        }
    }

    /// One iteration without waiting. The caller provides the delay between
    /// ticks, which is also the debounce window.
    pub fn tick(&mut self) -> TickReport {
        let events = self.sample();
        self.evaluate(events)
    }

    /// One iteration with the configured delay between sampling and
    /// evaluation.
    #[cfg(feature = "async")]
    pub async fn step<D: DelayNs>(&mut self, delay: &mut D) -> TickReport {
        let events = self.sample();
        delay.delay_ms(self.config.tick_period_ms).await;
        self.evaluate(events)
    }

    #[cfg(feature = "async")]
    pub async fn run<D: DelayNs>(&mut self, delay: &mut D) -> ! {
        info!("Brightness control running, tick {} ms", self.config.tick_period_ms);
        loop {
            self.step(delay).await;
        }
    }

    pub fn state(&self) -> BrightnessState {
        self.machine.state()
    }

    pub fn edge_source(&self) -> &E {
        &self.edges
    }

    pub fn sink(&self) -> &S {
        self.actuator.sink()
    }

    pub fn release(self) -> (I, S) {
        (self.input, self.actuator.release())
    }
}
