use crate::error::Error;
use crate::hardware::traits::PwmSink;

/// Brightness requested by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrightnessCommand {
    /// 0 %
    Off,
    /// 20 %
    Dim,
    /// 50 %
    Half,
    /// 100 %
    Full,
}

impl BrightnessCommand {
    pub const fn percent(self) -> u8 {
        match self {
            BrightnessCommand::Off => 0,
            BrightnessCommand::Dim => 20,
            BrightnessCommand::Half => 50,
            BrightnessCommand::Full => 100,
        }
    }

    /// Pulse width for this brightness, linear in the percentage. Never
    /// exceeds `period`.
    pub const fn pulse_width(self, period: u32) -> u32 {
        (self.percent() as u64 * period as u64 / 100) as u32
    }
}

impl TryFrom<u8> for BrightnessCommand {
    type Error = Error;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        match percent {
            0 => Ok(BrightnessCommand::Off),
            20 => Ok(BrightnessCommand::Dim),
            50 => Ok(BrightnessCommand::Half),
            100 => Ok(BrightnessCommand::Full),
            other => Err(Error::InvalidPercentage(other)),
        }
    }
}

/// What happened to a command handed to the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Actuation {
    Applied,
    /// The sink rejected the command. The LED keeps its previous duty until
    /// the next command; nothing is retried.
    Dropped,
}

pub struct BrightnessActuator<S> {
    sink: S,
    period: u32,
}

impl<S: PwmSink> BrightnessActuator<S> {
    pub fn new(sink: S, period: u32) -> Self {
        Self { sink, period }
    }

    pub fn apply(&mut self, command: BrightnessCommand) -> Actuation {
        let pulse_width = command.pulse_width(self.period);
        match self.sink.set_duty(self.period, pulse_width) {
            Ok(()) => {
                debug!("PWM pulse {}/{}", pulse_width, self.period);
                Actuation::Applied
            }
            Err(_) => {
                warn!("PWM rejected {}%, command dropped", command.percent());
                Actuation::Dropped
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn release(self) -> S {
        self.sink
    }
}
