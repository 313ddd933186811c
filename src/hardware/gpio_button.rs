use super::traits::{DigitalInput, DigitalLevel, Line};
use embedded_hal::digital::InputPin;

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Button pulls the line high (pull-down resistor).
    ActiveHigh,
    /// Button shorts the line to ground (pull-up resistor).
    ActiveLow,
}

/// The ON and OFF buttons as a [`DigitalInput`].
pub struct ButtonLines<ON, OFF> {
    on: ON,
    off: OFF,
    polarity: Polarity,
}

impl<ON, OFF> ButtonLines<ON, OFF>
where
    ON: InputPin,
    OFF: InputPin,
{
    pub fn new(on: ON, off: OFF, polarity: Polarity) -> Self {
        Self { on, off, polarity }
    }
}

impl<ON, OFF> DigitalInput for ButtonLines<ON, OFF>
where
    ON: InputPin,
    OFF: InputPin,
{
    fn read_level(&mut self, line: Line) -> DigitalLevel {
        let pressed = match line {
            Line::On => is_pressed(&mut self.on, self.polarity),
            Line::Off => is_pressed(&mut self.off, self.polarity),
        };

        match pressed {
            Ok(pressed) => pressed.into(),
            Err(()) => {
                warn!("Reading button line {} failed, treating it as released", line);
                DigitalLevel::Low
            }
        }
    }
}

fn is_pressed<P: InputPin>(pin: &mut P, polarity: Polarity) -> Result<bool, ()> {
    let pressed = match polarity {
        Polarity::ActiveHigh => pin.is_high(),
        Polarity::ActiveLow => pin.is_low(),
    };
    pressed.map_err(|_| ())
}
