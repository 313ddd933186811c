/// Logical level of a button line. `High` means pressed, whatever the wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitalLevel {
    Low,
    High,
}

impl From<bool> for DigitalLevel {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    On,
    Off,
}

pub trait DigitalInput {
    fn read_level(&mut self, line: Line) -> DigitalLevel;
}

pub trait PwmSink {
    type Error;

    fn set_duty(&mut self, period: u32, pulse_width: u32) -> Result<(), Self::Error>;
}
