use crate::hardware::traits::DigitalLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    Present,
    Absent,
}

impl PressEvent {
    pub fn is_present(self) -> bool {
        self == PressEvent::Present
    }
}

/// Press events of one tick, one per button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvents {
    pub on: PressEvent,
    pub off: PressEvent,
}

impl PressEvents {
    pub const NONE: Self = Self::new(PressEvent::Absent, PressEvent::Absent);

    pub const fn new(on: PressEvent, off: PressEvent) -> Self {
        Self { on, off }
    }
}

/// Turns the per-tick levels of both buttons into press events.
pub trait EdgeSource {
    fn update(&mut self, on: DigitalLevel, off: DigitalLevel) -> PressEvents;
}

/// A press is a rising edge between two consecutive samples.
pub fn detect(previous: DigitalLevel, current: DigitalLevel) -> PressEvent {
    match (previous, current) {
        (DigitalLevel::Low, DigitalLevel::High) => PressEvent::Present,
        _ => PressEvent::Absent,
    }
}

/// Single-sample edge detector.
///
/// Keeps only the previous level of each line. There is no filtering of its
/// own: the delay between ticks is the whole debounce window, so contact
/// bounce that outlasts one tick can still produce a second press.
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    on_previous: DigitalLevel,
    off_previous: DigitalLevel,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            on_previous: DigitalLevel::Low,
            off_previous: DigitalLevel::Low,
        }
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeSource for EdgeDetector {
    fn update(&mut self, on: DigitalLevel, off: DigitalLevel) -> PressEvents {
        let events = PressEvents::new(detect(self.on_previous, on), detect(self.off_previous, off));

        self.on_previous = on;
        self.off_previous = off;

        events
    }
}
