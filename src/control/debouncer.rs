//! Multi-sample debouncing.
//!
//! [`StableDebouncer`] is the stricter alternative to
//! [`EdgeDetector`](super::EdgeDetector): a level only becomes the line's
//! stable level after `N` consecutive samples agree, and presses are rising
//! edges of that stable level. With `N == 1` the two behave identically.

use heapless::HistoryBuffer;

use super::edge_detector::{EdgeSource, PressEvents, detect};
use crate::hardware::traits::DigitalLevel;

struct LineFilter<const N: usize> {
    history: HistoryBuffer<DigitalLevel, N>,
    stable: DigitalLevel,
}

impl<const N: usize> LineFilter<N> {
    fn new() -> Self {
        Self {
            history: HistoryBuffer::new(),
            stable: DigitalLevel::Low,
        }
    }

    /// Records a sample and returns the (previous, current) stable levels.
    fn push(&mut self, level: DigitalLevel) -> (DigitalLevel, DigitalLevel) {
        self.history.write(level);

        let previous = self.stable;
        let settled = self.history.len() == N && self.history.as_slice().iter().all(|l| *l == level);
        if settled {
            self.stable = level;
        }
        (previous, self.stable)
    }
}

pub struct StableDebouncer<const N: usize> {
    on: LineFilter<N>,
    off: LineFilter<N>,
}

impl<const N: usize> StableDebouncer<N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "debounce window must hold at least one sample") };
        Self {
            on: LineFilter::new(),
            off: LineFilter::new(),
        }
    }

    /// Levels currently accepted as stable, `(on, off)`.
    pub fn stable_levels(&self) -> (DigitalLevel, DigitalLevel) {
        (self.on.stable, self.off.stable)
    }
}

impl<const N: usize> Default for StableDebouncer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EdgeSource for StableDebouncer<N> {
    fn update(&mut self, on: DigitalLevel, off: DigitalLevel) -> PressEvents {
        let (on_previous, on_stable) = self.on.push(on);
        let (off_previous, off_stable) = self.off.push(off);

        PressEvents::new(detect(on_previous, on_stable), detect(off_previous, off_stable))
    }
}
