use super::actuator::BrightnessCommand;
use super::edge_detector::PressEvents;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrightnessState {
    Init,
    Level20,
    Level50,
    Level100,
}

/// Mealy machine stepping through the brightness levels.
///
/// ON walks `Init -> 20 -> 50 -> 100 -> 20 -> ...`, OFF returns to `Init`
/// from any lit state. The command emitted depends on both the state and the
/// event, and nothing is emitted on a self-loop.
pub struct BrightnessStateMachine {
    state: BrightnessState,
}

impl BrightnessStateMachine {
    pub const fn new() -> Self {
        Self {
            state: BrightnessState::Init,
        }
    }

    pub fn state(&self) -> BrightnessState {
        self.state
    }

    /// Consumes one tick worth of events.
    pub fn step(&mut self, events: PressEvents) -> Option<BrightnessCommand> {
        let (next, command) = transition(self.state, events)?;

        info!("Brightness {} -> {} ({}%)", self.state, next, command.percent());
        self.state = next;

        Some(command)
    }
}

impl Default for BrightnessStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// The transition table. `None` is a self-loop without output.
///
/// In the lit states ON is checked first, so a tick where both buttons fired
/// takes the ON transition and the OFF press is lost. `Init` only reacts to a
/// lone ON press.
pub fn transition(
    state: BrightnessState,
    events: PressEvents,
) -> Option<(BrightnessState, BrightnessCommand)> {
    use BrightnessCommand as Cmd;
    use BrightnessState::*;

    let on = events.on.is_present();
    let off = events.off.is_present();

    match (state, on, off) {
        (Init, true, false) => Some((Level20, Cmd::Dim)),
        // Already dark, and a simultaneous OFF cancels the ON press.
        (Init, _, _) => None,
        (Level20, true, _) => Some((Level50, Cmd::Half)),
        (Level50, true, _) => Some((Level100, Cmd::Full)),
        (Level100, true, _) => Some((Level20, Cmd::Dim)),
        (_, false, true) => Some((Init, Cmd::Off)),
        (_, false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::edge_detector::PressEvent::{Absent, Present};
    use BrightnessState::*;

    const ON: PressEvents = PressEvents::new(Present, Absent);
    const OFF: PressEvents = PressEvents::new(Absent, Present);
    const BOTH: PressEvents = PressEvents::new(Present, Present);
    const NONE: PressEvents = PressEvents::NONE;

    const ALL_STATES: [BrightnessState; 4] = [Init, Level20, Level50, Level100];

    fn machine_in(state: BrightnessState) -> BrightnessStateMachine {
        BrightnessStateMachine { state }
    }

    #[test]
    fn on_presses_cycle_levels() {
        let mut machine = BrightnessStateMachine::new();
        let commands: Vec<_> = (0..4).map(|_| machine.step(ON).unwrap().percent()).collect();

        assert_eq!(commands, [20, 50, 100, 20]);
        assert_eq!(machine.state(), Level20);
    }

    #[test]
    fn off_returns_to_init_from_lit_states() {
        for state in [Level20, Level50, Level100] {
            let mut machine = machine_in(state);
            assert_eq!(machine.step(OFF), Some(BrightnessCommand::Off));
            assert_eq!(machine.state(), Init);
        }
    }

    #[test]
    fn off_after_many_on_presses() {
        let mut machine = BrightnessStateMachine::new();
        for _ in 0..11 {
            machine.step(ON);
        }
        assert_eq!(machine.step(OFF), Some(BrightnessCommand::Off));
        assert_eq!(machine.state(), Init);
    }

    #[test]
    fn off_in_init_is_a_no_op() {
        let mut machine = BrightnessStateMachine::new();
        assert_eq!(machine.step(OFF), None);
        assert_eq!(machine.state(), Init);
    }

    #[test]
    fn no_events_never_change_state() {
        for state in ALL_STATES {
            let mut machine = machine_in(state);
            assert_eq!(machine.step(NONE), None);
            assert_eq!(machine.state(), state);
        }
    }

    #[test]
    fn simultaneous_presses_take_on_transition_when_lit() {
        for state in [Level20, Level50, Level100] {
            assert_eq!(transition(state, BOTH), transition(state, ON));
        }

        let mut machine = machine_in(Level50);
        assert_eq!(machine.step(BOTH), Some(BrightnessCommand::Full));
        assert_eq!(machine.state(), Level100);
    }

    #[test]
    fn simultaneous_presses_in_init_are_ignored() {
        let mut machine = BrightnessStateMachine::new();
        assert_eq!(machine.step(BOTH), None);
        assert_eq!(machine.state(), Init);
    }

    #[test]
    fn full_table() {
        use BrightnessCommand::*;

        let expected = [
            (Init, NONE, None),
            (Init, ON, Some((Level20, Dim))),
            (Init, OFF, None),
            (Init, BOTH, None),
            (Level20, NONE, None),
            (Level20, ON, Some((Level50, Half))),
            (Level20, OFF, Some((Init, Off))),
            (Level20, BOTH, Some((Level50, Half))),
            (Level50, NONE, None),
            (Level50, ON, Some((Level100, Full))),
            (Level50, OFF, Some((Init, Off))),
            (Level50, BOTH, Some((Level100, Full))),
            (Level100, NONE, None),
            (Level100, ON, Some((Level20, Dim))),
            (Level100, OFF, Some((Init, Off))),
            (Level100, BOTH, Some((Level20, Dim))),
        ];

        for (state, events, outcome) in expected {
            assert_eq!(transition(state, events), outcome, "{state:?} on {events:?}");

            let mut machine = machine_in(state);
            let command = machine.step(events);
            assert_eq!(command, outcome.map(|(_, command)| command));
            assert_eq!(machine.state(), outcome.map_or(state, |(next, _)| next));
        }
    }
}
