//! Controller timing and PWM scaling.

/// Delay between sampling the buttons and evaluating them. Doubles as the
/// debounce window.
pub const TICK_PERIOD_MS: u32 = 40;

/// PWM period in pulse-width units. With a 100 Hz timer this is 10 ms, and a
/// brightness of `p` percent maps to a pulse width of `p * 100`.
pub const PWM_PERIOD: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    pub tick_period_ms: u32,
    pub pwm_period: u32,
}

impl ControllerConfig {
    pub const fn new(tick_period_ms: u32, pwm_period: u32) -> Self {
        Self {
            tick_period_ms,
            pwm_period,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new(TICK_PERIOD_MS, PWM_PERIOD)
    }
}
