use super::traits::PwmSink;
use embedded_hal::pwm::SetDutyCycle;

/// LED driven by one PWM channel.
///
/// The channel's own resolution (`max_duty_cycle`) is hidden behind the
/// `pulse_width / period` fraction, so the caller can keep its fixed period.
pub struct PwmLed<P> {
    channel: P,
}

impl<P: SetDutyCycle> PwmLed<P> {
    pub fn new(channel: P) -> Self {
        Self { channel }
    }

    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> PwmSink for PwmLed<P> {
    type Error = P::Error;

    fn set_duty(&mut self, period: u32, pulse_width: u32) -> Result<(), Self::Error> {
        let duty = scale_duty(self.channel.max_duty_cycle(), period, pulse_width);
        self.channel.set_duty_cycle(duty)
    }
}

/// Pulse widths past the period saturate at full duty; a zero period is dark.
fn scale_duty(max_duty: u16, period: u32, pulse_width: u32) -> u16 {
    if period == 0 {
        return 0;
    }
    let pulse_width = pulse_width.min(period);
    (u64::from(max_duty) * u64::from(pulse_width) / u64::from(period)) as u16
}
