pub mod gpio_button;
pub mod pwm_led;
pub mod traits;
