//! Activity indicator
//!
//! Wraps the LED pin so callers think in on/off rather than pin levels.
//! Some detector boards sink the LED current, hence the polarity
//! flag.

use geiger_hal::OutputPin;

/// Activity LED with configurable polarity
pub struct Indicator<P: OutputPin> {
    pin: P,
    active_low: bool,
}

impl<P: OutputPin> Indicator<P> {
    /// Take ownership of the pin and switch the indicator off
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut indicator = Self { pin, active_low };
        indicator.off();
        indicator
    }

    /// Light the indicator
    pub fn on(&mut self) {
        self.pin.set_state(!self.active_low);
    }

    /// Extinguish the indicator
    pub fn off(&mut self) {
        self.pin.set_state(self.active_low);
    }

    /// Flip the indicator
    pub fn toggle(&mut self) {
        self.pin.toggle();
    }

    /// Whether the indicator is lit
    pub fn is_on(&self) -> bool {
        self.pin.is_set_high() != self.active_low
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Pin that remembers its level and counts edges
    #[derive(Default)]
    pub(crate) struct MockPin {
        pub high: bool,
        pub edges: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high() {
        let mut led = Indicator::new(MockPin::default(), false);
        assert!(!led.is_on());

        led.on();
        assert!(led.is_on());
        assert!(led.into_inner().high);
    }

    #[test]
    fn test_active_low() {
        let mut led = Indicator::new(MockPin::default(), true);
        // Off means driven high
        assert!(!led.is_on());

        led.on();
        assert!(led.is_on());
        led.toggle();
        assert!(!led.is_on());
        assert!(led.into_inner().high);
    }
}
