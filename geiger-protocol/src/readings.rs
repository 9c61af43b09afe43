//! Rate readings carried by a status frame

/// The four values shown on the display after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Pulses counted during the last tick
    pub per_second: u16,
    /// Highest `per_second` since the last reset
    pub peak_per_second: u16,
    /// Sum of the rolling one-minute window
    pub per_minute: u32,
    /// Highest `per_minute` since the last reset
    pub peak_per_minute: u32,
}

/// Values recovered from a received frame
///
/// The display has 16 columns, so a long line loses its `(max ..)` tail
/// and a peak comes back as `None`. A line that cannot be read at all
/// leaves both of its fields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PartialReadings {
    pub per_second: Option<u16>,
    pub peak_per_second: Option<u16>,
    pub per_minute: Option<u32>,
    pub peak_per_minute: Option<u32>,
}

impl PartialReadings {
    /// All four values, if every one survived
    pub fn complete(&self) -> Option<Readings> {
        Some(Readings {
            per_second: self.per_second?,
            peak_per_second: self.peak_per_second?,
            per_minute: self.per_minute?,
            peak_per_minute: self.peak_per_minute?,
        })
    }
}

impl From<Readings> for PartialReadings {
    fn from(readings: Readings) -> Self {
        Self {
            per_second: Some(readings.per_second),
            peak_per_second: Some(readings.peak_per_second),
            per_minute: Some(readings.per_minute),
            peak_per_minute: Some(readings.peak_per_minute),
        }
    }
}
