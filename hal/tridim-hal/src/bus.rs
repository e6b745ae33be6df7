//! Software serial bus timing
//!
//! The bit-banged two-wire bus has no peripheral clock of its own, so every
//! line transition is followed by an explicit hold delay derived from the
//! configured clock frequency.

/// Bus timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTiming {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for BusTiming {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BusTiming {
    /// Slow mode (10 kHz), for long wires or a sluggish pull-up
    pub const SLOW: Self = Self { frequency: 10_000 };

    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Create a timing for an arbitrary clock frequency
    pub const fn from_frequency(frequency: u32) -> Self {
        Self { frequency }
    }

    /// Hold time after each line transition, in nanoseconds
    ///
    /// Half of one clock period, rounded up so the bus never runs faster
    /// than requested. A zero frequency is treated as 1 Hz.
    pub const fn half_period_ns(&self) -> u32 {
        let freq = if self.frequency == 0 { 1 } else { self.frequency };
        let period = 1_000_000_000 / freq;
        (period + 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_period() {
        assert_eq!(BusTiming::STANDARD.half_period_ns(), 5_000);
        assert_eq!(BusTiming::FAST.half_period_ns(), 1_250);
        assert_eq!(BusTiming::SLOW.half_period_ns(), 50_000);
    }

    #[test]
    fn test_rounds_up() {
        // 3 MHz -> 333 ns period -> 167 ns half period
        assert_eq!(BusTiming::from_frequency(3_000_000).half_period_ns(), 167);
    }

    #[test]
    fn test_zero_frequency() {
        assert_eq!(BusTiming::from_frequency(0).half_period_ns(), 500_000_000);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(BusTiming::default(), BusTiming::STANDARD);
    }
}
