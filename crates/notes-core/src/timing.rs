//! Frequency/duration to loop timing, in 16-bit integer arithmetic.
//!
//! ```text
//! period = 57600 / (frequency / 8) - 2
//! cycles = (duration * 10) / (50000 / frequency) * 10
//! ```
//!
//! Every division truncates and the steps run in exactly this order; the
//! truncation is part of the result. The target has no hardware divider or
//! FPU, so the constants are arranged to stay inside `u16` for roughly
//! 440..10000 Hz and 20..6000 ms.

use crate::error::ToneError;

const PERIOD_NUMERATOR: u16 = 57600;
const FREQUENCY_DIVISOR: u16 = 8;
const PERIOD_OFFSET: u16 = 2;
const HALF_PERIOD_NUMERATOR: u16 = 50000;
const CYCLE_SCALE: u16 = 10;

/// How 16-bit overflow is treated. Division by zero is an error under both.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arithmetic {
    /// Overflow is reported as [`ToneError::Overflow`].
    #[default]
    Checked,
    /// Overflow wraps modulo 2^16, like `unsigned int` on the 16-bit trainer MCU.
    Wrapping,
}

impl Arithmetic {
    fn mul(self, lhs: u16, rhs: u16) -> Option<u16> {
        match self {
            Arithmetic::Checked => lhs.checked_mul(rhs),
            Arithmetic::Wrapping => Some(lhs.wrapping_mul(rhs)),
        }
    }

    fn sub(self, lhs: u16, rhs: u16) -> Option<u16> {
        match self {
            Arithmetic::Checked => lhs.checked_sub(rhs),
            Arithmetic::Wrapping => Some(lhs.wrapping_sub(rhs)),
        }
    }
}

/// Half-period length in busy-loop units and number of pin toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneTiming {
    pub period: u16,
    pub cycles: u16,
}

impl ToneTiming {
    pub const fn new(period: u16, cycles: u16) -> Self {
        Self { period, cycles }
    }

    pub fn from_freq(
        frequency: u16,
        duration: u16,
        arithmetic: Arithmetic,
    ) -> Result<Self, ToneError> {
        let divide_by_zero = ToneError::DivideByZero { frequency, duration };
        let overflow = ToneError::Overflow { frequency, duration };

        let period = PERIOD_NUMERATOR
            .checked_div(frequency / FREQUENCY_DIVISOR)
            .ok_or(divide_by_zero)?;
        let period = arithmetic.sub(period, PERIOD_OFFSET).ok_or(overflow)?;

        let scaled_duration = arithmetic.mul(duration, CYCLE_SCALE).ok_or(overflow)?;
        // half-period in units of 10 us; truncates to zero above 50 kHz
        let half_period = HALF_PERIOD_NUMERATOR / frequency;
        let cycles = scaled_duration
            .checked_div(half_period)
            .ok_or(divide_by_zero)?;
        let cycles = arithmetic.mul(cycles, CYCLE_SCALE).ok_or(overflow)?;

        Ok(Self { period, cycles })
    }
}
