//! The two tone players, plus the calibrated fixed-note loop the buttons use.

use embedded_hal::delay::DelayNs;

use crate::beeper::Beeper;
use crate::delay::LoopDelay;
use crate::error::PlayError;
use crate::timing::{Arithmetic, ToneTiming};

/// Owns the beeper and the busy-wait, and plays notes on them. Every call
/// blocks until the note has finished.
pub struct TonePlayer<B, L> {
    beeper: B,
    spin: L,
}

impl<B: Beeper, L: LoopDelay> TonePlayer<B, L> {
    pub fn new(beeper: B, spin: L) -> Self {
        Self { beeper, spin }
    }

    /// Toggle the beeper `cycles` times, counting `period` loop iterations
    /// after each toggle.
    ///
    /// The note length depends on the CPU and how the loop was compiled; use
    /// the reference board calibration in [`crate::consts`] to estimate it.
    pub fn play_sound(&mut self, period: u16, cycles: u16) -> Result<(), B::Error> {
        log::debug!("play_sound: period={} cycles={}", period, cycles);
        for _ in 0..cycles {
            self.beeper.toggle()?;
            self.spin.spin(period);
        }
        Ok(())
    }

    /// Play `frequency` Hz for roughly `duration` ms, rejecting inputs whose
    /// timing does not fit 16 bits. Returns the timing that was played.
    pub fn play_freq(
        &mut self,
        frequency: u16,
        duration: u16,
    ) -> Result<ToneTiming, PlayError<B::Error>> {
        self.play_freq_with(frequency, duration, Arithmetic::Checked)
    }

    pub fn play_freq_with(
        &mut self,
        frequency: u16,
        duration: u16,
        arithmetic: Arithmetic,
    ) -> Result<ToneTiming, PlayError<B::Error>> {
        let timing = ToneTiming::from_freq(frequency, duration, arithmetic)?;
        log::debug!(
            "play_freq: {} Hz for {} ms -> period={} cycles={}",
            frequency,
            duration,
            timing.period,
            timing.cycles
        );
        self.play_sound(timing.period, timing.cycles)
            .map_err(PlayError::Pin)?;
        Ok(timing)
    }

    /// Play `(frequency, duration)` pairs back to back. Stops at the first failure.
    pub fn play_phrase(&mut self, phrase: &[(u16, u16)]) -> Result<(), PlayError<B::Error>> {
        for &(frequency, duration) in phrase {
            self.play_freq(frequency, duration)?;
        }
        Ok(())
    }

    /// Toggle the beeper `cycles` times with a calibrated delay of
    /// `HALF_PERIOD_US` between toggles. The half-period is fixed at compile
    /// time; runtime periods go through [`TonePlayer::play_sound`].
    pub fn play_fixed<const HALF_PERIOD_US: u32>(
        &mut self,
        delay: &mut impl DelayNs,
        cycles: u16,
    ) -> Result<(), B::Error> {
        for _ in 0..cycles {
            self.beeper.toggle()?;
            delay.delay_us(HALF_PERIOD_US);
        }
        Ok(())
    }
}
