//! One pass of the button polling loop.

use embedded_hal::delay::DelayNs;

use crate::beeper::Beeper;
use crate::delay::LoopDelay;
use crate::error::PlayError;
use crate::input::{Input, Switch};
use crate::notes;
use crate::tone::TonePlayer;

/// What a poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Poll {
    Idle,
    /// Number of notes played, one per pressed switch.
    Played(u8),
    /// SW1 is down; the board should restart into its bootloader.
    Reset,
}

/// Maps each switch to one way of making C5 (or C6):
///
/// - SW2: C5 with a calibrated 956 us delay
/// - SW3: C6 with a calibrated 478 us delay
/// - SW4: C5 through [`TonePlayer::play_sound`] with a precomputed loop period
/// - SW5: C5 for 500 ms through [`TonePlayer::play_freq`]
/// - SW1: bootloader reset
pub struct Trainer<B, L, D> {
    player: TonePlayer<B, L>,
    delay: D,
}

impl<B, L, D> Trainer<B, L, D>
where
    B: Beeper,
    L: LoopDelay,
    D: DelayNs,
{
    pub fn new(beeper: B, spin: L, delay: D) -> Self {
        Self {
            player: TonePlayer::new(beeper, spin),
            delay,
        }
    }

    /// Check the switches in order and play a note for every one held down.
    /// Each note finishes before the next switch is looked at.
    pub fn poll(&mut self, input: &Input) -> Result<Poll, PlayError<B::Error>> {
        let mut played = 0;

        if input.is_pressed(Switch::Sw2) {
            self.player
                .play_fixed::<{ notes::C5_HALF_PERIOD_US }>(&mut self.delay, notes::FIXED_NOTE_CYCLES)
                .map_err(PlayError::Pin)?;
            played += 1;
        }

        if input.is_pressed(Switch::Sw3) {
            self.player
                .play_fixed::<{ notes::C6_HALF_PERIOD_US }>(&mut self.delay, notes::FIXED_NOTE_CYCLES)
                .map_err(PlayError::Pin)?;
            played += 1;
        }

        if input.is_pressed(Switch::Sw4) {
            self.player
                .play_sound(notes::C5_LOOP_PERIOD, notes::FIXED_NOTE_CYCLES)
                .map_err(PlayError::Pin)?;
            played += 1;
        }

        if input.is_pressed(Switch::Sw5) {
            self.player.play_freq(notes::C5, notes::FORMULA_NOTE_MS)?;
            played += 1;
        }

        if input.is_pressed(Switch::Sw1) {
            log::info!("SW1 down, requesting bootloader reset");
            return Ok(Poll::Reset);
        }

        log::trace!("poll: played {} notes", played);
        Ok(if played == 0 {
            Poll::Idle
        } else {
            Poll::Played(played)
        })
    }

    pub fn play_phrase(&mut self, phrase: &[(u16, u16)]) -> Result<(), PlayError<B::Error>> {
        self.player.play_phrase(phrase)
    }
}
