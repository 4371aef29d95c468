//! Note frequencies and the canned settings used by the trainer buttons.

/// A4, in Hz.
pub const A4: u16 = 440;
/// C5 (middle C on the trainer worksheet), in Hz.
pub const C5: u16 = 523;
/// C#5, in Hz.
pub const CS5: u16 = 554;
pub const E5: u16 = 659;
pub const A5: u16 = 880;

/// Calibrated half-period of C5, in microseconds.
pub const C5_HALF_PERIOD_US: u32 = 956;
/// Calibrated half-period of C6, one octave up.
pub const C6_HALF_PERIOD_US: u32 = 478;

/// Half-periods for the fixed notes; about half a second of C5.
pub const FIXED_NOTE_CYCLES: u16 = 523;

/// Busy-loop half-period for C5 on the reference board.
pub const C5_LOOP_PERIOD: u16 = 879;

/// How long SW5 plays C5 through the frequency formula, in milliseconds.
pub const FORMULA_NOTE_MS: u16 = 500;

/// A major arpeggio: A4, C#5, E5 short, then a long A5. `(frequency Hz, duration ms)`.
pub const ARPEGGIO: [(u16, u16); 4] = [(A4, 200), (CS5, 200), (E5, 200), (A5, 800)];
