use core::fmt;

/// Why a frequency/duration pair has no 16-bit timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneError {
    /// `frequency / 8` or `50000 / frequency` truncated to zero.
    DivideByZero { frequency: u16, duration: u16 },
    /// An intermediate product left the 16-bit range.
    Overflow { frequency: u16, duration: u16 },
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::DivideByZero { frequency, duration } => write!(
                f,
                "{} Hz for {} ms divides by zero (frequency must be 8..=50000 Hz)",
                frequency, duration
            ),
            ToneError::Overflow { frequency, duration } => write!(
                f,
                "{} Hz for {} ms overflows 16-bit timing",
                frequency, duration
            ),
        }
    }
}

impl core::error::Error for ToneError {}

/// Failure while playing a note: either the timing could not be computed or
/// the pin refused a write.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayError<E> {
    Timing(ToneError),
    Pin(E),
}

impl<E> From<ToneError> for PlayError<E> {
    fn from(err: ToneError) -> Self {
        PlayError::Timing(err)
    }
}

impl<E: fmt::Debug> fmt::Display for PlayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Timing(err) => write!(f, "tone timing: {}", err),
            PlayError::Pin(err) => write!(f, "beeper pin: {:?}", err),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for PlayError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            PlayError::Timing(err) => Some(err),
            PlayError::Pin(_) => None,
        }
    }
}
