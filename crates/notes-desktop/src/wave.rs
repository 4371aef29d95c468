//! What the beeper pin did during one poll, and (with `audio`) a square wave
//! rendered from it.

use std::time::Duration;

/// Output level of the rendered wave; keeps the buzzer well below clipping.
#[cfg(feature = "audio")]
const AMPLITUDE: f32 = 0.15;

#[cfg(feature = "audio")]
pub const SAMPLE_RATE: u32 = 48000;

/// Pin edges relative to the start of the recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    edges_ns: Vec<u64>,
    duration_ns: u64,
}

impl Recording {
    pub fn new(edges_ns: Vec<u64>, duration_ns: u64) -> Self {
        Self {
            edges_ns,
            duration_ns,
        }
    }

    pub fn toggles(&self) -> usize {
        self.edges_ns.len()
    }

    pub fn is_silent(&self) -> bool {
        self.edges_ns.is_empty()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_nanos(self.duration_ns)
    }

    /// Pitch implied by the mean spacing of the edges; needs at least two.
    pub fn estimated_frequency(&self) -> Option<f32> {
        let (first, last) = (self.edges_ns.first()?, self.edges_ns.last()?);
        if last == first {
            return None;
        }
        let half_periods = (self.edges_ns.len() - 1) as f64;
        let span_s = (last - first) as f64 / 1e9;
        Some((half_periods / span_s / 2.0) as f32)
    }

    #[cfg(feature = "audio")]
    pub fn into_wave(self, sample_rate: u32) -> SquareWave {
        SquareWave::new(self, sample_rate)
    }
}

/// Samples of the recorded pin level at a fixed rate. The pin is taken to be
/// low when the recording starts; the phase is inaudible.
#[cfg(feature = "audio")]
pub struct SquareWave {
    edges_ns: Vec<u64>,
    next_edge: usize,
    high: bool,
    sample_rate: u32,
    num_samples: usize,
    current_sample: usize,
}

#[cfg(feature = "audio")]
impl SquareWave {
    fn new(recording: Recording, sample_rate: u32) -> Self {
        let num_samples =
            (u128::from(recording.duration_ns) * u128::from(sample_rate) / 1_000_000_000) as usize;
        Self {
            edges_ns: recording.edges_ns,
            next_edge: 0,
            high: false,
            sample_rate,
            num_samples,
            current_sample: 0,
        }
    }
}

#[cfg(feature = "audio")]
impl Iterator for SquareWave {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_sample >= self.num_samples {
            return None;
        }

        let t_ns =
            (self.current_sample as u128 * 1_000_000_000 / u128::from(self.sample_rate)) as u64;
        while self.next_edge < self.edges_ns.len() && self.edges_ns[self.next_edge] <= t_ns {
            self.high = !self.high;
            self.next_edge += 1;
        }
        self.current_sample += 1;

        Some(if self.high { AMPLITUDE } else { -AMPLITUDE })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_samples - self.current_sample;
        (remaining, Some(remaining))
    }
}

#[cfg(feature = "audio")]
impl rodio::Source for SquareWave {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.num_samples - self.current_sample)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f64(
            self.num_samples as f64 / f64::from(self.sample_rate),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_frequency() {
        // 1 ms half-periods -> 500 Hz
        let recording = Recording::new(vec![0, 1_000_000, 2_000_000, 3_000_000], 4_000_000);
        assert_eq!(recording.toggles(), 4);
        assert_eq!(recording.estimated_frequency(), Some(500.0));
    }

    #[test]
    fn test_too_few_edges_have_no_pitch() {
        assert_eq!(Recording::new(vec![], 1_000).estimated_frequency(), None);
        assert_eq!(Recording::new(vec![5], 1_000).estimated_frequency(), None);
    }

    #[test]
    fn test_silence() {
        assert!(Recording::new(vec![], 5_000).is_silent());
        assert!(!Recording::new(vec![0], 5_000).is_silent());
    }

    #[cfg(feature = "audio")]
    #[test]
    fn test_square_wave_follows_edges() {
        // 10 samples at 10 kHz, edges at 0.2 ms and 0.5 ms
        let recording = Recording::new(vec![200_000, 500_000], 1_000_000);
        let samples: Vec<f32> = recording.into_wave(10_000).collect();

        let high = AMPLITUDE;
        let low = -AMPLITUDE;
        assert_eq!(
            samples,
            [low, low, high, high, high, low, low, low, low, low]
        );
    }

    #[cfg(feature = "audio")]
    #[test]
    fn test_silent_recording_renders_flat() {
        let mut wave = Recording::new(vec![], 1_000_000).into_wave(SAMPLE_RATE);
        assert_eq!(wave.size_hint(), (48, Some(48)));
        assert!(wave.all(|sample| sample == -AMPLITUDE));
    }
}
