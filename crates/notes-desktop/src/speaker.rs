//! Plays recorded pin activity through the sound card when built with the
//! `audio` feature; otherwise recordings are only reported in the log.

use crate::wave::Recording;

#[cfg(feature = "audio")]
pub struct Speaker {
    _stream: rodio::OutputStream,
    stream_handle: rodio::OutputStreamHandle,
}

#[cfg(feature = "audio")]
impl Speaker {
    pub fn new() -> anyhow::Result<Self> {
        use anyhow::Context as _;

        let (stream, stream_handle) =
            rodio::OutputStream::try_default().context("failed to open audio output")?;
        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Blocks for the length of the recording, like the firmware does.
    pub fn play(&self, recording: Recording) -> anyhow::Result<()> {
        use rodio::Source as _;

        if recording.is_silent() {
            return Ok(());
        }
        let duration = recording.duration();
        let source = recording.into_wave(crate::wave::SAMPLE_RATE);
        self.stream_handle.play_raw(source.convert_samples())?;

        // play_raw returns immediately
        std::thread::sleep(duration);
        Ok(())
    }
}

#[cfg(not(feature = "audio"))]
pub struct Speaker;

#[cfg(not(feature = "audio"))]
impl Speaker {
    pub fn new() -> anyhow::Result<Self> {
        log::info!("built without the `audio` feature; tones are only logged");
        Ok(Self)
    }

    pub fn play(&self, _recording: Recording) -> anyhow::Result<()> {
        Ok(())
    }
}
