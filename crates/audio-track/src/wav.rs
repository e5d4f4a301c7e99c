//! WAV decoding into an [`AudioTrack`].

use std::path::Path;

use voxsub_common::error::{CaptionError, CaptionResult};

use crate::track::AudioTrack;

/// Load a WAV file, downmixing to mono by averaging channels.
///
/// Integer formats are shifted to the 16-bit scale, float formats are
/// rescaled to it, so RMS values are comparable regardless of the
/// source bit depth.
pub fn load_wav(path: &Path) -> CaptionResult<AudioTrack> {
    if !path.exists() {
        return Err(CaptionError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = hound::WavReader::open(path)
        .map_err(|e| CaptionError::audio(format!("cannot open {}: {e}", path.display())))?;
    let spec = reader.spec();

    tracing::debug!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        format = ?spec.sample_format,
        "Loading WAV"
    );

    let interleaved: Vec<i16> = match spec.sample_format {
        hound::SampleFormat::Int => match spec.bits_per_sample {
            16 => reader
                .samples::<i16>()
                .collect::<Result<_, _>>()
                .map_err(|e| CaptionError::audio(format!("decode error: {e}")))?,
            bits @ (24 | 32) => reader
                .samples::<i32>()
                .map(|s| s.map(|sample| (sample >> (bits - 16)) as i16))
                .collect::<Result<_, _>>()
                .map_err(|e| CaptionError::audio(format!("decode error: {e}")))?,
            bits => {
                return Err(CaptionError::audio(format!(
                    "unsupported bit depth: {bits}"
                )))
            }
        },
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|sample| (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16))
            .collect::<Result<_, _>>()
            .map_err(|e| CaptionError::audio(format!("decode error: {e}")))?,
    };

    let mono = downmix(&interleaved, spec.channels as usize);
    let track = AudioTrack::from_samples(mono, spec.sample_rate)?;

    tracing::info!(
        path = %path.display(),
        duration_secs = track.duration_secs(),
        "Decoded audio track"
    );
    Ok(track)
}

/// Average interleaved channels into a single mono channel.
fn downmix(interleaved: &[i16], channels: usize) -> Vec<i16> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| {
            let sum: i64 = frame.iter().map(|&s| s as i64).sum();
            (sum / channels as i64) as i16
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downmix_averages_channels() {
        let stereo = vec![100, 300, -50, 50, 0, 0];
        assert_eq!(downmix(&stereo, 2), vec![200, 0, 0]);
    }

    #[test]
    fn test_downmix_mono_passthrough() {
        let mono = vec![1, 2, 3];
        assert_eq!(downmix(&mono, 1), mono);
    }

    #[test]
    fn test_wav_round_trip() {
        let path = std::env::temp_dir().join(format!("voxsub-wav-test-{}.wav", std::process::id()));

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for _ in 0..8_000 {
            writer.write_sample(1_000_i16).unwrap();
        }
        writer.finalize().unwrap();

        let track = load_wav(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(track.sample_rate(), 8_000);
        assert_eq!(track.duration_ms(), 1_000);
        assert!((track.rms_between_ms(0, 1_000) - 1_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file() {
        let err = load_wav(Path::new("/nonexistent/audio.wav")).unwrap_err();
        assert!(matches!(
            err,
            CaptionError::FileNotFound { .. }
        ));
    }
}
