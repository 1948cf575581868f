//! In-memory WAV encoding and decoding.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::Cursor;

/// Decoded PCM, samples normalised to `-1.0..=1.0` and still interleaved.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl DecodedWav {
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / (self.sample_rate as f32 * self.channels as f32)
    }
}

/// Encode mono samples as a 16-bit PCM WAV file.
pub fn encode_pcm16(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    {
        let mut writer = WavWriter::new(&mut buffer, spec)?;
        for &sample in samples {
            let value = (sample * i16::MAX as f32).clamp(i16::MIN as f32, i16::MAX as f32) as i16;
            writer.write_sample(value)?;
        }
        writer.finalize()?;
    }
    Ok(buffer.into_inner())
}

pub fn decode(bytes: &[u8]) -> Result<DecodedWav, hound::Error> {
    let mut reader = WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        SampleFormat::Int => {
            let max = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max))
                .collect::<Result<Vec<f32>, _>>()?
        }
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<f32>, _>>()?,
    };

    Ok(DecodedWav {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_writes_riff_header() {
        let bytes = encode_pcm16(&[0.0; 160], 16_000).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(bytes.len(), 44 + 320);
    }

    #[test]
    fn test_decode_reads_back_rate_and_level() {
        let bytes = encode_pcm16(&[0.5; 2400], 24_000).unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded.sample_rate, 24_000);
        assert_eq!(decoded.channels, 1);
        assert!((decoded.duration_secs() - 0.1).abs() < 1e-4);
        assert!(decoded.samples.iter().all(|s| (s - 0.5).abs() < 1e-3));
    }

    #[test]
    fn test_decode_rejects_non_wav() {
        assert!(decode(b"definitely not a wav file").is_err());
    }
}
