//! Wav test pattern glue on top of the chunk writer.
//!
//! Builds the same file the odd-chunk repro does: a mono float sine
//! wave plus a `LIST/INFO` block whose sub-chunks all carry odd length
//! text, which is what exercises the pad byte rule in practice.

use std::io::{Seek, Write};

use crate::riff::tag::Tag;
use crate::riff::writer::{ChunkWriter, RiffError};

pub const WAVE_FORMAT_IEEE_FLOAT: u16 = 0x0003;

/// The fixed layout `fmt ` chunk payload, 16 bytes little endian.
#[derive(Debug, Clone, Copy)]
pub struct PcmWaveFormat {
    pub format_tag: u16,
    pub channels: u16,
    pub samples_per_sec: u32,
    pub avg_bytes_per_sec: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl PcmWaveFormat {
    /// Mono 32 bit IEEE float, the layout the test pattern uses.
    pub fn float_mono(sample_rate: u32) -> Self {
        PcmWaveFormat {
            format_tag: WAVE_FORMAT_IEEE_FLOAT,
            channels: 1,
            samples_per_sec: sample_rate,
            avg_bytes_per_sec: sample_rate * 4,
            block_align: 4,
            bits_per_sample: 32,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16);
        bytes.extend_from_slice(&self.format_tag.to_le_bytes());
        bytes.extend_from_slice(&self.channels.to_le_bytes());
        bytes.extend_from_slice(&self.samples_per_sec.to_le_bytes());
        bytes.extend_from_slice(&self.avg_bytes_per_sec.to_le_bytes());
        bytes.extend_from_slice(&self.block_align.to_le_bytes());
        bytes.extend_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes
    }
}

/// Parameters for the synthetic test signal.
#[derive(Debug, Clone, Copy)]
pub struct TestPattern {
    pub sample_rate: u32,
    pub freq_hz: f32,
    pub num_samples: usize,
}

pub fn sine(freq_hz: f32, amplitude: f32, sample_rate: u32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            (2.0 * std::f32::consts::PI * freq_hz * i as f32 / sample_rate as f32).sin()
                * amplitude
        })
        .collect()
}

// All odd length on purpose, each one forces a pad byte before its
// sibling's header.
const INFO_COMMENTS: [([u8; 4], &str); 4] = [
    (*b"ICMT", "ICMT: odd"),
    (*b"CMNT", "CMNT: odd"),
    (*b"COMM", "COMM: odd"),
    (*b"IKEY", "IKEY: odd"),
];

/// Emits `RIFF/WAVE { fmt , data, LIST/INFO { ICMT, CMNT, COMM, IKEY } }`.
pub fn write_test_pattern<W: Write + Seek>(
    writer: &mut ChunkWriter<W>,
    pattern: &TestPattern,
) -> Result<(), RiffError> {
    writer.chunk(Tag::RIFF, Some(Tag::from(*b"WAVE")), |w| {
        w.chunk(Tag::from(*b"fmt "), None, |w| {
            w.write(&PcmWaveFormat::float_mono(pattern.sample_rate).to_bytes())
        })?;

        w.chunk(Tag::from(*b"data"), None, |w| {
            let samples = sine(pattern.freq_hz, 0.5, pattern.sample_rate, pattern.num_samples);
            let mut pcm = Vec::with_capacity(samples.len() * 4);
            for s in samples {
                pcm.extend_from_slice(&s.to_le_bytes());
            }
            w.write(&pcm)
        })?;

        w.chunk(Tag::LIST, Some(Tag::from(*b"INFO")), |w| {
            for (id, text) in INFO_COMMENTS {
                w.chunk(Tag::from(id), None, |w| w.write(text.as_bytes()))?;
            }
            Ok(())
        })
    })
}
