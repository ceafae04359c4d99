//! Stereo 16-bit sample buffer.

use crate::error::{AudioError, AudioResult};

/// One stereo frame of signed 16-bit samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct StereoFrame {
    /// Left channel sample.
    pub left: i16,
    /// Right channel sample.
    pub right: i16,
}

impl StereoFrame {
    /// Creates a frame.
    pub fn new(left: i16, right: i16) -> Self {
        Self { left, right }
    }

    /// Interleaved little-endian bytes: left then right.
    pub fn to_le_bytes(self) -> [u8; 4] {
        let [l0, l1] = self.left.to_le_bytes();
        let [r0, r1] = self.right.to_le_bytes();
        [l0, l1, r0, r1]
    }

    /// Parses a frame from four interleaved little-endian bytes.
    pub fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self {
            left: i16::from_le_bytes([bytes[0], bytes[1]]),
            right: i16::from_le_bytes([bytes[2], bytes[3]]),
        }
    }
}

/// Stereo channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Left channel.
    Left,
    /// Right channel.
    Right,
}

/// Ordered sequence of stereo frames produced by one synthesis call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleBuffer {
    frames: Vec<StereoFrame>,
}

impl SampleBuffer {
    /// Wraps a frame vector.
    pub fn new(frames: Vec<StereoFrame>) -> Self {
        Self { frames }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Borrow the frames.
    pub fn frames(&self) -> &[StereoFrame] {
        &self.frames
    }

    /// Take ownership of the frames.
    pub fn into_frames(self) -> Vec<StereoFrame> {
        self.frames
    }

    /// Iterates one channel's samples.
    pub fn channel(&self, channel: Channel) -> impl Iterator<Item = i16> + '_ {
        self.frames.iter().map(move |frame| match channel {
            Channel::Left => frame.left,
            Channel::Right => frame.right,
        })
    }

    /// One channel as normalized `f32` in `[-1, 1)`.
    pub fn channel_f32(&self, channel: Channel) -> Vec<f32> {
        self.channel(channel)
            .map(|sample| sample as f32 / 32768.0)
            .collect()
    }

    /// Largest absolute sample value across both channels.
    pub fn peak(&self) -> u16 {
        self.frames
            .iter()
            .flat_map(|frame| [frame.left, frame.right])
            .map(i16::unsigned_abs)
            .max()
            .unwrap_or(0)
    }

    /// Interleaved little-endian PCM bytes.
    pub fn to_pcm_bytes(&self) -> Vec<u8> {
        let mut pcm = Vec::with_capacity(self.frames.len() * 4);
        for frame in &self.frames {
            pcm.extend_from_slice(&frame.to_le_bytes());
        }
        pcm
    }

    /// Parses interleaved little-endian PCM bytes.
    ///
    /// The length must be a whole number of 4-byte frames.
    pub fn from_pcm_bytes(pcm: &[u8]) -> AudioResult<Self> {
        if pcm.len() % 4 != 0 {
            return Err(AudioError::decode(format!(
                "PCM length {} is not a multiple of the 4-byte stereo frame",
                pcm.len()
            )));
        }
        let frames = pcm
            .chunks_exact(4)
            .map(|chunk| StereoFrame::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Ok(Self { frames })
    }
}

impl From<Vec<StereoFrame>> for SampleBuffer {
    fn from(frames: Vec<StereoFrame>) -> Self {
        Self::new(frames)
    }
}
