// Decoded-stream facts reported by header extraction

use serde::Serialize;

/// Size in bytes of one decoded PCM sample (signed 16-bit).
pub const PCM_SAMPLE_SIZE: u64 = std::mem::size_of::<i16>() as u64;

/// What a sound asset needs to know about the audio before decoding it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoundQualityInfo {
    /// Number of interleaved channels, at least 1
    pub num_channels: u32,
    /// Frames per second, never 0
    pub sample_rate: u32,
    /// Length in seconds
    pub duration: f32,
    /// Bytes of interleaved 16-bit PCM the whole stream decodes to
    pub sample_data_size: u64,
}

impl SoundQualityInfo {
    /// Build the info for a stream of `total_frames` PCM frames.
    ///
    /// `sample_rate` must be non-zero. Returns `None` when the decoded size
    /// does not fit in a `u64`.
    pub fn from_frames(num_channels: u32, sample_rate: u32, total_frames: u64) -> Option<Self> {
        let sample_data_size = total_frames
            .checked_mul(u64::from(num_channels))?
            .checked_mul(PCM_SAMPLE_SIZE)?;
        Some(SoundQualityInfo {
            num_channels,
            sample_rate,
            duration: (total_frames as f64 / sample_rate as f64) as f32,
            sample_data_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_seconds_of_stereo() {
        let info = SoundQualityInfo::from_frames(2, 44_100, 132_300).unwrap();
        assert_eq!(info.duration, 3.0);
        assert_eq!(info.sample_data_size, 529_200);
    }

    #[test]
    fn empty_stream() {
        let info = SoundQualityInfo::from_frames(1, 8_000, 0).unwrap();
        assert_eq!(info.duration, 0.0);
        assert_eq!(info.sample_data_size, 0);
    }

    #[test]
    fn oversized_stream_is_rejected() {
        assert_eq!(SoundQualityInfo::from_frames(2, 44_100, 0x7FFF_FFFF_FFFF_FFF0), None);
        assert_eq!(SoundQualityInfo::from_frames(255, 8_000, u64::MAX / 255), None);
        assert!(SoundQualityInfo::from_frames(1, 8_000, u64::MAX / 2).is_some());
    }
}
