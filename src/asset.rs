// Sound wave asset

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::error::HeaderError;
use crate::ogg::read_compressed_info;
use crate::quality::SoundQualityInfo;

/// Compressed format key for Ogg Vorbis data
pub const OGG_FORMAT: &str = "OGG";

/// Mixing group a sound wave belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundGroup {
    #[default]
    Default,
    Effects,
    Ui,
    Music,
    Voice,
}

/// A playable sound: compressed bytes plus what the mixer needs to know
/// before decoding them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundWave {
    pub sound_group: SoundGroup,
    pub num_channels: u32,
    pub sample_rate: u32,
    /// Length in seconds
    pub duration: f32,
    /// Bytes of 16-bit PCM the compressed data decodes to
    pub raw_pcm_data_size: u64,
    /// Identifies the compressed data to the audio device
    pub compressed_data_guid: Uuid,
    #[serde(skip)]
    compressed_format_data: BTreeMap<String, Vec<u8>>,
}

impl Default for SoundWave {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundWave {
    /// Create an empty wave with a fresh compressed data GUID
    pub fn new() -> Self {
        SoundWave {
            sound_group: SoundGroup::Default,
            num_channels: 0,
            sample_rate: 0,
            duration: 0.0,
            raw_pcm_data_size: 0,
            compressed_data_guid: Uuid::new_v4(),
            compressed_format_data: BTreeMap::new(),
        }
    }

    /// Compressed bytes stored for a format (e.g. "OGG")
    pub fn compressed_format_data(&self, format: &str) -> Option<&[u8]> {
        self.compressed_format_data
            .get(&format.to_ascii_uppercase())
            .map(Vec::as_slice)
    }

    /// Store compressed bytes for a format, replacing any previous data
    pub fn set_compressed_format_data(&mut self, format: &str, data: Vec<u8>) {
        self.compressed_format_data
            .insert(format.to_ascii_uppercase(), data);
    }

    /// Names of the formats that have compressed data
    pub fn compressed_formats(&self) -> impl Iterator<Item = &str> {
        self.compressed_format_data.keys().map(String::as_str)
    }

    /// Copy extracted header info onto the wave
    pub fn apply_quality_info(&mut self, info: &SoundQualityInfo) {
        self.sound_group = SoundGroup::Default;
        self.num_channels = info.num_channels;
        self.duration = info.duration;
        self.raw_pcm_data_size = info.sample_data_size;
        self.sample_rate = info.sample_rate;
    }
}

/// Read the Ogg Vorbis header in `data` and refresh the wave's metadata.
///
/// On error the wave is left exactly as it was.
pub fn fill_sound_wave_info(wave: &mut SoundWave, data: &[u8]) -> Result<(), HeaderError> {
    let info = read_compressed_info(data)?;
    wave.apply_quality_info(&info);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ogg::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_waves_get_distinct_guids() {
        assert_ne!(SoundWave::new().compressed_data_guid, SoundWave::new().compressed_data_guid);
    }

    #[test]
    fn format_keys_are_case_insensitive() {
        let mut wave = SoundWave::new();
        wave.set_compressed_format_data("ogg", vec![1, 2, 3]);
        assert_eq!(wave.compressed_format_data(OGG_FORMAT), Some(&[1u8, 2, 3][..]));
        assert_eq!(wave.compressed_formats().collect::<Vec<_>>(), vec!["OGG"]);
        assert_eq!(wave.compressed_format_data("opus"), None);
    }

    #[test]
    fn fill_copies_all_fields() {
        let mut wave = SoundWave::new();
        wave.sound_group = SoundGroup::Music;
        fill_sound_wave_info(&mut wave, &fixtures::stereo_three_seconds()).unwrap();

        assert_eq!(wave.sound_group, SoundGroup::Default);
        assert_eq!(wave.num_channels, 2);
        assert_eq!(wave.sample_rate, 44_100);
        assert_eq!(wave.duration, 3.0);
        assert_eq!(wave.raw_pcm_data_size, 529_200);
    }

    #[test]
    fn failed_fill_leaves_wave_untouched() {
        let mut wave = SoundWave::new();
        wave.sound_group = SoundGroup::Voice;
        wave.num_channels = 6;
        let before = wave.clone();

        assert!(fill_sound_wave_info(&mut wave, &[]).is_err());
        assert!(fill_sound_wave_info(&mut wave, b"not an ogg file at all, just some text padding it out").is_err());
        assert_eq!(wave, before);
    }
}
