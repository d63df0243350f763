//! oggwave - load Ogg Vorbis files from disk as playable engine sound assets.
//!
//! The crate reads just enough of the Vorbis headers to fill in a
//! [`SoundWave`] (channels, sample rate, duration and decoded PCM size) and
//! then hands the asset to the host engine's playback through the
//! [`Playback`] trait.

pub mod asset;
pub mod engine;
pub mod error;
pub mod library;
pub mod ogg;
pub mod quality;
mod utils;

#[cfg(feature = "python")]
mod python;

pub use asset::{fill_sound_wave_info, SoundGroup, SoundWave, OGG_FORMAT};
pub use engine::{
    ActiveSound, AttachLocation, AttachOptions, AudioComponent, AudioDevice, Playback,
    PlaybackSettings, SceneComponentId, SoundAttenuation, SoundSourceId, Vector3, WaveInstance,
};
pub use error::{FindSourceError, HeaderError, LoadError};
pub use library::{
    find_source, load_sound_wave, play_sound_at_location_from_file, play_sound_attached_from_file,
    sound_wave_from_file,
};
pub use ogg::{read_compressed_info, read_vorbis_info, VorbisAudioInfo, VorbisComment};
pub use quality::SoundQualityInfo;
