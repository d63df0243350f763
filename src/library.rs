// Script-facing functions: load an Ogg Vorbis file into a sound wave and
// play it through the host engine.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::asset::{SoundWave, OGG_FORMAT};
use crate::engine::{
    AttachOptions, AudioComponent, AudioDevice, Playback, PlaybackSettings, SoundSourceId,
    Vector3,
};
use crate::error::{FindSourceError, LoadError};
use crate::ogg::read_compressed_info;
use crate::utils::io::load_file_to_vec;

/// Create a sound wave from an Ogg Vorbis file on disk.
///
/// The file bytes become the wave's "OGG" compressed data and the header
/// fills in channels, sample rate, duration and PCM size. Nothing is
/// returned unless both the read and the header parse succeed.
pub fn sound_wave_from_file<P: AsRef<Path>>(path: P) -> Result<SoundWave, LoadError> {
    let path = path.as_ref();

    let raw_file = load_file_to_vec(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let info = read_compressed_info(&raw_file).map_err(|source| LoadError::Header {
        path: path.to_path_buf(),
        source,
    })?;

    let mut wave = SoundWave::new();
    wave.set_compressed_format_data(OGG_FORMAT, raw_file);
    wave.apply_quality_info(&info);

    debug!(
        path = %path.display(),
        guid = %wave.compressed_data_guid,
        "loaded sound wave"
    );
    Ok(wave)
}

/// [`sound_wave_from_file`] for callers that only need "could not load":
/// the error is logged and dropped.
pub fn load_sound_wave<P: AsRef<Path>>(path: P) -> Option<SoundWave> {
    sound_wave_from_file(path)
        .inspect_err(|e| warn!("{}", e))
        .ok()
}

fn load_for_playback(path: &Path) -> Option<Arc<SoundWave>> {
    load_sound_wave(path).map(Arc::new)
}

/// Play a sound file attached to and following a scene component.
///
/// Fire and forget. Returns `None` if the file can't be loaded (the host is
/// not called) or if the host declines to play it.
pub fn play_sound_attached_from_file<P: Playback + ?Sized>(
    playback: &mut P,
    path: impl AsRef<Path>,
    attach: &AttachOptions,
    settings: &PlaybackSettings,
) -> Option<AudioComponent> {
    let wave = load_for_playback(path.as_ref())?;
    playback.play_sound_attached(wave, attach, settings)
}

/// Play a sound file at a world location. Fire and forget; a file that
/// can't be loaded is logged and skipped.
pub fn play_sound_at_location_from_file<P: Playback + ?Sized>(
    playback: &mut P,
    path: impl AsRef<Path>,
    location: Vector3,
    settings: &PlaybackSettings,
) {
    if let Some(wave) = load_for_playback(path.as_ref()) {
        playback.play_sound_at_location(wave, location, settings);
    }
}

/// Find the mixer source currently playing a sound wave.
///
/// Scans the device's active sounds in order, and each sound's wave
/// instances in id order, for the first instance carrying the wave's
/// compressed data GUID. A matching instance with no source bound yet gives
/// `Ok(None)`.
pub fn find_source<D: AudioDevice + ?Sized>(
    device: Option<&D>,
    wave: &SoundWave,
) -> Result<Option<SoundSourceId>, FindSourceError> {
    let device = device.ok_or(FindSourceError::NoDevice)?;

    device
        .active_sounds()
        .iter()
        .flat_map(|active| active.wave_instances.values())
        .find(|instance| instance.wave_data_guid == wave.compressed_data_guid)
        .map(|instance| device.source_for(instance))
        .ok_or(FindSourceError::NotFound)
}
