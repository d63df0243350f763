// Host engine collaborators
//
// Playback, attachment, attenuation and the audio device belong to the host
// engine. This module only describes what the function library hands them.

use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::asset::SoundWave;

/// Position or offset in world units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }
}

/// How `AttachOptions::location` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachLocation {
    /// Location is an offset relative to the attach point
    KeepRelativeOffset,
    /// Location is a world position, converted to a relative offset
    KeepWorldPosition,
    /// Location is ignored and the sound snaps to the attach point
    #[default]
    SnapToTarget,
}

/// Host handle for a scene component a sound can follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneComponentId(pub u64);

/// Host handle for a spawned audio component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioComponent(pub u64);

/// Host handle for a mixer voice playing a wave instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundSourceId(pub u64);

/// Distance falloff override, passed through to the host untouched
#[derive(Debug, Clone, PartialEq)]
pub struct SoundAttenuation {
    pub name: String,
    pub inner_radius: f32,
    pub falloff_distance: f32,
}

/// Where an attached sound is played
#[derive(Debug, Clone, PartialEq)]
pub struct AttachOptions {
    pub attach_to: SceneComponentId,
    /// Named socket on the component; `None` uses the component origin
    pub attach_point: Option<String>,
    pub location: Vector3,
    pub location_type: AttachLocation,
    /// Stop the sound when the owner of the component is destroyed
    pub stop_when_attached_to_destroyed: bool,
}

impl AttachOptions {
    pub fn new(attach_to: SceneComponentId) -> Self {
        AttachOptions {
            attach_to,
            attach_point: None,
            location: Vector3::ZERO,
            location_type: AttachLocation::default(),
            stop_when_attached_to_destroyed: false,
        }
    }
}

/// Per-play volume, pitch, offset and attenuation
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSettings {
    pub volume_multiplier: f32,
    pub pitch_multiplier: f32,
    /// Seconds into the sound to start from
    pub start_time: f32,
    pub attenuation: Option<Arc<SoundAttenuation>>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        PlaybackSettings {
            volume_multiplier: 1.0,
            pitch_multiplier: 1.0,
            start_time: 0.0,
            attenuation: None,
        }
    }
}

/// Fire-and-forget playback provided by the host world.
pub trait Playback {
    /// Play a sound that follows a scene component. Returns `None` when the
    /// host declines to play it.
    fn play_sound_attached(
        &mut self,
        wave: Arc<SoundWave>,
        attach: &AttachOptions,
        settings: &PlaybackSettings,
    ) -> Option<AudioComponent>;

    /// Play a sound at a fixed world position.
    fn play_sound_at_location(
        &mut self,
        wave: Arc<SoundWave>,
        location: Vector3,
        settings: &PlaybackSettings,
    );
}

/// One playing instance of a wave inside an active sound
#[derive(Debug, Clone, PartialEq)]
pub struct WaveInstance {
    pub id: u64,
    /// Compressed data GUID of the wave being played
    pub wave_data_guid: Uuid,
}

/// A sound currently playing on the device
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveSound {
    /// Keyed by instance id; iterated in id order
    pub wave_instances: BTreeMap<u64, WaveInstance>,
}

/// The host's audio device, as far as source lookup needs it.
pub trait AudioDevice {
    fn active_sounds(&self) -> &[ActiveSound];

    /// Mixer source currently bound to a wave instance, if any
    fn source_for(&self, instance: &WaveInstance) -> Option<SoundSourceId>;
}
