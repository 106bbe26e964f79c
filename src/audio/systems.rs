use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::ammo::events::{DryFire, RoundFired};
use crate::audio::components::*;

/// Play the shot and empty-click cues.
/// Silently skips playback when the audio channel or asset server is absent (headless runs, tests).
pub fn play_weapon_sounds_system(
    mut fired: MessageReader<RoundFired>,
    mut dry_fired: MessageReader<DryFire>,
    sounds: Res<WeaponSounds>,
    weapon_channel: Option<Res<AudioChannel<WeaponSoundChannel>>>,
    asset_server: Option<Res<AssetServer>>,
) {
    let shots = fired.read().count();
    let clicks = dry_fired.read().count();

    let (Some(weapon_channel), Some(asset_server)) = (weapon_channel, asset_server) else {
        return;
    };

    // One cue per frame is enough even if several messages arrived
    if shots > 0 {
        weapon_channel.play(asset_server.load(sounds.fire.clone()));
    }
    if clicks > 0 {
        weapon_channel.play(asset_server.load(sounds.dry_fire.clone()));
    }
}
