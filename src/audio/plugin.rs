use bevy::prelude::*;

use crate::audio::components::*;
use crate::audio::systems::*;
use crate::game::sets::GameSet;
use crate::states::*;

pub fn plugin(app: &mut App) {
    app
        .init_resource::<WeaponSounds>()
        .add_systems(
            Update,
            play_weapon_sounds_system
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::InGame)),
        );
}
