use bevy::prelude::*;

use crate::ammo::events::*;
use crate::ammo::lookups::PrefabMaterials;
use crate::ammo::resources::AmmoTally;
use crate::ammo::systems::*;
use crate::ammo::visuals::BulletMeshSlots;
use crate::game::sets::GameSet;
use crate::states::*;

pub fn plugin(app: &mut App) {
    app
        .add_message::<ReloadRoundRequest>()
        .add_message::<FireRequest>()
        .add_message::<RoundFired>()
        .add_message::<DryFire>()
        .add_message::<ClipChanged>()
        .init_resource::<PrefabMaterials>()
        .init_resource::<BulletMeshSlots>()
        .init_resource::<AmmoTally>()
        // Reload before fire so a request pair in one frame loads then shoots
        .add_systems(
            Update,
            (reload_round_system, fire_round_system)
                .chain()
                .in_set(GameSet::Combat)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            (refresh_bullet_visuals_system, ammo_tally_system)
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::InGame)),
        );
}
