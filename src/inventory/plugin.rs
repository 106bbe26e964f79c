use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::inventory::resources::*;
use crate::inventory::systems::*;
use crate::states::*;

pub fn plugin(app: &mut App) {
    app
        .init_resource::<Inventory>()
        .add_systems(
            Update,
            prune_missing_items_system
                .in_set(GameSet::Input)
                .run_if(in_state(GameState::InGame)),
        );
}
