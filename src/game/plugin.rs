use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::states::*;

/// Orders the weapon system sets and installs the inventory, ammo and audio plugins.
pub fn plugin(app: &mut App) {
    app
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Combat, GameSet::Effects)
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_plugins((
            crate::inventory::plugin::plugin,
            crate::ammo::plugin::plugin,
            crate::audio::plugin::plugin,
        ));
}
