use bevy::prelude::*;

/// Weapon systems only run while `InGame`.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    #[default]
    Loading,
    InGame,
}
