use bevy::prelude::*;

/// System sets for explicit ordering of weapon systems.
/// Requests are read in `Combat` after inventory upkeep, and feedback runs last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Input handling and inventory upkeep
    Input,
    /// Reloading and firing
    Combat,
    /// Visual and audio feedback, HUD tallies
    Effects,
}
