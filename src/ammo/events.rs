use bevy::prelude::*;

use crate::ammo::components::BulletType;

/// Request to load one round from the inventory into a weapon
#[derive(Message, Debug, Clone, Copy)]
pub struct ReloadRoundRequest {
    pub weapon: Entity,
}

/// Request to fire the next loaded round of a weapon
#[derive(Message, Debug, Clone, Copy)]
pub struct FireRequest {
    pub weapon: Entity,
}

/// Fired when a round leaves the clip
#[derive(Message, Debug, Clone, Copy)]
pub struct RoundFired {
    pub weapon: Entity,
    pub bullet_type: BulletType,
    /// Tracer color for the round
    pub color: Color,
}

/// Fired when the trigger is pulled on an empty clip
#[derive(Message, Debug, Clone, Copy)]
pub struct DryFire {
    pub weapon: Entity,
}

/// The weapon's clip gained or lost a round and its bullet meshes need refreshing
#[derive(Message, Debug, Clone, Copy)]
pub struct ClipChanged {
    pub weapon: Entity,
}
