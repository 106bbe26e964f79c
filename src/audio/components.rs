use bevy::prelude::*;

/// Audio channel for weapon sound effects
#[derive(Resource)]
pub struct WeaponSoundChannel;

/// Sound files played for weapon actions
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct WeaponSounds {
    pub fire: String,
    pub dry_fire: String,
}

impl Default for WeaponSounds {
    fn default() -> Self {
        Self {
            fire: "sounds/rifle_fire.ogg".to_string(),
            dry_fire: "sounds/rifle_dry_fire.ogg".to_string(),
        }
    }
}
