use bevy::prelude::*;

/// Firearm families. Ammo is only compatible with the gun type it was made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GunType {
    #[default]
    Rifle,
    Revolver,
    FlareGun,
}

/// Weapon record owned by the game: which ammo it takes and how many rounds fit.
#[derive(Component, Clone, Debug)]
pub struct GunItem {
    pub gun_type: GunType,
    pub clip_size: usize,
}

impl GunItem {
    pub fn new(gun_type: GunType, clip_size: usize) -> Self {
        Self { gun_type, clip_size }
    }
}

/// Marker for the weapon currently held by the player
#[derive(Component, Debug)]
pub struct EquippedWeapon;
