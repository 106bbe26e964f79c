use bevy::prelude::*;

use crate::weapon::components::GunType;

/// A carried item. Condition is a fraction in `0.0..=1.0`.
#[derive(Component, Clone, Debug)]
pub struct GearItem {
    pub name: String,
    pub condition: f32,
}

impl GearItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            condition: 1.0,
        }
    }

    pub fn with_condition(mut self, condition: f32) -> Self {
        self.condition = condition.clamp(0.0, 1.0);
        self
    }

    /// Condition as a whole percentage, the way it is shown to the player.
    pub fn rounded_condition(&self) -> u32 {
        (self.condition.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// Present on gear items that are ammunition
#[derive(Component, Clone, Debug)]
pub struct AmmoItem {
    pub ammo_for_gun_type: GunType,
}

/// Present on gear items that stack; `units` is the stack size
#[derive(Component, Clone, Debug)]
pub struct StackableItem {
    pub units: u32,
}
