use std::collections::HashMap;

use bevy::prelude::*;

use crate::ammo::components::BulletType;

pub const STANDARD_ROUND_PREFAB: &str = "GEAR_RifleAmmoSingle";
pub const ARMOR_PIERCING_ROUND_PREFAB: &str = "GEAR_RifleAmmoSingleAP";

/// Materials of each gear item prefab, keyed by prefab name.
/// Filled by whoever loads the item assets.
#[derive(Resource, Default, Debug)]
pub struct PrefabMaterials {
    materials: HashMap<String, Vec<Handle<StandardMaterial>>>,
}

impl PrefabMaterials {
    pub fn insert(&mut self, prefab: impl Into<String>, materials: Vec<Handle<StandardMaterial>>) {
        self.materials.insert(prefab.into(), materials);
    }

    pub fn materials_for(&self, prefab: &str) -> Option<&[Handle<StandardMaterial>]> {
        self.materials.get(prefab).map(Vec::as_slice)
    }
}

/// Tracer and HUD color for a bullet type
pub fn color_for_bullet_type(bullet_type: BulletType) -> Color {
    match bullet_type {
        BulletType::ArmorPiercing => Color::srgb(0.0, 1.0, 0.0), // Green
        BulletType::Standard => Color::srgb(1.0, 0.92, 0.016),   // Yellow
        BulletType::Unspecified => Color::WHITE,
    }
}

/// Prefab of the single loose round matching a bullet type
pub fn prefab_name_for_bullet_type(bullet_type: BulletType) -> Option<&'static str> {
    match bullet_type {
        BulletType::ArmorPiercing => Some(ARMOR_PIERCING_ROUND_PREFAB),
        BulletType::Standard => Some(STANDARD_ROUND_PREFAB),
        BulletType::Unspecified => None,
    }
}

/// First material of the round prefab for this bullet type.
/// `None` when the type has no prefab, the prefab is unknown, or it has no materials.
pub fn material_for_bullet_type(
    bullet_type: BulletType,
    registry: &PrefabMaterials,
) -> Option<Handle<StandardMaterial>> {
    let prefab = prefab_name_for_bullet_type(bullet_type)?;
    registry.materials_for(prefab)?.first().cloned()
}
