use std::collections::HashMap;

use bevy::prelude::*;

use crate::ammo::components::{AmmoTag, BulletType};
use crate::inventory::components::{AmmoItem, GearItem, StackableItem};
use crate::inventory::resources::Inventory;
use crate::weapon::components::GunItem;

/// Query data for reading a gear item the way ammo selection needs it
pub type GearItemData = (
    &'static GearItem,
    Option<&'static AmmoItem>,
    Option<&'static StackableItem>,
    Option<&'static AmmoTag>,
);

/// Borrowed view of one gear item and the optional parts ammo selection looks at
#[derive(Clone, Copy, Debug)]
pub struct GearItemView<'a> {
    pub gear: &'a GearItem,
    pub ammo: Option<&'a AmmoItem>,
    pub stack: Option<&'a StackableItem>,
    pub tag: Option<&'a AmmoTag>,
}

impl<'a> GearItemView<'a> {
    pub fn from_parts(
        (gear, ammo, stack, tag): (
            &'a GearItem,
            Option<&'a AmmoItem>,
            Option<&'a StackableItem>,
            Option<&'a AmmoTag>,
        ),
    ) -> Self {
        Self { gear, ammo, stack, tag }
    }
}

/// Whether `item` can be loaded into `weapon`: it exists, is stackable ammo in
/// usable condition, and was made for the weapon's gun type.
pub fn is_valid_ammo(item: Option<&GearItemView>, weapon: &GunItem) -> bool {
    let Some(item) = item else {
        return false;
    };
    let Some(ammo) = item.ammo else {
        return false;
    };
    item.stack.is_some()
        && item.gear.rounded_condition() != 0
        && ammo.ammo_for_gun_type == weapon.gun_type
}

/// Bullet type of the first tagged, valid ammo stack in the inventory.
///
/// `lookup` resolves inventory entries to gear items. Missing inventory or weapon
/// is logged and treated as having nothing to load.
pub fn next_bullet_type<'a>(
    inventory: Option<&Inventory>,
    weapon: Option<&GunItem>,
    lookup: impl Fn(Entity) -> Option<GearItemView<'a>>,
) -> BulletType {
    let Some(inventory) = inventory else {
        error!("Inventory resource not found.");
        return BulletType::Unspecified;
    };

    let Some(weapon) = weapon else {
        error!("GunItem component not found on weapon.");
        return BulletType::Unspecified;
    };

    let found = inventory
        .iter()
        .filter_map(&lookup)
        .filter(|item| is_valid_ammo(Some(item), weapon))
        .find_map(|item| item.tag.map(|tag| (item.gear, tag.bullet_type)));

    match found {
        Some((gear, bullet_type)) => {
            info!("Valid ammo found: {} with BulletType = {:?}", gear.name, bullet_type);
            bullet_type
        }
        None => BulletType::Unspecified,
    }
}

/// Entity of the first valid inventory stack tagged with `bullet_type`
pub fn find_ammo_stack<'a>(
    inventory: &Inventory,
    weapon: &GunItem,
    bullet_type: BulletType,
    lookup: impl Fn(Entity) -> Option<GearItemView<'a>>,
) -> Option<Entity> {
    inventory.iter().find(|&entity| {
        let item = lookup(entity);
        is_valid_ammo(item.as_ref(), weapon)
            && item.and_then(|i| i.tag).is_some_and(|tag| tag.bullet_type == bullet_type)
    })
}

/// Add the stack size of each tagged item to its bullet type's count.
/// Counts accumulate across calls; untagged or unstackable items are skipped.
pub fn tally_bullet_types<'a>(
    items: impl IntoIterator<Item = GearItemView<'a>>,
    counts: &mut HashMap<BulletType, u32>,
) {
    for item in items {
        let (Some(tag), Some(stack)) = (item.tag, item.stack) else {
            continue;
        };
        *counts.entry(tag.bullet_type).or_insert(0) += stack.units;
    }
}
