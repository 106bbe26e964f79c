use bevy::prelude::*;

use crate::inventory::components::GearItem;
use crate::inventory::resources::Inventory;

/// Drop inventory entries whose gear item entity no longer exists
pub fn prune_missing_items_system(
    inventory: Option<ResMut<Inventory>>,
    gear_items: Query<(), With<GearItem>>,
) {
    let Some(mut inventory) = inventory else {
        return;
    };

    let before = inventory.len();
    inventory.retain(|item| gear_items.contains(item));
    let pruned = before - inventory.len();
    if pruned > 0 {
        debug!("Pruned {} missing items from inventory", pruned);
    }
}
