use bevy::prelude::*;

use crate::ammo::components::*;
use crate::ammo::events::*;
use crate::ammo::lookups::*;
use crate::ammo::resources::AmmoTally;
use crate::ammo::selection::*;
use crate::ammo::visuals::*;
use crate::inventory::components::{AmmoItem, GearItem, StackableItem};
use crate::inventory::resources::Inventory;
use crate::weapon::components::GunItem;

/// Load one round per request, taking a unit from the first matching inventory stack.
/// Stacks that run out are removed from the inventory and despawned.
#[allow(clippy::type_complexity)]
pub fn reload_round_system(
    mut commands: Commands,
    mut requests: MessageReader<ReloadRoundRequest>,
    mut clip_changed: MessageWriter<ClipChanged>,
    mut inventory: Option<ResMut<Inventory>>,
    mut weapons: Query<(Option<&GunItem>, Option<&mut Clip>)>,
    mut gear_items: Query<(
        &GearItem,
        Option<&AmmoItem>,
        Option<&mut StackableItem>,
        Option<&AmmoTag>,
    )>,
) {
    for request in requests.read() {
        let weapon = request.weapon;
        let gun = weapons
            .get(weapon)
            .ok()
            .and_then(|(gun, _)| gun.cloned());

        let Some(inventory) = inventory.as_deref_mut() else {
            error!("Inventory resource not found.");
            continue;
        };
        let Some(gun) = gun else {
            error!("GunItem component not found on weapon {:?}.", weapon);
            continue;
        };

        let has_room = weapons
            .get(weapon)
            .ok()
            .and_then(|(_, clip)| clip)
            .map(|clip| clip.has_room(gun.clip_size));
        match has_room {
            None => {
                error!("Clip component not found on weapon {:?}.", weapon);
                continue;
            }
            Some(false) => {
                debug!("Clip of {:?} is full", weapon);
                continue;
            }
            Some(true) => {}
        }

        // Each pass either takes a unit or drops an exhausted stack, so this ends
        let mut loaded = None;
        loop {
            let bullet_type = next_bullet_type(Some(&*inventory), Some(&gun), |e| {
                gear_items.get(e).ok().map(GearItemView::from_parts)
            });
            if bullet_type == BulletType::Unspecified {
                break;
            }

            let stack_entity = find_ammo_stack(inventory, &gun, bullet_type, |e| {
                gear_items.get(e).ok().map(GearItemView::from_parts)
            });
            let Some(stack_entity) = stack_entity else {
                break;
            };
            let Ok((gear, _, Some(mut stack), _)) = gear_items.get_mut(stack_entity) else {
                break;
            };

            let took_round = stack.units > 0;
            stack.units = stack.units.saturating_sub(1);
            if stack.units == 0 {
                debug!("Used up {}", gear.name);
                inventory.remove(stack_entity);
                commands.entity(stack_entity).despawn();
            }
            if took_round {
                loaded = Some(bullet_type);
                break;
            }
        }

        let Some(bullet_type) = loaded else {
            debug!("No ammo to load into {:?}", weapon);
            continue;
        };
        if let Ok((_, Some(mut clip))) = weapons.get_mut(weapon) {
            clip.add_round(bullet_type, gun.clip_size);
            clip_changed.write(ClipChanged { weapon });
        }
    }
}

/// Fire the oldest loaded round per request. An empty clip produces a dry fire.
pub fn fire_round_system(
    mut requests: MessageReader<FireRequest>,
    mut fired: MessageWriter<RoundFired>,
    mut dry_fired: MessageWriter<DryFire>,
    mut clip_changed: MessageWriter<ClipChanged>,
    mut clips: Query<&mut Clip>,
) {
    for request in requests.read() {
        let weapon = request.weapon;
        let Ok(mut clip) = clips.get_mut(weapon) else {
            error!("Clip component not found on weapon {:?}.", weapon);
            continue;
        };

        let (removed, round) = clip.remove_next_or_default();
        if removed {
            fired.write(RoundFired {
                weapon,
                bullet_type: round.bullet_type,
                color: color_for_bullet_type(round.bullet_type),
            });
            clip_changed.write(ClipChanged { weapon });
        } else {
            dry_fired.write(DryFire { weapon });
        }
    }
}

/// Re-skin the bullet meshes of changed weapons with the material of the round up next
pub fn refresh_bullet_visuals_system(
    mut changes: MessageReader<ClipChanged>,
    weapons: Query<(&Clip, &BulletMeshes)>,
    registry: Option<Res<PrefabMaterials>>,
    slots: Res<BulletMeshSlots>,
    children: Query<&Children>,
    mut meshes: Query<(&Name, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let Some(registry) = registry else {
        changes.clear();
        return;
    };

    for change in changes.read() {
        let Ok((clip, bullet_meshes)) = weapons.get(change.weapon) else {
            continue;
        };
        let Some(material) = clip
            .peek_next()
            .and_then(|round| material_for_bullet_type(round.bullet_type, &registry))
        else {
            continue;
        };

        update_bullet_materials(
            bullet_meshes.root,
            clip.loaded_count(),
            &material,
            &slots,
            &children,
            &mut meshes,
        );
    }
}

/// Recount carried rounds by bullet type
pub fn ammo_tally_system(
    inventory: Option<Res<Inventory>>,
    gear_items: Query<GearItemData>,
    mut tally: ResMut<AmmoTally>,
) {
    tally.counts.clear();
    let Some(inventory) = inventory else {
        return;
    };

    let items = inventory
        .iter()
        .filter_map(|e| gear_items.get(e).ok().map(GearItemView::from_parts));
    tally_bullet_types(items, &mut tally.counts);
}
