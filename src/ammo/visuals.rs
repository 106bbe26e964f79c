use bevy::prelude::*;

/// Names of the weapon meshes that show loaded rounds
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct BulletMeshSlots {
    /// Shown when exactly one round is loaded
    pub single: String,
    /// Shown when more than one round is loaded
    pub multiple: String,
    /// Rounds held in the stripper clip, always re-skinned
    pub stripper_clip: String,
}

impl Default for BulletMeshSlots {
    fn default() -> Self {
        Self {
            single: "mesh_bullet_a".to_string(),
            multiple: "mesh_bullet_b".to_string(),
            stripper_clip: "mesh_StripperClipBullets".to_string(),
        }
    }
}

/// Root of the weapon's mesh hierarchy, searched by name when re-skinning bullets
#[derive(Component, Clone, Copy, Debug)]
pub struct BulletMeshes {
    pub root: Entity,
}

/// Mesh slot names to re-skin for `loaded_count` rounds, in application order
pub fn slots_for_loaded_count(slots: &BulletMeshSlots, loaded_count: usize) -> Vec<&str> {
    let mut names = Vec::with_capacity(2);
    match loaded_count {
        0 => {}
        1 => names.push(slots.single.as_str()),
        _ => names.push(slots.multiple.as_str()),
    }
    names.push(slots.stripper_clip.as_str());
    names
}

/// Replace the material of every descendant of `root` named `mesh_name`.
/// Returns how many meshes were changed.
pub fn swap_material(
    root: Entity,
    mesh_name: &str,
    material: &Handle<StandardMaterial>,
    children: &Query<&Children>,
    meshes: &mut Query<(&Name, &mut MeshMaterial3d<StandardMaterial>)>,
) -> usize {
    let mut swapped = 0;
    for descendant in children.iter_descendants(root) {
        let Ok((name, mut mesh_material)) = meshes.get_mut(descendant) else {
            continue;
        };
        if name.as_str() == mesh_name {
            mesh_material.0 = material.clone();
            swapped += 1;
        }
    }
    swapped
}

/// Re-skin the loaded-bullet meshes under `root` with `material`
pub fn update_bullet_materials(
    root: Entity,
    loaded_count: usize,
    material: &Handle<StandardMaterial>,
    slots: &BulletMeshSlots,
    children: &Query<&Children>,
    meshes: &mut Query<(&Name, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    for slot in slots_for_loaded_count(slots, loaded_count) {
        if swap_material(root, slot, material, children, meshes) == 0 {
            debug!("No mesh named {} under {:?}", slot, root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_slots_use_weapon_mesh_names() {
        let slots = BulletMeshSlots::default();
        assert_eq!(slots.single, "mesh_bullet_a");
        assert_eq!(slots.multiple, "mesh_bullet_b");
        assert_eq!(slots.stripper_clip, "mesh_StripperClipBullets");
    }

    #[test]
    fn empty_clip_only_touches_stripper_clip() {
        let slots = BulletMeshSlots::default();
        assert_eq!(slots_for_loaded_count(&slots, 0), vec!["mesh_StripperClipBullets"]);
    }

    #[test]
    fn single_round_uses_single_slot() {
        let slots = BulletMeshSlots::default();
        assert_eq!(
            slots_for_loaded_count(&slots, 1),
            vec!["mesh_bullet_a", "mesh_StripperClipBullets"]
        );
    }

    #[test]
    fn several_rounds_use_multiple_slot() {
        let slots = BulletMeshSlots::default();
        for count in [2, 3, 10] {
            assert_eq!(
                slots_for_loaded_count(&slots, count),
                vec!["mesh_bullet_b", "mesh_StripperClipBullets"]
            );
        }
    }

    mod swap_material_tests {
        use super::*;
        use bevy::ecs::system::RunSystemOnce;

        struct Rig {
            root: Entity,
            bullet_a: Entity,
            bullet_b: Entity,
            stripper: Entity,
            old: Handle<StandardMaterial>,
            new: Handle<StandardMaterial>,
        }

        fn setup_test_app() -> (App, Rig) {
            let mut app = App::new();
            app.add_plugins(bevy::prelude::TaskPoolPlugin::default());
            app.add_plugins(bevy::asset::AssetPlugin::default());
            app.init_asset::<StandardMaterial>();

            let (old, new) = {
                let mut materials = app.world_mut().resource_mut::<Assets<StandardMaterial>>();
                (
                    materials.add(StandardMaterial::default()),
                    materials.add(StandardMaterial {
                        base_color: Color::srgb(0.0, 1.0, 0.0),
                        ..default()
                    }),
                )
            };

            let world = app.world_mut();
            let bullet_a = world
                .spawn((Name::new("mesh_bullet_a"), MeshMaterial3d(old.clone())))
                .id();
            let bullet_b = world
                .spawn((Name::new("mesh_bullet_b"), MeshMaterial3d(old.clone())))
                .id();
            let stripper = world
                .spawn((Name::new("mesh_StripperClipBullets"), MeshMaterial3d(old.clone())))
                .id();
            // Stripper clip sits one level deeper, under a group node
            let group = world.spawn(Name::new("clip_group")).add_child(stripper).id();
            let root = world
                .spawn(Transform::default())
                .add_children(&[bullet_a, bullet_b, group])
                .id();

            (
                app,
                Rig {
                    root,
                    bullet_a,
                    bullet_b,
                    stripper,
                    old,
                    new,
                },
            )
        }

        fn material_of(app: &App, entity: Entity) -> Handle<StandardMaterial> {
            app.world()
                .get::<MeshMaterial3d<StandardMaterial>>(entity)
                .unwrap()
                .0
                .clone()
        }

        fn run_update(app: &mut App, rig: &Rig, loaded_count: usize) {
            let root = rig.root;
            let material = rig.new.clone();
            let _ = app.world_mut().run_system_once(
                move |children: Query<&Children>,
                      mut meshes: Query<(&Name, &mut MeshMaterial3d<StandardMaterial>)>| {
                    update_bullet_materials(
                        root,
                        loaded_count,
                        &material,
                        &BulletMeshSlots::default(),
                        &children,
                        &mut meshes,
                    );
                },
            );
        }

        #[test]
        fn swap_material_finds_nested_meshes() {
            let (mut app, rig) = setup_test_app();
            let root = rig.root;
            let material = rig.new.clone();

            let swapped = app
                .world_mut()
                .run_system_once(
                    move |children: Query<&Children>,
                          mut meshes: Query<(&Name, &mut MeshMaterial3d<StandardMaterial>)>| {
                        swap_material(root, "mesh_StripperClipBullets", &material, &children, &mut meshes)
                    },
                )
                .unwrap();

            assert_eq!(swapped, 1);
            assert_eq!(material_of(&app, rig.stripper), rig.new);
        }

        #[test]
        fn swap_material_with_unknown_name_changes_nothing() {
            let (mut app, rig) = setup_test_app();
            let root = rig.root;
            let material = rig.new.clone();

            let swapped = app
                .world_mut()
                .run_system_once(
                    move |children: Query<&Children>,
                          mut meshes: Query<(&Name, &mut MeshMaterial3d<StandardMaterial>)>| {
                        swap_material(root, "mesh_scope", &material, &children, &mut meshes)
                    },
                )
                .unwrap();

            assert_eq!(swapped, 0);
            assert_eq!(material_of(&app, rig.bullet_a), rig.old);
        }

        #[test]
        fn one_loaded_round_reskins_single_bullet() {
            let (mut app, rig) = setup_test_app();
            run_update(&mut app, &rig, 1);

            assert_eq!(material_of(&app, rig.bullet_a), rig.new);
            assert_eq!(material_of(&app, rig.bullet_b), rig.old);
            assert_eq!(material_of(&app, rig.stripper), rig.new);
        }

        #[test]
        fn several_loaded_rounds_reskin_multiple_bullets() {
            let (mut app, rig) = setup_test_app();
            run_update(&mut app, &rig, 4);

            assert_eq!(material_of(&app, rig.bullet_a), rig.old);
            assert_eq!(material_of(&app, rig.bullet_b), rig.new);
            assert_eq!(material_of(&app, rig.stripper), rig.new);
        }

        #[test]
        fn empty_clip_reskins_stripper_clip_only() {
            let (mut app, rig) = setup_test_app();
            run_update(&mut app, &rig, 0);

            assert_eq!(material_of(&app, rig.bullet_a), rig.old);
            assert_eq!(material_of(&app, rig.bullet_b), rig.old);
            assert_eq!(material_of(&app, rig.stripper), rig.new);
        }
    }
}
