use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_kira_audio::AudioApp;
use clap::Parser;
use loaded_rounds::game_plugin;
use loaded_rounds::prelude::*;

/// Headless demo: loads a rifle from the inventory, then empties it.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Args {
    /// Rounds the rifle holds
    #[arg(long, default_value_t = 5)]
    clip_size: usize,
    /// Standard rounds in the inventory
    #[arg(long, default_value_t = 3)]
    standard: u32,
    /// Armor-piercing rounds in the inventory
    #[arg(long, default_value_t = 2)]
    armor_piercing: u32,
    /// Trigger pulls after reloading
    #[arg(long, default_value_t = 6)]
    shots: usize,
    /// Play weapon sounds through the audio device
    #[arg(long)]
    sound: bool,
}

#[derive(Resource)]
struct DemoSetup(Args);

#[derive(Resource)]
struct DemoScript {
    reloads_left: usize,
    shots_left: usize,
}

fn main() {
    let args = Args::parse();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(bevy::state::app::StatesPlugin)
        .init_state::<GameState>()
        .insert_resource(DemoScript {
            reloads_left: args.clip_size,
            shots_left: args.shots,
        })
        .insert_resource(DemoSetup(args.clone()))
        .add_plugins(game_plugin)
        .add_systems(Startup, start_game)
        .add_systems(OnEnter(GameState::InGame), spawn_rifle_and_ammo)
        .add_systems(Update, drive_demo.in_set(GameSet::Input))
        .add_systems(Update, report_shots.in_set(GameSet::Effects));

    if args.sound {
        app.add_plugins(bevy::asset::AssetPlugin::default())
            .add_plugins(bevy_kira_audio::AudioPlugin)
            .add_audio_channel::<WeaponSoundChannel>();
    }

    app.run();
}

fn start_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

fn spawn_rifle_and_ammo(
    mut commands: Commands,
    setup: Res<DemoSetup>,
    mut inventory: ResMut<Inventory>,
) {
    let args = &setup.0;
    commands.spawn((
        Name::new("Rifle"),
        GunItem::new(GunType::Rifle, args.clip_size),
        Clip::default(),
        EquippedWeapon,
    ));

    let stacks = [
        ("GEAR_RifleAmmoBoxAP", args.armor_piercing, BulletType::ArmorPiercing),
        ("GEAR_RifleAmmoBox", args.standard, BulletType::Standard),
    ];
    for (name, units, bullet_type) in stacks {
        if units == 0 {
            continue;
        }
        let item = commands
            .spawn((
                GearItem::new(name),
                AmmoItem { ammo_for_gun_type: GunType::Rifle },
                StackableItem { units },
                AmmoTag::new(bullet_type),
            ))
            .id();
        inventory.add(item);
    }
}

/// One reload or trigger pull per frame, then exit
fn drive_demo(
    mut script: ResMut<DemoScript>,
    weapon: Query<Entity, With<EquippedWeapon>>,
    mut reloads: MessageWriter<ReloadRoundRequest>,
    mut fires: MessageWriter<FireRequest>,
    mut exit: MessageWriter<AppExit>,
) {
    let Ok(weapon) = weapon.single() else {
        return;
    };

    if script.reloads_left > 0 {
        script.reloads_left -= 1;
        reloads.write(ReloadRoundRequest { weapon });
    } else if script.shots_left > 0 {
        script.shots_left -= 1;
        fires.write(FireRequest { weapon });
    } else {
        exit.write(AppExit::Success);
    }
}

fn report_shots(
    mut fired: MessageReader<RoundFired>,
    mut dry_fired: MessageReader<DryFire>,
    tally: Res<AmmoTally>,
    clips: Query<&Clip, With<EquippedWeapon>>,
) {
    let loaded = clips.single().map(Clip::loaded_count).unwrap_or(0);
    for shot in fired.read() {
        info!(
            "Fired {:?} round (tracer {:?}), {} left in clip, {} standard / {} armor-piercing carried",
            shot.bullet_type,
            shot.color,
            loaded,
            tally.count(BulletType::Standard),
            tally.count(BulletType::ArmorPiercing),
        );
        match tally.most_plentiful() {
            Some(bullet_type) => debug!("Most plentiful ammo carried: {:?}", bullet_type),
            None => debug!("No ammo left in inventory"),
        }
    }
    for _ in dry_fired.read() {
        warn!("Click. Clip is empty");
    }
}
