use std::time::Duration;

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};

use combat_blood::{
    blood::{config::BloodConfig, plugin::BloodPlugin},
    data::plugin::DataPlugin,
    tabletop::plugin::TabletopPlugin,
};

fn ready() {
    info!("Combat blood ready!");
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let config = BloodConfig::from_env()?;

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin {
            ..Default::default()
        })
        .insert_resource(config)
        .add_plugins((TabletopPlugin, DataPlugin, BloodPlugin))
        .add_systems(PostStartup, ready)
        .run();

    Ok(())
}
