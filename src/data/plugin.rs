use bevy::prelude::*;

use super::{resources::AssetRoot, systems::*};

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssetRoot>();

        app.add_systems(Startup, load_decal_assets);
    }
}
