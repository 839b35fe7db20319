use anyhow::Context;
use bevy::prelude::*;
use bevy_mod_sysfail::sysfail;
use walkdir::WalkDir;

use crate::{tabletop::components::Handout, values::DECAL_ASSET_SUFFIX};

use super::resources::AssetRoot;

#[sysfail(log)]
pub fn load_decal_assets(mut bevy: Commands, root: Res<AssetRoot>) -> Result<(), anyhow::Error> {
    debug!("Loading decal assets from: {:?}", root.0);

    for entry in WalkDir::new(&root.0)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(DECAL_ASSET_SUFFIX))
        })
    {
        let path = entry.path();

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load decal asset {path:?}"))?;

        let parsed = ron::from_str::<Handout>(&contents)
            .with_context(|| format!("Failed to parse decal asset {path:?}"))?;

        debug!("Loaded decal asset: {:?}", parsed.name);

        bevy.spawn(parsed);
    }

    Ok(())
}
