use std::path::PathBuf;

use bevy::prelude::*;

/// Directory scanned for decal asset definitions.
#[derive(Debug, Resource)]
pub struct AssetRoot(pub PathBuf);

impl Default for AssetRoot {
    fn default() -> Self {
        Self(PathBuf::from("assets"))
    }
}
