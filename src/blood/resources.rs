use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Resource)]
pub struct DecalRng(pub StdRng);

impl Default for DecalRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl DecalRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}
