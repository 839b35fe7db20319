use bevy::prelude::*;

/// Asks for a blood decal under `token`, as if its health bar had just changed
/// from `previous` to its current value.
#[derive(Event, Clone, Debug)]
pub struct SpawnBlood {
    pub token: Entity,
    pub previous: Option<f32>,
}
