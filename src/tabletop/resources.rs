use bevy::prelude::*;

#[derive(Debug, Default, Resource)]
pub struct Campaign {
    /// Page the players are currently looking at.
    pub player_page: Option<Entity>,
}
