use bevy::prelude::*;

use super::{events::*, resources::Campaign, systems::*};

pub struct TabletopPlugin;

impl Plugin for TabletopPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Campaign::default());

        app.add_event::<BarChanged>().add_event::<ChatMessage>();

        app.add_systems(PreUpdate, track_bars);
    }
}
