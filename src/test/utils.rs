use bevy::prelude::*;

use crate::{
    blood::events::SpawnBlood,
    tabletop::{
        components::{Graphic, PlayerId},
        events::{ChatMessage, MessageKind},
    },
};

pub fn send_chat(app: &mut App, from: PlayerId, kind: MessageKind, content: &str) {
    app.world.resource_mut::<Events<ChatMessage>>().send(ChatMessage {
        kind,
        from,
        content: content.into(),
    });
}

pub fn request_blood(app: &mut App, token: Entity, previous: Option<f32>) {
    app.world
        .resource_mut::<Events<SpawnBlood>>()
        .send(SpawnBlood { token, previous });
}

pub fn get_decals(app: &mut App, page: Entity) -> Vec<(Entity, Graphic)> {
    let name = app
        .world
        .resource::<crate::blood::config::BloodConfig>()
        .decal_name
        .clone();

    app.world
        .query::<(Entity, &Graphic)>()
        .iter(&app.world)
        .filter(|(_, graphic)| graphic.name == name && graphic.page == page)
        .map(|(entity, graphic)| (entity, graphic.clone()))
        .collect()
}
