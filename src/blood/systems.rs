use bevy::prelude::*;

use crate::{
    tabletop::{
        components::{Attribute, Bars, Character, Graphic, Handout, Layer, Page, Represents},
        events::BarChanged,
    },
    value_or_continue,
    values::{BLEED_TYPE_ATTRIBUTE, CAN_BLEED_ATTRIBUTE},
};

use super::{
    config::BloodConfig,
    events::SpawnBlood,
    profile::BleedProfile,
    resources::DecalRng,
    spawn::{plan_decal, SpawnAbort},
};

pub fn relay_health_changes(
    mut changes: EventReader<BarChanged>,
    mut requests: EventWriter<SpawnBlood>,
    config: Res<BloodConfig>,
) {
    for change in changes.iter().filter(|c| c.slot == config.health_bar) {
        requests.send(SpawnBlood {
            token: change.token,
            previous: change.previous,
        });
    }
}

pub fn spawn_blood(
    mut bevy: Commands,
    mut requests: EventReader<SpawnBlood>,
    tokens: Query<(&Graphic, &Bars, Option<&Represents>)>,
    characters: Query<(), With<Character>>,
    attributes: Query<&Attribute>,
    handouts: Query<&Handout>,
    mut pages: Query<&mut Page>,
    config: Res<BloodConfig>,
    mut rng: ResMut<DecalRng>,
) {
    let handouts = handouts.iter().collect::<Vec<_>>();

    for request in requests.iter() {
        let (token, bars, represents) = value_or_continue!(
            tokens.get(request.token).ok(),
            format!("no token {:?}", request.token)
        );

        let profile = represents
            .map(|represents| represents.0)
            .filter(|character| characters.contains(*character))
            .map(|character| {
                BleedProfile::read(character, attributes.iter(), &config.default_bleed_type)
            });

        let plan = match plan_decal(
            token,
            bars.get(config.health_bar),
            request.previous,
            profile.as_ref(),
            &handouts,
            &config,
            &mut rng.0,
        ) {
            Ok(plan) => plan,
            Err(abort) => {
                if !matches!(abort, SpawnAbort::NoAsset(_)) {
                    debug!("No blood under {}: {}", token.name, abort);
                }

                continue;
            }
        };

        let mut page = value_or_continue!(
            pages.get_mut(token.page).ok(),
            format!("no page {:?} under {}", token.page, token.name)
        );

        let decal = bevy
            .spawn(Graphic {
                name: config.decal_name.clone(),
                image: plan.image,
                left: plan.left,
                top: plan.top,
                width: plan.width,
                height: plan.height,
                rotation: plan.rotation,
                layer: Layer::Map,
                page: token.page,
            })
            .id();

        page.to_front(decal);

        info!("Created blood under graphic {}", token.name);
    }
}

pub fn initialize_bleed_attributes(
    mut bevy: Commands,
    characters: Query<(Entity, &Character), Added<Character>>,
    config: Res<BloodConfig>,
) {
    for (entity, character) in characters.iter() {
        debug!("Adding bleed attributes to {}", character.name);

        bevy.spawn(Attribute {
            character: entity,
            name: CAN_BLEED_ATTRIBUTE.into(),
            current: "1".into(),
        });

        bevy.spawn(Attribute {
            character: entity,
            name: BLEED_TYPE_ATTRIBUTE.into(),
            current: config.default_bleed_type.clone(),
        });
    }
}
