use bevy::prelude::*;

use super::{
    command::blood_command, config::BloodConfig, events::SpawnBlood, resources::DecalRng,
    systems::*,
};

pub struct BloodPlugin;

impl Plugin for BloodPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BloodConfig>()
            .init_resource::<DecalRng>()
            .add_event::<SpawnBlood>();

        app.add_systems(
            Update,
            (
                (relay_health_changes, spawn_blood).chain(),
                blood_command,
                initialize_bleed_attributes,
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        tabletop::{
            components::{Attribute, BarSlot, Bars},
            plugin::TabletopPlugin,
        },
        test::{
            character_builder::CharacterBuilder, handout_builder::HandoutBuilder,
            page_builder::PageBuilder, token_builder::TokenBuilder, utils::get_decals,
        },
    };

    fn app() -> App {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(DecalRng::seeded(9))
            .add_plugins((TabletopPlugin, BloodPlugin));

        app
    }

    #[test]
    fn keeps_provided_config() {
        let mut app = App::new();

        app.insert_resource(BloodConfig {
            prefix: "splat_".into(),
            ..default()
        })
        .add_plugins(BloodPlugin);

        assert_eq!(app.world.resource::<BloodConfig>().prefix, "splat_");
    }

    #[test]
    fn health_bar_edit_spawns_blood() {
        let mut app = app();

        HandoutBuilder::new("blood_default").build(&mut app);

        let page = PageBuilder::new().player_page().build(&mut app);
        let character = CharacterBuilder::new().build(&mut app);
        let token = TokenBuilder::new()
            .size(140.0, 140.0)
            .health(20.0, 20.0)
            .represents(character)
            .build(&mut app, page);

        app.update();

        app.world
            .get_mut::<Bars>(token)
            .unwrap()
            .get_mut(BarSlot::Bar1)
            .value = Some(10.0);
        app.update();

        let decals = get_decals(&mut app, page);

        assert_eq!(decals.len(), 1);
        assert_eq!(decals[0].1.width, 200.0);
        assert_eq!(decals[0].1.height, 200.0);
    }

    #[test]
    fn new_character_gets_attributes() {
        let mut app = app();

        let character = CharacterBuilder::new().build(&mut app);
        app.update();

        let count = app
            .world
            .query::<&Attribute>()
            .iter(&app.world)
            .filter(|a| a.character == character)
            .count();

        assert_eq!(count, 2);
    }
}
