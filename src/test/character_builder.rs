use bevy::prelude::*;
use fake::{faker::name::en::Name, Dummy, Fake, Faker};

use crate::{
    tabletop::components::{Attribute, Character},
    values::{BLEED_TYPE_ATTRIBUTE, CAN_BLEED_ATTRIBUTE},
};

#[derive(Dummy)]
pub struct CharacterBuilder {
    #[dummy(faker = "Name()")]
    name: String,
    #[dummy(expr = "None")]
    can_bleed: Option<String>,
    #[dummy(expr = "None")]
    bleed_type: Option<String>,
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    pub fn can_bleed(mut self, value: &str) -> Self {
        self.can_bleed = Some(value.into());
        self
    }

    pub fn bleed_type(mut self, value: &str) -> Self {
        self.bleed_type = Some(value.into());
        self
    }

    pub fn build(self, app: &mut App) -> Entity {
        let character = app.world.spawn(Character { name: self.name }).id();

        for (name, current) in [
            (CAN_BLEED_ATTRIBUTE, self.can_bleed),
            (BLEED_TYPE_ATTRIBUTE, self.bleed_type),
        ] {
            if let Some(current) = current {
                app.world.spawn(Attribute {
                    character,
                    name: name.into(),
                    current,
                });
            }
        }

        character
    }
}
