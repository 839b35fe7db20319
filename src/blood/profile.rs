use bevy::prelude::*;

use crate::{
    tabletop::components::Attribute,
    values::{BLEED_TYPE_ATTRIBUTE, CAN_BLEED_ATTRIBUTE},
};

/// The bleed attributes of a character, with defaults applied.
#[derive(Clone, Debug, PartialEq)]
pub struct BleedProfile {
    pub can_bleed: bool,
    pub bleed_type: String,
}

impl BleedProfile {
    /// Builds the profile from the character's attributes. Missing or blank
    /// values fall back to "bleeds" and the configured default type.
    pub fn read<'a>(
        character: Entity,
        attributes: impl IntoIterator<Item = &'a Attribute>,
        default_bleed_type: &str,
    ) -> Self {
        let mut can_bleed = None;
        let mut bleed_type = None;

        for attribute in attributes
            .into_iter()
            .filter(|attribute| attribute.character == character)
        {
            let current = attribute.current.trim();

            if current.is_empty() {
                continue;
            }

            // First match wins, duplicates can exist after double creation.
            match attribute.name.as_str() {
                CAN_BLEED_ATTRIBUTE if can_bleed.is_none() => {
                    can_bleed = Some(is_one(current));
                }
                BLEED_TYPE_ATTRIBUTE if bleed_type.is_none() => {
                    bleed_type = Some(current.to_string());
                }
                _ => {}
            }
        }

        Self {
            can_bleed: can_bleed.unwrap_or(true),
            bleed_type: bleed_type.unwrap_or_else(|| default_bleed_type.into()),
        }
    }
}

fn is_one(value: &str) -> bool {
    value.parse::<f64>().map_or(false, |number| number == 1.0)
}
