use bevy::prelude::*;
use strum_macros::{Display, EnumString};

use crate::{
    keycard::{Keycard, CLEAR_DECALS},
    tabletop::{
        components::{Graphic, Page, Player},
        events::{ChatMessage, MessageKind},
        resources::Campaign,
    },
    value_or_continue,
};

use super::config::BloodConfig;

const COMMAND: &str = "!blood";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BloodCommand {
    Clear,
}

#[derive(Debug, PartialEq)]
pub enum ParseError {
    WrongCommand,
    UnknownSubcommand(String),
}

/// Parses an API message. Anything containing `!blood` is ours; the
/// subcommand is what remains after removing the first `!blood `.
pub fn handle_blood(content: &str) -> Result<BloodCommand, ParseError> {
    if !content.contains(COMMAND) {
        return Err(ParseError::WrongCommand);
    }

    let subcommand = content.replacen(&format!("{COMMAND} "), "", 1);

    subcommand
        .parse::<BloodCommand>()
        .map_err(|_| ParseError::UnknownSubcommand(subcommand))
}

pub fn blood_command(
    mut bevy: Commands,
    mut messages: EventReader<ChatMessage>,
    players: Query<(&Player, &Keycard)>,
    graphics: Query<(Entity, &Graphic)>,
    mut pages: Query<&mut Page>,
    campaign: Res<Campaign>,
    config: Res<BloodConfig>,
) {
    for message in messages.iter().filter(|m| m.kind == MessageKind::Api) {
        let command = match handle_blood(&message.content) {
            Ok(command) => command,
            Err(ParseError::UnknownSubcommand(subcommand)) => {
                debug!("Ignoring blood subcommand: {:?}", subcommand);

                continue;
            }
            Err(ParseError::WrongCommand) => continue,
        };

        let (_, keycard) = value_or_continue!(
            players.iter().find(|(player, _)| player.id == message.from),
            format!("unknown sender {}", message.from)
        );

        if !keycard.can(CLEAR_DECALS) {
            continue;
        }

        match command {
            BloodCommand::Clear => {
                let page = value_or_continue!(campaign.player_page, "no player page");

                let decals = graphics
                    .iter()
                    .filter(|(_, graphic)| {
                        graphic.page == page && graphic.name == config.decal_name
                    })
                    .map(|(entity, _)| entity)
                    .collect::<Vec<_>>();

                if let Ok(mut page) = pages.get_mut(page) {
                    page.order.retain(|entity| !decals.contains(entity));
                }

                for decal in &decals {
                    bevy.entity(*decal).despawn();
                }

                debug!("Cleared {} decals", decals.len());
            }
        }
    }
}
