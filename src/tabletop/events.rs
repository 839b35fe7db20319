use bevy::prelude::*;

use super::components::{BarSlot, PlayerId};

/// A token's bar value changed. `previous` is the bar value before the change.
#[derive(Event, Clone, Debug)]
pub struct BarChanged {
    pub token: Entity,
    pub slot: BarSlot,
    pub previous: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    General,
    Whisper,
    Emote,
    Api,
}

#[derive(Event, Clone, Debug)]
pub struct ChatMessage {
    pub kind: MessageKind,
    pub from: PlayerId,
    pub content: String,
}
