use bevy::prelude::*;

pub const CLEAR_DECALS: u32 = 1 << 2;

const PLAYER: u32 = 0;
const GAME_MASTER: u32 = PLAYER | CLEAR_DECALS;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keycard {
    permissions: u32,
}

impl Keycard {
    pub fn game_master() -> Self {
        Self {
            permissions: GAME_MASTER,
        }
    }

    pub fn player() -> Self {
        Self {
            permissions: PLAYER,
        }
    }

    pub fn can(&self, permission: u32) -> bool {
        (self.permissions & permission) == permission
    }
}
