use bevy::prelude::*;

use super::components::{Bars, Graphic, LastBars};

#[derive(Bundle)]
pub struct TokenBundle {
    pub graphic: Graphic,
    pub bars: Bars,
    pub last_bars: LastBars,
}

impl TokenBundle {
    pub fn new(graphic: Graphic, bars: Bars) -> Self {
        Self {
            graphic,
            bars,
            last_bars: LastBars(bars),
        }
    }
}
