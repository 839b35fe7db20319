use bevy::prelude::*;

use super::{
    components::{BarSlot, Bars, LastBars},
    events::BarChanged,
};

pub fn track_bars(
    mut tokens: Query<(Entity, &Bars, &mut LastBars), Changed<Bars>>,
    mut changes: EventWriter<BarChanged>,
) {
    for (token, bars, mut last) in tokens.iter_mut() {
        for slot in BarSlot::ALL {
            let previous = last.0.get(slot).value;

            if bars.get(slot).value != previous {
                changes.send(BarChanged {
                    token,
                    slot,
                    previous,
                });
            }
        }

        last.0 = *bars;
    }
}
