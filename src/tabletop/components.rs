use std::fmt::{self, Display, Formatter};

use bevy::prelude::*;
use serde::Deserialize;
use strum_macros::{Display as StrumDisplay, EnumString};

#[derive(Component, Debug, Default)]
pub struct Page {
    pub name: String,
    /// Graphics in draw order, the last one is drawn on top.
    pub order: Vec<Entity>,
}

impl Page {
    pub fn to_front(&mut self, graphic: Entity) {
        self.order.retain(|entity| *entity != graphic);
        self.order.push(graphic);
    }

    pub fn is_front(&self, graphic: Entity) -> bool {
        self.order.last() == Some(&graphic)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Layer {
    Map,
    #[default]
    Objects,
    GmLayer,
}

#[derive(Component, Debug, Clone)]
pub struct Graphic {
    pub name: String,
    pub image: String,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    pub layer: Layer,
    pub page: Entity,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bar {
    pub value: Option<f32>,
    pub max: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, StrumDisplay, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum BarSlot {
    Bar1,
    Bar2,
    Bar3,
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Bars(pub [Bar; 3]);

impl Bars {
    pub fn get(&self, slot: BarSlot) -> &Bar {
        &self.0[slot.index()]
    }

    pub fn get_mut(&mut self, slot: BarSlot) -> &mut Bar {
        &mut self.0[slot.index()]
    }
}

impl BarSlot {
    pub const ALL: [BarSlot; 3] = [BarSlot::Bar1, BarSlot::Bar2, BarSlot::Bar3];

    fn index(self) -> usize {
        match self {
            Self::Bar1 => 0,
            Self::Bar2 => 1,
            Self::Bar3 => 2,
        }
    }
}

/// Bar values as they were after the last update, used to report the previous
/// value when a bar changes.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct LastBars(pub Bars);

#[derive(Component, Clone, Copy, Debug)]
pub struct Represents(pub Entity);

#[derive(Component, Debug)]
pub struct Character {
    pub name: String,
}

#[derive(Component, Debug, Clone)]
pub struct Attribute {
    pub character: Entity,
    pub name: String,
    pub current: String,
}

#[derive(Component, Debug, Clone, PartialEq, Deserialize)]
pub struct Handout {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

#[derive(Component, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_front_moves_existing_graphic() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut page = Page {
            order: vec![first, second],
            ..default()
        };

        page.to_front(first);

        assert_eq!(page.order, vec![second, first]);
        assert!(page.is_front(first));
    }

    #[test]
    fn bar_slots_parse() {
        assert_eq!("bar2".parse::<BarSlot>().ok(), Some(BarSlot::Bar2));
        assert_eq!(Layer::GmLayer.to_string(), "gmlayer");
    }
}
