use bevy::prelude::*;
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::{
    tabletop::components::{Bar, Graphic, Handout},
    values::{IMAGE_SIZE_FROM, IMAGE_SIZE_TO},
};

use super::{config::BloodConfig, profile::BleedProfile};

#[derive(Error, Debug, PartialEq)]
pub enum SpawnAbort {
    #[error("token does not represent a character")]
    NoCharacter,
    #[error("token has no health value")]
    NoHealth,
    #[error("token has no usable maximum health")]
    NoMaximum,
    #[error("health did not decrease")]
    NotDamaged,
    #[error("character does not bleed")]
    CannotBleed,
    #[error("damage fraction {0} is below the threshold")]
    BelowThreshold(f32),
    #[error("no decal asset named {0}")]
    NoAsset(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecalPlan {
    pub image: String,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

/// Decides whether a health change on `token` produces a decal and, if so,
/// where and how large. `profile` is `None` when the token represents no
/// character.
pub fn plan_decal<R: Rng>(
    token: &Graphic,
    health: &Bar,
    previous: Option<f32>,
    profile: Option<&BleedProfile>,
    handouts: &[&Handout],
    config: &BloodConfig,
    rng: &mut R,
) -> Result<DecalPlan, SpawnAbort> {
    let profile = profile.ok_or(SpawnAbort::NoCharacter)?;

    let current = health
        .value
        .filter(|value| value.is_finite() && *value != 0.0)
        .ok_or(SpawnAbort::NoHealth)?;

    let damage = previous
        .map(|previous| current - previous)
        .filter(|damage| *damage < 0.0)
        .ok_or(SpawnAbort::NotDamaged)?;

    if !profile.can_bleed {
        return Err(SpawnAbort::CannotBleed);
    }

    let multiplier = damage_multiplier(damage, health.max)?;

    if multiplier < config.min_allowed_multiplier {
        return Err(SpawnAbort::BelowThreshold(multiplier));
    }

    let handout = resolve_asset(handouts, &profile.bleed_type, config, rng)?;
    let (width, height) = decal_size(multiplier, token, config);

    Ok(DecalPlan {
        image: decal_image(&handout.avatar),
        left: token.left + signed_offset(rng, token.width),
        top: token.top + signed_offset(rng, token.height),
        width,
        height,
        rotation: rng.gen_range(0..config.max_rotation) as f32,
    })
}

pub fn damage_multiplier(damage: f32, max: Option<f32>) -> Result<f32, SpawnAbort> {
    let multiplier = max
        .map(|max| (damage / max).abs())
        .filter(|multiplier| multiplier.is_finite())
        .ok_or(SpawnAbort::NoMaximum)?;

    Ok(multiplier)
}

/// Picks a handout for `bleed_type`, falling back to the default type. Ties
/// between handouts with the same name are broken at random.
pub fn resolve_asset<'a, R: Rng>(
    handouts: &[&'a Handout],
    bleed_type: &str,
    config: &BloodConfig,
    rng: &mut R,
) -> Result<&'a Handout, SpawnAbort> {
    let name = config.asset_name(bleed_type);

    if let Some(handout) = choose_named(handouts, &name, rng) {
        return Ok(handout);
    }

    let fallback = config.fallback_asset_name();

    warn!("Did not find decal asset {name}, attempting default {fallback}");

    choose_named(handouts, &fallback, rng).ok_or_else(|| {
        error!("No decal assets found, expected a handout named {fallback}");

        SpawnAbort::NoAsset(fallback)
    })
}

fn choose_named<'a, R: Rng>(
    handouts: &[&'a Handout],
    name: &str,
    rng: &mut R,
) -> Option<&'a Handout> {
    let matching = handouts
        .iter()
        .copied()
        .filter(|handout| handout.name == name)
        .collect::<Vec<_>>();

    matching.choose(rng).copied()
}

/// Scales the base size by `multiplier`, capped relative to the token. The cap
/// condition mirrors the host script: the height test only counts together
/// with a positive base width.
pub fn decal_size(multiplier: f32, token: &Graphic, config: &BloodConfig) -> (f32, f32) {
    let width = config.base_width * multiplier;
    let height = config.base_height * multiplier;

    let max_width = token.width * config.max_size_multiplier;
    let max_height = token.height * config.max_size_multiplier;

    if width > max_width || (height > max_height && config.base_width > 0.0) {
        (max_width, max_height)
    } else {
        (width, height)
    }
}

/// A random whole offset in `1..=max` with a random sign, or zero when `max`
/// is below one.
pub fn signed_offset<R: Rng>(rng: &mut R, max: f32) -> f32 {
    let max = max.floor();

    if max < 1.0 {
        return 0.0;
    }

    let magnitude = rng.gen_range(1..=max as u32) as f32;

    if rng.gen_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}

pub fn decal_image(avatar: &str) -> String {
    avatar.replacen(IMAGE_SIZE_FROM, IMAGE_SIZE_TO, 1)
}
