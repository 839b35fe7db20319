pub const BLOOD_TYPE_PREFIX: &str = "blood_";
pub const DEFAULT_BLEED_TYPE: &str = "default";
pub const DECAL_NAME: &str = "combat_blood";

// Damage fraction below which no decal is spawned.
pub const MIN_ALLOWED_MULTIPLIER: f32 = 0.10;
// Decal size is capped at the token size times this.
pub const MAX_SIZE_MULTIPLIER: f32 = 1.5;

pub const BLOOD_BASE_WIDTH: f32 = 400.0;
pub const BLOOD_BASE_HEIGHT: f32 = 400.0;

pub const MAX_ROTATION: u32 = 360;

pub const CAN_BLEED_ATTRIBUTE: &str = "canBleed";
pub const BLEED_TYPE_ATTRIBUTE: &str = "bleedType";

pub const IMAGE_SIZE_FROM: &str = "med";
pub const IMAGE_SIZE_TO: &str = "thumb";

pub const CONFIG_ENV_VAR: &str = "BLOOD_CONFIG";
pub const DECAL_ASSET_SUFFIX: &str = ".decal.ron";
