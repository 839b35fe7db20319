pub mod command;
pub mod config;
pub mod events;
pub mod plugin;
pub mod profile;
pub mod resources;
pub mod spawn;
pub mod systems;
