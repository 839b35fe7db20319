pub mod character_builder;
pub mod utils;
