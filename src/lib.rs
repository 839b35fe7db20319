pub mod blood;
pub mod data;
pub mod keycard;
pub mod tabletop;
pub mod utils;
pub mod values;

#[cfg(test)]
mod test;
