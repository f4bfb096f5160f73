pub mod config;
pub mod generator;
pub mod icon;
pub mod locator;
pub mod logger;
pub mod models;

#[cfg(test)]
mod fixtures;

pub use generator::generate_icons;
pub use models::{IconConfig, IconError};
