mod map_settings;
mod rail_node;
mod world;

pub use map_settings::MapSettings;
pub use rail_node::{Location, RailNode};
pub use world::World;
