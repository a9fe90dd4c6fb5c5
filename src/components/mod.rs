#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod base_map_tiles;
pub mod map_controls;
pub mod rail_map;
pub mod tooltip;
