#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod api;
pub mod components;
pub mod constants;
pub mod geometry;
pub mod import;
pub mod layout;
pub mod logging;
pub mod models;
pub mod projection;
pub mod tiles;
pub mod tooltip;
pub mod voronoi;

pub use components::app::App;
