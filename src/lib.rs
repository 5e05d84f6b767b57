pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod fingerprint;
pub mod input;
pub mod physics;
pub mod render;
pub mod spawn;
pub mod sprites;
pub mod ui;
