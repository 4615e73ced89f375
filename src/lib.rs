pub mod backdrop;
pub mod compute;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod geometry;
pub mod scoreboard;
pub mod settings;
pub mod sprite;
