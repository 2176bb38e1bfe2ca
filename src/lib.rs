pub mod assets;
pub mod canvas;
pub mod compute;
pub mod config;
pub mod controls;
pub mod display;
pub mod entities;
pub mod game;
pub mod obstacles;
pub mod progression;
pub mod scheduler;
pub mod tasks;
pub mod world;
