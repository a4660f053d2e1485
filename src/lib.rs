// Records library - exposes all core modules for the binary and for testing

pub mod app;
pub mod config;
pub mod config_io;
pub mod input;
pub mod model;
pub mod services;
pub mod view;
