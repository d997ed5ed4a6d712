pub mod api;
pub mod authoring;
pub mod cli;
pub mod config;
pub mod error;
pub mod play_controller;
pub mod render;
pub mod resolver;
pub mod session_context;
