pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod manager;
pub mod resource;
pub mod resources;
pub mod session;
pub mod threat_path;
