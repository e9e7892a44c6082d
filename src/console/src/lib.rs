pub mod config;
pub mod entrypoint;
pub mod error;
pub mod service;
