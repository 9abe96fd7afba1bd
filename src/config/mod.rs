//! Configuration management module
//!
//! Responsible for loading and managing application configuration from the environment

pub mod settings;

pub use settings::Settings;
