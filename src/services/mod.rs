//! Service layer module
//!
//! Contains the action API client, parameter builders, and response normalizer

pub mod actions;
pub mod client;
pub mod normalizer;
pub mod params;

pub use actions::WikiActions;
pub use client::WikiClient;
