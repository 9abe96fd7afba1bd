//! Middleware module
//!
//! Contains HTTP request logging middleware

pub mod logging;

pub use logging::request_logging_middleware;
