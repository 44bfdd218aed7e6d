//! # Cookbook Config
//!
//! Configuration management for the Cookbook service.
//! Supports layered configuration from files and environment variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
