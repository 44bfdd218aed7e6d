//! # Cookbook Server Library
//!
//! Wiring for the Cookbook server binary: Shaku modules for each storage
//! backend, router assembly, logging and metrics setup, and startup output.

pub mod app;
pub mod di;
pub mod startup;
pub mod telemetry;
