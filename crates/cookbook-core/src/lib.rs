//! # Cookbook Core
//!
//! Core types, traits, and error definitions for the Cookbook service.
//! Every other crate in the workspace builds on the recipe model and the
//! unified error type defined here.

pub mod error;
pub mod recipe;
pub mod result;
pub mod validation;

pub use error::*;
pub use recipe::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
