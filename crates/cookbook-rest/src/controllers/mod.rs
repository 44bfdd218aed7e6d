//! REST API controllers.

pub mod health_controller;
pub mod recipe_controller;

pub use health_controller::*;
