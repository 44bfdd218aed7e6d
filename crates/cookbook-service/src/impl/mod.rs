//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `recipe_service.rs`).

pub mod health_service_impl;
pub mod recipe_service_impl;

pub use health_service_impl::HealthServiceComponent;
pub use recipe_service_impl::RecipeServiceComponent;
