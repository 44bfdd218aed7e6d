//! # Cookbook Service
//!
//! Recipe use cases for the Cookbook service: CRUD over the local repository
//! and a merged search that appends TheMealDB results, served through a
//! cache-aside layer backed by Redis.

pub mod cache;
pub mod cached_source;
pub mod dto;
pub mod external_source;
pub mod health_service;
pub mod r#impl;
pub mod mealdb;
pub mod metrics;
pub mod recipe_service;

pub use cache::*;
pub use cached_source::*;
pub use dto::*;
pub use external_source::*;
pub use health_service::*;
pub use mealdb::{MealDbClient, MealDbClientParameters};
pub use recipe_service::*;
pub use r#impl::{HealthServiceComponent, RecipeServiceComponent};
