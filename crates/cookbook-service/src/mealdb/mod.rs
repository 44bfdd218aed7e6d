//! TheMealDB adapter.
//!
//! `client` performs the HTTP search; `convert` normalizes provider records
//! into the canonical [`Recipe`](cookbook_core::Recipe) shape.

mod client;
pub mod convert;

pub use client::{MealDbClient, MealDbClientParameters};
