//! # Cookbook Repository
//!
//! Storage for internal recipes behind one contract:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn RecipeRepository>
//! InMemoryRecipeRepository   (process-local, optional demo seed)
//! SqliteRecipeRepository     (SQLx over SQLite)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! SQLite
//! ```
//!
//! Both implementations assign monotonic ids that are never reused, and never persist
//! the recipe source; every recipe they return is tagged `internal`.

pub mod memory;
pub mod pool;
pub mod sqlite;
pub mod traits;

pub use memory::*;
pub use pool::*;
pub use sqlite::*;
pub use traits::*;
