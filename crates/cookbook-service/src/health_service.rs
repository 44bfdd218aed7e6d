//! Health service trait definition.

use async_trait::async_trait;
use cookbook_core::Interface;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status of one dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Up,
    Down,
    Disabled,
}

/// Dependency status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    pub repository: ComponentStatus,
    pub cache: ComponentStatus,
}

impl HealthReport {
    /// Ready when the repository answers. The cache only degrades search.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.repository == ComponentStatus::Up
    }
}

/// Health service trait.
#[async_trait]
pub trait HealthService: Interface + Send + Sync {
    /// Checks the repository and the cache.
    async fn check(&self) -> HealthReport;
}
