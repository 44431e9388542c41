pub mod memory;
pub mod pool;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::AuditEnvelope;
use crate::error::AppResult;

pub use memory::MemoryAuditStore;
pub use postgres::PgAuditStore;

/// Attempts at minting an unused id before `create` gives up.
pub const MAX_CREATE_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAudit {
    pub id: Uuid,
    pub website_url: String,
    pub audit_data: AuditEnvelope,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub id: Uuid,
    pub website_url: String,
    pub seo_score: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Write-once storage for generated audits.
///
/// Records are never updated. `create` always mints a fresh id and must not
/// overwrite an existing record; `get` after a completed `create` must see it.
#[async_trait]
pub trait AuditStore: Send + Sync {
    async fn create(&self, website_url: &str, audit: &AuditEnvelope) -> AppResult<Uuid>;

    /// Fails with `AppError::NotFound` when no audit exists under `id`.
    async fn get(&self, id: Uuid) -> AppResult<StoredAudit>;

    /// Newest first.
    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<AuditSummary>>;

    async fn ping(&self) -> AppResult<()>;

    fn backend(&self) -> &'static str;
}

pub(crate) fn not_found(id: Uuid) -> crate::error::AppError {
    crate::error::AppError::NotFound(format!("Audit {id} not found"))
}
