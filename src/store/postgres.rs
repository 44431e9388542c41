use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use super::{AuditStore, AuditSummary, MAX_CREATE_ATTEMPTS, StoredAudit, not_found};
use crate::audit::AuditEnvelope;
use crate::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
struct AuditRow {
    id: Uuid,
    website_url: String,
    audit_data: Json<AuditEnvelope>,
    created_at: DateTime<Utc>,
}

impl From<AuditRow> for StoredAudit {
    fn from(row: AuditRow) -> Self {
        Self {
            id: row.id,
            website_url: row.website_url,
            audit_data: row.audit_data.0,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct PgAuditStore {
    pool: PgPool,
}

impl PgAuditStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditStore for PgAuditStore {
    #[tracing::instrument(name = "db.seo_audits.insert", skip(self, audit))]
    async fn create(&self, website_url: &str, audit: &AuditEnvelope) -> AppResult<Uuid> {
        let audit_data = serde_json::to_value(audit)?;

        for _ in 0..MAX_CREATE_ATTEMPTS {
            let id = Uuid::new_v4();
            let inserted: Option<(Uuid,)> = sqlx::query_as(
                "INSERT INTO seo_audits (id, website_url, audit_data) \
                 VALUES ($1, $2, $3) \
                 ON CONFLICT (id) DO NOTHING \
                 RETURNING id",
            )
            .bind(id)
            .bind(website_url)
            .bind(&audit_data)
            .fetch_optional(&self.pool)
            .await?;

            if let Some((id,)) = inserted {
                return Ok(id);
            }
            tracing::warn!(%id, "Audit id already taken, retrying");
        }

        Err(AppError::Store(format!(
            "could not allocate a unique audit id after {MAX_CREATE_ATTEMPTS} attempts"
        )))
    }

    #[tracing::instrument(name = "db.seo_audits.get", skip(self))]
    async fn get(&self, id: Uuid) -> AppResult<StoredAudit> {
        sqlx::query_as::<_, AuditRow>(
            "SELECT id, website_url, audit_data, created_at FROM seo_audits WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(StoredAudit::from)
        .ok_or_else(|| not_found(id))
    }

    #[tracing::instrument(name = "db.seo_audits.list", skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<AuditSummary>> {
        let audits = sqlx::query_as::<_, AuditSummary>(
            "SELECT id, website_url, \
             (audit_data->'audit'->>'seoScore')::int4 AS seo_score, created_at \
             FROM seo_audits ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(audits)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
