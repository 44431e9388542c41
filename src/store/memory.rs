use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AuditStore, AuditSummary, MAX_CREATE_ATTEMPTS, StoredAudit, not_found};
use crate::audit::AuditEnvelope;
use crate::error::{AppError, AppResult};

type IdSource = Box<dyn Fn() -> Uuid + Send + Sync>;

#[derive(Default)]
struct Records {
    by_id: HashMap<Uuid, StoredAudit>,
    insertion_order: Vec<Uuid>,
}

/// In-process store used when no database is configured.
pub struct MemoryAuditStore {
    records: RwLock<Records>,
    next_id: IdSource,
}

impl MemoryAuditStore {
    pub fn new() -> Self {
        Self::with_id_source(Box::new(Uuid::new_v4))
    }

    pub fn with_id_source(next_id: IdSource) -> Self {
        Self {
            records: RwLock::new(Records::default()),
            next_id,
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryAuditStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditStore for MemoryAuditStore {
    #[tracing::instrument(name = "memory.seo_audits.insert", skip(self, audit))]
    async fn create(&self, website_url: &str, audit: &AuditEnvelope) -> AppResult<Uuid> {
        let mut guard = self.records.write().await;
        let records = &mut *guard;

        for _ in 0..MAX_CREATE_ATTEMPTS {
            let id = (self.next_id)();
            match records.by_id.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(StoredAudit {
                        id,
                        website_url: website_url.to_string(),
                        audit_data: audit.clone(),
                        created_at: Utc::now(),
                    });
                    records.insertion_order.push(id);
                    return Ok(id);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(%id, "Audit id already taken, retrying");
                }
            }
        }

        Err(AppError::Store(format!(
            "could not allocate a unique audit id after {MAX_CREATE_ATTEMPTS} attempts"
        )))
    }

    async fn get(&self, id: Uuid) -> AppResult<StoredAudit> {
        self.records
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<AuditSummary>> {
        let records = self.records.read().await;
        let audits = records
            .insertion_order
            .iter()
            .rev()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .filter_map(|id| records.by_id.get(id))
            .map(|stored| AuditSummary {
                id: stored.id,
                website_url: stored.website_url.clone(),
                seo_score: i32::try_from(stored.audit_data.audit.seo_score).ok(),
                created_at: stored.created_at,
            })
            .collect();

        Ok(audits)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
