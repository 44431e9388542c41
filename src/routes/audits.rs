use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::extract::AppJson;
use crate::AppState;
use crate::audit::{AuditEnvelope, AuditSubmission};
use crate::error::{AppError, AppResult};
use crate::store::{AuditSummary, StoredAudit};

const DEFAULT_LIST_LIMIT: i64 = 20;
const MAX_LIST_LIMIT: i64 = 100;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuditResponse {
    pub success: bool,
    pub audit_id: Uuid,
    pub audit_data: AuditEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn create_audit(
    State(state): State<AppState>,
    AppJson(body): AppJson<AuditSubmission>,
) -> AppResult<Json<CreateAuditResponse>> {
    let mut rng = fastrand::Rng::new();

    let created = crate::audit::create_audit(
        state.store.as_ref(),
        state.config.min_target_questions,
        &body,
        &mut rng,
    )
    .await?;

    Ok(Json(CreateAuditResponse {
        success: true,
        audit_id: created.id,
        audit_data: created.audit,
    }))
}

pub async fn get_audit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StoredAudit>> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::NotFound(format!("Audit {id} not found")))?;
    let audit = state.store.get(id).await?;

    Ok(Json(audit))
}

pub async fn list_audits(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Vec<AuditSummary>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let audits = state.store.list(limit, offset).await?;

    Ok(Json(audits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, None);
        assert_eq!(query.offset, None);
    }

    #[test]
    fn test_list_query_with_values() {
        let query: ListQuery = serde_json::from_str(r#"{"limit": 10, "offset": 5}"#).unwrap();
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, Some(5));
    }

    #[test]
    fn test_create_audit_body_deserialize() {
        let body: AuditSubmission = serde_json::from_str(
            r#"{"websiteUrl": "example.com", "targetQuestions": "Q1\nQ2", "useSEMrush": false}"#,
        )
        .unwrap();
        assert_eq!(body.website_url.as_deref(), Some("example.com"));
        assert_eq!(body.target_questions.as_deref(), Some("Q1\nQ2"));
        assert_eq!(body.use_semrush, Some(false));
        assert!(body.competitor_domains.is_none());
    }
}
