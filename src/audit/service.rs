use std::time::Instant;

use chrono::Utc;
use opentelemetry::KeyValue;
use uuid::Uuid;

use super::generator::generate_audit;
use super::intake::{AuditSubmission, validate};
use super::model::AuditEnvelope;
use super::random::RandomSource;
use crate::error::{AppError, AppResult};
use crate::store::AuditStore;
use crate::telemetry::metrics::{
    AUDIT_FINDINGS, AUDIT_GENERATION_DURATION, AUDIT_VALIDATION_FAILURES, AUDITS_CREATED,
};

#[derive(Debug, Clone)]
pub struct CreatedAudit {
    pub id: Uuid,
    pub audit: AuditEnvelope,
}

/// Validates a submission, generates its audit and persists it.
///
/// Nothing is written to the store unless validation passes.
#[tracing::instrument(
    name = "audit create",
    skip_all,
    fields(
        audit.id,
        audit.website,
        audit.questions,
        audit.competitors,
    )
)]
pub async fn create_audit<R: RandomSource + Send + ?Sized>(
    store: &dyn AuditStore,
    min_target_questions: usize,
    submission: &AuditSubmission,
    rng: &mut R,
) -> AppResult<CreatedAudit> {
    let start = Instant::now();

    let request = match validate(submission) {
        Ok(request) => request,
        Err(err) => {
            AUDIT_VALIDATION_FAILURES.add(1, &[]);
            return Err(err);
        }
    };

    if request.target_questions.len() < min_target_questions {
        AUDIT_VALIDATION_FAILURES.add(1, &[]);
        return Err(AppError::Validation(format!(
            "at least {min_target_questions} target questions are required, got {}",
            request.target_questions.len()
        )));
    }

    let span = tracing::Span::current();
    span.record("audit.website", request.website.as_str());
    span.record("audit.questions", request.target_questions.len());
    span.record("audit.competitors", request.competitors.len());

    let audit = generate_audit(&request, rng, Utc::now());
    let id = store.create(&request.website, &audit).await?;

    let backend = KeyValue::new("store.backend", store.backend());
    AUDITS_CREATED.add(1, &[backend.clone()]);
    AUDIT_GENERATION_DURATION.record(start.elapsed().as_secs_f64(), &[backend]);
    AUDIT_FINDINGS.record(
        (audit.audit.seo_issues.len() + audit.audit.opportunity_gaps.len()) as f64,
        &[],
    );

    span.record("audit.id", id.to_string());
    tracing::info!(audit.id = %id, website = %request.website, "Audit created");

    Ok(CreatedAudit { id, audit })
}
