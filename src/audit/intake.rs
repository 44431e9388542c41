use serde::Deserialize;

use super::model::AuditRequest;
use crate::error::{AppError, AppResult};

/// Raw form submission as posted by the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditSubmission {
    pub website_url: Option<String>,
    pub region: Option<String>,
    pub audience: Option<String>,
    pub target_questions: Option<String>,
    pub competitor_domains: Option<String>,
    #[serde(rename = "useSEMrush")]
    pub use_semrush: Option<bool>,
}

/// Splits a multi-line form field into trimmed, non-empty lines.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate(submission: &AuditSubmission) -> AppResult<AuditRequest> {
    let website = submission
        .website_url
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if website.is_empty() {
        return Err(AppError::Validation("websiteUrl is required".into()));
    }

    let target_questions = parse_lines(submission.target_questions.as_deref().unwrap_or_default());
    if target_questions.is_empty() {
        return Err(AppError::Validation("targetQuestions is required".into()));
    }

    Ok(AuditRequest {
        website: website.to_string(),
        region: submission.region.clone().unwrap_or_default(),
        audience: submission.audience.clone().unwrap_or_default(),
        target_questions,
        competitors: parse_lines(submission.competitor_domains.as_deref().unwrap_or_default()),
        use_secondary_seo_source: submission.use_semrush.unwrap_or(false),
    })
}
