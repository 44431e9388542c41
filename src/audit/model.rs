use std::fmt;
use std::ops::Index;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated audit submission, echoed back as the envelope's `input`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    pub website: String,
    pub region: String,
    pub audience: String,
    pub target_questions: Vec<String>,
    pub competitors: Vec<String>,
    /// Accepted and echoed, but does not change generation.
    pub use_secondary_seo_source: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityGap {
    pub issue: String,
    pub page: String,
    pub impact: Impact,
    pub effort: Effort,
    pub recommendation: String,
    pub quick_win: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub issue: String,
    pub page: String,
    pub impact: Impact,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub domain: String,
    pub citations: u32,
    #[serde(rename = "SERP_mentions")]
    pub serp_mentions: u32,
}

/// One domain's standing for a single target question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionStanding {
    pub domain: String,
    pub rank: u32,
    pub citations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPerformance {
    pub question: String,
    pub site_entry: QuestionStanding,
    pub top_competitor: QuestionStanding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub current_traffic: Vec<u32>,
    pub projected_uplift: Vec<u32>,
}

/// Per-competitor issues, serialized as a JSON object whose keys keep the
/// order competitors were submitted in.
///
/// Inserting a domain that is already present replaces its issues in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitorIssues {
    entries: Vec<(String, Vec<SeoIssue>)>,
}

impl CompetitorIssues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, domain: String, issues: Vec<SeoIssue>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == domain) {
            Some((_, slot)) => *slot = issues,
            None => self.entries.push((domain, issues)),
        }
    }

    pub fn get(&self, domain: &str) -> Option<&[SeoIssue]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == domain)
            .map(|(_, issues)| issues.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(domain, _)| domain.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Vec<SeoIssue>> {
        self.entries.iter().map(|(_, issues)| issues)
    }
}

impl Index<&str> for CompetitorIssues {
    type Output = [SeoIssue];

    fn index(&self, domain: &str) -> &Self::Output {
        match self.get(domain) {
            Some(issues) => issues,
            None => panic!("no issues recorded for competitor {domain}"),
        }
    }
}

impl Serialize for CompetitorIssues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (domain, issues) in &self.entries {
            map.serialize_entry(domain, issues)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CompetitorIssues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CompetitorIssuesVisitor;

        impl<'de> Visitor<'de> for CompetitorIssuesVisitor {
            type Value = CompetitorIssues;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of competitor domain to issues")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut issues = CompetitorIssues::new();
                while let Some((domain, entries)) = access.next_entry::<String, Vec<SeoIssue>>()? {
                    issues.insert(domain, entries);
                }
                Ok(issues)
            }
        }

        deserializer.deserialize_map(CompetitorIssuesVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub seo_score: u32,
    pub ai_citation_score: u32,
    pub critical_issues_count: u32,
    pub traffic_trend: Vec<u32>,
    pub opportunity_gaps: Vec<OpportunityGap>,
    pub seo_issues: Vec<SeoIssue>,
    pub competitor_seo_issues: CompetitorIssues,
    pub ai_visibility_comparison: Vec<VisibilityEntry>,
    pub top_questions_performance: Vec<QuestionPerformance>,
    pub quick_wins: Vec<String>,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailNotifications {
    pub enabled: bool,
    pub frequency: Vec<String>,
    pub recipients: Vec<String>,
    pub attach_audit_file: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlaceholders {
    pub aws_bedrock: String,
    #[serde(rename = "otherAPIs")]
    pub other_apis: Vec<String>,
}

/// Notification and integration defaults shipped with every audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub mail_notifications: MailNotifications,
    pub download_option: bool,
    pub api_placeholders: ApiPlaceholders,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mail_notifications: MailNotifications {
                enabled: true,
                frequency: vec!["weekly".to_string(), "monthly".to_string()],
                recipients: vec!["user@example.com".to_string()],
                attach_audit_file: true,
            },
            download_option: true,
            api_placeholders: ApiPlaceholders {
                aws_bedrock: "<BEDROCK_API_KEY_PLACEHOLDER>".to_string(),
                other_apis: vec![
                    "<GA4_PLACEHOLDER>".to_string(),
                    "<GSC_PLACEHOLDER>".to_string(),
                ],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub last_updated: DateTime<Utc>,
}

/// Everything returned to the dashboard as `auditData` and persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEnvelope {
    pub input: AuditRequest,
    pub audit: AuditReport,
    pub settings: Settings,
    pub meta: AuditMeta,
}
