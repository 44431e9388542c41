use chrono::{DateTime, Utc};

use super::catalog::{
    COMPETITOR_ISSUES, GapTemplate, IssueTemplate, OPPORTUNITY_GAPS, PLACEHOLDER_COMPETITOR,
    QUICK_WINS, SEO_ISSUES,
};
use super::model::{
    AuditEnvelope, AuditMeta, AuditReport, AuditRequest, CompetitorIssues, Forecast,
    QuestionPerformance, QuestionStanding, SeoIssue, Settings, VisibilityEntry,
};
use super::random::RandomSource;

pub const TREND_MONTHS: usize = 6;
pub const MAX_TRACKED_QUESTIONS: usize = 5;

/// Builds a complete audit envelope for a validated request.
///
/// The output depends only on the request, the sequence of draws taken from
/// `rng` and `created_at`. Draws are taken in a fixed order (scores, traffic,
/// catalog slices, per-competitor issues, visibility, per-question standings)
/// so a replayed sequence reproduces the same report.
#[tracing::instrument(
    name = "audit_stage generate",
    skip_all,
    fields(
        audit.stage = "generate",
        audit.seo_score,
        audit.competitors = request.competitors.len(),
        audit.questions = request.target_questions.len(),
    )
)]
pub fn generate_audit<R: RandomSource + ?Sized>(
    request: &AuditRequest,
    rng: &mut R,
    created_at: DateTime<Utc>,
) -> AuditEnvelope {
    let seo_score = rng.in_range(60..=89);
    let ai_citation_score = rng.in_range(40..=79);
    let critical_issues_count = rng.in_range(3..=12);

    let base_traffic = rng.in_range(800..=1299);
    let traffic_trend: Vec<u32> = (0..TREND_MONTHS)
        .map(|_| base_traffic + rng.in_range(0..=99) - 50)
        .collect();

    let gap_count = rng.in_range(2..=4) as usize;
    let opportunity_gaps = OPPORTUNITY_GAPS
        .iter()
        .take(gap_count)
        .map(GapTemplate::to_gap)
        .collect();

    let issue_count = rng.in_range(2..=5) as usize;
    let seo_issues = slice_issues(&SEO_ISSUES, issue_count);

    let mut competitor_seo_issues = CompetitorIssues::new();
    for competitor in &request.competitors {
        let count = rng.in_range(2..=4) as usize;
        competitor_seo_issues.insert(competitor.clone(), slice_issues(&COMPETITOR_ISSUES, count));
    }

    let mut ai_visibility_comparison = Vec::with_capacity(request.competitors.len() + 1);
    ai_visibility_comparison.push(VisibilityEntry {
        domain: request.website.clone(),
        citations: rng.in_range(15..=44),
        serp_mentions: rng.in_range(20..=54),
    });
    for competitor in &request.competitors {
        ai_visibility_comparison.push(VisibilityEntry {
            domain: competitor.clone(),
            citations: rng.in_range(25..=74),
            serp_mentions: rng.in_range(30..=89),
        });
    }

    let top_questions_performance = request
        .target_questions
        .iter()
        .take(MAX_TRACKED_QUESTIONS)
        .map(|question| question_performance(question, request, &mut *rng))
        .collect();

    let projected_uplift = traffic_trend.iter().map(|traffic| traffic * 6 / 5).collect();

    tracing::Span::current().record("audit.seo_score", seo_score);

    AuditEnvelope {
        input: request.clone(),
        audit: AuditReport {
            seo_score,
            ai_citation_score,
            critical_issues_count,
            traffic_trend: traffic_trend.clone(),
            opportunity_gaps,
            seo_issues,
            competitor_seo_issues,
            ai_visibility_comparison,
            top_questions_performance,
            quick_wins: QUICK_WINS.iter().map(|win| win.to_string()).collect(),
            forecast: Forecast {
                current_traffic: traffic_trend,
                projected_uplift,
            },
        },
        settings: Settings::default(),
        meta: AuditMeta {
            last_updated: created_at,
        },
    }
}

fn slice_issues(catalog: &[IssueTemplate], count: usize) -> Vec<SeoIssue> {
    catalog
        .iter()
        .take(count)
        .map(IssueTemplate::to_issue)
        .collect()
}

fn question_performance<R: RandomSource + ?Sized>(
    question: &str,
    request: &AuditRequest,
    rng: &mut R,
) -> QuestionPerformance {
    let competitor = rng
        .pick_index(request.competitors.len())
        .map(|index| request.competitors[index].clone())
        .unwrap_or_else(|| PLACEHOLDER_COMPETITOR.to_string());

    let site_rank = rng.in_range(3..=7);
    let site_citations = rng.in_range(1..=3);
    let competitor_rank = rng.in_range(1..=2);
    let competitor_citations = rng.in_range(3..=7);

    QuestionPerformance {
        question: question.to_string(),
        site_entry: QuestionStanding {
            domain: request.website.clone(),
            rank: site_rank,
            citations: site_citations,
        },
        top_competitor: QuestionStanding {
            domain: competitor,
            rank: competitor_rank,
            citations: competitor_citations,
        },
    }
}
