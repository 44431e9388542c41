//! Fixed recommendation catalogs the generator slices from.
//!
//! Entry order matters: reports always take a prefix, so the first entries
//! show up in every audit.

use super::model::{Effort, Impact, OpportunityGap, SeoIssue};

pub const PLACEHOLDER_COMPETITOR: &str = "competitor.com";

pub struct GapTemplate {
    pub issue: &'static str,
    pub page: &'static str,
    pub impact: Impact,
    pub effort: Effort,
    pub recommendation: &'static str,
    pub quick_win: bool,
}

impl GapTemplate {
    pub fn to_gap(&self) -> OpportunityGap {
        OpportunityGap {
            issue: self.issue.to_string(),
            page: self.page.to_string(),
            impact: self.impact,
            effort: self.effort,
            recommendation: self.recommendation.to_string(),
            quick_win: self.quick_win,
        }
    }
}

pub struct IssueTemplate {
    pub issue: &'static str,
    pub page: &'static str,
    pub impact: Impact,
    pub recommendation: &'static str,
}

impl IssueTemplate {
    pub fn to_issue(&self) -> SeoIssue {
        SeoIssue {
            issue: self.issue.to_string(),
            page: self.page.to_string(),
            impact: self.impact,
            recommendation: self.recommendation.to_string(),
        }
    }
}

pub const OPPORTUNITY_GAPS: [GapTemplate; 4] = [
    GapTemplate {
        issue: "Missing FAQ schema for key medical questions",
        page: "/faq",
        impact: Impact::High,
        effort: Effort::Low,
        recommendation: "Add FAQ Structured Data for all medical questions",
        quick_win: true,
    },
    GapTemplate {
        issue: "Brand does not appear in AI/LLM citations for treatment topics",
        page: "/treatments",
        impact: Impact::High,
        effort: Effort::Medium,
        recommendation: "Optimize pages for AI visibility with targeted content and structured data",
        quick_win: false,
    },
    GapTemplate {
        issue: "Competitors ranking for clinical trial searches",
        page: "/clinical-trials",
        impact: Impact::Medium,
        effort: Effort::Medium,
        recommendation: "Add regularly updated clinical trials widget and optimize metadata",
        quick_win: false,
    },
    GapTemplate {
        issue: "Competitor ranking higher for key queries",
        page: "/conditions/diabetes",
        impact: Impact::Medium,
        effort: Effort::High,
        recommendation: "Enhance content depth and authority",
        quick_win: false,
    },
];

pub const SEO_ISSUES: [IssueTemplate; 6] = [
    IssueTemplate {
        issue: "Mobile site speed is below industry benchmark",
        page: "/",
        impact: Impact::High,
        recommendation: "Enable caching, optimize images, and reduce JS payload",
    },
    IssueTemplate {
        issue: "Missing XML sitemap",
        page: "/",
        impact: Impact::Medium,
        recommendation: "Generate and submit an XML sitemap to Google Search Console",
    },
    IssueTemplate {
        issue: "Missing alt attributes for images in patient education resources",
        page: "/education/patient-resources",
        impact: Impact::Medium,
        recommendation: "Add descriptive alt text for accessibility and SEO",
    },
    IssueTemplate {
        issue: "Title tags are missing for some subpages",
        page: "/resources/",
        impact: Impact::Low,
        recommendation: "Add unique, keyword-rich title tags",
    },
    IssueTemplate {
        issue: "Duplicate meta descriptions detected",
        page: "/products/",
        impact: Impact::Medium,
        recommendation: "Ensure all meta descriptions are unique and descriptive",
    },
    IssueTemplate {
        issue: "Low text-to-HTML ratio on product pages",
        page: "/products/",
        impact: Impact::Medium,
        recommendation: "Add more original content to product detail sections",
    },
];

pub const COMPETITOR_ISSUES: [IssueTemplate; 5] = [
    IssueTemplate {
        issue: "Missing FAQ structured data for research topics",
        page: "/research/faq",
        impact: Impact::High,
        recommendation: "Add FAQ schema to top-cited research topics pages",
    },
    IssueTemplate {
        issue: "Large JavaScript files delay LCP",
        page: "/",
        impact: Impact::High,
        recommendation: "Code split and defer non-critical JS",
    },
    IssueTemplate {
        issue: "Duplicate meta descriptions on trial pages",
        page: "/clinical-trials/",
        impact: Impact::Medium,
        recommendation: "Ensure all meta descriptions are unique and descriptive",
    },
    IssueTemplate {
        issue: "Low text-to-HTML ratio on product detail pages",
        page: "/products/",
        impact: Impact::Medium,
        recommendation: "Add more original content to sections",
    },
    IssueTemplate {
        issue: "No breadcrumbs implemented",
        page: "/",
        impact: Impact::Low,
        recommendation: "Implement breadcrumbs for better UX and crawlability",
    },
];

pub const QUICK_WINS: [&str; 8] = [
    "Add FAQPage schema for all key medical questions",
    "Submit XML sitemap and fix crawling issues",
    "Improve mobile speed by optimizing images and deferring non-critical JS",
    "Enhance content for top 3 non-branded treatment questions",
    "Increase internal linking between patient resources and HCP landing pages",
    "Update alt attributes for all education resource images",
    "Add rich snippets for clinical trials and case studies",
    "Monitor AI/LLM citations monthly for new questions and topics",
];
