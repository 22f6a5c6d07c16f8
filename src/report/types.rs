//! Report data model.
//!
//! Every type here is serde-serializable; the JSON export is a direct dump
//! of `Report`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

use crate::metrics::PageMetrics;
use crate::parse::WordPressInfo;
use crate::suggest::Suggestions;

/// How urgent a finding is, most urgent first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIterMacro,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Severely hurts rankings; fix now
    Critical,
    /// Significant problem
    High,
    /// Worth fixing
    Medium,
    /// Minor polish
    Low,
    /// Check passed
    Passed,
}

impl Severity {
    /// Returns the upper-case label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Passed => "PASSED",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topical grouping of a finding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIterMacro,
)]
pub enum Category {
    /// Titles, descriptions, headings, canonical, robots, schema, redirects
    #[serde(rename = "Technical SEO")]
    TechnicalSeo,
    /// Amount, structure and persuasiveness of the copy
    #[serde(rename = "Content Quality")]
    ContentQuality,
    /// Load time, page weight, compression
    #[serde(rename = "Performance")]
    Performance,
    /// Viewport and mobile-hostile content
    #[serde(rename = "Mobile Optimization")]
    MobileOptimization,
    /// HTTPS and security headers
    #[serde(rename = "Security")]
    Security,
    /// Alt text, formats and image sizes
    #[serde(rename = "Images & Media")]
    ImagesMedia,
    /// Open Graph and Twitter Card tags
    #[serde(rename = "Social Media")]
    SocialMedia,
    /// Links to the same site
    #[serde(rename = "Internal Linking")]
    InternalLinking,
    /// Links to other sites
    #[serde(rename = "External Linking")]
    ExternalLinking,
}

impl Category {
    /// Categories that receive a category score.
    pub const SCORED: [Category; 5] = [
        Category::TechnicalSeo,
        Category::ContentQuality,
        Category::Performance,
        Category::MobileOptimization,
        Category::Security,
    ];

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TechnicalSeo => "Technical SEO",
            Category::ContentQuality => "Content Quality",
            Category::Performance => "Performance",
            Category::MobileOptimization => "Mobile Optimization",
            Category::Security => "Security",
            Category::ImagesMedia => "Images & Media",
            Category::SocialMedia => "Social Media",
            Category::InternalLinking => "Internal Linking",
            Category::ExternalLinking => "External Linking",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional remediation detail attached to a finding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingDetails {
    /// What the page has now
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Markup or configuration that fixes the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    /// What to do, in one sentence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Why it matters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// A worked example
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Numbered remediation steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    /// Affected items (image URLs, heading texts, header names, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl FindingDetails {
    /// Returns true when no detail is set.
    pub fn is_empty(&self) -> bool {
        self == &FindingDetails::default()
    }
}

/// One classified observation about the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Urgency bucket
    pub severity: Severity,
    /// Topical group
    pub category: Category,
    /// One-line description, may embed measured values
    pub message: String,
    /// Remediation detail
    #[serde(default, skip_serializing_if = "FindingDetails::is_empty")]
    pub details: FindingDetails,
}

impl Finding {
    /// Creates a finding without details.
    pub fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            details: FindingDetails::default(),
        }
    }

    /// Shorthand for a `Critical` finding.
    pub fn critical(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, category, message)
    }

    /// Shorthand for a `High` finding.
    pub fn high(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::High, category, message)
    }

    /// Shorthand for a `Medium` finding.
    pub fn medium(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Medium, category, message)
    }

    /// Shorthand for a `Low` finding.
    pub fn low(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Low, category, message)
    }

    /// Shorthand for a `Passed` finding.
    pub fn passed(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Passed, category, message)
    }

    pub(crate) fn with_current(mut self, current: impl Into<String>) -> Self {
        self.details.current = Some(current.into());
        self
    }

    pub(crate) fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.details.fix = Some(fix.into());
        self
    }

    pub(crate) fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.details.recommendation = Some(recommendation.into());
        self
    }

    pub(crate) fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.details.impact = Some(impact.into());
        self
    }

    pub(crate) fn with_example(mut self, example: impl Into<String>) -> Self {
        self.details.example = Some(example.into());
        self
    }

    pub(crate) fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details.steps.extend(steps.into_iter().map(Into::into));
        self
    }

    pub(crate) fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details.items.extend(items.into_iter().map(Into::into));
        self
    }
}

/// Findings split by severity, each list in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBuckets {
    /// Critical findings
    pub critical: Vec<Finding>,
    /// High-priority findings
    pub high: Vec<Finding>,
    /// Medium-priority findings
    pub medium: Vec<Finding>,
    /// Low-priority findings
    pub low: Vec<Finding>,
    /// Passed checks
    pub passed: Vec<Finding>,
}

impl SeverityBuckets {
    /// Appends `finding` to the bucket matching its severity.
    pub fn push(&mut self, finding: Finding) {
        self.bucket_mut(finding.severity).push(finding);
    }

    /// Findings of one severity.
    pub fn get(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
            Severity::Passed => &self.passed,
        }
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<Finding> {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Passed => &mut self.passed,
        }
    }

    /// Number of findings of one severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.get(severity).len()
    }

    /// Number of findings across all buckets.
    pub fn total(&self) -> usize {
        self.critical.len() + self.high.len() + self.medium.len() + self.low.len() + self.passed.len()
    }

    /// Returns true when no finding was recorded.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All findings, most urgent bucket first.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.critical
            .iter()
            .chain(&self.high)
            .chain(&self.medium)
            .chain(&self.low)
            .chain(&self.passed)
    }

    /// Mutable access to every finding.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Finding> {
        self.critical
            .iter_mut()
            .chain(self.high.iter_mut())
            .chain(self.medium.iter_mut())
            .chain(self.low.iter_mut())
            .chain(self.passed.iter_mut())
    }
}

impl FromIterator<Finding> for SeverityBuckets {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        let mut buckets = SeverityBuckets::default();
        for finding in iter {
            buckets.push(finding);
        }
        buckets
    }
}

/// Kind of insight, by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Needs immediate action
    Critical,
    /// Should be addressed soon
    Warning,
    /// An opportunity
    Suggestion,
}

/// A headline observation derived from the findings as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Urgency
    pub kind: InsightKind,
    /// Headline
    pub title: String,
    /// Explanation with measured values
    pub message: String,
    /// Recommended next step
    pub action: String,
}

/// One phase of the remediation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPhase {
    /// Rank, 1 is first
    pub priority: u8,
    /// When to do it ("Immediate (This Week)", ...)
    pub phase: String,
    /// What the phase is about
    pub title: String,
    /// Finding messages or fixed tasks
    pub tasks: Vec<String>,
    /// Expected impact label
    pub impact: String,
    /// Expected effort label
    pub effort: String,
    /// Return on investment, 1 to 5 stars
    pub roi: u8,
}

/// Outcome of an audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuditStatus {
    /// Every check ran
    Completed,
    /// The page could not be fetched or parsed; no check ran
    Failed {
        /// Human-readable cause
        error: String,
    },
}

/// Verbal rating of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreRating {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Good,
    /// 40 to 59
    NeedsWork,
    /// Below 40
    Critical,
}

impl ScoreRating {
    /// Rates a 0-100 score.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreRating::Excellent,
            60..=79 => ScoreRating::Good,
            40..=59 => ScoreRating::NeedsWork,
            _ => ScoreRating::Critical,
        }
    }

    /// Upper-case label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "EXCELLENT",
            ScoreRating::Good => "GOOD",
            ScoreRating::NeedsWork => "NEEDS WORK",
            ScoreRating::Critical => "CRITICAL",
        }
    }

    /// One-line summary for the rating.
    pub fn summary(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Your SEO is in great shape!",
            ScoreRating::Good => "Solid foundation, some improvements possible",
            ScoreRating::NeedsWork => "Several issues need attention",
            ScoreRating::Critical => "Immediate action required",
        }
    }
}

/// The complete output of one audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The URL that was requested
    pub url: String,
    /// Local time the report was assembled (`%Y-%m-%d %H:%M:%S`)
    pub timestamp: String,
    /// Completed, or failed with the cause
    pub status: AuditStatus,
    /// Findings by severity
    pub findings: SeverityBuckets,
    /// 0-100
    pub overall_score: u8,
    /// 0-100 per scored category
    pub category_scores: BTreeMap<Category, u8>,
    /// Headline observations
    pub insights: Vec<Insight>,
    /// Phased remediation plan
    pub action_plan: Vec<ActionPhase>,
    /// Measured page facts
    pub metrics: PageMetrics,
    /// WordPress fingerprint, when detection ran and matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordpress: Option<WordPressInfo>,
    /// Title/description suggestions, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Suggestions>,
}

impl Report {
    /// A report for a run that never got to the checks.
    pub fn failed(url: &str, error: impl std::fmt::Display) -> Self {
        Self {
            url: url.to_string(),
            timestamp: super::timestamp_now(),
            status: AuditStatus::Failed {
                error: error.to_string(),
            },
            findings: SeverityBuckets::default(),
            overall_score: 0,
            category_scores: BTreeMap::new(),
            insights: Vec::new(),
            action_plan: Vec::new(),
            metrics: PageMetrics::default(),
            wordpress: None,
            suggestions: None,
        }
    }

    /// Returns true when the run failed before any check.
    pub fn is_failed(&self) -> bool {
        matches!(self.status, AuditStatus::Failed { .. })
    }

    /// The failure cause, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            AuditStatus::Failed { error } => Some(error),
            AuditStatus::Completed => None,
        }
    }

    /// Verbal rating of the overall score.
    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.overall_score)
    }
}
