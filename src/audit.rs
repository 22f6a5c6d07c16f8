//! Audit orchestration.
//!
//! One audit is a straight pipeline over a single page:
//!
//! `Fetching -> Running(0..n) -> Aggregating -> [Suggesting] -> Done`
//!
//! Any failure while fetching (bad URL, network error, unusable body) moves
//! to `Failed` and yields a report with no findings and a score of 0. Once
//! the checks start nothing can fail the run: checks never error, and a
//! failing suggestion service falls back to keyword suggestions.

use std::time::Duration;

use log::{debug, info, warn};

use crate::checks::{apply_wordpress_remediation, enabled_checks};
use crate::config::{AuditOptions, MAX_REDIRECT_HOPS, SUGGESTION_TIMEOUT};
use crate::error_handling::SuggestionError;
use crate::fetch::fetch_page;
use crate::metrics::PageMetrics;
use crate::parse::detect_wordpress;
use crate::report::{assemble, FindingDetails, Report};
use crate::snapshot::PageSnapshot;
use crate::suggest::{keyword_suggestions, OpenAiSuggester, PageSummary, Suggester, Suggestions};
use crate::utils::validate_and_normalize_url;

/// Lifecycle of a single audit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditState {
    /// URL validation, page request and snapshot construction
    Fetching,
    /// Running the check at this registry index
    Running(usize),
    /// Folding findings into the report
    Aggregating,
    /// Waiting on the suggestion service
    Suggesting,
    /// Report finished
    Done,
    /// Run ended while fetching
    Failed,
}

impl AuditState {
    fn advance(&mut self, next: AuditState, url: &str) {
        debug!("Audit of {}: {:?} -> {:?}", url, self, next);
        *self = next;
    }
}

/// Runs audits with a shared HTTP client and fixed options.
///
/// `S` is the suggestion service; `Auditor::new` wires the OpenAI client
/// when an API key is configured.
#[derive(Debug, Clone)]
pub struct Auditor<S = OpenAiSuggester> {
    client: reqwest::Client,
    options: AuditOptions,
    suggester: Option<S>,
    suggestion_timeout: Duration,
}

impl Auditor<OpenAiSuggester> {
    /// Creates an auditor, picking up the suggestion service from the
    /// environment when suggestions are enabled.
    pub fn new(client: reqwest::Client, options: AuditOptions) -> Self {
        let suggester = if options.enable_suggestions {
            match OpenAiSuggester::from_env() {
                Ok(suggester) => Some(suggester),
                Err(e) => {
                    info!("{e}; suggestions will be derived from page keywords");
                    None
                }
            }
        } else {
            None
        };
        Self::with_suggester(client, options, suggester)
    }
}

impl<S: Suggester> Auditor<S> {
    /// Creates an auditor with an explicit suggestion service.
    pub fn with_suggester(client: reqwest::Client, options: AuditOptions, suggester: Option<S>) -> Self {
        Self {
            client,
            options,
            suggester,
            suggestion_timeout: SUGGESTION_TIMEOUT,
        }
    }

    /// Overrides the time the suggestion service gets before the keyword
    /// fallback is used.
    pub fn with_suggestion_timeout(mut self, timeout: Duration) -> Self {
        self.suggestion_timeout = timeout;
        self
    }

    /// The options every audit of this auditor runs with.
    pub fn options(&self) -> &AuditOptions {
        &self.options
    }

    /// Audits one page.
    ///
    /// Never returns an error: failures are reported through the report's
    /// status (see `Report::is_failed`).
    pub async fn audit(&self, url: &str) -> Report {
        let mut state = AuditState::Fetching;

        let url = match validate_and_normalize_url(url) {
            Ok(url) => url,
            Err(e) => {
                warn!("Rejected URL '{}': {}", url, e);
                state.advance(AuditState::Failed, url);
                return Report::failed(url, e);
            }
        };

        let fetch = match fetch_page(&self.client, &url, MAX_REDIRECT_HOPS).await {
            Ok(fetch) => fetch,
            Err(e) => {
                warn!("Audit of {} failed: {}", url, e);
                state.advance(AuditState::Failed, &url);
                return Report::failed(&url, e);
            }
        };

        // The parsed document is not Send; keep it out of the await below.
        let mut report = {
            let snapshot = match PageSnapshot::new(&url, fetch) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("Audit of {} failed: {}", url, e);
                    state.advance(AuditState::Failed, &url);
                    return Report::failed(&url, e);
                }
            };
            analyze(&snapshot, &self.options, &mut state)
        };

        if self.options.enable_suggestions {
            state.advance(AuditState::Suggesting, &url);
            let summary = PageSummary::from_report(&report);
            report.suggestions = Some(self.suggestions_for(&summary).await);
        }

        state.advance(AuditState::Done, &url);
        report
    }

    async fn suggestions_for(&self, summary: &PageSummary) -> Suggestions {
        let Some(suggester) = &self.suggester else {
            debug!("No suggestion service configured, using keyword suggestions");
            return keyword_suggestions(summary);
        };

        let error = match tokio::time::timeout(self.suggestion_timeout, suggester.suggest(summary)).await {
            Ok(Ok(suggestions)) => return suggestions,
            Ok(Err(e)) => e,
            Err(_) => SuggestionError::Timeout,
        };
        warn!("{error}; falling back to keyword suggestions");
        keyword_suggestions(summary)
    }
}

/// Runs the check pipeline over an already fetched page.
///
/// This is the pure part of an audit: no I/O, and the same snapshot always
/// produces the same findings and scores.
pub fn audit_snapshot(snapshot: &PageSnapshot, options: &AuditOptions) -> Report {
    let mut state = AuditState::Fetching;
    let report = analyze(snapshot, options, &mut state);
    state.advance(AuditState::Done, &snapshot.requested_url);
    report
}

/// Checks and aggregation, leaving `state` at `Aggregating`.
fn analyze(snapshot: &PageSnapshot, options: &AuditOptions, state: &mut AuditState) -> Report {
    let url = snapshot.requested_url.as_str();
    let metrics = PageMetrics::from_snapshot(snapshot);
    let wordpress = if options.enable_wordpress_detection {
        detect_wordpress(&snapshot.document, &snapshot.html)
    } else {
        None
    };
    if let Some(info) = &wordpress {
        debug!(
            "WordPress detected on {} (version {:?}, theme {:?}, {} plugins)",
            snapshot.url,
            info.version,
            info.theme,
            info.plugins.len()
        );
    }

    let mut findings = Vec::new();
    for (index, check) in enabled_checks(options).enumerate() {
        state.advance(AuditState::Running(index), url);
        let produced = (check.run)(snapshot, &metrics);
        debug!("Check '{}' produced {} findings", check.name, produced.len());
        findings.extend(produced);
    }
    if let Some(info) = &wordpress {
        apply_wordpress_remediation(&mut findings, info);
    }

    state.advance(AuditState::Aggregating, url);
    let mut report = assemble(url, findings, metrics, wordpress);
    if !options.verbose_findings {
        report
            .findings
            .iter_mut()
            .for_each(|finding| finding.details = FindingDetails::default());
    }

    info!(
        "Audited {}: score {}/100 ({} critical, {} high, {} medium, {} low, {} passed)",
        report.url,
        report.overall_score,
        report.findings.critical.len(),
        report.findings.high.len(),
        report.findings.medium.len(),
        report.findings.low.len(),
        report.findings.passed.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchResult, ResponseHeaders};
    use crate::suggest::SuggestionSource;
    use std::future::Future;

    const PAGE: &str = r#"<html><head>
        <title>Coffee Beans</title>
        <meta name="generator" content="WordPress 6.4.2">
        <link rel="stylesheet" href="/wp-content/themes/brew/style.css">
        </head><body><h1>Coffee</h1>
        <p>Fresh coffee beans roasted daily. Coffee tastes best fresh.</p>
        <img src="/hero.jpg" width="3000" height="2000">
        </body></html>"#;

    fn snapshot() -> PageSnapshot {
        PageSnapshot::new(
            "https://example.com/",
            FetchResult {
                final_url: "https://example.com/".to_string(),
                status_code: 200,
                elapsed: Duration::from_millis(300),
                headers: ResponseHeaders::new(),
                redirect_count: 0,
                body: PAGE.as_bytes().to_vec(),
            },
        )
        .unwrap()
    }

    struct FixedSuggester;

    impl Suggester for FixedSuggester {
        async fn suggest(&self, _summary: &PageSummary) -> Result<Suggestions, SuggestionError> {
            Ok(Suggestions {
                title: "Generated".to_string(),
                description: "Generated description".to_string(),
                keywords: vec![],
                content_improvements: vec![],
                content_score: 80,
                source: SuggestionSource::Generated,
            })
        }
    }

    struct FailingSuggester;

    impl Suggester for FailingSuggester {
        fn suggest(
            &self,
            _summary: &PageSummary,
        ) -> impl Future<Output = Result<Suggestions, SuggestionError>> + Send {
            async { Err(SuggestionError::Status(503)) }
        }
    }

    struct SlowSuggester;

    impl Suggester for SlowSuggester {
        async fn suggest(&self, summary: &PageSummary) -> Result<Suggestions, SuggestionError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(keyword_suggestions(summary))
        }
    }

    fn summary() -> PageSummary {
        PageSummary::from_report(&audit_snapshot(&snapshot(), &AuditOptions::default()))
    }

    #[test]
    fn test_audit_snapshot_is_deterministic() {
        let options = AuditOptions::default();
        let first = audit_snapshot(&snapshot(), &options);
        let second = audit_snapshot(&snapshot(), &options);
        assert_eq!(first.findings, second.findings);
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.category_scores, second.category_scores);
        assert!(first.wordpress.is_none());
        assert!(first.suggestions.is_none());
    }

    #[test]
    fn test_wordpress_detection_adds_checks_and_steps() {
        let options = AuditOptions {
            enable_wordpress_detection: true,
            ..Default::default()
        };
        let report = audit_snapshot(&snapshot(), &options);
        let info = report.wordpress.as_ref().expect("WordPress should be detected");
        assert_eq!(info.version.as_deref(), Some("6.4.2"));
        assert_eq!(info.theme.as_deref(), Some("brew"));
        assert!(report
            .findings
            .high
            .iter()
            .any(|f| f.message == "1 oversized images detected"));
        let description = report
            .findings
            .critical
            .iter()
            .find(|f| f.message == "Missing meta description")
            .unwrap();
        assert!(description
            .details
            .steps
            .iter()
            .any(|step| step.contains("Yoast SEO")));
    }

    #[test]
    fn test_brief_mode_strips_details() {
        let options = AuditOptions {
            verbose_findings: false,
            ..Default::default()
        };
        let report = audit_snapshot(&snapshot(), &options);
        assert!(!report.findings.is_empty());
        assert!(report.findings.iter().all(|f| f.details.is_empty()));
    }

    #[tokio::test]
    async fn test_invalid_url_fails_without_fetching() {
        let auditor = Auditor::new(reqwest::Client::new(), AuditOptions::default());
        let report = auditor.audit("ftp://example.com/file").await;
        assert!(report.is_failed());
        assert_eq!(report.overall_score, 0);
        assert!(report.findings.is_empty());
    }

    #[tokio::test]
    async fn test_generated_suggestions_are_used() {
        let auditor = Auditor::with_suggester(
            reqwest::Client::new(),
            AuditOptions::default(),
            Some(FixedSuggester),
        );
        let suggestions = auditor.suggestions_for(&summary()).await;
        assert_eq!(suggestions.source, SuggestionSource::Generated);
        assert_eq!(suggestions.title, "Generated");
    }

    #[tokio::test]
    async fn test_failing_service_falls_back_to_keywords() {
        let auditor = Auditor::with_suggester(
            reqwest::Client::new(),
            AuditOptions::default(),
            Some(FailingSuggester),
        );
        let suggestions = auditor.suggestions_for(&summary()).await;
        assert_eq!(suggestions.source, SuggestionSource::KeywordFallback);
        assert_eq!(suggestions.keywords.first().map(String::as_str), Some("coffee"));
    }

    #[tokio::test]
    async fn test_slow_service_times_out_to_keywords() {
        let auditor = Auditor::with_suggester(
            reqwest::Client::new(),
            AuditOptions::default(),
            Some(SlowSuggester),
        )
        .with_suggestion_timeout(Duration::from_millis(50));
        let suggestions = auditor.suggestions_for(&summary()).await;
        assert_eq!(suggestions.source, SuggestionSource::KeywordFallback);
    }

    #[tokio::test]
    async fn test_missing_service_uses_keywords() {
        let auditor: Auditor<FixedSuggester> =
            Auditor::with_suggester(reqwest::Client::new(), AuditOptions::default(), None);
        let suggestions = auditor.suggestions_for(&summary()).await;
        assert_eq!(suggestions.source, SuggestionSource::KeywordFallback);
    }
}
