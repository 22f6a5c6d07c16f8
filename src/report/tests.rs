// Report module tests.

use super::*;
use strum::IntoEnumIterator;

fn findings_with(counts: [usize; 5]) -> SeverityBuckets {
    let [critical, high, medium, low, passed] = counts;
    let mut buckets = SeverityBuckets::default();
    for (severity, count) in Severity::iter().zip([critical, high, medium, low, passed]) {
        for i in 0..count {
            buckets.push(Finding::new(severity, Category::TechnicalSeo, format!("{severity} {i}")));
        }
    }
    buckets
}

#[test]
fn test_severity_order_is_descending_urgency() {
    let ordered: Vec<Severity> = Severity::iter().collect();
    assert_eq!(
        ordered,
        vec![
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
            Severity::Passed
        ]
    );
    assert!(Severity::Critical < Severity::Passed);
}

#[test]
fn test_category_serializes_as_display_name() {
    for category in Category::iter() {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.as_str()));
        assert!(!category.as_str().is_empty());
    }
}

#[test]
fn test_overall_score_empty_is_zero() {
    assert_eq!(overall_score(&SeverityBuckets::default()), 0);
}

#[test]
fn test_overall_score_all_passed_is_hundred() {
    assert_eq!(overall_score(&findings_with([0, 0, 0, 0, 12])), 100);
}

#[test]
fn test_overall_score_formula() {
    // (10 - 0.1 - 0.3 - 0.6 - 1.0) / 14 * 100 = 57.14
    assert_eq!(overall_score(&findings_with([1, 1, 1, 1, 10])), 57);
    // (18 - 0.1) / 19 * 100 = 94.2
    assert_eq!(overall_score(&findings_with([0, 0, 0, 1, 18])), 94);
}

#[test]
fn test_overall_score_never_negative() {
    assert_eq!(overall_score(&findings_with([5, 3, 2, 1, 2])), 0);
    assert_eq!(overall_score(&findings_with([7, 0, 0, 0, 0])), 0);
}

#[test]
fn test_overall_score_bounded_for_many_combinations() {
    for critical in 0..4 {
        for high in 0..4 {
            for medium in 0..4 {
                for low in 0..4 {
                    for passed in 0..6 {
                        let score = overall_score(&findings_with([critical, high, medium, low, passed]));
                        assert!(score <= 100);
                    }
                }
            }
        }
    }
}

#[test]
fn test_category_scores_policy() {
    let findings: SeverityBuckets = vec![
        Finding::passed(Category::TechnicalSeo, "a"),
        Finding::passed(Category::TechnicalSeo, "b"),
        Finding::high(Category::TechnicalSeo, "c"),
        Finding::low(Category::Performance, "ignored for category scores"),
        Finding::critical(Category::Security, "d"),
        Finding::medium(Category::SocialMedia, "unscored category"),
    ]
    .into_iter()
    .collect();

    let scores = category_scores(&findings);
    assert_eq!(scores.len(), 5);
    assert_eq!(scores[&Category::TechnicalSeo], 66);
    assert_eq!(scores[&Category::Performance], 100);
    assert_eq!(scores[&Category::Security], 0);
    assert_eq!(scores[&Category::ContentQuality], 100);
    assert!(!scores.contains_key(&Category::SocialMedia));
}

#[test]
fn test_insights_order_and_triggers() {
    let findings: SeverityBuckets = vec![
        Finding::critical(Category::Security, "Site not using HTTPS"),
        Finding::high(Category::TechnicalSeo, "h1"),
        Finding::high(Category::TechnicalSeo, "h2"),
        Finding::high(Category::TechnicalSeo, "h3"),
        Finding::high(Category::TechnicalSeo, "h4"),
    ]
    .into_iter()
    .collect();
    let metrics = PageMetrics {
        word_count: 120,
        load_time_secs: 3.5,
        ..Default::default()
    };

    let insights = derive_insights(&findings, &metrics);
    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Critical Issues Require Immediate Attention",
            "Multiple High-Priority Issues Detected",
            "Content Length Opportunity",
            "Security Alert",
            "Mobile Optimization Missing",
            "Performance Optimization Needed",
        ]
    );
    assert!(insights[2].message.contains("120 words"));
}

#[test]
fn test_insights_quiet_for_healthy_page() {
    let findings: SeverityBuckets = vec![
        Finding::passed(Category::Security, "HTTPS: Enabled"),
        Finding::passed(Category::MobileOptimization, "Viewport Meta Tag: Present"),
        Finding::high(Category::TechnicalSeo, "only three"),
        Finding::high(Category::TechnicalSeo, "high findings"),
        Finding::high(Category::TechnicalSeo, "here"),
    ]
    .into_iter()
    .collect();
    let metrics = PageMetrics {
        word_count: 800,
        load_time_secs: 3.0,
        ..Default::default()
    };
    assert!(derive_insights(&findings, &metrics).is_empty());
}

#[test]
fn test_action_plan_phases() {
    let plan = build_action_plan(&findings_with([7, 0, 2, 3, 5]));
    let priorities: Vec<u8> = plan.iter().map(|p| p.priority).collect();
    assert_eq!(priorities, vec![1, 3, 4]);
    assert_eq!(plan[0].phase, "Immediate (This Week)");
    assert_eq!(plan[0].tasks.len(), 5);
    assert_eq!(plan[0].tasks[0], "CRITICAL 0");
    assert_eq!(plan[0].roi, 5);
    assert_eq!(plan[1].tasks.len(), 2);
    assert_eq!(plan[1].effort, "Low-Medium");
    assert_eq!(plan[2].phase, "Ongoing");
    assert_eq!(plan[2].tasks.len(), 5);
}

#[test]
fn test_action_plan_always_has_ongoing_phase() {
    let plan = build_action_plan(&SeverityBuckets::default());
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].title, "Content Optimization");
    assert_eq!(plan[0].impact, "High (Long-term)");
}

#[test]
fn test_assemble_keeps_check_order_within_buckets() {
    let report = assemble(
        "https://example.com",
        vec![
            Finding::medium(Category::TechnicalSeo, "first medium"),
            Finding::passed(Category::TechnicalSeo, "passed"),
            Finding::medium(Category::Performance, "second medium"),
        ],
        PageMetrics::default(),
        None,
    );
    assert_eq!(report.status, AuditStatus::Completed);
    assert_eq!(report.findings.medium[0].message, "first medium");
    assert_eq!(report.findings.medium[1].message, "second medium");
    assert_eq!(report.findings.total(), 3);
}

#[test]
fn test_failed_report_is_empty() {
    let report = Report::failed("https://example.com", "request timed out");
    assert!(report.is_failed());
    assert_eq!(report.error(), Some("request timed out"));
    assert!(report.findings.is_empty());
    assert_eq!(report.overall_score, 0);
    assert!(report.action_plan.is_empty());
}

#[test]
fn test_score_rating_bands() {
    assert_eq!(ScoreRating::from_score(100), ScoreRating::Excellent);
    assert_eq!(ScoreRating::from_score(80), ScoreRating::Excellent);
    assert_eq!(ScoreRating::from_score(79), ScoreRating::Good);
    assert_eq!(ScoreRating::from_score(60), ScoreRating::Good);
    assert_eq!(ScoreRating::from_score(59), ScoreRating::NeedsWork);
    assert_eq!(ScoreRating::from_score(40), ScoreRating::NeedsWork);
    assert_eq!(ScoreRating::from_score(39), ScoreRating::Critical);
    assert_eq!(ScoreRating::from_score(0).label(), "CRITICAL");
}

#[test]
fn test_report_json_round_trip() {
    let report = assemble(
        "https://example.com",
        vec![Finding::high(Category::ImagesMedia, "2 images missing alt attribute")
            .with_items(["a.jpg", "b.jpg"])],
        PageMetrics::default(),
        None,
    );
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"Images & Media\""));
    assert!(json.contains("\"state\":\"completed\""));
    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
