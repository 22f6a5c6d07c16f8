//! CSV summary export of a live audit.

use std::fs::File;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

use seo_audit::export::{summary_from_csv, summary_to_csv, SummaryRow};
use seo_audit::initialization::build_client;
use seo_audit::{AuditOptions, Auditor};

#[tokio::test]
async fn test_summary_csv_round_trip_from_audit() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200).body(
                "<html><head><title>Plain Page</title></head>\
                 <body><h1>Hello</h1><p>Some words here.</p><img src=\"/a.png\"></body></html>",
            ),
        ),
    );

    let client = build_client(Duration::from_secs(5), "seo_audit-tests/1.0").unwrap();
    let report = Auditor::new(client, AuditOptions::default())
        .audit(&format!("http://{}/", server.addr()))
        .await;
    assert!(!report.is_failed());

    let row = SummaryRow::from_report(&report);
    assert_eq!(row.images, 1);
    assert_eq!(row.overall_score, report.overall_score);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.csv");
    summary_to_csv(std::slice::from_ref(&row), File::create(&path).unwrap()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("URL,Audit Date,Overall Score,"));

    let rows = summary_from_csv(File::open(&path).unwrap()).unwrap();
    assert_eq!(rows, vec![row]);
}
