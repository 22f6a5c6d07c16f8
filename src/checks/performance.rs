//! Performance checks: load time, page weight and compression.

use crate::config::{
    ACCEPTABLE_LOAD_SECS, ACCEPTABLE_PAGE_BYTES, HEADER_CONTENT_ENCODING, LARGE_PAGE_BYTES,
    SLOW_LOAD_SECS,
};
use crate::metrics::PageMetrics;
use crate::report::{Category, Finding};
use crate::snapshot::PageSnapshot;

/// Load time, decoded page size and response compression.
pub fn check_performance(snapshot: &PageSnapshot, metrics: &PageMetrics) -> Vec<Finding> {
    let mut findings = Vec::new();
    let load = metrics.load_time_secs;

    if load > SLOW_LOAD_SECS {
        findings.push(
            Finding::high(
                Category::Performance,
                format!("Slow page load time ({load:.2} seconds)"),
            )
            .with_impact("53% of mobile users abandon sites that take longer than 3 seconds to load")
            .with_steps([
                "Compress images (WebP format)",
                "Enable browser caching",
                "Minify CSS and JavaScript",
                "Use a CDN",
                "Reduce server response time",
            ])
            .with_recommendation("Target: under 2 seconds"),
        );
    } else if load > ACCEPTABLE_LOAD_SECS {
        findings.push(
            Finding::medium(
                Category::Performance,
                format!("Page load time could be improved ({load:.2} seconds)"),
            )
            .with_recommendation("Target: under 2 seconds for the best user experience"),
        );
    } else {
        findings.push(Finding::passed(
            Category::Performance,
            format!("Page Load Time: Excellent ({load:.2}s)"),
        ));
    }

    if metrics.page_size_bytes > LARGE_PAGE_BYTES {
        findings.push(
            Finding::high(
                Category::Performance,
                format!("Large page size ({:.2} MB)", metrics.page_size_mb()),
            )
            .with_recommendation("Reduce the page size below 1 MB (compress images, minify code)"),
        );
    } else if metrics.page_size_bytes > ACCEPTABLE_PAGE_BYTES {
        findings.push(
            Finding::medium(
                Category::Performance,
                format!("Page size could be optimized ({:.0} KB)", metrics.page_size_kb()),
            )
            .with_recommendation("Target: under 1 MB"),
        );
    } else {
        findings.push(Finding::passed(
            Category::Performance,
            format!("Page Size: Good ({:.0} KB)", metrics.page_size_kb()),
        ));
    }

    match snapshot.headers.get(HEADER_CONTENT_ENCODING) {
        Some(encoding) => findings.push(Finding::passed(
            Category::Performance,
            format!("Compression: Enabled ({encoding})"),
        )),
        None => findings.push(
            Finding::medium(Category::Performance, "GZIP compression not enabled")
                .with_impact("Compression can cut transferred bytes by 70% or more")
                .with_recommendation("Enable GZIP or Brotli compression on the server"),
        ),
    }

    findings
}
