//! The check library.
//!
//! Each check is a plain function from the snapshot and metrics to zero or
//! more findings. Checks never fail: missing data is a finding, not an
//! error. The registry lists them in a fixed order, which is also the
//! order findings appear in within each severity bucket.

mod content;
mod images;
mod links;
mod mobile;
mod performance;
mod security;
mod social;
mod technical;
mod wordpress;

pub use content::check_content;
pub use images::check_images;
pub use links::check_links;
pub use mobile::check_mobile;
pub use performance::check_performance;
pub use security::check_https;
pub use social::check_social;
pub use technical::{
    check_canonical, check_headings, check_meta_description, check_redirects, check_robots,
    check_schema, check_title,
};
pub use wordpress::{apply_wordpress_remediation, check_oversized_images};

use crate::config::AuditOptions;
use crate::metrics::PageMetrics;
use crate::report::Finding;
use crate::snapshot::PageSnapshot;

/// Signature shared by every check.
pub type CheckFn = fn(&PageSnapshot, &PageMetrics) -> Vec<Finding>;

/// A named entry in the check registry.
#[derive(Clone, Copy)]
pub struct Check {
    /// Short identifier, used in logs
    pub name: &'static str,
    /// The check itself
    pub run: CheckFn,
}

/// Checks every audit runs, in report order.
pub const CORE_CHECKS: &[Check] = &[
    Check { name: "title", run: check_title },
    Check { name: "meta_description", run: check_meta_description },
    Check { name: "headings", run: check_headings },
    Check { name: "images", run: check_images },
    Check { name: "schema", run: check_schema },
    Check { name: "mobile", run: check_mobile },
    Check { name: "https", run: check_https },
    Check { name: "canonical", run: check_canonical },
    Check { name: "robots", run: check_robots },
    Check { name: "content", run: check_content },
    Check { name: "internal_links", run: check_links },
    Check { name: "social", run: check_social },
    Check { name: "performance", run: check_performance },
    Check { name: "redirects", run: check_redirects },
];

/// Extra checks enabled with WordPress detection.
pub const WORDPRESS_CHECKS: &[Check] = &[Check {
    name: "oversized_images",
    run: check_oversized_images,
}];

/// The checks `options` enables, in run order.
pub fn enabled_checks(options: &AuditOptions) -> impl Iterator<Item = &'static Check> {
    let wordpress: &'static [Check] = if options.enable_wordpress_detection {
        WORDPRESS_CHECKS
    } else {
        &[]
    };
    CORE_CHECKS.iter().chain(wordpress)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
