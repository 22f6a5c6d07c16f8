//! Link extraction and internal/external classification.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

use crate::config::SKIPPED_LINK_PREFIXES;
use crate::snapshot::{element_text, netloc, PageDocument};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));

/// Where a link points relative to the audited page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Same host (or no host at all)
    Internal,
    /// Any other host
    External,
}

/// One classified anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Resolved target URL (the raw href when it could not be resolved)
    pub url: String,
    /// Anchor text, whitespace-collapsed
    pub anchor: String,
    /// Internal or external
    pub kind: LinkKind,
    /// Whether `rel` contains `nofollow`
    pub nofollow: bool,
}

/// Link totals by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    /// Links to the page's own host
    pub internal: usize,
    /// Links to other hosts
    pub external: usize,
    /// External links without `rel="nofollow"`
    pub external_followed: usize,
}

/// Classifies a raw `href` found on the page at `base`.
///
/// Returns `None` for hrefs that are not navigations at all: empty values,
/// fragments and `javascript:`, `mailto:`, `tel:` targets. Everything else
/// is exactly one of internal or external. A target whose host is empty or
/// equal to `domain` (host plus explicit port) is internal, so relative
/// links are internal whatever their query string or fragment.
pub fn classify_href(base: &Url, domain: &str, href: &str) -> Option<(LinkKind, String)> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let lowered = href.to_ascii_lowercase();
    if SKIPPED_LINK_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
    {
        return None;
    }

    match base.join(href) {
        Ok(resolved) => {
            let host = netloc(&resolved);
            let kind = if host.is_empty() || host.eq_ignore_ascii_case(domain) {
                LinkKind::Internal
            } else {
                LinkKind::External
            };
            Some((kind, resolved.to_string()))
        }
        Err(e) => {
            log::debug!("Could not resolve href '{}': {}; counting as internal", href, e);
            Some((LinkKind::Internal, href.to_string()))
        }
    }
}

/// Extracts and classifies every `<a href>` on the page.
pub fn extract_links(document: &PageDocument, base: &Url, domain: &str) -> Vec<PageLink> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            let (kind, url) = classify_href(base, domain, href)?;
            let nofollow = element.value().attr("rel").is_some_and(|rel| {
                rel.split_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("nofollow"))
            });
            Some(PageLink {
                url,
                anchor: element_text(&element),
                kind,
                nofollow,
            })
        })
        .collect()
}

/// Totals `links` by kind.
pub fn count_links(links: &[PageLink]) -> LinkCounts {
    links.iter().fold(LinkCounts::default(), |mut counts, link| {
        match link.kind {
            LinkKind::Internal => counts.internal += 1,
            LinkKind::External => {
                counts.external += 1;
                if !link.nofollow {
                    counts.external_followed += 1;
                }
            }
        }
        counts
    })
}
