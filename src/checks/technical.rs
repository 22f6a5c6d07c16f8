//! Technical SEO checks: title, meta description, headings, schema,
//! canonical, robots and redirects.

use crate::config::{
    CTA_WORDS, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, DESCRIPTION_TARGET_CHARS,
    H1_MIN_CHARS, HEADING_TEXT_MAX_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS, TITLE_TARGET_CHARS,
};
use crate::metrics::PageMetrics;
use crate::parse::{
    extract_canonical, extract_h1_texts, extract_robots, extract_schema_markup, has_level,
};
use crate::report::{Category, Finding};
use crate::snapshot::{netloc, PageSnapshot};
use crate::utils::text::{char_len, truncate_chars};

/// Title presence, length, brand separator and repeated words.
pub fn check_title(_snapshot: &PageSnapshot, metrics: &PageMetrics) -> Vec<Finding> {
    let Some(title) = metrics.title.as_deref() else {
        return vec![Finding::critical(Category::TechnicalSeo, "Missing <title> tag")
            .with_impact("Severe negative impact on rankings. Title tags are one of the most important on-page SEO elements.")
            .with_fix("<title>Primary Keyword - Secondary Keyword | Brand Name</title>")
            .with_steps([
                "Add a <title> tag in the <head> section",
                "Include the primary keyword near the beginning",
                "Keep it between 50-60 characters",
                "Make it compelling to increase click-through rate",
            ])
            .with_example("<title>Handmade Leather Wallets - Free Shipping | YourBrand</title>")];
    };

    if title.is_empty() {
        return vec![Finding::critical(Category::TechnicalSeo, "Empty <title> tag")
            .with_current("<title></title>")
            .with_fix("<title>Your Primary Keyword - Brand Name</title>")];
    }

    let mut findings = Vec::new();
    let length = char_len(title);

    if length < TITLE_MIN_CHARS {
        findings.push(
            Finding::high(
                Category::TechnicalSeo,
                format!("Title too short ({length} characters)"),
            )
            .with_current(title)
            .with_recommendation(format!(
                "Expand to 50-60 characters (add {} more chars)",
                TITLE_TARGET_CHARS - length
            ))
            .with_impact("Missing opportunity to include more keywords and improve click-through rate"),
        );
    } else if length > TITLE_MAX_CHARS {
        findings.push(
            Finding::medium(
                Category::TechnicalSeo,
                format!("Title too long ({length} characters)"),
            )
            .with_current(title)
            .with_recommendation("Shorten to 50-60 characters to avoid truncation in search results")
            .with_example(format!("{}...", truncate_chars(title, TITLE_MAX_CHARS))),
        );
    } else {
        findings.push(
            Finding::passed(
                Category::TechnicalSeo,
                format!("Title Tag Length: Optimal ({length} characters)"),
            )
            .with_current(title),
        );
    }

    if !title.contains('|') && !title.contains('-') {
        findings.push(
            Finding::medium(Category::TechnicalSeo, "Title doesn't include brand separator")
                .with_recommendation("Add the brand name separated by | or - for better brand recognition")
                .with_example(format!("{title} | Your Brand Name")),
        );
    }

    let duplicates = duplicate_words(title);
    if !duplicates.is_empty() {
        findings.push(
            Finding::low(
                Category::TechnicalSeo,
                format!("Duplicate words in title: {}", duplicates.join(", ")),
            )
            .with_recommendation("Remove duplicate words to make room for more keywords")
            .with_items(duplicates),
        );
    }

    findings
}

/// Words that appear more than once (case-insensitive), in first-seen order.
fn duplicate_words(text: &str) -> Vec<String> {
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    let mut duplicates: Vec<String> = Vec::new();
    for (i, word) in words.iter().enumerate() {
        if words[..i].contains(word) && !duplicates.contains(word) {
            duplicates.push(word.clone());
        }
    }
    duplicates
}

/// Meta description presence, length and call-to-action.
pub fn check_meta_description(_snapshot: &PageSnapshot, metrics: &PageMetrics) -> Vec<Finding> {
    let Some(description) = metrics.meta_description.as_deref() else {
        return vec![Finding::critical(Category::TechnicalSeo, "Missing meta description")
            .with_impact("Search engines will generate their own description, missing the chance to optimize click-through rate")
            .with_fix(r#"<meta name="description" content="Compelling description with primary keywords (150-160 chars)">"#)
            .with_steps([
                "Include the primary keyword naturally",
                "Add a call-to-action",
                "Make it compelling and unique",
                "Keep it between 150-160 characters",
            ])];
    };

    if description.is_empty() {
        return vec![Finding::critical(Category::TechnicalSeo, "Empty meta description")
            .with_current(r#"<meta name="description" content="">"#)];
    }

    let mut findings = Vec::new();
    let length = char_len(description);

    if length < DESCRIPTION_MIN_CHARS {
        findings.push(
            Finding::high(
                Category::TechnicalSeo,
                format!("Meta description too short ({length} characters)"),
            )
            .with_current(description)
            .with_recommendation(format!(
                "Expand to 150-160 characters (add {} more)",
                DESCRIPTION_TARGET_CHARS - length
            )),
        );
    } else if length > DESCRIPTION_MAX_CHARS {
        findings.push(
            Finding::medium(
                Category::TechnicalSeo,
                format!("Meta description too long ({length} characters)"),
            )
            .with_current(description)
            .with_recommendation(format!(
                "Shorten by {} characters",
                length - DESCRIPTION_MAX_CHARS
            )),
        );
    } else {
        findings.push(Finding::passed(
            Category::TechnicalSeo,
            format!("Meta Description: Optimal ({length} characters)"),
        ));
    }

    if !has_call_to_action(description) {
        findings.push(
            Finding::low(Category::ContentQuality, "Meta description lacks call-to-action")
                .with_recommendation(r#"Add CTA words like "Discover", "Learn more", "Get started" to improve click-through rate"#),
        );
    }

    findings
}

/// A word starting with one of the CTA verbs ("Discover", "learning", ...).
fn has_call_to_action(text: &str) -> bool {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .any(|word| CTA_WORDS.iter().any(|cta| word.starts_with(cta)))
}

/// H1 count and length, plus heading hierarchy gaps.
pub fn check_headings(snapshot: &PageSnapshot, metrics: &PageMetrics) -> Vec<Finding> {
    let mut findings = Vec::new();
    let h1_texts = extract_h1_texts(&snapshot.document);

    match h1_texts.as_slice() {
        [] => findings.push(
            Finding::critical(Category::TechnicalSeo, "Missing H1 heading")
                .with_impact("The H1 helps search engines understand the main topic of the page")
                .with_fix("<h1>Primary Keyword - Main Topic</h1>")
                .with_steps([
                    "Use only ONE H1 per page",
                    "Include the primary keyword",
                    "Make it descriptive and compelling",
                    "Place it near the top of the page",
                ]),
        ),
        [h1] => {
            findings.push(
                Finding::passed(Category::TechnicalSeo, "H1 Heading: Found")
                    .with_current(truncate_chars(h1, HEADING_TEXT_MAX_CHARS)),
            );
            let length = char_len(h1);
            if length < H1_MIN_CHARS {
                findings.push(
                    Finding::medium(
                        Category::ContentQuality,
                        format!("H1 too short ({length} characters)"),
                    )
                    .with_current(h1.as_str())
                    .with_recommendation("Expand the H1 to be more descriptive (aim for 20-70 characters)"),
                );
            }
        }
        many => findings.push(
            Finding::high(
                Category::TechnicalSeo,
                format!("Multiple H1 tags found ({})", many.len()),
            )
            .with_items(
                many.iter()
                    .map(|text| truncate_chars(text, HEADING_TEXT_MAX_CHARS)),
            )
            .with_recommendation("Use only ONE H1 per page. Convert the others to H2 or H3")
            .with_fix("Change <h1>Secondary Heading</h1> to <h2>Secondary Heading</h2>"),
        ),
    }

    if !metrics.headings.is_empty() {
        let mut gaps = Vec::new();
        if has_level(&metrics.headings, 3) && !has_level(&metrics.headings, 2) {
            gaps.push("H3 used without H2");
        }
        if has_level(&metrics.headings, 4) && !has_level(&metrics.headings, 3) {
            gaps.push("H4 used without H3");
        }

        if gaps.is_empty() {
            findings.push(Finding::passed(
                Category::TechnicalSeo,
                "Heading Hierarchy: Proper structure maintained",
            ));
        } else {
            findings.push(
                Finding::medium(Category::TechnicalSeo, "Broken heading hierarchy")
                    .with_items(gaps)
                    .with_recommendation("Maintain proper heading order: H1 → H2 → H3 → H4"),
            );
        }
    }

    findings
}

/// JSON-LD or microdata presence.
pub fn check_schema(snapshot: &PageSnapshot, _metrics: &PageMetrics) -> Vec<Finding> {
    let markup = extract_schema_markup(&snapshot.document);

    if !markup.is_present() {
        return vec![Finding::medium(Category::TechnicalSeo, "No schema markup found")
            .with_impact("Missing opportunity for rich snippets in search results")
            .with_recommendation("Add relevant schema markup (Organization, Article, Product, etc.)")
            .with_example(
                r#"<script type="application/ld+json">
{
  "@context": "https://schema.org",
  "@type": "Organization",
  "name": "Your Company",
  "url": "https://yoursite.com"
}
</script>"#,
            )];
    }

    vec![Finding::passed(
        Category::TechnicalSeo,
        format!("Schema Markup: Found {} schemas", markup.types.len()),
    )
    .with_items(markup.types)]
}

/// Canonical link presence and host.
pub fn check_canonical(snapshot: &PageSnapshot, _metrics: &PageMetrics) -> Vec<Finding> {
    let Some(href) = extract_canonical(&snapshot.document) else {
        return vec![Finding::high(Category::TechnicalSeo, "Missing canonical URL")
            .with_impact("Risk of duplicate content issues")
            .with_fix(format!(r#"<link rel="canonical" href="{}">"#, snapshot.url))
            .with_recommendation("Add a canonical tag to specify the preferred URL version")];
    };

    let mut findings =
        vec![Finding::passed(Category::TechnicalSeo, "Canonical URL: Present").with_current(href.as_str())];

    if !href.is_empty() {
        match snapshot.url.join(&href) {
            Ok(target) if netloc(&target) != snapshot.domain => findings.push(
                Finding::high(Category::TechnicalSeo, "Canonical points to different domain")
                    .with_current(href.as_str())
                    .with_recommendation("Verify this is intentional (e.g., for syndicated content)"),
            ),
            Ok(_) => {}
            Err(e) => log::debug!("Could not resolve canonical href '{}': {}", href, e),
        }
    }

    findings
}

/// Robots meta directives.
pub fn check_robots(snapshot: &PageSnapshot, _metrics: &PageMetrics) -> Vec<Finding> {
    let Some(content) = extract_robots(&snapshot.document) else {
        return vec![Finding::passed(
            Category::TechnicalSeo,
            "Robots Meta: Not blocking (default index, follow)",
        )];
    };

    let mut findings = Vec::new();
    if content.contains("noindex") {
        findings.push(
            Finding::critical(Category::TechnicalSeo, "Page is set to NOINDEX")
                .with_current(format!(r#"<meta name="robots" content="{content}">"#))
                .with_impact("Page will not be indexed by search engines")
                .with_fix(r#"Remove the noindex directive or change it to <meta name="robots" content="index, follow">"#),
        );
    }
    if content.contains("nofollow") {
        findings.push(
            Finding::high(Category::TechnicalSeo, "Page is set to NOFOLLOW")
                .with_impact("Search engines will not follow links on this page")
                .with_recommendation("Remove nofollow unless intentional"),
        );
    }
    if findings.is_empty() {
        findings.push(
            Finding::passed(Category::TechnicalSeo, "Robots Meta: Allows indexing")
                .with_current(content),
        );
    }
    findings
}

/// Redirect hops before the final response.
pub fn check_redirects(_snapshot: &PageSnapshot, metrics: &PageMetrics) -> Vec<Finding> {
    if metrics.redirect_count > 0 {
        vec![Finding::medium(
            Category::TechnicalSeo,
            format!("{} redirect(s) detected", metrics.redirect_count),
        )
        .with_impact("Redirects slow down page load and can dilute link equity")
        .with_recommendation("Minimize redirects. Link directly to the final URL when possible.")]
    } else {
        vec![Finding::passed(
            Category::TechnicalSeo,
            "Redirects: No redirects (good)",
        )]
    }
}
