// Parse module tests.

use super::*;
use crate::config::TOP_KEYWORDS;
use crate::snapshot::PageDocument;
use url::Url;

fn doc(html: &str) -> PageDocument {
    PageDocument::parse(html)
}

#[test]
fn test_extract_title_basic() {
    let document = doc("<html><head><title>Test Page</title></head><body></body></html>");
    assert_eq!(extract_title(&document), Some("Test Page".to_string()));
}

#[test]
fn test_extract_title_with_whitespace() {
    let document = doc("<html><head><title>\n        Test   Page\n    </title></head></html>");
    assert_eq!(extract_title(&document), Some("Test Page".to_string()));
}

#[test]
fn test_extract_title_decodes_entities() {
    let document = doc("<html><head><title>Fish &amp; Chips</title></head></html>");
    assert_eq!(extract_title(&document), Some("Fish & Chips".to_string()));
}

#[test]
fn test_extract_title_missing_vs_empty() {
    assert_eq!(extract_title(&doc("<html><head></head></html>")), None);
    assert_eq!(
        extract_title(&doc("<html><head><title></title></head></html>")),
        Some(String::new())
    );
}

#[test]
fn test_meta_description_falls_back_to_open_graph() {
    let document = doc(
        r#"<html><head><meta property="og:description" content=" From OG "></head></html>"#,
    );
    assert_eq!(extract_meta_description(&document), Some("From OG".to_string()));

    let document = doc(
        r#"<html><head>
            <meta property="og:description" content="From OG">
            <meta name="description" content="From meta">
        </head></html>"#,
    );
    assert_eq!(extract_meta_description(&document), Some("From meta".to_string()));
}

#[test]
fn test_meta_description_without_content_is_empty() {
    let document = doc(r#"<html><head><meta name="description"></head></html>"#);
    assert_eq!(extract_meta_description(&document), Some(String::new()));
    assert_eq!(extract_meta_description(&doc("<html></html>")), None);
}

#[test]
fn test_robots_is_lowercased() {
    let document = doc(r#"<html><head><meta name="robots" content="NOINDEX, Follow"></head></html>"#);
    assert_eq!(extract_robots(&document), Some("noindex, follow".to_string()));
}

#[test]
fn test_canonical_matches_rel_token() {
    let document = doc(
        r#"<html><head><link rel="stylesheet" href="/a.css"><link rel="Canonical" href="/page"></head></html>"#,
    );
    assert_eq!(extract_canonical(&document), Some("/page".to_string()));
    assert_eq!(extract_canonical(&doc("<html><head></head></html>")), None);
}

#[test]
fn test_flash_elements_counted() {
    let document = doc(
        r#"<html><body>
            <embed type="application/x-shockwave-flash" src="a.swf">
            <object type="application/x-shockwave-flash" data="b.swf"></object>
            <object type="image/svg+xml" data="c.svg"></object>
        </body></html>"#,
    );
    assert_eq!(count_flash_elements(&document), 2);
}

#[test]
fn test_headings_summary() {
    let document = doc(
        "<html><body><h1>Main</h1><h2>A</h2><h2>B</h2><h4>Deep</h4></body></html>",
    );
    let headings = extract_headings(&document);
    assert_eq!(headings.len(), 3);
    assert_eq!(headings[0].level, 1);
    assert_eq!(headings[1].count, 2);
    assert_eq!(headings[1].texts, vec!["A".to_string(), "B".to_string()]);
    assert!(has_level(&headings, 4));
    assert!(!has_level(&headings, 3));
}

#[test]
fn test_heading_texts_are_clipped() {
    let long = "x".repeat(150);
    let document = doc(&format!("<html><body><h2>{long}</h2></body></html>"));
    let headings = extract_headings(&document);
    assert_eq!(headings[0].texts[0].chars().count(), 100);
}

#[test]
fn test_extract_h1_texts() {
    let document = doc("<html><body><h1>First</h1><p>x</p><h1> Second </h1></body></html>");
    assert_eq!(extract_h1_texts(&document), vec!["First", "Second"]);
}

#[test]
fn test_images_alt_states() {
    let document = doc(
        r#"<html><body>
            <img src="a.jpg">
            <img src="b.png" alt="  ">
            <img src="c.webp" alt="A cat">
        </body></html>"#,
    );
    let images = extract_images(&document);
    assert_eq!(images.len(), 3);
    assert_eq!(images[0].alt, None);
    assert!(images[1].has_blank_alt());
    assert!(!images[2].has_blank_alt());
    assert!(images[0].uses_legacy_format());
    assert!(!images[2].uses_legacy_format());
}

#[test]
fn test_image_declared_area() {
    let document = doc(
        r#"<html><body>
            <img src="a.jpg" width="2000" height="1000">
            <img src="b.jpg" width="100%" height="50">
            <img src="c.jpg" width="10">
        </body></html>"#,
    );
    let images = extract_images(&document);
    assert_eq!(images[0].declared_area(), Some(2_000_000));
    assert_eq!(images[1].declared_area(), None);
    assert_eq!(images[2].declared_area(), None);
}

#[test]
fn test_schema_markup_json_ld_and_microdata() {
    let document = doc(
        r#"<html><head>
            <script type="application/ld+json">{"@context":"https://schema.org","@type":"Organization"}</script>
            <script type="application/ld+json">[{"@type":"WebPage"},{"@type":["Article","NewsArticle"]}]</script>
        </head><body>
            <div itemscope itemtype="https://schema.org/Product"></div>
        </body></html>"#,
    );
    let markup = extract_schema_markup(&document);
    assert!(markup.is_present());
    assert_eq!(markup.json_ld_blocks, 2);
    assert_eq!(markup.microdata_items, 1);
    assert_eq!(
        markup.types,
        vec![
            "JSON-LD: Organization",
            "JSON-LD: WebPage",
            "JSON-LD: Article, NewsArticle",
            "Microdata: Product",
        ]
    );
}

#[test]
fn test_schema_markup_graph_and_invalid_json() {
    let document = doc(
        r#"<html><head>
            <script type="application/ld+json">{"@context":"https://schema.org","@graph":[{"@type":"WebSite"},{"@type":"BreadcrumbList"}]}</script>
            <script type="application/ld+json">{ not json </script>
        </head></html>"#,
    );
    let markup = extract_schema_markup(&document);
    assert!(markup.is_present());
    assert_eq!(markup.json_ld_blocks, 2);
    assert_eq!(markup.types, vec!["JSON-LD: WebSite", "JSON-LD: BreadcrumbList"]);
}

#[test]
fn test_schema_markup_absent() {
    let markup = extract_schema_markup(&doc("<html><body><p>plain</p></body></html>"));
    assert!(!markup.is_present());
    assert!(markup.types.is_empty());
}

#[test]
fn test_missing_social_tags() {
    let document = doc(
        r#"<html><head>
            <meta property="og:title" content="T">
            <meta property="og:image" content="i.png">
            <meta name="twitter:card" content="summary">
        </head></html>"#,
    );
    assert_eq!(
        missing_open_graph_tags(&document),
        vec!["og:description", "og:url", "og:type"]
    );
    assert_eq!(
        missing_twitter_card_tags(&document),
        vec!["twitter:title", "twitter:description", "twitter:image"]
    );
}

#[test]
fn test_classify_href_skips_non_navigation() {
    let base = Url::parse("https://example.com/blog/post").unwrap();
    for href in ["", "  ", "#top", "javascript:void(0)", "mailto:a@b.c", "tel:+123", "JavaScript:alert(1)"] {
        assert_eq!(classify_href(&base, "example.com", href), None, "href {href:?}");
    }
}

#[test]
fn test_classify_href_relative_links_are_internal() {
    let base = Url::parse("https://example.com/blog/post").unwrap();
    for href in ["/about", "other?x=1", "../contact#form", "?page=2", "//example.com/x"] {
        let (kind, _) = classify_href(&base, "example.com", href).unwrap();
        assert_eq!(kind, LinkKind::Internal, "href {href:?}");
    }
}

#[test]
fn test_classify_href_external_hosts() {
    let base = Url::parse("https://example.com/").unwrap();
    let (kind, url) = classify_href(&base, "example.com", "https://other.org/page").unwrap();
    assert_eq!(kind, LinkKind::External);
    assert_eq!(url, "https://other.org/page");

    // Subdomains are different hosts
    let (kind, _) = classify_href(&base, "example.com", "https://www.example.com/").unwrap();
    assert_eq!(kind, LinkKind::External);
}

#[test]
fn test_classify_href_is_idempotent() {
    let base = Url::parse("https://example.com/a/").unwrap();
    for href in ["/x", "https://other.org", "y?z=1#f"] {
        let first = classify_href(&base, "example.com", href);
        let second = classify_href(&base, "example.com", href);
        assert_eq!(first, second);
    }
}

#[test]
fn test_extract_and_count_links() {
    let document = doc(
        r##"<html><body>
            <a href="/one">One</a>
            <a href="two.html">Two</a>
            <a href="#skip">Skip</a>
            <a href="mailto:x@example.com">Mail</a>
            <a href="https://other.org/" rel="nofollow noopener">Sponsor</a>
            <a href="https://third.net/">Friend</a>
        </body></html>"##,
    );
    let base = Url::parse("https://example.com/").unwrap();
    let links = extract_links(&document, &base, "example.com");
    assert_eq!(links.len(), 4);
    assert_eq!(links[0].anchor, "One");
    let counts = count_links(&links);
    assert_eq!(counts.internal, 2);
    assert_eq!(counts.external, 2);
    assert_eq!(counts.external_followed, 1);
}

#[test]
fn test_count_words_and_sentences() {
    let text = "First sentence here. Second one! Is this third?? Yes";
    assert_eq!(count_words(text), 9);
    assert_eq!(count_sentences(text), 4);
    assert_eq!(count_sentences(""), 0);
    assert_eq!(count_sentences("..."), 0);
}

#[test]
fn test_keywords_top_term() {
    let text = "the cat sat on the mat and the cat ran";
    let keywords = extract_keywords(text, count_words(text), TOP_KEYWORDS);
    assert_eq!(keywords[0].keyword, "cat");
    assert_eq!(keywords[0].count, 2);
    assert!((keywords[0].density - 0.2).abs() < 1e-9);
    assert!(keywords.iter().all(|k| k.keyword != "the" && k.keyword != "and"));
}

#[test]
fn test_keywords_ties_keep_first_occurrence() {
    let keywords = extract_keywords("zebra apple mango apple zebra", 5, TOP_KEYWORDS);
    let order: Vec<&str> = keywords.iter().map(|k| k.keyword.as_str()).collect();
    assert_eq!(order, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_keywords_filter_short_numeric_and_stop_words() {
    let keywords = extract_keywords("go to 2024 rust, Rust. rust's those", 7, TOP_KEYWORDS);
    let order: Vec<(&str, usize)> = keywords
        .iter()
        .map(|k| (k.keyword.as_str(), k.count))
        .collect();
    assert_eq!(order, vec![("rust", 2)]);
}

#[test]
fn test_keywords_limit() {
    let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
    assert_eq!(extract_keywords(text, 12, TOP_KEYWORDS).len(), 10);
}

#[test]
fn test_detect_wordpress() {
    let html = r#"<html><head>
        <meta name="generator" content="WordPress 6.4.2">
        <link rel="stylesheet" href="https://blog.example.com/wp-content/themes/astra/style.css">
        <script src="/wp-content/plugins/contact-form-7/js/index.js"></script>
        <script src="/wp-content/plugins/yoast-seo/js/a.js"></script>
        <script src="/wp-content/plugins/contact-form-7/js/other.js"></script>
    </head><body></body></html>"#;
    let info = detect_wordpress(&doc(html), html).unwrap();
    assert_eq!(info.version.as_deref(), Some("6.4.2"));
    assert_eq!(info.theme.as_deref(), Some("astra"));
    assert_eq!(info.plugins, vec!["contact-form-7", "yoast-seo"]);
}

#[test]
fn test_detect_wordpress_from_paths_only() {
    let html = r#"<html><head><script src="/wp-includes/js/jquery.js"></script></head></html>"#;
    let info = detect_wordpress(&doc(html), html).unwrap();
    assert_eq!(info.version, None);
    assert_eq!(info.theme, None);
    assert!(info.plugins.is_empty());
}

#[test]
fn test_detect_wordpress_absent() {
    let html = r#"<html><head><meta name="generator" content="Hugo 0.120"></head></html>"#;
    assert!(detect_wordpress(&doc(html), html).is_none());
}
