//! Queryable HTML document.
//!
//! A thin facade over `scraper::Html`. Parsing is tolerant: any byte
//! sequence produces a tree, so there is no parse error at this level.

use scraper::{ElementRef, Html, Selector};

use crate::utils::text::collapse_whitespace;

/// Parsed page markup.
pub struct PageDocument {
    html: Html,
}

impl std::fmt::Debug for PageDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDocument").finish_non_exhaustive()
    }
}

impl PageDocument {
    /// Parses a full HTML document.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(selector)
    }

    /// First element matching `selector`.
    pub fn first<'a>(&'a self, selector: &'a Selector) -> Option<ElementRef<'a>> {
        self.html.select(selector).next()
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &Selector) -> usize {
        self.html.select(selector).count()
    }

    /// First `<meta>` whose `attr` equals `key` (ASCII case-insensitive).
    ///
    /// `meta_element("name", "description")` finds
    /// `<meta name="Description" ...>` as well.
    pub fn meta_element(&self, attr: &str, key: &str) -> Option<ElementRef<'_>> {
        self.html.select(&META_SELECTOR).find(|element| {
            element
                .value()
                .attr(attr)
                .is_some_and(|value| value.trim().eq_ignore_ascii_case(key))
        })
    }

    /// Text of the page's main content area with `excluded` subtrees skipped.
    ///
    /// The content root is the first `<main>` outside every `excluded`
    /// element, else the first such `<article>`, else `<body>`, else the whole
    /// document. Text nodes are joined with a space and whitespace is
    /// collapsed.
    pub fn content_text(&self, excluded: &[&str]) -> String {
        let root = CONTENT_ROOT_SELECTORS
            .iter()
            .find_map(|selector| {
                self.html
                    .select(selector)
                    .find(|candidate| !has_excluded_ancestor(candidate, excluded))
            })
            .unwrap_or_else(|| self.html.root_element());

        let mut pieces: Vec<&str> = Vec::new();
        for node in root.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let inside_excluded = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != root.id())
                .filter_map(|ancestor| ancestor.value().as_element())
                .any(|element| excluded.contains(&element.name()));
            if !inside_excluded {
                pieces.push(text);
            }
        }
        collapse_whitespace(&pieces.join(" "))
    }

    /// Counts `selector` matches that are not inside any `excluded` element.
    pub fn count_outside(&self, selector: &Selector, excluded: &[&str]) -> usize {
        self.html
            .select(selector)
            .filter(|element| !has_excluded_ancestor(element, excluded))
            .count()
    }
}

fn has_excluded_ancestor(element: &ElementRef<'_>, excluded: &[&str]) -> bool {
    element
        .ancestors()
        .filter_map(|ancestor| ancestor.value().as_element())
        .any(|ancestor| excluded.contains(&ancestor.name()))
}

/// Whitespace-collapsed text content of `element`.
pub fn element_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

static META_SELECTOR: std::sync::LazyLock<Selector> =
    std::sync::LazyLock::new(|| crate::utils::parse_selector_unsafe("meta", "META_SELECTOR"));

static CONTENT_ROOT_SELECTORS: std::sync::LazyLock<[Selector; 3]> =
    std::sync::LazyLock::new(|| {
        [
            crate::utils::parse_selector_unsafe("main", "CONTENT_ROOT_SELECTORS"),
            crate::utils::parse_selector_unsafe("article", "CONTENT_ROOT_SELECTORS"),
            crate::utils::parse_selector_unsafe("body", "CONTENT_ROOT_SELECTORS"),
        ]
    });
