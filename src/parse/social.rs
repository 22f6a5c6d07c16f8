//! Social sharing tags (Open Graph and Twitter Cards).

use crate::config::{OPEN_GRAPH_TAGS, TWITTER_CARD_TAGS};
use crate::snapshot::PageDocument;

/// Open Graph properties from the essential set that the page lacks.
///
/// Open Graph tags are keyed by the `property` attribute; presence of the
/// tag is enough, whatever its content.
pub fn missing_open_graph_tags(document: &PageDocument) -> Vec<&'static str> {
    OPEN_GRAPH_TAGS
        .iter()
        .copied()
        .filter(|tag| document.meta_element("property", tag).is_none())
        .collect()
}

/// Twitter Card names from the essential set that the page lacks.
///
/// Twitter tags are keyed by the `name` attribute.
pub fn missing_twitter_card_tags(document: &PageDocument) -> Vec<&'static str> {
    TWITTER_CARD_TAGS
        .iter()
        .copied()
        .filter(|tag| document.meta_element("name", tag).is_none())
        .collect()
}
