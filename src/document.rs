//! Lenient HTML parsing and element lookup.

use dom_query::{Document, NodeRef};
use regex::Regex;

/// Parse HTML text into a document tree.
///
/// Parsing is browser-grade lenient: malformed or partial markup never fails,
/// it simply yields the recovered tree. Serializing the tree may normalize
/// whitespace, tag case, and attribute quoting relative to the input.
pub fn parse_document(html: &str) -> Document {
    Document::from(html)
}

/// Find the first element in document order with the given tag whose
/// attribute value satisfies `pattern`.
///
/// Elements lacking the attribute are never candidates, and an earlier
/// element with a non-matching value does not stop the search. Returns
/// `None` when nothing matches, which callers treat as a normal skip.
pub fn find_first<'a>(
    document: &'a Document,
    tag: &str,
    attribute: &str,
    pattern: &Regex,
) -> Option<NodeRef<'a>> {
    let selection = document.select(&format!("{tag}[{attribute}]"));
    selection
        .nodes()
        .iter()
        .find(|node| {
            node.attr(attribute)
                .is_some_and(|value| pattern.is_match(&value))
        })
        .cloned()
}
