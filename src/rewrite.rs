//! The in-place asset path rewrite.

use std::fs;
use std::path::Path;

use dom_query::Document;

use crate::document::{find_first, parse_document};
use crate::error::RewriteError;
use crate::rules::{AssetRule, asset_rules};

/// Outcome of one rewrite pass over a document.
///
/// Each field holds the migrated attribute value when the corresponding
/// element was found, and `None` when the document had no match for it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Migrated `src` of the first matching `<script>` element, if any.
    pub script_src: Option<String>,
    /// Migrated `href` of the first matching `<link>` element, if any.
    pub stylesheet_href: Option<String>,
}

impl RewriteSummary {
    /// Number of attribute values the pass rewrote, zero through two.
    pub fn updated_count(&self) -> usize {
        usize::from(self.script_src.is_some()) + usize::from(self.stylesheet_href.is_some())
    }

    /// Returns `true` when the pass left every attribute untouched.
    pub fn is_unchanged(&self) -> bool {
        self.updated_count() == 0
    }
}

/// Rewrite the static asset references of an HTML string.
///
/// Parses the markup leniently, rewrites the first matching `<script>` and
/// the first matching `<link>` reference, and returns the serialized document
/// together with a summary of what changed. Documents without a match come
/// back normalized by the serializer but otherwise intact.
pub fn rewrite_html(html: &str) -> (String, RewriteSummary) {
    let document = parse_document(html);
    let rules = asset_rules();

    let summary = RewriteSummary {
        script_src: apply_rule(&document, &rules.script),
        stylesheet_href: apply_rule(&document, &rules.stylesheet),
    };

    (document.html().to_string(), summary)
}

/// Rewrite the static asset references of the HTML file at `path`, in place.
///
/// Reads the whole file, applies the rules, and overwrites the file with the
/// serialized result even when nothing matched. The overwrite is not atomic;
/// an interrupted write can leave the file truncated.
pub fn rewrite_file(path: &Path) -> Result<RewriteSummary, RewriteError> {
    let bytes = fs::read(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let html = String::from_utf8(bytes).map_err(|source| RewriteError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let (rewritten, summary) = rewrite_html(&html);

    fs::write(path, rewritten).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(summary)
}

/// Apply one rule to the document, returning the migrated attribute value.
///
/// Only the first element matching the rule's pattern is touched; the
/// replacement covers every occurrence of the source prefix within that one
/// attribute value.
fn apply_rule(document: &Document, rule: &AssetRule) -> Option<String> {
    let node = find_first(document, rule.tag, rule.attribute, &rule.pattern)?;
    let value = node.attr(rule.attribute)?;
    let migrated = rule.rewrite(&value);
    node.set_attr(rule.attribute, &migrated);
    Some(migrated)
}
