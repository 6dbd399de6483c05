//! The element and attribute rules that drive the asset path migration.

use regex::Regex;

/// URL path prefix under which static assets were served before the migration.
pub const STATIC_ASSET_PREFIX: &str = "/static/";

/// Replacement prefix pointing at the migrated asset location.
pub const MIGRATED_ASSET_PREFIX: &str = "/assets/static/";

/// One element/attribute rewrite rule: which tag to inspect, which attribute
/// holds the asset path, and the anchored pattern the value must satisfy.
#[derive(Debug)]
pub struct AssetRule {
    /// Tag name of the elements this rule inspects.
    pub tag: &'static str,
    /// Attribute holding the asset path on matched elements.
    pub attribute: &'static str,
    /// Anchored pattern a candidate attribute value must satisfy.
    pub pattern: Regex,
    /// Substring replaced within a matched attribute value.
    pub source_prefix: &'static str,
    /// Replacement substring referencing the migrated location.
    pub target_prefix: &'static str,
}

impl AssetRule {
    /// Returns `true` when an attribute value names an asset this rule migrates.
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    /// Rewrite an attribute value, replacing every occurrence of the source
    /// prefix with the target prefix.
    pub fn rewrite(&self, value: &str) -> String {
        value.replace(self.source_prefix, self.target_prefix)
    }
}

/// The rule pair applied to each document, one rule per element kind.
#[derive(Debug)]
pub struct AssetRules {
    /// Rule for `<script>` elements referencing bundled JavaScript.
    pub script: AssetRule,
    /// Rule for `<link>` elements referencing bundled CSS.
    pub stylesheet: AssetRule,
}

/// The rules for the `/static/` to `/assets/static/` migration.
///
/// Only root-relative paths under `/static/js/` and `/static/css/` qualify;
/// absolute URLs and already-migrated paths fall outside the anchored patterns.
pub fn asset_rules() -> &'static AssetRules {
    use std::sync::OnceLock;

    static RULES: OnceLock<AssetRules> = OnceLock::new();
    RULES.get_or_init(|| AssetRules {
        script: AssetRule {
            tag: "script",
            attribute: "src",
            pattern: Regex::new(r"^/static/js/.*\.js$").expect("invalid script src regex"),
            source_prefix: STATIC_ASSET_PREFIX,
            target_prefix: MIGRATED_ASSET_PREFIX,
        },
        stylesheet: AssetRule {
            tag: "link",
            attribute: "href",
            pattern: Regex::new(r"^/static/css/.*\.css$").expect("invalid stylesheet href regex"),
            source_prefix: STATIC_ASSET_PREFIX,
            target_prefix: MIGRATED_ASSET_PREFIX,
        },
    })
}
