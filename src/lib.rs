#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod rewrite;
pub mod rules;

pub use error::RewriteError;
pub use rewrite::{RewriteSummary, rewrite_file, rewrite_html};
pub use rules::{AssetRule, AssetRules, asset_rules};
