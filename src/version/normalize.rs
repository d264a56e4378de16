//! Tag normalization
//!
//! Upstream sources publish versions in assorted shapes:
//! - Prefixed tags: `v20.11.0`, `go1.21.5`, `maven-3.9.6`
//! - Underscore separated: `v3_3_0`
//! - Extra components: `go1.12.4.12`
//!
//! All of them reduce to the canonical `major.minor.patch` form.

use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::ResolveError;

/// Optional single lowercase letter followed by three dotted numeric groups
static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]?(\d+\.\d+\.\d+)").expect("canonical version regex"));

/// Normalize a raw tag into `major.minor.patch`.
///
/// Underscores become dots and quote characters are removed before matching.
/// Only the first three numeric groups are kept.
pub fn normalize_tag(raw: &str) -> Result<String, ResolveError> {
    let cleaned: String = raw
        .replace('_', ".")
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .collect();

    CANONICAL_RE
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ResolveError::NoVersionFound(raw.to_string()))
}

/// Drop a trailing `.0` patch component (`7.6.0` -> `7.6`).
///
/// Used for vendors whose download paths omit a zero patch version.
pub fn trim_zero_patch(version: &str) -> &str {
    version.strip_suffix(".0").unwrap_or(version)
}
