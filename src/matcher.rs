//! Resolution of the include glob and exclude globs into the match set.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use glob::MatchOptions;
use log::debug;

use crate::error::{GlobFailure, UploadError, UploadResult};

/// `*` and `?` never cross a path separator; `**` must be used for recursion.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Returns every path matching `include` that is not matched by any of the
/// `exclude` patterns, in the order the include expansion produced them.
///
/// # Arguments
///
/// * `include` - Glob pattern selecting candidate files (supports `**`)
/// * `exclude` - Glob patterns whose matches are removed from the result
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The ordered match set
/// * `Err(UploadError::Glob)` - If any pattern is invalid, the walk fails, or
///   a pattern without wildcards names a missing path
pub fn resolve(include: &str, exclude: &[String]) -> UploadResult<Vec<PathBuf>> {
    let matches = expand(include)?;
    if exclude.is_empty() {
        return Ok(matches);
    }

    let mut excluded = HashSet::new();
    for pattern in exclude {
        excluded.extend(expand(pattern)?);
    }
    debug!(
        "Excluding {} paths matched by {} patterns",
        excluded.len(),
        exclude.len()
    );

    Ok(filter_excluded(matches, &excluded))
}

/// Drops every path present in `excluded`, keeping the order of `paths`.
pub fn filter_excluded(paths: Vec<PathBuf>, excluded: &HashSet<PathBuf>) -> Vec<PathBuf> {
    if excluded.is_empty() {
        return paths;
    }
    paths
        .into_iter()
        .filter(|path| !excluded.contains(path))
        .collect()
}

/// Whether `pattern` contains any glob metacharacter.
fn has_wildcards(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand a single glob pattern against the filesystem.
///
/// A literal path must exist: a mistyped file name is an error rather than
/// an empty match set.
fn expand(pattern: &str) -> UploadResult<Vec<PathBuf>> {
    let glob_error = |source: GlobFailure| UploadError::Glob {
        pattern: pattern.to_string(),
        source,
    };

    if !has_wildcards(pattern) {
        fs::symlink_metadata(pattern).map_err(|e| glob_error(e.into()))?;
    }

    let paths = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| glob_error(e.into()))?;
    paths
        .map(|entry| entry.map_err(|e| glob_error(e.into())))
        .collect()
}
