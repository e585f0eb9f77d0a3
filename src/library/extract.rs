//! Two-phase extraction of GitHub libraries from manifest text.
//!
//! Phase 1 scans with the dialect's version-aware pattern. Only when that
//! phase matches nothing at all is the whole file rescanned with the
//! version-less pattern. The fallback is per file, not per line: a manifest
//! mixing versioned and unversioned entries yields only the versioned ones.

use std::collections::HashMap;

use anyhow::{Result, ensure};
use log::debug;

use crate::manifest::Manifest;
use crate::manifest::pattern::PatternCatalog;

use super::GitHubLibrary;
use super::version::normalize_version;

/// Extract all GitHub libraries declared in `manifest`, in order of
/// appearance.
///
/// Missing content or zero matches in both phases yield an empty list. A
/// capture-group count that disagrees with the catalog's declaration is a
/// broken pattern table and propagates as an error.
pub fn extract(
    manifest: &Manifest,
    renames: &HashMap<String, String>,
    catalog: &PatternCatalog,
) -> Result<Vec<GitHubLibrary>> {
    let libraries = extract_with(manifest, renames, catalog, true)?;
    if !libraries.is_empty() {
        return Ok(libraries);
    }
    extract_with(manifest, renames, catalog, false)
}

fn extract_with(
    manifest: &Manifest,
    renames: &HashMap<String, String>,
    catalog: &PatternCatalog,
    with_version: bool,
) -> Result<Vec<GitHubLibrary>> {
    let Some(content) = manifest.content.as_deref() else {
        return Ok(Vec::new());
    };

    let pattern = catalog.pattern(manifest.kind, with_version);
    let mut libraries = Vec::new();

    for captures in pattern.regex().captures_iter(content) {
        ensure!(
            captures.len() == pattern.capture_count(),
            "{} pattern produced {} capture groups, declared {}: {}",
            manifest.kind,
            captures.len(),
            pattern.capture_count(),
            &captures[0]
        );

        let owner = &captures[1];
        let name = &captures[2];
        let version = if with_version {
            Some(normalize_version(&captures[3]))
        } else {
            None
        };

        let library = GitHubLibrary::new(owner, name, rename_for(renames, name), version);
        debug!("Extracted {}", library);
        libraries.push(library);
    }

    Ok(libraries)
}

/// Exact, case-sensitive lookup of a display-name override.
fn rename_for(renames: &HashMap<String, String>, name: &str) -> Option<String> {
    renames.get(name).cloned()
}
