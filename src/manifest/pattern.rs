//! Pattern catalog for manifest dialects.
//!
//! Each dialect ships two pattern variants: a version-aware one that captures
//! owner, name and version, and a version-less one that captures owner and
//! name only. The catalog compiles all of them up front so that a broken
//! pattern table surfaces at startup instead of in the middle of a scan.

use anyhow::{Context, Result, ensure};
use regex::Regex;

use super::ManifestKind;

/// Capture-group count of a version-aware pattern (whole match, owner, name,
/// version).
const VERSIONED_CAPTURES: usize = 4;
/// Capture-group count of a version-less pattern (whole match, owner, name).
const VERSIONLESS_CAPTURES: usize = 3;

/// A compiled manifest pattern and its declared capture-group count.
#[derive(Debug)]
pub struct ManifestPattern {
    regex: Regex,
    capture_count: usize,
}

impl ManifestPattern {
    fn compile(kind: ManifestKind, with_version: bool) -> Result<Self> {
        let source = pattern_source(kind, with_version);
        let capture_count = if with_version {
            VERSIONED_CAPTURES
        } else {
            VERSIONLESS_CAPTURES
        };
        let regex = Regex::new(source)
            .with_context(|| format!("Invalid {} manifest pattern: {}", kind, source))?;
        ensure!(
            regex.captures_len() == capture_count,
            "{} manifest pattern compiled to {} capture groups, declared {}: {}",
            kind,
            regex.captures_len(),
            capture_count,
            source
        );
        Ok(Self {
            regex,
            capture_count,
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn capture_count(&self) -> usize {
        self.capture_count
    }
}

/// Pattern source for a dialect. The version-aware variant extends the
/// version-less form with a version capture group.
fn pattern_source(kind: ManifestKind, with_version: bool) -> &'static str {
    match (kind, with_version) {
        (ManifestKind::Carthage, true) => r#"github "([\w\-]+)/([\w.\-]+)" "([\w.\-]+)""#,
        (ManifestKind::Carthage, false) => r#"github "([\w\-]+)/([\w.\-]+)""#,
        (ManifestKind::Mint, true) => r"([\w\-]+)/([\w.\-]+)@([\w.\-]+)",
        (ManifestKind::Mint, false) => r"([\w\-]+)/([\w.\-]+)",
    }
}

struct PatternPair {
    versioned: ManifestPattern,
    versionless: ManifestPattern,
}

impl PatternPair {
    fn compile(kind: ManifestKind) -> Result<Self> {
        Ok(Self {
            versioned: ManifestPattern::compile(kind, true)?,
            versionless: ManifestPattern::compile(kind, false)?,
        })
    }
}

/// Compiled patterns for every supported dialect.
///
/// Compilation failure means the pattern table shipped with the binary is
/// broken; callers must treat it as fatal and not attempt recovery.
pub struct PatternCatalog {
    carthage: PatternPair,
    mint: PatternPair,
}

impl PatternCatalog {
    /// Compile the full catalog.
    pub fn compile() -> Result<Self> {
        Ok(Self {
            carthage: PatternPair::compile(ManifestKind::Carthage)?,
            mint: PatternPair::compile(ManifestKind::Mint)?,
        })
    }

    /// The compiled pattern for a dialect, version-aware or version-less.
    pub fn pattern(&self, kind: ManifestKind, with_version: bool) -> &ManifestPattern {
        let pair = match kind {
            ManifestKind::Carthage => &self.carthage,
            ManifestKind::Mint => &self.mint,
        };
        if with_version {
            &pair.versioned
        } else {
            &pair.versionless
        }
    }
}
