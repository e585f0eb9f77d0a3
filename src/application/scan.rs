//! Scan action - collects GitHub libraries from a project's manifests.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use log::info;
use serde::Serialize;

use crate::config::Config;
use crate::library::extract::extract;
use crate::library::{GitHubLibrary, LicenseType};
use crate::manifest::pattern::PatternCatalog;
use crate::manifest::{Manifest, ManifestKind};
use crate::runtime::Runtime;

/// Output format for the scan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Scan action - extracts libraries from every supported manifest in a
/// project directory.
pub struct ScanAction<'a, R: Runtime> {
    runtime: &'a R,
    project_root: PathBuf,
}

impl<'a, R: Runtime> ScanAction<'a, R> {
    pub fn new(runtime: &'a R, project_root: PathBuf) -> Self {
        Self {
            runtime,
            project_root,
        }
    }

    /// Collect libraries from all supported dialects, in dialect scan order
    /// and manifest appearance order within each dialect.
    ///
    /// Entries are not deduplicated: a library declared in two manifests
    /// appears twice, and merging is left to consumers.
    pub fn collect_libraries(
        &self,
        catalog: &PatternCatalog,
        config: &Config,
    ) -> Result<Vec<GitHubLibrary>> {
        ensure!(
            self.runtime.is_dir(&self.project_root),
            "{} is not a directory",
            self.project_root.display()
        );

        let mut libraries = Vec::new();
        for kind in ManifestKind::ALL {
            let manifest = Manifest::load(self.runtime, &self.project_root, kind);
            let found = extract(&manifest, &config.renames, catalog)?;
            info!("{}: {} libraries", kind, found.len());
            libraries.extend(found);
        }
        Ok(libraries)
    }
}

/// One entry of the rendered report. The source locator is recomputed from
/// the record at render time.
#[derive(Serialize)]
struct ReportEntry<'a> {
    owner: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_specified: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    license: LicenseType,
    source: String,
}

impl<'a> From<&'a GitHubLibrary> for ReportEntry<'a> {
    fn from(library: &'a GitHubLibrary) -> Self {
        Self {
            owner: &library.owner,
            name: &library.name,
            name_specified: library.name_specified.as_deref(),
            version: library.version.as_deref(),
            license: library.license_type,
            source: library.source_url(),
        }
    }
}

/// Render collected libraries in the requested format.
pub fn render(libraries: &[GitHubLibrary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(libraries)),
        OutputFormat::Json => {
            let entries: Vec<ReportEntry> = libraries.iter().map(Into::into).collect();
            let mut out = serde_json::to_string_pretty(&entries)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(libraries: &[GitHubLibrary]) -> String {
    let mut out = String::new();
    for library in libraries {
        let mut line = format!("{}/{}", library.owner, library.name);
        if let Some(renamed) = &library.name_specified {
            line.push_str(&format!(" (as {})", renamed));
        }
        if let Some(version) = &library.version {
            line.push_str(&format!(" {}", version));
        }
        line.push_str(&format!(
            " [{}] {}",
            library.license_type,
            library.source_url()
        ));
        out.push_str(&line);
        out.push('\n');
    }
    out
}
