//! Application layer - use cases that coordinate extraction.
//!
//! This layer wires manifests, configuration and the pattern catalog into
//! the extraction engine and renders the results for output.

mod scan;

pub use scan::{OutputFormat, ScanAction, render};
