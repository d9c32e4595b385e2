//! Extraction of a typed [`Document`] from the raw, untrusted response text.
//!
//! The marker-based pass is the primary strategy; a cascade of fallback
//! heuristics recovers the main script from degraded responses. Extraction
//! never fails on malformed input: every region independently degrades to
//! an empty value, and only the total absence of a usable main script
//! surfaces as an error-status document.

pub mod artifacts;
pub mod dependencies;
pub mod lists;
pub mod markers;

use log::{debug, warn};

use crate::grammar::{Region, MIN_SCRIPT_LEN};
use crate::models::Document;

/// Parse one complete response into a document.
///
/// Pure and idempotent: the same input always yields a field-for-field
/// identical document.
pub fn extract(raw_text: &str) -> Document {
    let text = unwrap_outer_fence(raw_text);

    let script = markers::find_region(text, Region::Script)
        .filter(|s| s.trim().len() > MIN_SCRIPT_LEN)
        .or_else(|| {
            debug!("marker pass yielded no usable script, trying fallbacks");
            markers::fallback_script(text)
        })
        .filter(|s| s.trim().len() > MIN_SCRIPT_LEN);

    let Some(script) = script else {
        // Without a main script the document is unusable; skip the
        // remaining regions entirely.
        warn!("no recoverable main script in response ({} bytes)", raw_text.len());
        return Document::unusable();
    };

    let mut doc = Document::with_script(script);

    doc.auxiliary_artifacts = artifacts::extract_files(text);
    doc.dependencies = dependencies::extract(text, &doc.primary_artifact);

    doc.documentation.description =
        markers::find_region(text, Region::Description).unwrap_or_default();
    doc.documentation.usage_examples = lists::extract_list(text, Region::Usage);
    doc.documentation.features = lists::extract_list(text, Region::Features);
    doc.documentation.notes = lists::extract_list(text, Region::Notes);
    doc.documentation.installation = lists::extract_list(text, Region::Installation);
    doc.documentation.configuration =
        markers::find_region(text, Region::Configuration).unwrap_or_default();

    doc.code_structure.functions = lists::extract_functions(text);
    doc.code_structure.sections = lists::extract_list(text, Region::Sections);

    doc.security = lists::extract_list(text, Region::Security);
    doc.testing = lists::extract_testing(text);
    doc.performance = lists::extract_list(text, Region::Performance);
    doc.deployment = lists::extract_list(text, Region::Deployment);
    doc.best_practices = lists::extract_list(text, Region::BestPractices);
    doc.error_handling = lists::extract_list(text, Region::ErrorHandling);

    doc.metadata.estimated_lines = doc.primary_artifact.lines().count();
    doc.metadata.artifact_count = 1 + doc.auxiliary_artifacts.len();

    debug!(
        "extracted document: {} script lines, {} auxiliary artifacts",
        doc.metadata.estimated_lines,
        doc.auxiliary_artifacts.len()
    );
    doc
}

/// When the entire response is wrapped in a single markdown fence, unwrap
/// it before region matching; models habitually do this.
fn unwrap_outer_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return raw;
    }

    let Some(first_newline) = trimmed.find('\n') else {
        return raw;
    };
    let inner = &trimmed[first_newline + 1..];
    let Some(closing) = inner.rfind("```") else {
        return raw;
    };
    // Only unwrap a fence that closes at the very end of the response and
    // actually wraps marker-delimited content; a plain code fence belongs
    // to the fallback cascade instead.
    if !inner[closing + 3..].trim().is_empty() {
        return raw;
    }
    let interior = &inner[..closing];
    if interior.to_ascii_lowercase().contains("### begin ") {
        interior
    } else {
        raw
    }
}
