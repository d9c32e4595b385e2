//! Derives coarse document metadata from extracted content. Deterministic
//! and free of hidden state: the same document always classifies the same
//! way, and model-reported numbers are never consulted.

use log::debug;

use crate::models::{ComplexityTier, Document};

const ADVANCED_LINES: usize = 200;
const ADVANCED_FUNCTIONS: usize = 8;
const ADVANCED_ARTIFACTS: usize = 3;
const BEGINNER_LINES: usize = 50;
const BEGINNER_FUNCTIONS: usize = 2;

/// Recompute the derived metadata fields in place: line count, artifact
/// count, and complexity tier.
pub fn classify(doc: &mut Document) {
    let lines = doc.primary_artifact.lines().count();
    let functions = doc.code_structure.functions.len();
    let artifacts = 1 + doc.auxiliary_artifacts.len();

    doc.metadata.estimated_lines = lines;
    doc.metadata.artifact_count = artifacts;
    doc.metadata.complexity = tier(lines, functions, artifacts);

    debug!(
        "classified document: {} lines, {} functions, {} artifacts -> {:?}",
        lines, functions, artifacts, doc.metadata.complexity
    );
}

fn tier(lines: usize, functions: usize, artifacts: usize) -> ComplexityTier {
    if lines > ADVANCED_LINES || functions > ADVANCED_FUNCTIONS || artifacts > ADVANCED_ARTIFACTS {
        ComplexityTier::Advanced
    } else if lines < BEGINNER_LINES && functions <= BEGINNER_FUNCTIONS && artifacts == 1 {
        ComplexityTier::Beginner
    } else {
        ComplexityTier::Intermediate
    }
}
