use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::artifact::AuxiliaryArtifact;
use crate::models::dependencies::DependencyManifest;
use crate::models::documentation::{CodeStructure, Documentation, TestingInfo};

/// Outcome of one extraction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// A usable main script was recovered.
    Success,
    /// No main script could be extracted; the document is unusable.
    Error,
}

/// Coarse difficulty tier of the generated script, derived from its size
/// and shape rather than taken from model claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Beginner,
    Intermediate,
    Advanced,
}

/// Metadata attached to a parsed document. Everything here is recomputed
/// from extracted content; nothing is trusted from the raw response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Identifier of the model that produced the response.
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub complexity: ComplexityTier,
    /// Actual line count of the main script.
    pub estimated_lines: usize,
    /// Main script plus auxiliary artifacts.
    pub artifact_count: usize,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        // Extraction is a pure function of the raw text; the controller
        // stamps the real generation time on the accepted document.
        Self {
            model: String::new(),
            generated_at: DateTime::<Utc>::UNIX_EPOCH,
            complexity: ComplexityTier::Intermediate,
            estimated_lines: 0,
            artifact_count: 0,
        }
    }
}

/// The fully parsed, typed result of one generation attempt.
///
/// A document is created fresh per attempt and discarded on retry; partial
/// results never carry over between attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub status: DocumentStatus,
    pub metadata: DocumentMetadata,
    /// The mandatory main script body. Empty only when `status` is `Error`.
    pub primary_artifact: String,
    /// Additional files, in order of appearance in the raw response.
    pub auxiliary_artifacts: Vec<AuxiliaryArtifact>,
    pub dependencies: DependencyManifest,
    pub documentation: Documentation,
    pub code_structure: CodeStructure,
    pub security: Vec<String>,
    pub testing: TestingInfo,
    pub performance: Vec<String>,
    pub deployment: Vec<String>,
    pub best_practices: Vec<String>,
    pub error_handling: Vec<String>,
}

impl Document {
    /// An empty document for a response with no recoverable main script.
    pub fn unusable() -> Self {
        Self {
            status: DocumentStatus::Error,
            metadata: DocumentMetadata::default(),
            primary_artifact: String::new(),
            auxiliary_artifacts: Vec::new(),
            dependencies: DependencyManifest::default(),
            documentation: Documentation::default(),
            code_structure: CodeStructure::default(),
            security: Vec::new(),
            testing: TestingInfo::default(),
            performance: Vec::new(),
            deployment: Vec::new(),
            best_practices: Vec::new(),
            error_handling: Vec::new(),
        }
    }

    /// A success document around a recovered main script; every other
    /// region starts empty and is filled in by later extraction passes.
    pub fn with_script(script: String) -> Self {
        let mut doc = Self::unusable();
        doc.status = DocumentStatus::Success;
        doc.primary_artifact = script;
        doc
    }

    pub fn is_success(&self) -> bool {
        self.status == DocumentStatus::Success
    }
}
