use serde::{Deserialize, Serialize};

/// What role a bundled file plays in the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Config,
    Module,
    Test,
    Documentation,
    Helper,
}

impl ArtifactKind {
    /// Parse a declared kind, falling back to `Helper` for anything
    /// unrecognized.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "config" | "configuration" => ArtifactKind::Config,
            "module" | "library" => ArtifactKind::Module,
            "test" | "tests" => ArtifactKind::Test,
            "documentation" | "doc" | "docs" => ArtifactKind::Documentation,
            _ => ArtifactKind::Helper,
        }
    }

    /// Whether files of this kind are meant to be run directly.
    pub fn implies_executable(&self) -> bool {
        matches!(self, ArtifactKind::Helper | ArtifactKind::Test)
    }
}

/// A secondary generated file bundled alongside the main script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryArtifact {
    pub filename: String,
    pub content: String,
    pub description: String,
    pub kind: ArtifactKind,
}
