pub mod artifact;
pub mod dependencies;
pub mod document;
pub mod documentation;

// Re-export common model types
pub use artifact::{ArtifactKind, AuxiliaryArtifact};
pub use dependencies::{DependencyManifest, ThirdPartyModule};
pub use document::{ComplexityTier, Document, DocumentMetadata, DocumentStatus};
pub use documentation::{CodeStructure, Documentation, FunctionSummary, TestingInfo};
