pub mod classifier;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod extract;
pub mod generator;
pub mod grammar;
pub mod materializer;
pub mod models;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use classifier::classify;
pub use client::{ClientError, CompletionClient, GeminiClient};
pub use config::{ConfigError, ForgeConfig};
pub use errors::{ForgeError, ForgeResult};
pub use extract::extract;
pub use generator::{FailureReason, GenerationController, DEFAULT_MAX_ATTEMPTS};
pub use grammar::{Region, MIN_FILE_BODY_LEN, MIN_SCRIPT_LEN};
pub use materializer::{materialize, WriteFailure, WriteReport};
pub use models::{
    ArtifactKind, AuxiliaryArtifact, CodeStructure, ComplexityTier, DependencyManifest, Document,
    DocumentMetadata, DocumentStatus, Documentation, FunctionSummary, TestingInfo,
    ThirdPartyModule,
};
