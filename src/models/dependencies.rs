use serde::{Deserialize, Serialize};

/// A third-party module with its install directive and stated purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPartyModule {
    pub name: String,
    pub install_command: String,
    pub purpose: String,
}

impl ThirdPartyModule {
    /// A module with a synthesized default install directive and no stated
    /// purpose.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            install_command: format!("cpan install {}", name),
            purpose: String::new(),
        }
    }
}

/// Categorized dependencies of the generated script. Every category is an
/// independently populated list; all of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManifest {
    /// Core (builtin) modules.
    pub core: Vec<String>,
    /// Modules that need installing, with directives.
    pub third_party: Vec<ThirdPartyModule>,
    /// System-level requirements (interpreter version, external binaries).
    pub system: Vec<String>,
    /// Security-related requirements.
    pub security: Vec<String>,
    /// Development/ops tooling.
    pub tooling: Vec<String>,
}

impl DependencyManifest {
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
            && self.third_party.is_empty()
            && self.system.is_empty()
            && self.security.is_empty()
            && self.tooling.is_empty()
    }
}
