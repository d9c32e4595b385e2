use serde::{Deserialize, Serialize};

/// Human-oriented documentation extracted from a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    pub description: String,
    /// Literal invocation strings, in order of appearance.
    pub usage_examples: Vec<String>,
    pub features: Vec<String>,
    pub notes: Vec<String>,
    pub installation: Vec<String>,
    /// Free-text description of configuration concerns.
    pub configuration: String,
}

/// A declared function of the generated script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSummary {
    pub name: String,
    pub description: String,
    pub parameters: Vec<String>,
}

/// Declared structure of the generated script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStructure {
    pub functions: Vec<FunctionSummary>,
    /// Named logical sections (e.g. "Configuration", "Main Logic").
    pub sections: Vec<String>,
}

/// Testing guidance extracted from the TESTING region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestingInfo {
    pub test_cases: Vec<String>,
    pub sample_input: String,
    pub expected_output: String,
}

impl TestingInfo {
    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
            && self.sample_input.is_empty()
            && self.expected_output.is_empty()
    }
}
