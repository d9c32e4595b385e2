//! The section grammar: the contract a generated response is expected to
//! follow. A response is a sequence of marker-delimited regions of the form
//! `### BEGIN <TOKEN> ###` ... `### END <TOKEN> ###`. The grammar itself is
//! pure data; all behavior lives in the extractor.

/// Minimum trimmed length of the main script before it counts as real
/// content. Anything at or below this triggers the fallback cascade.
pub const MIN_SCRIPT_LEN: usize = 50;

/// Minimum trimmed body length for an additional file. Shorter bodies are
/// treated as placeholders and dropped.
pub const MIN_FILE_BODY_LEN: usize = 10;

/// Header keys recognized at the top of a repeatable FILE region.
pub const FILE_HEADER_KEYS: &[&str] = &["filename", "description", "kind"];

/// Signals that a fenced code block holds real Perl rather than prose.
pub const PERL_CODE_SIGNALS: &[&str] = &[
    "#!/usr/bin/env perl",
    "#!/usr/bin/perl",
    "use strict",
    "use warnings",
    "my $",
    "sub ",
];

/// Named regions a response may contain.
///
/// Every region except [`Region::File`] is a singleton: if a response
/// carries the same singleton region twice, the first occurrence wins and
/// later ones are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Brief description of what the generated script does.
    Description,
    /// The main Perl script. The only mandatory region.
    Script,
    /// An additional bundled file. Repeatable; each occurrence starts with
    /// `key: value` header lines (filename, description, kind) followed by
    /// the file body.
    File,
    /// Categorized dependency table.
    Dependencies,
    Features,
    /// Literal invocation examples, one per line.
    Usage,
    Notes,
    Installation,
    Configuration,
    /// `name: description - Parameters: a, b` lines.
    Functions,
    /// Named logical sections of the script.
    Sections,
    Security,
    Testing,
    Performance,
    Deployment,
    BestPractices,
    ErrorHandling,
}

impl Region {
    /// All singleton regions, in the order they are expected to appear.
    pub fn singletons() -> &'static [Region] {
        &[
            Region::Description,
            Region::Script,
            Region::Dependencies,
            Region::Features,
            Region::Usage,
            Region::Notes,
            Region::Installation,
            Region::Configuration,
            Region::Functions,
            Region::Sections,
            Region::Security,
            Region::Testing,
            Region::Performance,
            Region::Deployment,
            Region::BestPractices,
            Region::ErrorHandling,
        ]
    }

    /// The marker token naming this region.
    pub fn token(&self) -> &'static str {
        match self {
            Region::Description => "DESCRIPTION",
            Region::Script => "SCRIPT",
            Region::File => "FILE",
            Region::Dependencies => "DEPENDENCIES",
            Region::Features => "FEATURES",
            Region::Usage => "USAGE",
            Region::Notes => "NOTES",
            Region::Installation => "INSTALLATION",
            Region::Configuration => "CONFIGURATION",
            Region::Functions => "FUNCTIONS",
            Region::Sections => "SECTIONS",
            Region::Security => "SECURITY",
            Region::Testing => "TESTING",
            Region::Performance => "PERFORMANCE",
            Region::Deployment => "DEPLOYMENT",
            Region::BestPractices => "BEST PRACTICES",
            Region::ErrorHandling => "ERROR HANDLING",
        }
    }

    pub fn start_marker(&self) -> String {
        format!("### BEGIN {} ###", self.token())
    }

    pub fn end_marker(&self) -> String {
        format!("### END {} ###", self.token())
    }

    pub fn is_repeatable(&self) -> bool {
        matches!(self, Region::File)
    }
}

/// Strip the list-prefix vocabulary from one line of list-like content:
/// bullet markers (`-`, `*`, `•`) and numbered prefixes (`1.`, `1)`).
/// Returns the trimmed remainder.
pub fn strip_list_prefix(line: &str) -> &str {
    let trimmed = line.trim();

    for bullet in ["- ", "* ", "• "] {
        if let Some(rest) = trimmed.strip_prefix(bullet) {
            return rest.trim();
        }
    }
    if trimmed == "-" || trimmed == "*" || trimmed == "•" {
        return "";
    }

    // Numbered prefix: digits followed by '.' or ')', then whitespace or
    // end of line. A decimal number like "3.5" is content, not a prefix.
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &trimmed[digits..];
        if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            if stripped.is_empty() || stripped.starts_with(char::is_whitespace) {
                return stripped.trim();
            }
        }
    }

    trimmed
}

/// True for lines that are grammar scaffolding (stray markers) rather than
/// content; the extractor discards these inside list regions.
pub fn is_marker_line(line: &str) -> bool {
    line.trim_start().starts_with("###")
}
