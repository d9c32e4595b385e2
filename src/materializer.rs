//! Writes an accepted document to disk: the main script first, then each
//! auxiliary artifact in document order, each prefixed with a provenance
//! header. Writes are independent: one failure never rolls back or stops
//! the others.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::models::{AuxiliaryArtifact, Document};

pub const DEFAULT_PRIMARY_FILENAME: &str = "scriptforge_generated.pl";
const SCRIPT_EXTENSION: &str = ".pl";
const DESCRIPTION_TRUNCATE: usize = 200;
const HEADER_RULE: &str = "# ==================================================";

/// One file that could not be written.
#[derive(Debug)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Per-file outcome of a materialization: written paths in write order
/// (main script first), plus independent failure reports.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<WriteFailure>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write the document's artifacts under `target_dir`.
///
/// The main script filename comes from `primary_filename` when given,
/// otherwise the default, with the `.pl` suffix enforced either way.
pub fn materialize(
    doc: &Document,
    target_dir: &Path,
    primary_filename: Option<&str>,
) -> WriteReport {
    let mut report = WriteReport::default();

    let filename = resolve_primary_filename(primary_filename);
    let primary_path = target_dir.join(&filename);

    // The interpreter directive has to stay on the first line, so the
    // provenance header slots in between it and the rest of the script.
    let (shebang, script_body) = split_shebang(&doc.primary_artifact);
    let body = format!("{}\n{}{}", shebang, primary_header(doc), script_body);
    write_artifact(&primary_path, &body, true, &mut report);

    for (index, artifact) in doc.auxiliary_artifacts.iter().enumerate() {
        // Declared names are model output; keep only the final path
        // component so every write lands inside the target directory.
        let name = match Path::new(artifact.filename.trim())
            .file_name()
            .and_then(|n| n.to_str())
        {
            Some(name) => name.to_string(),
            None => format!("additional_{}.pl", index + 1),
        };
        let path = target_dir.join(name);
        let body = format!("{}{}", auxiliary_header(artifact), artifact.content);
        write_artifact(&path, &body, artifact.kind.implies_executable(), &mut report);
    }

    info!(
        "materialized {} of {} artifacts under {}",
        report.written.len(),
        1 + doc.auxiliary_artifacts.len(),
        target_dir.display()
    );
    report
}

fn resolve_primary_filename(primary_filename: Option<&str>) -> String {
    let name = primary_filename
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_PRIMARY_FILENAME);
    if name.ends_with(SCRIPT_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, SCRIPT_EXTENSION)
    }
}

fn write_artifact(path: &Path, body: &str, executable: bool, report: &mut WriteReport) {
    match fs::write(path, body) {
        Ok(()) => {
            debug!("wrote {}", path.display());
            if executable {
                mark_executable(path);
            }
            report.written.push(path.to_path_buf());
        }
        Err(e) => {
            warn!("failed to write {}: {}", path.display(), e);
            report.failures.push(WriteFailure {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    }
}

/// Set the execute bit where the platform supports it. Failures are
/// non-fatal and platform-dependent.
#[cfg(unix)]
fn mark_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o755)) {
        warn!("could not mark {} executable: {}", path.display(), e);
    }
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) {}

/// The script's own interpreter directive and the remainder of its body,
/// synthesizing the default directive when the script has none.
fn split_shebang(script: &str) -> (&str, &str) {
    if script.starts_with("#!") {
        match script.split_once('\n') {
            Some((first, rest)) => (first, rest),
            None => (script, ""),
        }
    } else {
        ("#!/usr/bin/env perl", script)
    }
}

/// Provenance header for the main script. Every field is derived from the
/// document; nothing is free-typed.
fn primary_header(doc: &Document) -> String {
    let mut header = String::new();
    header.push_str("# Generated by scriptforge\n");
    header.push_str(&format!("# Model: {}\n", doc.metadata.model));
    header.push_str(&format!(
        "# Generated: {}\n",
        doc.metadata.generated_at.to_rfc3339()
    ));
    header.push_str(HEADER_RULE);
    header.push('\n');

    let description = doc.documentation.description.trim();
    if !description.is_empty() {
        header.push_str(&format!("# Description: {}\n", truncate(description)));
    }

    if !doc.dependencies.third_party.is_empty() {
        header.push_str("#\n# Required CPAN modules:\n");
        for module in &doc.dependencies.third_party {
            header.push_str(&format!("# {}\n", module.install_command));
        }
    }

    if !doc.documentation.usage_examples.is_empty() {
        header.push_str("#\n# Usage examples:\n");
        for example in &doc.documentation.usage_examples {
            header.push_str(&format!("# {}\n", example));
        }
    }

    header.push_str(HEADER_RULE);
    header.push_str("\n\n");
    header
}

/// Smaller provenance header for an auxiliary artifact.
fn auxiliary_header(artifact: &AuxiliaryArtifact) -> String {
    let mut header = format!(
        "# {} ({:?}) - generated by scriptforge\n",
        artifact.filename.trim(),
        artifact.kind
    );
    if !artifact.description.trim().is_empty() {
        header.push_str(&format!("# {}\n", artifact.description.trim()));
    }
    header.push('\n');
    header
}

fn truncate(text: &str) -> String {
    if text.len() <= DESCRIPTION_TRUNCATE {
        return text.to_string();
    }
    let mut cut = DESCRIPTION_TRUNCATE;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}
