//! Parsing of repeatable FILE regions into auxiliary artifacts.

use log::debug;

use crate::extract::markers;
use crate::grammar::{Region, FILE_HEADER_KEYS, MIN_FILE_BODY_LEN};
use crate::models::{ArtifactKind, AuxiliaryArtifact};

/// Every FILE region in the response, in order of appearance. Entries with
/// near-empty bodies are dropped as placeholders.
pub fn extract_files(text: &str) -> Vec<AuxiliaryArtifact> {
    markers::find_all_regions(text, Region::File)
        .iter()
        .filter_map(|interior| parse_file_region(interior))
        .collect()
}

/// Split one FILE region into its `key: value` header and its body.
/// The header is the leading run of lines whose key belongs to the fixed
/// vocabulary; the first line that is not such a pair starts the body,
/// which keeps its original whitespace.
fn parse_file_region(interior: &str) -> Option<AuxiliaryArtifact> {
    let mut filename = String::new();
    let mut description = String::new();
    let mut kind = ArtifactKind::Helper;

    let mut lines = interior.lines().peekable();
    while let Some(line) = lines.peek() {
        let Some((key, value)) = header_pair(line) else {
            break;
        };
        match key.as_str() {
            "filename" => filename = value,
            "description" => description = value,
            "kind" => kind = ArtifactKind::parse(&value),
            _ => unreachable!("header_pair only returns vocabulary keys"),
        }
        lines.next();
    }

    let body_lines: Vec<&str> = lines
        .skip_while(|line| line.trim().is_empty())
        .collect();
    let content = body_lines.join("\n");

    if content.trim().len() < MIN_FILE_BODY_LEN {
        debug!(
            "discarding placeholder file entry {:?} ({} content bytes)",
            filename,
            content.trim().len()
        );
        return None;
    }

    Some(AuxiliaryArtifact {
        filename,
        content,
        description,
        kind,
    })
}

/// `key: value` with a key from the fixed header vocabulary, or `None`.
fn header_pair(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim().to_ascii_lowercase();
    if FILE_HEADER_KEYS.contains(&key.as_str()) {
        Some((key, value.trim().to_string()))
    } else {
        None
    }
}
