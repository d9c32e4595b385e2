//! Marker-based region location plus the fallback cascade for the main
//! script. Marker matching is case-insensitive and tolerant of surrounding
//! whitespace; all byte offsets come from an ASCII-lowercased shadow of the
//! text, which preserves lengths.

use log::debug;

use crate::grammar::{Region, MIN_SCRIPT_LEN, PERL_CODE_SIGNALS};

/// Case-insensitive substring search starting at `from`.
fn find_ci(haystack_lower: &str, needle_lower: &str, from: usize) -> Option<usize> {
    haystack_lower.get(from..)?.find(needle_lower).map(|i| from + i)
}

/// Interior of the first occurrence of a region: first start marker, then
/// the first end marker after it. Returns the trimmed interior, or `None`
/// when the pair is absent or the end marker never follows the start.
pub fn find_region(text: &str, region: Region) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    let start_marker = region.start_marker().to_ascii_lowercase();
    let end_marker = region.end_marker().to_ascii_lowercase();

    let start = find_ci(&lower, &start_marker, 0)?;
    let interior_start = start + start_marker.len();
    let end = find_ci(&lower, &end_marker, interior_start)?;

    Some(text[interior_start..end].trim().to_string())
}

/// All occurrences of a repeatable region, in order of appearance.
pub fn find_all_regions(text: &str, region: Region) -> Vec<String> {
    let lower = text.to_ascii_lowercase();
    let start_marker = region.start_marker().to_ascii_lowercase();
    let end_marker = region.end_marker().to_ascii_lowercase();

    let mut out = Vec::new();
    let mut cursor = 0;
    while let Some(start) = find_ci(&lower, &start_marker, cursor) {
        let interior_start = start + start_marker.len();
        let Some(end) = find_ci(&lower, &end_marker, interior_start) else {
            break;
        };
        out.push(text[interior_start..end].trim().to_string());
        cursor = end + end_marker.len();
    }
    out
}

/// Fallback cascade for the main script, tried only when the marker pass
/// yields nothing usable: fenced code blocks first, then a shebang scan.
pub fn fallback_script(text: &str) -> Option<String> {
    if let Some(script) = fenced_block_script(text) {
        debug!("recovered main script from a fenced code block");
        return Some(script);
    }
    if let Some(script) = shebang_script(text) {
        debug!("recovered main script from a shebang scan");
        return Some(script);
    }
    None
}

/// First fenced code block tagged `perl` (or untagged) whose content is over
/// the minimum length and carries at least one real-code signal.
fn fenced_block_script(text: &str) -> Option<String> {
    let mut in_block = false;
    let mut accept_tag = false;
    let mut current = String::new();

    for line in text.lines() {
        if let Some(rest) = line.trim_start().strip_prefix("```") {
            if in_block {
                if accept_tag && qualifies_as_script(&current) {
                    return Some(current.trim_end().to_string());
                }
                current.clear();
                in_block = false;
            } else {
                let tag = rest.trim().to_ascii_lowercase();
                accept_tag = tag.is_empty() || tag == "perl";
                in_block = true;
            }
            continue;
        }
        if in_block {
            current.push_str(line);
            current.push('\n');
        }
    }
    None
}

fn qualifies_as_script(content: &str) -> bool {
    content.trim().len() > MIN_SCRIPT_LEN
        && PERL_CODE_SIGNALS.iter().any(|signal| content.contains(signal))
}

/// Scan for an interpreter directive line naming perl and collect everything
/// from it up to the next well-formed end marker or end of text.
fn shebang_script(text: &str) -> Option<String> {
    let mut collected: Option<String> = None;

    for line in text.lines() {
        match collected.as_mut() {
            None => {
                let trimmed = line.trim_start();
                if trimmed.starts_with("#!") && trimmed.contains("perl") {
                    collected = Some(format!("{}\n", trimmed));
                }
            }
            Some(script) => {
                let lower = line.trim().to_ascii_lowercase();
                if lower.starts_with("### end ") && lower.ends_with("###") {
                    break;
                }
                script.push_str(line);
                script.push('\n');
            }
        }
    }

    collected.map(|s| s.trim_end().to_string())
}
