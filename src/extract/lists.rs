//! List-region and key-value extraction: feature lists, notes, declared
//! functions, testing guidance.

use crate::extract::markers;
use crate::grammar::{is_marker_line, strip_list_prefix, Region};
use crate::models::{FunctionSummary, TestingInfo};

/// Extract a list-like region: one item per line, list prefixes stripped,
/// marker and blank lines discarded, order preserved.
pub fn extract_list(text: &str, region: Region) -> Vec<String> {
    let Some(interior) = markers::find_region(text, region) else {
        return Vec::new();
    };
    lines_of(&interior)
}

fn lines_of(interior: &str) -> Vec<String> {
    interior
        .lines()
        .filter(|line| !is_marker_line(line))
        .map(strip_list_prefix)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// FUNCTIONS region: `name: description - Parameters: p1, p2` per line.
/// Lines that do not match the pattern are skipped, not fatal.
pub fn extract_functions(text: &str) -> Vec<FunctionSummary> {
    let Some(interior) = markers::find_region(text, Region::Functions) else {
        return Vec::new();
    };

    interior
        .lines()
        .map(strip_list_prefix)
        .filter_map(parse_function_line)
        .collect()
}

fn parse_function_line(line: &str) -> Option<FunctionSummary> {
    let (name, rest) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let (description, parameters) = match rest.split_once("Parameters:") {
        Some((desc, params)) => {
            let desc = desc.trim().trim_end_matches('-').trim();
            let params = params
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            (desc.to_string(), params)
        }
        None => (rest.trim().to_string(), Vec::new()),
    };

    Some(FunctionSummary {
        name: name.to_string(),
        description,
        parameters,
    })
}

/// TESTING region: list lines become test cases; `Sample input:` and
/// `Expected output:` key lines are captured separately.
pub fn extract_testing(text: &str) -> TestingInfo {
    let Some(interior) = markers::find_region(text, Region::Testing) else {
        return TestingInfo::default();
    };

    let mut info = TestingInfo::default();
    for line in interior.lines() {
        if is_marker_line(line) {
            continue;
        }
        let item = strip_list_prefix(line);
        if item.is_empty() {
            continue;
        }

        let lower = item.to_ascii_lowercase();
        if let Some(rest) = lower.strip_prefix("sample input:") {
            info.sample_input = item[item.len() - rest.len()..].trim().to_string();
        } else if let Some(rest) = lower.strip_prefix("expected output:") {
            info.expected_output = item[item.len() - rest.len()..].trim().to_string();
        } else {
            info.test_cases.push(item.to_string());
        }
    }
    info
}
