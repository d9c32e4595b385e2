//! Dependency extraction: the labeled table in the DEPENDENCIES region,
//! with an import-scan fallback over the main script when the region is
//! absent.

use log::debug;

use crate::extract::markers;
use crate::grammar::{is_marker_line, strip_list_prefix, Region};
use crate::models::{DependencyManifest, ThirdPartyModule};

/// Perl modules shipped with the interpreter; the import scan files these
/// under core rather than third-party.
const CORE_MODULES: &[&str] = &[
    "Carp",
    "Cwd",
    "Data::Dumper",
    "Encode",
    "Exporter",
    "File::Basename",
    "File::Copy",
    "File::Path",
    "File::Spec",
    "File::Temp",
    "Getopt::Long",
    "IO::Handle",
    "JSON::PP",
    "List::Util",
    "POSIX",
    "Scalar::Util",
    "Time::HiRes",
    "Time::Local",
];

/// Dependency categories recognized in the table, by label.
#[derive(Clone, Copy, PartialEq)]
enum Category {
    Core,
    ThirdParty,
    System,
    Security,
    Tooling,
}

fn category_for_label(label: &str) -> Option<Category> {
    match label.trim().to_ascii_lowercase().as_str() {
        "core" | "core modules" | "builtin" => Some(Category::Core),
        "cpan" | "cpan modules" | "third-party" | "third party" => Some(Category::ThirdParty),
        "system" | "system requirements" => Some(Category::System),
        "security" => Some(Category::Security),
        "tooling" | "tools" => Some(Category::Tooling),
        _ => None,
    }
}

/// Extract the dependency manifest. The labeled table wins when present;
/// otherwise the main script is scanned for `use` statements.
pub fn extract(text: &str, script: &str) -> DependencyManifest {
    match markers::find_region(text, Region::Dependencies) {
        Some(interior) => parse_table(&interior),
        None => {
            debug!("no dependency region, scanning script imports");
            scan_imports(script)
        }
    }
}

/// Line-oriented table: a `Label: entries` line opens a category and may
/// carry comma-separated entries; subsequent unlabeled list lines belong to
/// the open category.
fn parse_table(interior: &str) -> DependencyManifest {
    let mut manifest = DependencyManifest::default();
    let mut current: Option<Category> = None;

    for line in interior.lines() {
        if is_marker_line(line) {
            continue;
        }
        let item = strip_list_prefix(line);
        if item.is_empty() {
            continue;
        }

        let labeled = item
            .split_once(':')
            .and_then(|(label, rest)| category_for_label(label).map(|c| (c, rest)));
        let (category, entries) = match labeled {
            Some((category, rest)) => {
                current = Some(category);
                (category, rest)
            }
            None => match current {
                Some(category) => (category, item),
                // Entry lines before any label carry no category; skip them.
                None => continue,
            },
        };

        for entry in split_entries(entries) {
            push_entry(&mut manifest, category, &entry);
        }
    }
    manifest
}

fn push_entry(manifest: &mut DependencyManifest, category: Category, entry: &str) {
    match category {
        Category::Core => manifest.core.push(entry.to_string()),
        Category::ThirdParty => manifest.third_party.push(parse_third_party_entry(entry)),
        Category::System => manifest.system.push(entry.to_string()),
        Category::Security => manifest.security.push(entry.to_string()),
        Category::Tooling => manifest.tooling.push(entry.to_string()),
    }
}

/// Split comma-separated entries, ignoring commas inside parentheses so a
/// parenthetical purpose may itself contain commas.
fn split_entries(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let entry = text[start..idx].trim();
                if !entry.is_empty() {
                    out.push(entry.to_string());
                }
                start = idx + 1;
            }
            _ => {}
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        out.push(tail.to_string());
    }
    out
}

/// A third-party entry is a module name with an optional parenthetical
/// suffix of the form `(install-directive - purpose)`. Entries without the
/// suffix get a synthesized default install directive.
pub fn parse_third_party_entry(entry: &str) -> ThirdPartyModule {
    let Some(open) = entry.find('(') else {
        return ThirdPartyModule::named(entry.trim());
    };

    let name = entry[..open].trim();
    let suffix = entry[open + 1..].trim_end_matches(')').trim();

    match suffix.split_once(" - ") {
        Some((install, purpose)) => ThirdPartyModule {
            name: name.to_string(),
            install_command: install.trim().to_string(),
            purpose: purpose.trim().to_string(),
        },
        None => ThirdPartyModule {
            name: name.to_string(),
            install_command: suffix.to_string(),
            purpose: String::new(),
        },
    }
}

/// Fallback: collect `use Module;` statements from the script. Pragmas and
/// known core modules are filed as core, the rest as third-party with
/// synthesized install directives.
fn scan_imports(script: &str) -> DependencyManifest {
    let mut manifest = DependencyManifest::default();

    for line in script.lines() {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix("use ") else {
            continue;
        };
        let module: String = rest
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == ':' || *c == '_')
            .collect();
        if module.is_empty() || module.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            continue; // version pragma, e.g. `use 5.010;`
        }
        if is_version_pragma(&module) {
            continue;
        }

        let is_core = CORE_MODULES.contains(&module.as_str())
            || module.chars().next().is_some_and(|c| c.is_lowercase());

        if is_core {
            if !manifest.core.contains(&module) {
                manifest.core.push(module);
            }
        } else if !manifest.third_party.iter().any(|m| m.name == module) {
            manifest.third_party.push(ThirdPartyModule::named(&module));
        }
    }
    manifest
}

fn is_version_pragma(module: &str) -> bool {
    let mut chars = module.chars();
    chars.next() == Some('v') && chars.all(|c| c.is_ascii_digit() || c == '_')
}
