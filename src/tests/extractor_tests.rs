use crate::extract::{dependencies, extract};
use crate::grammar::MIN_SCRIPT_LEN;
use crate::models::{ArtifactKind, DocumentStatus};
use crate::tests::{sample_response, setup};

#[test]
fn well_formed_response_recovers_every_region() {
    setup();
    let doc = extract(&sample_response());

    assert_eq!(doc.status, DocumentStatus::Success);
    assert!(doc.primary_artifact.starts_with("#!/usr/bin/env perl"));
    assert!(doc.primary_artifact.ends_with("sort keys %count;"));

    assert_eq!(
        doc.documentation.description,
        "Counts words in a text file and prints a frequency table."
    );

    // Auxiliary artifacts in order of appearance.
    assert_eq!(doc.auxiliary_artifacts.len(), 2);
    assert_eq!(doc.auxiliary_artifacts[0].filename, "wordcount_config.pl");
    assert_eq!(doc.auxiliary_artifacts[0].kind, ArtifactKind::Config);
    assert_eq!(doc.auxiliary_artifacts[0].description, "default settings");
    assert_eq!(
        doc.auxiliary_artifacts[0].content,
        "my %config = (min_length => 1);\n1;"
    );
    assert_eq!(doc.auxiliary_artifacts[1].filename, "t/basic.t");
    assert_eq!(doc.auxiliary_artifacts[1].kind, ArtifactKind::Test);

    // List prefixes stripped, order preserved.
    assert_eq!(
        doc.documentation.features,
        vec!["Reads from stdin or files", "Case-insensitive counting"]
    );
    assert_eq!(
        doc.documentation.usage_examples,
        vec!["perl wordcount.pl input.txt", "perl wordcount.pl --help"]
    );
    assert_eq!(doc.documentation.notes, vec!["counts are whitespace-delimited"]);
    assert_eq!(doc.code_structure.sections, vec!["Configuration", "Main Logic"]);
    assert_eq!(doc.best_practices, vec!["use strict and warnings"]);

    // Functions key-value lines.
    assert_eq!(doc.code_structure.functions.len(), 2);
    let count_words = &doc.code_structure.functions[0];
    assert_eq!(count_words.name, "count_words");
    assert_eq!(count_words.description, "tallies word frequencies");
    assert_eq!(count_words.parameters, vec!["line", "counts"]);
    let print_table = &doc.code_structure.functions[1];
    assert_eq!(print_table.name, "print_table");
    assert!(print_table.parameters.is_empty());

    // Testing region sub-keys.
    assert_eq!(doc.testing.test_cases, vec!["counts a simple sentence"]);
    assert_eq!(doc.testing.sample_input, "the quick brown fox");
    assert_eq!(doc.testing.expected_output, "brown: 1");

    // Dependency table.
    assert_eq!(doc.dependencies.core, vec!["List::Util", "File::Spec"]);
    assert_eq!(doc.dependencies.system, vec!["perl 5.10+"]);
    assert_eq!(doc.dependencies.third_party.len(), 2);
    let csv = &doc.dependencies.third_party[0];
    assert_eq!(csv.name, "Text::CSV");
    assert_eq!(csv.install_command, "cpan install Text::CSV");
    assert_eq!(csv.purpose, "CSV parsing");
    let json = &doc.dependencies.third_party[1];
    assert_eq!(json.name, "JSON::XS");
    assert_eq!(json.install_command, "cpan install JSON::XS");
    assert!(json.purpose.is_empty());
}

#[test]
fn extraction_is_idempotent() {
    setup();
    let raw = sample_response();
    assert_eq!(extract(&raw), extract(&raw));
}

#[test]
fn marker_matching_is_case_insensitive() {
    setup();
    let raw = sample_response().to_ascii_lowercase();
    let doc = extract(&raw);
    assert_eq!(doc.status, DocumentStatus::Success);
    assert!(doc.primary_artifact.contains("use strict;"));
}

#[test]
fn fenced_code_block_fallback() {
    setup();
    let raw = format!(
        "Here is the script you asked for:\n\n```perl\n{}\n```\n\nHope this helps!",
        "#!/usr/bin/env perl\nuse strict;\nuse warnings;\nprint \"hello world\\n\" for 1..10;\n"
    );
    let doc = extract(&raw);
    assert_eq!(doc.status, DocumentStatus::Success);
    assert!(doc.primary_artifact.contains("use strict;"));
    assert!(!doc.primary_artifact.contains("```"));
}

#[test]
fn fenced_block_without_code_signal_is_rejected() {
    setup();
    let raw = format!(
        "```\n{}\n```",
        "this is a long paragraph of prose that carries no code at all, just words"
    );
    let doc = extract(&raw);
    assert_eq!(doc.status, DocumentStatus::Error);
}

#[test]
fn shebang_scan_fallback() {
    setup();
    let raw = "Some preamble text.\n#!/usr/bin/perl\nuse strict;\nuse warnings;\n\
               my $total = 0;\n$total += $_ for 1..100;\nprint \"$total\\n\";\n";
    let doc = extract(raw);
    assert_eq!(doc.status, DocumentStatus::Success);
    assert!(doc.primary_artifact.starts_with("#!/usr/bin/perl"));
    assert!(doc.primary_artifact.ends_with("print \"$total\\n\";"));
}

#[test]
fn threshold_boundary() {
    setup();
    // Exactly threshold-1 characters of marker content: the cascade runs
    // and, with nothing to fall back on, the document is unusable.
    let short = format!(
        "### BEGIN SCRIPT ###\n{}\n### END SCRIPT ###",
        "x".repeat(MIN_SCRIPT_LEN - 1)
    );
    assert_eq!(extract(&short).status, DocumentStatus::Error);

    // Threshold+1 characters are accepted directly from the marker pass.
    let long = format!(
        "### BEGIN SCRIPT ###\n{}\n### END SCRIPT ###",
        "x".repeat(MIN_SCRIPT_LEN + 1)
    );
    let doc = extract(&long);
    assert_eq!(doc.status, DocumentStatus::Success);
    assert_eq!(doc.primary_artifact.len(), MIN_SCRIPT_LEN + 1);
}

#[test]
fn error_status_short_circuits_other_regions() {
    setup();
    let raw = "### BEGIN DESCRIPTION ###\nA description without any script.\n\
               ### END DESCRIPTION ###\n### BEGIN FEATURES ###\n- a feature\n\
               ### END FEATURES ###";
    let doc = extract(raw);
    assert_eq!(doc.status, DocumentStatus::Error);
    assert!(doc.primary_artifact.is_empty());
    assert!(doc.documentation.description.is_empty());
    assert!(doc.documentation.features.is_empty());
}

#[test]
fn duplicate_singleton_region_first_match_wins() {
    setup();
    let raw = format!(
        "### BEGIN DESCRIPTION ###\nfirst description\n### END DESCRIPTION ###\n\
         ### BEGIN DESCRIPTION ###\nsecond description\n### END DESCRIPTION ###\n\
         ### BEGIN SCRIPT ###\n{}\n### END SCRIPT ###",
        "use strict;\nuse warnings;\nprint \"enough content to pass the bar\\n\";"
    );
    let doc = extract(&raw);
    assert_eq!(doc.documentation.description, "first description");
}

#[test]
fn placeholder_auxiliary_artifacts_are_discarded() {
    setup();
    let raw = format!(
        "### BEGIN SCRIPT ###\n{}\n### END SCRIPT ###\n\
         ### BEGIN FILE ###\nfilename: stub.pl\nkind: helper\n1;\n### END FILE ###\n\
         ### BEGIN FILE ###\nfilename: real.pl\nkind: helper\nmy $x = 42;\nprint $x;\n### END FILE ###",
        "use strict;\nuse warnings;\nprint \"enough content to pass the bar\\n\";"
    );
    let doc = extract(&raw);
    assert_eq!(doc.auxiliary_artifacts.len(), 1);
    assert_eq!(doc.auxiliary_artifacts[0].filename, "real.pl");
}

#[test]
fn missing_dependency_region_falls_back_to_import_scan() {
    setup();
    let raw = format!(
        "### BEGIN SCRIPT ###\n{}\n### END SCRIPT ###",
        "#!/usr/bin/env perl\nuse strict;\nuse warnings;\nuse List::Util qw(sum);\n\
         use LWP::UserAgent;\nmy $ua = LWP::UserAgent->new;\nprint sum(1..10);"
    );
    let doc = extract(&raw);
    assert_eq!(doc.dependencies.core, vec!["strict", "warnings", "List::Util"]);
    assert_eq!(doc.dependencies.third_party.len(), 1);
    assert_eq!(doc.dependencies.third_party[0].name, "LWP::UserAgent");
    assert_eq!(
        doc.dependencies.third_party[0].install_command,
        "cpan install LWP::UserAgent"
    );
}

#[test]
fn third_party_entry_parenthetical_forms() {
    let module =
        dependencies::parse_third_party_entry("Foo::Bar (cpan install Foo::Bar - utility module)");
    assert_eq!(module.name, "Foo::Bar");
    assert_eq!(module.install_command, "cpan install Foo::Bar");
    assert_eq!(module.purpose, "utility module");

    let bare = dependencies::parse_third_party_entry("Foo::Bar");
    assert_eq!(bare.name, "Foo::Bar");
    assert_eq!(bare.install_command, "cpan install Foo::Bar");
    assert!(bare.purpose.is_empty());
}

#[test]
fn outer_fence_around_marker_response_is_unwrapped() {
    setup();
    let raw = format!("```\n{}\n```", sample_response());
    let doc = extract(&raw);
    assert_eq!(doc.status, DocumentStatus::Success);
    assert!(doc.primary_artifact.contains("use strict;"));
    assert_eq!(doc.auxiliary_artifacts.len(), 2);
}
