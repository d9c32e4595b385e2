use std::fs;

use chrono::Utc;

use crate::classifier::classify;
use crate::extract::extract;
use crate::materializer::{materialize, DEFAULT_PRIMARY_FILENAME};
use crate::models::Document;
use crate::tests::{sample_response, setup};

fn accepted_document() -> Document {
    let mut doc = extract(&sample_response());
    classify(&mut doc);
    doc.metadata.model = "test-model".to_string();
    doc.metadata.generated_at = Utc::now();
    doc
}

#[test]
fn writes_primary_first_then_auxiliaries_in_order() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let doc = accepted_document();

    let report = materialize(&doc, dir.path(), None);

    assert!(report.is_complete());
    assert_eq!(report.written.len(), 3);
    assert_eq!(
        report.written[0].file_name().unwrap(),
        DEFAULT_PRIMARY_FILENAME
    );
    assert_eq!(report.written[1].file_name().unwrap(), "wordcount_config.pl");
    assert_eq!(report.written[2].file_name().unwrap(), "basic.t");
}

#[test]
fn enforces_script_extension() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let doc = accepted_document();

    let report = materialize(&doc, dir.path(), Some("wordcount"));
    assert_eq!(report.written[0].file_name().unwrap(), "wordcount.pl");

    let report = materialize(&doc, dir.path(), Some("named.pl"));
    assert_eq!(report.written[0].file_name().unwrap(), "named.pl");
}

#[test]
fn primary_header_is_derived_from_the_document() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let doc = accepted_document();

    let report = materialize(&doc, dir.path(), None);
    let written = fs::read_to_string(&report.written[0]).unwrap();

    assert!(written.starts_with("#!/usr/bin/env perl"));
    assert!(written.contains("# Generated by scriptforge"));
    assert!(written.contains("# Model: test-model"));
    assert!(written.contains("# Description: Counts words in a text file"));
    assert!(written.contains("# cpan install Text::CSV"));
    assert!(written.contains("# perl wordcount.pl input.txt"));
    assert!(written.ends_with("sort keys %count;"));
    // The script's own shebang is not duplicated below the header.
    assert_eq!(written.matches("#!/usr/bin/env perl").count(), 1);
}

#[test]
fn auxiliary_header_names_the_file() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let doc = accepted_document();

    let report = materialize(&doc, dir.path(), None);
    let config = fs::read_to_string(&report.written[1]).unwrap();
    assert!(config.starts_with("# wordcount_config.pl (Config) - generated by scriptforge"));
    assert!(config.contains("# default settings"));
    assert!(config.contains("my %config = (min_length => 1);"));
}

#[test]
fn one_failed_write_does_not_stop_the_others() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let doc = accepted_document();
    // Occupy the config artifact's name with a directory so its write fails.
    fs::create_dir(dir.path().join("wordcount_config.pl")).unwrap();

    let report = materialize(&doc, dir.path(), None);

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0]
        .path
        .to_string_lossy()
        .contains("wordcount_config.pl"));
    assert_eq!(
        report.written[0].file_name().unwrap(),
        DEFAULT_PRIMARY_FILENAME
    );
    assert_eq!(report.written[1].file_name().unwrap(), "basic.t");
}

#[test]
fn auxiliary_filenames_cannot_escape_the_target_directory() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let mut doc = accepted_document();
    doc.auxiliary_artifacts[0].filename = "../escape.pl".to_string();

    let report = materialize(&doc, dir.path(), None);

    assert!(report.is_complete());
    assert_eq!(report.written[1].file_name().unwrap(), "escape.pl");
    assert_eq!(report.written[1].parent().unwrap(), dir.path());
    assert!(!dir.path().parent().unwrap().join("escape.pl").exists());
}

#[cfg(unix)]
#[test]
fn executable_bits_follow_artifact_kind() {
    use std::os::unix::fs::PermissionsExt;

    setup();
    let dir = tempfile::tempdir().unwrap();
    let doc = accepted_document();

    let report = materialize(&doc, dir.path(), None);

    let primary_mode = fs::metadata(&report.written[0]).unwrap().permissions().mode();
    assert_ne!(primary_mode & 0o111, 0, "main script must be executable");

    // Config artifacts are data, not programs.
    let config_mode = fs::metadata(&report.written[1]).unwrap().permissions().mode();
    assert_eq!(config_mode & 0o111, 0);

    // Test artifacts run as scripts.
    let test_mode = fs::metadata(&report.written[2]).unwrap().permissions().mode();
    assert_ne!(test_mode & 0o111, 0);
}

#[test]
fn nameless_auxiliary_gets_an_indexed_filename() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let mut doc = accepted_document();
    doc.auxiliary_artifacts[0].filename = String::new();

    let report = materialize(&doc, dir.path(), None);
    assert_eq!(report.written[1].file_name().unwrap(), "additional_1.pl");
}
