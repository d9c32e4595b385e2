pub mod extractor_tests;
pub mod materializer_tests;

/// Initialize logging once for the whole test run.
pub fn setup() {
    let _ = env_logger::try_init();
}

/// A well-formed response exercising every region of the grammar.
pub fn sample_response() -> String {
    r#"### BEGIN DESCRIPTION ###
Counts words in a text file and prints a frequency table.
### END DESCRIPTION ###

### BEGIN SCRIPT ###
#!/usr/bin/env perl
use strict;
use warnings;

my %count;
while (my $line = <>) {
    $count{lc $_}++ for split /\s+/, $line;
}
print "$_: $count{$_}\n" for sort keys %count;
### END SCRIPT ###

### BEGIN FILE ###
filename: wordcount_config.pl
description: default settings
kind: config
my %config = (min_length => 1);
1;
### END FILE ###

### BEGIN FILE ###
filename: t/basic.t
description: smoke test
kind: test
use Test::More tests => 1;
ok(1, 'loads');
### END FILE ###

### BEGIN DEPENDENCIES ###
Core: List::Util, File::Spec
CPAN: Text::CSV (cpan install Text::CSV - CSV parsing), JSON::XS
System: perl 5.10+
### END DEPENDENCIES ###

### BEGIN FEATURES ###
1. Reads from stdin or files
2. Case-insensitive counting
### END FEATURES ###

### BEGIN USAGE ###
perl wordcount.pl input.txt
perl wordcount.pl --help
### END USAGE ###

### BEGIN FUNCTIONS ###
count_words: tallies word frequencies - Parameters: line, counts
print_table: renders the frequency table
### END FUNCTIONS ###

### BEGIN SECTIONS ###
- Configuration
- Main Logic
### END SECTIONS ###

### BEGIN TESTING ###
- counts a simple sentence
Sample input: the quick brown fox
Expected output: brown: 1
### END TESTING ###

### BEGIN BEST PRACTICES ###
- use strict and warnings
### END BEST PRACTICES ###

### BEGIN NOTES ###
* counts are whitespace-delimited
### END NOTES ###
"#
    .to_string()
}
