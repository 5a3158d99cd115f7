//! Behavioral specs for substitution output.
//!
//! Tests that whiplace correctly handles:
//! - longest-match precedence and literal passthrough
//! - stdin, file, and multiple inputs
//! - line chunking versus whole-input chunking
//! - writing to an output file

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

fn project_with_keys(keys: &str) -> Project {
    let project = Project::empty();
    project.file("keys.tsv", keys);
    project
}

// =============================================================================
// MATCHING
// =============================================================================

/// > Longest registered pattern wins at each position
#[test]
fn longest_match_wins() {
    let project = project_with_keys("a\tX\nab\tY\n");
    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv"])
        .stdin("ab ac\n")
        .passes()
        .stdout_eq("Y Xc\n");
}

/// > A strict prefix of a pattern is passed through
#[test]
fn partial_match_is_passed_through() {
    let project = project_with_keys("abc\tZ\n");
    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv"])
        .stdin("ab\n")
        .passes()
        .stdout_eq("ab\n");
}

/// > Unmatched text around a match is kept
#[test]
fn literal_passthrough() {
    let project = project_with_keys("xy\tQ\n");
    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv"])
        .stdin("axyb\n")
        .passes()
        .stdout_eq("aQb\n");
}

/// > An empty pattern file leaves input unchanged
#[test]
fn empty_pattern_file_is_identity() {
    let project = project_with_keys("");
    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv"])
        .stdin("unchanged\ntext")
        .passes()
        .stdout_eq("unchanged\ntext");
}

/// > Bytes that are not UTF-8 are passed through untouched
#[test]
fn non_utf8_input_passes_through() {
    let project = project_with_keys("x\ty\n");
    let result = whiplace()
        .pwd(project.path())
        .args(&["keys.tsv"])
        .stdin(b"\xff x \xfe\n".to_vec())
        .passes();
    assert_eq!(result.stdout_bytes(), b"\xff y \xfe\n");
}

/// > Fixture pattern set applied to a sample text
#[test]
fn fixture_sample() {
    let dir = fixture("basic");
    let expected = std::fs::read_to_string(dir.join("expected.txt")).unwrap();
    let project = Project::empty();

    whiplace()
        .pwd(project.path())
        .arg_path(&dir.join("keys.tsv"))
        .arg_path(&dir.join("input.txt"))
        .passes()
        .stdout_eq(&expected);
}

// =============================================================================
// INPUTS
// =============================================================================

/// > Inputs are processed in order into one output
#[test]
fn multiple_inputs_in_order() {
    let project = project_with_keys("one\t1\ntwo\t2\n");
    project.file("a.txt", "one\n");
    project.file("b.txt", "two\n");

    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv", "b.txt", "-", "a.txt"])
        .stdin("one two\n")
        .passes()
        .stdout_eq("2\n1 2\n1\n");
}

/// > A missing input file exits with code 3
#[test]
fn missing_input_file_fails() {
    let project = project_with_keys("a\tb\n");
    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv", "missing.txt"])
        .exits(3)
        .stderr_has("missing.txt");
}

// =============================================================================
// CHUNKING
// =============================================================================

/// > Patterns never match across line breaks by default
#[test]
fn line_chunks_do_not_match_across_lines() {
    let project = project_with_keys("foo\tX\n");
    project.file("input.txt", "fo\no\nfoo\n");

    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv", "input.txt"])
        .passes()
        .stdout_eq("fo\no\nX\n");
}

/// > --whole reads each input as a single chunk
#[test]
fn whole_flag_uses_one_chunk_per_input() {
    let project = project_with_keys("foo\tX\n");
    project.file("input.txt", "foo\nbar foo\n");

    whiplace()
        .pwd(project.path())
        .args(&["--whole", "-v", "keys.tsv", "input.txt"])
        .passes()
        .stdout_eq("X\nbar X\n")
        .stderr_has("[verbose] chunks: 1");
}

/// > Line chunking counts one chunk per line
#[test]
fn line_chunking_counts_lines() {
    let project = project_with_keys("foo\tX\n");
    project.file("input.txt", "foo\nbar foo\nlast");

    whiplace()
        .pwd(project.path())
        .args(&["-v", "keys.tsv", "input.txt"])
        .passes()
        .stdout_eq("X\nbar X\nlast")
        .stderr_has("[verbose] chunks: 3");
}

// =============================================================================
// OUTPUT
// =============================================================================

/// > -o writes to a file and leaves stdout empty
#[test]
fn output_flag_writes_file() {
    let project = project_with_keys("cat\tdog\n");
    whiplace()
        .pwd(project.path())
        .args(&["-o", "out.txt", "keys.tsv"])
        .stdin("cat\n")
        .passes()
        .stdout_eq("");
    assert_eq!(project.read("out.txt"), "dog\n");
}

/// > Writing over an input is refused before anything is truncated
#[test]
fn output_same_as_input_is_rejected() {
    let project = project_with_keys("cat\tdog\n");
    project.file("in.txt", "cat\n");

    whiplace()
        .pwd(project.path())
        .args(&["-o", "in.txt", "keys.tsv", "in.txt"])
        .exits(2)
        .stderr_has("is also an input");
    assert_eq!(project.read("in.txt"), "cat\n");
}

/// > Another spelling of an input path is still refused as output
#[test]
fn output_with_dot_prefix_is_rejected() {
    let project = project_with_keys("cat\tdog\n");
    project.file("in.txt", "cat\n");

    whiplace()
        .pwd(project.path())
        .args(&["keys.tsv", "in.txt", "-o", "./in.txt"])
        .exits(2)
        .stderr_has("is also an input");
    assert_eq!(project.read("in.txt"), "cat\n");
}

/// > A symlink to an input is refused as output
#[cfg(unix)]
#[test]
fn output_symlinked_to_input_is_rejected() {
    let project = project_with_keys("cat\tdog\n");
    project.file("in.txt", "cat\n");
    std::os::unix::fs::symlink(project.path().join("in.txt"), project.path().join("link.txt"))
        .unwrap();

    whiplace()
        .pwd(project.path())
        .args(&["-o", "link.txt", "keys.tsv", "in.txt"])
        .exits(2)
        .stderr_has("is also an input");
    assert_eq!(project.read("in.txt"), "cat\n");
}
