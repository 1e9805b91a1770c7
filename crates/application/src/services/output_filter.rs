//! Text filtering for enumeration tool output.
//!
//! subfinder emits one bare hostname per line and needs no treatment beyond
//! what the runner already does. Sublist3r decorates its output with ANSI
//! colors and progress text, sometimes with several hostnames on one line,
//! so its lines go through the extraction pass below.

use fancy_regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

// Hostname-shaped substring: alphanumeric/hyphen/underscore labels joined
// by dots, top-level label of at least two letters.
fn hostname_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)[a-z0-9][a-z0-9_.-]*\.[a-z]{2,}").expect("hostname pattern is valid")
    })
}

// ESC '[' digits/semicolons terminated by a letter, e.g. \x1b[92m / \x1b[0m.
fn ansi_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("ansi pattern is valid"))
}

/// Removes terminal color-escape sequences from a line.
pub fn strip_ansi_codes(line: &str) -> String {
    ansi_pattern().replace_all(line, "").into_owned()
}

/// Collects every hostname-shaped substring in a line, left to right.
///
/// This is find-all, not a whole-line match: decorated lines embed hostnames
/// mid-string, and one line may yield zero, one, or several candidates.
pub fn extract_hostnames(line: &str) -> Vec<String> {
    hostname_pattern()
        .find_iter(line)
        .filter_map(|m| m.ok())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Runs raw decorated lines through the noisy-output path: trim, strip ANSI
/// escapes, then extract all hostname candidates per line.
pub fn filter_noisy_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| extract_hostnames(&strip_ansi_codes(line.trim())))
        .collect()
}

/// Merges candidate sequences into one sorted, duplicate-free list.
///
/// Identity is exact string comparison. With `fold_case` set, candidates are
/// lowercased first, so differently-cased spellings of one name collapse to
/// a single lowercase entry. Either way the result is independent of input
/// order and of how candidates are split across sequences.
pub fn merge_unique(sequences: &[Vec<String>], fold_case: bool) -> Vec<String> {
    let unique: BTreeSet<String> = sequences
        .iter()
        .flatten()
        .map(|s| {
            if fold_case {
                s.to_ascii_lowercase()
            } else {
                s.clone()
            }
        })
        .collect();

    unique.into_iter().collect()
}
