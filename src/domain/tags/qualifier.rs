//! Tag qualification for plain-text help documents.
//!
//! A tag marker is `*name*` where `name` holds no `*` and no whitespace.
//! Markers are only rewritten on lines that look like tag declarations:
//! either the line opens with a run of markers (an index line), or some
//! marker on it is set off by whitespace on both sides (an inline tag).
//! Everything else, emphasis and bullet asterisks included, passes
//! through untouched.
//!
//! Documents are handled as raw bytes so Latin-1 or GB2312 help files go
//! through the same rules; whitespace means ASCII whitespace.

use crate::domain::QualifiedName;
use regex::bytes::{Captures, Regex};
use std::sync::OnceLock;

/// Line opening with one or more markers, optionally indented
fn index_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?-u)^\s*(?:\*[^*\s]+\*\s*)+").unwrap())
}

/// Marker with whitespace immediately before and after it
fn inline_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?-u)\s\*[^*\s]+\*\s").unwrap())
}

fn tag_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?-u)\*([^*\s]+)\*").unwrap())
}

/// Result of qualifying one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyResult {
    pub content: Vec<u8>,
    pub replacements: usize,
}

/// Whether the tags on `line` are eligible for rewriting.
///
/// `line` must not include its line terminator.
pub fn is_candidate_line(line: &[u8]) -> bool {
    index_line_regex().is_match(line) || inline_tag_regex().is_match(line)
}

/// Rewrite every marker on every candidate line of `text`.
///
/// Each `*name*` becomes `*<prefix><name>@<qualified>*`. Line terminators
/// and a missing final newline are preserved, so a document without
/// candidate lines comes back byte-identical.
///
/// This is not idempotent: feeding the output back in wraps the already
/// qualified tags a second time.
pub fn qualify_text(text: &[u8], prefix: &str, qualified: &QualifiedName) -> QualifyResult {
    let mut replacements = 0usize;
    let mut rewritten = Vec::with_capacity(text.len());

    for segment in text.split_inclusive(|&b| b == b'\n') {
        let (line, terminator) = split_terminator(segment);

        if is_candidate_line(line) {
            rewritten.extend_from_slice(&qualify_line(line, prefix, qualified, &mut replacements));
        } else {
            rewritten.extend_from_slice(line);
        }
        rewritten.extend_from_slice(terminator);
    }

    QualifyResult {
        content: rewritten,
        replacements,
    }
}

fn qualify_line(
    line: &[u8],
    prefix: &str,
    qualified: &QualifiedName,
    replacements: &mut usize,
) -> Vec<u8> {
    tag_marker_regex()
        .replace_all(line, |captures: &Captures<'_>| {
            *replacements += 1;
            let mut marker = Vec::with_capacity(captures[0].len() + prefix.len() + 16);
            marker.push(b'*');
            marker.extend_from_slice(prefix.as_bytes());
            marker.extend_from_slice(&captures[1]);
            marker.push(b'@');
            marker.extend_from_slice(qualified.as_str().as_bytes());
            marker.push(b'*');
            marker
        })
        .into_owned()
}

fn split_terminator(segment: &[u8]) -> (&[u8], &[u8]) {
    if let Some(line) = segment.strip_suffix(b"\r\n") {
        (line, &b"\r\n"[..])
    } else if let Some(line) = segment.strip_suffix(b"\n") {
        (line, &b"\n"[..])
    } else {
        (segment, &b""[..])
    }
}
