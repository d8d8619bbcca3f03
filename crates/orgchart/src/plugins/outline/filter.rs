//! Line filter for org outlines
//!
//! Each source line is scanned by a small chumsky grammar into its leading
//! whitespace and a body (blank, `#` comment, or entry). Blank lines, comments
//! and unindented lines after the first entry are dropped; everything else is
//! passed on in file order.

use chumsky::prelude::*;
use tracing::{debug, trace};

/// A retained outline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentedLine<'a> {
    /// 1-based source line number
    pub line: usize,
    /// Count of leading whitespace characters; tabs and spaces both count one
    pub indent: usize,
    /// Entry text with surrounding whitespace removed
    pub label: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineBody<'src> {
    Blank,
    Comment,
    Entry(&'src str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScannedLine<'src> {
    indent: &'src str,
    body: LineBody<'src>,
}

/// Grammar for one line: `indent (end | '#' any* | any+)`.
///
/// Indentation is any Unicode whitespace, so the body of an entry always
/// starts with a visible character.
fn line_scanner<'src>() -> impl Parser<'src, &'src str, ScannedLine<'src>> + Clone {
    let indent = any()
        .filter(|c: &char| c.is_whitespace())
        .repeated()
        .to_slice();

    let blank = end().to(LineBody::Blank);
    let comment = just('#')
        .ignore_then(any().repeated())
        .to(LineBody::Comment);
    let entry = any()
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|text: &'src str| LineBody::Entry(text.trim_end()));

    indent
        .then(choice((blank, comment, entry)))
        .then_ignore(end())
        .map(|(indent, body)| ScannedLine { indent, body })
}

/// Filter raw outline text down to the entries that form the hierarchy.
///
/// The first entry is always kept (it becomes the root, or is rejected by the
/// tree builder if indented). Later entries with no indentation are treated
/// as noise.
pub fn filter_lines(input: &str) -> Vec<IndentedLine<'_>> {
    let scanner = line_scanner();
    let mut kept = Vec::new();
    let mut skipped = 0usize;

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let Ok(scanned) = scanner.parse(raw).into_result() else {
            // the grammar accepts every string; keep going if that ever changes
            debug!(line, "Line did not scan, skipping");
            skipped += 1;
            continue;
        };

        match scanned.body {
            LineBody::Blank => {
                trace!(line, "Skipping blank line");
                skipped += 1;
            }
            LineBody::Comment => {
                trace!(line, "Skipping comment line");
                skipped += 1;
            }
            LineBody::Entry(label) => {
                let indent = scanned.indent.chars().count();
                if indent == 0 && !kept.is_empty() {
                    debug!(line, label, "Dropping unindented line after the root entry");
                    skipped += 1;
                    continue;
                }
                kept.push(IndentedLine {
                    line,
                    indent,
                    label,
                });
            }
        }
    }

    debug!(kept = kept.len(), skipped, "Filtered outline lines");
    kept
}
