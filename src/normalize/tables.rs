//! Table Row Spacing
//!
//! Line-by-line normalization of pipe-table rows, skipping fenced code
//! blocks. The document is folded line by line with the fence state as
//! accumulator; qualified rows are rewritten, everything else passes
//! through unchanged.

use super::fence::FenceState;

/// Decide whether a trimmed line is treated as a table row.
///
/// Heuristic: starts with a pipe and holds more than one pipe overall.
/// Prose that happens to qualify is normalized too; callers get exactly
/// this rule, nothing stricter.
pub fn is_table_row(trimmed: &str) -> bool {
    trimmed.starts_with('|') && trimmed.matches('|').count() > 1
}

/// Characters that already separate a pipe from cell content.
fn is_pipe_neighbor(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '|')
}

/// Insert a space after every pipe not already followed by a separator.
/// A pipe at the end of the line gets nothing appended.
fn space_after_pipes(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '|' {
            if let Some(&next) = chars.peek() {
                if !is_pipe_neighbor(next) {
                    out.push(' ');
                }
            }
        }
    }

    out
}

/// Insert a space before every pipe not already preceded by a separator.
/// The preceding-character test always looks at the input line, never at
/// a space this pass just inserted.
fn space_before_pipes(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut prev: Option<char> = None;

    for ch in line.chars() {
        if ch == '|' {
            if let Some(p) = prev {
                if !is_pipe_neighbor(p) {
                    out.push(' ');
                }
            }
        }
        out.push(ch);
        prev = Some(ch);
    }

    out
}

/// Apply both spacing rules to one row.
///
/// Order matters: the after rule runs first, the before rule runs on its
/// output. Separator rows (`---|---`) take the same path as any other row.
pub fn normalize_row(line: &str) -> String {
    space_before_pipes(&space_after_pipes(line))
}

/// Reformat pipe-table rows outside fenced code blocks.
///
/// Conditions are tested on the trimmed line, but edits apply to the
/// original untrimmed content. A fence-marker line only toggles the
/// state. Lines are rejoined with a single `\n`; the original terminator
/// style is not preserved.
pub fn normalize_tables(text: &str) -> String {
    let (_, lines) = text.split('\n').fold(
        (FenceState::default(), Vec::new()),
        |(state, mut out), line| {
            let trimmed = line.trim();
            let state = state.observe(trimmed);

            if !state.is_inside() && is_table_row(trimmed) {
                out.push(normalize_row(line));
            } else {
                out.push(line.to_string());
            }

            (state, out)
        },
    );

    lines.join("\n")
}
