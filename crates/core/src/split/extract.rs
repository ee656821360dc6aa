use std::path::Path;

use log::{debug, warn};

use super::types::SplitFile;

/// Marker that closes the model's reasoning trace.
pub const REASONING_MARKER: &str = "</think>";

/// Line separating one file from the next in the payload.
pub const SEGMENT_SEPARATOR: &str = "---";

const COMMENT_PREFIX: &str = "//";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("response does not contain the `</think>` marker")]
    MissingMarker,

    #[error("response contains the `</think>` marker {0} times, expected exactly once")]
    RepeatedMarker(usize),
}

/// Return everything after the reasoning marker.
///
/// The marker must appear exactly once.
pub fn strip_reasoning(text: &str) -> Result<&str, SplitError> {
    let (_, payload) = text
        .split_once(REASONING_MARKER)
        .ok_or(SplitError::MissingMarker)?;

    match payload.matches(REASONING_MARKER).count() {
        0 => Ok(payload),
        extra => Err(SplitError::RepeatedMarker(extra + 1)),
    }
}

/// Extract a file name from a `// name` comment line.
///
/// Strips the comment marker, surrounding whitespace and quotes, then keeps
/// only the final path component so every file lands directly in the output
/// directory. Returns `None` when the line is not a comment or names nothing.
pub fn derive_filename(line: &str) -> Option<String> {
    let rest = line.strip_prefix(COMMENT_PREFIX)?;
    let name = rest
        .trim_matches(|c: char| c == '/' || c.is_whitespace())
        .trim_matches(|c: char| c == '"' || c == '\'')
        .trim();

    Path::new(name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Split a raw model response into the files it declares.
///
/// The first `//` line of a segment names it. Segments where that line is
/// missing or names nothing are dropped.
pub fn split_response(text: &str) -> Result<Vec<SplitFile>, SplitError> {
    let payload = strip_reasoning(text)?;

    let files = segments(payload)
        .into_iter()
        .filter_map(|lines| {
            let lines = trim_blank_lines(&lines);
            if lines.is_empty() {
                return None;
            }

            let name = lines
                .iter()
                .find(|line| line.starts_with(COMMENT_PREFIX))
                .and_then(|line| derive_filename(line));
            let Some(name) = name else {
                warn!(
                    "dropping segment without a file name comment ({} lines)",
                    lines.len()
                );
                return None;
            };

            debug!("segment {name}: {} lines", lines.len());
            Some(SplitFile {
                name,
                content: lines.join("\n"),
            })
        })
        .collect();

    Ok(files)
}

fn segments(payload: &str) -> Vec<Vec<&str>> {
    let mut segments = vec![Vec::new()];

    for line in payload.lines() {
        if line.trim_end() == SEGMENT_SEPARATOR {
            segments.push(Vec::new());
        } else if let Some(current) = segments.last_mut() {
            current.push(line);
        }
    }

    segments
}

fn trim_blank_lines<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let is_blank = |line: &&str| line.trim().is_empty();

    let Some(start) = lines.iter().position(|line| !is_blank(line)) else {
        return &[];
    };
    let end = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(start);

    &lines[start..=end]
}
