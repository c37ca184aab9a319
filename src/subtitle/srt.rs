// SRT subtitle format
use super::Cue;
use crate::error::{Result, SubglossError};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// A blank line, possibly holding stray whitespace, separates two blocks.
static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("block separator pattern is valid"));

/// Parse SRT text into cues.
///
/// Blocks with fewer than three lines (index, timecode, text) are dropped.
pub fn parse(content: &str) -> Vec<Cue> {
    let content = content.trim();
    if content.is_empty() {
        return Vec::new();
    }

    BLOCK_SEPARATOR
        .split(content)
        .filter_map(|block| {
            let lines: Vec<&str> = block
                .trim()
                .split('\n')
                .map(|line| line.trim_end_matches('\r'))
                .collect();

            if lines.len() < 3 {
                return None;
            }

            Some(Cue {
                index: lines[0].to_string(),
                timecode: lines[1].to_string(),
                text: lines[2..].join("\n"),
            })
        })
        .collect()
}

/// Parse raw file bytes, failing only when they are not valid UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<Cue>> {
    let content = std::str::from_utf8(bytes)
        .map_err(|e| SubglossError::Format(format!("not valid UTF-8 text ({})", e)))?;
    Ok(parse(content))
}

/// Read and parse a subtitle file.
pub fn read_file(path: &Path) -> Result<Vec<Cue>> {
    let bytes = std::fs::read(path)
        .map_err(|e| SubglossError::Format(format!("{}: {}", path.display(), e)))?;
    parse_bytes(&bytes).map_err(|e| match e {
        SubglossError::Format(msg) => SubglossError::Format(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Serialize cues back to SRT, one blank line between blocks and none after
/// the last.
pub fn serialize(cues: &[Cue]) -> String {
    cues.iter()
        .map(|cue| format!("{}\n{}\n{}\n", cue.index, cue.timecode, cue.text))
        .collect::<Vec<_>>()
        .join("\n")
}
