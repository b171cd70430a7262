use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{ArgumentError, TranscriptError};
use crate::models::Segment;

const SPEAKER_PREFIX: &str = "speaker_";
const FIELD_SEPARATOR: &str = ": ";

/// Transcript file formats accepted as input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    /// `speaker_label : [timerange :] text` lines
    Text,
    /// `{"segments": [{"speaker_id": .., "text": ..}]}`
    Json,
}

impl TranscriptFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(TranscriptFormat::Json),
            Some("txt") => Some(TranscriptFormat::Text),
            _ => None,
        }
    }
}

/// Parse a transcript file, routing on its extension
pub fn parse_transcript_file(path: &Path) -> Result<Vec<Segment>, TranscriptError> {
    match TranscriptFormat::from_path(path) {
        Some(TranscriptFormat::Json) => parse_json_transcript(path),
        Some(TranscriptFormat::Text) => parse_text_transcript(path),
        None => Err(TranscriptError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Parse a plain-text dialogue transcript file
pub fn parse_text_transcript(path: &Path) -> Result<Vec<Segment>, TranscriptError> {
    parse_text(&read(path)?)
}

/// Parse plain-text dialogue lines into segments
///
/// Each non-blank line is `speaker_label : [timerange :] text`. The label is
/// everything before the first `": "`, and the text is everything after the
/// last one, so an optional timerange in between is dropped.
pub fn parse_text(content: &str) -> Result<Vec<Segment>, TranscriptError> {
    let mut segments = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (label, rest) =
            line.split_once(FIELD_SEPARATOR)
                .ok_or_else(|| TranscriptError::MalformedLine {
                    line_number: index + 1,
                    line: line.to_string(),
                })?;

        let text = rest
            .rsplit_once(FIELD_SEPARATOR)
            .map_or(rest, |(_, text)| text)
            .trim();

        segments.push(Segment::new(speaker_id_from_label(label), text));
    }

    Ok(segments)
}

fn speaker_id_from_label(label: &str) -> &str {
    let label = label.trim();
    label.strip_prefix(SPEAKER_PREFIX).unwrap_or(label)
}

/// Parse a JSON transcript file
pub fn parse_json_transcript(path: &Path) -> Result<Vec<Segment>, TranscriptError> {
    parse_json(&read(path)?)
}

/// Parse a `{"segments": [...]}` document into segments
///
/// Every field of the source object is kept on the segment; `speaker_id` is
/// additionally exposed as the segment's speaker id.
pub fn parse_json(content: &str) -> Result<Vec<Segment>, TranscriptError> {
    let mut document: Value = serde_json::from_str(content)?;

    let raw_segments = match document.get_mut("segments").map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => return Err(TranscriptError::MissingSegments),
    };

    raw_segments
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => segment_from_object(index, fields),
            _ => Err(TranscriptError::InvalidSegment {
                index,
                reason: "not a JSON object".to_string(),
            }),
        })
        .collect()
}

fn segment_from_object(
    index: usize,
    mut fields: Map<String, Value>,
) -> Result<Segment, TranscriptError> {
    let speaker_id = match fields.get("speaker_id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            return Err(TranscriptError::InvalidSegment {
                index,
                reason: "missing speaker_id".to_string(),
            });
        }
    };

    let text = match fields.remove("text") {
        Some(Value::String(s)) => s,
        _ => {
            return Err(TranscriptError::InvalidSegment {
                index,
                reason: "missing text".to_string(),
            });
        }
    };

    // speaker_id wins over any speakerId already on the object
    fields.remove("speakerId");

    Ok(Segment {
        speaker_id,
        text,
        extra: fields,
    })
}

fn read(path: &Path) -> Result<String, TranscriptError> {
    std::fs::read_to_string(path).map_err(|source| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the `-i` argument into the transcript files to process
///
/// A file must carry a `.txt` or `.json` extension. A directory yields every
/// supported file directly inside it, sorted by name.
pub fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, ArgumentError> {
    if path.is_dir() {
        let entries = std::fs::read_dir(path)
            .map_err(|_| ArgumentError::InputNotFound(path.to_path_buf()))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && TranscriptFormat::from_path(p).is_some())
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(ArgumentError::EmptyInputFolder(path.to_path_buf()));
        }
        return Ok(files);
    }

    if TranscriptFormat::from_path(path).is_none() {
        return Err(ArgumentError::InvalidInputFile(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ArgumentError::InputNotFound(path.to_path_buf()));
    }

    Ok(vec![path.to_path_buf()])
}
