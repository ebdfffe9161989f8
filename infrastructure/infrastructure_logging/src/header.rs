//! Header Template Module
//!
//! A line header is a template with `${tag}` placeholders, parsed once and
//! rendered for every line. Recognised tags:
//!
//! - `time`: unix timestamp in seconds
//! - `prefix`: the logger prefix
//! - `level`: the level name
//! - `file`, `line`: source location of the call
//!
//! Unknown tags render as nothing. A `${` without a closing `}` is kept as
//! literal text.

use std::io::Write;

use crate::level::Level;

/// Header used when none is configured
pub const DEFAULT_HEADER: &str =
    "time:${time}\tprefix:${prefix}\tlevel:${level}\tfile:${file}\tline:${line}";

const TAG_START: &str = "${";
const TAG_END: char = '}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Time,
    Prefix,
    Level,
    File,
    Line,
    Unknown,
}

impl Tag {
    fn from_name(name: &str) -> Self {
        match name {
            "time" => Tag::Time,
            "prefix" => Tag::Prefix,
            "level" => Tag::Level,
            "file" => Tag::File,
            "line" => Tag::Line,
            _ => Tag::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Tag(Tag),
}

/// Values substituted into a header
#[derive(Debug, Clone, Copy)]
pub struct HeaderFields<'a> {
    pub time: i64,
    pub prefix: &'a str,
    pub level: Level,
    pub file: &'a str,
    pub line: u32,
}

/// Parsed `${tag}` template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl HeaderTemplate {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find(TAG_START) {
            let after = &rest[start + TAG_START.len()..];
            let Some(end) = after.find(TAG_END) else {
                break;
            };
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            segments.push(Segment::Tag(Tag::from_name(&after[..end])));
            rest = &after[end + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// The template text this header was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Append the rendered header to `buf`
    pub fn render(&self, buf: &mut Vec<u8>, fields: &HeaderFields<'_>) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => buf.extend_from_slice(text.as_bytes()),
                Segment::Tag(Tag::Time) => {
                    let _ = write!(buf, "{}", fields.time);
                }
                Segment::Tag(Tag::Prefix) => buf.extend_from_slice(fields.prefix.as_bytes()),
                Segment::Tag(Tag::Level) => buf.extend_from_slice(fields.level.name().as_bytes()),
                Segment::Tag(Tag::File) => buf.extend_from_slice(fields.file.as_bytes()),
                Segment::Tag(Tag::Line) => {
                    let _ = write!(buf, "{}", fields.line);
                }
                Segment::Tag(Tag::Unknown) => {}
            }
        }
    }
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_HEADER)
    }
}
