//! Manual-page parser: section assembly and option extraction.
//!
//! The parser drives a sequential scan over the page's lines. Each raw line
//! is classified ([`classify::classify_line`]), comments are dropped, and the
//! recognized section macros (`PP`, `IT`, `SH`, `TP`) delimit [`Tag`]s whose
//! content is accumulated after markup cleanup ([`clean::clean_content`]).
//! Closed tags are kept in document order; [`options::merge_options`] derives
//! the flag→description mapping from them.

pub mod classify;
pub mod clean;
pub mod options;

use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::source;
use classify::{LineKind, classify_line};
use clean::clean_content;

/// A named, ordered run of cleaned content lines between two section markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Section-marker keyword, normalized to uppercase (`SH`, `TP`, `PP`, `IT`).
    pub name: String,
    /// Cleaned content lines in document order; may be empty.
    pub content: Vec<String>,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Emit a `tracing` debug event for every tag as it is finalized.
    pub trace_tags: bool,
}

/// An immutable parsed document: the ordered tags plus the derived mapping.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedManpage {
    /// Closed tags in document order.
    pub tags: Vec<Tag>,
    /// Merged flag→description mapping (no ordering guarantee).
    pub options: HashMap<String, String>,
}

/// Line-oriented parser for one manual page.
///
/// Create with [`ManpageParser::new`], call [`parse`](Self::parse) once, then
/// read the results through the accessors. Accessors called before `parse`
/// yield empty results, never errors.
pub struct ManpageParser {
    path: PathBuf,
    options: ParseOptions,
    tags: Vec<Tag>,
}

impl ManpageParser {
    /// Creates a parser for the page at `path` with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, ParseOptions::default())
    }

    /// Creates a parser with explicit [`ParseOptions`].
    pub fn with_options(path: impl Into<PathBuf>, options: ParseOptions) -> Self {
        Self {
            path: path.into(),
            options,
            tags: Vec::new(),
        }
    }

    /// Parses the page, replacing any previously assembled tags.
    ///
    /// Pages whose path ends in `.gz` are decompressed transparently. The
    /// file handle (and decoder) is scoped to this call and released on every
    /// exit path. Malformed markup is never an error; only opening or reading
    /// the stream can fail.
    pub fn parse(&mut self) -> Result<()> {
        let compressed = source::is_compressed(&self.path);
        debug!(path = %self.path.display(), compressed, "scanning manual page");
        let reader = source::open(&self.path)?;
        self.scan(reader, compressed)
    }

    /// The page path this parser was created with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Closed tags in document order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The merged flag→description mapping across all tags.
    ///
    /// On collision the entry from the tag appearing later in the document
    /// wins. The map itself guarantees no iteration order; use
    /// [`options_sorted`](Self::options_sorted) when stable output matters.
    pub fn options(&self) -> HashMap<String, String> {
        options::merge_options(&self.tags)
    }

    /// The merged mapping as `(flag, description)` pairs sorted by flag token.
    pub fn options_sorted(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self.options().into_iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    /// The command name from the `NAME` section, when present.
    ///
    /// `NAME` sections read `.SH NAME` followed by `cmd - summary`; the first
    /// word of the line after the heading is the command name.
    pub fn command_name(&self) -> Option<String> {
        self.tags
            .iter()
            .find(|tag| {
                tag.name == "SH"
                    && tag
                        .content
                        .first()
                        .is_some_and(|heading| heading.trim().eq_ignore_ascii_case("NAME"))
            })
            .and_then(|tag| tag.content.get(1))
            .and_then(|line| line.split_whitespace().next())
            .map(str::to_string)
    }

    /// Consumes the parser, returning the immutable parsed document.
    pub fn into_parsed(self) -> ParsedManpage {
        let options = self.options();
        ParsedManpage {
            tags: self.tags,
            options,
        }
    }

    fn scan(&mut self, mut reader: impl BufRead, compressed: bool) -> Result<()> {
        self.tags.clear();
        let mut open: Option<Tag> = None;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| self.read_error(source, compressed))?;
            if read == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            // Real-world pages carry the odd latin-1 byte; decode lossily so
            // encoding noise degrades to replacement characters instead of
            // failing the parse.
            let line = String::from_utf8_lossy(&buf);
            self.process_line(&line, &mut open);
        }

        // A tag is only finalized when the next marker arrives, so the one
        // still open at end of input is dropped. Kept as-is: flushing it here
        // would change output for pages whose final section is the last thing
        // in the file.
        Ok(())
    }

    fn process_line(&mut self, line: &str, open: &mut Option<Tag>) {
        match classify_line(line) {
            LineKind::Comment => {}
            LineKind::SectionMarker { name, trailing } => {
                if let Some(tag) = open.take() {
                    self.finish_tag(tag);
                }
                let mut content = Vec::new();
                // The emptiness check runs on the raw trailing text, so text
                // that cleans to nothing still contributes one empty line.
                if !trailing.is_empty() {
                    content.push(clean_content(&trailing));
                }
                *open = Some(Tag { name, content });
            }
            LineKind::Content => {
                if let Some(tag) = open.as_mut() {
                    tag.content.push(clean_content(line));
                }
            }
        }
    }

    fn finish_tag(&mut self, tag: Tag) {
        if self.options.trace_tags {
            debug!(name = %tag.name, content = ?tag.content, "finalized tag");
        }
        self.tags.push(tag);
    }

    fn read_error(&self, source: std::io::Error, compressed: bool) -> ParseError {
        let path = self.path.clone();
        if compressed {
            ParseError::Decompress { path, source }
        } else {
            ParseError::Read { path, source }
        }
    }
}
