//! Flag extraction from Unix manual pages for shell-completion generation.
//!
//! This crate parses roff/mdoc manual pages (optionally gzip-compressed) and
//! derives a flag→description mapping suitable for driving a completion
//! script generator. Parsing is deliberately permissive: only the small
//! subset of roff that delimits flag-bearing sections (`PP`, `IT`, `SH`,
//! `TP`) carries meaning, everything else is stripped as noise or passed
//! through as literal text, and malformed markup never fails a parse.
//!
//! # Main entry points
//!
//! - [`parse_manpage`] — one-shot parse of a page into an immutable
//!   [`ParsedManpage`].
//! - [`ManpageParser`] — reusable parser handle exposing tags, the merged
//!   option map, a sorted boundary form, and the page's command name.
//!
//! # Example
//!
//! ```no_run
//! use manpage_completions::parse_manpage;
//!
//! let page = parse_manpage("/usr/share/man/man1/cp.1.gz")?;
//! for (flag, description) in &page.options {
//!     println!("{flag}\t{description}");
//! }
//! # Ok::<(), manpage_completions::ParseError>(())
//! ```
//!
//! Only stream setup can fail; once the page is open (and, for `.gz` inputs,
//! decompressing), parsing always completes with a best-effort result.

pub mod error;
pub mod parser;
pub mod source;

pub use error::{ParseError, Result};
pub use parser::{ManpageParser, ParseOptions, ParsedManpage, Tag};

use std::path::Path;

/// Parses the manual page at `path` into an immutable [`ParsedManpage`].
///
/// Pages ending in `.gz` are decompressed transparently. This is the
/// convenience form of [`ManpageParser`] for callers that only need the end
/// result.
pub fn parse_manpage(path: impl AsRef<Path>) -> Result<ParsedManpage> {
    let mut parser = ManpageParser::new(path.as_ref());
    parser.parse()?;
    Ok(parser.into_parsed())
}
