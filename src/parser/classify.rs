//! Raw line classification for the section scanner.
//!
//! Classification runs on raw lines, before any cleanup, and is deliberately
//! hand-written rather than regex-driven so the matching rules stay explicit.

/// Classification of one raw manual-page line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A roff comment (`.\"` control sequence) or a lone `.`; dropped outright.
    Comment,
    /// One of the recognized section macros, with whatever text trailed it.
    SectionMarker { name: String, trailing: String },
    /// Anything else; body text for the currently open section.
    Content,
}

/// The only macros that demarcate flag-bearing regions of a page.
const SECTION_MACROS: [&str; 4] = ["PP", "IT", "SH", "TP"];

/// Classifies a single raw line.
///
/// Section markers match case-insensitively and anchored at the start: a dot,
/// a two-letter macro name, then at most one whitespace character before the
/// trailing text. No whitespace is required, so `.SHELL` classifies as the
/// `SH` marker with trailing text `ELL` — messy real-world pages are handled
/// best-effort, never rejected.
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with(".\\") || line == "." {
        return LineKind::Comment;
    }

    if let Some(rest) = line.strip_prefix('.') {
        if rest.len() >= 2 && rest.is_char_boundary(2) {
            let (name, tail) = rest.split_at(2);
            if SECTION_MACROS
                .iter()
                .any(|macro_name| name.eq_ignore_ascii_case(macro_name))
            {
                let trailing = match tail.chars().next() {
                    Some(first) if first.is_whitespace() => &tail[first.len_utf8()..],
                    _ => tail,
                };
                return LineKind::SectionMarker {
                    name: name.to_ascii_uppercase(),
                    trailing: trailing.to_string(),
                };
            }
        }
    }

    LineKind::Content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(name: &str, trailing: &str) -> LineKind {
        LineKind::SectionMarker {
            name: name.to_string(),
            trailing: trailing.to_string(),
        }
    }

    #[test]
    fn test_classify_comment_lines() {
        assert_eq!(classify_line(".\\\" man page for cp"), LineKind::Comment);
        assert_eq!(classify_line("."), LineKind::Comment);
    }

    #[test]
    fn test_classify_section_markers_case_insensitive() {
        assert_eq!(classify_line(".SH OPTIONS"), marker("SH", "OPTIONS"));
        assert_eq!(classify_line(".tp"), marker("TP", ""));
        assert_eq!(classify_line(".Pp"), marker("PP", ""));
        assert_eq!(classify_line(".IT \\fBitem\\fR"), marker("IT", "\\fBitem\\fR"));
    }

    #[test]
    fn test_classify_marker_consumes_at_most_one_whitespace() {
        assert_eq!(classify_line(".SH  NAME"), marker("SH", " NAME"));
    }

    #[test]
    fn test_classify_marker_without_separator_keeps_tail_as_trailing() {
        // No whitespace is required after the macro name.
        assert_eq!(classify_line(".SHELL"), marker("SH", "ELL"));
    }

    #[test]
    fn test_classify_multibyte_macro_position_as_content() {
        // A multibyte character straddling the two-byte macro slot must not
        // panic; the line is ordinary content.
        assert_eq!(classify_line(".日x"), LineKind::Content);
        assert_eq!(classify_line(".éx trailing"), LineKind::Content);
    }

    #[test]
    fn test_classify_unrecognized_macros_as_content() {
        assert_eq!(classify_line(".TH CP 1"), LineKind::Content);
        assert_eq!(classify_line(".B bold text"), LineKind::Content);
        assert_eq!(classify_line("plain prose"), LineKind::Content);
        assert_eq!(classify_line(""), LineKind::Content);
    }
}
