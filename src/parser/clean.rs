//! Line-level cleanup of roff markup noise.

use std::sync::LazyLock;

use regex::Regex;

/// Cleanup patterns, compiled once.
static PATTERNS: LazyLock<CleanPatterns> = LazyLock::new(CleanPatterns::new);

struct CleanPatterns {
    // `.FL a` / `FL a` — the flag macro introducing a dash option
    flag_macro: Regex,
    // font switches (\fB), indent requests (.RS 4), stray two-letter
    // dot-macros with one optional trailing space, bare backslashes, and
    // ampersands
    markup_noise: Regex,
}

impl CleanPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime condition.
        Self {
            flag_macro: Regex::new(r"(?i)\.?FL\s").expect("static regex must compile"),
            markup_noise: Regex::new(r"(?i)\\f\w|\.RS\s\d+|\.\w{2}\s?|\\|&")
                .expect("static regex must compile"),
        }
    }
}

/// Strips roff markup noise from a single content line.
///
/// Flag macros are rewritten to a literal dash first (`.FL a` becomes `-a`)
/// so option tokens survive as ordinary text, then the remaining markup is
/// removed and trailing spaces are trimmed. Everything else passes through
/// unchanged, and the transform is idempotent.
pub fn clean_content(line: &str) -> String {
    let unescaped = PATTERNS.flag_macro.replace_all(line, "-");
    let stripped = PATTERNS.markup_noise.replace_all(&unescaped, "");
    stripped.trim_end_matches(' ').to_string()
}
