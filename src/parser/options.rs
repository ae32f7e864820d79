//! Flag extraction from assembled tags.
//!
//! A tag's cleaned content is scanned for flag-definition lines: lines whose
//! leading run of tokens are dash options. Every flag in that run shares one
//! description, accumulated from the rest of the line and from following
//! content lines until the next flag line or the end of the tag.

use std::collections::HashMap;

use super::Tag;

/// Extracts `(flag, description)` entries from one tag, in content order.
///
/// Short and long aliases listed together (`-a, --all`) each receive their
/// own entry with the identical description. An inline value suffix is cut
/// at `=`, so `--color=WHEN` yields the flag token `--color`. Content before
/// the first flag line is ignored.
pub fn tag_options(tag: &Tag) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut flags: Vec<String> = Vec::new();
    let mut description: Vec<String> = Vec::new();

    for line in &tag.content {
        if let Some((line_flags, rest)) = split_flag_prefix(line) {
            flush(&mut entries, &mut flags, &mut description);
            flags = line_flags;
            if !rest.is_empty() {
                description.push(rest);
            }
        } else if !flags.is_empty() {
            let text = line.trim();
            if !text.is_empty() {
                description.push(text.to_string());
            }
        }
    }
    flush(&mut entries, &mut flags, &mut description);

    entries
}

/// Merges every tag's entries into one mapping keyed by flag token.
///
/// Tags are visited in document order, so on collision the description from
/// the later tag wins.
pub fn merge_options(tags: &[Tag]) -> HashMap<String, String> {
    let mut merged = HashMap::new();
    for tag in tags {
        for (flag, description) in tag_options(tag) {
            merged.insert(flag, description);
        }
    }
    merged
}

fn flush(entries: &mut Vec<(String, String)>, flags: &mut Vec<String>, description: &mut Vec<String>) {
    if flags.is_empty() {
        description.clear();
        return;
    }
    let text = description.join(" ");
    for flag in flags.drain(..) {
        entries.push((flag, text.clone()));
    }
    description.clear();
}

/// Splits a content line into its leading flag tokens and the remainder.
///
/// Returns `None` when the line does not start with a plausible flag token,
/// leaving the line to be treated as description text.
fn split_flag_prefix(line: &str) -> Option<(Vec<String>, String)> {
    let mut flags = Vec::new();
    let mut remainder = line.trim_start();

    while let Some(word) = remainder.split_whitespace().next() {
        let Some(flag) = parse_flag_token(word) else {
            break;
        };
        flags.push(flag);
        remainder = remainder[word.len()..].trim_start();
    }

    if flags.is_empty() {
        None
    } else {
        Some((flags, remainder.to_string()))
    }
}

/// Validates and normalizes one candidate flag token.
///
/// A flag starts with one or two dashes followed by an alphanumeric
/// character; a trailing comma separator is stripped and any `=VALUE` suffix
/// is cut. Lone dashes and `--` terminators are rejected.
fn parse_flag_token(word: &str) -> Option<String> {
    let token = word.trim_end_matches(',');
    let token = token.split_once('=').map_or(token, |(name, _)| name);

    let body = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    if !body.chars().next().is_some_and(|ch| ch.is_ascii_alphanumeric()) {
        return None;
    }

    Some(token.to_string())
}
