//! Helpers for the odd field formats monster compendia use.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Source tags that get stripped from pipe-joined values.
const SOURCE_TAGS: &[&str] = &["XPHB"];

/// Which part of a pipe-joined value to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipePick {
    /// The first remaining part.
    First,
    /// The last remaining part.
    Last,
}

/// First letter uppercased, the rest lowercased. Empty in, empty out.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Resolve a pipe-joined value like `longsword|XPHB|sword`, dropping
/// source tags and keeping the chosen part. Values without a pipe pass
/// through unchanged.
pub fn strip_pipe(value: &str, pick: PipePick) -> &str {
    if !value.contains('|') {
        return value;
    }
    let parts: Vec<&str> = value
        .split('|')
        .filter(|part| !SOURCE_TAGS.contains(part))
        .collect();
    match pick {
        PipePick::First => parts.first().copied().unwrap_or(""),
        PipePick::Last => parts.last().copied().unwrap_or(""),
    }
}

/// First integer in a special HP/AC string, e.g. `"67 (regenerating)"`
/// gives 67. `None` when the string has no digits.
pub fn extract_stat(value: &str) -> Option<u32> {
    NUMBER_RE.find(value)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("goblin"), "Goblin");
        assert_eq!(capitalize("DIRE WOLF"), "Dire wolf");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn strip_pipe_keeps_plain_values() {
        assert_eq!(strip_pipe("longsword", PipePick::First), "longsword");
    }

    #[test]
    fn strip_pipe_picks_parts() {
        assert_eq!(strip_pipe("longsword|sword", PipePick::First), "longsword");
        assert_eq!(strip_pipe("longsword|sword", PipePick::Last), "sword");
    }

    #[test]
    fn strip_pipe_drops_source_tags() {
        assert_eq!(strip_pipe("XPHB|longsword", PipePick::First), "longsword");
        assert_eq!(strip_pipe("longsword|XPHB", PipePick::Last), "longsword");
    }

    #[test]
    fn extract_stat_finds_first_number() {
        assert_eq!(extract_stat("67 (has regeneration)"), Some(67));
        assert_eq!(extract_stat("AC 15, touch 12"), Some(15));
        assert_eq!(extract_stat("none"), None);
    }
}
