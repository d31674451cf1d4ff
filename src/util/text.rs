//! Utility functions for text slicing and rule-string parsing

/// Check if a line contains only whitespace
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Number of characters in a string
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the first `|` not immediately preceded by a backslash
pub fn find_unescaped_pipe(s: &str) -> Option<usize> {
    let mut prev_backslash = false;
    for (i, ch) in s.char_indices() {
        if ch == '|' && !prev_backslash {
            return Some(i);
        }
        prev_backslash = ch == '\\';
    }
    None
}

/// Split a rule string into its two raw halves at the first unescaped pipe.
/// Returns None when the string contains no unescaped pipe.
pub fn split_pair(s: &str) -> Option<(&str, &str)> {
    let i = find_unescaped_pipe(s)?;
    Some((&s[..i], &s[i + 1..]))
}

/// Replace `\|` escape sequences with literal pipes
pub fn unescape_pipes(s: &str) -> String {
    s.replace("\\|", "|")
}

/// Suffix of `s` spanning the last `n` characters.
/// Returns the whole string when it has fewer than `n` characters.
pub fn suffix_chars(s: &str, n: usize) -> &str {
    let total = char_len(s);
    if n >= total {
        return s;
    }
    let start = s
        .char_indices()
        .nth(total - n)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[start..]
}

/// Prefix of `s` spanning the first `n` characters.
/// Returns the whole string when it has fewer than `n` characters.
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
