//! Definition cleanup applied to every accepted candidate.

use crate::script::is_cjk;

/// Normalize a raw definition.
///
/// Whitespace runs collapse to one space and the ends are trimmed, then any
/// space sitting between two CJK characters is dropped. Those spaces come
/// from row reconstruction joining adjacent fragments.
pub fn normalize_definition(raw: &str) -> String {
    let collapsed = normalize_whitespace(raw);
    remove_cjk_gaps(&collapsed)
}

/// Trim and collapse whitespace runs to a single space.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn remove_cjk_gaps(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' && i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            if is_cjk(prev) && next.is_some_and(is_cjk) {
                continue;
            }
        }
        out.push(c);
    }
    out
}
