//! Character and token classification shared by the extractor passes.

/// Returns `true` if the character is a CJK ideograph or Japanese kana.
///
/// Hangul is excluded: Korean separates words with spaces, so treating it
/// as CJK here would let the normalizer fuse real words.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // CJK Extension A
        | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}' // CJK Extension B
        | '\u{3040}'..='\u{309F}'   // Hiragana
        | '\u{30A0}'..='\u{30FF}'   // Katakana
    )
}

/// Regex character class matching exactly the characters [`is_cjk`] accepts.
pub const CJK_CLASS: &str = r"[\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}\x{F900}-\x{FAFF}\x{20000}-\x{2A6DF}\x{3040}-\x{309F}\x{30A0}-\x{30FF}]";

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

const MAX_TAG_LEN: usize = 5;

/// Length in bytes of a single `abbr.` tag at the start of `text`.
fn tag_len(text: &str) -> Option<usize> {
    let letters = text
        .bytes()
        .take_while(|b| b.is_ascii_lowercase())
        .take(MAX_TAG_LEN + 1)
        .count();
    if letters == 0 || letters > MAX_TAG_LEN {
        return None;
    }
    (text.as_bytes().get(letters) == Some(&b'.')).then_some(letters + 1)
}

/// Length in bytes of a part-of-speech marker at the start of `text`.
///
/// A marker is a 1-5 letter lowercase tag followed by a period (`n.`,
/// `adj.`), or two such tags joined by a slash (`adj./adv.`).
pub fn pos_marker_len(text: &str) -> Option<usize> {
    let first = tag_len(text)?;
    let rest = &text[first..];
    match rest.strip_prefix('/').and_then(tag_len) {
        Some(second) => Some(first + 1 + second),
        None => Some(first),
    }
}

pub fn starts_with_pos_marker(text: &str) -> bool {
    pos_marker_len(text).is_some()
}

/// Returns `true` if a part-of-speech marker begins anywhere in `text`
/// at a position not preceded by an ASCII letter.
pub fn has_pos_marker(text: &str) -> bool {
    let mut prev: Option<char> = None;
    for (i, c) in text.char_indices() {
        let boundary = !prev.is_some_and(|p| p.is_ascii_alphabetic());
        if boundary && c.is_ascii_lowercase() && pos_marker_len(&text[i..]).is_some() {
            return true;
        }
        prev = Some(c);
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

/// A candidate headword: an ASCII letter followed by at least one more
/// letter or hyphen.
pub fn is_latin_word(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && token.len() >= 2
        && chars.all(is_word_char)
}

/// Byte offset where the trailing Latin word of `token` starts, if it has one.
///
/// `"猫dog"` yields the offset of `dog`; `"dog"` yields 0.
pub fn trailing_latin_word(token: &str) -> Option<usize> {
    let start = token
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word_char(c))
        .last()
        .map(|(i, _)| i)?;
    // Leading hyphens belong to the separator, not the word.
    let start = token[start..]
        .find(|c: char| c.is_ascii_alphabetic())
        .map(|offset| start + offset)?;
    is_latin_word(&token[start..]).then_some(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_classification() {
        assert!(is_cjk('猫'));
        assert!(is_cjk('の'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('한'));
        assert!(contains_cjk("n. 猫"));
        assert!(!contains_cjk("n. cat"));
    }

    #[test]
    fn regex_class_agrees_with_is_cjk() {
        let class = regex::Regex::new(&format!("^{CJK_CLASS}$")).unwrap();
        let samples = [
            '猫', '㐀', '豈', '\u{20000}', 'あ', 'カ', '한', 'a', '1', '。', '\u{2A6E0}', '\u{3000}',
        ];
        for c in samples {
            assert_eq!(class.is_match(&c.to_string()), is_cjk(c), "mismatch for {c:?}");
        }
    }

    #[test]
    fn single_tag_marker() {
        assert_eq!(pos_marker_len("n. 猫"), Some(2));
        assert_eq!(pos_marker_len("adj.猫"), Some(4));
        assert_eq!(pos_marker_len("prep. 在"), Some(5));
    }

    #[test]
    fn slash_joined_marker() {
        assert_eq!(pos_marker_len("adj./adv. 快"), Some(9));
        assert_eq!(pos_marker_len("n./"), Some(2));
    }

    #[test]
    fn reject_malformed_markers() {
        assert_eq!(pos_marker_len("N. 猫"), None);
        assert_eq!(pos_marker_len("abcdef. 猫"), None);
        assert_eq!(pos_marker_len("n 猫"), None);
        assert_eq!(pos_marker_len(""), None);
    }

    #[test]
    fn marker_anywhere_needs_boundary() {
        assert!(has_pos_marker("1. n. 猫"));
        assert!(has_pos_marker("猫vt.抓"));
        assert!(!has_pos_marker("Mr.Smith 史密斯"));
        assert!(!has_pos_marker("nothing here"));
    }

    #[test]
    fn latin_word_shape() {
        assert!(is_latin_word("cat"));
        assert!(is_latin_word("well-known"));
        assert!(!is_latin_word("a"));
        assert!(!is_latin_word("-cat"));
        assert!(!is_latin_word("cat1"));
    }

    #[test]
    fn trailing_word_offsets() {
        assert_eq!(trailing_latin_word("dog"), Some(0));
        assert_eq!(trailing_latin_word("猫xyz"), Some("猫".len()));
        assert_eq!(trailing_latin_word("2.dog"), Some(2));
        assert_eq!(trailing_latin_word("--dog"), Some(2));
        assert_eq!(trailing_latin_word("猫x"), None);
        assert_eq!(trailing_latin_word("狗"), None);
    }
}
