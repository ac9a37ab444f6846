//! Line normalization: what counts as a word.
//!
//! A raw line is reduced to lowercase ASCII alphanumerics, single spaces between words and
//! apostrophes that sit strictly inside a word (`don't`, `rock'n'roll`). Everything outside
//! the first and last alphanumeric byte is discarded up front, so the output never starts or
//! ends with a separator.

const APOSTROPHE: u8 = b'\'';
const SEPARATOR: u8 = b' ';

/// Map one raw byte onto the intermediate alphabet: lowercase alnum, apostrophe or space.
#[inline]
fn fold(byte: u8) -> u8 {
    if byte.is_ascii_alphanumeric() {
        byte.to_ascii_lowercase()
    } else if byte == APOSTROPHE {
        APOSTROPHE
    } else {
        SEPARATOR
    }
}

/// Normalize one line into a fresh string.
pub fn normalize(line: &[u8]) -> String {
    let mut out = String::with_capacity(line.len());
    normalize_into(line, &mut out);
    out
}

/// Normalize one line into `out`, replacing its previous contents.
///
/// Lets a caller reuse one buffer for every line it processes.
pub fn normalize_into(line: &[u8], out: &mut String) {
    out.clear();

    let Some(first) = line.iter().position(u8::is_ascii_alphanumeric) else {
        return;
    };
    let last = line
        .iter()
        .rposition(u8::is_ascii_alphanumeric)
        .unwrap_or(first);
    let span = &line[first..=last];

    let mut prev_alnum = false;
    for (i, &raw) in span.iter().enumerate() {
        match fold(raw) {
            APOSTROPHE => {
                let next_alnum = span
                    .get(i + 1)
                    .is_some_and(|&next| fold(next).is_ascii_alphanumeric());
                if prev_alnum && next_alnum {
                    out.push('\'');
                }
                prev_alnum = false;
            }
            SEPARATOR => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                prev_alnum = false;
            }
            c => {
                out.push(char::from(c));
                prev_alnum = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize(b"Don't stop!!"), "don't stop");
        assert_eq!(normalize(b"'hello'   world-123"), "hello world 123");
        assert_eq!(normalize(b"The QUICK, brown fox."), "the quick brown fox");
    }

    #[test]
    fn test_empty_and_separator_only_lines() {
        assert_eq!(normalize(b""), "");
        assert_eq!(normalize(b"   \t  "), "");
        assert_eq!(normalize(b"!?-- ''' ..."), "");
    }

    #[test]
    fn test_interior_apostrophes_survive() {
        assert_eq!(normalize(b"rock'n'roll"), "rock'n'roll");
        assert_eq!(normalize(b"It's O'Brien's"), "it's o'brien's");
    }

    #[test]
    fn test_edge_apostrophes_dropped() {
        assert_eq!(normalize(b"'quoted'"), "quoted");
        assert_eq!(normalize(b"dogs' bones"), "dogs bones");
        assert_eq!(normalize(b"a ' b"), "a b");
        assert_eq!(normalize(b"a '' b"), "a b");
        assert_eq!(normalize(b"word' -next"), "word next");
    }

    #[test]
    fn test_double_apostrophe_joins_without_separator() {
        // Both apostrophes fail the neighbour check and neither emits a space.
        assert_eq!(normalize(b"a''b"), "ab");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(normalize(b"one,,,two   three\t\tfour"), "one two three four");
        assert_eq!(normalize(b"  padded  \r"), "padded");
    }

    #[test]
    fn test_non_ascii_bytes_are_separators() {
        assert_eq!(normalize("café au lait".as_bytes()), "caf au lait");
        assert_eq!(normalize(&[0xff, b'a', 0x00, b'B', 0x80]), "a b");
    }

    #[test]
    fn test_idempotent() {
        let lines: [&[u8]; 6] = [
            b"Don't stop!!",
            b"'hello'   world-123",
            b"rock'n'roll -- it's ''fine''",
            b"a''b c ' d",
            b"",
            b"MiXeD 42 cAsE",
        ];
        for line in lines {
            let once = normalize(line);
            assert_eq!(normalize(once.as_bytes()), once);
        }
    }

    #[test]
    fn test_normalize_into_reuses_buffer() {
        let mut buf = String::from("stale contents");
        normalize_into(b"Fresh Line", &mut buf);
        assert_eq!(buf, "fresh line");
        normalize_into(b"...", &mut buf);
        assert!(buf.is_empty());
    }
}
