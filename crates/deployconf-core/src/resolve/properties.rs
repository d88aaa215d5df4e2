//! Java-properties text parsing.

use super::errors::LayerError;

/// Parse properties text into `(key, value)` pairs in file order.
pub(crate) fn parse(origin: &str, text: &str) -> Result<Vec<(String, String)>, LayerError> {
    let mut pairs = Vec::new();

    for (line_no, line) in logical_lines(text) {
        let malformed = |reason: String| LayerError::Malformed {
            origin: origin.to_string(),
            line: line_no,
            reason,
        };

        let (raw_key, raw_value) = split_entry(&line);
        let key = unescape(raw_key).map_err(malformed)?;
        let value = unescape(raw_value).map_err(malformed)?;
        pairs.push((key, value));
    }

    Ok(pairs)
}

/// Decode file bytes as UTF-8, falling back to ISO-8859-1.
pub(crate) fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Join continued lines, dropping blanks and comments. Yields the 1-based
/// number of the first physical line of each logical line.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut continuing = false;

    for (i, raw) in text.lines().enumerate() {
        let line = if continuing {
            raw.trim_start()
        } else {
            let trimmed = raw.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            start = i + 1;
            trimmed
        };

        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            current.push_str(&line[..line.len() - 1]);
            continuing = true;
        } else {
            current.push_str(line);
            lines.push((start, std::mem::take(&mut current)));
            continuing = false;
        }
    }

    if continuing {
        lines.push((start, current));
    }

    lines
}

/// Split a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start();
    }

    (key, rest)
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let (code, hex) = hex_escape(&mut chars)?;
                let code = if (0xD800..0xDC00).contains(&code) {
                    combine_surrogates(code, &hex, &mut chars)?
                } else {
                    code
                };
                let decoded = char::from_u32(code)
                    .ok_or_else(|| format!("\\u{} is not a valid character", hex))?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Read the four hex digits following `\u`.
fn hex_escape(chars: &mut std::str::Chars<'_>) -> Result<(u32, String), String> {
    let hex: String = chars.by_ref().take(4).collect();
    u32::from_str_radix(&hex, 16)
        .ok()
        .filter(|_| hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .map(|code| (code, hex.clone()))
        .ok_or_else(|| format!("invalid \\u escape '\\u{}'", hex))
}

/// A high surrogate must be followed by a `\u` low surrogate; the pair
/// encodes one supplementary character.
fn combine_surrogates(
    high: u32,
    high_hex: &str,
    chars: &mut std::str::Chars<'_>,
) -> Result<u32, String> {
    if chars.as_str().starts_with("\\u") {
        let mut lookahead = chars.clone();
        lookahead.nth(1);
        let (low, _) = hex_escape(&mut lookahead)?;
        if (0xDC00..0xE000).contains(&low) {
            *chars = lookahead;
            return Ok(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00));
        }
    }

    Err(format!("\\u{} is an unpaired surrogate", high_hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, String)> {
        parse("test", text).unwrap()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_separators() {
        assert_eq!(
            pairs("a=1\nb:2\nc 3\nd = 4\ne\t:\t5\n"),
            vec![pair("a", "1"), pair("b", "2"), pair("c", "3"), pair("d", "4"), pair("e", "5")]
        );
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        assert_eq!(
            pairs("# comment\n! also comment\n\n   \n  key=value\n"),
            vec![pair("key", "value")]
        );
    }

    #[test]
    fn test_key_without_value() {
        assert_eq!(pairs("deployment.proxy.type.locked\n"), vec![pair("deployment.proxy.type.locked", "")]);
        assert_eq!(pairs("empty=\n"), vec![pair("empty", "")]);
    }

    #[test]
    fn test_value_keeps_inner_separators() {
        assert_eq!(
            pairs("deployment.system.config=file:///etc/deploy=1.properties\n"),
            vec![pair("deployment.system.config", "file:///etc/deploy=1.properties")]
        );
    }

    #[test]
    fn test_continuation_lines() {
        assert_eq!(
            pairs("deployment.plugin.jvm.arguments=-Xmx512m \\\n    -Dfoo=bar\nnext=1\n"),
            vec![
                pair("deployment.plugin.jvm.arguments", "-Xmx512m -Dfoo=bar"),
                pair("next", "1")
            ]
        );
    }

    #[test]
    fn test_escaped_backslash_is_not_continuation() {
        assert_eq!(
            pairs("deployment.jre.dir=C:\\\\jre\\\\\nnext=1\n"),
            vec![pair("deployment.jre.dir", "C:\\jre\\"), pair("next", "1")]
        );
    }

    #[test]
    fn test_escapes() {
        assert_eq!(pairs(r"a\=b=c\:d"), vec![pair("a=b", "c:d")]);
        assert_eq!(pairs(r"tab=x\ty"), vec![pair("tab", "x\ty")]);
        assert_eq!(pairs(r"u=caf\u00e9"), vec![pair("u", "café")]);
        assert_eq!(pairs(r"sp\ ace=1"), vec![pair("sp ace", "1")]);
    }

    #[test]
    fn test_decode_utf8_and_latin1() {
        assert_eq!(decode("café".as_bytes().to_vec()), "café");
        assert_eq!(decode(b"caf\xe9".to_vec()), "café");
        assert_eq!(decode(b"\xa9 \xff".to_vec()), "\u{a9} \u{ff}");
    }

    #[test]
    fn test_surrogate_pair_escape() {
        assert_eq!(pairs(r"k=\ud83d\ude00"), vec![pair("k", "\u{1F600}")]);
        assert_eq!(pairs(r"k=a\uD83D\uDE00b"), vec![pair("k", "a\u{1F600}b")]);
    }

    #[test]
    fn test_unpaired_surrogate_is_malformed() {
        for text in [r"k=\ud83d", r"k=\ud83dx", r"k=\ud83d\u0041", r"k=\ude00"] {
            assert!(
                matches!(parse("user", text), Err(LayerError::Malformed { line: 1, .. })),
                "'{}' should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_bad_unicode_escape_reports_line() {
        let err = parse("user", "ok=1\n\nbad=\\u12\n").unwrap_err();
        match err {
            LayerError::Malformed { origin, line, .. } => {
                assert_eq!(origin, "user");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_line_number_of_continued_entry() {
        let err = parse("user", "a=1\\\n  2\nb=\\uZZZZ\n").unwrap_err();
        assert!(matches!(err, LayerError::Malformed { line: 3, .. }));
    }
}
