//! Comment stripping and bare-input wrapping, applied before tokenization.

use crate::repair::Logger;
use memchr::{memchr, memchr2};

/// Strip comments, trim, and wrap bare scalar/unbraced input into a minimal
/// valid shell. Pure text transform.
///
/// Comment removal works on the whole input and is not string-aware: a
/// comment-like sequence inside a quoted string is stripped too. Known
/// limitation of the single-pass design, kept on purpose.
pub(crate) fn preprocess(input: &str, log: &mut Logger) -> String {
    let stripped = strip_comments(input, log);
    let trimmed = stripped.trim();
    if starts_like_json(trimmed) {
        trimmed.to_string()
    } else if trimmed.contains(':') {
        // Unbraced object body: a: 1, b: 2
        log.log(0, "wrapped unbraced key/value text in braces");
        format!("{{{trimmed}}}")
    } else {
        log.log(0, "wrapped bare scalar in quotes");
        format!("\"{trimmed}\"")
    }
}

fn starts_like_json(s: &str) -> bool {
    match s.as_bytes().first() {
        Some(b'[') | Some(b'{') | Some(b'"') | Some(b'-') => true,
        Some(b) if b.is_ascii_digit() => true,
        _ => {
            let lower = s
                .get(..5.min(s.len()))
                .map(|p| p.to_ascii_lowercase())
                .unwrap_or_default();
            lower.starts_with("true") || lower.starts_with("false") || lower.starts_with("null")
        }
    }
}

/// Remove `//` line comments (up to, not including, the newline) and
/// non-greedy `/* */` block comments. An unclosed block comment swallows the
/// rest of the input.
fn strip_comments(input: &str, log: &mut Logger) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0usize;
    while let Some(p) = memchr(b'/', &bytes[i..]) {
        let slash = i + p;
        let next = bytes.get(slash + 1).copied();
        match next {
            Some(b'/') => {
                out.push_str(&input[i..slash]);
                log.log(slash, "removed line comment");
                i = match memchr2(b'\n', b'\r', &bytes[slash + 2..]) {
                    Some(q) => slash + 2 + q,
                    None => bytes.len(),
                };
            }
            Some(b'*') => {
                out.push_str(&input[i..slash]);
                log.log(slash, "removed block comment");
                let mut off = slash + 2;
                let mut end = bytes.len();
                while let Some(q) = memchr(b'*', &bytes[off..]) {
                    let idx = off + q;
                    if bytes.get(idx + 1) == Some(&b'/') {
                        end = idx + 2;
                        break;
                    }
                    off = idx + 1;
                }
                i = end;
            }
            _ => {
                out.push_str(&input[i..slash + 1]);
                i = slash + 1;
            }
        }
    }
    out.push_str(&input[i..]);
    out
}
