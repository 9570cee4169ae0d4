//! Single-pass token rewriter and the trailing-comma eliminator.
//!
//! The crux is the key/value disambiguation for bare words: `foo` is
//! lexically the same whether it is an object key or a string value, and the
//! only way to tell is the following significant token (`:` means key) plus
//! positional context (inside an array every element is a value).

use crate::repair::Logger;
use crate::tokenizer::{Token, TokenKind};
use memchr::memchr;

/// Minimal parse state threaded through one rewrite pass. Fresh per call;
/// nothing survives the call.
#[derive(Debug, Default)]
struct RewriteState {
    /// Set by `:`, cleared by the next value-producing token.
    expect_value: bool,
    /// Array nesting depth. Only emptiness is ever consulted.
    array_depth: usize,
    /// True right after `[`, before the first element or a comma.
    after_array_open: bool,
}

impl RewriteState {
    #[inline]
    fn value_emitted(&mut self) {
        self.expect_value = false;
        self.after_array_open = false;
    }
}

/// Walk the token sequence once and emit corrected JSON text. Structural
/// tokens and whitespace pass through verbatim; strings are normalized to
/// double quotes; bare words are quoted as keys or values.
pub(crate) fn rebuild(tokens: &[Token<'_>], log: &mut Logger) -> String {
    let mut out = String::with_capacity(tokens.last().map(|t| t.end + 16).unwrap_or(0));
    let mut st = RewriteState::default();
    for (idx, tok) in tokens.iter().enumerate() {
        match tok.kind {
            TokenKind::BraceOpen => {
                out.push('{');
                st.value_emitted();
            }
            TokenKind::BraceClose => out.push('}'),
            TokenKind::BracketOpen => {
                out.push('[');
                st.expect_value = false;
                st.array_depth += 1;
                st.after_array_open = true;
            }
            TokenKind::BracketClose => {
                out.push(']');
                st.array_depth = st.array_depth.saturating_sub(1);
                st.after_array_open = false;
            }
            TokenKind::Colon => {
                out.push(':');
                st.expect_value = true;
            }
            TokenKind::Comma => {
                out.push(',');
                st.after_array_open = false;
            }
            TokenKind::Whitespace => out.push_str(tok.text),
            TokenKind::String => {
                emit_string(tok, &mut out, log);
                st.value_emitted();
            }
            TokenKind::Number => {
                out.push_str(tok.text);
                st.value_emitted();
            }
            TokenKind::Boolean => {
                let canon = if tok.text.eq_ignore_ascii_case("true") {
                    "true"
                } else {
                    "false"
                };
                if tok.text != canon {
                    log.log(tok.start, "normalized boolean literal");
                }
                out.push_str(canon);
                st.value_emitted();
            }
            TokenKind::Null => {
                if tok.text != "null" {
                    log.log(tok.start, "normalized absent-value literal to null");
                }
                out.push_str("null");
                st.value_emitted();
            }
            TokenKind::Identifier => emit_identifier(tokens, idx, &mut st, &mut out, log),
            TokenKind::Unknown => out.push_str(tok.text),
        }
    }
    out
}

fn emit_identifier(
    tokens: &[Token<'_>],
    idx: usize,
    st: &mut RewriteState,
    out: &mut String,
    log: &mut Logger,
) {
    let tok = &tokens[idx];
    let key_position =
        st.array_depth == 0 && next_significant(tokens, idx) == Some(TokenKind::Colon);
    if key_position {
        log.log(tok.start, "quoted unquoted object key");
        quote_bare(tok.text, out);
        return;
    }
    if st.expect_value || st.array_depth > 0 || st.after_array_open {
        if is_plain_number(tok.text) {
            out.push_str(tok.text);
        } else {
            // Covers leading-zero numerals like 007, which JSON numbers
            // cannot represent, as well as ordinary bare words.
            log.log(tok.start, "quoted bare word as string value");
            quote_bare(tok.text, out);
        }
        st.value_emitted();
        return;
    }
    // Ambiguous position: quote as a string and move on.
    log.log(tok.start, "quoted bare word in ambiguous position");
    quote_bare(tok.text, out);
}

/// Next non-whitespace token kind after `idx`. One-token lookahead, the
/// whole key/value decision hangs on this.
fn next_significant(tokens: &[Token<'_>], idx: usize) -> Option<TokenKind> {
    tokens[idx + 1..]
        .iter()
        .find(|t| t.kind != TokenKind::Whitespace)
        .map(|t| t.kind)
}

/// `-?\d+\.?\d*`, rejecting integer parts with a leading zero (`007`).
fn is_plain_number(text: &str) -> bool {
    let t = text.strip_prefix('-').unwrap_or(text);
    let b = t.as_bytes();
    let int_len = b.iter().take_while(|c| c.is_ascii_digit()).count();
    if int_len == 0 {
        return false;
    }
    if int_len > 1 && b[0] == b'0' {
        return false;
    }
    let rest = &b[int_len..];
    match rest.first() {
        None => true,
        Some(b'.') => rest[1..].iter().all(|c| c.is_ascii_digit()),
        Some(_) => false,
    }
}

/// Identifier characters never include quotes or backslashes, so wrapping
/// is a plain surround.
fn quote_bare(text: &str, out: &mut String) {
    out.push('"');
    out.push_str(text);
    out.push('"');
}

/// Re-emit a string token double-quoted. Double-quoted input passes through
/// verbatim; single-quoted input gets its outer quotes swapped, embedded `"`
/// escaped, and `\'` relaxed back to a bare `'`.
fn emit_string(tok: &Token<'_>, out: &mut String, log: &mut Logger) {
    if tok.text.starts_with('"') {
        out.push_str(tok.text);
        return;
    }
    log.log(tok.start, "converted single-quoted string to double quotes");
    out.push('"');
    let inner = &tok.text[1..];
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                // No longer needs escaping inside double quotes.
                Some('\'') => out.push('\''),
                Some(e) => {
                    out.push('\\');
                    out.push(e);
                }
                // Dangling backslash at end of an unterminated token.
                None => out.push_str("\\\\"),
            },
            '\'' if chars.peek().is_none() => break, // closing delimiter
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
}

/// Remove a comma (plus any whitespace run after it) that immediately
/// precedes a closing `}` or `]`. Runs after rewriting, because quoting can
/// grow tokens but comma-before-close stays adjacent modulo whitespace.
/// Like the rest of the pipeline this pass is not string-aware.
pub(crate) fn strip_trailing_commas(input: &str, log: &mut Logger) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0usize;
    while let Some(p) = memchr(b',', &bytes[i..]) {
        let comma = i + p;
        let mut j = comma + 1;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j < bytes.len() && (bytes[j] == b'}' || bytes[j] == b']') {
            out.push_str(&input[i..comma]);
            log.log(comma, "removed trailing comma");
            i = j;
        } else {
            out.push_str(&input[i..comma + 1]);
            i = comma + 1;
        }
    }
    out.push_str(&input[i..]);
    out
}
