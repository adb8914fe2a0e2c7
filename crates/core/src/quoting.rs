//! Single-quoted PowerShell string literals.
//!
//! This is the only place untrusted text is turned into script syntax. Inside
//! a single-quoted literal PowerShell performs no expansion at all; the only
//! way out of the literal is a quote character, so every quote character is
//! doubled. PowerShell accepts the typographic single quotes as well as the
//! ASCII apostrophe as delimiters, so those are doubled too.

/// Characters PowerShell treats as a single-quote delimiter.
const QUOTE_CHARS: [char; 5] = ['\'', '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'];

fn is_quote_char(c: char) -> bool {
    QUOTE_CHARS.contains(&c)
}

/// Wrap `text` in single quotes, doubling every embedded quote character.
///
/// Backslashes, newlines, `$`, backticks and every other character pass
/// through unchanged.
pub fn quote_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        if is_quote_char(c) {
            out.push(c);
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Like [`quote_literal`], treating an absent value as the empty string.
pub fn quote_optional(text: Option<&str>) -> String {
    quote_literal(text.unwrap_or_default())
}

/// Reverse [`quote_literal`].
///
/// Returns `None` unless `quoted` is exactly one well-formed literal: outer
/// ASCII quotes present and every interior quote character doubled.
pub fn unquote_literal(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if is_quote_char(c) {
            if chars.next() != Some(c) {
                return None;
            }
        }
        out.push(c);
    }
    Some(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
