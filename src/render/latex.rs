/// Removes a surrounding Markdown code fence (```` ```lang ```` … ```` ``` ````).
///
/// Only the opening line's fence and info string are dropped; text without
/// a fence is returned trimmed.
pub fn strip_code_fence(content: &str) -> &str {
    let mut body = content.trim();

    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            // Single-line fence such as ```x^2```
            None => rest,
        };
        if let Some(rest) = body.trim_end().strip_suffix("```") {
            body = rest;
        }
    }

    body.trim()
}

/// Extracts the bare LaTeX from a backend reply.
///
/// Strips code-fence markers, then one pair of surrounding display-math
/// brackets (`\[ … \]` or `[ … ]`). Brackets are only removed when the
/// opening one closes at the very end, so `[a, b] \times [c, d]` is kept.
pub fn strip_latex(content: &str) -> String {
    let body = strip_code_fence(content);

    let unbracketed = strip_enclosing(body, "\\[", "\\]")
        .or_else(|| strip_enclosing(body, "[", "]"))
        .unwrap_or(body);

    unbracketed.trim().to_string()
}

/// Inner text of `body` if it is wrapped in one matching `open`/`close` pair.
fn strip_enclosing<'a>(body: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let inner = body.strip_prefix(open)?.strip_suffix(close)?;

    let mut depth = 0usize;
    let mut rest = inner;
    while let Some(c) = rest.chars().next() {
        if rest.starts_with(open) {
            depth += 1;
            rest = &rest[open.len()..];
        } else if rest.starts_with(close) {
            // The outer bracket closed before the end
            depth = depth.checked_sub(1)?;
            rest = &rest[close.len()..];
        } else {
            rest = &rest[c.len_utf8()..];
        }
    }

    (depth == 0).then_some(inner)
}
