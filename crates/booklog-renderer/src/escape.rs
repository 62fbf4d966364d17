//! HTML entity escaping.

/// Escape HTML special characters, leaving existing entities intact.
///
/// Replaces `&`, `<`, `>`, and `"` with their named entities. An `&` that
/// already starts an entity reference (`&amp;`, `&#39;`, `&#x27;`) is
/// copied through unchanged, so escaping an already-escaped string never
/// double-escapes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        match c {
            '&' => {
                if let Some(len) = entity_len(rest) {
                    result.push_str(&rest[..len]);
                    rest = &rest[len..];
                    continue;
                }
                result.push_str("&amp;");
            }
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    result
}

/// Length of the entity reference at the start of `s`, which begins with `&`.
///
/// Recognizes named (`&name;`), decimal (`&#NN;`), and hexadecimal
/// (`&#xHH;`) forms.
fn entity_len(s: &str) -> Option<usize> {
    let inner = &s[1..];
    if let Some(numeric) = inner.strip_prefix('#') {
        if let Some(hex) = numeric.strip_prefix(['x', 'X']) {
            let end = hex.find(';')?;
            (end > 0 && end <= 8 && hex[..end].bytes().all(|b| b.is_ascii_hexdigit()))
                .then_some(3 + end + 1)
        } else {
            let end = numeric.find(';')?;
            (end > 0 && end <= 8 && numeric[..end].bytes().all(|b| b.is_ascii_digit()))
                .then_some(2 + end + 1)
        }
    } else {
        let end = inner.find(';')?;
        let name = &inner[..end];
        (end > 0
            && end <= 32
            && name.starts_with(|c: char| c.is_ascii_alphabetic())
            && name.bytes().all(|b| b.is_ascii_alphanumeric()))
        .then_some(1 + end + 1)
    }
}
