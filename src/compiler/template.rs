use crate::error::FilterError;
use crate::scope::FilterScope;

/// Marker replaced by the target table alias during substitution.
pub const THIS_MARKER: &str = "$this";

/// Collapse continuation artifacts left by multi-line doc-text templates.
///
/// Templates authored inside doc blocks carry a newline, indentation, and a
/// leading `*` marker on every continuation line; the whole sequence collapses
/// to nothing so clause text flows as a single line.
pub fn normalize(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\n' {
            let mut run = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() && next != '*' {
                    run.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if !run.is_empty() && chars.peek() == Some(&'*') {
                chars.next();
                continue;
            }
            out.push('\n');
            out.push_str(&run);
            continue;
        }
        out.push(ch);
    }

    out
}

/// Substitute `{identifier}` placeholders and the `$this` marker in one pass.
///
/// Only identifiers that literally appear in the template are resolved, so a
/// rule never fails over values it does not reference. A placeholder whose
/// holder is missing from the scope fails with `UnknownValueHolder`; a holder
/// whose value is `None` substitutes the empty string. Substituted values are
/// emitted verbatim and never rescanned, so a value containing `{other}` is
/// not recursively substituted. `$this` is replaced only when not followed by
/// another identifier character, and a `{` that does not open a well-formed
/// placeholder is copied through literally.
pub fn substitute(
    template: &str,
    table_alias: &str,
    scope: &FilterScope,
) -> Result<String, FilterError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut i = 0;

    while i < template.len() {
        let rest = &template[i..];

        if let Some(after) = rest.strip_prefix(THIS_MARKER) {
            if !starts_with_identifier_char(after) {
                out.push_str(table_alias);
                i += THIS_MARKER.len();
                continue;
            }
        }

        if rest.starts_with('{') {
            if let Some((identifier, consumed)) = scan_placeholder(rest) {
                let holder = scope.values()?.lookup(identifier)?;
                if let Some(value) = holder.value() {
                    out.push_str(&value);
                }
                i += consumed;
                continue;
            }
        }

        // Copy through to the next byte that could open a marker.
        let first_len = rest.chars().next().map_or(1, char::len_utf8);
        let next = rest[first_len..]
            .find(['{', '$'])
            .map_or(rest.len(), |offset| offset + first_len);
        out.push_str(&rest[..next]);
        i += next;
    }

    Ok(out)
}

/// Parse a `{identifier}` token at the start of `rest`.
///
/// Returns the identifier and the number of bytes consumed, or `None` when
/// the braces do not delimit a well-formed identifier.
fn scan_placeholder(rest: &str) -> Option<(&str, usize)> {
    let inner = rest.strip_prefix('{')?;
    let end = inner.find('}')?;
    let identifier = &inner[..end];
    if !is_identifier(identifier) {
        return None;
    }
    Some((identifier, end + 2))
}

fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn starts_with_identifier_char(s: &str) -> bool {
    s.chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
