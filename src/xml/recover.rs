//! Namespace-prefix stripping for the last-resort parse.
//!
//! Exporters routinely emit `uml:`/`xmi:` prefixed names without declaring the
//! namespaces. Removing the prefixes trades namespace fidelity for
//! parseability; extraction matches on local names only, so nothing
//! downstream depends on the prefixes.

use std::borrow::Cow;

/// Prefixes removed wherever they start a name.
pub const PROBLEMATIC_PREFIXES: &[&str] = &["xml:", "xmlns:", "xsi:", "uml:", "xmi:"];

/// Remove every [`PROBLEMATIC_PREFIXES`] occurrence that starts a name: the
/// prefix must not be preceded by a name character and must be followed by an
/// ASCII letter.
///
/// Attribute values are rewritten too (`xmi:type="uml:Class"` becomes
/// `type="Class"`).
pub fn strip_problematic_prefixes(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut last = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(len) = prefix_at(bytes, i) {
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
            buf.push_str(&text[last..i]);
            i += len;
            last = i;
        } else {
            i += 1;
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[last..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

fn prefix_at(bytes: &[u8], i: usize) -> Option<usize> {
    if i > 0 && is_name_byte(bytes[i - 1]) {
        return None;
    }
    PROBLEMATIC_PREFIXES
        .iter()
        .map(|p| p.as_bytes())
        .find(|p| {
            bytes[i..].starts_with(p)
                && bytes.get(i + p.len()).is_some_and(|b| b.is_ascii_alphabetic())
        })
        .map(|p| p.len())
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.') || b >= 0x80
}
