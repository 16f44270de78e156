// Morekeys Spec Splitter
// Escape-aware splitting of comma separated key spec strings

use crate::spec::{ESCAPE, SEPARATOR};

/// Split a string of comma separated key specs into individual specs.
///
/// A key spec can contain a character escaped by the backslash character,
/// including the comma itself. Escapes are not resolved here; each returned
/// spec is an exact substring of the input. Empty specs produced by leading,
/// trailing or adjacent commas are eliminated.
///
/// Returns None when the text holds no key specs at all.
pub fn split_key_specs(text: &str) -> Option<Vec<String>> {
    if text.is_empty() {
        return None;
    }
    // Fast path for a one-letter key spec.
    if text.len() == 1 {
        return (text != ",").then(|| vec![text.to_string()]);
    }
    let mut specs = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices();
    while let Some((pos, c)) = iter.next() {
        if c == SEPARATOR {
            // Skip empty entries.
            if pos > start {
                specs.push(text[start..pos].to_string());
            }
            start = pos + 1;
        } else if c == ESCAPE {
            // The escaped character is taken literally, whatever it is. A
            // trailing escape with nothing after it falls through to the
            // remainder below.
            iter.next();
        }
    }
    if text.len() > start {
        specs.push(text[start..].to_string());
    }
    if specs.is_empty() {
        None
    } else {
        Some(specs)
    }
}

/// Drop empty entries from a spec list, preserving order
pub fn filter_out_empty(specs: Option<&[String]>) -> Vec<String> {
    let Some(specs) = specs else {
        return Vec::new();
    };
    specs.iter().filter(|s| !s.is_empty()).cloned().collect()
}
