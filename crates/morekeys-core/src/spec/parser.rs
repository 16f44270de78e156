// Morekeys Key Spec Parser
// Decodes one key spec token into its label, code, output text and icon
// parts.
//
// A key spec is `body` or `body|output`. The body is a display label or an
// `!icon/NAME` reference; the output is literal text or an explicit
// `!code/NAME` (or `!code/0xHHHH`) code. Backslash escapes the character
// that follows it anywhere in the spec.

use crate::code;
use crate::error::KeySpecError;
use crate::icon::KeyIcon;
use crate::spec::{ESCAPE, LABEL_END, PREFIX_CODE, PREFIX_HEX, PREFIX_ICON};

/// Code decoded from one key spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSpec {
    /// A single code point or function code.
    Code(i32),
    /// No single code; the spec's output text is emitted verbatim.
    OutputText,
}

/// Byte position of the first unescaped label end at or after `start`
fn index_of_label_end(spec: &str, start: usize) -> Option<usize> {
    let mut iter = spec[start..].char_indices();
    while let Some((pos, c)) = iter.next() {
        if c == ESCAPE {
            iter.next();
        } else if c == LABEL_END {
            return Some(start + pos);
        }
    }
    None
}

/// Resolve escape pairs: `\x` becomes `x` for any character `x`
pub fn parse_escape(text: &str) -> String {
    if !text.contains(ESCAPE) {
        return text.to_string();
    }
    let mut parsed = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            match chars.next() {
                Some(escaped) => parsed.push(escaped),
                // A trailing escape has nothing to consume; keep it as-is.
                None => parsed.push(ESCAPE),
            }
        } else {
            parsed.push(c);
        }
    }
    parsed
}

fn has_icon(spec: &str) -> bool {
    spec.starts_with(PREFIX_ICON)
}

/// The raw output part after the label end, if the spec declares one
fn output_part(spec: &str) -> Result<Option<&str>, KeySpecError> {
    let Some(end) = index_of_label_end(spec, 0) else {
        return Ok(None);
    };
    if index_of_label_end(spec, end + 1).is_some() {
        return Err(KeySpecError::MultipleOutputTexts(spec.to_string()));
    }
    Ok(Some(&spec[end + 1..]))
}

/// The display label of a key spec. Icon specs have no label.
pub fn get_label(spec: &str) -> Result<Option<String>, KeySpecError> {
    if has_icon(spec) {
        return Ok(None);
    }
    let label = match index_of_label_end(spec, 0) {
        Some(end) => parse_escape(&spec[..end]),
        None => parse_escape(spec),
    };
    if label.is_empty() {
        return Err(KeySpecError::EmptyLabel(spec.to_string()));
    }
    Ok(Some(label))
}

/// The literal output text of a key spec.
///
/// An explicit output part is returned as written (escapes resolved) unless
/// it is a `!code/` reference. Without an explicit output, a label spanning
/// more than one code point is its own output text; a one-code-point label
/// is emitted as a code instead and has none.
pub fn get_output_text(spec: &str) -> Result<Option<String>, KeySpecError> {
    if let Some(out) = output_part(spec)? {
        if out.starts_with(PREFIX_CODE) {
            return Ok(None);
        }
        let text = parse_escape(out);
        if text.is_empty() {
            return Err(KeySpecError::EmptyOutputText(spec.to_string()));
        }
        return Ok(Some(text));
    }
    let Some(label) = get_label(spec)? else {
        // A bare icon spec emits nothing by itself.
        return Ok(None);
    };
    Ok((label.chars().count() > 1).then_some(label))
}

/// The code emitted by a key spec
pub fn get_code(spec: &str) -> Result<CodeSpec, KeySpecError> {
    if let Some(out) = output_part(spec)? {
        if let Some(name) = out.strip_prefix(PREFIX_CODE) {
            return parse_code(name).map(CodeSpec::Code);
        }
        let text = parse_escape(out);
        if text.is_empty() {
            return Err(KeySpecError::EmptyOutputText(spec.to_string()));
        }
        return Ok(single_code_point(&text).map_or(CodeSpec::OutputText, CodeSpec::Code));
    }
    let Some(label) = get_label(spec)? else {
        return Err(KeySpecError::EmptyLabel(spec.to_string()));
    };
    Ok(single_code_point(&label).map_or(CodeSpec::OutputText, CodeSpec::Code))
}

/// The icon of a key spec, when it names one
pub fn get_icon(spec: &str) -> Option<KeyIcon> {
    let name_part = spec.strip_prefix(PREFIX_ICON)?;
    let name = match index_of_label_end(name_part, 0) {
        Some(end) => &name_part[..end],
        None => name_part,
    };
    match KeyIcon::from_name(name) {
        Some(icon) => Some(icon),
        None => {
            log::warn!("unknown icon name '{name}' in key spec '{spec}'");
            None
        }
    }
}

fn single_code_point(text: &str) -> Option<i32> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => Some(only as i32),
        _ => None,
    }
}

fn parse_code(text: &str) -> Result<i32, KeySpecError> {
    if let Some(hex) = text.strip_prefix(PREFIX_HEX) {
        return i32::from_str_radix(hex, 16)
            .map_err(|_| KeySpecError::UnknownCode(text.to_string()));
    }
    code::code_from_name(text).ok_or_else(|| KeySpecError::UnknownCode(text.to_string()))
}
