// Morekeys Key Descriptor
// Decoded form of one "more key": the popup key shown while long-pressing
// its parent key

use std::fmt;

use serde::Serialize;

use crate::casing::{self, Locale};
use crate::code;
use crate::error::KeySpecError;
use crate::icon::KeyIcon;
use crate::spec::parser::{self, CodeSpec};
use crate::spec::{merger, splitter, PREFIX_ICON};

/// What a more key emits when tapped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOutput {
    /// A single code point, or a negative function code.
    Code(i32),
    /// Literal text, for keys with no single code point form.
    Text(String),
}

/// One decoded more key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MoreKeySpec {
    /// Display label. Icon specs carry none.
    pub label: Option<String>,
    /// Code point or literal text the key emits.
    pub output: KeyOutput,
    /// Icon drawn instead of the label.
    pub icon: Option<KeyIcon>,
}

impl MoreKeySpec {
    /// Decode a single key spec, applying locale uppercasing when asked.
    ///
    /// A key whose uppercased code point has no single code point form, such
    /// as the German Eszett whose upper case spelling is "SS", falls back to
    /// emitting its uppercased label as text.
    pub fn parse(
        spec: &str,
        needs_upper_case: bool,
        locale: &Locale,
    ) -> Result<Self, KeySpecError> {
        if spec.is_empty() {
            return Err(KeySpecError::EmptySpec);
        }
        let label = parser::get_label(spec)?
            .map(|label| casing::upper_case_string(&label, needs_upper_case, locale));
        let output = match parser::get_code(spec)? {
            CodeSpec::Code(raw) => match casing::upper_case_code(raw, needs_upper_case, locale) {
                Some(code) => KeyOutput::Code(code),
                None => {
                    let text = match &label {
                        Some(label) => label.clone(),
                        None => casing::upper_case_string(
                            &parser::get_output_text(spec)?.unwrap_or_default(),
                            needs_upper_case,
                            locale,
                        ),
                    };
                    KeyOutput::Text(text)
                }
            },
            CodeSpec::OutputText => {
                let text = parser::get_output_text(spec)?
                    .ok_or_else(|| KeySpecError::EmptyOutputText(spec.to_string()))?;
                KeyOutput::Text(casing::upper_case_string(&text, needs_upper_case, locale))
            }
        };
        let icon = parser::get_icon(spec);
        Ok(Self {
            label,
            output,
            icon,
        })
    }
}

impl fmt::Display for MoreKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.icon {
            Some(icon) => format!("{}{}", PREFIX_ICON, icon.name()),
            None => self.label.clone().unwrap_or_default(),
        };
        let output = match &self.output {
            KeyOutput::Code(code) => code::printable_code(*code),
            KeyOutput::Text(text) => text.clone(),
        };
        // The compact form when the label is the single character the key
        // emits.
        if let KeyOutput::Code(code) = &self.output {
            let mut chars = label.chars();
            if let (Some(only), None) = (chars.next(), chars.next()) {
                if only as i32 == *code {
                    return f.write_str(&output);
                }
            }
        }
        write!(f, "{label}|{output}")
    }
}

/// Split, merge and decode a full more keys definition.
///
/// `specs` is the static template attached to the parent key; `additional`
/// holds the dynamically configured specs substituted over its `%`
/// placeholders. Returns one descriptor per surviving spec, in order.
pub fn parse_more_keys(
    specs: Option<&str>,
    additional: Option<&str>,
    needs_upper_case: bool,
    locale: &Locale,
) -> Result<Vec<MoreKeySpec>, KeySpecError> {
    let specs = specs.and_then(splitter::split_key_specs);
    let additional = additional.and_then(splitter::split_key_specs);
    let Some(merged) = merger::insert_additional_specs(specs.as_deref(), additional.as_deref())
    else {
        return Ok(Vec::new());
    };
    log::debug!("decoding {} more key specs", merged.len());
    merged
        .iter()
        .map(|spec| MoreKeySpec::parse(spec, needs_upper_case, locale))
        .collect()
}
