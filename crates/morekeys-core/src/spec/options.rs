// Morekeys Spec Options
// Extraction of typed option values out of a spec list

use crate::error::KeySpecError;

/// Extract a named integer option from a spec list.
///
/// Every spec starting with `prefix` is consumed; the first one encountered
/// provides the value, parsed as a base-10 integer from the text after the
/// prefix. Later matches are consumed without being parsed. Returns the
/// value together with the residual list of untouched specs; when nothing
/// matches, the default is returned and the residual equals the input.
pub fn extract_int_value(
    specs: &[String],
    prefix: &str,
    default: i32,
) -> Result<(i32, Vec<String>), KeySpecError> {
    let mut value = None;
    let mut residual = Vec::with_capacity(specs.len());
    for spec in specs {
        let Some(rest) = spec.strip_prefix(prefix) else {
            residual.push(spec.clone());
            continue;
        };
        if value.is_none() {
            let parsed = rest
                .parse::<i32>()
                .map_err(|_| KeySpecError::MalformedIntOption {
                    prefix: prefix.to_string(),
                    spec: spec.clone(),
                })?;
            value = Some(parsed);
        }
    }
    Ok((value.unwrap_or(default), residual))
}

/// Extract a boolean marker option from a spec list.
///
/// Every spec exactly equal to `marker` is consumed. Returns whether at
/// least one was present, together with the residual list. Absence of the
/// marker is not an error.
pub fn extract_bool_value(specs: &[String], marker: &str) -> (bool, Vec<String>) {
    let mut found = false;
    let mut residual = Vec::with_capacity(specs.len());
    for spec in specs {
        if spec.as_str() == marker {
            found = true;
        } else {
            residual.push(spec.clone());
        }
    }
    (found, residual)
}
