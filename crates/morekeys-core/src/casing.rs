// Morekeys Locale Casing
// Locale-sensitive uppercasing of key labels and code points

use smallvec::SmallVec;

/// Locale tag directing case transformation, e.g. "tr_TR"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    tag: String,
}

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// The bare language subtag of the locale tag
    pub fn language(&self) -> &str {
        self.tag.split(['_', '-']).next().unwrap_or("")
    }

    // Turkish and Azerbaijani keep the dot when the lowercase i is uppercased.
    fn has_dotted_capital_i(&self) -> bool {
        matches!(self.language(), "tr" | "az")
    }
}

/// Uppercase a label for the locale when the caller asks for it
pub fn upper_case_string(text: &str, needs_upper_case: bool, locale: &Locale) -> String {
    if !needs_upper_case {
        return text.to_string();
    }
    if locale.has_dotted_capital_i() && text.contains('i') {
        let mut upper = String::with_capacity(text.len());
        for c in text.chars() {
            if c == 'i' {
                upper.push('İ');
            } else {
                upper.extend(c.to_uppercase());
            }
        }
        return upper;
    }
    text.to_uppercase()
}

/// Uppercase a single code point for the locale
///
/// Returns None when the uppercase form is not a single code point, such as
/// the German Eszett whose uppercase spelling is "SS". Function codes pass
/// through untouched.
pub fn upper_case_code(code: i32, needs_upper_case: bool, locale: &Locale) -> Option<i32> {
    if !needs_upper_case {
        return Some(code);
    }
    let Some(c) = u32::try_from(code).ok().and_then(char::from_u32) else {
        return Some(code);
    };
    if c == 'i' && locale.has_dotted_capital_i() {
        return Some('İ' as i32);
    }
    let upper: SmallVec<[char; 3]> = c.to_uppercase().collect();
    match upper.as_slice() {
        [single] => Some(*single as i32),
        _ => None,
    }
}
