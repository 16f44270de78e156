// End-to-end scenarios over the full spec pipeline:
// split -> option extraction -> merge -> per-spec decoding

use morekeys_core::{
    extract_bool_value, extract_int_value, insert_additional_specs, parse_more_keys,
    split_key_specs, KeyOutput, Locale, MoreKeySpec,
};

fn owned(specs: &[&str]) -> Vec<String> {
    specs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn punctuation_template_with_user_configured_entries() {
    // A period key with a static template; the user configured two extra
    // punctuation entries that land on the '%' placeholders.
    let template = split_key_specs("\\,,%,.,%,!,?").unwrap();
    let additional = split_key_specs(";,:").unwrap();

    let merged = insert_additional_specs(Some(&template), Some(&additional)).unwrap();
    assert_eq!(merged, owned(&["\\,", ";", ".", ":", "!", "?"]));

    let locale = Locale::default();
    let keys: Vec<MoreKeySpec> = merged
        .iter()
        .map(|spec| MoreKeySpec::parse(spec, false, &locale).unwrap())
        .collect();
    assert_eq!(keys[0].label.as_deref(), Some(","));
    assert_eq!(keys[0].output, KeyOutput::Code(',' as i32));
    assert_eq!(keys[1].output, KeyOutput::Code(';' as i32));
    assert_eq!(keys[5].output, KeyOutput::Code('?' as i32));
}

#[test]
fn options_are_extracted_before_merging() {
    let specs = split_key_specs("!fixedColumnOrder!,maxColumns=2,a,%").unwrap();

    let (fixed, residual) = extract_bool_value(&specs, "!fixedColumnOrder!");
    assert!(fixed);
    let (columns, residual) = extract_int_value(&residual, "maxColumns=", -1).unwrap();
    assert_eq!(columns, 2);
    assert_eq!(residual, owned(&["a", "%"]));

    let additional = owned(&["b", "c"]);
    let merged = insert_additional_specs(Some(&residual), Some(&additional)).unwrap();
    assert_eq!(merged, owned(&["a", "b", "c"]));
}

#[test]
fn merge_prepend_fallback_when_template_has_no_marker() {
    let keys = parse_more_keys(Some("x,y"), Some("1,2"), false, &Locale::default()).unwrap();
    let labels: Vec<_> = keys.iter().map(|k| k.label.as_deref().unwrap()).collect();
    assert_eq!(labels, ["1", "2", "x", "y"]);
}

#[test]
fn merge_append_fallback_with_leftover_additional() {
    let keys = parse_more_keys(Some("x,%,y"), Some("1,2,3"), false, &Locale::default()).unwrap();
    let labels: Vec<_> = keys.iter().map(|k| k.label.as_deref().unwrap()).collect();
    assert_eq!(labels, ["x", "1", "y", "2", "3"]);
}

#[test]
fn merge_fallbacks_are_mutually_exclusive() {
    // Once a single marker consumed an additional spec, the remaining
    // additional specs may only be appended, never prepended.
    let keys = parse_more_keys(Some("%,x"), Some("1,2"), false, &Locale::default()).unwrap();
    let labels: Vec<_> = keys.iter().map(|k| k.label.as_deref().unwrap()).collect();
    assert_eq!(labels, ["1", "x", "2"]);
}

#[test]
fn uppercasing_applies_across_the_pipeline() {
    let keys = parse_more_keys(Some("à,ß,a|bc"), None, true, &Locale::new("de_DE")).unwrap();
    assert_eq!(keys[0].label.as_deref(), Some("À"));
    assert_eq!(keys[0].output, KeyOutput::Code('À' as i32));
    assert_eq!(keys[1].label.as_deref(), Some("SS"));
    assert_eq!(keys[1].output, KeyOutput::Text("SS".to_string()));
    assert_eq!(keys[2].output, KeyOutput::Text("BC".to_string()));
}

#[test]
fn escaped_commas_survive_into_decoded_keys() {
    let keys = parse_more_keys(Some("a\\,b,c"), None, false, &Locale::default()).unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].label.as_deref(), Some("a,b"));
    assert_eq!(keys[0].output, KeyOutput::Text("a,b".to_string()));
    assert_eq!(keys[1].output, KeyOutput::Code('c' as i32));
}

#[test]
fn icon_specs_decode_through_the_pipeline() {
    use morekeys_core::KeyIcon;

    let keys = parse_more_keys(
        Some("!icon/settings_key|!code/key_settings,a"),
        None,
        false,
        &Locale::default(),
    )
    .unwrap();
    assert_eq!(keys[0].icon, Some(KeyIcon::SettingsKey));
    assert_eq!(keys[0].label, None);
    assert_eq!(keys[1].icon, None);
}

#[test]
fn malformed_specs_fail_the_whole_build() {
    let result = parse_more_keys(Some("a,b|"), None, false, &Locale::default());
    assert!(result.is_err());
}
