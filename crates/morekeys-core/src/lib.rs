// Morekeys Core Library
// Parsing of keyboard "more keys" specification strings: the comma separated
// mini-language describing the popup keys attached to a single keyboard key

pub mod casing;
pub mod code;
pub mod error;
pub mod icon;
pub mod more_key;
pub mod spec;

pub use casing::{upper_case_code, upper_case_string, Locale};
pub use error::KeySpecError;
pub use icon::KeyIcon;
pub use more_key::{parse_more_keys, KeyOutput, MoreKeySpec};
pub use spec::{
    extract_bool_value, extract_int_value, filter_out_empty, insert_additional_specs,
    split_key_specs,
};
