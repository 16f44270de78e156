// Morekeys Spec Parsing
// Splitting, merging and option extraction over key spec strings

pub mod merger;
pub mod options;
pub mod parser;
pub mod splitter;

/// Separates individual key specs in a more keys definition.
pub const SEPARATOR: char = ',';
/// Escapes the following character, including the separator itself.
pub const ESCAPE: char = '\\';
/// Whole-token placeholder replaced by additional specs at merge time.
pub const ADDITIONAL_SPEC_MARKER: &str = "%";
/// Separates a key label from its output part inside one spec.
pub const LABEL_END: char = '|';
/// Marks an icon key spec.
pub const PREFIX_ICON: &str = "!icon/";
/// Marks an explicit code in an output part.
pub const PREFIX_CODE: &str = "!code/";
/// Marks a hexadecimal code point literal inside a `!code/` part.
pub const PREFIX_HEX: &str = "0x";

pub use merger::insert_additional_specs;
pub use options::{extract_bool_value, extract_int_value};
pub use parser::{get_code, get_icon, get_label, get_output_text, parse_escape, CodeSpec};
pub use splitter::{filter_out_empty, split_key_specs};
