// Morekeys Key Icons
// Typed icon identifiers resolved from `!icon/` key specs

use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Icon drawn on a key instead of a text label
///
/// The variant names map to the snake_case icon names written in key specs,
/// e.g. `!icon/shift_key`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KeyIcon {
    ShiftKey,
    ShiftKeyShifted,
    DeleteKey,
    SettingsKey,
    SpaceKey,
    EnterKey,
    SearchKey,
    TabKey,
    ShortcutKey,
    LanguageSwitchKey,
    ZwnjKey,
    ZwjKey,
}

impl KeyIcon {
    /// Resolve an icon name as written in a key spec
    pub fn from_name(name: &str) -> Option<KeyIcon> {
        name.parse().ok()
    }

    /// The name used in key specs
    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}
