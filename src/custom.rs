//! custom color set and field merging stuff
use {
    crate::{
        color::Color,
        error::{Result, ThemeError},
        store::KEY_CUSTOM_THEME,
        theme::palette::ColorVariableMap,
    },
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
};

/// one of the three user-pickable custom color fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    /// the background color
    Background,
    /// the text color
    Text,
    /// the accent color
    Accent,
}

/// a user-assembled three-color set
///
/// persisted as one unit under the `customTheme` key, serialized as
/// `{ "background": …, "text": …, "accent": … }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SmartDefault)]
#[serde(deny_unknown_fields)]
pub struct CustomColorSet {
    /// the custom background color
    #[default(Color::known("#FFFFFF"))]
    pub background: Color,

    /// the custom text color
    #[default(Color::known("#333333"))]
    pub text: Color,

    /// the custom accent color
    #[default(Color::known("#007BFF"))]
    pub accent: Color,
}

impl CustomColorSet {
    /// produce a new set with exactly one field replaced
    ///
    /// callers must pass the currently committed set so that the other two
    /// fields carry their latest values forward; three sequential single
    /// field edits then yield a set holding all three new values
    pub fn with_field(&self, field: ColorField, value: Color) -> Self {
        let mut updated = self.clone();

        match field {
            ColorField::Background => updated.background = value,
            ColorField::Text => updated.text = value,
            ColorField::Accent => updated.accent = value,
        }

        updated
    }

    /// the mapping this set resolves to
    ///
    /// only the three custom slots are filled; the derived slots stay empty
    /// so the sink's baseline governs them
    pub fn to_variable_map(&self) -> ColorVariableMap {
        ColorVariableMap::new(
            self.background.clone(),
            self.text.clone(),
            self.accent.clone(),
        )
    }

    /// seed a set from a predefined theme's background/text/accent
    pub fn from_theme(vars: &ColorVariableMap) -> Self {
        Self {
            background: vars.background.clone(),
            text: vars.text.clone(),
            accent: vars.accent.clone(),
        }
    }

    /// serialize for persistence under the `customTheme` key
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// parse a persisted `customTheme` value
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| ThemeError::CorruptPersistedData {
            key: KEY_CUSTOM_THEME.to_owned(),
            reason: e.to_string(),
        })
    }
}
