//! color parsing and validation
use {
    crate::error::{Result, ThemeError},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// a validated color value, stored as canonical lowercase `#rrggbb`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// parse a hex color string (`#rrggbb` or `#rgb`, any case) into a
    /// canonical color
    pub fn parse(value: &str) -> Result<Self> {
        let (r, g, b) =
            parse_hex_channels(value).ok_or_else(|| ThemeError::InvalidColor(value.to_owned()))?;

        Ok(Self(format!("#{:02x}{:02x}{:02x}", r, g, b)))
    }

    /// build a color from a known-good palette literal
    ///
    /// only for built-in palette values, panics on malformed input
    pub(crate) fn known(value: &str) -> Self {
        Self::parse(value).expect("built-in palette color is malformed")
    }

    /// the canonical `#rrggbb` form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// the individual rgb channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_channels(&self.0).expect("canonical color is always parseable")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.0
    }
}

/// parse a hex code into rgb channels
fn parse_hex_channels(color_str: &str) -> Option<(u8, u8, u8)> {
    let hex = color_str.strip_prefix('#')?;

    // multibyte input can hit the byte lengths below, keep slicing safe
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
