//! predefined theme catalog stuff
pub mod metadata;
pub mod palette;
pub mod presets;
pub mod registry;

use crate::theme::palette::ColorVariableMap;

/// a predefined theme
pub trait Theme {
    /// the color variables of the theme
    fn colors() -> ColorVariableMap;
    /// the display name of the theme
    fn name() -> &'static str;
    /// the theme variant (light/dark)
    fn variant() -> ThemeVariant;
}

/// a theme variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// light variant
    Light,
    /// dark variant
    Dark,
}
