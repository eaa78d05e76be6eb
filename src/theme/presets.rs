//! built-in theme presets
use crate::{
    color::Color,
    theme::{Theme, ThemeVariant, palette::ColorVariableMap},
};

macro_rules! impl_theme {
    ($name:ident, $display_name:expr, $variant:expr, $colors:expr) => {
        #[derive(Clone, Default)]
        /// a built-in theme preset
        pub struct $name;

        impl Theme for $name {
            fn colors() -> ColorVariableMap {
                $colors
            }

            fn name() -> &'static str {
                $display_name
            }

            fn variant() -> ThemeVariant {
                $variant
            }
        }
    };
}

impl_theme!(
    DefaultBlueWhiteGrey,
    "Default Blue White Grey",
    ThemeVariant::Light,
    {
        ColorVariableMap::new(
            Color::known("#FFFFFF"),
            Color::known("#333333"),
            Color::known("#007BFF"),
        )
        .with_primary(Color::known("#003366"))
        .with_secondary(Color::known("#007BFF"))
        .with_subtle_background(Color::known("#F2F2F2"))
    }
);

impl_theme!(DarkMode, "Dark Mode", ThemeVariant::Dark, {
    ColorVariableMap::new(
        Color::known("#121212"),
        Color::known("#FFFFFF"),
        Color::known("#00FFFF"),
    )
    .with_primary(Color::known("#1A1A1A"))
    .with_secondary(Color::known("#E0E0E0"))
    .with_subtle_background(Color::known("#212121"))
});

impl_theme!(AccentGreen, "Accent Green", ThemeVariant::Light, {
    ColorVariableMap::new(
        Color::known("#FFFFFF"),
        Color::known("#333333"),
        Color::known("#32CD32"),
    )
    .with_primary(Color::known("#003366"))
    .with_secondary(Color::known("#007BFF"))
    .with_subtle_background(Color::known("#F2F2F2"))
});

impl_theme!(AccentOrange, "Accent Orange", ThemeVariant::Light, {
    ColorVariableMap::new(
        Color::known("#FFFFFF"),
        Color::known("#333333"),
        Color::known("#FFA500"),
    )
    .with_primary(Color::known("#003366"))
    .with_secondary(Color::known("#007BFF"))
    .with_subtle_background(Color::known("#F2F2F2"))
});
