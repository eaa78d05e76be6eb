//! theme registry stuff
use {
    crate::theme::{
        Theme, ThemeVariant, metadata::ThemeMetadata, palette::ColorVariableMap, presets::*,
    },
    hashbrown::HashMap,
};

/// the id of the fallback default theme, used whenever no valid preference
/// exists
pub const FALLBACK_THEME: &str = "default-blue-white-grey";

/// the theme registry
///
/// contents are fixed at construction; the fallback entry is always present
pub struct ThemeRegistry {
    /// the installed themes
    themes: HashMap<&'static str, ThemeMetadata>,
}

impl ThemeRegistry {
    /// make a new registry with the built-in presets
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
        };

        registry.register::<DefaultBlueWhiteGrey>(FALLBACK_THEME);
        registry.register::<DarkMode>("dark-mode");
        registry.register::<AccentGreen>("accent-green");
        registry.register::<AccentOrange>("accent-orange");

        registry
    }

    /// register a theme
    fn register<T: Theme>(&mut self, id: &'static str) {
        self.themes.insert(id, ThemeMetadata::new::<T>(id));
    }

    /// get a theme's color variables by its id
    pub fn get_theme(&self, id: &str) -> Option<ColorVariableMap> {
        self.themes.get(id).map(|meta| meta.get_colors())
    }

    /// whether a theme id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// the full color variables of the fallback default theme
    pub fn fallback(&self) -> ColorVariableMap {
        self.get_theme(FALLBACK_THEME)
            .expect("fallback theme is always registered")
    }

    /// get the metadata of a theme
    pub fn get_metadata(&self, id: &str) -> Option<&ThemeMetadata> {
        self.themes.get(id)
    }

    /// list available themes
    pub fn list_themes(&self) -> Vec<&'static str> {
        self.themes.keys().copied().collect()
    }

    /// list themes by variant
    pub fn list_by_variant(&self, variant: ThemeVariant) -> Vec<&'static str> {
        self.themes
            .iter()
            .filter(|(_, meta)| meta.variant == variant)
            .map(|(id, _)| *id)
            .collect()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
